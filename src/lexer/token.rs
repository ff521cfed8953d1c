//! Token definitions for the bind-statement tokenizer.
//!
//! Unlike a general-purpose SQL lexer, this dialect only needs eight coarse
//! kinds: the binder cares about *what a span of source is*, not its full
//! grammatical role, so there is no per-keyword or per-operator enum here.

use std::fmt;

/// The kind of token. See spec §3 for the classification rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Reserved SQL keyword, matched case-insensitively.
    Keyword,
    /// Identifier, bare (`abc_1`) or double-quoted (`"Name"`).
    Ident,
    /// Bind-variable placeholder starting with `:`.
    Bind,
    /// Numeric literal, possibly signed, possibly scientific notation.
    Number,
    /// Single-quoted string literal.
    String,
    /// Comment whose body begins with `+` (`/*+ ... */` or `--+ ...`).
    Hint,
    /// Any other comment.
    Comment,
    /// Whitespace and/or punctuation between meaningful tokens.
    Conn,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Ident => "ident",
            TokenKind::Bind => "bind",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Hint => "hint",
            TokenKind::Comment => "comment",
            TokenKind::Conn => "conn",
        };
        write!(f, "{s}")
    }
}

/// A single token covering `[start, start + text.chars().count())` of the
/// source statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Start offset, in characters, within the source statement.
    pub start: usize,
    /// The exact substring this token covers.
    pub text: String,
    /// The token's kind.
    pub kind: TokenKind,
}

impl Token {
    pub fn new(start: usize, text: impl Into<String>, kind: TokenKind) -> Self {
        Self {
            start,
            text: text.into(),
            kind,
        }
    }

    /// Length of this token, in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// End offset (exclusive), in characters.
    pub fn end(&self) -> usize {
        self.start + self.len()
    }

    /// Lowercased payload, for keyword/partition-name comparisons.
    pub fn lower(&self) -> String {
        self.text.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_accounts_for_multichar_payload() {
        let t = Token::new(4, "select", TokenKind::Keyword);
        assert_eq!(t.end(), 10);
    }

    #[test]
    fn display_matches_spec_names() {
        assert_eq!(TokenKind::Conn.to_string(), "conn");
        assert_eq!(TokenKind::Hint.to_string(), "hint");
    }
}
