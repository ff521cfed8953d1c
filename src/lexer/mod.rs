//! Statement tokenizer.
//!
//! Five ordered, destructive passes extract string-like sections, bind
//! variables, identifiers, and numbers from a mutable working copy of the
//! statement, blanking each claimed range out of that copy so later passes
//! never misclaim characters inside an already-classified token. A sixth
//! pass fills whatever ranges remain with `conn` tokens. See spec §4.1 for
//! the pass-by-pass contract this module implements.
//!
//! The tokenizer is total: it never rejects input, and unterminated
//! strings/comments/quoted-identifiers simply run to end-of-input.

mod keywords;
mod token;

pub use keywords::{is_keyword, KEYWORDS};
pub use token::{Token, TokenKind};

/// Characters after which a `+`/`-` immediately preceding a number is
/// absorbed into the number rather than left as a binary operator. See
/// spec §4.1 Pass 4.
const SIGN_CONTEXT_OPERATORS: &[char] = &['+', '-', '*', '/', '(', '=', '<', '>', '|', ',', '['];

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$' || c == '#'
}

fn is_bind_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$' || c == '#'
}

/// An ordered, gapless, non-overlapping sequence of tokens covering a
/// statement.
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_vec(self) -> Vec<Token> {
        self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The token covering character position `pos`, if any. Tokens are kept
    /// sorted by start offset, so this is a binary search (spec §9).
    pub fn token_at(&self, pos: usize) -> Option<&Token> {
        match self.tokens.binary_search_by_key(&pos, |t| t.start) {
            Ok(i) => Some(&self.tokens[i]),
            Err(0) => None,
            Err(i) => {
                let t = &self.tokens[i - 1];
                if pos < t.end() {
                    Some(t)
                } else {
                    None
                }
            }
        }
    }
}

/// Tokenize `stmt` into a [`TokenStream`].
pub fn tokenize(stmt: &str) -> TokenStream {
    TokenStream {
        tokens: tokenize_raw(stmt),
    }
}

fn tokenize_raw(stmt: &str) -> Vec<Token> {
    if stmt.is_empty() {
        return Vec::new();
    }

    // Preprocessing: CRs become spaces, two trailing sentinel spaces are
    // appended so every internal scan has lookahead room and unterminated
    // sections have somewhere to close. The sentinel is stripped back off
    // in `finalize`.
    let src: Vec<char> = stmt.chars().map(|c| if c == '\r' { ' ' } else { c }).collect();
    let src_len = src.len();

    let mut original = src;
    original.push(' ');
    original.push(' ');
    let working = original.clone();

    let mut scanner = Scanner {
        original,
        working,
        tokens: Vec::new(),
    };

    scanner.pass1_string_like();
    scanner.pass2_bind_variables();
    scanner.pass3_identifiers();
    scanner.pass4_numbers();
    scanner.pass5_reconcile_binds();
    scanner.pass6_fill_connectors();
    scanner.finalize(src_len)
}

/// Holds the immutable original buffer (used for lookbehind decisions that
/// must see through already-blanked regions) and the working buffer that
/// each pass progressively blanks as it claims tokens.
struct Scanner {
    original: Vec<char>,
    working: Vec<char>,
    tokens: Vec<Token>,
}

impl Scanner {
    fn emit_and_blank(&mut self, start: usize, end: usize, kind: TokenKind) {
        let text: String = self.original[start..end].iter().collect();
        for c in &mut self.working[start..end] {
            *c = ' ';
        }
        self.tokens.push(Token::new(start, text, kind));
    }

    // ---- Pass 1: string-like sections -------------------------------

    fn pass1_string_like(&mut self) {
        let len = self.working.len();
        let mut i = 0;
        while i < len {
            if self.working[i] == '/' && i + 1 < len && self.working[i + 1] == '*' {
                let start = i;
                let is_hint = i + 2 < len && self.working[i + 2] == '+';
                let mut j = i + 2;
                let mut closed = false;
                while j + 1 < len {
                    if self.working[j] == '*' && self.working[j + 1] == '/' {
                        j += 2;
                        closed = true;
                        break;
                    }
                    j += 1;
                }
                if !closed {
                    j = len;
                }
                let kind = if is_hint { TokenKind::Hint } else { TokenKind::Comment };
                self.emit_and_blank(start, j, kind);
                i = j;
            } else if self.working[i] == '-' && i + 1 < len && self.working[i + 1] == '-' {
                let start = i;
                let is_hint = i + 2 < len && self.working[i + 2] == '+';
                let mut j = i + 2;
                while j < len && self.working[j] != '\n' {
                    j += 1;
                }
                let kind = if is_hint { TokenKind::Hint } else { TokenKind::Comment };
                self.emit_and_blank(start, j, kind);
                i = j;
            } else if self.working[i] == '"' {
                let start = i;
                let mut j = i + 1;
                while j < len && self.working[j] != '"' {
                    j += 1;
                }
                j = if j < len { j + 1 } else { len };
                self.emit_and_blank(start, j, TokenKind::Ident);
                i = j;
            } else if self.working[i] == '\'' {
                let start = i;
                let mut j = i + 1;
                loop {
                    if j >= len {
                        break;
                    }
                    if self.working[j] == '\'' {
                        if j + 1 < len && self.working[j + 1] == '\'' {
                            j += 2;
                            continue;
                        }
                        j += 1;
                        break;
                    }
                    j += 1;
                }
                self.emit_and_blank(start, j.min(len), TokenKind::String);
                i = j.min(len);
            } else {
                i += 1;
            }
        }
    }

    // ---- Pass 2: bind variables --------------------------------------

    fn pass2_bind_variables(&mut self) {
        let len = self.working.len();
        let mut i = 0;
        while i < len {
            if self.working[i] == ':' {
                if i + 1 < len && self.working[i + 1] == '=' {
                    // `:=` assignment operator: leave both chars for conn.
                    i += 1;
                    continue;
                }
                let start = i;
                let mut j = i + 1;
                if j < len && is_bind_name_char(self.working[j]) {
                    while j < len && is_bind_name_char(self.working[j]) {
                        j += 1;
                    }
                    // Indicator suffix: a second `:` immediately followed by
                    // another identifier run is absorbed too (`:ph1:ind`).
                    if j < len
                        && self.working[j] == ':'
                        && j + 1 < len
                        && is_bind_name_char(self.working[j + 1])
                    {
                        j += 1;
                        while j < len && is_bind_name_char(self.working[j]) {
                            j += 1;
                        }
                    }
                }
                self.emit_and_blank(start, j, TokenKind::Bind);
                i = j;
            } else {
                i += 1;
            }
        }
    }

    // ---- Pass 3: identifiers ------------------------------------------

    fn char_at(&self, idx: isize) -> char {
        if idx < 0 {
            return '\0';
        }
        let idx = idx as usize;
        *self.working.get(idx).unwrap_or(&'\0')
    }

    /// The scientific-notation guard from spec §4.1 Pass 3: is the `e`/`E`
    /// at `i` the exponent marker of a number rather than an identifier?
    fn is_exponent_marker(&self, i: usize) -> bool {
        let prev1 = self.char_at(i as isize - 1);
        let prev2 = self.char_at(i as isize - 2);
        let next1 = self.char_at(i as isize + 1);
        let next2 = self.char_at(i as isize + 2);

        let next_ok = next1.is_ascii_digit() || ((next1 == '+' || next1 == '-') && next2.is_ascii_digit());
        let prev_ok = prev1.is_ascii_digit() || (prev1 == '.' && prev2.is_ascii_digit());
        next_ok && prev_ok
    }

    fn pass3_identifiers(&mut self) {
        let len = self.working.len();
        let mut i = 0;
        while i < len {
            let c = self.working[i];
            if c.is_ascii_alphabetic() {
                if (c == 'e' || c == 'E') && self.is_exponent_marker(i) {
                    i += 1;
                    continue;
                }
                let start = i;
                i += 1;
                while i < len && is_ident_continue(self.working[i]) {
                    i += 1;
                }
                let text: String = self.original[start..i].iter().collect();
                let kind = if is_keyword(&text.to_lowercase()) {
                    TokenKind::Keyword
                } else {
                    TokenKind::Ident
                };
                for c in &mut self.working[start..i] {
                    *c = ' ';
                }
                self.tokens.push(Token::new(start, text, kind));
            } else {
                i += 1;
            }
        }
    }

    // ---- Pass 4: numbers -----------------------------------------------

    /// Try to parse a number grammar starting at `j` (a digit or `.` in the
    /// working buffer). Returns the exclusive end offset, or `None` if a
    /// leading `.` turns out not to be followed by a digit (spec §4.1: "a
    /// bare `.` not followed by a digit ... is not a number").
    fn scan_number_body(&self, j: usize) -> Option<usize> {
        let len = self.working.len();
        let mut k = j;
        if self.working[k] == '.' {
            if k + 1 >= len || !self.working[k + 1].is_ascii_digit() {
                return None;
            }
            k += 1;
            while k < len && self.working[k].is_ascii_digit() {
                k += 1;
            }
        } else {
            while k < len && self.working[k].is_ascii_digit() {
                k += 1;
            }
            if k < len && self.working[k] == '.' {
                k += 1;
                while k < len && self.working[k].is_ascii_digit() {
                    k += 1;
                }
            }
        }
        if k < len && (self.working[k] == 'e' || self.working[k] == 'E') {
            let mut m = k + 1;
            if m < len && (self.working[m] == '+' || self.working[m] == '-') {
                m += 1;
            }
            if m < len && self.working[m].is_ascii_digit() {
                while m < len && self.working[m].is_ascii_digit() {
                    m += 1;
                }
                k = m;
            }
        }
        Some(k)
    }

    /// Nearest non-whitespace character strictly before `from`, scanning the
    /// **original** (unblanked) source — spec §4.1 is explicit that sign
    /// absorption is decided against the original text, not the working
    /// buffer, so that an already-claimed identifier or keyword just before
    /// the sign is still visible.
    fn prev_non_ws(&self, from: usize) -> Option<usize> {
        let mut i = from;
        while i > 0 {
            i -= 1;
            if !self.original[i].is_whitespace() {
                return Some(i);
            }
        }
        None
    }

    fn position_in_keyword_token(&self, pos: usize) -> bool {
        self.tokens
            .iter()
            .any(|t| t.kind == TokenKind::Keyword && t.start <= pos && pos < t.end())
    }

    fn sign_qualifies(&self, sign_pos: usize) -> bool {
        match self.prev_non_ws(sign_pos) {
            None => false,
            Some(m) => {
                SIGN_CONTEXT_OPERATORS.contains(&self.original[m]) || self.position_in_keyword_token(m)
            }
        }
    }

    /// A bare digit run immediately wrapped in `{`/`}` or immediately
    /// preceded by `#` is a normalization placeholder the binder itself
    /// emitted (`{k}` for a digit-run substitution, `#k` for a partition
    /// index), not a numeric literal. Claiming it here would reclassify an
    /// already-canonical placeholder as a fresh `number` token the next time
    /// the output is tokenized, so binding a bound statement would no
    /// longer be a fixed point. Checked against `original` since nothing
    /// upstream blanks `{`, `}`, or `#`.
    fn is_placeholder_digits(&self, start: usize, end: usize) -> bool {
        let all_digits = self.original[start..end].iter().all(|c| c.is_ascii_digit());
        if !all_digits {
            return false;
        }
        let preceded_by_hash = start > 0 && self.original[start - 1] == '#';
        let braced = start > 0
            && self.original[start - 1] == '{'
            && end < self.original.len()
            && self.original[end] == '}';
        preceded_by_hash || braced
    }

    fn pass4_numbers(&mut self) {
        let len = self.working.len();
        let mut search_from = 0;
        loop {
            let mut j = search_from;
            while j < len && !(self.working[j].is_ascii_digit() || self.working[j] == '.') {
                j += 1;
            }
            if j >= len {
                break;
            }

            match self.scan_number_body(j) {
                None => {
                    search_from = j + 1;
                }
                Some(end) if self.is_placeholder_digits(j, end) => {
                    search_from = end;
                }
                Some(end) => {
                    let mut num_start = j;
                    if let Some(sign_pos) = self.prev_non_ws(j).filter(|&p| {
                        self.original[p] == '+' || self.original[p] == '-'
                    }) {
                        if self.sign_qualifies(sign_pos) {
                            num_start = sign_pos;
                        }
                    }
                    let text: String = self.original[num_start..end].iter().collect();
                    for c in &mut self.working[num_start..end] {
                        *c = ' ';
                    }
                    self.tokens.push(Token::new(num_start, text, TokenKind::Number));
                    search_from = end;
                }
            }
        }
    }

    // ---- Pass 5: bind reconciliation -----------------------------------

    fn pass5_reconcile_binds(&mut self) {
        self.tokens.sort_by_key(|t| t.start);
        let toks = std::mem::take(&mut self.tokens);
        let mut merged = Vec::with_capacity(toks.len());
        let mut i = 0;
        while i < toks.len() {
            let cur = &toks[i];
            if cur.kind == TokenKind::Bind && cur.text == ":" {
                if let Some(next) = toks.get(i + 1) {
                    if next.kind == TokenKind::Ident {
                        let start = cur.start;
                        let end = next.end();
                        let text: String = self.original[start..end].iter().collect();
                        merged.push(Token::new(start, text, TokenKind::Bind));
                        i += 2;
                        continue;
                    }
                }
            }
            merged.push(toks[i].clone());
            i += 1;
        }
        self.tokens = merged;
    }

    // ---- Pass 6: connector filling --------------------------------------

    fn pass6_fill_connectors(&mut self) {
        self.tokens.sort_by_key(|t| t.start);
        let len = self.working.len();
        let toks = std::mem::take(&mut self.tokens);
        let mut filled = Vec::with_capacity(toks.len() * 2);
        let mut cursor = 0usize;
        for t in toks {
            if t.start > cursor {
                let text: String = self.original[cursor..t.start].iter().collect();
                filled.push(Token::new(cursor, text, TokenKind::Conn));
            }
            cursor = t.end();
            filled.push(t);
        }
        if cursor < len {
            let text: String = self.original[cursor..len].iter().collect();
            filled.push(Token::new(cursor, text, TokenKind::Conn));
        }
        self.tokens = filled;
    }

    /// Drop the two synthetic trailing sentinel characters from the
    /// observable token stream (spec §3: "subject only to a single trailing
    /// sentinel-whitespace pair... removed from observable output").
    fn finalize(self, src_len: usize) -> Vec<Token> {
        let mut out = Vec::with_capacity(self.tokens.len());
        for t in self.tokens {
            if t.start >= src_len {
                continue;
            }
            if t.end() > src_len {
                let trimmed: String = t.text.chars().take(src_len - t.start).collect();
                out.push(Token::new(t.start, trimmed, t.kind));
            } else {
                out.push(t);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(stmt: &str) -> Vec<(TokenKind, String)> {
        tokenize(stmt)
            .into_vec()
            .into_iter()
            .map(|t| (t.kind, t.text))
            .collect()
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn covers_simple_select() {
        let toks = kinds("select * from t where x = 2");
        let joined: String = toks.iter().map(|(_, t)| t.as_str()).collect();
        assert_eq!(joined, "select * from t where x = 2");
    }

    #[test]
    fn number_basic() {
        let toks = kinds("x = 2");
        assert!(toks.iter().any(|(k, t)| *k == TokenKind::Number && t == "2"));
    }

    #[test]
    fn sign_absorbed_after_operator() {
        let toks = kinds("where + 1 = 3");
        assert!(toks
            .iter()
            .any(|(k, t)| *k == TokenKind::Number && t == "+ 1"));
    }

    #[test]
    fn sign_not_absorbed_after_identifier() {
        let toks = kinds("a + 1");
        assert!(toks.iter().any(|(k, t)| *k == TokenKind::Number && t == "1"));
        assert!(toks
            .iter()
            .any(|(k, t)| *k == TokenKind::Conn && t.contains('+')));
    }

    #[test]
    fn scientific_notation_not_mistaken_for_identifier() {
        let toks = kinds("x + +1.e-123 > :ph");
        assert!(toks
            .iter()
            .any(|(k, t)| *k == TokenKind::Number && t == "+1.e-123"));
    }

    #[test]
    fn doubled_single_quote_does_not_close_string() {
        let toks = kinds("'it''s'");
        assert_eq!(toks, vec![(TokenKind::String, "'it''s'".to_string())]);
    }

    #[test]
    fn quoted_identifier_preserves_case() {
        let toks = kinds("\"AA\"");
        assert_eq!(toks, vec![(TokenKind::Ident, "\"AA\"".to_string())]);
    }

    #[test]
    fn hint_detected_for_block_and_line_comments() {
        let toks = kinds("/*+ x */ --+ y\n");
        assert_eq!(toks[0].0, TokenKind::Hint);
        assert!(toks.iter().any(|(k, t)| *k == TokenKind::Hint && t == "--+ y"));
    }

    #[test]
    fn plain_comment_is_not_a_hint() {
        let toks = kinds("/* x */");
        assert_eq!(toks, vec![(TokenKind::Comment, "/* x */".to_string())]);
    }

    #[test]
    fn unterminated_string_runs_to_end() {
        let toks = kinds("'abc");
        assert_eq!(toks, vec![(TokenKind::String, "'abc".to_string())]);
    }

    #[test]
    fn unterminated_block_comment_runs_to_end() {
        let toks = kinds("/* abc");
        assert_eq!(toks, vec![(TokenKind::Comment, "/* abc".to_string())]);
    }

    #[test]
    fn bind_variable_basic() {
        let toks = kinds(":B1");
        assert_eq!(toks, vec![(TokenKind::Bind, ":B1".to_string())]);
    }

    #[test]
    fn bind_with_indicator_suffix() {
        let toks = kinds(":ph1:ind");
        assert_eq!(toks, vec![(TokenKind::Bind, ":ph1:ind".to_string())]);
    }

    #[test]
    fn bind_assignment_operator_excluded() {
        let toks = kinds("x := 1");
        assert!(toks.iter().all(|(k, _)| *k != TokenKind::Bind));
    }

    #[test]
    fn whitespace_separated_bind_reconciles() {
        let toks = kinds(":ph3= \"t103\"");
        assert!(toks.iter().any(|(k, t)| *k == TokenKind::Bind && t == ":ph3"));
    }

    #[test]
    fn keyword_vs_ident_classification() {
        let toks = kinds("select id from t");
        assert_eq!(toks[0], (TokenKind::Keyword, "select".to_string()));
        // `id` is a deliberately-excluded column-name-like, so it's an ident.
        assert!(toks.iter().any(|(k, t)| *k == TokenKind::Ident && t == "id"));
    }

    #[test]
    fn leading_whitespace_becomes_a_conn_token() {
        let toks = kinds("  select 1");
        assert_eq!(toks[0], (TokenKind::Conn, "  ".to_string()));
    }

    #[test]
    fn braced_digit_run_is_not_a_number() {
        let toks = kinds("a{0}");
        assert!(toks.iter().all(|(k, _)| *k != TokenKind::Number));
    }

    #[test]
    fn hash_prefixed_digit_run_is_not_a_number() {
        let toks = kinds("partition #0");
        assert!(toks.iter().all(|(k, _)| *k != TokenKind::Number));
    }

    #[test]
    fn coverage_every_position_has_exactly_one_token() {
        let stmt = "select /*+h*/ a, \"B\" from t1 where x = -1.5e10 and :ph = 'it''s'";
        let stream = tokenize(stmt);
        let reconstructed: String = stream.tokens().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(reconstructed, stmt);
        // no gaps: start offsets increase by exactly the previous token's length
        let mut cursor = 0;
        for t in stream.tokens() {
            assert_eq!(t.start, cursor);
            cursor = t.end();
        }
        assert_eq!(cursor, stmt.chars().count());
    }
}
