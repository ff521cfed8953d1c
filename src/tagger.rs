//! Partition-name detection.
//!
//! A side table over token start offsets, built from a single pass looking
//! for `partition <ident>` and `partition ( <ident> )`. Tagging never
//! mutates a token's kind (spec §3 invariant: kind is immutable after
//! classification) — callers consult [`PartitionTags::is_tagged`]
//! alongside the token stream.

use crate::lexer::{Token, TokenKind};
use std::collections::HashSet;

/// Start offsets of `ident` tokens identified as partition names.
#[derive(Debug, Clone, Default)]
pub struct PartitionTags {
    tagged: HashSet<usize>,
}

impl PartitionTags {
    pub fn is_tagged(&self, start: usize) -> bool {
        self.tagged.contains(&start)
    }
}

/// Walk `tokens` and tag every identifier structurally following a
/// `partition` keyword, either bare (`partition <ws> <ident>`) or
/// parenthesized (`partition <conn "("> <ident> <conn ")">`).
pub fn tag_partition_names(tokens: &[Token]) -> PartitionTags {
    let mut tagged = HashSet::new();

    let mut i = 0;
    while i < tokens.len() {
        let t = &tokens[i];
        if t.kind == TokenKind::Keyword && t.lower() == "partition" {
            if let Some(ident_start) = bare_form(tokens, i).or_else(|| parenthesized_form(tokens, i)) {
                tagged.insert(ident_start);
            }
        }
        i += 1;
    }

    PartitionTags { tagged }
}

/// `partition <conn-with-whitespace> <ident>` — the immediately following
/// non-conn token must be an `ident`.
fn bare_form(tokens: &[Token], partition_idx: usize) -> Option<usize> {
    let conn = tokens.get(partition_idx + 1)?;
    if conn.kind != TokenKind::Conn || !conn.text.chars().all(char::is_whitespace) || conn.text.is_empty() {
        return None;
    }
    let ident = tokens.get(partition_idx + 2)?;
    (ident.kind == TokenKind::Ident).then_some(ident.start)
}

/// `partition <conn "("> <ident> <conn ")">`, allowing whitespace inside
/// the connectors surrounding the parens and identifier.
fn parenthesized_form(tokens: &[Token], partition_idx: usize) -> Option<usize> {
    let mut idx = partition_idx + 1;

    let open = tokens.get(idx)?;
    if open.kind != TokenKind::Conn || !open.text.trim_start().starts_with('(') {
        return None;
    }
    idx += 1;

    let ident = tokens.get(idx)?;
    if ident.kind != TokenKind::Ident {
        return None;
    }
    idx += 1;

    let close = tokens.get(idx)?;
    if close.kind != TokenKind::Conn || !close.text.trim_start().starts_with(')') {
        return None;
    }

    Some(ident.start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    #[test]
    fn bare_partition_is_tagged() {
        let toks = tokenize("alter table t move partition SYS_P32596").into_vec();
        let tags = tag_partition_names(&toks);
        let ident = toks.iter().find(|t| t.text == "SYS_P32596").unwrap();
        assert!(tags.is_tagged(ident.start));
    }

    #[test]
    fn parenthesized_partition_is_tagged() {
        let toks = tokenize("insert into t partition ( SYS_P32596 ) select 1 from t").into_vec();
        let tags = tag_partition_names(&toks);
        let ident = toks.iter().find(|t| t.text == "SYS_P32596").unwrap();
        assert!(tags.is_tagged(ident.start));
    }

    #[test]
    fn partition_by_is_not_tagged() {
        let toks = tokenize("select sum(x) over(partition by x) from t").into_vec();
        let tags = tag_partition_names(&toks);
        assert!(toks
            .iter()
            .filter(|t| t.kind == TokenKind::Ident)
            .all(|t| !tags.is_tagged(t.start)));
    }
}
