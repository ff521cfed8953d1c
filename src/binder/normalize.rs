//! Per-statement normalization helpers shared by the binder's token walk:
//! digit-run substitution inside identifiers and hints, and the final
//! whitespace squeeze over the assembled canonical string.

use indexmap::IndexMap;

/// Characters the whitespace squeeze strips adjacent spaces from.
const SEPARATORS: &[char] = &[
    '=', '<', '>', '!', '+', '-', '*', '/', '(', ')', ',', ';', '|', ':', '[', ']', '.', '@',
];

/// Replace every maximal digit run in `text` with `{k}`, where `k` is the
/// index assigned to that exact run on first occurrence in `map` (shared
/// across the whole statement, per spec §4.3.1/§8 stability property).
pub fn substitute_digit_runs(text: &str, map: &mut IndexMap<String, u32>) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        if chars[i].is_ascii_digit() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            let run: String = chars[start..i].iter().collect();
            let idx = match map.get(&run) {
                Some(&v) => v,
                None => {
                    let v = map.len() as u32;
                    map.insert(run, v);
                    v
                }
            };
            out.push('{');
            out.push_str(&idx.to_string());
            out.push('}');
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }
    out
}

/// The normalized form of an identifier payload: digit-run substitution,
/// then either preserved verbatim (if it now begins with `"`) or
/// lowercased. See spec §4.3.1.
pub fn normalize_identifier(
    text: &str,
    substitute_numbers: bool,
    digit_map: &mut IndexMap<String, u32>,
) -> String {
    let substituted = if substitute_numbers {
        substitute_digit_runs(text, digit_map)
    } else {
        text.to_string()
    };
    if substituted.starts_with('"') {
        substituted
    } else {
        substituted.to_lowercase()
    }
}

/// §4.3.2: newline/tab folding, run-collapse, separator-adjacent space
/// removal, then trim.
pub fn squeeze_whitespace(s: &str) -> String {
    let folded: String = s
        .chars()
        .map(|c| if c == '\n' || c == '\t' { ' ' } else { c })
        .collect();

    let mut collapsed = String::with_capacity(folded.len());
    let mut prev_space = false;
    for c in folded.chars() {
        if c == ' ' {
            if prev_space {
                continue;
            }
            prev_space = true;
        } else {
            prev_space = false;
        }
        collapsed.push(c);
    }

    let chars: Vec<char> = collapsed.chars().collect();
    let mut out = String::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == ' ' {
            let prev_is_sep = out.chars().last().map(|c| SEPARATORS.contains(&c)).unwrap_or(false);
            let next_is_sep = chars.get(i + 1).map(|c| SEPARATORS.contains(c)).unwrap_or(false);
            if prev_is_sep || next_is_sep {
                i += 1;
                continue;
            }
        }
        out.push(chars[i]);
        i += 1;
    }

    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_runs_share_index_across_identifiers() {
        let mut map = IndexMap::new();
        assert_eq!(substitute_digit_runs("t103", &mut map), "t{0}");
        assert_eq!(substitute_digit_runs("u103", &mut map), "u{0}");
        assert_eq!(substitute_digit_runs("c4", &mut map), "c{1}");
    }

    #[test]
    fn quoted_identifier_preserves_case_after_substitution() {
        let mut map = IndexMap::new();
        let normalized = normalize_identifier("\"Abc103\"", true, &mut map);
        assert_eq!(normalized, "\"Abc{0}\"");
    }

    #[test]
    fn bare_identifier_is_lowercased() {
        let mut map = IndexMap::new();
        assert_eq!(normalize_identifier("ABC", true, &mut map), "abc");
    }

    #[test]
    fn whitespace_squeeze_collapses_and_trims() {
        assert_eq!(squeeze_whitespace("  a   =\tb\n\n"), "a=b");
    }

    #[test]
    fn whitespace_squeeze_leaves_non_separator_spacing_intact() {
        assert_eq!(squeeze_whitespace("a  and  b"), "a and b");
    }
}
