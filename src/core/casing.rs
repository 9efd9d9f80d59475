// src/core/casing.rs

/// Case `replacement` the way `original` is cased.
///
/// - all-caps original → all-caps replacement
/// - leading capital → replacement with its first letter forced up, rest as given
/// - otherwise → lowercase replacement
///
/// ASCII only; the vocabulary this is used with is ASCII.
pub fn match_case(original: &str, replacement: &str) -> String {
    if original == original.to_ascii_uppercase() {
        return replacement.to_ascii_uppercase();
    }
    let leading_cap = original
        .chars()
        .next()
        .is_some_and(|c| c == c.to_ascii_uppercase());
    if leading_cap {
        return capitalize(replacement);
    }
    replacement.to_ascii_lowercase()
}

/// Force the first character up, leave the rest alone.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => s!(),
    }
}
