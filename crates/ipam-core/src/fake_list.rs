//! Comma-list equality
//!
//! The remote system serializes tag sets as a single comma-joined string.
//! Token order and empty tokens carry no meaning, so the host's plan diff
//! must not flag `"a,b"` against `"b,,a"`.

/// Compare two comma-joined lists as unordered token sets.
pub fn fake_list_equal(a: &str, b: &str) -> bool {
    let mut left = split_tokens(a);
    let mut right = split_tokens(b);
    left.sort_unstable();
    right.sort_unstable();
    left == right
}

fn split_tokens(s: &str) -> Vec<&str> {
    s.split(',').filter(|token| !token.is_empty()).collect()
}
