//! VLAN range allocation
//!
//! Picks the lowest VLAN number from a `"min-max"` range that is not
//! already taken. The caller fetches the used set from the remote system
//! immediately beforehand; two allocations racing in the same tag scope
//! can pick the same number (accepted, see the concurrency notes in the
//! crate docs).

use std::collections::HashSet;
use std::sync::OnceLock;

use anyhow::Result;
use regex::Regex;

use crate::error::ProviderError;

/// Lowest number in `[min, max)` not present in `used`.
///
/// The upper bound is exclusive per the VLAN range convention; the range
/// end is never allocatable. Duplicates in `used` are harmless.
pub fn allocate_from_range(range_expr: &str, used: &[i64]) -> Result<i64> {
    let (min, max) = parse_range(range_expr)?;
    let used: HashSet<i64> = used.iter().copied().collect();

    (min..max)
        .find(|candidate| !used.contains(candidate))
        .ok_or_else(|| {
            ProviderError::RangeExhausted {
                range: range_expr.to_string(),
            }
            .into()
        })
}

fn parse_range(range_expr: &str) -> Result<(i64, i64)> {
    let invalid = || ProviderError::InvalidRangeFormat {
        range: range_expr.to_string(),
    };

    let (min_token, max_token) = range_expr.split_once('-').ok_or_else(invalid)?;
    let min: i64 = min_token.parse().map_err(|_| invalid())?;
    let max: i64 = max_token.parse().map_err(|_| invalid())?;
    if min >= max {
        return Err(invalid().into());
    }
    Ok((min, max))
}

/// Schema validator for VLAN range expressions.
///
/// Accepts numbers 1-4094 joined by hyphens or commas, e.g. `"100-200"`.
pub fn vlan_range_expression() -> &'static Regex {
    static EXPRESSION: OnceLock<Regex> = OnceLock::new();
    EXPRESSION.get_or_init(|| {
        Regex::new(
            r"^(?:[1-9]\d{0,2}|[1-3]\d{3}|40(?:[0-8]\d|9[0-4]))(?:[,-] *(?:[1-9]\d{0,2}|[1-3]\d{3}|40(?:[0-8]\d|9[0-4]))?)*$",
        )
        .expect("VLAN range pattern compiles")
    })
}

/// `true` when `value` is a well-formed VLAN range expression.
pub fn is_vlan_range(value: &str) -> bool {
    vlan_range_expression().is_match(value)
}
