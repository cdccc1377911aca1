//! Pass-through storage for payload keys the strategies do not interpret.
//!
//! Fetched pages routinely carry fields next to `edges` and `pageInfo`
//! (a `totalCount`, a `__typename`). Those are kept in an [`Extras`] map and
//! copied through every merge and read untouched.

use alloc::collections::BTreeMap;
use alloc::string::String;

/// Unrecognized payload keys and their values.
pub type Extras<X> = BTreeMap<String, X>;

/// Keys owned by the connection shape itself.
pub const CONNECTION_KEYS: [&str; 3] = ["edges", "wrappers", "pageInfo"];

/// Keys owned by the page-info block itself.
pub const PAGE_INFO_KEYS: [&str; 4] =
    ["hasPreviousPage", "hasNextPage", "startCursor", "endCursor"];

/// Copy `fields`, dropping every key listed in `reserved`.
///
/// ```
/// use pagination_kit::extras::{strip_reserved, Extras, CONNECTION_KEYS};
///
/// let mut fields: Extras<i64> = Extras::new();
/// fields.insert("totalCount".into(), 42);
/// fields.insert("edges".into(), 0);
///
/// let kept = strip_reserved(&fields, &CONNECTION_KEYS);
/// assert_eq!(kept.len(), 1);
/// assert_eq!(kept.get("totalCount"), Some(&42));
/// ```
#[must_use]
pub fn strip_reserved<X: Clone>(fields: &Extras<X>, reserved: &[&str]) -> Extras<X> {
    fields
        .iter()
        .filter(|(key, _)| !reserved.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Combine two extras maps; on conflicting keys `top` wins.
#[must_use]
pub(crate) fn overlay<X: Clone>(base: Extras<X>, top: Extras<X>) -> Extras<X> {
    let mut merged = base;
    merged.extend(top);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extras(pairs: &[(&str, i64)]) -> Extras<i64> {
        pairs.iter().map(|(k, v)| (String::from(*k), *v)).collect()
    }

    #[test]
    fn strip_removes_only_reserved() {
        let fields = extras(&[("edges", 1), ("pageInfo", 2), ("wrappers", 3), ("total", 4)]);
        let kept = strip_reserved(&fields, &CONNECTION_KEYS);
        assert_eq!(kept, extras(&[("total", 4)]));
    }

    #[test]
    fn strip_leaves_source_untouched() {
        let fields = extras(&[("edges", 1)]);
        let _ = strip_reserved(&fields, &CONNECTION_KEYS);
        assert_eq!(fields.len(), 1);
    }

    #[test]
    fn overlay_prefers_top() {
        let base = extras(&[("a", 1), ("b", 2)]);
        let top = extras(&[("b", 20), ("c", 30)]);
        assert_eq!(overlay(base, top), extras(&[("a", 1), ("b", 20), ("c", 30)]));
    }
}
