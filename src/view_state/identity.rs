//! Render identity of records.
//!
//! The same function is used by the windowing engine and by the render loop,
//! so a record keeps its key across re-renders as long as its data key value
//! (or, without a data key, its position) is unchanged.

use crate::model::{FieldPath, Record};
use std::fmt;

/// Stable identity of a rendered record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RenderKey {
    /// Value of the configured data key.
    Data(String),
    /// Position in the processed collection. Only stable while the
    /// collection order is stable between renders.
    Index(usize),
}

impl fmt::Display for RenderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderKey::Data(key) => f.write_str(key),
            RenderKey::Index(index) => write!(f, "#{index}"),
        }
    }
}

/// Identity of `record` shown at `position`.
///
/// Uses the data key value when `data_key` is set and resolves to a present
/// value on this record; falls back to `position` otherwise.
pub fn record_identity<R: Record + ?Sized>(
    record: &R,
    position: usize,
    data_key: Option<&FieldPath>,
) -> RenderKey {
    data_key
        .and_then(|key| record.resolve_key(key))
        .map(RenderKey::Data)
        .unwrap_or(RenderKey::Index(position))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn data_key_value_is_used_when_present() {
        let key = FieldPath::parse("id").unwrap();
        let record = json!({"id": 7});
        assert_eq!(
            record_identity(&record, 3, Some(&key)),
            RenderKey::Data("7".into())
        );
    }

    #[test]
    fn large_integer_ids_stay_distinct() {
        let key = FieldPath::parse("id").unwrap();
        let above = json!({"id": 9_007_199_254_740_993u64});
        let at = json!({"id": 9_007_199_254_740_992u64});
        assert_eq!(
            record_identity(&above, 0, Some(&key)),
            RenderKey::Data("9007199254740993".into())
        );
        assert_ne!(
            record_identity(&above, 0, Some(&key)),
            record_identity(&at, 1, Some(&key))
        );
    }

    #[test]
    fn falls_back_to_position_without_data_key() {
        let record = json!({"id": 7});
        assert_eq!(record_identity(&record, 3, None), RenderKey::Index(3));
    }

    #[test]
    fn falls_back_to_position_when_key_does_not_resolve() {
        let key = FieldPath::parse("uuid").unwrap();
        let record = json!({"id": 7});
        assert_eq!(record_identity(&record, 5, Some(&key)), RenderKey::Index(5));
    }

    #[test]
    fn falls_back_to_position_when_key_is_null() {
        let key = FieldPath::parse("id").unwrap();
        let record = json!({"id": null});
        assert_eq!(record_identity(&record, 0, Some(&key)), RenderKey::Index(0));
    }

    #[test]
    fn zero_and_empty_string_keys_are_kept() {
        let key = FieldPath::parse("id").unwrap();
        assert_eq!(
            record_identity(&json!({"id": 0}), 4, Some(&key)),
            RenderKey::Data("0".into())
        );
        assert_eq!(
            record_identity(&json!({"id": ""}), 4, Some(&key)),
            RenderKey::Data(String::new())
        );
    }

    #[test]
    fn display_distinguishes_index_keys() {
        assert_eq!(RenderKey::Index(2).to_string(), "#2");
        assert_eq!(RenderKey::Data("abc".into()).to_string(), "abc");
    }
}
