//! Opaque records and field resolution.
//!
//! A record is any application value that can answer "what is at this path?".
//! Resolution is total: a path that does not resolve yields
//! [`FieldValue::Missing`], never a panic or an error.

use super::field_path::FieldPath;
use serde_json::Value;

/// A resolved field value, reduced to the kinds the sorter understands.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// The path did not resolve on this record.
    Missing,
    /// The path resolved to an explicit null.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Numeric value.
    Number(f64),
    /// Text value. Composite values are carried as their compact JSON text.
    Text(String),
}

impl FieldValue {
    /// True for [`FieldValue::Missing`] and [`FieldValue::Null`].
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Missing | FieldValue::Null)
    }

    /// String form used for render identities.
    ///
    /// Returns `None` for absent values. Integral numbers print without a
    /// fractional part so `1` and `1.0` give the same key.
    pub fn to_key_string(&self) -> Option<String> {
        match self {
            FieldValue::Missing | FieldValue::Null => None,
            FieldValue::Bool(b) => Some(b.to_string()),
            FieldValue::Number(n) => Some(format_number(*n)),
            FieldValue::Text(s) => Some(s.clone()),
        }
    }
}

fn format_number(n: f64) -> String {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0; // 2^53
    if n.fract() == 0.0 && n.abs() < MAX_EXACT {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// Capability required of anything displayed by the data view.
pub trait Record {
    /// Resolve `path` against this record.
    fn resolve(&self, path: &FieldPath) -> FieldValue;

    /// Identity text of the value at `path`, `None` when absent.
    ///
    /// Records holding numbers wider than `f64` should override this so
    /// distinct values never share a key.
    fn resolve_key(&self, path: &FieldPath) -> Option<String> {
        self.resolve(path).to_key_string()
    }
}

fn lookup<'v>(record: &'v Value, path: &FieldPath) -> Option<&'v Value> {
    path.segments().try_fold(record, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

impl Record for Value {
    fn resolve(&self, path: &FieldPath) -> FieldValue {
        lookup(self, path).map_or(FieldValue::Missing, FieldValue::from)
    }

    fn resolve_key(&self, path: &FieldPath) -> Option<String> {
        match lookup(self, path)? {
            // Integers keep every digit; f64 would merge ids above 2^53
            Value::Number(n) if n.is_i64() || n.is_u64() => Some(n.to_string()),
            other => FieldValue::from(other).to_key_string(),
        }
    }
}

impl From<&Value> for FieldValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => FieldValue::Null,
            Value::Bool(b) => FieldValue::Bool(*b),
            Value::Number(n) => n
                .as_f64()
                .map(FieldValue::Number)
                .unwrap_or_else(|| FieldValue::Text(n.to_string())),
            Value::String(s) => FieldValue::Text(s.clone()),
            Value::Array(_) | Value::Object(_) => FieldValue::Text(value.to_string()),
        }
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn resolve(&self, path: &FieldPath) -> FieldValue {
        (**self).resolve(path)
    }

    fn resolve_key(&self, path: &FieldPath) -> Option<String> {
        (**self).resolve_key(path)
    }
}
