//! The resolution context: the nested data graph placeholders resolve
//! against.
//!
//! The record layer assembles one of these per issuance request from the
//! resident, household and letter records. Keys follow the variable names in
//! the compiled catalog (`pemohon.namaLengkap` reads
//! `context.pemohon.namaLengkap`).

use std::collections::BTreeMap;

use chrono::NaiveDate;

/// One value in the resolution context graph.
#[derive(Debug, Clone, PartialEq)]
pub enum ContextValue {
    /// Present but empty; renders as an empty string, distinct from an
    /// absent key.
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// A calendar date; formatted by the merge engine's date rule.
    Date(NaiveDate),
    /// Non-scalar; resolving a placeholder to this is a type error.
    List(Vec<ContextValue>),
    /// Nested object; path segments descend through these.
    Object(BTreeMap<String, ContextValue>),
}

impl ContextValue {
    /// Build an object from `(key, value)` pairs.
    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, ContextValue)>,
    {
        ContextValue::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// The empty object; resolves nothing.
    #[must_use]
    pub fn empty() -> Self {
        ContextValue::Object(BTreeMap::new())
    }

    /// Dotted-path lookup, walking [`ContextValue::Object`] maps segment by
    /// segment. `None` means the path is absent: some segment is missing, or
    /// a non-object was reached while segments remained. A present key
    /// holding [`ContextValue::Null`] is `Some(Null)`, not `None`.
    #[must_use]
    pub fn lookup(&self, path: &str) -> Option<&ContextValue> {
        let mut current = self;
        for segment in path.split('.') {
            match current {
                ContextValue::Object(map) => current = map.get(segment)?,
                _ => return None,
            }
        }
        Some(current)
    }
}

impl From<&str> for ContextValue {
    fn from(value: &str) -> Self {
        ContextValue::String(value.to_string())
    }
}

impl From<String> for ContextValue {
    fn from(value: String) -> Self {
        ContextValue::String(value)
    }
}

impl From<i64> for ContextValue {
    fn from(value: i64) -> Self {
        ContextValue::Int(value)
    }
}

impl From<f64> for ContextValue {
    fn from(value: f64) -> Self {
        ContextValue::Float(value)
    }
}

impl From<bool> for ContextValue {
    fn from(value: bool) -> Self {
        ContextValue::Bool(value)
    }
}

impl From<NaiveDate> for ContextValue {
    fn from(value: NaiveDate) -> Self {
        ContextValue::Date(value)
    }
}

/// Conversion from the record layer's JSON payloads. Strings stay strings:
/// there is no implicit date sniffing, the record layer supplies
/// [`ContextValue::Date`] explicitly where a date is meant.
impl From<serde_json::Value> for ContextValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => ContextValue::Null,
            serde_json::Value::Bool(b) => ContextValue::Bool(b),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(ContextValue::Int)
                .or_else(|| n.as_f64().map(ContextValue::Float))
                .unwrap_or(ContextValue::Null),
            serde_json::Value::String(s) => ContextValue::String(s),
            serde_json::Value::Array(items) => {
                ContextValue::List(items.into_iter().map(ContextValue::from).collect())
            }
            serde_json::Value::Object(map) => ContextValue::Object(
                map.into_iter().map(|(k, v)| (k, ContextValue::from(v))).collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ctx() -> ContextValue {
        ContextValue::object([(
            "pemohon",
            ContextValue::object([
                ("namaLengkap", ContextValue::from("Siti Aminah")),
                ("catatan", ContextValue::Null),
            ]),
        )])
    }

    #[test]
    fn lookup_walks_segments() {
        let v = ctx().lookup("pemohon.namaLengkap").cloned();
        assert_eq!(v, Some(ContextValue::from("Siti Aminah")));
    }

    #[test]
    fn absent_key_differs_from_null_value() {
        let context = ctx();
        assert_eq!(context.lookup("pemohon.nik"), None);
        assert_eq!(context.lookup("pemohon.catatan"), Some(&ContextValue::Null));
    }

    #[test]
    fn lookup_fails_through_scalars() {
        let context = ctx();
        assert_eq!(context.lookup("pemohon.namaLengkap.depan"), None);
        assert_eq!(ContextValue::from("text").lookup("anything"), None);
    }

    #[test]
    fn from_json_preserves_shape() {
        let v = ContextValue::from(json!({
            "pemohon": { "nik": "3201011212900001", "tanggungan": 3 },
            "aktif": true,
            "skor": 1.5,
            "tags": ["a"],
            "kosong": null,
        }));
        assert_eq!(v.lookup("pemohon.tanggungan"), Some(&ContextValue::Int(3)));
        assert_eq!(v.lookup("aktif"), Some(&ContextValue::Bool(true)));
        assert_eq!(v.lookup("skor"), Some(&ContextValue::Float(1.5)));
        assert_eq!(v.lookup("kosong"), Some(&ContextValue::Null));
        assert!(matches!(v.lookup("tags"), Some(ContextValue::List(_))));
    }
}
