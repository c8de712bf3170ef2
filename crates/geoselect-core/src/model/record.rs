// crates/geoselect-core/src/model/record.rs
use crate::traits::NameMatch;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of a lookup resource as it appears on the wire.
///
/// Datasets in the wild use either `code` (ISO-style) or `id` (numeric
/// database keys), sometimes both. Either may be a string or a number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LookupRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default)]
    pub name: String,
}

impl LookupRecord {
    pub fn with_code(code: &str, name: &str) -> Self {
        Self {
            code: Some(Value::String(code.to_string())),
            id: None,
            name: name.to_string(),
        }
    }

    /// The identifying value: `code` when present and non-empty, else `id`.
    ///
    /// Numbers are rendered in decimal, so an `id` of `0` is a real value.
    pub fn option_value(&self) -> Option<String> {
        self.code
            .as_ref()
            .and_then(key_text)
            .or_else(|| self.id.as_ref().and_then(key_text))
    }

    pub fn to_option(&self) -> Option<LocationOption> {
        self.option_value().map(|value| LocationOption {
            value,
            label: self.name.clone(),
        })
    }
}

fn key_text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// A choice presented by a control.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationOption {
    pub value: String,
    pub label: String,
}

impl LocationOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

impl NameMatch for LocationOption {
    fn name_str(&self) -> &str {
        &self.label
    }
}

/// Finds an option by exact value, then case-insensitive value, then
/// accent- and case-insensitive label.
pub fn find_option<'a>(options: &'a [LocationOption], query: &str) -> Option<&'a LocationOption> {
    let query = query.trim();
    options
        .iter()
        .find(|o| o.value == query)
        .or_else(|| options.iter().find(|o| o.value.eq_ignore_ascii_case(query)))
        .or_else(|| options.iter().find(|o| o.is_named(query)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rec(v: Value) -> LookupRecord {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn prefers_code_over_id() {
        let r = rec(json!({"code": "US", "id": 233, "name": "United States"}));
        assert_eq!(r.option_value().as_deref(), Some("US"));
    }

    #[test]
    fn empty_code_falls_back_to_id() {
        let r = rec(json!({"code": "", "id": 7, "name": "Somewhere"}));
        assert_eq!(r.option_value().as_deref(), Some("7"));
    }

    #[test]
    fn zero_is_a_real_value() {
        let r = rec(json!({"code": 0, "id": 5, "name": "Zero"}));
        assert_eq!(r.option_value().as_deref(), Some("0"));
        let r = rec(json!({"id": 0, "name": "Zero id"}));
        assert_eq!(r.option_value().as_deref(), Some("0"));
    }

    #[test]
    fn no_key_yields_no_option() {
        let r = rec(json!({"code": null, "name": "Nameless key"}));
        assert!(r.to_option().is_none());
    }

    #[test]
    fn option_matches_folded_label() {
        let opt = LookupRecord::with_code("SP", "São Paulo").to_option().unwrap();
        assert!(opt.is_named("sao paulo"));
        assert!(opt.name_contains("PAUL"));
    }
}
