// crates/geoselect-core/src/model/convert.rs
//! Raw JSON bodies -> option lists.
//!
//! Decoding is lenient below the top level: an entry that is not an object,
//! or that has neither `code` nor `id`, is dropped instead of failing the
//! whole table. Only a body that is not JSON at all (or has the wrong
//! top-level shape) is an error.
use super::record::{LocationOption, LookupRecord};
use super::tables::ByParent;
use crate::error::Result;
use serde_json::{Map, Value};
use tracing::debug;

/// Parses a countries body: an ordered array of records.
pub fn options_from_json(body: &str) -> Result<Vec<LocationOption>> {
    let items: Vec<Value> = serde_json::from_str(body)?;
    Ok(options_from_values(items))
}

/// Parses a states/cities body: an object keyed by parent code.
pub fn by_parent_from_json(body: &str) -> Result<ByParent> {
    let map: Map<String, Value> = serde_json::from_str(body)?;
    Ok(map
        .into_iter()
        .map(|(parent, entry)| {
            let options = match entry {
                Value::Array(items) => options_from_values(items),
                _ => Vec::new(),
            };
            (parent, options)
        })
        .collect())
}

/// Parses a states/cities body and keeps only the list for `parent`.
///
/// An absent parent yields an empty list.
pub fn children_from_json(body: &str, parent: &str) -> Result<Vec<LocationOption>> {
    let mut map: Map<String, Value> = serde_json::from_str(body)?;
    Ok(match map.remove(parent) {
        Some(Value::Array(items)) => options_from_values(items),
        _ => Vec::new(),
    })
}

fn options_from_values(items: Vec<Value>) -> Vec<LocationOption> {
    items
        .into_iter()
        .filter_map(|item| {
            let option = serde_json::from_value::<LookupRecord>(item)
                .ok()
                .and_then(|rec| rec.to_option());
            if option.is_none() {
                debug!("skipping lookup entry without a usable code or id");
            }
            option
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_source_order() {
        let opts = options_from_json(
            r#"[{"code":"US","name":"United States"},{"code":"CA","name":"Canada"},{"id":3,"name":"Mexico"}]"#,
        )
        .unwrap();
        let values: Vec<_> = opts.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, ["US", "CA", "3"]);
    }

    #[test]
    fn absent_parent_is_empty_not_error() {
        let body = r#"{"US":[{"code":"CA","name":"California"}]}"#;
        assert!(children_from_json(body, "FR").unwrap().is_empty());
        assert_eq!(children_from_json(body, "US").unwrap().len(), 1);
    }

    #[test]
    fn non_array_entry_is_empty() {
        let map = by_parent_from_json(r#"{"US":"oops","CA":[{"code":"ON","name":"Ontario"}]}"#)
            .unwrap();
        assert!(map["US"].is_empty());
        assert_eq!(map["CA"][0].label, "Ontario");
    }

    #[test]
    fn malformed_entries_are_dropped() {
        let opts = options_from_json(r#"[1, {"name":"no key"}, {"code":"DE","name":"Germany"}]"#)
            .unwrap();
        assert_eq!(opts, vec![LocationOption::new("DE", "Germany")]);
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(options_from_json("<html>").is_err());
        assert!(by_parent_from_json("[]").is_err());
    }
}
