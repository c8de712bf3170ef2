// crates/geoselect-core/src/params.rs
//! Reading a [`Selection`] from the hosting page's query string.
use crate::common::Selection;
use url::form_urlencoded;

/// Extracts `country`, `state` and `city` from a query string.
///
/// Accepts `country=US&state=CA`, `?country=US`, or a full URL. Values are
/// percent-decoded; absent or empty parameters read as `""`. For repeated
/// keys the first occurrence wins.
pub fn selection_from_query(input: &str) -> Selection {
    let query = query_part(input);
    let mut selection = Selection::default();
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        let slot = match key.as_ref() {
            "country" => &mut selection.country,
            "state" => &mut selection.state,
            "city" => &mut selection.city,
            _ => continue,
        };
        if slot.is_empty() {
            *slot = value.into_owned();
        }
    }
    selection
}

/// Builds a query string that reproduces `selection`, skipping empty fields.
pub fn query_from_selection(selection: &Selection) -> String {
    let mut out = form_urlencoded::Serializer::new(String::new());
    for (key, value) in [
        ("country", &selection.country),
        ("state", &selection.state),
        ("city", &selection.city),
    ] {
        if !value.is_empty() {
            out.append_pair(key, value);
        }
    }
    out.finish()
}

fn query_part(input: &str) -> &str {
    let without_fragment = input.split('#').next().unwrap_or_default();
    match without_fragment.find('?') {
        Some(idx) => &without_fragment[idx + 1..],
        None if without_fragment.contains("://") => "",
        None => without_fragment,
    }
}
