// crates/geoselect-wasm/src/dom.rs
//! Writes a [`ViewModel`] into the page.
//!
//! Element ids: `country`, `state`, `city` (selects), `status`,
//! `summary-country`, `summary-state`, `summary-city`. Missing elements are
//! skipped so a host may draw parts of the view itself.
use geoselect_core::view::ControlView;
use geoselect_core::{Level, StatusKind, ViewModel};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, HtmlOptionElement, HtmlSelectElement};

pub fn render(view: &ViewModel) -> Result<(), JsValue> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Ok(());
    };

    for level in Level::ALL {
        if let Some(select) = element::<HtmlSelectElement>(&document, level.noun()) {
            fill_select(&select, view.control(level))?;
        }
    }

    if let Some(status) = element::<HtmlElement>(&document, "status") {
        status.set_text_content(Some(&view.status.message));
        let color = match view.status.kind {
            StatusKind::Error => "var(--danger)",
            StatusKind::Info => "var(--muted)",
        };
        status.style().set_property("color", color)?;
    }

    for (id, text) in [
        ("summary-country", &view.summary.country),
        ("summary-state", &view.summary.state),
        ("summary-city", &view.summary.city),
    ] {
        if let Some(el) = element::<HtmlElement>(&document, id) {
            el.set_text_content(Some(text));
        }
    }
    Ok(())
}

fn fill_select(select: &HtmlSelectElement, control: &ControlView) -> Result<(), JsValue> {
    select.set_inner_html("");
    let placeholder = HtmlOptionElement::new_with_text_and_value(&control.placeholder, "")?;
    select.add_with_html_option_element(&placeholder)?;
    for option in &control.options {
        let el = HtmlOptionElement::new_with_text_and_value(&option.label, &option.value)?;
        select.add_with_html_option_element(&el)?;
    }
    select.set_value(&control.value);
    select.set_disabled(control.disabled);
    Ok(())
}

fn element<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}
