#![cfg(target_arch = "wasm32")]

use geoselect_core::storage::{load_saved_selection, save_selection};
use geoselect_core::{Selection, SelectionStore};
use geoselect_wasm::{clear, select_country, view, BrowserStore, FetchSource};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn view_is_undefined_before_initialization() {
    assert!(view().unwrap().is_undefined());
}

#[wasm_bindgen_test]
async fn events_before_initialization_are_rejected() {
    let err = select_country("US".into()).await.unwrap_err();
    assert!(err.as_string().unwrap().contains("not initialized"));
    assert!(clear().await.is_err());
}

#[wasm_bindgen_test]
fn fetch_urls_are_relative_to_base() {
    assert_eq!(FetchSource::new("data/").url_for("states.json"), "data/states.json");
    assert_eq!(FetchSource::new("").url_for("cities.json"), "cities.json");
}

#[wasm_bindgen_test]
fn browser_store_round_trips_selection() {
    let window = web_sys::window().unwrap();
    let mut store = BrowserStore::new(&window);
    let s = Selection::new("US", "CA", "LA");

    save_selection(&mut store, "geoselect.test", &s).unwrap();
    assert_eq!(load_saved_selection(&store, "geoselect.test"), s);

    store.remove("geoselect.test").unwrap();
    assert!(store.get("geoselect.test").is_none());
}
