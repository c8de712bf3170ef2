//! geoselect-wasm — WebAssembly bindings for geoselect-core
//!
//! Runs the selection controller in the browser: lookup JSON is fetched with
//! `fetch` (HTTP cache bypassed), the selection lives in `localStorage`, and
//! the page's query string seeds the restore step.
//!
//! What it provides
//! ----------------
//! - Panic hook installation on module load (via `#[wasm_bindgen(start)]`)
//! - `initialize(base)`: load countries, restore and render
//! - `mount(base)`: `initialize` plus wiring of the page's controls
//! - Event entry points for hosts that wire events themselves:
//!   `select_country`, `select_state`, `select_city`, `clear`, `reload`
//! - `view()` returning the current view model as a JS object
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { mount } from 'geoselect-wasm';
//!
//! async function main() {
//!   await init();
//!   await mount('data'); // data/countries.json, data/states.json, data/cities.json
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - Only one handler runs at a time. An event arriving while another is
//!   still waiting on a fetch is rejected with a "still in progress" error.
//! - All exported functions return `JsValue` view models that serialize
//!   through `serde-wasm-bindgen`.
mod dom;
mod fetch;
mod storage;

pub use fetch::FetchSource;
pub use storage::BrowserStore;

use geoselect_core::{Event, GeoError, SelectionController, ViewModel};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlSelectElement;

type App = SelectionController<FetchSource, BrowserStore>;

/// The controller is moved out while a handler is suspended, which is how
/// overlapping events are detected.
enum Slot {
    Uninit,
    Ready(Box<App>),
    Busy,
}

thread_local! {
    static APP: RefCell<Slot> = const { RefCell::new(Slot::Uninit) };
}

fn take_app() -> Result<Box<App>, JsValue> {
    APP.with(|slot| {
        let mut slot = slot.borrow_mut();
        match std::mem::replace(&mut *slot, Slot::Busy) {
            Slot::Ready(app) => Ok(app),
            Slot::Uninit => {
                *slot = Slot::Uninit;
                Err(JsValue::from_str(
                    "geoselect is not initialized, call initialize() or mount() first",
                ))
            }
            Slot::Busy => Err(to_js(GeoError::Busy)),
        }
    })
}

fn put_app(app: Box<App>) {
    APP.with(|slot| *slot.borrow_mut() = Slot::Ready(app));
}

fn to_js(e: GeoError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn view_to_js(view: &ViewModel) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(view).map_err(JsValue::from)
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing geoselect WASM module...".into());
}

/* --------------------------------------------------------------------------
   Lifecycle
-------------------------------------------------------------------------- */

/// Creates the controller, loads countries and restores the selection.
///
/// `base` is the directory of the lookup JSON relative to the page. Rejects
/// when the country list cannot be loaded; the status element shows why.
#[wasm_bindgen]
pub async fn initialize(base: Option<String>) -> Result<JsValue, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let busy = APP.with(|slot| {
        let mut slot = slot.borrow_mut();
        if matches!(*slot, Slot::Busy) {
            return true;
        }
        *slot = Slot::Busy;
        false
    });
    if busy {
        return Err(to_js(GeoError::Busy));
    }

    let query = window.location().search().unwrap_or_default();
    let store = BrowserStore::new(&window);
    let mut app = Box::new(
        SelectionController::new(FetchSource::new(base.unwrap_or_default()), store)
            .with_query(&query),
    );

    let result = app.init().await;
    let view = app.render();
    put_app(app);
    dom::render(&view)?;

    match result {
        Ok(()) => {
            web_sys::console::log_1(
                &format!("✓ Loaded {} countries", view.country.options.len()).into(),
            );
            view_to_js(&view)
        }
        Err(e) => {
            web_sys::console::error_1(&e.to_string().into());
            Err(to_js(e))
        }
    }
}

/// [`initialize`] plus change/click listeners on the page's controls
/// (`country`, `state`, `city`, `clear`, `reload`).
#[wasm_bindgen]
pub async fn mount(base: Option<String>) -> Result<JsValue, JsValue> {
    let view = initialize(base).await?;
    wire_events()?;
    Ok(view)
}

/* --------------------------------------------------------------------------
   Events
-------------------------------------------------------------------------- */

async fn run_event(event: Event) -> Result<JsValue, JsValue> {
    let mut app = take_app()?;
    let result = app.dispatch(event).await;
    let view = app.render();
    put_app(app);
    dom::render(&view)?;
    result.map_err(to_js)?;
    view_to_js(&view)
}

#[wasm_bindgen]
pub async fn select_country(code: String) -> Result<JsValue, JsValue> {
    run_event(Event::CountryChanged(code)).await
}

#[wasm_bindgen]
pub async fn select_state(code: String) -> Result<JsValue, JsValue> {
    run_event(Event::StateChanged(code)).await
}

#[wasm_bindgen]
pub async fn select_city(code: String) -> Result<JsValue, JsValue> {
    run_event(Event::CityChanged(code)).await
}

#[wasm_bindgen]
pub async fn clear() -> Result<JsValue, JsValue> {
    run_event(Event::Clear).await
}

#[wasm_bindgen]
pub async fn reload() -> Result<JsValue, JsValue> {
    run_event(Event::Reload).await
}

/* --------------------------------------------------------------------------
   Queries
-------------------------------------------------------------------------- */

/// Current view model, or `undefined` before initialization / while busy.
#[wasm_bindgen]
pub fn view() -> Result<JsValue, JsValue> {
    APP.with(|slot| match &*slot.borrow() {
        Slot::Ready(app) => view_to_js(&app.render()),
        _ => Ok(JsValue::UNDEFINED),
    })
}

/// Redraws the page from the current view model.
#[wasm_bindgen]
pub fn render() -> Result<(), JsValue> {
    APP.with(|slot| match &*slot.borrow() {
        Slot::Ready(app) => dom::render(&app.render()),
        _ => Ok(()),
    })
}

/// Whether the selection is kept in `localStorage` (false in private mode).
#[wasm_bindgen]
pub fn is_persistent() -> bool {
    APP.with(|slot| match &*slot.borrow() {
        Slot::Ready(app) => app.store().is_persistent(),
        _ => false,
    })
}

/* --------------------------------------------------------------------------
   DOM wiring
-------------------------------------------------------------------------- */

fn wire_events() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let selects: [(&str, fn(String) -> Event); 3] = [
        ("country", Event::CountryChanged),
        ("state", Event::StateChanged),
        ("city", Event::CityChanged),
    ];
    for (id, make_event) in selects {
        if let Some(el) = document.get_element_by_id(id) {
            listen(&el, "change", move |ev: web_sys::Event| {
                let value = ev
                    .target()
                    .and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
                    .map(|s| s.value())
                    .unwrap_or_default();
                Some(make_event(value))
            })?;
        }
    }

    for (id, event) in [("clear", Event::Clear), ("reload", Event::Reload)] {
        if let Some(el) = document.get_element_by_id(id) {
            listen(&el, "click", move |_| Some(event.clone()))?;
        }
    }
    Ok(())
}

fn listen<F>(target: &web_sys::EventTarget, kind: &str, to_event: F) -> Result<(), JsValue>
where
    F: Fn(web_sys::Event) -> Option<Event> + 'static,
{
    let handler = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
        if let Some(event) = to_event(ev) {
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = run_event(event).await {
                    web_sys::console::error_1(&e);
                }
            });
        }
    });
    target.add_event_listener_with_callback(kind, handler.as_ref().unchecked_ref())?;
    // listeners live as long as the page
    handler.forget();
    Ok(())
}
