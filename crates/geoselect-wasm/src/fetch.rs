// crates/geoselect-wasm/src/fetch.rs
use geoselect_core::{GeoError, LookupSource, Result};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCache, RequestInit, Response};

/// Browser `fetch` with the HTTP cache bypassed.
///
/// Resources resolve relative to `base` (e.g. `"data"`), which itself is
/// relative to the page.
#[derive(Debug, Clone, Default)]
pub struct FetchSource {
    base: String,
}

impl FetchSource {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn url_for(&self, resource: &str) -> String {
        if self.base.is_empty() {
            resource.to_string()
        } else {
            format!("{}/{}", self.base.trim_end_matches('/'), resource)
        }
    }
}

pub(crate) fn js_text(v: &JsValue) -> String {
    v.as_string().unwrap_or_else(|| format!("{v:?}"))
}

fn js_err(v: JsValue) -> GeoError {
    GeoError::Network(js_text(&v))
}

impl LookupSource for FetchSource {
    async fn fetch(&self, resource: &str) -> Result<String> {
        let url = self.url_for(resource);
        let window = web_sys::window().ok_or_else(|| GeoError::Network("no window".into()))?;

        let init = RequestInit::new();
        init.set_method("GET");
        init.set_cache(RequestCache::NoStore);
        let request = Request::new_with_str_and_init(&url, &init).map_err(js_err)?;

        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_err)?
            .dyn_into()
            .map_err(js_err)?;

        if !response.ok() {
            return Err(GeoError::Fetch {
                resource: url,
                status: response.status(),
            });
        }

        let text = JsFuture::from(response.text().map_err(js_err)?)
            .await
            .map_err(js_err)?;
        text.as_string()
            .ok_or_else(|| GeoError::Network(format!("{url} did not return text")))
    }
}
