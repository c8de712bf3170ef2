// crates/geoselect-core/src/loader/http.rs
use crate::error::{GeoError, Result};
use crate::traits::LookupSource;
use reqwest::blocking::Client;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use tracing::debug;
use url::Url;

/// Fetches lookup resources relative to a base URL.
///
/// Requests are blocking and always ask intermediaries not to serve a
/// cached copy. Meant for hosts that drive the controller with
/// `futures::executor::block_on`; inside an async runtime the `fetch` future
/// stalls its executor thread until the response arrives.
#[derive(Debug, Clone)]
pub struct HttpSource {
    base: Url,
    client: Client,
}

impl HttpSource {
    /// `base` should point at the directory holding the JSON files. A missing
    /// trailing slash is added so relative joins stay inside it.
    pub fn new(base: &str) -> Result<Self> {
        let normalized = if base.ends_with('/') {
            base.to_string()
        } else {
            format!("{base}/")
        };
        let base = Url::parse(&normalized)
            .map_err(|e| GeoError::Network(format!("Invalid base URL {base}: {e}")))?;
        let client = Client::builder()
            .build()
            .map_err(|e| GeoError::Network(e.to_string()))?;
        Ok(Self { base, client })
    }

    pub fn resource_url(&self, resource: &str) -> Result<Url> {
        self.base
            .join(resource)
            .map_err(|e| GeoError::Network(format!("Invalid resource {resource}: {e}")))
    }
}

impl LookupSource for HttpSource {
    async fn fetch(&self, resource: &str) -> Result<String> {
        let url = self.resource_url(resource)?;
        debug!(%url, "fetching lookup resource");

        let res = self
            .client
            .get(url)
            .header(CACHE_CONTROL, "no-store")
            .header(PRAGMA, "no-cache")
            .send()
            .map_err(|e| GeoError::Network(e.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            return Err(GeoError::Fetch {
                resource: resource.to_string(),
                status: status.as_u16(),
            });
        }
        res.text().map_err(|e| GeoError::Network(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_relative_to_base_directory() {
        let src = HttpSource::new("https://example.org/app/data").unwrap();
        assert_eq!(
            src.resource_url("countries.json").unwrap().as_str(),
            "https://example.org/app/data/countries.json"
        );
    }
}
