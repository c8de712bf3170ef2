// crates/geoselect-core/src/error.rs
use thiserror::Error;

/// Errors raised while fetching lookup data or persisting the selection.
#[derive(Debug, Error)]
pub enum GeoError {
    /// The lookup resource answered with a non-success status.
    #[error("Failed to load {resource}: {status}")]
    Fetch { resource: String, status: u16 },

    /// The request never produced a response (DNS, TLS, offline, CORS...).
    #[error("Network error: {0}")]
    Network(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The selection store refused a write (quota, permissions).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Another handler is still waiting on a fetch.
    #[error("Another selection change is still in progress")]
    Busy,
}

pub type Result<T> = std::result::Result<T, GeoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_message_names_resource_and_status() {
        let err = GeoError::Fetch {
            resource: "data/countries.json".into(),
            status: 404,
        };
        assert_eq!(err.to_string(), "Failed to load data/countries.json: 404");
    }
}
