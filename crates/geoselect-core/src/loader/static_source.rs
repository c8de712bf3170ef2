// crates/geoselect-core/src/loader/static_source.rs
use crate::error::{GeoError, Result};
use crate::traits::LookupSource;
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Debug, Clone)]
enum Entry {
    Body(String),
    Status(u16),
    Network(String),
}

/// In-memory lookup source.
///
/// Unknown resources answer `404`. Failures can be injected per resource,
/// and every request is recorded so callers can verify nothing was cached.
#[derive(Debug, Default)]
pub struct StaticSource {
    entries: HashMap<String, Entry>,
    requests: RefCell<Vec<String>>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, resource: &str, body: impl Into<String>) -> Self {
        self.insert(resource, body);
        self
    }

    /// Makes `resource` answer with a non-success `status`.
    pub fn with_status(mut self, resource: &str, status: u16) -> Self {
        self.entries
            .insert(resource.to_string(), Entry::Status(status));
        self
    }

    /// Makes `resource` fail before any response is produced.
    pub fn with_network_error(mut self, resource: &str, reason: &str) -> Self {
        self.entries
            .insert(resource.to_string(), Entry::Network(reason.to_string()));
        self
    }

    /// Replaces the body served for `resource`.
    pub fn insert(&mut self, resource: &str, body: impl Into<String>) {
        self.entries
            .insert(resource.to_string(), Entry::Body(body.into()));
    }

    /// Every resource requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self, resource: &str) -> usize {
        self.requests
            .borrow()
            .iter()
            .filter(|r| r.as_str() == resource)
            .count()
    }
}

impl LookupSource for StaticSource {
    async fn fetch(&self, resource: &str) -> Result<String> {
        self.requests.borrow_mut().push(resource.to_string());
        match self.entries.get(resource) {
            Some(Entry::Body(body)) => Ok(body.clone()),
            Some(Entry::Status(status)) => Err(GeoError::Fetch {
                resource: resource.to_string(),
                status: *status,
            }),
            Some(Entry::Network(reason)) => Err(GeoError::Network(reason.clone())),
            None => Err(GeoError::Fetch {
                resource: resource.to_string(),
                status: 404,
            }),
        }
    }
}
