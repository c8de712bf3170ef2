// crates/geoselect-core/src/config.rs
use crate::common::Level;
use std::path::PathBuf;

pub const COUNTRIES_RESOURCE: &str = "countries.json";
pub const STATES_RESOURCE: &str = "states.json";
pub const CITIES_RESOURCE: &str = "cities.json";
pub const STORAGE_KEY: &str = "selection";
/// Shown in summaries for an unselected level and in reset dependent controls.
pub const EMPTY_MARK: &str = "—";

/// Names of the lookup resources and of the persisted slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorConfig {
    pub countries: String,
    pub states: String,
    pub cities: String,
    pub storage_key: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            countries: COUNTRIES_RESOURCE.to_string(),
            states: STATES_RESOURCE.to_string(),
            cities: CITIES_RESOURCE.to_string(),
            storage_key: STORAGE_KEY.to_string(),
        }
    }
}

impl SelectorConfig {
    /// Directory holding the sample dataset that ships with this crate.
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn resource(&self, level: Level) -> &str {
        match level {
            Level::Country => &self.countries,
            Level::State => &self.states,
            Level::City => &self.cities,
        }
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Prefix every resource name, e.g. `data/` for a page that serves its
    /// lookup files from a subdirectory.
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        let join = |name: &str| {
            if prefix.is_empty() {
                name.to_string()
            } else {
                format!("{}/{}", prefix.trim_end_matches('/'), name)
            }
        };
        self.countries = join(&self.countries);
        self.states = join(&self.states);
        self.cities = join(&self.cities);
        self
    }
}
