// crates/geoselect-core/src/model/tables.rs
use super::convert::{by_parent_from_json, options_from_json};
use super::record::LocationOption;
use crate::common::LookupStats;
use crate::config::SelectorConfig;
use crate::error::Result;
use crate::traits::LookupSource;
use std::collections::HashMap;

/// Parent code -> ordered child options.
pub type ByParent = HashMap<String, Vec<LocationOption>>;

/// All three lookup tables held in memory at once.
///
/// The controller itself never keeps these around (it re-fetches per load);
/// this type serves inspection tools and demos.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LookupTables {
    pub countries: Vec<LocationOption>,
    pub states_by_country: ByParent,
    pub cities_by_state: ByParent,
}

impl LookupTables {
    /// Fetches and decodes the three resources named in `config`.
    pub async fn fetch_all<S: LookupSource>(source: &S, config: &SelectorConfig) -> Result<Self> {
        let countries = options_from_json(&source.fetch(&config.countries).await?)?;
        let states_by_country = by_parent_from_json(&source.fetch(&config.states).await?)?;
        let cities_by_state = by_parent_from_json(&source.fetch(&config.cities).await?)?;
        Ok(Self {
            countries,
            states_by_country,
            cities_by_state,
        })
    }

    pub fn states_for(&self, country: &str) -> &[LocationOption] {
        self.states_by_country
            .get(country)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn cities_for(&self, state: &str) -> &[LocationOption] {
        self.cities_by_state
            .get(state)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn stats(&self) -> LookupStats {
        LookupStats {
            countries: self.countries.len(),
            states: self.states_by_country.values().map(Vec::len).sum(),
            cities: self.cities_by_state.values().map(Vec::len).sum(),
        }
    }
}
