// crates/geoselect-core/src/controller.rs

//! # Selection Controller
//!
//! Owns the [`AppState`] and drives it through the country → state → city
//! chain. Each handler runs to completion before the next event is taken,
//! suspending only while a lookup resource is fetched.
//!
//! Failure policy:
//! - the initial country load is fatal to [`SelectionController::init`];
//! - state and city loads are caught per call and surface in the status line,
//!   leaving the other controls as they were.

use crate::common::{Level, Selection};
use crate::config::SelectorConfig;
use crate::error::{GeoError, Result};
use crate::model::convert::{children_from_json, options_from_json};
use crate::params::selection_from_query;
use crate::storage::{clear_saved_selection, load_saved_selection, save_selection};
use crate::traits::{LookupSource, SelectionStore};
use crate::view::{AppState, Status, ViewModel};
use tracing::{debug, error, warn};

/// User-driven events, in the order a host receives them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    CountryChanged(String),
    StateChanged(String),
    CityChanged(String),
    Clear,
    Reload,
}

pub struct SelectionController<S, P> {
    source: S,
    store: P,
    config: SelectorConfig,
    params: Selection,
    state: AppState,
}

impl<S: LookupSource, P: SelectionStore> SelectionController<S, P> {
    pub fn new(source: S, store: P) -> Self {
        Self {
            source,
            store,
            config: SelectorConfig::default(),
            params: Selection::default(),
            state: AppState::default(),
        }
    }

    pub fn with_config(mut self, config: SelectorConfig) -> Self {
        self.config = config;
        self
    }

    /// Uses the query string (or full URL) of the hosting page for restore.
    pub fn with_query(mut self, query: &str) -> Self {
        self.params = selection_from_query(query);
        self
    }

    pub fn with_params(mut self, params: Selection) -> Self {
        self.params = params;
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn store(&self) -> &P {
        &self.store
    }

    pub fn into_parts(self) -> (S, P) {
        (self.source, self.store)
    }

    /// Render step: a snapshot of controls, status and summary.
    pub fn render(&self) -> ViewModel {
        self.state.render()
    }

    /// What the persisted slot currently holds.
    pub fn saved_selection(&self) -> Selection {
        load_saved_selection(&self.store, &self.config.storage_key)
    }

    // -----------------------------------------------------------------------
    // Initialization
    // -----------------------------------------------------------------------

    /// Loads countries, then restores the previous selection.
    ///
    /// Fails only when the country list cannot be loaded; the error is also
    /// left in the status line.
    pub async fn init(&mut self) -> Result<()> {
        if let Err(e) = self.load_countries().await {
            error!(error = %e, "country list unavailable, initialization stopped");
            self.state.status = Status::error(e.to_string());
            return Err(e);
        }
        self.restore_selection().await;
        Ok(())
    }

    /// Throws away all control state and runs [`init`](Self::init) again.
    pub async fn reload(&mut self) -> Result<()> {
        debug!("reloading lookup data");
        self.state = AppState::default();
        self.init().await
    }

    pub async fn load_countries(&mut self) -> Result<()> {
        self.state.status = Status::info("Loading countries…");
        let body = self.source.fetch(&self.config.countries).await?;
        let options = options_from_json(&body)?;
        debug!(count = options.len(), "countries loaded");
        self.state.country.set_options(options);
        self.state.status = Status::default();
        Ok(())
    }

    /// Populates the state control with the states of `country_code`.
    pub async fn load_states(&mut self, country_code: &str) -> Result<()> {
        self.load_children(Level::State, country_code).await
    }

    /// Populates the city control with the cities of `state_code`.
    pub async fn load_cities(&mut self, state_code: &str) -> Result<()> {
        self.load_children(Level::City, state_code).await
    }

    async fn load_children(&mut self, level: Level, parent: &str) -> Result<()> {
        self.state.status = Status::info(format!("Loading {}…", level.plural()));
        self.state.control_mut(level).disabled = true;

        let resource = self.config.resource(level).to_string();
        let body = self.source.fetch(&resource).await?;
        let options = children_from_json(&body, parent)?;
        debug!(?level, parent, count = options.len(), "dependent list loaded");

        self.state.control_mut(level).set_options(options);
        self.state.status = Status::default();
        Ok(())
    }

    /// Applies the initial selection: URL parameters first, then the
    /// persisted selection, field by field.
    ///
    /// The chain stops at the first level that ends up unselected, either
    /// because nothing was requested or because the requested value is not
    /// among the loaded options. Returns the selection now shown.
    pub async fn restore_selection(&mut self) -> Selection {
        let saved = self.saved_selection();
        let wanted = self.params.clone().or(&saved);
        debug!(?wanted, "restoring selection");

        if wanted.country.is_empty() || !self.state.country.select(&wanted.country) {
            return self.state.selection();
        }
        if let Err(e) = self.load_states(&wanted.country).await {
            self.report(e);
            return self.state.selection();
        }

        if wanted.state.is_empty() || !self.state.state.select(&wanted.state) {
            return self.state.selection();
        }
        if let Err(e) = self.load_cities(&wanted.state).await {
            self.report(e);
            return self.state.selection();
        }

        if !wanted.city.is_empty() {
            self.state.city.select(&wanted.city);
        }
        self.state.selection()
    }

    // -----------------------------------------------------------------------
    // Event handlers
    // -----------------------------------------------------------------------

    pub async fn on_country_change(&mut self, code: &str) {
        self.state.country.select(code);
        self.state.reset_below(Level::Country);

        let country = self.state.country.value.clone();
        if !country.is_empty() {
            if let Err(e) = self.load_states(&country).await {
                self.report(e);
            }
        }
        self.persist();
    }

    pub async fn on_state_change(&mut self, code: &str) {
        self.state.state.select(code);
        self.state.reset_below(Level::State);

        let state = self.state.state.value.clone();
        if !state.is_empty() {
            if let Err(e) = self.load_cities(&state).await {
                self.report(e);
            }
        }
        self.persist();
    }

    pub fn on_city_change(&mut self, code: &str) {
        self.state.city.select(code);
        self.persist();
    }

    /// Forgets the persisted selection and unselects every control.
    pub fn clear(&mut self) {
        if let Err(e) = clear_saved_selection(&mut self.store, &self.config.storage_key) {
            self.report(e);
        }
        self.state.country.value.clear();
        self.state.reset_below(Level::Country);
    }

    /// Routes one event to its handler.
    ///
    /// Only [`Event::Reload`] can fail, with the same fatal country-load
    /// error as [`init`](Self::init).
    pub async fn dispatch(&mut self, event: Event) -> Result<()> {
        debug!(?event, "dispatch");
        match event {
            Event::CountryChanged(code) => self.on_country_change(&code).await,
            Event::StateChanged(code) => self.on_state_change(&code).await,
            Event::CityChanged(code) => self.on_city_change(&code),
            Event::Clear => self.clear(),
            Event::Reload => return self.reload().await,
        }
        Ok(())
    }

    fn persist(&mut self) {
        let selection = self.state.selection();
        if let Err(e) = save_selection(&mut self.store, &self.config.storage_key, &selection) {
            self.report(e);
        }
    }

    fn report(&mut self, e: GeoError) {
        warn!(error = %e, "selection step failed");
        self.state.status = Status::error(e.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::StaticSource;
    use crate::storage::MemoryStore;
    use crate::view::Placeholder;
    use futures::executor::block_on;

    fn source() -> StaticSource {
        StaticSource::new()
            .with(
                "countries.json",
                r#"[{"code":"US","name":"United States"},{"code":"CA","name":"Canada"}]"#,
            )
            .with(
                "states.json",
                r#"{"US":[{"code":"CA","name":"California"},{"code":"NY","name":"New York"}],
                    "CA":[{"code":"ON","name":"Ontario"}]}"#,
            )
            .with(
                "cities.json",
                r#"{"CA":[{"code":"LA","name":"Los Angeles"}],"ON":[{"id":1,"name":"Toronto"}]}"#,
            )
    }

    #[test]
    fn country_change_resets_dependents_before_loading() {
        // states.json fails, so whatever the state control shows came from the
        // reset, not from new data.
        let src = source().with_status("states.json", 503);
        let mut ctl = SelectionController::new(src, MemoryStore::new());
        block_on(ctl.init()).unwrap();

        block_on(ctl.on_country_change("US"));
        let s = ctl.state();
        assert!(s.state.options.is_empty() && s.state.disabled);
        assert!(s.city.options.is_empty() && s.city.disabled);
        assert_eq!(s.city.placeholder, Placeholder::Reset);
        assert!(s.status.is_error());
        assert_eq!(s.status.message, "Failed to load states.json: 503");
        // the country choice itself survives and is persisted
        assert_eq!(ctl.saved_selection(), Selection::new("US", "", ""));
    }

    #[test]
    fn state_change_keeps_country() {
        let mut ctl = SelectionController::new(source(), MemoryStore::new());
        block_on(async {
            ctl.init().await.unwrap();
            ctl.on_country_change("CA").await;
            ctl.on_state_change("ON").await;
        });
        assert_eq!(ctl.saved_selection(), Selection::new("CA", "ON", ""));
        assert_eq!(ctl.state().city.options[0].value, "1");
    }

    #[test]
    fn unselecting_country_skips_loading() {
        let mut ctl = SelectionController::new(source(), MemoryStore::new());
        block_on(async {
            ctl.init().await.unwrap();
            ctl.on_country_change("US").await;
            ctl.on_country_change("").await;
        });
        assert_eq!(ctl.source().request_count("states.json"), 1);
        assert_eq!(ctl.saved_selection(), Selection::default());
        assert!(ctl.state().state.disabled);
    }

    #[test]
    fn dispatch_routes_events() {
        let mut ctl = SelectionController::new(source(), MemoryStore::new());
        block_on(async {
            ctl.init().await.unwrap();
            for ev in [
                Event::CountryChanged("US".into()),
                Event::StateChanged("CA".into()),
                Event::CityChanged("LA".into()),
            ] {
                ctl.dispatch(ev).await.unwrap();
            }
        });
        assert_eq!(ctl.render().selection, Selection::new("US", "CA", "LA"));

        block_on(ctl.dispatch(Event::Clear)).unwrap();
        assert!(ctl.render().selection.is_empty());
    }
}
