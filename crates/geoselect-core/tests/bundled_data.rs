#![cfg(feature = "fs")]

use futures::executor::block_on;
use geoselect_core::prelude::*;

#[test]
fn bundled_tables_are_consistent() {
    let tables = block_on(LookupTables::fetch_all(
        &FileSource::bundled(),
        &SelectorConfig::default(),
    ))
    .unwrap();

    let stats = tables.stats();
    assert_eq!(stats.countries, 4);
    assert!(stats.states > 0 && stats.cities > 0);

    // every state list hangs off a known country
    for parent in tables.states_by_country.keys() {
        assert!(tables.countries.iter().any(|c| &c.value == parent));
    }
    assert!(tables.states_for("MC").is_empty());
    assert_eq!(tables.cities_for("BY")[0].label, "München");
}

#[test]
fn file_backed_session_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let store_path = dir.path().join("selection.json");

    let mut ctl = SelectionController::new(FileSource::bundled(), FileStore::new(&store_path));
    block_on(async {
        ctl.init().await.unwrap();
        ctl.on_country_change("DE").await;
        ctl.on_state_change("BY").await;
        ctl.on_city_change("MUC");
    });
    drop(ctl);

    let mut ctl = SelectionController::new(FileSource::bundled(), FileStore::new(&store_path));
    block_on(ctl.init()).unwrap();
    let view = ctl.render();
    assert_eq!(view.summary.country, "Germany");
    assert_eq!(view.summary.state, "Bayern");
    assert_eq!(view.summary.city, "München");
}

#[test]
fn country_without_states_shows_none_found() {
    let mut ctl = SelectionController::new(FileSource::bundled(), MemoryStore::new());
    block_on(async {
        ctl.init().await.unwrap();
        ctl.on_country_change("MC").await;
    });
    let view = ctl.render();
    assert_eq!(view.state.placeholder, "No states found");
    assert!(view.state.disabled);
    assert_eq!(view.status.kind, StatusKind::Info);
}
