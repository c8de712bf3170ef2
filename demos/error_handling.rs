//! Error handling example for geoselect-rs
//!
//! This example demonstrates how failures surface: a missing country list
//! stops initialization, while dependent lists only report in the status line.

use futures::executor::block_on;
use geoselect_rs::prelude::*;

const COUNTRIES: &str = r#"[{"code":"US","name":"United States"}]"#;

fn main() -> Result<()> {
    println!("=== geoselect-rs Error Handling Example ===\n");

    // Example 1: Country list unavailable
    println!("--- Example 1: countries.json answers 500 ---");
    let src = StaticSource::new().with_status("countries.json", 500);
    let mut ctl = SelectionController::new(src, MemoryStore::new());
    match block_on(ctl.init()) {
        Ok(()) => println!("✓ initialized"),
        Err(e) => println!("✗ initialization stopped: {e}"),
    }
    println!("  status: {:?}", ctl.render().status);
    println!();

    // Example 2: State list unavailable
    println!("--- Example 2: states.json unreachable ---");
    let src = StaticSource::new()
        .with("countries.json", COUNTRIES)
        .with_network_error("states.json", "connection refused");
    let mut ctl = SelectionController::new(src, MemoryStore::new());
    block_on(ctl.init())?;
    block_on(ctl.on_country_change("US"));
    let view = ctl.render();
    println!("  status: {}", view.status.message);
    println!("  country still chosen: {}", view.summary.country);
    println!("  saved: {:?}", ctl.saved_selection());
    println!();

    // Example 3: Country missing from the states table
    println!("--- Example 3: parent code absent from states.json ---");
    let src = StaticSource::new()
        .with("countries.json", COUNTRIES)
        .with("states.json", "{}");
    let mut ctl = SelectionController::new(src, MemoryStore::new());
    block_on(ctl.init())?;
    block_on(ctl.on_country_change("US"));
    let view = ctl.render();
    println!(
        "  state control: disabled={} placeholder={:?} (status kind {:?})",
        view.state.disabled, view.state.placeholder, view.status.kind
    );
    println!();

    // Example 4: Recovering with reload
    println!("--- Example 4: reload after the data came back ---");
    let mut src = StaticSource::new().with_status("countries.json", 503);
    src.insert("states.json", "{}");
    let mut ctl = SelectionController::new(src, MemoryStore::new());
    let _ = block_on(ctl.init());
    let (mut src, store) = ctl.into_parts();
    src.insert("countries.json", COUNTRIES);
    let mut ctl = SelectionController::new(src, store);
    block_on(ctl.dispatch(Event::Reload))?;
    println!("  countries after reload: {}", ctl.render().country.options.len());

    Ok(())
}
