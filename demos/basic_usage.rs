//! Basic usage example for geoselect-rs
//!
//! This example demonstrates how to:
//! - Drive the controller with the bundled sample dataset
//! - Walk the country → state → city chain
//! - Restore a selection from a URL query after a "page load"

use futures::executor::block_on;
use geoselect_rs::prelude::*;

fn print_view(view: &ViewModel) {
    for level in Level::ALL {
        let control = view.control(level);
        let state = if control.disabled { "disabled" } else { "enabled" };
        println!(
            "  {:<8} [{state}] {} option(s), placeholder {:?}",
            level.noun(),
            control.options.len(),
            control.placeholder
        );
    }
    println!(
        "  summary: {} / {} / {}",
        view.summary.country, view.summary.state, view.summary.city
    );
}

fn main() -> Result<()> {
    println!("=== geoselect-rs Basic Usage Example ===\n");

    let mut store = MemoryStore::new();

    // Example 1: First visit, nothing saved
    println!("--- Example 1: Initial load ---");
    let mut ctl = SelectionController::new(FileSource::bundled(), &mut store);
    block_on(ctl.init())?;
    print_view(&ctl.render());
    println!();

    // Example 2: Pick a city
    println!("--- Example 2: United States → California → Los Angeles ---");
    block_on(async {
        ctl.on_country_change("US").await;
        ctl.on_state_change("CA").await;
        ctl.on_city_change("LA");
    });
    print_view(&ctl.render());
    println!("  saved: {:?}", ctl.saved_selection());
    println!();
    drop(ctl);

    // Example 3: Next visit restores from the saved selection
    println!("--- Example 3: Restore after reload ---");
    let mut ctl = SelectionController::new(FileSource::bundled(), &mut store);
    block_on(ctl.init())?;
    print_view(&ctl.render());
    println!();
    drop(ctl);

    // Example 4: URL parameters win over the saved selection
    println!("--- Example 4: Shared link ?country=DE&state=BY&city=MUC ---");
    let mut ctl = SelectionController::new(FileSource::bundled(), &mut store)
        .with_query("https://example.org/pick?country=DE&state=BY&city=MUC");
    block_on(ctl.init())?;
    print_view(&ctl.render());

    Ok(())
}
