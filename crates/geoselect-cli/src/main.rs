//! geoselect — command-line front end for geoselect-core
//!
//! Runs the same selection controller a web page would, with a directory or
//! URL standing in for the page's data folder and a JSON file standing in
//! for local storage.
//!
//! Usage examples
//! --------------
//!
//! - Restore and print the current selection
//!   $ geoselect show
//!
//! - Pick a city (codes or names, case and accents ignored)
//!   $ geoselect select --country us --state california --city "Los Angeles"
//!
//! - Simulate opening a shared link
//!   $ geoselect --query "https://example.org/?country=DE&state=BY" show
//!
//! - Inspect the lookup tables
//!   $ geoselect countries
//!   $ geoselect states canada
//!   $ geoselect cities BY
//!   $ geoselect stats
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::{anyhow, bail, Context};
use clap::Parser;
use futures::executor::block_on;
#[cfg(feature = "http")]
use geoselect_core::HttpSource;
use geoselect_core::model::find_option;
use geoselect_core::{
    Event, FileSource, FileStore, Level, LookupSource, LookupTables, SelectionController,
    SelectorConfig, StatusKind, ViewModel,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Where the lookup JSON lives for this run.
enum DataSource {
    File(FileSource),
    #[cfg(feature = "http")]
    Http(HttpSource),
}

impl LookupSource for DataSource {
    async fn fetch(&self, resource: &str) -> geoselect_core::Result<String> {
        match self {
            DataSource::File(src) => src.fetch(resource).await,
            #[cfg(feature = "http")]
            DataSource::Http(src) => src.fetch(resource).await,
        }
    }
}

fn open_source(data: Option<&str>) -> anyhow::Result<DataSource> {
    let Some(data) = data else {
        return Ok(DataSource::File(FileSource::bundled()));
    };
    if data.starts_with("http://") || data.starts_with("https://") {
        #[cfg(feature = "http")]
        return Ok(DataSource::Http(HttpSource::new(data)?));
        #[cfg(not(feature = "http"))]
        bail!("{data} is a URL but geoselect was built without the 'http' feature");
    }
    Ok(DataSource::File(FileSource::new(data)))
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let source = open_source(args.data.as_deref())?;
    let store_path = args
        .store
        .clone()
        .unwrap_or_else(|| PathBuf::from("selection.json"));
    let store = FileStore::new(store_path);

    block_on(run(args, source, store))
}

async fn run(args: CliArgs, source: DataSource, store: FileStore) -> anyhow::Result<()> {
    let config = SelectorConfig::default();

    match args.command {
        Commands::Countries => {
            let tables = LookupTables::fetch_all(&source, &config).await?;
            for c in &tables.countries {
                println!("{} ({})", c.label, c.value);
            }
        }

        Commands::States { country } => {
            let tables = LookupTables::fetch_all(&source, &config).await?;
            let Some(c) = find_option(&tables.countries, &country) else {
                bail!("No country found for: {country}");
            };
            let states = tables.states_for(&c.value);
            if states.is_empty() {
                println!("No states found for {}", c.label);
            } else {
                println!("States in {}:", c.label);
                for s in states {
                    println!("- {} ({})", s.label, s.value);
                }
            }
        }

        Commands::Cities { state } => {
            let tables = LookupTables::fetch_all(&source, &config).await?;
            let cities = tables.cities_for(&state);
            if cities.is_empty() {
                println!("No cities found for: {state}");
            } else {
                for city in cities {
                    println!("- {} ({})", city.label, city.value);
                }
            }
        }

        Commands::Stats => {
            let stats = LookupTables::fetch_all(&source, &config).await?.stats();
            println!("Lookup statistics:");
            println!("  Countries: {}", stats.countries);
            println!("  States/Regions: {}", stats.states);
            println!("  Cities: {}", stats.cities);
        }

        Commands::Clear => {
            let mut ctl = controller(source, store, args.query.as_deref());
            ctl.dispatch(Event::Clear).await?;
            println!("Selection cleared.");
        }

        Commands::Show => {
            let mut ctl = controller(source, store, args.query.as_deref());
            ctl.init().await?;
            print_view(&ctl.render());
        }

        Commands::Reload => {
            let mut ctl = controller(source, store, args.query.as_deref());
            ctl.dispatch(Event::Reload).await?;
            print_view(&ctl.render());
        }

        Commands::Select {
            country,
            state,
            city,
        } => {
            let mut ctl = controller(source, store, args.query.as_deref());
            ctl.init().await?;

            if let Some(q) = country {
                let code = resolve(&ctl.render(), Level::Country, &q)?;
                ctl.dispatch(Event::CountryChanged(code)).await?;
            }
            if let Some(q) = state {
                let code = resolve(&ctl.render(), Level::State, &q)?;
                ctl.dispatch(Event::StateChanged(code)).await?;
            }
            if let Some(q) = city {
                let code = resolve(&ctl.render(), Level::City, &q)?;
                ctl.dispatch(Event::CityChanged(code)).await?;
            }
            print_view(&ctl.render());
        }
    }

    Ok(())
}

fn controller(
    source: DataSource,
    store: FileStore,
    query: Option<&str>,
) -> SelectionController<DataSource, FileStore> {
    let ctl = SelectionController::new(source, store);
    match query {
        Some(q) => ctl.with_query(q),
        None => ctl,
    }
}

/// Maps user input to an option value of the given control.
fn resolve(view: &ViewModel, level: Level, query: &str) -> anyhow::Result<String> {
    let control = view.control(level);
    if control.options.is_empty() {
        return Err(anyhow!(
            "Cannot choose a {} yet: {}",
            level.noun(),
            control.placeholder
        ));
    }
    find_option(&control.options, query)
        .map(|o| o.value.clone())
        .with_context(|| format!("No {} found for: {query}", level.noun()))
}

fn print_view(view: &ViewModel) {
    for level in Level::ALL {
        let control = view.control(level);
        let chosen = control.options.iter().find(|o| o.value == control.value);
        let label = match chosen {
            Some(o) => format!("{} ({})", o.label, o.value),
            None => control.placeholder.clone(),
        };
        let suffix = if control.disabled { " [disabled]" } else { "" };
        println!(
            "{:<8} {label}  [{} options]{suffix}",
            format!("{}:", capitalize(level.noun())),
            control.options.len()
        );
    }

    let summary = &view.summary;
    println!(
        "Summary: {} / {} / {}",
        summary.country, summary.state, summary.city
    );
    if !view.status.message.is_empty() {
        match view.status.kind {
            StatusKind::Error => eprintln!("Error: {}", view.status.message),
            StatusKind::Info => println!("{}", view.status.message),
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
