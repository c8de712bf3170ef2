// crates/geoselect-core/src/lib.rs

//! # geoselect-core
//!
//! A cascading country → state → city selection controller.
//!
//! The controller fetches three lookup tables (countries, states by country,
//! cities by state), feeds them into three dependent choice controls, and
//! keeps the user's [`Selection`] persisted across sessions. Where the data
//! comes from and where the selection is stored are pluggable through the
//! [`LookupSource`] and [`SelectionStore`] traits.
//!
//! ```rust
//! use futures::executor::block_on;
//! use geoselect_core::prelude::*;
//!
//! let source = StaticSource::new()
//!     .with("countries.json", r#"[{"code":"US","name":"United States"}]"#)
//!     .with("states.json", r#"{"US":[{"code":"CA","name":"California"}]}"#)
//!     .with("cities.json", r#"{"CA":[{"code":"LA","name":"Los Angeles"}]}"#);
//!
//! let mut ctl = SelectionController::new(source, MemoryStore::new());
//! block_on(async {
//!     ctl.init().await.unwrap();
//!     ctl.on_country_change("US").await;
//!     ctl.on_state_change("CA").await;
//!     ctl.on_city_change("LA");
//! });
//!
//! let view = ctl.render();
//! assert_eq!(view.summary.city, "Los Angeles");
//! ```

pub mod common;
pub mod config;
pub mod controller;
pub mod error;
pub mod loader;
pub mod model;
pub mod params;
pub mod storage;
pub mod text;
pub mod traits;
pub mod view;

pub mod prelude;

// Re-exports
pub use crate::common::{Level, LookupStats, Selection};
pub use crate::config::SelectorConfig;
pub use crate::controller::{Event, SelectionController};
pub use crate::error::{GeoError, Result};
pub use crate::loader::StaticSource;
#[cfg(feature = "fs")]
pub use crate::loader::FileSource;
#[cfg(feature = "http")]
pub use crate::loader::HttpSource;
pub use crate::model::{LocationOption, LookupRecord, LookupTables};
pub use crate::storage::MemoryStore;
#[cfg(feature = "fs")]
pub use crate::storage::FileStore;
pub use crate::traits::{LookupSource, NameMatch, SelectionStore};
pub use crate::view::{AppState, Control, Placeholder, Status, StatusKind, Summary, ViewModel};
