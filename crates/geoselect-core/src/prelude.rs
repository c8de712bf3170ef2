//! Convenience re-exports for hosts and demos.

pub use crate::common::{Level, LookupStats, Selection};
pub use crate::config::SelectorConfig;
pub use crate::controller::{Event, SelectionController};
pub use crate::error::{GeoError, Result};
pub use crate::loader::StaticSource;
#[cfg(feature = "fs")]
pub use crate::loader::FileSource;
#[cfg(feature = "http")]
pub use crate::loader::HttpSource;
pub use crate::model::{LocationOption, LookupTables};
pub use crate::storage::{load_saved_selection, save_selection, MemoryStore};
#[cfg(feature = "fs")]
pub use crate::storage::FileStore;
pub use crate::traits::{LookupSource, NameMatch, SelectionStore};
pub use crate::view::{StatusKind, ViewModel};
