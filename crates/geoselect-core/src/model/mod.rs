// crates/geoselect-core/src/model/mod.rs
pub mod convert;
pub mod record;
pub mod tables;

pub use record::{find_option, LocationOption, LookupRecord};
pub use tables::{ByParent, LookupTables};
