// crates/geoselect-core/src/loader/mod.rs

//! # Lookup Sources
//!
//! Concrete [`LookupSource`](crate::traits::LookupSource) implementations.
//! None of them cache: every fetch goes back to the underlying resource.

mod static_source;
pub use static_source::StaticSource;

#[cfg(feature = "fs")]
mod common_io;
#[cfg(feature = "fs")]
mod file;
#[cfg(feature = "fs")]
pub use file::FileSource;

#[cfg(feature = "http")]
mod http;
#[cfg(feature = "http")]
pub use http::HttpSource;
