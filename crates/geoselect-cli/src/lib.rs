//! geoselect-cli
//! =============
//!
//! Command-line front end for `geoselect-core`.
//!
//! This crate primarily provides a binary (`geoselect`). The library target
//! exists so that docs.rs renders this overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! geoselect show
//! geoselect select --country US --state California --city "los angeles"
//! geoselect --query "country=DE&state=BY" show
//! geoselect --data https://example.org/app/data countries
//! geoselect clear
//! ```
//!
//! For programmatic access use the [`geoselect-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
