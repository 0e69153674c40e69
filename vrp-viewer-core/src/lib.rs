//! A core crate of the route snapshot viewer.
//!
//! It contains a data model of solution snapshots produced by a VRP solver (customers, routes and pickup/delivery
//! pairs), shape tolerant readers of catalog and step index resources, and a cascading loader which fetches the
//! catalog, then the step list of a selected case, then the dataset of a selected step, discarding results which
//! arrive for an outdated selection.
//!
//! # Examples
//!
//! ```
//! use vrp_viewer_core::format::normalize_catalog;
//!
//! let cases = normalize_catalog(&serde_json::json!(["case_1.json", "case_2.json"]));
//!
//! assert_eq!(cases.len(), 2);
//! assert_eq!(cases[0].name, "case_1");
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/features/mod.rs"]
mod features;

pub mod config;
pub mod format;
pub mod loading;
pub mod models;
pub mod prelude;
pub mod utils;
