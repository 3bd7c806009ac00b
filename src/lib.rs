//! i18n-unused - find unused keys in nested locale catalogs
//!
//! Scans a source tree for `t("some.key")` calls and reports, per locale
//! catalog, every nested key that no call references.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Rule options, config file loading and activation
//! - `core`: Analysis pipeline (scan, extract, flatten, compare)
//! - `issues`: Issue types and the reporting sink
//! - `rules`: Detection rules

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod rules;
