//! Core analysis engine.
//!
//! The pipeline runs in two phases:
//!
//! 1. **Scan**: every source file matched by the include pattern is parsed and
//!    its translation keys are folded into one used-key set.
//! 2. **Compare**: every catalog in the locales directory is flattened and
//!    diffed against the complete used-key set.
//!
//! ## Module Structure
//!
//! - `context`: Run orchestration (`CheckContext`)
//! - `extract`: Translation call-site extraction from swc ASTs
//! - `file_scanner`: Source and catalog file enumeration
//! - `flatten`: Catalog flattening into dot-path keys
//! - `parsers`: Source and catalog parsers

pub mod context;
pub mod extract;
pub mod file_scanner;
pub mod flatten;
pub mod parsers;

pub use context::{CheckContext, RunSummary, SourceScan, UsedKeySet, collect_used_keys};
pub use flatten::{FlattenedKeys, KEY_SEPARATOR, flatten_catalog};
