//! File parsers for source code and locale catalogs.
//!
//! - `json`: locale catalog parser (JSON objects, key order preserved)
//! - `jsx`: JS/JSX/TS/TSX source parser (uses swc for AST generation)

pub mod json;
pub mod jsx;
