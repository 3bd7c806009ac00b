//! Catalog flattening into dot-path keys.
//!
//! Every key reachable from the catalog root is emitted, containers as well
//! as leaves. `{"a": {"b": "x"}}` flattens to `["a", "a.b"]`.

use std::collections::HashSet;

use anyhow::{Result, bail};
use serde_json::{Map, Value};

use crate::core::parsers::json::CatalogDocument;

/// Separator joining key segments into a dot-path key.
pub const KEY_SEPARATOR: char = '.';

/// Deepest object nesting accepted in a catalog.
pub const MAX_CATALOG_DEPTH: usize = 64;

/// Flattened key set of one catalog, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlattenedKeys {
    keys: Vec<String>,
    index: HashSet<String>,
}

impl FlattenedKeys {
    fn insert(&mut self, key: String) {
        if self.index.insert(key.clone()) {
            self.keys.push(key);
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Flatten a catalog document into its dot-path key set.
///
/// Containers are emitted before their descendants. Arrays are leaves: their
/// path is added once and their elements are not traversed.
///
/// # Errors
///
/// Fails when objects are nested deeper than [`MAX_CATALOG_DEPTH`].
pub fn flatten_catalog(document: &CatalogDocument) -> Result<FlattenedKeys> {
    let mut result = FlattenedKeys::default();
    flatten_object(document, "", 1, &mut result)?;
    Ok(result)
}

fn flatten_object(
    map: &Map<String, Value>,
    prefix: &str,
    depth: usize,
    result: &mut FlattenedKeys,
) -> Result<()> {
    if depth > MAX_CATALOG_DEPTH {
        bail!(
            "Catalog nesting exceeds the maximum depth of {} at '{}'",
            MAX_CATALOG_DEPTH,
            prefix
        );
    }

    for (key, value) in map {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}{}{}", prefix, KEY_SEPARATOR, key)
        };

        match value {
            Value::Object(children) => {
                result.insert(path.clone());
                flatten_object(children, &path, depth + 1, result)?;
            }
            _ => result.insert(path),
        }
    }

    Ok(())
}
