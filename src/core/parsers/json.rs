use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};

/// A parsed locale catalog: a JSON object whose values are nested objects
/// or scalar leaves. Key order follows the file.
pub type CatalogDocument = Map<String, Value>;

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Parse catalog content. The document root must be an object.
pub fn parse_catalog(content: &str) -> Result<CatalogDocument> {
    let json: Value = serde_json::from_str(content).context("Invalid JSON")?;
    match json {
        Value::Object(map) => Ok(map),
        other => bail!(
            "Expected a JSON object at the root, found {}",
            value_kind(&other)
        ),
    }
}

pub fn parse_catalog_file(path: &Path) -> Result<CatalogDocument> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read locale file: {:?}", path))?;

    parse_catalog(&content).with_context(|| format!("Failed to parse locale file: {:?}", path))
}
