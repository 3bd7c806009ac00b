use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".i18nunusedrc.json";

/// Rule options as supplied by the config file or the command line.
///
/// Every option is optional at this level. The rule only runs once all four
/// are present, see [`RuleOptions::activate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RuleOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locales_dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supported_extensions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locales: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
}

/// Options that passed the activation gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveOptions {
    pub locales_dir: PathBuf,
    /// Extensions without the leading dot, e.g. `["ts", "tsx"]`.
    pub supported_extensions: Vec<String>,
    /// Required for activation but not consulted when comparing keys.
    pub locales: String,
    pub folder: PathBuf,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn normalize_extensions(extensions: &[String]) -> Vec<String> {
    extensions
        .iter()
        .map(|ext| ext.trim().trim_start_matches('.').to_string())
        .filter(|ext| !ext.is_empty())
        .collect()
}

impl RuleOptions {
    /// Returns the active options, or `None` when any required option is
    /// missing. Empty strings count as missing; an empty extension list does not.
    pub fn activate(&self) -> Option<ActiveOptions> {
        let locales_dir = non_empty(&self.locales_dir)?;
        let supported_extensions = self.supported_extensions.as_ref()?;
        let locales = non_empty(&self.locales)?;
        let folder = non_empty(&self.folder)?;

        Some(ActiveOptions {
            locales_dir: PathBuf::from(locales_dir),
            supported_extensions: normalize_extensions(supported_extensions),
            locales: locales.to_string(),
            folder: PathBuf::from(folder),
        })
    }

    /// Layer `overrides` on top of `self`. Options set in `overrides` win.
    pub fn merge(self, overrides: RuleOptions) -> RuleOptions {
        RuleOptions {
            locales_dir: overrides.locales_dir.or(self.locales_dir),
            supported_extensions: overrides.supported_extensions.or(self.supported_extensions),
            locales: overrides.locales.or(self.locales),
            folder: overrides.folder.or(self.folder),
        }
    }
}

/// Resolve a configured path against the project root.
///
/// Absolute paths are kept. When the root is the current directory the path
/// is returned unchanged so diagnostics keep the user's spelling.
fn resolve_path(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    let is_cur_dir = root.components().all(|c| matches!(c, Component::CurDir));
    if is_cur_dir {
        path.to_path_buf()
    } else {
        let rel = path.strip_prefix(Path::new(".")).unwrap_or(path);
        root.join(rel)
    }
}

impl ActiveOptions {
    pub fn resolve_against(self, root: &Path) -> Self {
        Self {
            locales_dir: resolve_path(root, &self.locales_dir),
            folder: resolve_path(root, &self.folder),
            ..self
        }
    }

    /// The source include pattern, `folder/**/*.{ext1,ext2,...}`.
    pub fn include_pattern(&self) -> String {
        let folder = self.folder.to_string_lossy();
        format!(
            "{}/**/*.{{{}}}",
            folder.trim_end_matches('/'),
            self.supported_extensions.join(",")
        )
    }
}

/// Options written by `init`.
pub fn template_options() -> RuleOptions {
    RuleOptions {
        locales_dir: Some("./locales".to_string()),
        supported_extensions: Some(["js", "jsx", "ts", "tsx"].map(String::from).to_vec()),
        locales: Some("en".to_string()),
        folder: Some("./src".to_string()),
    }
}

pub fn default_config_json() -> Result<String> {
    serde_json::to_string_pretty(&template_options()).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = std::path::absolute(start_dir).unwrap_or_else(|_| start_dir.to_path_buf());

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub options: RuleOptions,
    /// True if options were loaded from a file.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let options: RuleOptions = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            tracing::debug!(path = %path.display(), "Loaded configuration");
            Ok(ConfigLoadResult {
                options,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            options: RuleOptions::default(),
            from_file: false,
        }),
    }
}
