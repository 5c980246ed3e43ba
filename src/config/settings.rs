use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub parallel_workers: usize,
    pub cache_dir: PathBuf,
    pub use_cache: bool,
    pub write_output: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            parallel_workers: 0,
            cache_dir: PathBuf::from(".cache"),
            use_cache: true,
            write_output: true,
        }
    }
}

impl Settings {
    pub fn from_yaml(yaml: &str) -> crate::error::Result<Self> {
        serde_yml::from_str(yaml).map_err(|e| {
            crate::error::TaxIntakeError::config(format!("Failed to parse settings YAML: {e}"))
        })
    }

    pub fn from_file(path: &Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }
}
