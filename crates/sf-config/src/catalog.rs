//! Catalog source configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Optional catalog TOML file. Unset means the built-in
    /// store-and-forward script.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl CatalogConfig {
    #[must_use]
    pub fn uses_builtin(&self) -> bool {
        self.path
            .as_ref()
            .is_none_or(|path| path.as_os_str().is_empty())
    }
}
