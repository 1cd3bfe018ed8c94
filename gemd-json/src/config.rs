//! Serializer configuration, loadable from TOML.
//!
//! ```toml
//! auto_scope = "auto"
//! preferred_scope = "lims"
//! pretty = false
//! ```

use gemd_types::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Scope used for uids the serializer assigns itself.
pub const DEFAULT_AUTO_SCOPE: &str = "auto";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GemdJsonConfig {
    /// Scope under which missing uids are assigned.
    #[serde(default = "default_auto_scope")]
    pub auto_scope: String,
    /// Scope to link by when an entity has it; otherwise the smallest scope.
    #[serde(default)]
    pub preferred_scope: Option<String>,
    /// Emit indented JSON.
    #[serde(default)]
    pub pretty: bool,
}

fn default_auto_scope() -> String {
    DEFAULT_AUTO_SCOPE.to_string()
}

impl Default for GemdJsonConfig {
    fn default() -> Self {
        Self {
            auto_scope: default_auto_scope(),
            preferred_scope: None,
            pretty: false,
        }
    }
}

impl GemdJsonConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;
        debug!(path = %path.display(), auto_scope = %config.auto_scope, "Loaded serializer config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.auto_scope.trim().is_empty() {
            return Err(Error::Config("auto_scope must not be empty".to_string()));
        }
        if let Some(scope) = &self.preferred_scope
            && scope.trim().is_empty()
        {
            return Err(Error::Config(
                "preferred_scope must not be empty when set".to_string(),
            ));
        }
        Ok(())
    }
}
