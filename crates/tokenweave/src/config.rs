//! Generation settings.
//!
//! Every field has a default, so an empty file (or no file) is a valid
//! configuration:
//!
//! ```yaml
//! theme:
//!   default_selector: html
//!   alternate_selector: 'html[data-theme="dark"]'
//! unresolved: skip            # skip | emit-empty | fail
//! legacy_property_derivation: false
//! global_aggregates: true
//! index_manifest: true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// What to do when a utility's token reference resolves to nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnresolvedPolicy {
    /// Warn and leave the utility category out of every artifact.
    #[default]
    Skip,
    /// Warn and emit the category's artifacts with no rules or names.
    EmitEmpty,
    /// Abort the run.
    Fail,
}

impl std::str::FromStr for UnresolvedPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "skip" => Ok(UnresolvedPolicy::Skip),
            "emit-empty" => Ok(UnresolvedPolicy::EmitEmpty),
            "fail" => Ok(UnresolvedPolicy::Fail),
            other => Err(format!(
                "unknown policy '{}' (expected skip, emit-empty or fail)",
                other
            )),
        }
    }
}

/// Selectors wrapping the two theme blocks of every variable sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSelectors {
    /// Unconditional block holding light-theme values.
    pub default_selector: String,
    /// Attribute-scoped block holding dark-theme values.
    pub alternate_selector: String,
}

impl Default for ThemeSelectors {
    fn default() -> Self {
        Self {
            default_selector: "html".to_string(),
            alternate_selector: r#"html[data-theme="dark"]"#.to_string(),
        }
    }
}

/// Settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub theme: ThemeSelectors,
    pub unresolved: UnresolvedPolicy,
    /// Derive a missing utility `property` from its prefix instead of failing.
    pub legacy_property_derivation: bool,
    /// Emit per-tier name lists spanning every group.
    pub global_aggregates: bool,
    /// Emit `index.css` importing every generated sheet.
    pub index_manifest: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            theme: ThemeSelectors::default(),
            unresolved: UnresolvedPolicy::default(),
            legacy_property_derivation: false,
            global_aggregates: true,
            index_manifest: true,
        }
    }
}

impl GeneratorConfig {
    /// Parses a configuration from YAML. Empty input yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse {
            path: None,
            message: e.to_string(),
        })
    }

    /// Loads a configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content).map_err(|e| match e {
            ConfigError::Parse { message, .. } => ConfigError::Parse {
                path: Some(path.to_path_buf()),
                message,
            },
            other => other,
        })
    }

    pub fn with_unresolved(mut self, policy: UnresolvedPolicy) -> Self {
        self.unresolved = policy;
        self
    }

    pub fn with_legacy_property_derivation(mut self, enabled: bool) -> Self {
        self.legacy_property_derivation = enabled;
        self
    }

    pub fn with_global_aggregates(mut self, enabled: bool) -> Self {
        self.global_aggregates = enabled;
        self
    }

    pub fn with_index_manifest(mut self, enabled: bool) -> Self {
        self.index_manifest = enabled;
        self
    }
}
