//! Policy configuration for the reference two-sink wiring.
//!
//! [`PolicyConfig::defaults`] returns the embedded reference policy without
//! touching the filesystem; [`PolicyConfig::load_from`] layers a user TOML
//! file over those defaults, so a partial file only overrides what it names.

use crate::types::Severity;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_POLICY: &str = r#"
[channels]
network   = "warning"
optimizer = "warning"
data      = "routine"

[file]
directory      = "."
base_name      = "tdbread"
rotation_bytes = 5242880
fallback       = "debug"

[console]
fallback = "critical"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level logging policy.
///
/// `channels` is the shared per-channel floor table; both sinks combine it
/// (by OR) with their own `fallback` threshold.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    #[serde(default)]
    pub channels: HashMap<String, Severity>,
    #[serde(default)]
    pub file: FileSinkConfig,
    #[serde(default)]
    pub console: ConsoleSinkConfig,
}

/// `[file]` section: the rotating comprehensive log.
#[derive(Debug, Clone, Deserialize)]
pub struct FileSinkConfig {
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
    #[serde(default = "default_base_name")]
    pub base_name: String,
    #[serde(default = "default_rotation_bytes")]
    pub rotation_bytes: u64,
    #[serde(default = "default_file_fallback")]
    pub fallback: Severity,
}

fn default_directory() -> PathBuf { PathBuf::from(".") }
fn default_base_name() -> String { "tdbread".to_string() }
fn default_rotation_bytes() -> u64 { 5 * 1024 * 1024 }
fn default_file_fallback() -> Severity { Severity::Debug }

impl Default for FileSinkConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            base_name: default_base_name(),
            rotation_bytes: default_rotation_bytes(),
            fallback: default_file_fallback(),
        }
    }
}

/// `[console]` section: the stderr sink.
#[derive(Debug, Clone, Deserialize)]
pub struct ConsoleSinkConfig {
    #[serde(default = "default_console_fallback")]
    pub fallback: Severity,
}

fn default_console_fallback() -> Severity { Severity::Critical }

impl Default for ConsoleSinkConfig {
    fn default() -> Self {
        Self {
            fallback: default_console_fallback(),
        }
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self::defaults()
    }
}

impl PolicyConfig {
    /// Load from a TOML file, layered on top of the built-in defaults. A
    /// missing file yields the defaults unchanged.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_POLICY, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// The built-in reference policy without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_POLICY, config::FileFormat::Toml))
            .build()
            .expect("built-in default policy must be valid TOML")
            .try_deserialize()
            .expect("built-in default policy must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
