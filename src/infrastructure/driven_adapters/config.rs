//! Builder Configuration
//!
//! Locations of the address book roots and the registry artifact. Defaults
//! are fixed; an optional `registry-builder` config file may override them.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, File};
use serde::Deserialize;

/// Default primary address book root
pub const DEFAULT_PRIMARY_DIR: &str = "./addresses";

/// Default override address book root, merged after the primary root
pub const DEFAULT_OVERRIDE_DIR: &str = "./config/addresses";

/// Default registry artifact path
pub const DEFAULT_OUTPUT_PATH: &str = "./EulerChains.json";

/// Name of the optional config file, resolved by extension
pub const CONFIG_FILE_NAME: &str = "registry-builder";

/// Address book roots configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddressesConfig {
    pub primary_dir: PathBuf,
    pub override_dir: PathBuf,
}

impl AddressesConfig {
    /// Roots in merge order
    #[must_use]
    pub fn roots(&self) -> Vec<PathBuf> {
        vec![self.primary_dir.clone(), self.override_dir.clone()]
    }
}

/// Output artifact configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    pub path: PathBuf,
}

/// Builder configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BuilderConfig {
    pub addresses: AddressesConfig,
    pub output: OutputConfig,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            addresses: AddressesConfig {
                primary_dir: PathBuf::from(DEFAULT_PRIMARY_DIR),
                override_dir: PathBuf::from(DEFAULT_OVERRIDE_DIR),
            },
            output: OutputConfig {
                path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            },
        }
    }
}

impl BuilderConfig {
    /// Load configuration relative to the working directory
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new(CONFIG_FILE_NAME))
    }

    /// Load configuration, overlaying the file at `config_path` if present
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is malformed or has unexpected types.
    pub fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        Config::builder()
            // Start with the fixed locations
            .set_default("addresses.primary_dir", DEFAULT_PRIMARY_DIR)?
            .set_default("addresses.override_dir", DEFAULT_OVERRIDE_DIR)?
            .set_default("output.path", DEFAULT_OUTPUT_PATH)?
            // Overlay the config file if it exists
            .add_source(File::from(config_path).required(false))
            .build()?
            .try_deserialize()
    }

    /// Configuration rooted at `base`, using the default relative layout
    #[must_use]
    pub fn rooted_at(base: &Path) -> Self {
        let defaults = Self::default();
        Self {
            addresses: AddressesConfig {
                primary_dir: base.join(defaults.addresses.primary_dir),
                override_dir: base.join(defaults.addresses.override_dir),
            },
            output: OutputConfig {
                path: base.join(defaults.output.path),
            },
        }
    }
}
