//! Configuration file support for voucher-service.
//!
//! Provides YAML-based configuration through `voucher-service.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::application::dto::OutputFormat;
use crate::shared::Result;
use crate::voucher::domain::Amount;
use crate::voucher::policies::DiscountPolicy;

pub const CONFIG_FILENAME: &str = "voucher-service.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Minimum purchase amount for a voucher to apply
    pub min_value_for_discount: Option<f64>,
    /// Path of the JSON voucher store
    pub store_path: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Discount policy described by this config
    pub fn discount_policy(&self) -> Result<DiscountPolicy> {
        match self.min_value_for_discount {
            Some(min) => Ok(DiscountPolicy::with_min_amount(Amount::new(min)?)),
            None => Ok(DiscountPolicy::default()),
        }
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML and 'format' is 'json' or 'text'.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(min) = config.min_value_for_discount {
        if !min.is_finite() || min < 0.0 {
            bail!(
                "Invalid config: min_value_for_discount must be a non-negative number, got {}.\n\n\
                 💡 Hint: Use a plain amount such as 100 or 49.90.",
                min
            );
        }
    }

    if let Some(ref store_path) = config.store_path {
        if store_path.as_os_str().is_empty() {
            bail!("Invalid config: store_path must not be empty.");
        }
    }

    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
