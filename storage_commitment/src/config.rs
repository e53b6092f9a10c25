//! # Verifier Configuration Module
//!
//! Settings a validator is built from. Today that is the protocol tag a token
//! must lead with; keeping it here instead of in a global lets deployments
//! (and tests) verify alternate tags side by side.
//!
//! The configuration is stored as a TOML file (`CommitmentConfig.toml` by
//! default) and can be loaded from or saved to any path.
//!
//! Copyrights © 2025 Storage Commitment Contributors. All rights reserved.

use super::constants::DEFAULT_PROTOCOL_TAG;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

pub const CONFIG_FILE: &str = "CommitmentConfig.toml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct VerifierConfig {
    pub protocol_tag: String,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            protocol_tag: DEFAULT_PROTOCOL_TAG.to_string(),
        }
    }
}

impl VerifierConfig {
    pub fn with_protocol_tag(protocol_tag: impl Into<String>) -> Self {
        Self {
            protocol_tag: protocol_tag.into(),
        }
    }

    pub fn load() -> Result<VerifierConfig> {
        Self::load_from(CONFIG_FILE)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(CONFIG_FILE)
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<VerifierConfig> {
        read_toml_file(path.as_ref())
    }

    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        write_toml_file(path.as_ref(), self)
    }
}

fn write_toml_file(path: &Path, config: &VerifierConfig) -> Result<()> {
    let toml_string = toml::to_string(config).context("Failed to serialize to TOML")?;
    let mut file = File::create(path)?;
    file.write_all(toml_string.as_bytes())?;
    Ok(())
}

fn read_toml_file(path: &Path) -> Result<VerifierConfig> {
    let contents = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let config: VerifierConfig = toml::from_str(&contents).context("Failed to parse TOML")?;
    Ok(config)
}
