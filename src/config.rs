use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::element::ElementKind;
use crate::{log_error, log_warn};

pub const DEFAULT_MAX_INSTRUCTIONS: u64 = 100;
pub const DEFAULT_LITERAL_PROBABILITY: f64 = 0.3;

/// Interpreter settings.
///
/// ```toml
/// max_instructions = 100
/// stacks = ["integer", "float", "boolean"]
/// seed = 42
/// literal_probability = 0.3
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Options {
    /// The fuse: a run stops once its instruction count exceeds this.
    #[serde(default = "default_max_instructions")]
    pub max_instructions: u64,

    /// One stack of each listed kind is built for every run.
    #[serde(default = "default_stacks")]
    pub stacks: Vec<ElementKind>,

    /// Fixed seed for reproducible synthesis. OS entropy when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    #[serde(default = "default_literal_probability")]
    pub literal_probability: f64,
}

fn default_max_instructions() -> u64 {
    DEFAULT_MAX_INSTRUCTIONS
}

fn default_stacks() -> Vec<ElementKind> {
    vec![ElementKind::Integer, ElementKind::Float, ElementKind::Boolean]
}

fn default_literal_probability() -> f64 {
    DEFAULT_LITERAL_PROBABILITY
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_instructions: default_max_instructions(),
            stacks: default_stacks(),
            seed: None,
            literal_probability: default_literal_probability(),
        }
    }
}

pub trait Validate {
    fn validate(&mut self);
}

impl Validate for Options {
    fn validate(&mut self) {
        if !(0.0..=1.0).contains(&self.literal_probability) {
            log_warn!(
                "Invalid literal_probability: {}. Using default: {}",
                self.literal_probability,
                DEFAULT_LITERAL_PROBABILITY
            );
            self.literal_probability = DEFAULT_LITERAL_PROBABILITY;
        }

        if self.stacks.is_empty() {
            log_warn!("Invalid stacks: empty list. Using default: integer, float, boolean");
            self.stacks = default_stacks();
        }

        let listed = self.stacks.len();
        let mut seen = Vec::with_capacity(listed);
        self.stacks.retain(|kind| {
            if seen.contains(kind) {
                false
            } else {
                seen.push(*kind);
                true
            }
        });
        if self.stacks.len() < listed {
            log_warn!(
                "Removed {} duplicate stack kind(s). Using: {:?}",
                listed - self.stacks.len(),
                self.stacks
            );
        }
    }
}

impl Options {
    /// Parses and validates TOML options. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let mut options: Options = toml::from_str(text).context("Failed to parse options")?;
        options.validate();
        Ok(options)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize options")
    }

    /// Reads options from `path`. A file that does not parse yields the
    /// defaults; a file that cannot be read is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read options file {}", path.display()))?;

        let mut options: Options = toml::from_str(&content).unwrap_or_else(|e| {
            log_error!("Failed to parse options: {}. Using defaults.", e);
            Options::default()
        });

        options.validate();
        Ok(options)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let toml_string = self.to_toml_string()?;

        fs::write(path, toml_string)
            .with_context(|| format!("Failed to write options file {}", path.display()))?;

        Ok(())
    }
}
