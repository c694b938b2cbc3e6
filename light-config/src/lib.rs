//! Shared configuration loader for the light toolchain.
//!
//! `defaults/light.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`LightConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use light_dom::{ClassifierRules, ClosingBehavior, DescriptorParams, DisplayMode};
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/light.default.toml");

/// Top-level configuration consumed by light applications.
#[derive(Debug, Clone, Deserialize)]
pub struct LightConfig {
    pub classify: ClassifyConfig,
    pub build: BuildConfig,
    pub root: RootConfig,
    pub list: ListConfig,
}

/// Mirrors the knobs exposed by the line classifier.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifyConfig {
    pub first_line_heading: bool,
    pub subheading_max_len: usize,
}

impl From<ClassifyConfig> for ClassifierRules {
    fn from(config: ClassifyConfig) -> Self {
        Self::from(&config)
    }
}

impl From<&ClassifyConfig> for ClassifierRules {
    fn from(config: &ClassifyConfig) -> Self {
        ClassifierRules {
            first_line_heading: config.first_line_heading,
            subheading_max_len: config.subheading_max_len,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BuildConfig {
    pub interning: bool,
}

/// The container every line is appended to.
#[derive(Debug, Clone, Deserialize)]
pub struct RootConfig {
    pub tag: String,
    pub display: DisplayMode,
    pub closing: ClosingBehavior,
    pub classes: Vec<String>,
}

impl From<&RootConfig> for DescriptorParams {
    fn from(config: &RootConfig) -> Self {
        DescriptorParams::new(config.tag.clone(), config.display, config.closing)
            .with_classes(config.classes.iter().cloned())
    }
}

/// Shape of the `list` command output.
#[derive(Debug, Clone, Deserialize)]
pub struct ListConfig {
    pub tag: String,
    pub classes: Vec<String>,
    pub item_tag: String,
}

impl ListConfig {
    pub fn list_params(&self) -> DescriptorParams {
        DescriptorParams::paired_block(self.tag.clone()).with_classes(self.classes.iter().cloned())
    }

    pub fn item_params(&self) -> DescriptorParams {
        DescriptorParams::paired_block(self.item_tag.clone())
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<LightConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<LightConfig, ConfigError> {
    Loader::new().build()
}
