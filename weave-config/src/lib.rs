//! Shared configuration loader for the weave toolchain.
//!
//! `defaults/weave.default.toml` is embedded into every binary so that
//! docs and runtime behavior stay in sync. Applications layer an
//! optional `weave.toml` and `WEAVE_*` environment variables on top of
//! those defaults via [`Loader`] before deserializing into
//! [`WeaveConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/weave.default.toml");

/// Top-level configuration consumed by weave applications.
#[derive(Debug, Clone, Deserialize)]
pub struct WeaveConfig {
    pub output: OutputConfig,
    pub serve: ServeConfig,
    pub libraries: LibrariesConfig,
}

/// Where compiled pages land and what happens afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub dir: String,
    pub open_browser: bool,
}

/// Bind settings for `weave serve`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServeConfig {
    pub address: String,
    pub port: u16,
}

impl ServeConfig {
    /// The address:port string handed to the server.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }
}

/// Library resolution settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LibrariesConfig {
    pub search_paths: Vec<String>,
}

impl LibrariesConfig {
    /// Search paths as `PathBuf`s, in configured order.
    pub fn search_dirs(&self) -> Vec<PathBuf> {
        self.search_paths.iter().map(PathBuf::from).collect()
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

    /// Layer `WEAVE_*` environment variables, section and key joined
    /// with `__` (e.g. `WEAVE_SERVE__PORT=8080`).
    pub fn with_env(mut self) -> Self {
        let source = Environment::with_prefix("WEAVE")
            .separator("__")
            .try_parsing(true);
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
    pub fn build(self) -> Result<WeaveConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<WeaveConfig, ConfigError> {
    Loader::new().build()
}

/// The standard application layering: defaults, then an optional
/// `weave.toml` in the working directory, then the environment.
pub fn load() -> Result<WeaveConfig, ConfigError> {
    Loader::new()
        .with_optional_file("weave.toml")
        .with_env()
        .build()
}
