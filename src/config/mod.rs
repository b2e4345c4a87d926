//! Site configuration management for `blogsplice.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── site.rs    # [site]
//! ├── build.rs   # [build]
//! ├── error.rs   # ConfigError
//! └── mod.rs     # SiteConfig (this file)
//! ```
//!
//! Values are layered: CLI flags (and `SITE_URL`) override the config file,
//! which overrides the built-in defaults. The config file is optional.

mod build;
mod error;
mod site;

pub use build::BuildConfig;
pub use error::ConfigError;
pub use site::SiteInfoConfig;

use crate::{
    cli::{BuildArgs, Cli, Commands},
    debug,
};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing `blogsplice.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site metadata
    pub site: SiteInfoConfig,

    /// Input and output locations
    pub build: BuildConfig,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// A missing config file falls back to defaults; a file that exists but
    /// cannot be read or parsed is an error.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = if cli.config.exists() {
            debug!("config"; "loading {}", cli.config.display());
            Self::from_path(&cli.config)?
        } else {
            Self::default()
        };

        config.apply_command_options(cli);
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from file path.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content).map_err(|err| ConfigError::Toml(path.to_path_buf(), err))
    }

    /// Problems that do not stop the build, reported as warnings.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if let Err(reason) = crate::utils::url::check_base_url(&self.site.url) {
            warnings.push(format!("site.url '{}': {}", self.site.url, reason));
        }
        warnings
    }

    /// Site URL without trailing slashes, the base of every absolute link.
    pub fn base_url(&self) -> &str {
        self.site.url.trim_end_matches('/')
    }

    /// Join a path onto the public directory.
    ///
    /// Shorthand for `config.build.public.join(path)`.
    pub fn public_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.build.public.join(path)
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Build { build_args } => self.apply_build_args(build_args),
        }
    }

    /// Apply build arguments from CLI.
    fn apply_build_args(&mut self, args: &BuildArgs) {
        Self::update_option(&mut self.build.public, args.public.as_ref());

        // Also fed by the SITE_URL environment variable through clap
        Self::update_option(&mut self.site.url, args.site_url.as_ref());
    }

    /// Overwrite `target` when the CLI supplied a value.
    fn update_option<T: Clone>(target: &mut T, value: Option<&T>) {
        if let Some(v) = value {
            *target = v.clone();
        }
    }
}
