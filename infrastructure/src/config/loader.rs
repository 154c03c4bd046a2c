//! Configuration loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Project-level config file name
pub const PROJECT_CONFIG_FILE: &str = "readiness.toml";

/// Prefix for structured environment overrides
pub const ENV_PREFIX: &str = "READINESS_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `PORT`
    /// 2. `READINESS_*` variables, `__` separating sections
    /// 3. Explicit config path, or `./readiness.toml` when none is given
    /// 4. Default values
    ///
    /// The API credential is not merged here; it is read from the variable
    /// named by `completion.api_key_env` when the gateway is built.
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path).extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// The merged provider chain, before extraction
    pub fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        match config_path {
            Some(path) => {
                figment = figment.merge(Toml::file(path));
            }
            None => {
                if let Some(path) = Self::project_config_path() {
                    figment = figment.merge(Toml::file(path));
                }
            }
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .merge(Env::raw().only(&["PORT"]).map(|_| "server.port".into()))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        let path = PathBuf::from(PROJECT_CONFIG_FILE);
        path.exists().then_some(path)
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&Path>) {
        println!("Configuration sources (in priority order):");
        println!("  [ env ] PORT");
        println!("  [ env ] {}*", ENV_PREFIX);

        match config_path {
            Some(path) if path.exists() => println!("  [FOUND] Explicit: {}", path.display()),
            Some(path) => println!("  [MISSING] Explicit: {}", path.display()),
            None => match Self::project_config_path() {
                Some(path) => println!("  [FOUND] Project: {}", path.display()),
                None => println!("  [     ] Project: ./{}", PROJECT_CONFIG_FILE),
            },
        }

        println!("  [     ] Default: built-in defaults");
    }
}
