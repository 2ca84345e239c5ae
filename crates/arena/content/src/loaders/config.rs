//! Arena configuration loader.

use std::path::Path;

use arena_core::ArenaConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for arena configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Built-in tuning shipped with the crate.
    pub const BUILTIN: &'static str = include_str!("../../data/arena.toml");

    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`ArenaConfig::default`].
    pub fn load(path: &Path) -> LoadResult<ArenaConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<ArenaConfig> {
        let config: ArenaConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse arena config TOML: {}", e))?;
        Ok(config)
    }

    pub fn builtin() -> LoadResult<ArenaConfig> {
        Self::parse(Self::BUILTIN)
    }
}
