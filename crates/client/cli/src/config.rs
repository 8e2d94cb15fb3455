//! CLI runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use pet_core::{Ruleset, SimConfig};
use pet_runtime::RuntimeConfig;

/// Configuration required to bootstrap the runtime and UI.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Explicit save file location; platform data dir when unset.
    pub save_path: Option<PathBuf>,
    /// Directory for rolling log files.
    pub log_dir: PathBuf,
    pub ruleset: Ruleset,
    /// Name for a newly hatched pet; existing saves keep their name.
    pub pet_name: Option<String>,
    pub tick_interval: Duration,
    pub autosave_interval: Duration,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// - `LOFTY_SAVE_PATH` / `LOFTY_LOG_DIR`
    /// - `LOFTY_RULESET` (`meters` | `hearts`)
    /// - `LOFTY_PET_NAME`
    /// - `LOFTY_TICK_MS` / `LOFTY_AUTOSAVE_SECS`
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(path) = read_env::<PathBuf>("LOFTY_SAVE_PATH") {
            config.save_path = Some(path);
        }
        if let Some(dir) = read_env::<PathBuf>("LOFTY_LOG_DIR") {
            config.log_dir = dir;
        }
        if let Some(ruleset) = read_env::<Ruleset>("LOFTY_RULESET") {
            config.ruleset = ruleset;
        }
        if let Some(name) = read_env::<String>("LOFTY_PET_NAME") {
            if !name.trim().is_empty() {
                config.pet_name = Some(name.trim().to_string());
            }
        }
        if let Some(ms) = read_env::<u64>("LOFTY_TICK_MS") {
            config.tick_interval = Duration::from_millis(ms.max(100));
        }
        if let Some(secs) = read_env::<u64>("LOFTY_AUTOSAVE_SECS") {
            config.autosave_interval = Duration::from_secs(secs.max(1));
        }

        config
    }

    /// Runtime configuration derived from the CLI knobs.
    pub fn runtime_config(&self) -> RuntimeConfig {
        let mut sim = SimConfig::with_ruleset(self.ruleset);
        if let Some(name) = &self.pet_name {
            sim.pet_name = name.clone();
        }
        RuntimeConfig {
            sim,
            tick_interval: self.tick_interval,
            autosave_interval: self.autosave_interval,
            ..RuntimeConfig::default()
        }
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        let log_dir = directories::ProjectDirs::from("", "", "lofty")
            .map(|dirs| dirs.data_dir().join("logs"))
            .unwrap_or_else(|| PathBuf::from("."));
        Self {
            save_path: None,
            log_dir,
            ruleset: Ruleset::default(),
            pet_name: None,
            tick_interval: Duration::from_secs(1),
            autosave_interval: Duration::from_secs(5),
        }
    }
}

fn read_env<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok()?.parse().ok()
}
