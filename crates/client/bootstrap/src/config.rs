//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// Name used for the platform data and cache directories.
pub const APP_NAME: &str = "cluedo";

/// Configuration required to start a client session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Directory holding one sub-directory per scenario.
    pub scenario_root: PathBuf,
    pub enable_persistence: bool,
    pub save_data_dir: Option<PathBuf>,
    /// Fixed seed for reproducible sessions.
    pub game_seed: Option<u64>,
    pub log_dir: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            scenario_root: PathBuf::from(Self::DEFAULT_SCENARIO_ROOT),
            enable_persistence: true,
            save_data_dir: None,
            game_seed: None,
            log_dir: None,
        }
    }
}

impl ClientConfig {
    pub const DEFAULT_SCENARIO_ROOT: &'static str = "data/scenarios";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CLUEDO_DATA_DIR` - Scenario root directory (default: `data/scenarios`)
    /// - `ENABLE_PERSISTENCE` - Save sessions to disk (default: true)
    /// - `SAVE_DATA_DIR` - Directory for save data (default: platform-specific)
    /// - `GAME_SEED` - Fixed RNG seed (default: random per session)
    /// - `CLUEDO_LOG_DIR` - Directory for log files (default: platform-specific)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(root) = lookup("CLUEDO_DATA_DIR") {
            config.scenario_root = PathBuf::from(root);
        }

        if let Some(enable) = read_var::<bool>(&lookup, "ENABLE_PERSISTENCE") {
            config.enable_persistence = enable;
        }

        config.save_data_dir = lookup("SAVE_DATA_DIR").map(PathBuf::from);
        config.game_seed = read_var::<u64>(&lookup, "GAME_SEED");
        config.log_dir = lookup("CLUEDO_LOG_DIR").map(PathBuf::from);

        config
    }

    /// Directory save files go to.
    ///
    /// Falls back to the platform data directory, then `./save_data`.
    pub fn save_dir(&self) -> PathBuf {
        self.save_data_dir.clone().unwrap_or_else(|| {
            directories::ProjectDirs::from("", "", APP_NAME)
                .map(|dirs| dirs.data_dir().join("saves"))
                .unwrap_or_else(|| PathBuf::from("./save_data"))
        })
    }

    /// Directory log files go to.
    ///
    /// Falls back to the platform cache directory, then `/tmp/cluedo/logs`.
    pub fn log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(|| {
            directories::ProjectDirs::from("", "", APP_NAME)
                .map(|dirs| dirs.cache_dir().join("logs"))
                .unwrap_or_else(|| PathBuf::from("/tmp/cluedo/logs"))
        })
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}
