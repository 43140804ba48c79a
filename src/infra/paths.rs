// src/infra/paths.rs — Config path resolution
//
// All paths respect the QUESTLOG_HOME environment variable for
// isolation. When unset, config lives under ~/.questlog/.

use directories::BaseDirs;
use std::path::PathBuf;

/// Returns the QUESTLOG_HOME override, if set.
fn questlog_home() -> Option<PathBuf> {
    std::env::var_os("QUESTLOG_HOME").map(PathBuf::from)
}

/// Configuration directory: $QUESTLOG_HOME/ or ~/.questlog/
pub fn config_dir() -> PathBuf {
    if let Some(home) = questlog_home() {
        return home;
    }
    dirs_home().join(".questlog")
}

/// Home directory
pub fn dirs_home() -> PathBuf {
    BaseDirs::new()
        .expect("Could not determine home directory")
        .home_dir()
        .to_path_buf()
}

/// Config file path
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}
