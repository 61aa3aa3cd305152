use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};

use post_scaffold::config::{find_config, read_config, Config};

fn default_log_location() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("post-scaffold").join("log").join("post-scaffold.log"))
}

/// Reads the configuration from `cfg_path` or from the first config file found.
/// Without any file, the built-in defaults are used.
pub(crate) fn open_config(cfg_path: Option<PathBuf>, work_dir: &Path) -> Result<Config> {
    let config_path = match cfg_path.or_else(|| find_config(work_dir)) {
        None => return Ok(Config::default()),
        Some(x) => x,
    };

    let mut config = read_config(&config_path)?;

    if let Some(mut log) = config.log {
        if log.location.is_none() {
            let location = default_log_location()
                .ok_or_else(|| anyhow!("Could not find a cache dir for the log files. Please set [log] location"))?;
            log.location = Some(location);
        }
        config.log = Some(log);
    }

    Ok(config)
}
