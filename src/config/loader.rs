//! Configuration location and loading
//!
//! Search order:
//! 1. an explicit path (`--config`)
//! 2. the `PANEL_REPAIR_CONFIG` environment variable
//! 3. `panel_repair.toml` in the current directory, then next to the executable

use super::{ConfigError, PuzzleConfig};
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name looked for in the search directories
pub const CONFIG_FILE_NAME: &str = "panel_repair.toml";

/// Environment variable holding a config path
pub const CONFIG_ENV: &str = "PANEL_REPAIR_CONFIG";

/// Find the configuration file for this process
///
/// # Errors
///
/// Returns `ConfigError::NotFound` listing every searched location if no
/// config exists.
pub fn locate_config(explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
    let mut dirs = Vec::new();
    if let Ok(cwd) = env::current_dir() {
        dirs.push(cwd);
    }
    if let Some(exe_dir) = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        dirs.push(exe_dir);
    }

    locate_in(explicit, env::var_os(CONFIG_ENV), &dirs)
}

/// Search `explicit`, then `from_env`, then `CONFIG_FILE_NAME` in each of `dirs`
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if no candidate exists on disk.
pub fn locate_in(
    explicit: Option<&Path>,
    from_env: Option<OsString>,
    dirs: &[PathBuf],
) -> Result<PathBuf, ConfigError> {
    let candidates: Vec<PathBuf> = explicit
        .map(Path::to_path_buf)
        .into_iter()
        .chain(from_env.map(PathBuf::from))
        .chain(dirs.iter().map(|dir| dir.join(CONFIG_FILE_NAME)))
        .collect();

    for candidate in &candidates {
        debug!(path = %candidate.display(), "looking for config");
        if candidate.is_file() {
            return Ok(candidate.clone());
        }
    }

    Err(ConfigError::NotFound {
        searched: candidates,
    })
}

/// Load and parse a configuration file
///
/// # Errors
///
/// Returns `ConfigError::Io` if the file cannot be read and
/// `ConfigError::Parse` if it is not a valid definition.
///
/// # Examples
/// ```no_run
/// use panel_repair::config::loader::load_from_file;
///
/// let config = load_from_file("panel_repair.toml").unwrap();
/// println!("{} turns", config.turns);
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<PuzzleConfig, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let config = PuzzleConfig::from_toml(&content)?;
    info!(
        path = %path.display(),
        slots = config.slots.len(),
        turns = config.turns,
        "config loaded"
    );
    Ok(config)
}
