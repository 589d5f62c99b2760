//! Platform-specific file locations.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "contactform";
const APPLICATION: &str = "contact-form";

/// Get project directories, or None if home directory cannot be determined.
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the path of the default config file.
///
/// - Linux: `$XDG_CONFIG_HOME/contact-form/config.json`
/// - macOS: `~/Library/Application Support/dev.contactform.contact-form/config.json`
pub fn config_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
}

/// Get the path of the log file, creating its directory if needed.
pub fn log_file() -> Option<PathBuf> {
    let dir = project_dirs()?.cache_dir().to_path_buf();
    fs::create_dir_all(&dir).ok()?;
    Some(dir.join("latest.log"))
}
