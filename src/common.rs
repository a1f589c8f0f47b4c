use std::{
    env,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context, Result, anyhow, bail};
use log::info;
#[cfg(unix)]
use log::debug;

pub const PROJECT_NAME: &str = env!("CARGO_PKG_NAME");
pub const PROJECT_VERSION: &str = env!("GIT_VERSION");
pub const PROJECT_VERSION_HASH: &str = env!("GIT_HASH");

pub fn print_header() {
    println!("{PROJECT_NAME} {PROJECT_VERSION} ({PROJECT_VERSION_HASH})");
}

/// Returns the project data directory, creating it with secure permissions if needed.
///
/// Returns: Path to `~/.local/share/seatrs` (or equivalent)
pub fn project_data_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or_else(|| {
        anyhow!("Unable to determine data directory. Ensure XDG_DATA_HOME or HOME environment variable is set")
    })?;

    let project_data_dir = data_dir.join(PROJECT_NAME);

    create_secure_directory(&project_data_dir)?;

    Ok(project_data_dir)
}

/// Environment variable to override the config directory.
///
/// Example usage in tests:
///   export SEATRS_CONFIG_DIR="/tmp/test-config/seatrs"
pub(crate) const ENV_CONFIG_DIR_OVERRIDE: &str = "SEATRS_CONFIG_DIR";

/// Returns the project config directory. The directory is not created; a
/// missing directory simply means no config file.
///
/// If `SEATRS_CONFIG_DIR` is set, uses that path directly (validated).
/// Otherwise falls back to `dirs::config_dir()/seatrs`.
pub fn project_config_dir() -> Result<PathBuf> {
    if let Ok(override_dir) = env::var(ENV_CONFIG_DIR_OVERRIDE) {
        let path = validate_override_dir(&override_dir)?;
        info!(
            "Using config directory override from {ENV_CONFIG_DIR_OVERRIDE}: {}",
            path.display()
        );
        return Ok(path);
    }

    let config_dir = dirs::config_dir().ok_or_else(|| {
        anyhow!("Unable to determine config directory. Ensure XDG_CONFIG_HOME or HOME environment variable is set")
    })?;
    Ok(config_dir.join(PROJECT_NAME))
}

/// Accepts only absolute paths without `..` components.
pub(crate) fn validate_override_dir(value: &str) -> Result<PathBuf> {
    let path = PathBuf::from(value);

    if !path.is_absolute() {
        bail!("{ENV_CONFIG_DIR_OVERRIDE} must be an absolute path: {value}");
    }
    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        bail!("{ENV_CONFIG_DIR_OVERRIDE} contains parent directory references: {value}");
    }

    Ok(path)
}

/// Creates a directory with owner-only permissions (0700 on Unix), fixing the
/// permissions of an existing directory.
#[cfg(unix)]
fn create_secure_directory(dir: &Path) -> Result<()> {
    use std::fs::{self, DirBuilder};
    use std::os::unix::fs::{DirBuilderExt, PermissionsExt};

    debug!(
        "Creating secure directory: {} (exists={})",
        dir.display(),
        dir.exists()
    );

    DirBuilder::new()
        .recursive(true)
        .mode(0o700)
        .create(dir)
        .with_context(|| format!("Unable to create directory: {}", dir.display()))?;

    fs::set_permissions(dir, fs::Permissions::from_mode(0o700))
        .with_context(|| format!("Unable to set permissions on directory: {}", dir.display()))?;

    Ok(())
}

#[cfg(not(unix))]
fn create_secure_directory(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Unable to create directory: {}", dir.display()))?;
    Ok(())
}
