use std::path::PathBuf;

use eyre::{eyre, Result};

/// Environment variable that overrides the mxabi data directory.
pub const MXABI_HOME: &str = "MXABI_HOME";

/// Gets the value of an environment variable.
///
/// # Arguments
///
/// * `key` - The environment variable name to retrieve
///
/// # Returns
///
/// * `Option<String>` - The environment variable value if it exists and is not empty
pub fn get_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

/// Returns the directory mxabi stores its configuration in.
///
/// This is `$MXABI_HOME` when set, `$HOME/.mxabi` otherwise.
///
/// ```no_run
/// use mxabi_common::utils::env::data_dir;
///
/// let dir = data_dir().expect("no home directory");
/// assert!(dir.ends_with(".mxabi"));
/// ```
#[allow(deprecated)]
pub fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = get_env(MXABI_HOME) {
        return Ok(PathBuf::from(dir));
    }

    let home = std::env::home_dir().ok_or_else(|| {
        eyre!("failed to get home directory. does your os support `std::env::home_dir()`?")
    })?;
    Ok(home.join(".mxabi"))
}
