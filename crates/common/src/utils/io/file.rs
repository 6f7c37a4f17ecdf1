use std::{
    env,
    fs::File,
    io::{Read, Write},
    path::Path,
};

use eyre::{eyre, Result};
use tracing::trace;

/// Convert a long path to a short path, relative to the current directory.
///
/// ```no_run
/// use mxabi_common::utils::io::file::short_path;
///
/// let path = "/some/long/path/that/is/cwd/adder.abi.json";
/// let short_path = short_path(path);
/// assert_eq!(short_path, "./adder.abi.json");
/// ```
pub fn short_path(path: &str) -> String {
    match env::current_dir() {
        Ok(dir) => path.replace(&dir.into_os_string().into_string().unwrap_or_default(), "."),
        Err(_) => path.to_owned(),
    }
}

/// Write contents to a file on the disc, creating parent directories as needed.
///
/// ```no_run
/// use mxabi_common::utils::io::file::write_file;
///
/// let path = "/tmp/test.txt";
/// let contents = "Hello, World!";
/// let result = write_file(path, contents);
/// ```
pub fn write_file(path_str: &str, contents: &str) -> Result<()> {
    let path = Path::new(path_str);

    std::fs::create_dir_all(path.parent().ok_or_else(|| eyre!("unable to create directory"))?)?;

    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())?;
    trace!("wrote {} bytes to '{}'", contents.len(), path_str);

    Ok(())
}

/// Read contents from a file on the disc
///
/// ```no_run
/// use mxabi_common::utils::io::file::read_file;
///
/// let path = "/tmp/test.txt";
/// let contents = read_file(path);
/// ```
pub fn read_file(path: &str) -> Result<String> {
    let mut file = File::open(Path::new(path))?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Delete a file or directory from the disc. Returns `true` if nothing is left at `path`.
///
/// ```no_run
/// use mxabi_common::utils::io::file::delete_path;
///
/// let path = "/tmp/test.txt";
/// let result = delete_path(path);
/// ```
pub fn delete_path(path: &str) -> bool {
    let path = Path::new(path);
    let removed = if path.is_dir() {
        std::fs::remove_dir_all(path)
    } else {
        std::fs::remove_file(path)
    };

    match removed {
        Ok(()) => true,
        Err(e) => e.kind() == std::io::ErrorKind::NotFound,
    }
}
