use std::env;

use eyre::{eyre, Result};

/// build a standardized output path for the given parameters. follows the following cases:
/// - if `output` is the default directory name (`output`), return `{cwd}/output/local/{filename}`
/// - if `output` is specified, return `/{output}/{filename}`
///
/// `print` is handled by the caller and never reaches this function.
pub(crate) fn build_output_path(output: &str, filename: &str) -> Result<String> {
    // if output is the default value, build a path under the working directory
    if output == "output" {
        let cwd = env::current_dir()?
            .into_os_string()
            .into_string()
            .map_err(|_| eyre!("Unable to get current working directory"))?;

        return Ok(format!("{}/output/local/{}", cwd, filename));
    }

    // output is specified, return the path
    Ok(format!("{}/{}", output.trim_end_matches('/'), filename))
}

/// the output filename for the given `--name`, e.g. `adder-abi.json`
pub(crate) fn output_filename(name: &str, filename: &str) -> String {
    if name.is_empty() {
        filename.to_string()
    } else {
        format!("{}-{}", name, filename)
    }
}
