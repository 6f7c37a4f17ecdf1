//! Configuration management for mxabi
//!
//! This crate provides functionality for managing the mxabi configuration,
//! including loading, saving, updating, and deleting configuration settings.

/// Error types for the configuration module
pub mod error;

use std::path::PathBuf;

use crate::error::Error;
use clap::Parser;
use mxabi_common::utils::{
    env::data_dir,
    io::file::{delete_path, read_file, write_file},
};
use mxabi_types::{ParserLimits, DEFAULT_MAX_DEPTH, DEFAULT_MAX_TOKENS};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

/// Largest accepted `max_type_depth`. Formulas are walked recursively, so deeper nesting would
/// exhaust the stack.
pub const MAX_TYPE_DEPTH_CEILING: usize = 1024;

/// Largest accepted `max_type_tokens`.
pub const MAX_TYPE_TOKENS_CEILING: usize = 1 << 20;

/// Command line arguments for the configuration command
#[derive(Debug, Clone, Parser)]
#[clap(
    about = "Display and edit the current configuration",
    override_usage = "mxabi config [OPTIONS]"
)]
pub struct ConfigArgs {
    /// The target key to update.
    #[clap(required = false, default_value = "")]
    key: String,

    /// The value to set the key to.
    #[clap(required = false, default_value = "")]
    value: String,
}

/// The [`Configuration`] struct represents the configuration of the CLI. All mxabi modules will
/// attempt to read from this configuration when possible.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Configuration {
    /// Maximum nesting depth of type parameters accepted when parsing type expressions
    pub max_type_depth: usize,

    /// Maximum number of tokens accepted in a single type expression
    pub max_type_tokens: usize,

    /// Whether JSON output is pretty-printed
    pub pretty: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            max_type_depth: DEFAULT_MAX_DEPTH,
            max_type_tokens: DEFAULT_MAX_TOKENS,
            pretty: true,
        }
    }
}

impl Configuration {
    /// Returns the path of the configuration file, `<data dir>/config.toml`.
    pub fn path() -> Result<PathBuf, Error> {
        let dir = data_dir().map_err(|e| Error::Generic(e.to_string()))?;
        Ok(dir.join("config.toml"))
    }

    /// Returns the current configuration, creating the configuration file if it doesn't exist.
    pub fn load() -> Result<Self, Error> {
        let path = Self::path()?;

        if !path.exists() {
            debug!("no configuration found at '{}', writing defaults", path.display());
            let config = Configuration::default();
            config.save()?;
        }

        let contents = read_file(path_str(&path)?)
            .map_err(|e| Error::Generic(format!("failed to read config file: {e}")))?;

        let config: Configuration = toml::from_str(&contents)
            .map_err(|e| Error::ParseError(format!("failed to parse config file: {e}")))?;
        config.validate()?;

        Ok(config)
    }

    /// Checks that the parser limits are within their accepted ranges.
    pub fn validate(&self) -> Result<(), Error> {
        check_range("max_type_depth", self.max_type_depth, 0, MAX_TYPE_DEPTH_CEILING)?;
        check_range("max_type_tokens", self.max_type_tokens, 1, MAX_TYPE_TOKENS_CEILING)
    }

    /// Saves the current configuration to disk.
    pub fn save(&self) -> Result<(), Error> {
        let path = Self::path()?;

        write_file(
            path_str(&path)?,
            &toml::to_string(&self)
                .map_err(|e| Error::ParseError(format!("failed to serialize config: {e}")))?,
        )
        .map_err(|e| Error::Generic(format!("failed to write config file: {e}")))?;

        Ok(())
    }

    /// Deletes the configuration file.
    pub fn delete() -> Result<(), Error> {
        let path = Self::path()?;
        if !delete_path(path_str(&path)?) {
            return Err(Error::Generic(format!("failed to delete '{}'", path.display())));
        }

        Ok(())
    }

    /// Update a single key/value pair in the configuration.
    pub fn update(&mut self, key: &str, value: &str) -> Result<(), Error> {
        // update the key in the struct and ensure it's the correct type
        match key {
            "max_type_depth" => {
                let depth = parse_value(key, value)?;
                check_range(key, depth, 0, MAX_TYPE_DEPTH_CEILING)?;
                self.max_type_depth = depth;
            }
            "max_type_tokens" => {
                let tokens = parse_value(key, value)?;
                check_range(key, tokens, 1, MAX_TYPE_TOKENS_CEILING)?;
                self.max_type_tokens = tokens;
            }
            "pretty" => {
                self.pretty = parse_value(key, value)?;
            }
            _ => {
                return Err(Error::Generic(format!(
                    "invalid key: \'{key}\' is not a valid configuration key."
                )))
            }
        }

        // write the updated config to disk
        self.save()?;

        Ok(())
    }

    /// The parser limits described by this configuration.
    pub fn parser_limits(&self) -> ParserLimits {
        ParserLimits { max_depth: self.max_type_depth, max_tokens: self.max_type_tokens }
    }
}

fn path_str(path: &std::path::Path) -> Result<&str, Error> {
    path.to_str().ok_or_else(|| Error::Generic("failed to convert path to string".to_string()))
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, Error> {
    value.parse().map_err(|_| {
        Error::ParseError(format!("invalid value: \'{value}\' is not valid for \'{key}\'."))
    })
}

fn check_range(key: &str, value: usize, min: usize, max: usize) -> Result<(), Error> {
    if value < min || value > max {
        return Err(Error::ParseError(format!(
            "invalid value: \'{key}\' must be between {min} and {max}, found {value}."
        )));
    }

    Ok(())
}

/// The `config` command is used to display and edit the current configuration.
pub fn config(args: ConfigArgs) -> Result<(), Error> {
    if !args.key.is_empty() {
        if !args.value.is_empty() {
            // read the config file and update the key/value pair
            let mut config = Configuration::load()?;
            config.update(&args.key, &args.value)?;
            info!("updated configuration! Set \'{}\' = \'{}\' .", &args.key, &args.value);
        } else {
            // key is set, but no value is set
            error!("found key but no value to set. Please specify a value to set, use `mxabi config --help` for more information.");
        }
    } else {
        // no key is set, print the config file
        println!("{:#?}", Configuration::load()?);
        info!("use `mxabi config <KEY> <VALUE>` to set a key/value pair.");
    }

    Ok(())
}
