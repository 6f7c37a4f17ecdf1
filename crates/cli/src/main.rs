//! The `mxabi` command line interface.

pub(crate) mod error;
pub(crate) mod log_args;
pub(crate) mod output;

use error::Error;
use log_args::LogArgs;
use output::{build_output_path, output_filename};
use tracing::info;

use clap::{Parser, Subcommand};

use mxabi_common::utils::io::file::{short_path, write_file};
use mxabi_config::{config, ConfigArgs, Configuration};
use mxabi_core::mxabi_inspect::{formula, inspect, FormulaArgs, InspectArgs};

#[derive(Debug, Parser)]
#[clap(name = "mxabi", version)]
pub(crate) struct Arguments {
    #[clap(subcommand)]
    pub sub: Subcommands,

    #[clap(flatten)]
    logs: LogArgs,
}

#[derive(Debug, Subcommand)]
#[clap(about = "mxabi parses and inspects MultiversX smart contract ABI definitions.")]
pub(crate) enum Subcommands {
    #[clap(
        name = "inspect",
        about = "Load a contract ABI file and display its constructor, endpoints and types"
    )]
    Inspect(InspectArgs),

    #[clap(
        name = "formula",
        about = "Parse a single type expression and display its canonical form and type tree"
    )]
    Formula(FormulaArgs),

    #[clap(name = "config", about = "Display and edit the current configuration")]
    Config(ConfigArgs),
}

fn main() -> Result<(), Error> {
    let args = Arguments::parse();

    // setup logging, the guard flushes the log file when dropped
    let _guard = args.logs.init_tracing_or_warn();

    let configuration = Configuration::load()
        .map_err(|e| Error::Generic(format!("failed to load configuration: {}", e)))?;
    match args.sub {
        Subcommands::Inspect(mut cmd) => {
            // if the user has not specified parser limits, use the configured ones
            resolve_limits(&mut cmd.max_type_depth, &mut cmd.max_type_tokens, &configuration)?;
            let pretty = configuration.pretty && !cmd.compact;

            let filename = output_filename(&cmd.name, "abi.json");

            let inspect_result = inspect(cmd.clone())?;
            inspect_result.display();

            let document = inspect_result.to_json(pretty)?;
            if cmd.output == "print" {
                println!("{document}");
            } else {
                let output_path = build_output_path(&cmd.output, &filename)
                    .map_err(|e| Error::Generic(format!("failed to build output path: {}", e)))?;

                write_file(&output_path, &document)
                    .map_err(|e| Error::Generic(format!("failed to write ABI: {}", e)))?;
                info!("wrote normalized ABI to '{}'", short_path(&output_path));
            }
        }

        Subcommands::Formula(mut cmd) => {
            // if the user has not specified parser limits, use the configured ones
            resolve_limits(&mut cmd.max_type_depth, &mut cmd.max_type_tokens, &configuration)?;

            let result = formula(cmd)?;
            result.display();
        }

        Subcommands::Config(cmd) => {
            config(cmd).map_err(|e| Error::Generic(format!("failed to configure: {}", e)))?;
        }
    }

    Ok(())
}

/// Fills unset parser limits from the configuration and checks them against the accepted ranges.
fn resolve_limits(
    max_type_depth: &mut Option<usize>,
    max_type_tokens: &mut Option<usize>,
    configuration: &Configuration,
) -> Result<(), Error> {
    let limits = Configuration {
        max_type_depth: *max_type_depth.get_or_insert(configuration.max_type_depth),
        max_type_tokens: *max_type_tokens.get_or_insert(configuration.max_type_tokens),
        pretty: configuration.pretty,
    };

    limits.validate().map_err(|e| Error::Generic(format!("invalid parser limits: {}", e)))
}
