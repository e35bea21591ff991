//! Rustack Redshift codec - awsQuery encoder/decoder on the command line.
//!
//! Turns JSON request inputs into form-encoded awsQuery bodies, and XML
//! response documents into JSON, using the same field tables as the client.
//!
//! # Usage
//!
//! ```text
//! rustack-redshift-codec encode CreateCluster input.json
//! rustack-redshift-codec decode DescribeClusters response.xml
//! rustack-redshift-codec respond CreateTags output.json --request-id abc
//! rustack-redshift-codec operations
//! ```
//!
//! Input is read from stdin when no file is given, or when the file is `-`.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

mod commands;

use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rustack_core::ClientConfig;
use rustack_redshift_model::RedshiftOperation;
use tracing_subscriber::EnvFilter;

use crate::commands::{Decode, Encode, Respond};

#[derive(Parser)]
#[command(name = "rustack-redshift-codec", version, about = "Redshift awsQuery encoder/decoder")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode a JSON input as a form-encoded request body
    Encode {
        /// Operation name, e.g. `CreateCluster`
        operation: String,
        /// JSON file (stdin if omitted or `-`)
        file: Option<PathBuf>,
    },
    /// Decode an XML response document as JSON
    Decode {
        /// Operation name, e.g. `DescribeClusters`
        operation: String,
        /// XML file (stdin if omitted or `-`)
        file: Option<PathBuf>,
    },
    /// Render a JSON output as an XML response document
    Respond {
        /// Operation name
        operation: String,
        /// JSON file (stdin if omitted or `-`)
        file: Option<PathBuf>,
        /// Request id written into the response metadata
        #[arg(long, default_value = "00000000-0000-0000-0000-000000000000")]
        request_id: String,
    },
    /// List supported operations
    Operations,
}

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` config value.
/// Logs go to stderr so stdout carries only command output.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    Ok(())
}

fn parse_operation(name: &str) -> Result<RedshiftOperation> {
    RedshiftOperation::from_name(name).with_context(|| {
        format!("unknown operation '{name}'. Run `rustack-redshift-codec operations` for the list")
    })
}

fn read_input(file: Option<&PathBuf>) -> Result<Vec<u8>> {
    match file {
        Some(path) if path.as_os_str() != "-" => {
            std::fs::read(path).with_context(|| format!("cannot read {}", path.display()))
        }
        _ => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("cannot read stdin")?;
            Ok(buf)
        }
    }
}

fn run(command: &Command) -> Result<String> {
    match command {
        Command::Encode { operation, file } => {
            let op = parse_operation(operation)?;
            let json = read_input(file.as_ref())?;
            op.visit(Encode { json: &json })
        }
        Command::Decode { operation, file } => {
            let op = parse_operation(operation)?;
            let xml = read_input(file.as_ref())?;
            op.visit(Decode { xml: &xml })
        }
        Command::Respond {
            operation,
            file,
            request_id,
        } => {
            let op = parse_operation(operation)?;
            let json = read_input(file.as_ref())?;
            op.visit(Respond {
                json: &json,
                request_id,
            })
        }
        Command::Operations => Ok(RedshiftOperation::ALL
            .iter()
            .map(RedshiftOperation::as_str)
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = ClientConfig::from_env().context("invalid configuration")?;
    init_tracing(&config.log_level)?;
    tracing::debug!(region = %config.default_region, "starting codec");

    let output = run(&args.command)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{output}")?;
    Ok(())
}
