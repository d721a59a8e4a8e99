use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "tango-uuid")]
#[command(about = "Generate and validate RFC 4122 version-4 UUIDs")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate random v4 UUIDs, one per line
    Generate {
        /// Number of UUIDs to generate
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        count: i64,
    },
    /// Print the empty (all-zero) UUID
    Empty,
    /// Check whether a string is a valid UUID
    Validate {
        /// Candidate UUID
        input: String,
        /// Accept version 4 only
        #[arg(long)]
        strict: bool,
    },
    /// Check whether a string is the empty UUID
    IsEmpty {
        /// Candidate UUID
        input: String,
    },
}

/// Runs one command, writing its output to `out`.
///
/// Returns `false` when a check command answered "no", so `main` can exit non-zero.
fn run(
    command: Option<Commands>,
    config: &CliConfig,
    out: &mut impl Write,
) -> anyhow::Result<bool> {
    match command {
        Some(Commands::Generate { count }) => {
            let uuids = config.generator().generate_multiple_uuids(count)?;
            for uuid in uuids {
                writeln!(out, "{}", uuid)?;
            }
            Ok(true)
        }
        Some(Commands::Empty) => {
            writeln!(out, "{}", tango_uuid::generate_empty_uuid())?;
            Ok(true)
        }
        Some(Commands::Validate { input, strict }) => {
            let policy = config.version_policy(strict);
            let valid = tango_uuid::is_valid_uuid_with(&input, policy);
            tracing::debug!("validate {:?} with {:?}: {}", input, policy, valid);
            writeln!(out, "{}", valid)?;
            Ok(valid)
        }
        Some(Commands::IsEmpty { input }) => {
            let empty = tango_uuid::is_empty_uuid(&input);
            writeln!(out, "{}", empty)?;
            Ok(empty)
        }
        None => {
            writeln!(out, "Use 'tango-uuid --help' for commands")?;
            Ok(true)
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tango_uuid=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let config = CliConfig::from_env()?;
    tracing::debug!("random source: {:?}", config.rng());

    let stdout = io::stdout();
    let ok = run(cli.command, &config, &mut stdout.lock())?;

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
