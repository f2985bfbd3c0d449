use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use vetpanel_lib::config::{DEFAULT_ADDR, DEFAULT_DATA_DIR};
use vetpanel_lib::RunError;

#[derive(Debug, Parser)]
#[command(name = "vetpanel", version, about = "Veterinary exam dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write the exam artifacts (CSV tables and JSON documents).
    Assemble {
        #[arg(long, default_value = DEFAULT_DATA_DIR)]
        data_dir: PathBuf,
    },
    /// Serve the interactive dashboard over the assembled artifacts.
    Serve {
        #[arg(long, default_value = DEFAULT_DATA_DIR)]
        data_dir: PathBuf,
        #[arg(long, default_value = DEFAULT_ADDR)]
        addr: SocketAddr,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    vetpanel_lib::init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Assemble { data_dir } => {
            vetpanel_lib::run_assembler(&data_dir).map(|report| {
                println!(
                    "Generated {} data files in '{}'.",
                    report.written.len(),
                    report.output_dir.display()
                );
            })
        }
        Command::Serve { data_dir, addr } => vetpanel_lib::run_dashboard(&data_dir, addr).await,
    };

    ExitCode::from(exit_status(&result))
}

/// Report a failed run on stderr and map it to a process exit status.
fn exit_status(result: &Result<(), RunError>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(RunError::Dataset(e)) if e.is_missing_file() => {
            tracing::error!("{e}");
            eprintln!("ERROR: Data files not found. Run `vetpanel assemble` first.");
            1
        }
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("ERROR: {e}");
            1
        }
    }
}
