use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pesalog_core::MessageParser;
use std::path::PathBuf;

mod batch;
mod interactive;
mod render;

#[derive(Parser, Debug)]
#[command(name = "pesalog", version, about = "Structured records from M-PESA notification texts")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse notifications typed one per line at the terminal
    Interactive,

    /// Parse every non-empty line of a file, continuing past bad lines
    Batch {
        /// File with one notification per line
        file: PathBuf,

        /// Emit records as JSON, one object per line
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let parser = MessageParser::new().context("compiling notification patterns")?;

    match cli.command {
        Command::Interactive => {
            interactive::run(&parser)?;
        }

        Command::Batch { file, json } => {
            let summary = batch::run(&parser, &file, json)?;
            // Keep stdout machine-readable in JSON mode.
            if json {
                eprintln!("parsed {} messages, {} failed", summary.parsed, summary.failed);
            } else {
                println!("parsed {} messages, {} failed", summary.parsed, summary.failed);
            }
        }
    }

    Ok(())
}
