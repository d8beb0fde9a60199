//! Task Processor - Main Entry Point
//!
//! Parses the command line, sets up logging, and hands the work to the
//! `task_processor` library.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use task_processor::{EXIT_FAILURE, ProcessConfig, TaskProcessor, Verbosity, config};

/// Process JSON files containing task items
#[derive(Parser, Debug)]
#[command(name = "task-processor", author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Process a JSON input file
    Process {
        /// Path to input JSON file
        #[arg(long = "input")]
        input_file: PathBuf,

        /// Path to output JSON file
        #[arg(long = "output")]
        output_file: PathBuf,

        /// Enable verbose (debug) logging
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        // No subcommand given: show help and fail
        Cli::command().print_help().ok();
        println!();
        return Ok(ExitCode::from(EXIT_FAILURE));
    };

    match command {
        Command::Process {
            input_file,
            output_file,
            verbose,
        } => {
            let config = ProcessConfig::new(Verbosity::from(verbose));
            config::init_logging(&config)?;
            let processor = TaskProcessor::new(config);
            Ok(ExitCode::from(processor.run(&input_file, &output_file)))
        }
    }
}
