//! exprsolve - CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

use exprsolve::util::{config, logger};
use exprsolve::{run_files, Mode, Report, SolverConfig, NAME, VERSION};

/// Evaluate expression tables and solve their root equality for one unknown
#[derive(Parser, Debug)]
#[command(name = "exprsolve")]
#[command(version = VERSION)]
#[command(about = NAME, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Name of the root definition
    #[arg(long, global = true, value_name = "NAME")]
    root: Option<String>,

    /// Name of the unknown leaf
    #[arg(long, global = true, value_name = "NAME")]
    unknown: Option<String>,

    /// Accept Mul/FloorDiv inversions that do not divide evenly
    #[arg(long, global = true)]
    no_exact_check: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate the root expression of each file
    Eval {
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,
    },

    /// Solve the root equality of each file for the unknown
    Solve {
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,

        /// Print the equation and every inversion step
        #[arg(long)]
        explain: bool,
    },

    /// Evaluate and solve each file
    Run {
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,
    },

    /// Print the effective configuration
    Config {
        /// Write the effective configuration to the user config file
        #[arg(long)]
        init: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match execute(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns whether every file succeeded
fn execute(args: Args) -> Result<bool> {
    let mut config = config::load().context("Failed to load configuration")?;
    if let Some(root) = args.root {
        config.root = root;
    }
    if let Some(unknown) = args.unknown {
        config.unknown = unknown;
    }
    if args.no_exact_check {
        config.check_exactness = false;
    }

    if args.verbose {
        logger::init_debug();
    } else {
        logger::init_with_level(config.log_level);
    }

    let (files, mode, explain) = match args.command {
        Commands::Eval { files } => (files, Mode::Evaluate, false),
        Commands::Solve { files, explain } => (files, Mode::Solve, explain),
        Commands::Run { files } => (files, Mode::Both, false),
        Commands::Config { init } => {
            if init {
                let path = config::save_user_config(&config)?;
                eprintln!("wrote {}", path.display());
            }
            print!("{}", config.to_toml_string()?);
            return Ok(true);
        }
    };

    let mut ok = true;
    let mut reports = Vec::new();
    for result in run_files(&files, &config, mode) {
        match result {
            Ok(report) => reports.push(report),
            Err(e) => {
                error!("{:#}", e);
                ok = false;
            }
        }
    }

    match args.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
        Format::Text => {
            for report in &reports {
                print_report(report, &config, explain);
            }
        }
    }
    Ok(ok)
}

fn print_report(
    report: &Report,
    config: &SolverConfig,
    explain: bool,
) {
    println!("File: {}", report.file.display());
    if let Some(value) = report.value {
        println!("* {}: {}", config.root, value);
    }
    if let Some(solution) = &report.solution {
        println!("* {}: {}", solution.unknown, solution.value);
        if explain {
            if let Some(equation) = &report.equation {
                println!("  {}", equation);
            }
            for (i, step) in solution.steps.iter().enumerate() {
                println!("  [{:3}] {}", i, step);
            }
        }
    }
    println!();
}
