//! Nutrition Planner
//!
//! Command-line entry point:
//! - Interactive planning shell (default)
//! - Run a command script
//! - Generate a default config file
//!
//! # Configuration
//!
//! Environment variables:
//! - `NUTRITION_PLANNER_PROMPT`: Shell prompt (default: "planner> ")
//! - `NUTRITION_PLANNER_LOG_LEVEL`: Log level (default: warn)
//! - `NUTRITION_PLANNER_LOG_FORMAT`: pretty or json (default: pretty)
//! - `NUTRITION_PLANNER_LOG_FILE`: Write logs to this file instead of stderr
//! - `RUST_LOG`: Full filter directive, overrides the log level

use anyhow::Context;
use clap::{Parser, Subcommand};
use nutrition_planner::config::{generate_default_config, Config};
use nutrition_planner::shell::{run_interactive, run_script, Session};
use nutrition_planner::view::{export, ExportTarget, OutputFormat};
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nutrition-planner")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Plan meals, track calories and keep a grocery list")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: search the standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive planning session
    Shell,

    /// Run a file of shell commands
    Run {
        /// Path to the script
        script: PathBuf,
        /// List to print when the script finishes (meals, groceries, all)
        #[arg(short, long)]
        export: Option<ExportTarget>,
        /// Output format for the final export (table, json, csv)
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => {
            let (config, warnings) = Config::load_default();
            for warning in warnings {
                eprintln!("warning: {}", warning);
            }
            config
        }
    };

    nutrition_planner::init_logging(&config.logging)?;
    tracing::info!("Nutrition Planner v{}", env!("CARGO_PKG_VERSION"));

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let mut session = Session::new();
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            run_interactive(&mut session, stdin.lock(), &mut stdout, &config.shell)?;
        }

        Commands::Run {
            script,
            export: target,
            format,
        } => {
            let file = std::fs::File::open(&script)
                .with_context(|| format!("Cannot open script {:?}", script))?;

            let mut session = Session::new();
            let mut stdout = io::stdout();
            run_script(&mut session, BufReader::new(file), &mut stdout, &config.shell)
                .with_context(|| format!("Script {:?} failed", script))?;

            if let Some(target) = target {
                let text = export(session.state(), target, format)?;
                write!(stdout, "{}", text)?;
            }

            tracing::info!(
                meals = session.state().meals().len(),
                groceries = session.state().groceries().len(),
                "Script finished"
            );
        }

        Commands::Config { output } => {
            let config = generate_default_config();

            match output {
                Some(path) => {
                    // Create parent directory if needed
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}
