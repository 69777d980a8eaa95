//! Frame Insight CLI
//!
//! Performance analysis for FramePro profiling exports.
//! Finds issues, ranks hotspots, estimates frame rate and compares sessions.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::debug;
use std::path::PathBuf;

use frame_insight::analysis::Focus;
use frame_insight::parser::executable_dir;
use frame_insight::commands::{
    display_version, execute_analyze, execute_compare, execute_frames, execute_hotspots,
    invoke_tool, validate_session_file, AnalyzeArgs, CompareArgs, FramesArgs, HotspotsArgs, TOOLS,
};
use frame_insight::utils::config::{load_config, CliConfig};

/// Frame Insight - Performance analysis for FramePro captures
#[derive(Parser, Debug)]
#[command(name = "frame-insight")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory relative session paths are resolved against
    /// (defaults to the executable's directory)
    #[arg(long, global = true, env = "FRAMEPRO_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// TOML file with default settings (CLI flags take precedence)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Identify performance issues ranked by severity
    Analyze {
        /// Session export JSON
        #[arg(short, long)]
        file: String,

        /// Detectors to run: cpu, frames, threads or all
        #[arg(long)]
        focus: Option<String>,

        /// Path to write the report JSON
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print a human-readable summary instead of JSON
        #[arg(long)]
        summary: bool,
    },

    /// List the most expensive functions
    Hotspots {
        /// Session export JSON
        #[arg(short, long)]
        file: String,

        /// Number of hotspots to report
        #[arg(short = 'n', long)]
        top_n: Option<usize>,

        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(long)]
        summary: bool,
    },

    /// Estimate frame rate against a target
    Frames {
        /// Session export JSON
        #[arg(short, long)]
        file: String,

        /// Target frames per second
        #[arg(long)]
        target_fps: Option<f64>,

        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(long)]
        summary: bool,
    },

    /// Compare a baseline session against a current one
    Compare {
        /// Baseline session export JSON
        #[arg(short, long)]
        baseline: String,

        /// Current session export JSON
        #[arg(short, long)]
        current: String,

        /// Path to write the comparison JSON
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print raw JSON instead of the terminal summary
        #[arg(long)]
        json: bool,
    },

    /// Invoke an operation by tool name with JSON arguments
    Tool {
        /// Tool name (omit with --list)
        #[arg(short, long, required_unless_present = "list")]
        name: Option<String>,

        /// JSON object of tool arguments
        #[arg(short, long, default_value = "{}")]
        args: String,

        /// List available tools
        #[arg(long)]
        list: bool,
    },

    /// Validate a session export JSON file
    Validate {
        /// Path to session JSON file
        #[arg(short, long)]
        file: String,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Load defaults
    let config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => CliConfig::default(),
    };
    let data_dir = cli
        .data_dir
        .clone()
        .or_else(|| config.data_dir.clone())
        .or_else(executable_dir);
    debug!("Data dir: {:?}", data_dir);

    // Execute command
    match cli.command {
        Commands::Analyze {
            file,
            focus,
            output,
            summary,
        } => {
            let focus: Focus = focus.as_deref().unwrap_or(config.focus()).parse()?;
            execute_analyze(AnalyzeArgs {
                file,
                data_dir,
                focus,
                output,
                summary,
            })?;
        }

        Commands::Hotspots {
            file,
            top_n,
            output,
            summary,
        } => {
            execute_hotspots(HotspotsArgs {
                file,
                data_dir,
                top_n: top_n.unwrap_or_else(|| config.top_n()),
                output,
                summary,
            })?;
        }

        Commands::Frames {
            file,
            target_fps,
            output,
            summary,
        } => {
            execute_frames(FramesArgs {
                file,
                data_dir,
                target_fps: target_fps.unwrap_or_else(|| config.target_fps()),
                output,
                summary,
            })?;
        }

        Commands::Compare {
            baseline,
            current,
            output,
            json,
        } => {
            execute_compare(CompareArgs {
                baseline,
                current,
                data_dir,
                output,
                summary: !json,
            })?;
        }

        Commands::Tool { name, args, list } => {
            if list {
                for tool in TOOLS {
                    println!("{:<22} {}", tool.name, tool.description);
                    println!("{:<22} required: {}", "", tool.required.join(", "));
                    if !tool.optional.is_empty() {
                        println!("{:<22} optional: {}", "", tool.optional.join(", "));
                    }
                }
            } else if let Some(name) = name {
                let args: serde_json::Map<String, serde_json::Value> =
                    serde_json::from_str(&args).context("--args must be a JSON object")?;
                let value = invoke_tool(&name, &args, data_dir.as_deref())?;
                println!("{}", serde_json::to_string_pretty(&value)?);
            }
        }

        Commands::Validate { file } => {
            validate_session_file(&file, data_dir.as_deref())?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
