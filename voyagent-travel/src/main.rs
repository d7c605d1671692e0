//! Voyagent CLI - AI travel planner
//!
//! Plans a trip with three specialist agents on a local Ollama model.

#![allow(clippy::print_stdout)] // CLI program intentionally uses stdout

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use voyagent::prelude::*;
use voyagent_travel::config::{self, PlannerConfig, load_config, load_config_from, save_config_to};
use voyagent_travel::summary::{render_header, render_summary, render_verdict};
use voyagent_travel::{Result, TravelPlanner};

/// Voyagent - plan a trip with flight, hotel and activity agents
#[derive(Parser)]
#[command(name = "voyagent")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file path
    #[arg(short, long, env = "VOYAGENT_CONFIG", global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    plan: PlanArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the default configuration file
    Init(InitArgs),

    /// Inspect configuration
    Config(ConfigArgs),
}

/// Arguments for planning a trip (the default command)
#[derive(Args)]
struct PlanArgs {
    /// Departure city
    #[arg(long)]
    origin: Option<String>,

    /// Destination city
    #[arg(long)]
    destination: Option<String>,

    /// Total budget in dollars
    #[arg(long, allow_negative_numbers = true)]
    budget: Option<f64>,

    /// Number of nights
    #[arg(long, allow_negative_numbers = true)]
    nights: Option<i64>,

    /// Model to use (overrides config)
    #[arg(short, long, env = "VOYAGENT_MODEL")]
    model: Option<String>,

    /// Ollama base URL (overrides config)
    #[arg(long, env = "OLLAMA_BASE_URL")]
    base_url: Option<String>,

    /// Sampling temperature (overrides config)
    #[arg(short, long)]
    temperature: Option<f64>,

    /// Print the plan as JSON instead of the text summary
    #[arg(long)]
    json: bool,
}

impl PlanArgs {
    /// Layers flags and environment over the loaded configuration.
    fn apply(self, config: &mut PlannerConfig) {
        let trip = &mut config.trip;
        if let Some(origin) = self.origin {
            trip.origin = origin;
        }
        if let Some(destination) = self.destination {
            trip.destination = destination;
        }
        if let Some(budget) = self.budget {
            trip.budget = budget;
        }
        if let Some(nights) = self.nights {
            trip.nights = nights;
        }

        let model = &mut config.model;
        if let Some(name) = self.model {
            model.name = name;
        }
        if let Some(base_url) = self.base_url {
            model.base_url = base_url;
        }
        if let Some(temperature) = self.temperature {
            model.temperature = temperature;
        }
    }
}

/// Arguments for the init command
#[derive(Args)]
struct InitArgs {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    force: bool,
}

/// Arguments for the config command
#[derive(Args)]
struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommands,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Show configuration file path
    Path,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let rt = tokio::runtime::Runtime::new().expect("failed to create tokio runtime");

    match rt.block_on(run(cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Initialize logging with the given verbosity level.
///
/// Logs go to stderr so stdout carries only the itinerary.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "voyagent={level},voyagent_travel={level},{}",
            if verbosity >= 2 { "debug" } else { "warn" }
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbosity >= 2)
        .with_writer(std::io::stderr)
        .init();
}

/// Main async entry point.
async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Init(args)) => cmd_init(args, cli.config).await,
        Some(Commands::Config(args)) => cmd_config(args, cli.plan, cli.config).await,
        None => cmd_plan(cli.plan, cli.config).await,
    }
}

/// Loads the configuration file and layers flags and environment over it.
async fn effective_config(args: PlanArgs, path: Option<&Path>) -> Result<PlannerConfig> {
    let mut config = match path {
        Some(path) => load_config_from(path).await?,
        None => load_config().await?,
    };
    args.apply(&mut config);
    Ok(config)
}

/// Plan a trip and print the summary.
async fn cmd_plan(args: PlanArgs, config_path: Option<PathBuf>) -> Result<()> {
    let json = args.json;
    let config = effective_config(args, config_path.as_deref()).await?;
    config.validate()?;

    let trip = config.trip.to_request()?;
    if !json {
        println!("{}", render_header(&trip));
    }

    let provider = Ollama::new(config.model.to_ollama_config())?;
    tracing::info!(
        base_url = provider.base_url(),
        model = %config.model.name,
        "creating travel specialists"
    );
    let planner = TravelPlanner::new(Arc::new(provider))
        .model(config.model.name.clone())
        .temperature(config.model.sampling_temperature());

    let plan = planner.plan(&trip).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        println!("{}", render_summary(&plan));
        println!("{}", render_verdict(&plan));
    }

    Ok(())
}

/// Write the default configuration.
async fn cmd_init(args: InitArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config_file = config_path.unwrap_or_else(config::config_path);

    if config_file.exists() && !args.force {
        println!("Configuration already exists at: {}", config_file.display());
        println!("Use --force to overwrite.");
        return Ok(());
    }

    save_config_to(&PlannerConfig::default(), &config_file).await?;

    println!("Configuration created: {}", config_file.display());
    println!();
    println!("Next steps:");
    println!("  1. ollama pull {}", OllamaConfig::DEFAULT_MODEL);
    println!("  2. voyagent --origin London --destination Paris --budget 1200 --nights 2");

    Ok(())
}

/// Show configuration.
async fn cmd_config(
    args: ConfigArgs,
    overrides: PlanArgs,
    config_path: Option<PathBuf>,
) -> Result<()> {
    match args.command {
        ConfigCommands::Path => {
            let config_file = config_path.unwrap_or_else(config::config_path);
            println!("{}", config_file.display());
        }
        ConfigCommands::Show => {
            let settings = effective_config(overrides, config_path.as_deref()).await?;
            let content = toml::to_string_pretty(&settings).map_err(config::ConfigError::from)?;
            println!("{content}");
        }
    }
    Ok(())
}
