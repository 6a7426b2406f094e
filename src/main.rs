use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

use machine_dream::config::{Config, DEFAULT_CONFIG_FILE};

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Dream about a problem and remember placeholder insights", long_about = None)]
struct Cli {
    /// Config file (missing file means defaults)
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Show info-level diagnostics on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the built-in demonstration (default)
    Demo,

    /// Dream on one or more problem statements, then save them all
    Dream {
        /// Problem statements, dreamt in order
        #[arg(required = true)]
        problems: Vec<String>,

        /// Where to save the memory (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Seed for reproducible dreams (overrides config)
        #[arg(long)]
        seed: Option<u64>,

        /// Print records as JSON lines
        #[arg(short, long)]
        json: bool,

        /// Skip the tuning diagnostic
        #[arg(long)]
        no_tune: bool,
    },
}

fn init_tracing(verbose: bool, config: &Config) -> Result<()> {
    // RUST_LOG wins, then --verbose, then the config file
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) if verbose => EnvFilter::new("info"),
        Err(_) => config.log_filter()?,
    };

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;
    init_tracing(cli.verbose, &config)?;

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => {
            commands::demo::execute(&config)?;
        }
        Commands::Dream {
            problems,
            output,
            seed,
            json,
            no_tune,
        } => {
            let options = commands::dream::DreamOptions {
                output: output.or_else(|| config.memory.path.clone()),
                seed: seed.or(config.rng.seed),
                json,
                tune: !no_tune,
            };
            commands::dream::execute(&problems, &options)?;
        }
    }

    Ok(())
}
