use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use glean_core::{Analyzer, Config};

mod commands;
mod serve;

#[derive(Parser)]
#[command(name = "glean")]
#[command(about = "Extract language-agnostic programming concepts from source code", long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./glean.toml, then the user config)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract concepts from a file or stdin and print them as JSON
    Analyze {
        /// Source file; reads stdin when omitted or "-"
        file: Option<PathBuf>,

        /// Language identifier (inferred from the file extension if omitted)
        #[arg(short, long)]
        language: Option<String>,

        /// Only keep these values (repeatable)
        #[arg(short, long = "target")]
        targets: Vec<String>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// List supported languages
    Languages,
    /// Run the HTTP API
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Print the default configuration as TOML
    Config,
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_logging(cli.verbose);

    run(cli.command, cli.config.as_deref()).await
}

/// Build an analyzer from the loaded configuration.
fn load_analyzer(config_path: Option<&Path>) -> color_eyre::Result<Analyzer> {
    let config = Config::load_from(config_path)?;
    Ok(Analyzer::from_config(&config))
}

async fn run(command: Commands, config_path: Option<&Path>) -> color_eyre::Result<()> {
    match command {
        Commands::Analyze {
            file,
            language,
            targets,
            pretty,
        } => commands::analyze(
            &load_analyzer(config_path)?,
            file.as_deref(),
            language.as_deref(),
            &targets,
            pretty,
        ),
        Commands::Languages => {
            commands::languages(&load_analyzer(config_path)?);
            Ok(())
        }
        Commands::Serve { host, port } => {
            let mut config = Config::load_from(config_path)?;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            let analyzer = Analyzer::from_config(&config);
            serve::start_server(analyzer, &config.server).await
        }
        // Needs no config, so a broken config file cannot hide the defaults.
        Commands::Config => {
            print!("{}", Config::default_config_string());
            Ok(())
        }
    }
}
