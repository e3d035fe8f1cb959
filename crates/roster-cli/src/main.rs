use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use roster_core::{ConfigLoader, Dispatcher};
use std::io::{self, IsTerminal};
use std::path::PathBuf;

mod render;
mod repl;

use render::Renderer;

const DEFAULT_CONFIG_FILE: &str = "roster.yaml";

#[derive(Parser, Debug)]
#[clap(name = "roster", author, version = "0.1.0", about = "Course and trainee roster manager")]
struct Cli {
    #[clap(
        long,
        short,
        help = "Configuration file (YAML). Defaults to ./roster.yaml when present"
    )]
    config: Option<PathBuf>,

    #[clap(long, help = "Directory holding the course and trainee JSON files")]
    data_dir: Option<PathBuf>,

    #[clap(long, short, default_value = "warn")]
    log_level: String,

    #[clap(long, help = "Append logs to this file instead of stderr")]
    log_file: Option<PathBuf>,

    #[clap(long, help = "Execute a single command (e.g. \"COURSE GETALL\") and exit")]
    command: Option<String>,

    #[clap(long, help = "Disable colored output")]
    no_color: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli)?;

    let config_path = cli.config.clone().or_else(|| {
        let default = PathBuf::from(DEFAULT_CONFIG_FILE);
        default.exists().then_some(default)
    });
    match &config_path {
        Some(path) => log::info!("Loading configuration from file: {}", path.display()),
        None => log::info!("No configuration file, using defaults"),
    }

    let mut config = ConfigLoader::load(config_path.as_deref()).await?;
    if let Some(data_dir) = cli.data_dir.clone() {
        config.storage.data_dir = data_dir;
    }
    log::info!("Using data directory {}", config.storage.data_dir.display());

    let dispatcher = Dispatcher::from_config(&config);
    let renderer = Renderer::new(!cli.no_color && io::stdout().is_terminal());

    match cli.command {
        Some(line) => run_once(&dispatcher, renderer, &line).await,
        None => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            repl::run_session(&dispatcher, renderer, stdin, &mut io::stdout()).await
        }
    }
}

fn init_logging(cli: &Cli) -> Result<()> {
    let log_level_filter = cli.log_level.parse().unwrap_or(LevelFilter::Warn);

    match &cli.log_file {
        Some(path) => {
            use std::fs::OpenOptions;

            let log_file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| anyhow::anyhow!("Failed to open log file {}: {}", path.display(), e))?;

            env_logger::Builder::new()
                .filter_level(log_level_filter)
                .target(env_logger::Target::Pipe(Box::new(log_file)))
                .init();
        }
        None => {
            env_logger::Builder::new()
                .filter_level(log_level_filter)
                .init();
        }
    }

    Ok(())
}

async fn run_once(dispatcher: &Dispatcher, renderer: Renderer, line: &str) -> Result<()> {
    let line = line.trim();
    if line.is_empty() {
        anyhow::bail!("--command requires a non-empty command, e.g. --command \"COURSE GETALL\"");
    }

    match dispatcher.execute(line).await {
        Ok(outcome) => {
            println!("{}", renderer.outcome(&outcome));
            Ok(())
        }
        Err(err) => {
            eprintln!("{}", renderer.error(&err));
            std::process::exit(1);
        }
    }
}
