use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rae_client::{Client, Dictionary, RaeError};
use rae_config::ClientConfig;
use rae_types::VerbalMode;
use tracing_subscriber::EnvFilter;

mod render;

#[derive(Parser)]
#[command(name = "rae", about = "Query the Spanish dictionary service")]
struct Cli {
    /// Override the service root URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Per-request timeout in milliseconds
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_ms: Option<u64>,

    /// Print raw JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Look up a headword
    Word { word: String },
    /// A random headword
    Random,
    /// Word of the day
    Daily,
    /// Free-text search
    Search {
        terms: String,
        /// Search engine selector
        #[arg(long)]
        engine: Option<String>,
    },
    /// Show the conjugation table of a verb
    Conjugate {
        verb: String,
        /// indicative, subjunctive, imperative or nonpersonal
        #[arg(long, value_parser = parse_mode)]
        mode: Option<VerbalMode>,
    },
}

fn parse_mode(s: &str) -> Result<VerbalMode, String> {
    VerbalMode::from_wire(&s.to_lowercase()).ok_or_else(|| {
        let known: Vec<&str> = VerbalMode::ALL.iter().map(|m| m.as_str()).collect();
        format!("unknown mode {s:?}, expected one of {}", known.join(", "))
    })
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(RaeError::NotFound { arg, suggestions, .. }) = e.downcast_ref::<RaeError>() {
                eprintln!("{arg:?} not found");
                if !suggestions.is_empty() {
                    eprintln!("Did you mean: {}", suggestions.join(", "));
                }
            } else {
                tracing::error!("{e:#}");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = ClientConfig::new();
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config.timeout_ms = timeout_ms;
    }
    if let Command::Search {
        engine: Some(engine),
        ..
    } = &cli.command
    {
        config.search_engine = Some(engine.clone());
    }

    tracing::debug!(base_url = %config.base_url, timeout_ms = config.timeout_ms, "client configured");
    let client = Client::new(config).context("Failed to build HTTP client")?;

    execute(&client, cli.command, cli.json).await
}

async fn execute(dictionary: &dyn Dictionary, command: Command, json: bool) -> anyhow::Result<()> {
    match command {
        Command::Word { word } => {
            let entry = dictionary.lookup(&word).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&entry)?);
            } else {
                print!("{}", render::entry(&entry));
            }
        }
        Command::Random => println!("{}", dictionary.random().await?),
        Command::Daily => println!("{}", dictionary.daily().await?),
        Command::Search { terms, .. } => {
            let entries = dictionary.search(&terms).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else if entries.is_empty() {
                println!("No results for {terms:?}");
            } else {
                for entry in &entries {
                    println!("{}", render::summary(entry));
                }
            }
        }
        Command::Conjugate { verb, mode } => {
            let entry = dictionary.lookup(&verb).await?;
            let table = entry
                .conjugations()
                .with_context(|| format!("{} has no conjugation table", entry.word))?;
            if json {
                println!("{}", serde_json::to_string_pretty(table)?);
            } else {
                let modes = match mode {
                    Some(mode) => vec![mode],
                    None => VerbalMode::ALL.to_vec(),
                };
                for mode in modes {
                    print!("{}", render::conjugations(table, mode));
                }
            }
        }
    }

    Ok(())
}
