mod config;
mod report;
mod translator;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tokio::io::AsyncBufReadExt;
use wd_core::{Document, Location, UpdateEngine};
use wd_store::Session;

use crate::config::{Config, Overrides};
use crate::translator::Translator;

#[derive(Parser)]
#[command(name = "wdedit", about = "Style-preserving editor for WD input files")]
struct Cli {
    /// Input document path
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    /// Output document path (the input file is never written)
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// Config file path (default: ./wdedit.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive session: natural-language commands, LLM-translated
    Edit {
        /// Model id for the translation endpoint
        #[arg(long)]
        model: Option<String>,

        /// Chat-completion API base URL
        #[arg(long)]
        api_base: Option<String>,
    },

    /// Apply a structured JSON update batch, no network involved
    Apply {
        /// Batch text: {"updates": [{"parameter_name": "q", "mode": "set", "value": 0.5}]}
        batch: Option<String>,

        /// Read the batch from a file instead
        #[arg(long, conflicts_with = "batch")]
        file: Option<PathBuf>,

        /// Print outcomes as JSON instead of status lines
        #[arg(long)]
        json: bool,
    },

    /// Show current parameter values from the input document
    Show {
        /// Restrict to these parameter names (aliases welcome)
        names: Vec<String>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn resolve_config(cli: &Cli, model: Option<String>, api_base: Option<String>) -> Result<Config> {
    Config::resolve(Overrides {
        input: cli.input.clone(),
        output: cli.output.clone(),
        model,
        api_base,
        config: cli.config.clone(),
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Edit { model, api_base } => {
            let cfg = resolve_config(&cli, model.clone(), api_base.clone())?;
            cmd_edit(cfg).await
        }
        Commands::Apply { batch, file, json } => {
            let cfg = resolve_config(&cli, None, None)?;
            cmd_apply(&cfg, batch.as_deref(), file.as_deref(), *json)
        }
        Commands::Show { names, json } => {
            let cfg = resolve_config(&cli, None, None)?;
            cmd_show(&cfg, names, *json)
        }
    }
}

// ---------------------------------------------------------------------------
// edit: interactive LLM-translated session
// ---------------------------------------------------------------------------

async fn cmd_edit(cfg: Config) -> Result<()> {
    let mut session =
        Session::open(&cfg.input, &cfg.output).context("failed to open editing session")?;
    let engine = UpdateEngine::new();

    if cfg.api_token.is_none() {
        tracing::warn!("HF_TOKEN is not set; translation requests will likely be rejected");
    }
    let translator = Translator::new(
        cfg.api_base.clone(),
        cfg.model.clone(),
        cfg.api_token.clone(),
    );

    println!(
        ">>> WD smart editor ready: {} -> {}",
        cfg.input.display(),
        cfg.output.display()
    );
    println!(">>> Note: 'q' is treated as mass ratio unless entered alone to quit.");

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        print!("\nCommand (q for exit): ");
        std::io::stdout().flush().context("failed to flush stdout")?;

        let Some(line) = lines.next_line().await.context("failed to read stdin")? else {
            break;
        };
        let command = line.trim();
        if command.eq_ignore_ascii_case("q") || command.eq_ignore_ascii_case("exit") {
            break;
        }
        if command.is_empty() {
            continue;
        }

        let requests = match translator.translate(command).await {
            Ok(requests) => requests,
            Err(e) => {
                println!("Could not parse command: {e:#}");
                continue;
            }
        };

        let outcomes = engine.apply(&requests, session.document_mut());
        for outcome in &outcomes {
            println!("{}", report::outcome_line(outcome));
        }
        session
            .persist()
            .context("failed to write output document")?;
    }

    println!(">>> Finalizing {} and exiting.", cfg.output.display());
    Ok(())
}

// ---------------------------------------------------------------------------
// apply: structured batch without the translator
// ---------------------------------------------------------------------------

fn cmd_apply(cfg: &Config, batch: Option<&str>, file: Option<&std::path::Path>, json: bool) -> Result<()> {
    let text = match (batch, file) {
        (Some(batch), _) => batch.to_owned(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read batch file {}", path.display()))?,
        (None, None) => bail!("provide a JSON batch argument or --file"),
    };
    let requests = translator::parse_update_batch(&text)?;

    let mut session =
        Session::open(&cfg.input, &cfg.output).context("failed to open editing session")?;
    let engine = UpdateEngine::new();
    let outcomes = engine.apply(&requests, session.document_mut());

    if json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
    } else {
        for outcome in &outcomes {
            println!("{}", report::outcome_line(outcome));
        }
    }
    session
        .persist()
        .context("failed to write output document")?;
    Ok(())
}

// ---------------------------------------------------------------------------
// show: read-only view of mapped parameters
// ---------------------------------------------------------------------------

fn cmd_show(cfg: &Config, names: &[String], json: bool) -> Result<()> {
    let text = std::fs::read_to_string(&cfg.input)
        .with_context(|| format!("failed to read {}", cfg.input.display()))?;
    let document = Document::parse(&text);
    let engine = UpdateEngine::new();

    let mut rows: Vec<(String, Option<Location>)> = Vec::new();
    if names.is_empty() {
        for (symbol, location) in engine.directory().entries() {
            rows.push((symbol.to_owned(), Some(location)));
        }
    } else {
        for name in names {
            let symbol = engine.resolve(name);
            let location = engine.directory().lookup(&symbol);
            rows.push((symbol, location));
        }
    }

    if json {
        let entries: Vec<serde_json::Value> = rows
            .iter()
            .map(|(symbol, location)| match location {
                Some(loc) => serde_json::json!({
                    "symbol": symbol,
                    "line": loc.line,
                    "token": loc.token,
                    "value": document.token(loc.line, loc.token),
                }),
                None => serde_json::json!({ "symbol": symbol }),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for (symbol, location) in &rows {
        match location {
            Some(loc) => {
                let value = document.token(loc.line, loc.token).unwrap_or("(missing)");
                println!("{symbol:>8}  line {:>2} token {:>2}  {value}", loc.line, loc.token);
            }
            None => println!("{symbol:>8}  (unmapped)"),
        }
    }
    Ok(())
}
