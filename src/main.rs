use std::io::Read;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use serde_json::Value as Json;

use html_metadata::load::{self, FetchConfig};
use html_metadata::output::{Emitter, Envelope, Meta, OutputConfig};
use html_metadata::telemetry;
use html_metadata::{parse_all, parse_all_merged, parse_dialect, Dialect, Document};

#[derive(Parser)]
#[command(name = "html-metadata", about = "Extract embedded metadata from HTML pages")]
struct Cli {
    /// Run a single dialect (e.g. openGraph, dublinCore)
    #[arg(global = true, long, value_parser = parse_dialect_arg)]
    only: Option<Dialect>,
    /// Merge every dialect's properties into one flat map
    #[arg(global = true, long, default_value_t = false, conflicts_with = "only")]
    merged: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a page over HTTP(S)
    Url { url: String },
    /// Read a local HTML file
    File { path: PathBuf },
    /// Read HTML from standard input
    Stdin,
}

impl Commands {
    fn op(&self) -> &'static str {
        match self {
            Commands::Url { .. } => "url",
            Commands::File { .. } => "file",
            Commands::Stdin => "stdin",
        }
    }

    fn source(&self) -> Option<String> {
        match self {
            Commands::Url { url } => Some(url.clone()),
            Commands::File { path } => Some(path.display().to_string()),
            Commands::Stdin => None,
        }
    }
}

fn parse_dialect_arg(s: &str) -> Result<Dialect, String> {
    s.parse::<Dialect>().map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();
    telemetry::config::init_tracing();
    let t0 = Instant::now();

    let op = cli.command.op();
    let source = cli.command.source();
    let outcome = run(&cli).await;
    let meta = Some(Meta { duration_ms: Some(t0.elapsed().as_millis()), source });

    let envelope = match &outcome {
        Ok(result) => Envelope::ok(op, result, meta)?,
        Err(e) => Envelope::failure(op, format!("{e:#}"), meta),
    };
    Emitter::from_env(OutputConfig::from_env()).emit(&envelope)?;

    if outcome.is_err() {
        std::process::exit(1);
    }
    Ok(())
}

async fn run(cli: &Cli) -> Result<Json> {
    let doc = match &cli.command {
        Commands::Url { url } => load::document_from_url(url, &FetchConfig::from_env()).await?,
        Commands::File { path } => load::document_from_file(path).with_context(|| format!("reading {}", path.display()))?,
        Commands::Stdin => {
            let mut html = String::new();
            std::io::stdin().read_to_string(&mut html).context("reading stdin")?;
            load::document_from_string(&html)?
        }
    };
    extract(&doc, cli)
}

fn extract(doc: &Document, cli: &Cli) -> Result<Json> {
    let value = match (cli.only, cli.merged) {
        (Some(dialect), _) => parse_dialect(doc, dialect)?.to_json(),
        (None, true) => parse_all_merged(doc)?.to_json(),
        (None, false) => parse_all(doc)?.to_json(),
    };
    Ok(value)
}
