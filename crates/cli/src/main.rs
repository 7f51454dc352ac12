// ABOUTME: CLI for scraping page metadata with the pagemeta provider engine.
// ABOUTME: Loads HTML from URL, file, or stdin and prints resolved metadata as JSON.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use pagemeta::{load_registry_from_path, Scraper};
use serde_json::{json, Value};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use url::Url;

/// Extract title, description, image, favicon, and feeds from HTML pages.
#[derive(Parser, Debug)]
#[command(name = "pagemeta")]
#[command(about = "Scrape page metadata and print JSON", long_about = None)]
struct Args {
    /// Page URL(s) (http/https) or local HTML files. Use "-" to read one page from stdin.
    #[arg(required = true)]
    targets: Vec<String>,

    /// JSON provider manifest to use instead of the standard providers.
    #[arg(long, value_name = "MANIFEST")]
    providers: Option<PathBuf>,

    /// Also read schema.org JSON-LD blocks (ranked ahead of Open Graph).
    #[arg(long = "json-ld", default_value_t = false)]
    json_ld: bool,

    /// Output compact JSON instead of pretty.
    #[arg(long, default_value_t = false)]
    compact: bool,

    /// Increase log verbosity (-v debug, -vv trace). Defaults to RUST_LOG or warn.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn build_scraper(args: &Args) -> Result<Scraper> {
    let mut builder = Scraper::builder().include_json_ld(args.json_ld);
    if let Some(path) = &args.providers {
        let registry = load_registry_from_path(path)
            .with_context(|| format!("loading provider manifest {}", path.display()))?;
        builder = builder.registry(registry);
    }
    Ok(builder.build())
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.verbose);

    let scraper = build_scraper(&args)?;
    debug!(providers = scraper.registry().len(), "scraper ready");

    let mut results = Vec::new();

    for target in &args.targets {
        let outcome = load_bytes(target).and_then(|bytes| {
            scraper
                .scrape_bytes(&bytes)
                .map_err(anyhow::Error::new)
        });
        match outcome {
            Ok(metadata) => {
                info!(page = %target, "scraped");
                results.push(json!({
                    "target": target,
                    "ok": true,
                    "metadata": metadata.summary(),
                    "error": null
                }));
            }
            Err(err) => results.push(json!({
                "target": target,
                "ok": false,
                "metadata": null,
                "error": format!("{:#}", err)
            })),
        }
    }

    let failed = results
        .iter()
        .filter(|r| r.get("ok").and_then(Value::as_bool) != Some(true))
        .count();

    // Output format:
    // - Single target and ok => emit the metadata object
    // - Otherwise emit an envelope with a pages array and counts
    let output = match results.as_slice() {
        [only] if failed == 0 => only.get("metadata").cloned().unwrap_or_else(|| json!({})),
        _ => json!({
            "pages": results,
            "total_pages": results.len(),
            "parsed": results.len() - failed,
            "failed": failed
        }),
    };

    if args.compact {
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&output)?);
    }

    Ok(if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn load_bytes(target: &str) -> Result<Vec<u8>> {
    if target == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        return Ok(buf);
    }

    if let Ok(url) = Url::parse(target) {
        if matches!(url.scheme(), "http" | "https") {
            let resp = reqwest::blocking::get(url)?.error_for_status()?;
            let bytes = resp.bytes()?;
            return Ok(bytes.to_vec());
        }
    }

    let path = PathBuf::from(target);
    if !path.exists() {
        return Err(anyhow!("file not found: {}", target));
    }
    Ok(fs::read(path)?)
}
