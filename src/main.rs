use std::path::Path;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use testmap::extract;

#[derive(Parser)]
#[command(name = "testmap")]
#[command(about = "Catalog the e2e test hooks in a static HTML snapshot")]
struct Cli {
    /// Path to an HTML file to scan
    // Optional: a missing argument must print usage on stdout and exit 1,
    // not clap's stderr error with exit 2.
    input: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let Some(input) = cli.input else {
        println!("Usage: testmap <path_to_html_file>");
        std::process::exit(1);
    };

    if !Path::new(&input).exists() {
        println!("Error: File '{input}' does not exist.");
        std::process::exit(1);
    }

    let html = std::fs::read_to_string(&input)?;
    info!(input = %input, html_len = html.len(), "scanning snapshot");
    let records = extract::scan(&html);
    info!(records = records.len(), "scan complete");
    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}
