use std::io::Read;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use lien_results::api::response::SearchResponse;
use lien_results::render::render_results_page;

/// Render a search response document to HTML on stdout.
/// Usage: lien-render [response.json]  (reads stdin when no file is given)
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let raw = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {path}"))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let response: SearchResponse =
        serde_json::from_str(&raw).context("malformed search response document")?;
    let page = render_results_page(&response)?;
    println!("{page}");
    Ok(())
}
