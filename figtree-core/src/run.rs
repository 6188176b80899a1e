use crate::cache::{self, CacheError};
use crate::document::{self, DocumentError};
use crate::report;
use crate::summary;
use crate::walk::walk;
use colored::Colorize;
use figtree_client::Fetcher;
use figtree_client::error::FetchError;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::info;
use url::Url;

/// Options for one fetch-and-render run, built once at startup and
/// threaded through the whole pipeline.
pub struct RunOptions {
    pub file_key: String,
    pub token: Option<String>,
    /// Override for the API base URL; `None` means the public endpoint.
    pub api_base: Option<Url>,
    pub cache_dir: PathBuf,
    pub output_path: PathBuf,
    pub dump_raw: bool,
    pub show_spinner: bool,
}

/// What a completed run produced, for the caller's recap.
#[derive(Debug)]
pub struct RunSummary {
    pub file_name: Option<String>,
    pub status_code: u16,
    pub response_time: Duration,
    pub nodes_visited: usize,
    pub components_found: usize,
    pub snapshot_path: PathBuf,
    pub stub_path: PathBuf,
}

#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error("Failed to write component stub: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to render raw dump: {0}")]
    Json(#[from] serde_json::Error),
}

/// Execute one run: wipe the snapshot dir, fetch the file, snapshot the
/// raw response, print the tree summary, and write the component stub.
/// Strictly linear; the first failure aborts the whole run.
pub async fn execute_run(options: &RunOptions) -> Result<RunSummary, RunError> {
    // Wipe before fetching so a failed fetch never leaves a stale
    // snapshot behind.
    cache::reset_snapshot_dir(&options.cache_dir)?;

    let mut fetcher = Fetcher::new();
    if let Some(ref base) = options.api_base {
        fetcher = fetcher.with_api_base(base.clone());
    }
    if let Some(ref token) = options.token {
        fetcher = fetcher.with_token(token.clone());
    }

    let spinner = if options.show_spinner {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message(format!("Fetching {}...", options.file_key));
        Some(pb)
    } else {
        None
    };

    let fetched = fetcher.fetch_file(&options.file_key).await;

    if let Some(ref pb) = spinner {
        pb.finish_and_clear();
    }

    let fetched = fetched?;

    let snapshot_path = cache::write_snapshot(&options.cache_dir, &fetched.data)?;

    if options.dump_raw {
        println!("{}", "# Data".on_magenta());
        println!();
        println!("{}", serde_json::to_string_pretty(&fetched.data)?);
        println!();
    }

    let document = document::document_root(&fetched.data)?;

    println!("{}", "# Summary".on_magenta());
    println!();
    let mut nodes_visited = 0usize;
    walk(&document, &mut |node, depth, _index| {
        println!("{}", summary::format_node_line(node, depth));
        nodes_visited += 1;
    });
    println!();

    let page = document::first_page(&document)?;
    let components = report::extract_components(page);
    let stub = report::render_component_stub(&components);
    report::save_stub(&stub, &options.output_path)?;

    info!(
        "Run complete: {} nodes visited, {} components stubbed",
        nodes_visited,
        components.len()
    );

    Ok(RunSummary {
        file_name: fetched.file_name().map(str::to_string),
        status_code: fetched.status_code,
        response_time: fetched.response_time,
        nodes_visited,
        components_found: components.len(),
        snapshot_path,
        stub_path: options.output_path.clone(),
    })
}
