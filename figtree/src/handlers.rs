use clap::ArgMatches;
use colored::Colorize;
use figtree_core::run::{RunOptions, execute_run};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber;
use url::Url;

/// Expand `~` in a user-supplied path.
pub fn resolve_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).as_ref())
}

/// Tokens are secrets; show just enough to confirm which one was used.
pub fn mask_token(token: &str) -> String {
    const VISIBLE: usize = 4;
    let count = token.chars().count();
    if count <= VISIBLE {
        return "*".repeat(count);
    }
    let visible: String = token.chars().take(VISIBLE).collect();
    format!("{}{}", visible, "*".repeat(count - VISIBLE))
}

pub async fn handle_fetch(matches: &ArgMatches) {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let file_key = matches.get_one::<String>("FILE_KEY").unwrap();
    let token = matches.get_one::<String>("DEV_TOKEN").cloned();
    let output_path = resolve_path(matches.get_one::<String>("output").unwrap());
    let cache_dir = resolve_path(matches.get_one::<String>("cache-dir").unwrap());
    let api_base = matches.get_one::<Url>("api-base").cloned();
    let dump_raw = matches.get_flag("dump");
    let quiet = matches.get_flag("quiet");

    debug!("Parsed arguments for file {}", file_key);

    if !quiet {
        println!("🌳 Fetching file {}", file_key.bright_white());
        match token {
            Some(ref token) => println!("Token: {}", mask_token(token)),
            None => println!("Token: none (public files only)"),
        }
        println!("Snapshot: {}", cache_dir.display());
        println!("Stub: {}\n", output_path.display());
    }

    let options = RunOptions {
        file_key: file_key.clone(),
        token,
        api_base,
        cache_dir,
        output_path,
        dump_raw,
        show_spinner: !quiet,
    };

    match execute_run(&options).await {
        Ok(summary) => {
            println!("{} Fetch complete!\n", "✓".green().bold());
            if let Some(ref name) = summary.file_name {
                println!("  File:       {}", name.bright_white());
            }
            println!(
                "  Response:   {} in {:?}",
                summary.status_code.to_string().green(),
                summary.response_time
            );
            println!(
                "  Nodes:      {}",
                summary.nodes_visited.to_string().cyan()
            );
            println!(
                "  Components: {}",
                summary.components_found.to_string().cyan()
            );
            println!(
                "  Snapshot:   {}",
                summary.snapshot_path.display().to_string().bright_white()
            );
            println!(
                "  Stub:       {}",
                summary.stub_path.display().to_string().bright_white()
            );
            println!();
        }
        Err(e) => {
            eprintln!("{} Fetch failed: {}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    }
}
