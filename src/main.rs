// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (RUST_LOG, default "info", written to stderr)
// 2. Parse command-line arguments using clap
// 3. Build the project source from the global options
// 4. Dispatch to `serve` or `list`
// 5. Exit with proper code (0 = success, 2 = error)
// =============================================================================

mod cli;

use std::time::Duration;

use anyhow::{anyhow, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use project_showcase::projects::{ProjectSummary, View};
use project_showcase::server;
use project_showcase::showcase::{load_section, Section};
use project_showcase::source::{Freshness, ProjectSource, SourceSettings};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();
    let source = build_source(&cli)?;

    match cli.command {
        Commands::Serve { port } => {
            server::start_server(source, port).await?;
            Ok(0)
        }
        Commands::List { view, json } => handle_list(&source, &view, json).await,
    }
}

fn build_source(cli: &Cli) -> Result<ProjectSource> {
    let base_url = cli
        .source_url
        .clone()
        .ok_or_else(|| anyhow!("No source URL given (--source-url or SHOWCASE_SOURCE_URL)"))?;
    let account = cli
        .account
        .clone()
        .ok_or_else(|| anyhow!("No account given (--account or SHOWCASE_ACCOUNT)"))?;

    let freshness = if cli.fresh {
        Freshness::AlwaysFresh
    } else {
        Freshness::Revalidate(Duration::from_secs(cli.revalidate_secs))
    };

    let source = ProjectSource::new(&SourceSettings {
        base_url,
        account,
        freshness,
    })?;
    info!("Project source: {} ({:?})", source.endpoint(), freshness);

    Ok(source)
}

// Handles the 'list' subcommand
//
// An unknown view name is an error (exit code 2). An unreachable source or
// an empty view prints the placeholder, same as a page would.
async fn handle_list(source: &ProjectSource, view: &str, json: bool) -> Result<i32> {
    let view: View = view.parse()?;

    match load_section(source, view).await {
        Section::Projects(projects) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&projects)?);
            } else {
                print_table(&projects, view);
            }
        }
        Section::ComingSoon => {
            if json {
                println!("[]");
            } else {
                println!("🚧 Coming soon: nothing to show in '{}' yet", view);
            }
        }
    }

    Ok(0)
}

// Prints projects as a human-readable table in the terminal
fn print_table(projects: &[ProjectSummary], view: View) {
    println!("{:<30} {:<12} {:<14} {:<40}", "NAME", "STATUS", "STACK", "TAGS");
    println!("{}", "=".repeat(96));

    for project in projects {
        // Truncate names that would push the other columns out of line
        let name = if project.name.chars().count() > 27 {
            format!("{}...", project.name.chars().take(27).collect::<String>())
        } else {
            project.name.clone()
        };
        let stack = project.stack.as_deref().unwrap_or("-");

        println!(
            "{:<30} {:<12} {:<14} {:<40}",
            name,
            project.status,
            stack,
            project.tags.join(", ")
        );
    }

    println!();
    println!("📋 {} project(s) in '{}'", projects.len(), view);
}
