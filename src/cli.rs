// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Every global option can also come from the environment (the `env`
// attribute), which is how the server is usually configured when deployed:
//
//   SHOWCASE_SOURCE_URL=https://api.example.com SHOWCASE_ACCOUNT=someone \
//       project-showcase serve
// =============================================================================

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "project-showcase",
    version,
    about = "Serve portfolio projects grouped into curated views",
    long_about = "project-showcase fetches the owner's project records from an upstream source, \
                  groups them by the categories the author tagged them with, and serves them \
                  over HTTP or prints them in the terminal."
)]
pub struct Cli {
    /// Base URL of the upstream project source
    #[arg(long, global = true, env = "SHOWCASE_SOURCE_URL")]
    pub source_url: Option<String>,

    /// Account whose projects are shown
    #[arg(long, global = true, env = "SHOWCASE_ACCOUNT")]
    pub account: Option<String>,

    /// How long a fetched project list is reused, in seconds
    #[arg(long, global = true, env = "SHOWCASE_REVALIDATE_SECS", default_value_t = 3600)]
    pub revalidate_secs: u64,

    /// Fetch on every request and never reuse results (local development)
    #[arg(long, global = true, env = "SHOWCASE_FRESH")]
    pub fresh: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP endpoint (GET /api/projects?type=<view>)
    ///
    /// Example: project-showcase serve --port 8080
    Serve {
        /// Port to listen on
        #[arg(long, env = "SHOWCASE_PORT", default_value_t = 3000)]
        port: u16,
    },

    /// Print the projects in one view
    ///
    /// Example: project-showcase list sketches --json
    List {
        /// featured, now, creations, sketches, open-source, security or all
        #[arg(default_value = "featured")]
        view: String,

        /// Output results in JSON format instead of a table
        #[arg(long)]
        json: bool,
    },
}
