// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the book-search command-line interface.
//!
//! Two subcommands over a search-data file: `search` runs a query through the
//! same index the browser widget builds, `inspect` summarizes and validates
//! the file.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "book-search",
    about = "Query and inspect static-site search-data files",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a search-data JSON file and display ranked results
    Search {
        /// Path to the search-data JSON file
        file: PathBuf,

        /// Search query
        query: String,

        /// Maximum number of results to return
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Index options JSON file (the page's search config)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the result list as the widget renders it
        #[arg(long)]
        html: bool,
    },

    /// Summarize a search-data JSON file and check it builds
    Inspect {
        /// Path to the search-data JSON file
        file: PathBuf,
    },
}
