// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use book_search::config::load_index_options;
use book_search::{parse_documents, Document, DocumentIndex, IndexOptions, ResultEntry};
use clap::Parser;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Instant;

mod cli;
use cli::display::{
    dim, error_label, link, pad_right, row, score_value, section_bot, section_top, timing_ms,
    truncate,
};
use cli::{Cli, Commands};

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Search {
            file,
            query,
            limit,
            config,
            html,
        } => run_search(&file, &query, limit, config.as_deref(), html),
        Commands::Inspect { file } => run_inspect(&file),
    };

    if let Err(e) = outcome {
        eprintln!("{} {}", error_label("error:"), e);
        std::process::exit(1);
    }
}

fn load_documents(file: &Path) -> book_search::Result<Vec<Document>> {
    let raw = fs::read_to_string(file)?;
    let documents = parse_documents(&raw)?;
    log::debug!("loaded {} documents from {}", documents.len(), file.display());
    Ok(documents)
}

fn run_search(
    file: &Path,
    query: &str,
    limit: usize,
    config: Option<&Path>,
    html: bool,
) -> book_search::Result<()> {
    let options = match config {
        Some(path) => load_index_options(path)?,
        None => IndexOptions::default(),
    };
    if !options.extra.is_empty() {
        let keys: Vec<&str> = options.extra.keys().map(String::as_str).collect();
        log::debug!("passing through unrecognized options: {}", keys.join(", "));
    }
    let index = DocumentIndex::build(load_documents(file)?, options.with_widget_layout())?;

    let start = Instant::now();
    let hits = index.search(query, limit);
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    if html {
        for hit in hits {
            println!("{}", ResultEntry::from(hit).to_html());
        }
        return Ok(());
    }

    section_top(&format!("\"{}\"", truncate(query, 40)));
    if hits.is_empty() {
        row(&format!(" {}", dim("no results")));
    }
    for (rank, hit) in hits.iter().enumerate() {
        row(&format!(
            " {:>2}. {} {}",
            rank + 1,
            score_value(hit.score),
            pad_right(&truncate(&hit.title, 40), 40)
        ));
        row(&format!(
            "              {} {}",
            link(&truncate(&hit.href, 40)),
            dim(&truncate(&hit.section, 20))
        ));
    }
    row(&format!(
        " {} of {} documents in {}",
        hits.len(),
        index.len(),
        timing_ms(elapsed_ms)
    ));
    section_bot();
    Ok(())
}

fn run_inspect(file: &Path) -> book_search::Result<()> {
    let documents = load_documents(file)?;

    let mut sections: BTreeMap<String, usize> = BTreeMap::new();
    let mut empty_content = 0;
    for document in &documents {
        *sections.entry(document.section.clone()).or_default() += 1;
        if document.content.trim().is_empty() {
            empty_content += 1;
        }
    }

    section_top(&truncate(&file.display().to_string(), 60));
    row(&format!(" documents:      {}", documents.len()));
    row(&format!(" empty content:  {}", empty_content));
    row(&format!(" sections:       {}", sections.len()));
    for (section, count) in &sections {
        let label = if section.is_empty() {
            "(none)".to_string()
        } else {
            truncate(section, 40)
        };
        row(&format!("   {} {}", pad_right(&label, 40), count));
    }
    section_bot();

    // Same build the widget performs: surfaces duplicate ids
    let index = DocumentIndex::build(documents, IndexOptions::default().with_widget_layout())?;
    log::info!("index builds cleanly ({} documents)", index.len());
    Ok(())
}
