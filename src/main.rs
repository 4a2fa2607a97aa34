// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use docmatch::{filter_all, load_documents, score_with, sort_by_score, Query, Scored};

mod cli;
use cli::display;
use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", display::themed(display::RED, &[display::BOLD], "error:"), e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Score {
            query,
            docs,
            mode,
            limit,
            sort,
            json,
        } => {
            let query = read_query(&query)?;
            let documents = read_documents(&docs)?;
            let mut scored = score_with(&documents, &query, mode.into())?;
            if sort {
                sort_by_score(&mut scored);
            }
            if let Some(limit) = limit {
                scored.truncate(limit);
            }
            emit("score", &scored, documents.len(), json)
        }
        Commands::Filter { query, docs, json } => {
            let query = read_query(&query)?;
            let documents = read_documents(&docs)?;
            let kept = filter_all(&documents, &query)?;
            emit("filter", &kept, documents.len(), json)
        }
        Commands::Explain { query } => {
            let query = read_query(&query)?;
            display::section_top("query");
            for line in query.to_string().lines() {
                display::row(&format!(" {}", line));
            }
            display::section_bot();
            Ok(())
        }
    }
}

fn read_query(path: &Path) -> Result<Query> {
    let text = fs::read_to_string(path).with_context(|| format!("failed to read query {}", path.display()))?;
    text.parse::<Query>()
        .with_context(|| format!("invalid query in {}", path.display()))
}

fn read_documents(path: &Path) -> Result<Vec<serde_json::Value>> {
    load_documents(path).with_context(|| format!("failed to load documents from {}", path.display()))
}

fn emit(title: &str, scored: &[Scored<'_>], total: usize, json: bool) -> Result<()> {
    if !json {
        display::print_results(title, scored, total);
        return Ok(());
    }

    let mut out = BufWriter::new(io::stdout().lock());
    for entry in scored {
        serde_json::to_writer(&mut out, &entry.annotated())?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}
