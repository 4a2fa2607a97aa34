// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the docmatch command-line interface.
//!
//! Three subcommands: `score` ranks every document, `filter` keeps only the
//! documents that match every part of the query, and `explain` prints the parsed
//! query tree without touching any documents.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use docmatch::Mode;

#[derive(Parser)]
#[command(
    name = "docmatch",
    about = "Score JSON documents against structured queries",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score every document and print the results
    Score {
        /// Query file (JSON, mapping or pair syntax)
        #[arg(short, long)]
        query: PathBuf,

        /// Documents: a JSON array or JSON Lines, `-` for stdin
        #[arg(short, long)]
        docs: PathBuf,

        /// How top-level query parts combine
        #[arg(short, long, value_enum, default_value_t = ModeArg::Any)]
        mode: ModeArg,

        /// Maximum number of results to print
        #[arg(short, long)]
        limit: Option<usize>,

        /// Highest score first (ties keep input order)
        #[arg(short, long)]
        sort: bool,

        /// Print annotated documents as JSON Lines
        #[arg(long)]
        json: bool,
    },

    /// Keep documents that match every top-level part of the query
    Filter {
        /// Query file (JSON, mapping or pair syntax)
        #[arg(short, long)]
        query: PathBuf,

        /// Documents: a JSON array or JSON Lines, `-` for stdin
        #[arg(short, long)]
        docs: PathBuf,

        /// Print annotated documents as JSON Lines
        #[arg(long)]
        json: bool,
    },

    /// Print the parsed query tree
    Explain {
        /// Query file (JSON, mapping or pair syntax)
        #[arg(short, long)]
        query: PathBuf,
    },
}

/// `--mode`: `any` ranks (OR), `all` filters (AND).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Any,
    All,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Any => Mode::Any,
            ModeArg::All => Mode::All,
        }
    }
}
