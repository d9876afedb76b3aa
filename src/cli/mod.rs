// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the waymark command-line interface.
//!
//! Five subcommands: `search` to query the catalogue, `list` to browse it,
//! `history` and `favorite` for the persisted preferences, and `inspect` for
//! catalogue statistics. The catalogue document and the preferences store
//! are plain JSON files so the same data can back a deployed directory and
//! a local shell session.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "waymark",
    about = "Searchable bookmark directory with fuzzy and pinyin matching",
    version
)]
pub struct Cli {
    /// Path to the catalogue JSON document
    #[arg(short, long, global = true, default_value = "navigation.json")]
    pub data: String,

    /// Path to the preferences store (history, favorites, theme)
    #[arg(long, global = true, default_value = "waymark-prefs.json")]
    pub state: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the catalogue and record the query in history
    Search {
        /// Free-text query (fuzzy and pinyin matched)
        query: String,

        /// Maximum number of results to print
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// List visible categories and their links
    List {
        /// Restrict to a single category id
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show or edit the persisted search history
    History {
        /// Remove one term
        #[arg(long, value_name = "TERM", conflicts_with = "clear")]
        remove: Option<String>,

        /// Drop the entire history
        #[arg(long)]
        clear: bool,
    },

    /// Toggle or list favorite links
    Favorite {
        /// Link id to toggle; omit to list current favorites
        #[arg(long, value_name = "LINK_ID")]
        toggle: Option<String>,
    },

    /// Catalogue statistics
    Inspect,
}
