// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the sokoni command-line interface.
//!
//! Three subcommands: `search` to rank a catalog export against a query,
//! `list` to show the category listing the storefront falls back to when
//! nothing is being searched, and `explain` to break one product's score down
//! rule by rule.

pub mod display;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "sokoni",
    about = "Fuzzy product search over a storefront catalog export",
    version
)]
pub struct Cli {
    /// JSON config file (scoring weights, page sizes, default catalog)
    #[arg(long, global = true, env = "SOKONI_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where to read products from.
#[derive(Args, Debug, Clone)]
pub struct CatalogArgs {
    /// Catalog export (JSON array of products, or {"products": [...]})
    #[arg(short, long, env = "SOKONI_CATALOG")]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank catalog products against a query
    Search {
        /// Search query
        query: String,

        #[command(flatten)]
        catalog: CatalogArgs,

        /// Number of results to show (defaults to one search page)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the catalog listing, newest first
    List {
        #[command(flatten)]
        catalog: CatalogArgs,

        /// Category to show ("all" for everything)
        #[arg(long, default_value = "all")]
        category: String,

        /// Number of products to show (defaults to one grid page)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print products as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Break down how one product scores for a query
    Explain {
        /// Search query
        query: String,

        /// Product id to explain
        product_id: String,

        #[command(flatten)]
        catalog: CatalogArgs,
    },
}
