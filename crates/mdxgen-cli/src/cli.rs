//! # CLI Structure and Argument Parsing
//!
//! This module defines the command-line interface for `mdxgen`, a migrator
//! for markdown blog content. The CLI is built using `clap` with derive
//! macros for automatic help generation and argument validation.
//!
//! ## Usage Patterns
//!
//! ```bash
//! # Generate MDX pages
//! mdxgen mdx --input blog --output site
//!
//! # Generate the JSON content API
//! mdxgen api -i blog -o api
//!
//! # Normalize front matter in place of a new tree
//! mdxgen fm -i blog -o normalized
//! ```
//!
//! Each subcommand defaults its output directory to its own name, so
//! `mdxgen mdx -i blog` writes under `./mdx`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure for the `mdxgen` command
#[derive(Parser, Clone, Debug)]
#[command(name = "mdxgen")]
#[command(version)]
#[command(about = "mdxgen - migrate markdown blog content", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress informational messages (only show errors)
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Path to configuration file (defaults to mdxgen.toml next to the
    /// input directory). Also via `MDXGEN_CONFIG`.
    #[arg(long, global = true, value_name = "FILE", env = "MDXGEN_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available subcommands for the `mdxgen` CLI
///
/// Each variant is one migration target:
///
/// - [`Mdx`](Commands::Mdx): MDX pages plus navigation sidecars
/// - [`Api`](Commands::Api): JSON content API
/// - [`Fm`](Commands::Fm): front-matter normalization
#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Migrate markdown posts to an MDX page tree
    Mdx {
        /// Input directory containing blog content
        #[arg(short, long, value_name = "DIR")]
        input: PathBuf,

        /// Output directory for processed content [default: mdx]
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Generate a JSON content API from markdown posts
    Api {
        /// Input directory containing blog content
        #[arg(short, long, value_name = "DIR")]
        input: PathBuf,

        /// Output directory for processed content [default: api]
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Rewrite markdown posts with normalized front matter
    Fm {
        /// Input directory containing blog content
        #[arg(short, long, value_name = "DIR")]
        input: PathBuf,

        /// Output directory for processed content [default: fm]
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },
}
