//! # mdxgen-core
//!
//! Core functionality for mdxgen - a migrator that turns a directory tree of
//! markdown blog posts into derived publishing artifacts: MDX pages,
//! front-matter files, or a JSON content API.
//!
//! ## Architecture
//!
//! The crate is organized around several key components:
//!
//! - **Indexing core**: the four derived indices over the post corpus - a
//!   bounded recent-posts selector, a category tree with multi-level
//!   pagination, a year/month archive, and a tag-combination graph
//! - **Collaborators**: markdown parsing (front matter, dates, TOC),
//!   filesystem traversal, and the output writers the indices feed
//! - **Configuration**: page size, recent-feed capacity, default author
//! - **Error Handling**: a categorized error type with a `Result` alias
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mdxgen_core::{Config, generate_api};
//! use std::path::Path;
//!
//! // Index a blog tree and write its JSON content API.
//! generate_api(Path::new("blog"), Path::new("api"), Config::default())?;
//! # Ok::<(), mdxgen_core::Error>(())
//! ```
//!
//! ## The content pass
//!
//! All three generators share one synchronous pass over the source tree:
//! every parsed post is fed exactly once into each index, and only after
//! the pass completes are the lazy views (pagination, archive listing, tag
//! graph) computed and serialized. The indices themselves never perform
//! I/O; a file that fails to parse is logged and skipped without
//! disturbing the others.

/// Pipeline configuration loaded from `mdxgen.toml`
pub mod config;
/// The content pass feeding every index
pub mod content;
/// Error types and result aliases
pub mod error;
/// The content indexing & aggregation core
pub mod index;
/// Output collaborators: JSON API, MDX pages, front-matter rewrite
pub mod output;
/// Markdown parsing: front matter, dates, ids, TOC
pub mod parser;
/// Core data types: posts, previews, TOC items
pub mod types;
/// Filesystem traversal helpers
pub mod walk;

// Re-export commonly used types
pub use config::Config;
pub use content::{ContentIndexer, SiteIndex};
pub use error::{Error, Result};
pub use index::{Archive, Category, PageMap, TagIndex, TopK};
pub use output::api::generate_api;
pub use output::front_matter::generate_fm;
pub use output::mdx::generate_mdx;
pub use parser::MarkdownParser;
pub use types::{DocNav, Post, PostLike, PostPreview, TocItem};
