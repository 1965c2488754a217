//! Output collaborators: everything that turns the in-memory indices into
//! files on disk.
//!
//! Three generators share the same content pass and differ only in what
//! they serialize: a JSON content API ([`api`]), a tree of MDX pages
//! ([`mdx`]), and a front-matter rewrite of the source files
//! ([`front_matter`]). [`render`] holds the markdown/MDX fragment builders
//! they share.

/// JSON content API writer.
pub mod api;
/// Front-matter rewrite of markdown sources.
pub mod front_matter;
/// MDX page generation.
pub mod mdx;
/// Markdown/MDX fragment rendering.
pub mod render;

use crate::Result;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// Serialize `data` as pretty JSON at `path`, creating parent directories.
pub(crate) fn write_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    write_text(path, &json)
}

/// Write `content` at `path`, creating parent directories.
pub(crate) fn write_text(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    info!("write file into: {}", path.display());
    fs::write(path, content)?;
    Ok(())
}

/// Join a scope label (possibly starting with `/`) under `dir` without
/// letting the leading slash re-root the path.
pub(crate) fn scoped_path(dir: &Path, scope: &str) -> std::path::PathBuf {
    dir.join(scope.trim_start_matches('/'))
}
