//! Markdown collaborator: front matter, dates, ids, and TOC extraction.
//!
//! This module turns a markdown file into a [`Post`]. The indices never see
//! any of this; they consume the finished record. Parsing is deliberately
//! forgiving: a missing title falls back to the file stem, missing dates
//! fall back to each other and then to "now", and a file that fails here is
//! logged and skipped by the content pass rather than aborting the run.

use crate::types::{Post, TocItem};
use crate::walk::relative_dir_segments;
use crate::{Error, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;
use tree_sitter::{Node, Parser, TreeCursor};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FrontMatter {
    title: Option<String>,
    description: Option<String>,
    created: Option<String>,
    updated: Option<String>,
    date: Option<String>,
    author: Option<String>,
    tags: Option<Vec<String>>,
}

/// Markdown parser wrapping a tree-sitter instance.
///
/// The instance is reused across files; tree-sitter parsers are cheap to
/// keep but not cheap to construct.
pub struct MarkdownParser {
    parser: Parser,
}

impl MarkdownParser {
    /// Create a parser for the markdown grammar.
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_md::LANGUAGE.into())
            .map_err(|e| Error::Parse(format!("Failed to set language: {e}")))?;

        Ok(Self { parser })
    }

    /// Parse the markdown file at `path` into a [`Post`].
    ///
    /// The post id is the hex SHA-256 of the raw file contents, so it is
    /// stable across runs and changes only when the content does. The
    /// category path is the file's directory relative to `root`.
    pub fn parse_post(&mut self, root: &Path, path: &Path, default_author: &str) -> Result<Post> {
        let markdown = fs::read_to_string(path)?;

        let mut hasher = Sha256::new();
        hasher.update(markdown.as_bytes());
        let id = hex_digest(&hasher.finalize());

        let (front, body) = split_front_matter(&markdown)
            .map_or((None, markdown.as_str()), |(yaml, body)| (Some(yaml), body));

        let meta: FrontMatter = match front {
            Some(yaml) => serde_yaml::from_str(yaml).map_err(|e| {
                Error::Parse(format!("{}: invalid front matter: {e}", path.display()))
            })?,
            None => FrontMatter::default(),
        };

        let title = meta.title.unwrap_or_else(|| {
            path.file_stem()
                .map_or_else(String::new, |s| s.to_string_lossy().into_owned())
        });

        // `date` is the legacy single-date key; explicit created/updated win.
        let created = meta.created.as_deref().or(meta.date.as_deref());
        let updated = meta.updated.as_deref().or(meta.date.as_deref());

        let toc = self.toc(body)?;

        Ok(Post {
            id,
            title,
            description: meta.description.unwrap_or_default(),
            created: resolve_date(created.or(updated)),
            updated: resolve_date(updated.or(created)),
            content: body.to_string(),
            author: meta
                .author
                .unwrap_or_else(|| default_author.to_string()),
            tags: meta.tags.unwrap_or_default(),
            category: relative_dir_segments(root, path),
            related: Vec::new(),
            toc,
        })
    }

    /// Extract a nested table of contents from the heading structure.
    ///
    /// The returned root item has empty `title`/`url`; each entry's `url` is
    /// a `#`-anchor of the slugified heading text. A deeper heading with no
    /// parent at the level above is dropped, matching how renderers treat
    /// skipped levels.
    pub fn toc(&mut self, text: &str) -> Result<TocItem> {
        let tree = self
            .parser
            .parse(text, None)
            .ok_or_else(|| Error::Parse("Failed to parse markdown".into()))?;

        let mut headings = Vec::new();
        let mut cursor = tree.root_node().walk();
        collect_headings(&mut cursor, text, &mut headings);

        let mut root = TocItem::default();
        let mut stack: Vec<usize> = Vec::new();
        for (level, title) in headings {
            while stack.last().is_some_and(|&l| l >= level) {
                stack.pop();
            }
            stack.push(level);

            let item = TocItem {
                url: format!("#{}", slugify(&title)),
                title,
                items: Vec::new(),
            };
            add_at_depth(&mut root.items, item, stack.len());
        }

        Ok(root)
    }
}

fn collect_headings(cursor: &mut TreeCursor, text: &str, out: &mut Vec<(usize, String)>) {
    loop {
        let node = cursor.node();
        if node.kind() == "atx_heading" {
            out.push((heading_level(node), heading_text(node, text)));
        }

        if cursor.goto_first_child() {
            continue;
        }
        if cursor.goto_next_sibling() {
            continue;
        }
        loop {
            if !cursor.goto_parent() {
                return;
            }
            if cursor.goto_next_sibling() {
                break;
            }
        }
    }
}

fn heading_level(node: Node) -> usize {
    for child in node.children(&mut node.walk()) {
        match child.kind() {
            "atx_h1_marker" => return 1,
            "atx_h2_marker" => return 2,
            "atx_h3_marker" => return 3,
            "atx_h4_marker" => return 4,
            "atx_h5_marker" => return 5,
            "atx_h6_marker" => return 6,
            _ => {},
        }
    }
    1
}

fn heading_text(node: Node, text: &str) -> String {
    for child in node.children(&mut node.walk()) {
        if child.kind().contains("heading") && child.kind().contains("content") {
            return text[child.byte_range()].trim().to_string();
        }
    }

    text[node.byte_range()]
        .trim_start_matches('#')
        .trim()
        .to_string()
}

fn add_at_depth(toc: &mut Vec<TocItem>, item: TocItem, depth: usize) {
    if depth == 1 {
        toc.push(item);
    } else if let Some(parent) = toc.last_mut() {
        add_at_depth(&mut parent.items, item, depth - 1);
    }
}

/// Split a `---` fenced front matter block from the body.
///
/// Returns `None` when the file doesn't open with a fence; the whole file is
/// then treated as body.
pub fn split_front_matter(content: &str) -> Option<(&str, &str)> {
    let rest = content.strip_prefix("---")?;
    let rest = rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))?;

    let end = rest.find("\n---")?;
    let yaml = &rest[..end];
    let after = &rest[end + "\n---".len()..];
    let body = after.find('\n').map_or("", |nl| &after[nl + 1..]);

    Some((yaml, body))
}

/// Resolve a front matter date to epoch milliseconds.
///
/// Accepts `YYYY-MM-DD` and RFC 3339; anything absent or unparsable falls
/// back to "now" rather than failing the file.
#[must_use]
pub fn resolve_date(value: Option<&str>) -> i64 {
    value
        .and_then(parse_date)
        .unwrap_or_else(|| Utc::now().timestamp_millis())
}

fn parse_date(value: &str) -> Option<i64> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.timestamp_millis());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis())
}

/// Anchor slug of a heading: lowercased, runs of non-alphanumerics collapsed
/// to single hyphens.
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;
    for c in text.chars() {
        if c.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

fn hex_digest(bytes: &[u8]) -> String {
    use std::fmt::Write;

    let mut hex = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        let _ = write!(hex, "{byte:02x}");
    }
    hex
}
