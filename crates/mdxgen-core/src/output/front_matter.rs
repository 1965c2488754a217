//! Front-matter rewrite of markdown sources.
//!
//! Re-emits every markdown file with a normalized `---` fenced metadata
//! block (resolved dates, filled-in author) followed by the original body,
//! flat under the output root. Useful when migrating a tree whose posts
//! carry ad-hoc or partial metadata into a generator that expects uniform
//! front matter.

use super::write_text;
use crate::Result;
use crate::config::Config;
use crate::parser::MarkdownParser;
use crate::types::Post;
use crate::walk;
use chrono::DateTime;
use std::path::Path;
use tracing::warn;

fn ymd(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .unwrap_or_default()
        .format("%Y-%m-%d")
        .to_string()
}

fn render_front_matter(post: &Post) -> String {
    let mut fm = String::new();
    fm.push_str("---\n");
    fm.push_str(&format!("title: {}\n", post.title));
    fm.push_str(&format!("description: {}\n", post.description));
    fm.push_str(&format!("created: {}\n", ymd(post.created)));
    fm.push_str(&format!("updated: {}\n", ymd(post.updated)));
    fm.push_str(&format!("author: {}\n", post.author));
    fm.push_str(&format!("tags: [{}]\n", post.tags.join(", ")));
    fm.push_str("---\n\n");
    fm.push_str(post.content.trim_start_matches('\n'));
    fm
}

/// Rewrite every markdown file under `root` into `output/<stem>.md` with
/// normalized front matter.
///
/// `README.md` files are skipped, and a file that fails to parse is logged
/// and skipped without disturbing the rest.
pub fn generate_fm(root: &Path, output: &Path, config: Config) -> Result<()> {
    config.validate()?;
    let mut parser = MarkdownParser::new()?;

    for entry in walk::walk(root) {
        let path = entry.path();
        if !entry.file_type().is_file() || !walk::is_markdown(path) {
            continue;
        }
        if path.file_name().is_some_and(|name| name == "README.md") {
            continue;
        }

        let post = match parser.parse_post(root, path, &config.author) {
            Ok(post) => post,
            Err(e) => {
                warn!("skipping {}: {e}", path.display());
                continue;
            },
        };

        let stem = path
            .file_stem()
            .map_or_else(String::new, |s| s.to_string_lossy().into_owned());
        write_text(&output.join(format!("{stem}.md")), &render_front_matter(&post))?;
    }

    Ok(())
}
