//! JSON content API generation.
//!
//! Runs the content pass, then serializes every exposed view under the
//! output root: recent posts, the posts-stripped category tree and archive,
//! per-scope feed pages, the tag list, and the tag graph. Nothing is
//! written until the pass has completed, so an aborted run leaves no
//! partial API behind.

use super::{scoped_path, write_json};
use crate::config::Config;
use crate::content::{ContentIndexer, SiteIndex};
use crate::index::PageMap;
use crate::types::PostPreview;
use crate::Result;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct PageBody<'a> {
    posts: &'a [PostPreview],
    pages: usize,
}

/// Generate the JSON content API for the tree at `root` under `output`.
pub fn generate_api(root: &Path, output: &Path, config: Config) -> Result<()> {
    let page_size = config.page_size;
    let site = ContentIndexer::new(root, config)?.run()?;
    serialize(site, output, page_size)
}

fn serialize(site: SiteIndex, output: &Path, page_size: usize) -> Result<()> {
    let SiteIndex {
        recent,
        mut categories,
        archive,
        tags,
        posts: _,
    } = site;

    write_json(&output.join("content/recent-posts"), &recent)?;

    write_json(&output.join("category/list"), &categories.without_posts())?;
    serialize_pagination(&output.join("category"), &categories.paginate(page_size))?;

    write_json(&output.join("archive/list"), &archive.without_posts())?;
    serialize_pagination(&output.join("archive"), &archive.paginate(page_size))?;

    write_json(&output.join("tag/list"), &tags.list())?;
    write_json(&output.join("tag/graph"), &tags.graph())?;

    Ok(())
}

/// One file per page, 1-indexed inside the scope, each carrying the page
/// count so clients can render pagination controls without a second fetch.
fn serialize_pagination(dir: &Path, map: &PageMap<PostPreview>) -> Result<()> {
    for (scope, pages) in map {
        for (i, posts) in pages.iter().enumerate() {
            let path = scoped_path(dir, scope).join((i + 1).to_string());
            write_json(&path, &PageBody {
                posts,
                pages: pages.len(),
            })?;
        }
    }
    Ok(())
}
