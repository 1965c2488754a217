//! The content pass: one synchronous fold over the source tree.
//!
//! Traversal yields directories and markdown files in a deterministic
//! order; every parsed post is fed exactly once into the recent-posts
//! selector, the category tree, the archive, and the tag buckets. The pass
//! is strictly single-threaded: binary insertion and merge order depend on
//! a non-interleaved sequence of inserts, and nothing here suspends on I/O
//! beyond plain blocking reads.
//!
//! A file that fails to parse is logged and skipped; it must not disturb
//! the totals or pagination of the others. Partial indices from an aborted
//! run are discarded by the caller, never serialized.

use crate::config::Config;
use crate::index::{Archive, Category, TagIndex, TopK};
use crate::parser::MarkdownParser;
use crate::types::{Post, PostPreview};
use crate::walk;
use crate::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Every index over the corpus, ready for the serialization collaborator.
///
/// `recent` is already the ascending snapshot of the bounded selector;
/// `categories`, `archive`, and `tags` expose their lazy views
/// (`paginate`, `list`, `graph`, ...) on demand. `posts` keeps the full
/// records for page rendering.
pub struct SiteIndex {
    pub recent: Vec<PostPreview>,
    pub categories: Category<PostPreview>,
    pub archive: Archive<PostPreview>,
    pub tags: TagIndex<PostPreview>,
    pub posts: Vec<Post>,
}

/// Builds a [`SiteIndex`] from a source tree in one pass.
pub struct ContentIndexer {
    root: PathBuf,
    parser: MarkdownParser,
    config: Config,
}

impl ContentIndexer {
    /// Prepare an indexer over `root`.
    pub fn new(root: &Path, config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            root: root.to_path_buf(),
            parser: MarkdownParser::new()?,
            config,
        })
    }

    /// Walk the tree and fold every post into the indices.
    pub fn run(mut self) -> Result<SiteIndex> {
        // "More recently updated" ranks smaller, so the bounded selector
        // retains the most recent K.
        let mut recent: TopK<PostPreview> = TopK::new(
            Box::new(|a: &PostPreview, b: &PostPreview| b.updated.cmp(&a.updated)),
            self.config.recent_count,
        )?;
        let mut categories: Category<PostPreview> = Category::root();
        let mut archive: Archive<PostPreview> = Archive::new();
        let mut tags: TagIndex<PostPreview> = TagIndex::new();
        let mut posts: Vec<Post> = Vec::new();

        info!("walking from: {}", self.root.display());

        for entry in walk::walk(&self.root) {
            let path = entry.path();

            if entry.file_type().is_dir() {
                if walk::is_dir_empty(path) {
                    debug!("skipping empty directory: {}", path.display());
                    continue;
                }
                let segments = walk::relative_segments(&self.root, path);
                categories.add_category(&segments, walk::count_markdowns(path));
                continue;
            }

            if !walk::is_markdown(path) {
                continue;
            }
            if path.file_name().is_some_and(|name| name == "README.md") {
                continue;
            }

            let post = match self
                .parser
                .parse_post(&self.root, path, &self.config.author)
            {
                Ok(post) => post,
                Err(e) => {
                    warn!("skipping {}: {e}", path.display());
                    continue;
                },
            };

            let preview = post.preview();
            let segments = walk::relative_segments(&self.root, path);
            categories.attach(&segments, preview.clone());
            archive.add(preview.clone());
            recent.enqueue(preview.clone());
            for tag in &preview.tags {
                tags.add(tag, &preview);
            }
            posts.push(post);
        }

        info!(
            "indexed {} posts across {} years, {} tags",
            archive.total(),
            archive.years(),
            tags.names().len()
        );

        Ok(SiteIndex {
            recent: recent.to_vec(),
            categories,
            archive,
            tags,
            posts,
        })
    }
}
