//! Category tree mirroring the source directory structure.
//!
//! Each node corresponds to one directory under the traversal root and owns
//! the posts filed directly in it, kept sorted descending by `updated`.
//! Pagination aggregates every node's subtree into a single correctly-ordered
//! feed per directory level without re-sorting: child feeds are already
//! sorted, so a stable merge is enough.
//!
//! A node's `total` is the recursive markdown-file count the traversal saw,
//! taken once while walking. It is independent of how many of those files
//! actually parsed into posts, and the two can diverge (a skipped README, a
//! malformed file); the count is a snapshot, never re-derived.

use crate::index::paginate::{PageMap, insert_sorted, merge, paginate_into};
use crate::types::PostLike;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Feed order shared by every category feed: most recently updated first.
pub fn by_updated_desc<P: PostLike>(a: &P, b: &P) -> Ordering {
    b.updated().cmp(&a.updated())
}

/// One directory's node in the category tree.
///
/// `children` keeps discovery order; `child_index` maps child key to its
/// position so path resolution stays O(1) per segment on wide trees.
#[derive(Debug, Clone, Serialize)]
pub struct Category<P> {
    pub key: String,
    pub title: String,
    pub total: usize,
    pub children: Vec<Category<P>>,
    pub posts: Vec<P>,
    #[serde(skip)]
    child_index: HashMap<String, usize>,
}

/// The category tree with post payloads stripped, for listing endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct CategorySummary {
    pub key: String,
    pub title: String,
    pub total: usize,
    pub children: Vec<CategorySummary>,
}

impl<P> Default for Category<P> {
    fn default() -> Self {
        Self::root()
    }
}

impl<P> Category<P> {
    /// The unnamed root above every top-level category.
    #[must_use]
    pub fn root() -> Self {
        Self::new("", 0)
    }

    fn new(key: &str, total: usize) -> Self {
        Self {
            key: key.to_string(),
            title: key.to_string(),
            total,
            children: Vec::new(),
            posts: Vec::new(),
            child_index: HashMap::new(),
        }
    }

    /// Index of the child named `key`, creating it on first encounter.
    fn ensure_child(&mut self, key: &str) -> usize {
        if let Some(&idx) = self.child_index.get(key) {
            return idx;
        }

        let idx = self.children.len();
        self.children.push(Self::new(key, 0));
        self.child_index.insert(key.to_string(), idx);
        idx
    }

    /// Walk/create every segment except the last, returning the node that
    /// owns records whose path is `segments`.
    ///
    /// Passing a directory path finds the directory's parent (for node
    /// creation); passing a file path drops the filename segment and lands
    /// at the file's containing directory.
    pub fn resolve(&mut self, segments: &[String]) -> &mut Self {
        let mut node = self;
        let upper = segments.len().saturating_sub(1);
        for key in &segments[..upper] {
            let idx = node.ensure_child(key);
            node = &mut node.children[idx];
        }
        node
    }

    /// Record the directory at `segments` with its recursive markdown count.
    ///
    /// The traversal only calls this for directories that hold at least one
    /// markdown file somewhere in their subtree; recursively empty
    /// directories never enter the tree.
    pub fn add_category(&mut self, segments: &[String], total: usize) {
        let Some(key) = segments.last() else {
            return;
        };

        let parent = self.resolve(segments);
        let idx = parent.ensure_child(key);
        parent.children[idx].total = total;
    }

    /// Number of direct children.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Strip post payloads from the whole subtree.
    #[must_use]
    pub fn without_posts(&self) -> CategorySummary {
        CategorySummary {
            key: self.key.clone(),
            title: self.title.clone(),
            total: self.total,
            children: self.children.iter().map(Self::without_posts).collect(),
        }
    }
}

impl<P: PostLike> Category<P> {
    /// File a post under the node owning `segments` (the post's directory
    /// path plus filename), keeping that node's feed sorted descending by
    /// `updated`.
    pub fn attach(&mut self, segments: &[String], post: P) {
        let node = self.resolve(segments);
        insert_sorted(&mut node.posts, post, by_updated_desc);
    }
}

impl<P: PostLike + Clone> Category<P> {
    /// Paginate every directory level of the tree.
    ///
    /// Post-order traversal: a leaf's own feed is paginated under its
    /// slash-joined scope; an interior node first folds each child's
    /// (already aggregated) feed into its own via the stable merge, then
    /// paginates the aggregate under its scope. The root's scope is empty
    /// and is never paginated.
    ///
    /// Aggregation happens in place: after this call every node's `posts`
    /// holds its subtree's merged feed.
    pub fn paginate(&mut self, size: usize) -> PageMap<P> {
        let mut map = PageMap::new();
        paginate_node(self, size, "", &mut map);
        map
    }
}

fn paginate_node<P: PostLike + Clone>(
    node: &mut Category<P>,
    size: usize,
    scope: &str,
    map: &mut PageMap<P>,
) {
    let mut aggregated = std::mem::take(&mut node.posts);

    for child in &mut node.children {
        let child_scope = format!("{scope}/{}", child.key);
        paginate_node(child, size, &child_scope, map);

        aggregated = merge(aggregated, child.posts.clone(), by_updated_desc);
        if child.children.is_empty() {
            paginate_into(map, &child_scope, &child.posts, size);
        }
    }

    node.posts = aggregated;
    if !scope.is_empty() && !node.children.is_empty() {
        paginate_into(map, scope, &node.posts, size);
    }
}
