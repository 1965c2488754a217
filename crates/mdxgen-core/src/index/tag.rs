//! Tag map and combinatorial tag-navigation graph.
//!
//! [`TagIndex`] accumulates a bucket of posts per distinct tag during the
//! content pass. [`TagIndex::graph`] then derives every tag *combination*
//! that actually co-occurs in the corpus: a node per combination, holding
//! the posts matching every tag in it and the tags still available to
//! narrow further.
//!
//! Nodes are keyed by the combination's canonical key (tags sorted
//! lexicographically, inner spaces hyphenated, hyphen-joined). The
//! breadth-first expansion memoizes on that key, so no combination is ever
//! computed twice and the graph is bounded by the co-occurring subsets of
//! the vocabulary. That bound is exponential in the number of distinct tags
//! in the worst case, which is acceptable for a personal blog's vocabulary.

use crate::types::PostLike;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};

/// A tag name with the number of posts carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub name: String,
    pub count: usize,
}

/// One tag-combination node: the tags that can still narrow the selection,
/// and the posts matching the whole combination.
#[derive(Debug, Clone, Serialize)]
pub struct TagNode<P> {
    pub tags: Vec<String>,
    pub posts: Vec<P>,
}

/// Per-tag post buckets, insertion-ordered, de-duplicated by post id.
#[derive(Debug, Clone)]
pub struct TagIndex<P> {
    names: Vec<String>,
    map: HashMap<String, Vec<P>>,
}

/// Canonical identity of a tag combination: sorted lexicographically, each
/// tag's internal spaces replaced with hyphens, joined by hyphens.
#[must_use]
pub fn canonical_key(tags: &[String]) -> String {
    let mut sorted: Vec<&String> = tags.iter().collect();
    sorted.sort();
    sorted
        .iter()
        .map(|t| t.replace(' ', "-"))
        .collect::<Vec<_>>()
        .join("-")
}

impl<P> Default for TagIndex<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> TagIndex<P> {
    /// An empty index.
    #[must_use]
    pub fn new() -> Self {
        Self {
            names: Vec::new(),
            map: HashMap::new(),
        }
    }

    /// Distinct tag names in first-seen order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Whether no tags have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Posts carrying `tag`, in insertion order.
    #[must_use]
    pub fn get(&self, tag: &str) -> &[P] {
        self.map.get(tag).map_or(&[], Vec::as_slice)
    }
}

impl<P: PostLike + Clone> TagIndex<P> {
    /// Record that `post` carries `tag`.
    ///
    /// A post added twice to the same bucket (same id) is silently
    /// de-duplicated rather than treated as an error.
    pub fn add(&mut self, tag: &str, post: &P) {
        let bucket = self.map.entry(tag.to_string()).or_insert_with(|| {
            self.names.push(tag.to_string());
            Vec::new()
        });

        if bucket.iter().any(|existing| existing.id() == post.id()) {
            return;
        }
        bucket.push(post.clone());
    }

    /// `{name, count}` per distinct tag, in first-seen order.
    #[must_use]
    pub fn list(&self) -> Vec<TagCount> {
        self.names
            .iter()
            .map(|name| TagCount {
                name: name.clone(),
                count: self.map.get(name).map_or(0, Vec::len),
            })
            .collect()
    }

    /// Derive the full tag-combination graph by breadth-first expansion.
    ///
    /// Seeds one node per distinct tag, then repeatedly extends each
    /// combination by one of its further tags. A combination whose
    /// canonical key already has a node is skipped, which both prevents
    /// recomputation and guarantees termination.
    #[must_use]
    pub fn graph(&self) -> BTreeMap<String, TagNode<P>> {
        let mut graph = BTreeMap::new();
        let mut queue: VecDeque<Vec<String>> = VecDeque::new();

        for name in &self.names {
            let posts = self.get(name).to_vec();
            let path = vec![name.clone()];
            let further = further_tags(&posts, &path);

            if !further.is_empty() {
                queue.push_back(path.clone());
            }
            graph.insert(canonical_key(&path), TagNode {
                tags: further,
                posts,
            });
        }

        while let Some(path) = queue.pop_front() {
            let Some(node) = graph.get(&canonical_key(&path)) else {
                continue;
            };

            for tag in node.tags.clone() {
                if path.contains(&tag) {
                    continue;
                }

                let mut candidate = path.clone();
                candidate.push(tag);
                candidate.sort();

                let key = canonical_key(&candidate);
                if graph.contains_key(&key) {
                    continue;
                }

                // Intersect starting from the first tag's bucket; the rest
                // of the combination filters it down.
                let posts: Vec<P> = self
                    .get(&candidate[0])
                    .iter()
                    .filter(|post| {
                        candidate[1..]
                            .iter()
                            .all(|t| post.tags().iter().any(|pt| pt == t))
                    })
                    .cloned()
                    .collect();

                let further = further_tags(&posts, &candidate);
                if !further.is_empty() {
                    queue.push_back(candidate);
                }
                graph.insert(key, TagNode {
                    tags: further,
                    posts,
                });
            }
        }

        graph
    }
}

/// Sorted union of the tags appearing on `posts`, minus the ones already in
/// `path`.
fn further_tags<P: PostLike>(posts: &[P], path: &[String]) -> Vec<String> {
    let mut further: BTreeSet<&String> = posts.iter().flat_map(PostLike::tags).collect();
    for tag in path {
        further.remove(tag);
    }
    further.into_iter().cloned().collect()
}
