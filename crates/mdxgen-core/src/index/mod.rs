//! The content indexing & aggregation core.
//!
//! Four derived, queryable indices over one unordered stream of parsed
//! posts: a bounded recent-posts selector ([`topk`]), a hierarchical
//! category tree with multi-level pagination ([`category`]), a year/month
//! archive ([`archive`]), and a combinatorial tag-navigation graph
//! ([`tag`]). [`paginate`] holds the pagination and merge utilities they
//! share.
//!
//! None of these structures perform I/O; they are plain values owned by the
//! content pass and fed one post at a time.

/// Chronological year/month archive with pagination.
pub mod archive;
/// Category tree with aggregated, paginated feeds.
pub mod category;
/// Fixed-size pagination, stable merge, binary insertion.
pub mod paginate;
/// Tag buckets and the canonical-key tag graph.
pub mod tag;
/// Bounded top-K selection.
pub mod topk;

pub use archive::{Archive, ArchiveMonth, ArchiveYearList, ArchiveYearSummary};
pub use category::{Category, CategorySummary};
pub use paginate::{PageMap, Pages};
pub use tag::{TagCount, TagIndex, TagNode};
pub use topk::TopK;
