//! Core data types shared by the indices and the output writers.

use serde::{Deserialize, Serialize};

/// The minimal view of a post that the indices depend on.
///
/// The category tree, archive, tag graph, and recent-posts selector only
/// touch these fields. Rendering-oriented data (`content`, `toc`, ...) lives
/// on [`Post`] and never enters the index structures.
pub trait PostLike {
    /// Stable content hash identifying the post.
    fn id(&self) -> &str;
    /// Post title from the front matter.
    fn title(&self) -> &str;
    /// Creation time, epoch milliseconds.
    fn created(&self) -> i64;
    /// Last-update time, epoch milliseconds.
    fn updated(&self) -> i64;
    /// Distinct tag names.
    fn tags(&self) -> &[String];
    /// Directory-name segments from the traversal root to the post's
    /// containing directory.
    fn category_path(&self) -> &[String];
}

/// A fully parsed post, including the rendering payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub description: String,
    pub created: i64,
    pub updated: i64,
    pub content: String,
    pub author: String,
    pub tags: Vec<String>,
    pub category: Vec<String>,
    pub related: Vec<String>,
    pub toc: TocItem,
}

/// A post stripped to the fields the indices and feed pages need.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostPreview {
    pub id: String,
    pub title: String,
    pub description: String,
    pub created: i64,
    pub updated: i64,
    pub author: String,
    pub tags: Vec<String>,
    pub category: Vec<String>,
}

/// One level of a post's table of contents.
///
/// The root item carries empty `title`/`url` and only holds children.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocItem {
    pub title: String,
    pub url: String,
    pub items: Vec<TocItem>,
}

impl Post {
    /// Strip the rendering payload, keeping the preview fields.
    #[must_use]
    pub fn preview(&self) -> PostPreview {
        PostPreview {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            created: self.created,
            updated: self.updated,
            author: self.author.clone(),
            tags: self.tags.clone(),
            category: self.category.clone(),
        }
    }
}

impl PostLike for Post {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn created(&self) -> i64 {
        self.created
    }

    fn updated(&self) -> i64 {
        self.updated
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn category_path(&self) -> &[String] {
        &self.category
    }
}

impl PostLike for PostPreview {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn created(&self) -> i64 {
        self.created
    }

    fn updated(&self) -> i64 {
        self.updated
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn category_path(&self) -> &[String] {
        &self.category
    }
}

/// A navigation entry for generated documentation sites.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocNav {
    pub title: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<DocNav>,
}
