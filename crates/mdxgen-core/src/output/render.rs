//! Markdown/MDX fragment rendering shared by the page generators.
//!
//! These are plain string builders over [`PostPreview`] records; nothing
//! here touches the indices or the filesystem.

use crate::index::TagCount;
use crate::index::archive::{ArchiveMonth, ArchiveYearList};
use crate::index::category::Category;
use chrono::{DateTime, Datelike, Utc};

use crate::types::PostPreview;

/// Month names for display, indexed by 0-based month number.
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Fields the front-matter block renders. Absent options are omitted.
#[derive(Debug, Default, Clone)]
pub struct PostMeta<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub created: Option<i64>,
    pub updated: Option<i64>,
    pub tags: Option<&'a [String]>,
}

fn ymd(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .unwrap_or_default()
        .format("%Y-%m-%d")
        .to_string()
}

/// "August 22, 2020" from the post's `created` timestamp.
fn display_date(post: &PostPreview) -> String {
    let date = DateTime::<Utc>::from_timestamp_millis(post.created).unwrap_or_default();
    format!(
        "{} {}, {}",
        MONTHS[date.month0() as usize],
        date.day(),
        date.year()
    )
}

/// The `---` fenced front-matter block heading every generated page.
#[must_use]
pub fn render_post_meta(meta: &PostMeta<'_>) -> String {
    let mut mdx = String::new();
    mdx.push_str("---\n");
    mdx.push_str(&format!("title: {}\n", meta.title));
    mdx.push_str(&format!("description: {}\n", meta.description));
    if let Some(updated) = meta.updated {
        mdx.push_str(&format!("date: {}\n", ymd(updated)));
    }
    if let Some(created) = meta.created {
        mdx.push_str(&format!("created: {}\n", ymd(created)));
    }
    if let Some(tags) = meta.tags {
        mdx.push_str(&format!("tags: [{}]\n", tags.join(", ")));
    }
    mdx.push_str("---\n\n");
    mdx
}

/// A page wrapper: meta block plus whatever the body builder produces.
pub fn render_page<F: FnOnce() -> String>(title: &str, description: &str, body: F) -> String {
    let mut mdx = render_post_meta(&PostMeta {
        title,
        description,
        ..PostMeta::default()
    });
    mdx.push_str(&body());
    mdx
}

/// One archive entry: date, linked title, description, rule.
#[must_use]
pub fn render_archive_post(post: &PostPreview) -> String {
    let date = format!("***{}***", display_date(post));

    let mut mdx = format!("> {date} <br /> [{}](/posts/{}) <br />\n", post.title, post.id);
    mdx.push_str(&format!(
        "<span className=\"text-muted-foreground text-sm\">{}</span>\n",
        post.description
    ));
    mdx.push_str("<hr />\n");
    mdx
}

/// The all-years archive index: every year with its months inlined.
#[must_use]
pub fn render_years(years: &[ArchiveYearList<PostPreview>]) -> String {
    let mut mdx = String::new();
    for year in years {
        mdx.push_str(&format!("## {} ({})\n", year.year, year.total));
        mdx.push_str(&render_year(year, 3));
    }
    mdx
}

/// One year's months at heading level `level`.
#[must_use]
pub fn render_year(year: &ArchiveYearList<PostPreview>, level: usize) -> String {
    let h = "#".repeat(level);
    let mut mdx = String::new();
    for month in &year.months {
        mdx.push_str(&format!(
            "\n{h} {} ({})\n\n",
            MONTHS[month.month as usize],
            month.posts.len()
        ));
        mdx.push_str("<div className=\"p-4\">\n\n");
        let entries: Vec<String> = month.posts.iter().map(render_archive_post).collect();
        mdx.push_str(&entries.join("\n"));
        mdx.push_str("</div>\n\n");
    }
    mdx
}

/// One month's post list, no heading.
#[must_use]
pub fn render_month(month: &ArchiveMonth<PostPreview>) -> String {
    let entries: Vec<String> = month.posts.iter().map(render_archive_post).collect();
    entries.join("\n")
}

/// One category entry at heading level `level`.
#[must_use]
pub fn render_category_post(post: &PostPreview, level: usize) -> String {
    let h = "#".repeat(level);
    let date = display_date(post);

    let mut mdx = format!("{h} [{}](posts/{})\n", post.title, post.id);
    mdx.push_str(&format!(
        "<span className=\"text-muted-foreground text-sm inline-flex w-full items-center justify-between gap-2\">{} <em className=\"text-xs\" style={{{{flex: \"none\"}}}}>{date}</em></span>\n",
        post.description
    ));
    if level > 2 {
        mdx.push_str("<hr />\n");
    }
    mdx
}

/// A category subtree: optional title, own posts, then children one level
/// deeper.
#[must_use]
pub fn render_category(
    category: &Category<PostPreview>,
    render_title: bool,
    level: usize,
) -> String {
    let h = "#".repeat(level % 4);
    let mut mdx = String::new();

    if category.total > 0 && render_title {
        mdx.push_str(&format!("\n{h} {} ({})\n", category.title, category.total));
    }
    if !category.posts.is_empty() && render_title {
        mdx.push_str("<div className=\"p-2\">\n\n");
    }
    let entries: Vec<String> = category
        .posts
        .iter()
        .map(|p| render_category_post(p, level + 1))
        .collect();
    mdx.push_str(&entries.join("\n"));
    if !category.posts.is_empty() && render_title {
        mdx.push_str("</div>\n");
    }

    for child in &category.children {
        let bump = usize::from(category.total > 0);
        mdx.push_str(&render_category(child, true, level + bump));
    }
    mdx
}

/// The tag index body: every tag as a link with its post count.
#[must_use]
pub fn render_tag_index(tags: &[TagCount]) -> String {
    let mut mdx = String::new();
    for tag in tags {
        mdx.push_str(&format!(
            "- [{}](/tag/{}) ({})\n",
            tag.name,
            tag.name.replace(' ', "-"),
            tag.count
        ));
    }
    mdx
}

/// A tag page body: the matching posts at heading level `level`.
#[must_use]
pub fn render_tag_posts(posts: &[PostPreview], level: usize) -> String {
    let entries: Vec<String> = posts
        .iter()
        .map(|p| render_category_post(p, level))
        .collect();
    entries.join("\n")
}
