//! MDX page generation.
//!
//! Produces a publishable page tree from one content pass: a page per post,
//! archive index/year/month pages, category pages mirroring the tree, tag
//! and tag-combination pages, plus the JSON sidecars a documentation site
//! needs for navigation (`doc-nav.json`, `all-tags.json`, `tag-graph.json`).

use super::render::{
    MONTHS, PostMeta, render_category, render_month, render_page, render_post_meta,
    render_tag_index, render_tag_posts, render_year, render_years,
};
use super::{write_json, write_text};
use crate::Result;
use crate::config::Config;
use crate::content::{ContentIndexer, SiteIndex};
use crate::index::category::Category;
use crate::index::tag::canonical_key;
use crate::index::{ArchiveYearList, TagIndex};
use crate::types::{DocNav, PostPreview};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

const ARCHIVE_DESCRIPTION: &str = "Welcome to the Archive Page of my blog! Here, you can browse through a chronological collection of all my posts since I embarked on this writing journey";
const YEAR_DESCRIPTION: &str = "I hope you find joy in exploring these pages as much as I found in writing them. Thank you for being part of this journey with me!";
const MONTH_DESCRIPTION: &str = "Each entry is a snapshot of my life at that moment, filled with lessons learned, memories made, and the evolution of my thoughts.";
const CATEGORY_DESCRIPTION: &str = "This is where you can navigate through the various themes and topics that make up my journey.";

#[derive(Serialize)]
struct GraphTags<'a> {
    tags: &'a [String],
}

/// Generate the MDX page tree for the source at `root` under `output`.
pub fn generate_mdx(root: &Path, output: &Path, config: Config) -> Result<()> {
    let site = ContentIndexer::new(root, config)?.run()?;
    serialize(site, output)
}

fn serialize(site: SiteIndex, output: &Path) -> Result<()> {
    for post in &site.posts {
        let meta = render_post_meta(&PostMeta {
            title: &post.title,
            description: &post.description,
            created: Some(post.created),
            updated: Some(post.updated),
            tags: Some(&post.tags),
        });
        let page = format!("{meta}{}", post.content);
        write_text(&output.join("posts").join(format!("{}.mdx", post.id)), &page)?;
    }

    let archive_list = site.archive.list();
    generate_archive_pages(&archive_list, output)?;
    generate_category_pages(&site.categories, output)?;
    generate_tag_pages(&site.tags, output)?;

    let mut nav = archive_nav(&archive_list);
    nav.extend(category_nav(&site.categories.children));
    write_json(&output.join("doc-nav.json"), &nav)?;

    write_json(&output.join("all-tags.json"), &site.tags.names())?;

    let graph = site.tags.graph();
    let graph_tags: BTreeMap<&String, GraphTags<'_>> = graph
        .iter()
        .map(|(key, node)| (key, GraphTags { tags: &node.tags }))
        .collect();
    write_json(&output.join("tag-graph.json"), &graph_tags)?;

    Ok(())
}

fn generate_archive_pages(list: &[ArchiveYearList<PostPreview>], output: &Path) -> Result<()> {
    let root = output.join("archive");

    let index = render_page("Archive", ARCHIVE_DESCRIPTION, || render_years(list));
    write_text(&root.join("index.mdx"), &index)?;

    for year in list {
        let year_index = render_page(&format!("\"{}\"", year.year), YEAR_DESCRIPTION, || {
            render_year(year, 2)
        });
        write_text(&root.join(year.year.to_string()).join("index.mdx"), &year_index)?;

        for month in &year.months {
            let title = format!("{} {}", year.year, MONTHS[month.month as usize]);
            let month_page = render_page(&title, MONTH_DESCRIPTION, || render_month(month));
            write_text(
                &root
                    .join(year.year.to_string())
                    .join(format!("{}.mdx", month.month + 1)),
                &month_page,
            )?;
        }
    }

    Ok(())
}

fn generate_category_pages(tree: &Category<PostPreview>, output: &Path) -> Result<()> {
    let root = output.join("category");

    let index = render_page("Category", CATEGORY_DESCRIPTION, || {
        render_category(tree, true, 2)
    });
    write_text(&root.join("index.mdx"), &index)?;

    generate_category_children(&tree.children, &root)
}

/// Leaf nodes become `<key>.mdx`; interior nodes get their own directory
/// with an `index.mdx` and recurse.
fn generate_category_children(children: &[Category<PostPreview>], dir: &Path) -> Result<()> {
    for child in children {
        let description = format!(
            "Posts of {}, a collection of thoughts, experiences, and insights",
            child.title
        );
        let page = render_page(&child.title, &description, || {
            render_category(child, false, 1)
        });

        if child.children.is_empty() {
            write_text(&dir.join(format!("{}.mdx", child.key)), &page)?;
        } else {
            let child_dir = dir.join(&child.key);
            write_text(&child_dir.join("index.mdx"), &page)?;
            generate_category_children(&child.children, &child_dir)?;
        }
    }
    Ok(())
}

fn generate_tag_pages(tags: &TagIndex<PostPreview>, output: &Path) -> Result<()> {
    let root = output.join("tag");
    if tags.is_empty() {
        return Ok(());
    }

    let list = tags.list();
    let index = render_page("All Tags", "Every tag in the corpus", || {
        render_tag_index(&list)
    });
    write_text(&root.join("index.mdx"), &index)?;

    let mut single_keys = Vec::new();
    for tag in &list {
        let key = canonical_key(std::slice::from_ref(&tag.name));
        let page = render_page(&tag.name, "", || render_tag_posts(tags.get(&tag.name), 2));
        write_text(&root.join(format!("{key}.mdx")), &page)?;
        single_keys.push(key);
    }

    // Combination pages; the single-tag nodes already got theirs above.
    for (key, node) in &tags.graph() {
        if single_keys.contains(key) {
            continue;
        }
        let page = render_page(key, "", || render_tag_posts(&node.posts, 2));
        write_text(&root.join(format!("{key}.mdx")), &page)?;
    }

    Ok(())
}

fn archive_nav(list: &[ArchiveYearList<PostPreview>]) -> Vec<DocNav> {
    if list.is_empty() {
        return Vec::new();
    }

    let items = list
        .iter()
        .map(|year| DocNav {
            title: year.year.to_string(),
            href: format!("/archive/{}", year.year),
            items: Vec::new(),
        })
        .collect();

    vec![DocNav {
        title: "Archive".to_string(),
        href: "/archive".to_string(),
        items,
    }]
}

fn category_nav(children: &[Category<PostPreview>]) -> Vec<DocNav> {
    if children.is_empty() {
        return Vec::new();
    }

    let items = children
        .iter()
        .map(|category| DocNav {
            title: category.title.clone(),
            href: format!("/category/{}", category.key),
            items: Vec::new(),
        })
        .collect();

    vec![DocNav {
        title: "Category".to_string(),
        href: "/category".to_string(),
        items,
    }]
}
