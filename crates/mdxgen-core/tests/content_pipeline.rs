//! End-to-end pipeline tests over a realistic fixture tree.

#![allow(clippy::unwrap_used)]

use mdxgen_core::{Config, ContentIndexer, PostLike, generate_api};
use std::fs;
use std::path::Path;

fn write_post(path: &Path, title: &str, created: &str, updated: &str, tags: &[&str]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let tag_list = tags.join(", ");
    let content = format!(
        "---\ntitle: {title}\ndescription: about {title}\ncreated: {created}\nupdated: {updated}\ntags: [{tag_list}]\n---\n\n# {title}\n\n## Details\n\nbody of {title}\n"
    );
    fs::write(path, content).unwrap();
}

/// A small blog: two nested tech categories, one life category, a README,
/// an empty drafts directory, and one malformed file.
fn fixture() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    write_post(
        &root.join("tech/rust-intro.md"),
        "Rust Intro",
        "2021-03-02",
        "2021-05-01",
        &["rust", "book"],
    );
    write_post(
        &root.join("tech/rust-traits.md"),
        "Rust Traits",
        "2021-03-20",
        "2021-04-01",
        &["rust"],
    );
    write_post(
        &root.join("tech/wasm/wasm-intro.md"),
        "Wasm Intro",
        "2021-07-03",
        "2021-07-10",
        &["rust", "wasm"],
    );
    write_post(
        &root.join("life/travel.md"),
        "Travel",
        "2020-03-15",
        "2020-03-15",
        &[],
    );

    fs::write(root.join("README.md"), "# about this blog\n").unwrap();
    fs::create_dir_all(root.join("drafts")).unwrap();
    fs::write(root.join("drafts/ideas.txt"), "no markdown here").unwrap();
    fs::write(
        root.join("life/broken.md"),
        "---\ntags: [unclosed\n---\nbody\n",
    )
    .unwrap();

    dir
}

#[test]
fn indexes_the_whole_tree_in_one_pass() {
    let dir = fixture();
    let site = ContentIndexer::new(dir.path(), Config::default())
        .unwrap()
        .run()
        .unwrap();

    assert_eq!(site.posts.len(), 4);
    assert_eq!(site.archive.total(), 4);

    // Recent feed: most recently updated first.
    let titles: Vec<&str> = site.recent.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Wasm Intro", "Rust Intro", "Rust Traits", "Travel"]
    );
}

#[test]
fn category_pagination_aggregates_subtrees() {
    let dir = fixture();
    let site = ContentIndexer::new(dir.path(), Config::default())
        .unwrap()
        .run()
        .unwrap();

    let mut categories = site.categories;
    let pages = categories.paginate(10);

    // The leaf holds only its own post.
    let wasm = pages.get("/tech/wasm").unwrap();
    assert_eq!(wasm[0].len(), 1);
    assert_eq!(wasm[0][0].title, "Wasm Intro");

    // The parent aggregates its own posts with its subtree, still sorted
    // descending by update time.
    let tech = pages.get("/tech").unwrap();
    let titles: Vec<&str> = tech[0].iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Wasm Intro", "Rust Intro", "Rust Traits"]);

    // life/ has one parsed post and no child categories: a leaf scope.
    let life = pages.get("/life").unwrap();
    assert_eq!(life[0].len(), 1);
}

#[test]
fn category_totals_count_files_not_posts() {
    let dir = fixture();
    let site = ContentIndexer::new(dir.path(), Config::default())
        .unwrap()
        .run()
        .unwrap();

    // life/ holds two .md files on disk but only one parsed into a post.
    let life = site
        .categories
        .children
        .iter()
        .find(|c| c.key == "life")
        .unwrap();
    assert_eq!(life.total, 2);
    assert_eq!(life.posts.len(), 1);
}

#[test]
fn archive_spans_years_and_orders_both_ways() {
    let dir = fixture();
    let site = ContentIndexer::new(dir.path(), Config::default())
        .unwrap()
        .run()
        .unwrap();

    let list = site.archive.list();
    let years: Vec<i32> = list.iter().map(|y| y.year).collect();
    assert_eq!(years, vec![2020, 2021]);

    // 2021 months display descending: July, then March.
    let months: Vec<u32> = list[1].months.iter().map(|m| m.month).collect();
    assert_eq!(months, vec![6, 2]);

    // Within March, posts ascend by creation time.
    let march = &list[1].months[1];
    let titles: Vec<&str> = march.posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Rust Intro", "Rust Traits"]);

    // Bounds cover the whole corpus.
    let all_created: Vec<i64> = site.posts.iter().map(|p| p.created).collect();
    assert_eq!(site.archive.start(), *all_created.iter().min().unwrap());
    assert_eq!(site.archive.end(), *all_created.iter().max().unwrap());
}

#[test]
fn tag_graph_covers_cooccurring_combinations_only() {
    let dir = fixture();
    let site = ContentIndexer::new(dir.path(), Config::default())
        .unwrap()
        .run()
        .unwrap();

    let graph = site.tags.graph();

    let rust = graph.get("rust").unwrap();
    assert_eq!(rust.posts.len(), 3);
    assert_eq!(rust.tags, vec!["book", "wasm"]);

    let book_rust = graph.get("book-rust").unwrap();
    assert_eq!(book_rust.posts.len(), 1);
    assert_eq!(book_rust.posts[0].id(), rust.posts[0].id());

    // book and wasm never co-occur.
    assert!(!graph.contains_key("book-wasm"));
}

#[test]
fn api_generation_is_reproducible() {
    let dir = fixture();
    let out_a = tempfile::tempdir().unwrap();
    let out_b = tempfile::tempdir().unwrap();

    generate_api(dir.path(), out_a.path(), Config::default()).unwrap();
    generate_api(dir.path(), out_b.path(), Config::default()).unwrap();

    // Same input, same bytes: ids are content hashes and every view is
    // deterministically ordered.
    for view in ["content/recent-posts", "category/list", "tag/graph"] {
        let a = fs::read_to_string(out_a.path().join(view)).unwrap();
        let b = fs::read_to_string(out_b.path().join(view)).unwrap();
        assert_eq!(a, b, "view {view} differs between runs");
    }
}
