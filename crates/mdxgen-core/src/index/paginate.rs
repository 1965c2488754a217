//! Scope-keyed pagination and ordered-sequence utilities.
//!
//! Every feed in this crate (category, archive) is split into fixed-size,
//! order-preserving pages keyed by a scope label: a slash-joined category
//! path or a `"{year}/{month}"` pair. The same module hosts the stable
//! two-pointer merge and binary insertion the indices use to keep their
//! feeds sorted without ever re-sorting from scratch.

use std::cmp::Ordering;
use std::collections::BTreeMap;

/// The pages of one scope, in feed order.
pub type Pages<P> = Vec<Vec<P>>;

/// Scope label to pages. `BTreeMap` keeps serialization order deterministic.
pub type PageMap<P> = BTreeMap<String, Pages<P>>;

/// Split `posts` into `ceil(len / size)` pages of `size` items under `scope`.
///
/// Order is preserved; every page but possibly the last holds exactly `size`
/// items. An empty feed produces no pages and no map entry, so serializers
/// never see empty scopes.
///
/// `size` must be positive; configuration validation enforces that upstream.
pub fn paginate_into<P: Clone>(map: &mut PageMap<P>, scope: &str, posts: &[P], size: usize) {
    if posts.is_empty() {
        return;
    }

    let pages = posts.chunks(size).map(<[P]>::to_vec).collect();
    map.insert(scope.to_string(), pages);
}

/// Stable two-pointer merge of two sequences sorted under `cmp`.
///
/// While both sides have items, the strictly smaller head is taken; on ties
/// the right side goes first. Either way each side's internal order is
/// preserved, so merging two sorted feeds yields a sorted feed.
pub fn merge<T, F>(left: Vec<T>, right: Vec<T>, cmp: F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(a), Some(b)) = (left.peek(), right.peek()) {
        if cmp(a, b) == Ordering::Less {
            merged.extend(left.next());
        } else {
            merged.extend(right.next());
        }
    }

    merged.extend(left);
    merged.extend(right);
    merged
}

/// Insert `item` into `list`, already sorted under `cmp`, keeping it sorted.
///
/// Binary search finds the slot (items comparing equal are kept before the
/// new one), then a single shift makes room: O(log n) search, O(n) shift.
pub fn insert_sorted<T, F>(list: &mut Vec<T>, item: T, cmp: F)
where
    F: Fn(&T, &T) -> Ordering,
{
    let at = list.partition_point(|probe| cmp(probe, &item) != Ordering::Greater);
    list.insert(at, item);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_paginate_partitions_exactly() {
        let posts: Vec<u32> = (0..7).collect();
        let mut map = PageMap::new();
        paginate_into(&mut map, "/a", &posts, 3);

        let pages = map.get("/a").unwrap();
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0], vec![0, 1, 2]);
        assert_eq!(pages[1], vec![3, 4, 5]);
        assert_eq!(pages[2], vec![6]);
    }

    #[test]
    fn test_paginate_skips_empty_feeds() {
        let mut map: PageMap<u32> = PageMap::new();
        paginate_into(&mut map, "/a", &[], 3);
        assert!(map.is_empty());
    }

    #[test]
    fn test_paginate_exact_multiple() {
        let posts: Vec<u32> = (0..6).collect();
        let mut map = PageMap::new();
        paginate_into(&mut map, "/a", &posts, 3);

        let pages = map.get("/a").unwrap();
        assert_eq!(pages.len(), 2);
        assert!(pages.iter().all(|page| page.len() == 3));
    }

    #[test]
    fn test_merge_interleaves_sorted_inputs() {
        let merged = merge(vec![1, 4, 6], vec![2, 3, 5], i32::cmp);
        assert_eq!(merged, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_merge_with_empty_side() {
        assert_eq!(merge(vec![1, 2], vec![], i32::cmp), vec![1, 2]);
        assert_eq!(merge(vec![], vec![1, 2], i32::cmp), vec![1, 2]);
    }

    #[test]
    fn test_merge_ties_take_right_first() {
        let merged = merge(
            vec![(1, 'l')],
            vec![(1, 'r')],
            |a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0),
        );
        assert_eq!(merged, vec![(1, 'r'), (1, 'l')]);
    }

    #[test]
    fn test_insert_sorted_keeps_order() {
        let mut list = vec![10, 20, 30];
        insert_sorted(&mut list, 25, i32::cmp);
        insert_sorted(&mut list, 5, i32::cmp);
        insert_sorted(&mut list, 35, i32::cmp);
        assert_eq!(list, vec![5, 10, 20, 25, 30, 35]);
    }

    #[test]
    fn test_insert_sorted_descending_comparator() {
        let cmp = |a: &i32, b: &i32| b.cmp(a);
        let mut list = vec![30, 20, 10];
        insert_sorted(&mut list, 25, cmp);
        assert_eq!(list, vec![30, 25, 20, 10]);
    }

    proptest! {
        #[test]
        fn prop_pages_concatenate_to_input(posts in prop::collection::vec(0u32..100, 0..40), size in 1usize..10) {
            let mut map = PageMap::new();
            paginate_into(&mut map, "s", &posts, size);

            if posts.is_empty() {
                prop_assert!(map.is_empty());
            } else {
                let pages = map.get("s").unwrap();
                prop_assert_eq!(pages.len(), posts.len().div_ceil(size));

                for page in &pages[..pages.len() - 1] {
                    prop_assert_eq!(page.len(), size);
                }

                let rejoined: Vec<u32> = pages.iter().flatten().copied().collect();
                prop_assert_eq!(rejoined, posts);
            }
        }

        #[test]
        fn prop_merge_preserves_sortedness(
            mut a in prop::collection::vec(0i32..100, 0..30),
            mut b in prop::collection::vec(0i32..100, 0..30),
        ) {
            a.sort_unstable();
            b.sort_unstable();
            let merged = merge(a.clone(), b.clone(), i32::cmp);

            prop_assert_eq!(merged.len(), a.len() + b.len());
            prop_assert!(merged.windows(2).all(|w| w[0] <= w[1]));
        }
    }
}
