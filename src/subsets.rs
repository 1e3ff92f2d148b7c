//! Power-set enumeration with binary tags.
//!
//! Every subset of an item list is paired with a tag of `'0'`/`'1'` digits,
//! one per item. The leftmost digit belongs to the first item, and subsets
//! come out in ascending binary order of their tag:
//!
//! ```text
//! items [a, b]  ->  "00" {}   "01" {b}   "10" {a}   "11" {a, b}
//! ```
//!
//! The enumerator has no size limit. N items always produce 2^N subsets, so
//! callers decide how many items are reasonable.

use std::iter::FusedIterator;

/// A subset of the input items with its binary tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedSubset<'a, T> {
    pub tag: String,
    /// Members in input order.
    pub subset: Vec<&'a T>,
}

impl<T> TaggedSubset<'_, T> {
    /// Whether the item at `index` is part of this subset.
    pub fn includes(&self, index: usize) -> bool {
        self.tag.as_bytes().get(index) == Some(&b'1')
    }
}

/// Lazy iterator over all tagged subsets. See [`create_subsets`].
#[derive(Debug, Clone)]
pub struct Subsets<'a, T> {
    items: &'a [T],
    /// Membership of the next subset to yield, one flag per item.
    bits: Vec<bool>,
    /// `None` once the count no longer fits in `usize`.
    remaining: Option<usize>,
    done: bool,
}

/// Enumerate every subset of `items`, tagged.
///
/// Zero items yield one subset with an empty tag.
pub fn create_subsets<T>(items: &[T]) -> Subsets<'_, T> {
    Subsets {
        items,
        bits: vec![false; items.len()],
        remaining: u32::try_from(items.len())
            .ok()
            .and_then(|n| 1usize.checked_shl(n)),
        done: false,
    }
}

/// Number of subsets of `n` items, if it fits in a `u128`.
pub fn subset_count(n: usize) -> Option<u128> {
    u32::try_from(n).ok().and_then(|n| 1u128.checked_shl(n))
}

impl<'a, T> Subsets<'a, T> {
    /// Advance `bits` like a binary counter, rightmost digit first.
    /// Returns false when the counter wraps back to all zeros.
    fn increment(&mut self) -> bool {
        for bit in self.bits.iter_mut().rev() {
            if *bit {
                *bit = false;
            } else {
                *bit = true;
                return true;
            }
        }
        false
    }
}

impl<'a, T> Iterator for Subsets<'a, T> {
    type Item = TaggedSubset<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let tag: String = self.bits.iter().map(|&b| if b { '1' } else { '0' }).collect();
        let subset = self
            .items
            .iter()
            .zip(&self.bits)
            .filter_map(|(item, &on)| on.then_some(item))
            .collect();

        self.done = !self.increment();
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining -= 1;
        }

        Some(TaggedSubset { tag, subset })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

impl<T> FusedIterator for Subsets<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn tags<T>(items: &[T]) -> Vec<String> {
        create_subsets(items).map(|s| s.tag).collect()
    }

    #[test]
    fn test_zero_items() {
        let items: [u8; 0] = [];
        let subsets: Vec<_> = create_subsets(&items).collect();

        assert_eq!(subsets.len(), 1);
        assert_eq!(subsets[0].tag, "");
        assert!(subsets[0].subset.is_empty());
    }

    #[test]
    fn test_one_item() {
        let subsets: Vec<_> = create_subsets(&['a']).collect();
        assert_eq!(
            subsets,
            vec![
                TaggedSubset { tag: "0".to_string(), subset: vec![] },
                TaggedSubset { tag: "1".to_string(), subset: vec![&'a'] },
            ]
        );
    }

    #[test]
    fn test_two_items_digit_order() {
        let items = ['a', 'b'];
        let subsets: Vec<_> = create_subsets(&items).collect();

        let pairs: Vec<(&str, Vec<char>)> = subsets
            .iter()
            .map(|s| (s.tag.as_str(), s.subset.iter().map(|c| **c).collect()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("00", vec![]),
                ("01", vec!['b']),
                ("10", vec!['a']),
                ("11", vec!['a', 'b']),
            ]
        );
    }

    #[test]
    fn test_covers_every_bit_pattern_once() {
        let items: Vec<u32> = (0..6).collect();
        let all = tags(&items);

        assert_eq!(all.len(), 64);
        assert!(all.iter().all(|t| t.len() == 6));

        let unique: HashSet<_> = all.iter().collect();
        assert_eq!(unique.len(), 64);

        // Subset i carries i written in binary.
        for (i, tag) in all.iter().enumerate() {
            assert_eq!(usize::from_str_radix(tag, 2).unwrap(), i);
        }
    }

    #[test]
    fn test_membership_matches_tag() {
        let items = [10, 20, 30, 40];
        for s in create_subsets(&items) {
            let expected: Vec<&i32> = items
                .iter()
                .enumerate()
                .filter(|(i, _)| s.includes(*i))
                .map(|(_, item)| item)
                .collect();
            assert_eq!(s.subset, expected);
            assert_eq!(s.subset.len(), s.tag.matches('1').count());
        }
    }

    #[test]
    fn test_all_zero_and_all_one() {
        let items = ["x", "y", "z"];
        let subsets: Vec<_> = create_subsets(&items).collect();

        let first = subsets.first().unwrap();
        assert_eq!(first.tag, "000");
        assert!(first.subset.is_empty());

        let last = subsets.last().unwrap();
        assert_eq!(last.tag, "111");
        assert_eq!(last.subset, items.iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_adding_an_item_doubles_the_list() {
        // Each subset of n items spawns a "0"- and a "1"-extended subset
        // when item n + 1 is added.
        let items = ['p', 'q', 'r'];
        let smaller: Vec<_> = create_subsets(&items[..2]).collect();
        let larger: Vec<_> = create_subsets(&items).collect();

        assert_eq!(larger.len(), smaller.len() * 2);
        for (i, s) in smaller.iter().enumerate() {
            let off = &larger[2 * i];
            let on = &larger[2 * i + 1];
            assert_eq!(off.tag, format!("{}0", s.tag));
            assert_eq!(on.tag, format!("{}1", s.tag));
            assert_eq!(off.subset, s.subset);

            let mut extended = s.subset.clone();
            extended.push(&items[2]);
            assert_eq!(on.subset, extended);
        }
    }

    #[test]
    fn test_stable_across_runs() {
        let items = ["top", "middle", "bottom"];
        assert_eq!(tags(&items), tags(&items));
    }

    #[test]
    fn test_size_hint_is_exact() {
        let items = [1, 2, 3];
        let mut subsets = create_subsets(&items);
        assert_eq!(subsets.size_hint(), (8, Some(8)));
        subsets.next();
        subsets.next();
        assert_eq!(subsets.size_hint(), (6, Some(6)));
        assert_eq!(subsets.count(), 6);
    }

    #[test]
    fn test_iterator_is_fused() {
        let mut subsets = create_subsets(&[1]);
        assert!(subsets.next().is_some());
        assert!(subsets.next().is_some());
        assert!(subsets.next().is_none());
        assert!(subsets.next().is_none());
    }

    #[test]
    fn test_subset_count() {
        assert_eq!(subset_count(0), Some(1));
        assert_eq!(subset_count(7), Some(128));
        assert_eq!(subset_count(127), Some(1u128 << 127));
        assert_eq!(subset_count(128), None);
    }

    proptest! {
        #[test]
        fn test_tags_are_distinct_and_full_width(n in 0usize..10) {
            let items: Vec<usize> = (0..n).collect();
            let all = tags(&items);

            prop_assert_eq!(all.len(), 1 << n);
            prop_assert!(all.iter().all(|t| t.len() == n));
            prop_assert!(all.iter().all(|t| t.chars().all(|c| c == '0' || c == '1')));
            let unique: HashSet<&String> = all.iter().collect();
            prop_assert_eq!(unique.len(), all.len());
        }

        /// Digit `i` is '1' exactly when item `i` is in the subset.
        #[test]
        fn test_tag_digits_match_membership(n in 1usize..8) {
            let items: Vec<usize> = (0..n).collect();
            for s in create_subsets(&items) {
                let members: Vec<usize> = s.subset.iter().map(|i| **i).collect();
                let from_tag: Vec<usize> = s
                    .tag
                    .char_indices()
                    .filter(|(_, c)| *c == '1')
                    .map(|(i, _)| i)
                    .collect();
                prop_assert_eq!(members, from_tag);
            }
        }
    }
}
