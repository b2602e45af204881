// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! k-subsets of a slice.

/// Calls the `f` closure for each k-subset of `items`.
///
/// Subsets are visited in lexicographic order of the items positions and
/// each subset keeps the input order. Nothing is visited when `k` is larger
/// than the number of items, a single empty subset is visited when `k` is
/// zero.
pub fn for_each_combination<T, F>(items: &[T], k: usize, mut f: F)
where
    T: Clone,
    F: FnMut(&[T]),
{
    let mut subset = Vec::with_capacity(k);
    walk(items.len(), k, |idx| {
        subset.clear();
        subset.extend(idx.iter().map(|&i| items[i].clone()));
        f(&subset);
    });
}

/// Calls the `f` closure for each `K`-subset of `items` as an array, in the
/// same order as [for_each_combination].
pub fn for_each_array<T, const K: usize, F>(items: &[T], mut f: F)
where
    T: Clone,
    F: FnMut(&[T; K]),
{
    walk(items.len(), K, |idx| {
        let subset = std::array::from_fn(|i| items[idx[i]].clone());
        f(&subset);
    });
}

/// Visits the increasing `k` positions sequences below `n`.
fn walk<F: FnMut(&[usize])>(n: usize, k: usize, mut f: F) {
    if k > n {
        return;
    }

    // Positions of the current subset, always increasing.
    let mut idx = (0..k).collect::<Vec<_>>();

    loop {
        f(&idx);

        // Find the rightmost position that can still move right.
        let Some(i) = (0..k).rev().find(|&i| idx[i] < n - k + i) else {
            return;
        };

        idx[i] += 1;
        for j in (i + 1)..k {
            idx[j] = idx[j - 1] + 1;
        }
    }
}

/// Returns all k-subsets of `items`, see [for_each_combination] for the
/// ordering.
pub fn combinations<T: Clone>(items: &[T], k: usize) -> Vec<Vec<T>> {
    let mut out = Vec::new();
    for_each_combination(items, k, |subset| out.push(subset.to_vec()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    fn nck(n: usize, k: usize) -> usize {
        (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
    }

    #[test]
    fn five_of_six() {
        let subsets = combinations(&[1, 2, 3, 4, 5, 6], 5);
        assert_eq!(
            subsets,
            vec![
                vec![1, 2, 3, 4, 5],
                vec![1, 2, 3, 4, 6],
                vec![1, 2, 3, 5, 6],
                vec![1, 2, 4, 5, 6],
                vec![1, 3, 4, 5, 6],
                vec![2, 3, 4, 5, 6],
            ]
        );
    }

    #[test]
    fn keeps_input_order() {
        let subsets = combinations(&['c', 'a', 'b'], 2);
        assert_eq!(subsets, vec![vec!['c', 'a'], vec!['c', 'b'], vec!['a', 'b']]);
    }

    #[test]
    fn edge_sizes() {
        let items = [1, 2, 3];
        assert_eq!(combinations(&items, 0), vec![Vec::<i32>::new()]);
        assert_eq!(combinations(&items, 3), vec![vec![1, 2, 3]]);
        assert!(combinations(&items, 4).is_empty());
        assert!(combinations::<i32>(&[], 1).is_empty());
    }

    #[test]
    fn subsets_count() {
        let items = (0..10).collect::<Vec<_>>();

        for k in 0..=10 {
            let mut seen = HashSet::default();
            let mut count = 0;

            for_each_combination(&items, k, |subset| {
                assert_eq!(subset.len(), k);
                assert!(subset.windows(2).all(|w| w[0] < w[1]));
                seen.insert(subset.to_vec());
                count += 1;
            });

            assert_eq!(count, nck(10, k));
            assert_eq!(seen.len(), count);
        }
    }

    #[test]
    fn arrays_follow_slices() {
        let items = ['a', 'b', 'c', 'd', 'e', 'f'];
        let mut arrays = Vec::new();
        for_each_array(&items, |subset: &[char; 5]| arrays.push(subset.to_vec()));
        assert_eq!(arrays, combinations(&items, 5));

        let mut count = 0;
        for_each_array(&items[..2], |_: &[char; 3]| count += 1);
        assert_eq!(count, 0);
    }
}
