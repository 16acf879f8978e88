// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Permutation utilities for exhaustive position testing.

/// Calls `callback` with every permutation of `[0, 1, ..., len - 1]`.
///
/// Uses the iterative form of Heap's algorithm, so each permutation differs
/// from the previous one by a single swap. `len == 0` yields nothing.
///
/// # Example
/// ```
/// use simplevec_test_utils::index_permutations;
///
/// let mut count = 0;
/// index_permutations(3, |_perm| {
///     count += 1;
/// });
/// assert_eq!(count, 6); // 3! = 6
/// ```
pub fn index_permutations<F>(len: usize, mut callback: F)
where
    F: FnMut(&[usize]),
{
    if len == 0 {
        return;
    }

    let mut indices: Vec<usize> = (0..len).collect();
    let mut counters = vec![0usize; len];

    callback(&indices);

    let mut i = 1;
    while i < len {
        if counters[i] < i {
            let j = if i % 2 == 0 { 0 } else { counters[i] };
            indices.swap(j, i);
            callback(&indices);

            counters[i] += 1;
            i = 1;
        } else {
            counters[i] = 0;
            i += 1;
        }
    }
}

/// Returns `items` rearranged so that position `i` holds `items[perm[i]]`.
///
/// # Panics
///
/// Panics if `perm` is not a permutation of `0..items.len()`.
///
/// # Example
/// ```
/// use simplevec_test_utils::apply_permutation;
///
/// let arranged = apply_permutation(&['a', 'b', 'c', 'd'], &[3, 2, 1, 0]);
/// assert_eq!(arranged, ['d', 'c', 'b', 'a']);
/// ```
pub fn apply_permutation<T: Clone>(items: &[T], perm: &[usize]) -> Vec<T> {
    assert_eq!(items.len(), perm.len(), "apply_permutation: length mismatch");

    let mut seen = vec![false; perm.len()];
    perm.iter()
        .map(|&source| {
            assert!(!seen[source], "apply_permutation: index {} repeated", source);
            seen[source] = true;
            items[source].clone()
        })
        .collect()
}

/// Converts final positions into insertion indices.
///
/// `final_positions[k]` is where the `k`-th inserted value must end up. The
/// returned `steps[k]` is the index to insert it at, into a sequence that
/// already holds the first `k` values, so that after all insertions value `k`
/// sits at `final_positions[k]`.
///
/// # Example
/// ```
/// use simplevec_test_utils::insertion_positions;
///
/// // Insert 'a', 'b', 'c' so that they end up as ['c', 'a', 'b'].
/// let steps = insertion_positions(&[1, 2, 0]);
/// assert_eq!(steps, [0, 1, 0]);
///
/// let mut seq = Vec::new();
/// for (value, &at) in ['a', 'b', 'c'].iter().zip(&steps) {
///     seq.insert(at, *value);
/// }
/// assert_eq!(seq, ['c', 'a', 'b']);
/// ```
pub fn insertion_positions(final_positions: &[usize]) -> Vec<usize> {
    final_positions
        .iter()
        .enumerate()
        .map(|(k, &target)| {
            final_positions[..k]
                .iter()
                .filter(|&&earlier| earlier < target)
                .count()
        })
        .collect()
}
