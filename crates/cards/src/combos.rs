// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! k-subsets of n items.
//!
//! Subsets are generated in colexicographic order, the order used by the
//! combinatorial number system, so that an iterator can start from any
//! subset rank (see Theorem L pg. 260 Knuth 4a). This makes it possible to
//! split the subsets into contiguous ranges for parallel tasks.

/// Max number of items.
pub const MAX_N: usize = 52;

/// Max subset size.
pub const MAX_K: usize = 7;

/// Creates table for nck(n, k) for n <= 52 and k <= 7.
const fn make_nck() -> [[u64; MAX_K + 1]; MAX_N + 1] {
    let mut t = [[0u64; MAX_K + 1]; MAX_N + 1];
    let mut n = 0;

    while n <= MAX_N {
        // base case nck(n, 0) = 1
        t[n][0] = 1;

        let mut k = 1;
        while k <= MAX_K && k <= n {
            // nck(n, k) = nck(n-1, k-1) + nck(n-1, k)
            t[n][k] = t[n - 1][k - 1] + t[n - 1][k];
            k += 1;
        }

        n += 1;
    }

    t
}

const NCKS: [[u64; MAX_K + 1]; MAX_N + 1] = make_nck();

/// Returns the binomial coefficient for n choose k, 0 when k > n.
///
/// Panics if n > 52 or k > 7.
#[inline]
pub fn nck(n: usize, k: usize) -> u64 {
    assert!(n <= MAX_N, "n={n} must be 0 <= n <= {MAX_N}");
    assert!(k <= MAX_K, "k={k} must be 0 <= k <= {MAX_K}");
    NCKS[n][k]
}

/// Uses the combinatorial number system to convert a rank to a
/// k-combination (see Theorem L pg. 260 Knuth 4a).
///
/// Only the first k positions of the returned array are used.
pub fn nth_ksubset(mut nth: u64, k: usize) -> [usize; MAX_K] {
    assert!(k <= MAX_K);

    let mut out = [0; MAX_K];
    for i in (0..k).rev() {
        let mut c = i;
        while c < MAX_N && nck(c + 1, i + 1) <= nth {
            c += 1;
        }

        out[i] = c;
        nth -= nck(c, i + 1);
    }

    out
}

/// A k-subset as k increasing indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KSubset {
    idx: [usize; MAX_K],
    len: usize,
}

impl KSubset {
    /// The subset indices in increasing order.
    pub fn indices(&self) -> &[usize] {
        &self.idx[..self.len]
    }
}

/// Lazy iterator over k-subsets of n items.
///
/// For k = 0 there is exactly one subset, the empty one.
#[derive(Debug, Clone)]
pub struct KSubsets {
    k: usize,
    // The current subset with c[k] = n as a sentinel.
    c: [usize; MAX_K + 1],
    remaining: u64,
}

impl KSubsets {
    /// All the k-subsets of n items.
    ///
    /// Panics if n > 52 or k > 7.
    pub fn new(n: usize, k: usize) -> Self {
        Self::range(n, k, 0, nck(n, k))
    }

    /// At most `count` k-subsets of n items starting from the `nth` subset.
    ///
    /// Panics if n > 52 or k > 7.
    pub fn range(n: usize, k: usize, nth: u64, count: u64) -> Self {
        let total = nck(n, k);
        let remaining = count.min(total.saturating_sub(nth));

        let mut c = [0; MAX_K + 1];
        if remaining > 0 {
            c[..k].copy_from_slice(&nth_ksubset(nth, k)[..k]);
        }
        c[k] = n;

        Self { k, c, remaining }
    }

    // Algorithm L from TAOCP 4a.
    fn advance(&mut self) {
        let c = &mut self.c;
        let mut j = 0;
        while j < self.k && c[j] + 1 == c[j + 1] {
            c[j] = j;
            j += 1;
        }

        if j < self.k {
            c[j] += 1;
        }
    }
}

impl Iterator for KSubsets {
    type Item = KSubset;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let mut idx = [0; MAX_K];
        idx.copy_from_slice(&self.c[..MAX_K]);
        let subset = KSubset { idx, len: self.k };

        self.remaining -= 1;
        if self.remaining > 0 {
            self.advance();
        }

        Some(subset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for KSubsets {}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn test_nck() {
        // For n < k = 0
        assert_eq!(nck(2, 3), 0);
        assert_eq!(nck(0, 0), 1);

        [1, 52, 1326, 22100, 270725, 2598960, 20358520, 133784560]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(52, k), v));

        [1, 47, 1081, 16215, 178365]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(47, k), v));

        [1, 5, 10, 10, 5, 1, 0, 0]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(5, k), v));

        [1, 1, 0, 0, 0, 0, 0, 0]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(1, k), v));
    }

    #[test]
    fn test_ksubsets_count() {
        for (n, k) in [(47, 2), (46, 1), (45, 0), (7, 5), (6, 5), (5, 5), (3, 4)] {
            let subsets = KSubsets::new(n, k).collect::<Vec<_>>();
            assert_eq!(subsets.len() as u64, nck(n, k), "n={n} k={k}");

            let unique = subsets
                .iter()
                .map(|s| s.indices().to_vec())
                .collect::<HashSet<_>>();
            assert_eq!(unique.len(), subsets.len());

            for s in &subsets {
                assert_eq!(s.indices().len(), k);
                assert!(s.indices().windows(2).all(|w| w[0] < w[1]));
                assert!(s.indices().iter().all(|&i| i < n));
            }
        }
    }

    #[test]
    fn test_empty_subset() {
        let subsets = KSubsets::new(46, 0).collect::<Vec<_>>();
        assert_eq!(subsets.len(), 1);
        assert!(subsets[0].indices().is_empty());
    }

    #[test]
    fn test_nth_ksubset() {
        for (counter, s) in KSubsets::new(20, 4).enumerate() {
            let ks = nth_ksubset(counter as u64, 4);
            assert_eq!(s.indices(), &ks[..4]);
        }
    }

    #[test]
    fn test_ksubsets_range() {
        let all = KSubsets::new(47, 2).collect::<Vec<_>>();

        // Split in uneven ranges and check they join back to the full sequence.
        let mut joined = Vec::new();
        let mut start = 0;
        for count in [1, 100, 333, 1000] {
            joined.extend(KSubsets::range(47, 2, start, count));
            start += count;
        }
        assert_eq!(joined, all);

        // Starting past the end is empty.
        assert_eq!(KSubsets::range(47, 2, 1081, 10).count(), 0);
    }

    // This takes a while to run in debug mode as it goes through 133M subsets.
    #[test]
    #[ignore]
    fn test_nth_ksubset_7cards() {
        let nth = nck(52, 7) / 2;
        for (counter, s) in KSubsets::range(52, 7, nth, nth).enumerate() {
            let ks = nth_ksubset(nth + counter as u64, 7);
            assert_eq!(s.indices(), &ks[..7]);
        }
    }
}
