//! All-pairs reference baseline
//!
//! Emits every unordered pair `(i, j)` with `i < j`, i.e. `(n^2 - n) / 2`
//! pairs. Used to check the grid for missed pairs and to compare check
//! counts against it.

use super::CandidatePair;

/// Every unordered pair of indices below `count`.
pub fn brute_force_pairs(count: usize) -> impl Iterator<Item = CandidatePair> {
    (0..count).flat_map(move |i| (i + 1..count).map(move |j| (i, j)))
}

/// Number of pairs [`brute_force_pairs`] yields for `count` entities.
#[must_use]
pub const fn brute_force_pair_count(count: usize) -> usize {
    count * count.saturating_sub(1) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_match_closed_form_count() {
        for n in 0..12 {
            assert_eq!(brute_force_pairs(n).count(), brute_force_pair_count(n));
        }
    }

    #[test]
    fn pairs_are_ascending() {
        assert!(brute_force_pairs(6).all(|(i, j)| i < j));
    }
}
