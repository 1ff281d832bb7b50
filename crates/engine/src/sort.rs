//! Parallel in-place quicksort over the alphabet scratch buffer.

use crate::alphabet::ALPHABET_LEN;

/// Subrange length at which the quicksort hands work to the rayon pool,
/// chosen once per [`Encoder`](crate::Encoder) from the CPU count.
pub(crate) fn parallel_threshold(cpus: usize) -> usize {
    if cpus <= 2 {
        // Larger than any buffer: no sort parallelism.
        1 << 20
    } else if cpus >= 16 {
        2048
    } else {
        ALPHABET_LEN / cpus
    }
}

/// Sort `a` ascending, in place. Subranges at or above `threshold` are run
/// as rayon tasks; smaller ones recurse inline. Not stable; duplicates are
/// dealt with by the caller's gap-repair pass.
pub(crate) fn sort(a: &mut [u32], threshold: usize) {
    if a.len() < 2 {
        return;
    }
    let left = partition(a);
    let (lo, rest) = a.split_at_mut(left);
    let hi = &mut rest[1..];
    if lo.len().max(hi.len()) >= threshold {
        rayon::join(|| sort(lo, threshold), || sort(hi, threshold));
    } else {
        sort(lo, threshold);
        sort(hi, threshold);
    }
}

/// One partition step. The element at index 1 is swapped to the end and the
/// new last element is the pivot; returns the pivot's final index.
fn partition(a: &mut [u32]) -> usize {
    let right = a.len() - 1;
    a.swap(1, right);
    let pivot = a[right];
    let mut left = 0;
    for i in 0..right {
        if a[i] < pivot {
            a.swap(left, i);
            left += 1;
        }
    }
    a.swap(left, right);
    left
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn check_sorts(mut data: Vec<u32>, threshold: usize) {
        let mut expected = data.clone();
        expected.sort_unstable();
        sort(&mut data, threshold);
        assert_eq!(data, expected);
    }

    #[test]
    fn sorts_random_buffers() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for len in [2usize, 3, 5, 17, 100, 1024, ALPHABET_LEN] {
            let data: Vec<u32> = (0..len).map(|_| rng.gen()).collect();
            check_sorts(data, usize::MAX);
        }
    }

    #[test]
    fn sorts_with_parallel_spawns() {
        // A tiny threshold forces the rayon path on nearly every subrange.
        let mut rng = StdRng::seed_from_u64(0xfeed);
        let data: Vec<u32> = (0..ALPHABET_LEN).map(|_| rng.gen()).collect();
        check_sorts(data, 8);
    }

    #[test]
    fn sorts_degenerate_inputs() {
        check_sorts(vec![], 16);
        check_sorts(vec![7], 16);
        check_sorts(vec![2, 1], 16);
        check_sorts(vec![3, 3, 3, 3, 3], 16);
        check_sorts((0..500u32).collect(), 16);
        check_sorts((0..500u32).rev().collect(), 16);
    }

    #[test]
    fn sorts_heavy_duplicates() {
        let mut rng = StdRng::seed_from_u64(42);
        let data: Vec<u32> = (0..4096).map(|_| rng.gen_range(0..8)).collect();
        check_sorts(data, 64);
    }

    #[test]
    fn threshold_policy() {
        assert_eq!(parallel_threshold(1), 1 << 20);
        assert_eq!(parallel_threshold(2), 1 << 20);
        assert_eq!(parallel_threshold(4), ALPHABET_LEN / 4);
        assert_eq!(parallel_threshold(8), ALPHABET_LEN / 8);
        assert_eq!(parallel_threshold(15), ALPHABET_LEN / 15);
        assert_eq!(parallel_threshold(16), 2048);
        assert_eq!(parallel_threshold(64), 2048);
    }
}
