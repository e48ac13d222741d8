//! Shuffle order generation
//!
//! The session never reorders the playlist itself. It traverses a separate
//! permutation of indices instead.

use rand::Rng;

/// Build a uniformly random permutation of `0..len` (Fisher-Yates)
pub fn shuffled_order<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();

    for i in (1..len).rev() {
        let j = rng.gen_range(0..=i);
        order.swap(i, j);
    }

    order
}

/// Check that `order` holds every index of `0..len` exactly once
pub fn is_permutation(order: &[usize], len: usize) -> bool {
    if order.len() != len {
        return false;
    }

    let mut seen = vec![false; len];
    for &index in order {
        match seen.get_mut(index) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    #[test]
    fn empty_and_single() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(shuffled_order(0, &mut rng).is_empty());
        assert_eq!(shuffled_order(1, &mut rng), vec![0]);
    }

    #[test]
    fn produces_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        for len in 0..64 {
            let order = shuffled_order(len, &mut rng);
            assert!(is_permutation(&order, len), "not a permutation: {:?}", order);
        }
    }

    #[test]
    fn same_seed_same_order() {
        let a = shuffled_order(20, &mut StdRng::seed_from_u64(7));
        let b = shuffled_order(20, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn every_permutation_of_three_appears_evenly() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut counts: HashMap<Vec<usize>, usize> = HashMap::new();
        let draws = 60_000;

        for _ in 0..draws {
            *counts.entry(shuffled_order(3, &mut rng)).or_default() += 1;
        }

        // 6 permutations, 10_000 expected each
        assert_eq!(counts.len(), 6);
        for (order, count) in counts {
            assert!(
                (9_000..=11_000).contains(&count),
                "permutation {:?} drawn {} times",
                order,
                count
            );
        }
    }

    #[test]
    fn rejects_non_permutations() {
        assert!(!is_permutation(&[0, 0, 2], 3));
        assert!(!is_permutation(&[0, 1], 3));
        assert!(!is_permutation(&[0, 1, 3], 3));
        assert!(is_permutation(&[2, 0, 1], 3));
    }
}
