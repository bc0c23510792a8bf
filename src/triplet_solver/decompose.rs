use super::Triplet;
use crate::cube::{Slot, Swap, VERTEX_SLOTS};
use crate::error::ParityError;
use crate::perm::Permutation;

/// Split the transpositions of `p` into those of corner slots and those of edge slots, keeping
/// their order.
///
/// Face turns never mix corners and edges, so each half composes to `p` restricted to its slots.
pub fn separate_swaps(p: &Permutation<Slot>) -> (Vec<Swap>, Vec<Swap>) {
    p.swaps()
        .into_iter()
        .partition(|(a, _)| VERTEX_SLOTS.contains(a))
}

/// Rewrite a list of transpositions as 3-cycles with the same product, two transpositions at a
/// time:
///
/// - `(a b)(c d)` with all four distinct is `(a c b)(b d c)`,
/// - two transpositions sharing one point make a single 3-cycle,
/// - a transposition followed by itself is dropped.
///
/// Fails if there is an odd number of transpositions.
pub fn swaps_to_triplets(swaps: &[Swap]) -> Result<Vec<Triplet>, ParityError> {
    if swaps.len() % 2 != 0 {
        return Err(ParityError { swaps: swaps.len() });
    }

    let mut triplets = Vec::with_capacity(swaps.len());
    for pair in swaps.chunks_exact(2) {
        let [(a, b), (c, d)] = [pair[0], pair[1]];
        match (a == c, a == d, b == c, b == d) {
            (true, _, _, true) | (_, true, true, _) => {}
            (true, _, _, _) => triplets.push([a, b, d]),
            (_, true, _, _) => triplets.push([a, b, c]),
            (_, _, true, _) => triplets.push([a, d, b]),
            (_, _, _, true) => triplets.push([a, c, b]),
            _ => {
                triplets.push([a, c, b]);
                triplets.push([b, d, c]);
            }
        }
    }

    Ok(triplets)
}

/// The 3-cycles whose product is `p`, corner cycles first.
///
/// Fails if `p` is odd on the corners or on the edges.
pub fn permutation_triplets(p: &Permutation<Slot>) -> Result<Vec<Triplet>, ParityError> {
    let (vertex, edge) = separate_swaps(p);
    let mut triplets = swaps_to_triplets(&vertex)?;
    triplets.extend(swaps_to_triplets(&edge)?);
    Ok(triplets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::perm::tests::any_permutation;

    use proptest::prelude::*;

    fn product(triplets: &[Triplet]) -> Permutation<Slot> {
        Permutation::identity().apply_cycles(triplets).unwrap()
    }

    fn swaps_product(swaps: &[Swap]) -> Permutation<Slot> {
        Permutation::identity()
            .apply_cycles(swaps.iter().map(|&(a, b)| [a, b]))
            .unwrap()
    }

    #[test]
    fn pairs_of_swaps() {
        let cases: [([Swap; 2], &[Triplet]); 7] = [
            ([(1, 2), (3, 4)], &[[1, 3, 2], [2, 4, 3]]),
            ([(1, 2), (1, 2)], &[]),
            ([(1, 2), (2, 1)], &[]),
            ([(1, 2), (1, 4)], &[[1, 2, 4]]),
            ([(1, 2), (3, 1)], &[[1, 2, 3]]),
            ([(1, 2), (2, 4)], &[[1, 4, 2]]),
            ([(1, 2), (3, 2)], &[[1, 3, 2]]),
        ];

        for (swaps, expected) in cases {
            let triplets = swaps_to_triplets(&swaps).unwrap();
            assert_eq!(triplets, expected, "{swaps:?}");
            assert_eq!(product(&triplets), swaps_product(&swaps), "{swaps:?}");
        }
    }

    #[test]
    fn odd_lists_fail() {
        assert_eq!(
            swaps_to_triplets(&[(1, 2), (3, 4), (5, 6)]),
            Err(ParityError { swaps: 3 })
        );
        assert_eq!(swaps_to_triplets(&[]), Ok(vec![]));

        let p = Permutation::from_cycles([[1, 2], [9, 10]]).unwrap();
        assert_eq!(permutation_triplets(&p), Err(ParityError { swaps: 1 }));
    }

    #[test]
    fn halves_kept_apart() {
        let p = Permutation::from_cycles([vec![1, 2, 3], vec![9, 10, 11, 12, 13]]).unwrap();
        let (vertex, edge) = separate_swaps(&p);
        assert_eq!(vertex.len(), 2);
        assert_eq!(edge.len(), 4);
        assert!(vertex.iter().all(|&(a, b)| a <= 8 && b <= 8));
        assert!(edge.iter().all(|&(a, b)| a > 8 && b > 8));

        let triplets = permutation_triplets(&p).unwrap();
        assert!(triplets[0].iter().all(|&s| s <= 8));
        assert_eq!(product(&triplets), p);
    }

    proptest! {
        #[test]
        fn swaps_rebuild(p in any_permutation(12)) {
            let swaps = p.swaps();
            match swaps_to_triplets(&swaps) {
                Ok(triplets) => prop_assert_eq!(product(&triplets), p),
                Err(e) => prop_assert!(!p.is_even() && e.swaps == swaps.len()),
            }
        }

        #[test]
        fn even_halves_rebuild(v in any_permutation(8), e in any_permutation(12)) {
            let e = Permutation::from_map_unchecked(
                e.mapping().map(|(&a, &b)| (a + 8, b + 8)).collect(),
            );
            let p = v.compose(&e);
            let triplets = permutation_triplets(&p);
            if v.is_even() && e.is_even() {
                prop_assert_eq!(product(&triplets.unwrap()), p);
            } else {
                prop_assert!(triplets.is_err());
            }
        }
    }
}
