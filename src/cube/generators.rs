use super::{Color, CubeState, Slot, Subgroup};
use crate::moves::Word;
use crate::perm::Permutation;

/// The permutations of the six face turns over one subgroup of slots.
///
/// Built once and passed to whatever needs to turn words into permutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generators {
    subgroup: Subgroup,
    perms: [Permutation<Slot>; 6],
}

impl Generators {
    /// Compute the generators by turning each face of a solved cube.
    pub fn new(subgroup: Subgroup) -> Self {
        let perms = Color::ALL.map(|c| CubeState::solved().act(c).permutation(subgroup));
        Generators { subgroup, perms }
    }

    /// The subgroup these generators act on.
    pub fn subgroup(&self) -> Subgroup {
        self.subgroup
    }

    /// The permutation of a single quarter turn.
    pub fn get(&self, color: Color) -> &Permutation<Slot> {
        &self.perms[color as usize]
    }

    /// The permutation of a word: its letters' generators composed in order.
    pub fn word(&self, word: &Word) -> Permutation<Slot> {
        word.iter()
            .fold(Permutation::identity(), |p, c| p.compose(self.get(c)))
    }

    /// Iterate over `(color, generator)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &Permutation<Slot>)> {
        Color::ALL.into_iter().zip(self.perms.iter())
    }
}

impl Default for Generators {
    fn default() -> Self {
        Self::new(Subgroup::Whole)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::perm::tests::normalized;

    use proptest::collection::vec;
    use proptest::prelude::*;

    #[test]
    fn generator_cycles() {
        let gens = Generators::default();
        let cases: [(Color, [[Slot; 4]; 2]); 6] = [
            (Color::O, [[1, 2, 3, 4], [9, 10, 11, 12]]),
            (Color::B, [[1, 5, 6, 2], [9, 13, 17, 14]]),
            (Color::Y, [[1, 4, 8, 5], [12, 16, 20, 13]]),
            (Color::G, [[3, 7, 8, 4], [11, 15, 19, 16]]),
            (Color::W, [[2, 6, 7, 3], [10, 14, 18, 15]]),
            (Color::R, [[5, 8, 7, 6], [17, 20, 19, 18]]),
        ];

        for (c, cycles) in cases {
            let expected = Permutation::from_cycles(cycles).unwrap();
            assert_eq!(gens.get(c), &expected, "generator {c:?}");
            assert_eq!(
                normalized(gens.get(c).cycles()),
                normalized(cycles.map(Vec::from).to_vec())
            );
        }

        let vertex = Generators::new(Subgroup::Vertex);
        assert_eq!(vertex.subgroup(), Subgroup::Vertex);
        assert_eq!(
            vertex.get(Color::O),
            &Permutation::from_cycle(&[1, 2, 3, 4]).unwrap()
        );
    }

    #[test]
    fn word_composes_in_order() {
        let gens = Generators::default();
        let r = gens.get(Color::R);
        let b = gens.get(Color::B);
        let expected = r.compose(r).compose(r).compose(b).compose(r);
        assert_eq!(gens.word(&"RRRBR".parse().unwrap()), expected);
        assert_eq!(gens.word(&Word::new()), Permutation::identity());
        assert_eq!(gens.iter().count(), 6);
    }

    proptest! {
        #[test]
        fn word_matches_turning(mvs in vec(any::<Color>(), 0..30).prop_map(Word)) {
            for subgroup in [Subgroup::Whole, Subgroup::Vertex] {
                let gens = Generators::new(subgroup);
                let mut cube = CubeState::solved();
                cube.apply_word(&mvs);
                prop_assert_eq!(gens.word(&mvs), cube.permutation(subgroup));
            }
        }

        #[test]
        fn simplify_and_inverse(mvs in vec(any::<Color>(), 0..30).prop_map(Word)) {
            let gens = Generators::default();
            let p = gens.word(&mvs);
            prop_assert_eq!(gens.word(&mvs.clone().simplify()), p.clone());
            prop_assert_eq!(gens.word(&mvs.inverse()), p.inverse());
        }

        #[test]
        fn halves_share_parity(mvs in vec(any::<Color>(), 0..30).prop_map(Word)) {
            let p = Generators::default().word(&mvs);
            let vertex = Generators::new(Subgroup::Vertex).word(&mvs);
            let edge = vertex.inverse().compose(&p);
            prop_assert_eq!(vertex.is_even(), edge.is_even());
            prop_assert!(p.is_even());
        }
    }
}
