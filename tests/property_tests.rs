use cipherforge::alphabet::ALPHABET_LEN;
use cipherforge::mapping::Mapping;
use cipherforge::model::NgramModel;
use cipherforge::scorer::{NgramWeights, Scorer};
use proptest::prelude::*;
use std::sync::Arc;

fn is_bijection(m: &Mapping) -> bool {
    let mut seen = [false; ALPHABET_LEN];
    for i in 0..ALPHABET_LEN {
        let img = m.image_of(i);
        if seen[img] {
            return false;
        }
        seen[img] = true;
    }
    true
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn repeated_swaps_preserve_bijectivity(
        seed in any::<u64>(),
        swaps in proptest::collection::vec((0usize..26, 0usize..26), 0..200)
    ) {
        let mut rng = fastrand::Rng::with_seed(seed);
        let mut m = Mapping::random(&mut rng);
        for (a, b) in swaps {
            m.swap(a, b);
            prop_assert!(is_bijection(&m));
        }
    }

    #[test]
    fn apply_then_inverse_is_identity(
        seed in any::<u64>(),
        text in ".*"
    ) {
        let mut rng = fastrand::Rng::with_seed(seed);
        let m = Mapping::random(&mut rng);
        prop_assert_eq!(m.invert().apply(&m.apply(&text)), text);
    }

    #[test]
    fn identity_mapping_is_a_fixed_point(text in ".*") {
        prop_assert_eq!(Mapping::identity().apply(&text), text);
    }

    #[test]
    fn score_is_finite_and_stable(text in ".{0,400}") {
        let scorer = Scorer::new(Arc::new(NgramModel::reference()), NgramWeights::default());
        let first = scorer.score(&text);
        prop_assert!(first.is_finite());
        prop_assert_eq!(scorer.score(&text), first);
    }
}
