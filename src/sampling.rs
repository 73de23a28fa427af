//! Drawing single random sequences without enumerating.
use rand::{Rng, seq::index};

use crate::{
    SequenceSpec, Sequences,
    family::CodedFamily,
    sequences::project,
};

impl SequenceSpec {
    ///Draws one code that a full enumeration of family `F` would also produce.
    ///
    ///The length is picked uniformly from [`SequenceSpec::sizes`] and then the indices are
    ///drawn uniformly, so codes of shorter lengths are individually more likely when the range
    ///spans several sizes. Unordered families get their canonical, sorted, form.
    pub fn sample_code<F: CodedFamily>(&self, rng: &mut impl Rng) -> Vec<usize> {
        let size = rng.random_range(self.sizes());
        let mut code = if self.allow_duplicate_items() {
            (0..size)
                .map(|_| rng.random_range(0..self.item_count()))
                .collect::<Vec<_>>()
        } else {
            index::sample(rng, self.item_count(), size).into_vec()
        };
        if !F::ORDERED {
            code.sort_unstable();
        }
        code
    }
}

impl<'a, T, F: CodedFamily> Sequences<'a, T, F> {
    ///Draws one random sequence of items, see [`SequenceSpec::sample_code`].
    pub fn sample(&self, rng: &mut impl Rng) -> Vec<&'a T> {
        let code = self.spec().sample_code::<F>(rng);
        project(self.items(), &code)
    }
}

#[cfg(test)]
mod test {
    use ahash::HashSet;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::{
        CodedSequences,
        family::{Combinations, Permutations},
    };

    fn check_samples<F: CodedFamily>(spec: SequenceSpec) {
        let all: HashSet<Vec<usize>> = CodedSequences::<F>::new(spec).collect();
        let mut rng = ChaCha8Rng::seed_from_u64(32);
        for _ in 0..1_000 {
            let code = spec.sample_code::<F>(&mut rng);
            assert!(all.contains(&code), "{code:?} is never enumerated");
        }
    }

    #[test]
    fn samples_are_enumerated() -> anyhow::Result<()> {
        for allow_duplicate_items in [true, false] {
            let spec = SequenceSpec::new(5, allow_duplicate_items, 1, 4)?;
            check_samples::<Combinations>(spec);
            check_samples::<Permutations>(spec);
        }
        Ok(())
    }

    #[test]
    fn sample_items() -> anyhow::Result<()> {
        let items = ["one", "two", "three"];
        let perms = crate::permutations(&items, false, 3, 3)?;
        let mut rng = ChaCha8Rng::seed_from_u64(32);
        for _ in 0..100 {
            let mut sample = perms.sample(&mut rng);
            assert_eq!(sample.len(), 3);
            sample.sort_unstable();
            assert_eq!(sample, [&"one", &"three", &"two"]);
        }
        Ok(())
    }
}
