//! Lazy enumeration of raw index codes across a range of sizes.
use std::{iter::FusedIterator, marker::PhantomData};

use tracing::trace;

use crate::{
    SequenceSpec,
    error::{Exhausted, InvalidSpec},
    family::{CodedFamily, Combinations, FamilyKind, Permutations},
};

///A single pass over every code of family `F` allowed by a [`SequenceSpec`].
///
///Sizes are visited from `min_size` to `max_size`, each one fully before the next, and within a
///size codes follow the family's canonical order. Every returned code is a fresh `Vec`, so
///holding on to it is unaffected by further iteration. The iterator can't be rewound: build a
///new one (or use a [`CodedGenerator`]) to enumerate again.
///
///```
///use coded_sequences::{CodedSequences, Permutations, SequenceSpec};
///
///let spec = SequenceSpec::new(3, false, 2, 2)?;
///let codes: Vec<_> = CodedSequences::<Permutations>::new(spec).collect();
///assert_eq!(
///    codes,
///    [[0, 1], [0, 2], [1, 0], [1, 2], [2, 0], [2, 1]]
///);
///# Ok::<(), coded_sequences::InvalidSpec>(())
///```
#[derive(Debug)]
pub struct CodedSequences<F> {
    spec: SequenceSpec,
    code: Vec<usize>,
    sorted: Vec<usize>,
    current_size: usize,
    done: bool,
    family: PhantomData<fn() -> F>,
}

impl<F: CodedFamily> CodedSequences<F> {
    #[must_use]
    pub fn new(spec: SequenceSpec) -> Self {
        let current_size = spec.min_size();
        CodedSequences {
            code: F::initial_code(&spec, current_size),
            spec,
            sorted: Vec::new(),
            current_size,
            done: false,
            family: PhantomData,
        }
    }

    #[must_use]
    pub fn spec(&self) -> &SequenceSpec {
        &self.spec
    }

    ///The length of the codes currently being produced. Once the iterator is exhausted this is
    ///`max_size + 1`.
    #[must_use]
    pub fn current_size(&self) -> usize {
        self.current_size
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        !self.done
    }

    ///Returns the next code, or [`Exhausted`] once every code has been produced.
    pub fn try_next(&mut self) -> Result<Vec<usize>, Exhausted> {
        if self.done {
            return Err(Exhausted);
        }
        let result = self.code.clone();
        if !self.advance() {
            self.next_size();
        }
        Ok(result)
    }

    fn advance(&mut self) -> bool {
        let skip_repeats = F::MAY_REPEAT && !self.spec.allow_duplicate_items();
        loop {
            if !F::increment(&self.spec, &mut self.code) {
                return false;
            }
            if !skip_repeats || !self.has_repeated_index() {
                return true;
            }
        }
    }

    ///Works on a sorted copy of the code so the cost depends on its length, not the pool size.
    fn has_repeated_index(&mut self) -> bool {
        self.sorted.clone_from(&self.code);
        self.sorted.sort_unstable();
        self.sorted.windows(2).any(|w| w[0] == w[1])
    }

    fn next_size(&mut self) {
        trace!(family = F::NAME, size = self.current_size, "exhausted size");
        self.current_size += 1;
        if self.current_size > self.spec.max_size() {
            trace!(
                family = F::NAME,
                item_count = self.spec.item_count(),
                max_size = self.spec.max_size(),
                "enumeration complete"
            );
            self.done = true;
            self.code.clear();
        } else {
            self.code = F::initial_code(&self.spec, self.current_size);
        }
    }
}

impl<F: CodedFamily> Iterator for CodedSequences<F> {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::from(!self.done), None)
    }
}

impl<F: CodedFamily> FusedIterator for CodedSequences<F> {}

///A reusable source of [`CodedSequences`]: each call to [`CodedGenerator::iter`] starts a new
///enumeration from the beginning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodedGenerator<F> {
    spec: SequenceSpec,
    family: PhantomData<fn() -> F>,
}

impl<F: CodedFamily> CodedGenerator<F> {
    ///Validates the parameters and builds a generator, see [`SequenceSpec::new`].
    pub fn new(
        item_count: usize,
        allow_duplicate_items: bool,
        min_size: usize,
        max_size: usize,
    ) -> Result<Self, InvalidSpec> {
        Ok(SequenceSpec::new(item_count, allow_duplicate_items, min_size, max_size)?.into())
    }

    ///A generator of codes as long as the whole pool, see [`SequenceSpec::full`].
    pub fn full(item_count: usize, allow_duplicate_items: bool) -> Result<Self, InvalidSpec> {
        Ok(SequenceSpec::full(item_count, allow_duplicate_items)?.into())
    }

    #[must_use]
    pub fn spec(&self) -> &SequenceSpec {
        &self.spec
    }

    #[must_use]
    pub fn iter(&self) -> CodedSequences<F> {
        CodedSequences::new(self.spec)
    }
}

impl<F: CodedFamily> From<SequenceSpec> for CodedGenerator<F> {
    fn from(spec: SequenceSpec) -> Self {
        CodedGenerator {
            spec,
            family: PhantomData,
        }
    }
}

impl<F: CodedFamily> IntoIterator for &CodedGenerator<F> {
    type Item = Vec<usize>;
    type IntoIter = CodedSequences<F>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

///[`CodedSequences`] over a family picked at runtime.
#[derive(Debug)]
pub enum AnyCodedSequences {
    Combinations(CodedSequences<Combinations>),
    Permutations(CodedSequences<Permutations>),
}

impl AnyCodedSequences {
    #[must_use]
    pub fn new(family: FamilyKind, spec: SequenceSpec) -> Self {
        match family {
            FamilyKind::Combinations => AnyCodedSequences::Combinations(CodedSequences::new(spec)),
            FamilyKind::Permutations => AnyCodedSequences::Permutations(CodedSequences::new(spec)),
        }
    }

    #[must_use]
    pub fn family(&self) -> FamilyKind {
        match self {
            AnyCodedSequences::Combinations(_) => FamilyKind::Combinations,
            AnyCodedSequences::Permutations(_) => FamilyKind::Permutations,
        }
    }

    #[must_use]
    pub fn spec(&self) -> &SequenceSpec {
        match self {
            AnyCodedSequences::Combinations(c) => c.spec(),
            AnyCodedSequences::Permutations(p) => p.spec(),
        }
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        match self {
            AnyCodedSequences::Combinations(c) => c.has_next(),
            AnyCodedSequences::Permutations(p) => p.has_next(),
        }
    }

    ///See [`CodedSequences::try_next`].
    pub fn try_next(&mut self) -> Result<Vec<usize>, Exhausted> {
        match self {
            AnyCodedSequences::Combinations(c) => c.try_next(),
            AnyCodedSequences::Permutations(p) => p.try_next(),
        }
    }
}

impl Iterator for AnyCodedSequences {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            AnyCodedSequences::Combinations(c) => c.size_hint(),
            AnyCodedSequences::Permutations(p) => p.size_hint(),
        }
    }
}

impl FusedIterator for AnyCodedSequences {}
