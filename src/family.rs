//! The two families of coded generators. A family only knows how to step a code of fixed length
//! to the next one in its canonical order; sizes and duplicate filtering are handled by
//! [`crate::CodedSequences`].
use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::SequenceSpec;

mod combinations;
mod permutations;

pub use combinations::Combinations;
pub use permutations::Permutations;

///A canonical ordering over codes of one length.
pub trait CodedFamily {
    ///A short name for logs, e.g. `"combinations"`.
    const NAME: &'static str;

    ///Whether two codes holding the same indices in a different order are distinct results.
    const ORDERED: bool;

    ///Whether [`CodedFamily::increment`] can step onto a code with a repeated index even when
    ///the spec forbids duplicates. Such codes are skipped by the iterator.
    const MAY_REPEAT: bool;

    ///The first code of length `size`: all zeros if duplicates are allowed, `0..size` otherwise.
    fn initial_code(spec: &SequenceSpec, size: usize) -> Vec<usize> {
        if spec.allow_duplicate_items() {
            vec![0; size]
        } else {
            (0..size).collect()
        }
    }

    ///Steps `code` to the next code of the same length. Returns `false` once every code of
    ///this length has been produced, in which case the contents of `code` are unspecified.
    fn increment(spec: &SequenceSpec, code: &mut [usize]) -> bool;

    ///How many codes of length `size` this family produces, or `None` on overflow.
    fn count(spec: &SequenceSpec, size: usize) -> Option<u128>;
}

///Runtime choice of a [`CodedFamily`], e.g. when it comes from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FamilyKind {
    ///See [`Combinations`].
    Combinations,
    ///See [`Permutations`].
    Permutations,
}

impl FamilyKind {
    #[must_use]
    pub fn ordered(self) -> bool {
        match self {
            FamilyKind::Combinations => Combinations::ORDERED,
            FamilyKind::Permutations => Permutations::ORDERED,
        }
    }

    ///See [`SequenceSpec::count`].
    #[must_use]
    pub fn count(self, spec: &SequenceSpec) -> Option<u128> {
        match self {
            FamilyKind::Combinations => spec.count::<Combinations>(),
            FamilyKind::Permutations => spec.count::<Permutations>(),
        }
    }
}

impl Display for FamilyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FamilyKind::Combinations => write!(f, "{}", Combinations::NAME),
            FamilyKind::Permutations => write!(f, "{}", Permutations::NAME),
        }
    }
}
