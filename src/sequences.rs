//! Enumeration over actual items instead of their indices.
use std::{iter::FusedIterator, marker::PhantomData};

use crate::{
    CodedSequences, SequenceSpec,
    error::{Exhausted, InvalidSpec},
    family::{CodedFamily, Combinations, Permutations},
};

///A reusable enumeration of sequences of borrowed items. The pool size is the length of the
///item slice.
///
///```
///use coded_sequences::combinations;
///
///let fruit = ["apple", "pear", "plum"];
///let pairs: Vec<Vec<&&str>> = combinations(&fruit, false, 2, 2)?.iter().collect();
///assert_eq!(
///    pairs,
///    [
///        [&"apple", &"pear"],
///        [&"apple", &"plum"],
///        [&"pear", &"plum"]
///    ]
///);
///# Ok::<(), coded_sequences::InvalidSpec>(())
///```
#[derive(Debug)]
pub struct Sequences<'a, T, F> {
    items: &'a [T],
    spec: SequenceSpec,
    family: PhantomData<fn() -> F>,
}

impl<'a, T, F: CodedFamily> Sequences<'a, T, F> {
    ///Validates the parameters against `items.len()`, see [`SequenceSpec::new`].
    pub fn new(
        items: &'a [T],
        allow_duplicate_items: bool,
        min_size: usize,
        max_size: usize,
    ) -> Result<Self, InvalidSpec> {
        let spec = SequenceSpec::new(items.len(), allow_duplicate_items, min_size, max_size)?;
        Ok(Sequences {
            items,
            spec,
            family: PhantomData,
        })
    }

    ///Sequences as long as the item slice.
    pub fn full(items: &'a [T], allow_duplicate_items: bool) -> Result<Self, InvalidSpec> {
        Sequences::new(items, allow_duplicate_items, items.len(), items.len())
    }

    #[must_use]
    pub fn items(&self) -> &'a [T] {
        self.items
    }

    #[must_use]
    pub fn spec(&self) -> &SequenceSpec {
        &self.spec
    }

    ///Starts a new pass over every sequence.
    #[must_use]
    pub fn iter(&self) -> SequencesIter<'a, T, F> {
        SequencesIter {
            items: self.items,
            codes: CodedSequences::new(self.spec),
        }
    }
}

impl<T, F> Clone for Sequences<'_, T, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, F> Copy for Sequences<'_, T, F> {}

impl<'a, T, F: CodedFamily> IntoIterator for &Sequences<'a, T, F> {
    type Item = Vec<&'a T>;
    type IntoIter = SequencesIter<'a, T, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

///A single pass over a [`Sequences`], mapping every code to the items it indexes.
#[derive(Debug)]
pub struct SequencesIter<'a, T, F> {
    items: &'a [T],
    codes: CodedSequences<F>,
}

impl<'a, T, F: CodedFamily> SequencesIter<'a, T, F> {
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.codes.has_next()
    }

    ///Returns the next sequence, or [`Exhausted`] once every sequence has been produced.
    pub fn try_next(&mut self) -> Result<Vec<&'a T>, Exhausted> {
        let code = self.codes.try_next()?;
        Ok(project(self.items, &code))
    }

    ///The underlying code enumeration.
    #[must_use]
    pub fn codes(&self) -> &CodedSequences<F> {
        &self.codes
    }
}

pub(crate) fn project<'a, T>(items: &'a [T], code: &[usize]) -> Vec<&'a T> {
    code.iter().map(|&i| &items[i]).collect()
}

impl<'a, T, F: CodedFamily> Iterator for SequencesIter<'a, T, F> {
    type Item = Vec<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.codes.size_hint()
    }
}

impl<T, F: CodedFamily> FusedIterator for SequencesIter<'_, T, F> {}

///Unordered selections of `items`, see [`Combinations`].
pub fn combinations<T>(
    items: &[T],
    allow_duplicate_items: bool,
    min_size: usize,
    max_size: usize,
) -> Result<Sequences<'_, T, Combinations>, InvalidSpec> {
    Sequences::new(items, allow_duplicate_items, min_size, max_size)
}

///Ordered arrangements of `items`, see [`Permutations`].
pub fn permutations<T>(
    items: &[T],
    allow_duplicate_items: bool,
    min_size: usize,
    max_size: usize,
) -> Result<Sequences<'_, T, Permutations>, InvalidSpec> {
    Sequences::new(items, allow_duplicate_items, min_size, max_size)
}
