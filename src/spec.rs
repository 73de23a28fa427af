//! The parameters of an enumeration, validated once and immutable afterwards.
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::{error::InvalidSpec, family::CodedFamily};

///Which sequences an enumeration produces: the pool size, the inclusive range of sequence
///lengths, and whether one index may appear more than once in a sequence.
///
///A [`SequenceSpec`] can only be built through [`SequenceSpec::new`], [`SequenceSpec::full`] or
///deserialization, all of which reject parameters that could never be enumerated.
///
///```
///use coded_sequences::{InvalidSpec, SequenceSpec};
///
///let spec = SequenceSpec::new(5, false, 2, 3)?;
///assert_eq!(spec.sizes(), 2..=3);
///assert_eq!(
///    SequenceSpec::new(3, false, 2, 4),
///    Err(InvalidSpec::NotEnoughItems { max_size: 4, item_count: 3 })
///);
///# Ok::<(), InvalidSpec>(())
///```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSequenceSpec")]
pub struct SequenceSpec {
    item_count: usize,
    allow_duplicate_items: bool,
    min_size: usize,
    max_size: usize,
}

impl SequenceSpec {
    ///Validates and builds a specification.
    pub fn new(
        item_count: usize,
        allow_duplicate_items: bool,
        min_size: usize,
        max_size: usize,
    ) -> Result<Self, InvalidSpec> {
        if item_count == 0 {
            return Err(InvalidSpec::NoItems);
        }
        if min_size == 0 {
            return Err(InvalidSpec::ZeroMinSize);
        }
        if max_size < min_size {
            return Err(InvalidSpec::MaxBelowMin { min_size, max_size });
        }
        if !allow_duplicate_items && max_size > item_count {
            return Err(InvalidSpec::NotEnoughItems {
                max_size,
                item_count,
            });
        }
        Ok(SequenceSpec {
            item_count,
            allow_duplicate_items,
            min_size,
            max_size,
        })
    }

    ///A specification which only enumerates sequences as long as the whole pool.
    pub fn full(item_count: usize, allow_duplicate_items: bool) -> Result<Self, InvalidSpec> {
        SequenceSpec::new(item_count, allow_duplicate_items, item_count, item_count)
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    #[must_use]
    pub fn allow_duplicate_items(&self) -> bool {
        self.allow_duplicate_items
    }

    #[must_use]
    pub fn min_size(&self) -> usize {
        self.min_size
    }

    #[must_use]
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    ///Every sequence length the enumeration goes through, in order.
    #[must_use]
    pub fn sizes(&self) -> RangeInclusive<usize> {
        self.min_size..=self.max_size
    }

    ///The number of sequences of length `size` family `F` produces under this spec. Sizes outside
    ///of [`SequenceSpec::sizes`] produce nothing. Returns `None` if the count doesn't fit in a
    ///`u128`.
    #[must_use]
    pub fn count_for_size<F: CodedFamily>(&self, size: usize) -> Option<u128> {
        if self.sizes().contains(&size) {
            F::count(self, size)
        } else {
            Some(0)
        }
    }

    ///The number of sequences a full enumeration of family `F` produces, across every size.
    #[must_use]
    pub fn count<F: CodedFamily>(&self) -> Option<u128> {
        self.sizes()
            .try_fold(0u128, |acc, size| acc.checked_add(F::count(self, size)?))
    }
}

///The wire shape of a [`SequenceSpec`]. Omitted bounds default to `item_count`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSequenceSpec {
    item_count: usize,
    #[serde(default)]
    allow_duplicate_items: bool,
    min_size: Option<usize>,
    max_size: Option<usize>,
}

impl TryFrom<RawSequenceSpec> for SequenceSpec {
    type Error = InvalidSpec;

    fn try_from(value: RawSequenceSpec) -> Result<Self, Self::Error> {
        SequenceSpec::new(
            value.item_count,
            value.allow_duplicate_items,
            value.min_size.unwrap_or(value.item_count),
            value.max_size.unwrap_or(value.item_count),
        )
    }
}
