//! Errors raised while building or draining a sequence enumeration.
use thiserror::Error;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Hash)]
///A [`crate::SequenceSpec`] was given parameters it can never enumerate.
pub enum InvalidSpec {
    ///The item pool is empty.
    #[error("item_count must be greater than zero")]
    NoItems,
    ///Sequences must have at least one item.
    #[error("min_size must be greater than zero")]
    ZeroMinSize,
    ///The size range is empty.
    #[error("max_size ({max_size}) must be greater than or equal to min_size ({min_size})")]
    MaxBelowMin {
        ///Requested minimum size.
        min_size: usize,
        ///Requested maximum size.
        max_size: usize,
    },
    ///Without duplicates a sequence can't be longer than the pool.
    #[error(
        "without duplicate items, max_size ({max_size}) must be less than or equal to item_count ({item_count})"
    )]
    NotEnoughItems {
        ///Requested maximum size.
        max_size: usize,
        ///Size of the item pool.
        item_count: usize,
    },
}

///Asked for another sequence after the enumeration finished.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Hash, Default)]
#[error("the enumeration has no more sequences")]
pub struct Exhausted;
