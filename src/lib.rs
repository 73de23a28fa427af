//! Lazy enumeration of combinations and permutations.
//!
//! Every enumeration is described by a [`SequenceSpec`]: a pool of `item_count` items, an
//! inclusive range of sequence lengths, and whether one item may appear more than once in a
//! sequence. A [`CodedSequences`] walks that space one code (a `Vec` of item indices) at a time,
//! in the canonical order of its [`CodedFamily`], and [`Sequences`] maps those codes back onto a
//! slice of real items.
//!
//! ```
//! use coded_sequences::permutations;
//!
//! let letters = ['a', 'b', 'c'];
//! let words: Vec<String> = permutations(&letters, true, 2, 2)?
//!     .iter()
//!     .map(|w| w.into_iter().collect())
//!     .collect();
//! assert_eq!(words.len(), 9);
//! assert_eq!(words[..4], ["aa", "ab", "ac", "ba"]);
//! # Ok::<(), coded_sequences::InvalidSpec>(())
//! ```
//!
//! Enumerations are single threaded and single pass. Separate iterators share no state, so they
//! may run on separate threads.

pub mod coded;
pub mod config;
pub mod error;
pub mod family;
#[cfg(feature = "sampling")]
mod sampling;
pub mod sequences;
pub mod spec;
mod utils;

pub use coded::{AnyCodedSequences, CodedGenerator, CodedSequences};
pub use config::EnumerationConfig;
pub use error::{Exhausted, InvalidSpec};
pub use family::{CodedFamily, Combinations, FamilyKind, Permutations};
pub use sequences::{Sequences, SequencesIter, combinations, permutations};
pub use spec::SequenceSpec;
