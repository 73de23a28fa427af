use crate::{
    SequenceSpec,
    family::CodedFamily,
    utils::{falling_factorial, power},
};

///Sequences where the order of items matters.
///
///Codes of one length are stepped like an odometer in base `item_count`, so they come out in
///increasing lexicographic order. The odometer itself visits codes with repeated indices; when
///the spec forbids duplicates those are skipped by [`crate::CodedSequences`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Permutations;

impl CodedFamily for Permutations {
    const NAME: &'static str = "permutations";
    const ORDERED: bool = true;
    const MAY_REPEAT: bool = true;

    fn increment(spec: &SequenceSpec, code: &mut [usize]) -> bool {
        let max_index = spec.item_count() - 1;
        for slot in code.iter_mut().rev() {
            if *slot < max_index {
                *slot += 1;
                return true;
            }
            *slot = 0;
        }
        false
    }

    fn count(spec: &SequenceSpec, size: usize) -> Option<u128> {
        let n = u128::try_from(spec.item_count()).ok()?;
        if spec.allow_duplicate_items() {
            power(n, size)
        } else {
            falling_factorial(n, u128::try_from(size).ok()?)
        }
    }
}
