use crate::{SequenceSpec, family::CodedFamily, utils::binomial};

///Sequences where the order of items doesn't matter.
///
///Every selection is produced once, in its canonical form: strictly ascending indices when
///duplicates are forbidden and non-decreasing ones when they are allowed. Codes of one length
///come out in increasing lexicographic order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Combinations;

impl CodedFamily for Combinations {
    const NAME: &'static str = "combinations";
    const ORDERED: bool = false;
    const MAY_REPEAT: bool = false;

    fn increment(spec: &SequenceSpec, code: &mut [usize]) -> bool {
        let max_index = spec.item_count() - 1;
        let size = code.len();
        let allow_duplicates = spec.allow_duplicate_items();

        // Increase from right to left.
        for i in (0..size).rev() {
            // Without duplicates each position right of `i` needs its own, larger, index.
            let limit = if allow_duplicates {
                max_index
            } else {
                max_index.saturating_sub(size - 1 - i)
            };
            if code[i] < limit {
                code[i] += 1;
                let start = code[i];
                for (offset, slot) in code[i + 1..].iter_mut().enumerate() {
                    *slot = if allow_duplicates {
                        start
                    } else {
                        start + offset + 1
                    };
                }
                return true;
            }
        }
        false
    }

    fn count(spec: &SequenceSpec, size: usize) -> Option<u128> {
        let n = u128::try_from(spec.item_count()).ok()?;
        let k = u128::try_from(size).ok()?;
        if spec.allow_duplicate_items() {
            // Multisets of size k drawn from n items.
            binomial((n + k).checked_sub(1)?, k)
        } else {
            binomial(n, k)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn all_codes(spec: &SequenceSpec, size: usize) -> Vec<Vec<usize>> {
        let mut code = Combinations::initial_code(spec, size);
        let mut codes = vec![code.clone()];
        while Combinations::increment(spec, &mut code) {
            codes.push(code.clone());
        }
        codes
    }

    #[test]
    fn ascending_refill() -> anyhow::Result<()> {
        let spec = SequenceSpec::new(5, false, 3, 3)?;
        let mut code = vec![0, 1, 4];
        assert!(Combinations::increment(&spec, &mut code));
        assert_eq!(code, [0, 2, 3]);

        //The refill past 4 is impossible, so position 0 is the one to move.
        let mut code = vec![0, 3, 4];
        assert!(Combinations::increment(&spec, &mut code));
        assert_eq!(code, [1, 2, 3]);

        let mut code = vec![2, 3, 4];
        assert!(!Combinations::increment(&spec, &mut code));
        Ok(())
    }

    #[test]
    fn without_duplicates() -> anyhow::Result<()> {
        let spec = SequenceSpec::new(5, false, 3, 3)?;
        let codes = all_codes(&spec, 3);
        assert_eq!(codes.len(), 10);
        assert_eq!(codes.first(), Some(&vec![0, 1, 2]));
        assert_eq!(codes.last(), Some(&vec![2, 3, 4]));
        assert!(codes.windows(2).all(|w| w[0] < w[1]));
        assert!(codes.iter().all(|c| c.windows(2).all(|w| w[0] < w[1])));
        Ok(())
    }

    #[test]
    fn with_duplicates() -> anyhow::Result<()> {
        let spec = SequenceSpec::new(3, true, 2, 2)?;
        assert_eq!(
            all_codes(&spec, 2),
            [
                vec![0, 0],
                vec![0, 1],
                vec![0, 2],
                vec![1, 1],
                vec![1, 2],
                vec![2, 2]
            ]
        );

        let spec = SequenceSpec::new(2, true, 4, 4)?;
        assert_eq!(all_codes(&spec, 4).len(), 5);
        Ok(())
    }

    #[test]
    fn single_item_pool() -> anyhow::Result<()> {
        let spec = SequenceSpec::new(1, true, 1, 3)?;
        assert_eq!(all_codes(&spec, 3), [vec![0, 0, 0]]);
        assert_eq!(Combinations::count(&spec, 3), Some(1));
        Ok(())
    }
}
