//! Checked counting helpers used to size an enumeration up front.

///`n * (n - 1) * ... * (n - k + 1)`, or `None` on overflow.
pub(crate) fn falling_factorial(n: u128, k: u128) -> Option<u128> {
    if k > n {
        return Some(0);
    }
    (0..k).try_fold(1u128, |acc, i| acc.checked_mul(n - i))
}

///The binomial coefficient `n choose k`, or `None` on overflow.
pub(crate) fn binomial(n: u128, k: u128) -> Option<u128> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    // Each partial product is itself a binomial coefficient, so the division is exact.
    (0..k).try_fold(1u128, |acc, i| Some(acc.checked_mul(n - i)? / (i + 1)))
}

///`n ^ k`, or `None` on overflow.
pub(crate) fn power(n: u128, k: usize) -> Option<u128> {
    n.checked_pow(u32::try_from(k).ok()?)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn small_counts() {
        assert_eq!(falling_factorial(5, 3), Some(60));
        assert_eq!(falling_factorial(5, 5), Some(120));
        assert_eq!(falling_factorial(3, 4), Some(0));
        assert_eq!(binomial(5, 2), Some(10));
        assert_eq!(binomial(7, 3), Some(35));
        assert_eq!(binomial(7, 0), Some(1));
        assert_eq!(binomial(2, 3), Some(0));
        assert_eq!(power(3, 2), Some(9));
        assert_eq!(power(3, 0), Some(1));
    }

    #[test]
    fn overflow_is_reported() {
        assert_eq!(falling_factorial(200, 100), None);
        assert_eq!(power(2, 128), None);
        assert_eq!(power(2, 127), Some(1u128 << 127));
        assert!(binomial(200, 100).is_none());
    }
}
