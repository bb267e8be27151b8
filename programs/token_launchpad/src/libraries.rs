use num_integer::Integer;

/// `self * num / denom` without intermediate overflow
pub trait MulDiv<RHS = Self> {
    type Output;

    fn mul_div_floor(self, num: RHS, denom: RHS) -> Option<Self::Output>;

    fn mul_div_ceil(self, num: RHS, denom: RHS) -> Option<Self::Output>;
}

impl MulDiv for u64 {
    type Output = u64;

    fn mul_div_floor(self, num: u64, denom: u64) -> Option<u64> {
        if denom == 0 {
            return None;
        }
        let r = (self as u128).checked_mul(num as u128)? / denom as u128;
        u64::try_from(r).ok()
    }

    fn mul_div_ceil(self, num: u64, denom: u64) -> Option<u64> {
        if denom == 0 {
            return None;
        }
        let r = Integer::div_ceil(&(self as u128).checked_mul(num as u128)?, &(denom as u128));
        u64::try_from(r).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_and_ceil() {
        assert_eq!(10u64.mul_div_floor(1, 3), Some(3));
        assert_eq!(10u64.mul_div_ceil(1, 3), Some(4));
        assert_eq!(9u64.mul_div_ceil(1, 3), Some(3));
    }

    #[test]
    fn test_no_intermediate_overflow() {
        assert_eq!(u64::MAX.mul_div_floor(u64::MAX, u64::MAX), Some(u64::MAX));
        assert_eq!(u64::MAX.mul_div_floor(2, 1), None);
    }

    #[test]
    fn test_zero_denominator() {
        assert_eq!(1u64.mul_div_floor(1, 0), None);
        assert_eq!(1u64.mul_div_ceil(1, 0), None);
    }
}
