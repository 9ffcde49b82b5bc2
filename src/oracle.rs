//! Reference check used to validate the machine's verdicts.

use crate::encoder::bit_length;

/// Returns whether the binary digits of `n` read the same in both directions.
/// Leading zeros are not part of the representation; zero is the single digit `0`.
pub fn is_binary_palindrome(n: u64) -> bool {
    let digits = bit_length(n) as u32;
    n.reverse_bits() >> (u64::BITS - digits) == n
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Digit-by-digit comparison of the two ends.
    fn naive(n: u64) -> bool {
        let digits = bit_length(n);
        (0..digits / 2).all(|i| (n >> i) & 1 == (n >> (digits - i - 1)) & 1)
    }

    #[test]
    fn test_known_values() {
        assert!(is_binary_palindrome(0));
        assert!(is_binary_palindrome(1));
        assert!(is_binary_palindrome(9));
        assert!(is_binary_palindrome(7));
        assert!(!is_binary_palindrome(10));
        assert!(!is_binary_palindrome(6));
        assert!(is_binary_palindrome(u64::MAX));
        assert!(!is_binary_palindrome(u64::MAX - 1));
    }

    #[test]
    fn test_matches_naive_check() {
        for n in 0..=0xffff_u64 {
            assert_eq!(is_binary_palindrome(n), naive(n), "input {}", n);
        }
    }
}
