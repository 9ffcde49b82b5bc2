//! This module converts integers to and from their tape representation: binary digits,
//! most significant first, starting at position 0.

use crate::tape::Tape;
use crate::types::{Symbol, TAPE_SLACK};

/// Number of binary digits of `n`. Zero has a single digit.
pub fn bit_length(n: u64) -> usize {
    if n == 0 {
        1
    } else {
        (u64::BITS - n.leading_zeros()) as usize
    }
}

/// Writes the binary digits of `n` onto a fresh tape.
///
/// The tape holds `bit_length(n) + TAPE_SLACK` cells; everything past the digits is `Blank`.
pub fn encode(n: u64) -> Tape {
    let digits = bit_length(n);
    let mut tape = Tape::blank(digits + TAPE_SLACK);

    for i in 0..digits {
        let bit = (n >> (digits - i - 1)) & 1 == 1;
        tape.write(i as isize, Symbol::from_bit(bit));
    }

    tape
}

/// Reads the contiguous run of digits starting at position 0 back into an integer.
///
/// # Returns
///
/// * `Some(n)` if position 0 holds a digit and the run fits in a `u64`.
/// * `None` if position 0 is blank or the run is longer than 64 digits.
pub fn decode(tape: &Tape) -> Option<u64> {
    let bits: Vec<bool> = tape
        .cells()
        .iter()
        .map_while(|symbol| symbol.bit())
        .collect();

    if bits.is_empty() || bits.len() > u64::BITS as usize {
        return None;
    }

    Some(bits.iter().fold(0, |acc, &bit| (acc << 1) | u64::from(bit)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_length() {
        assert_eq!(bit_length(0), 1);
        assert_eq!(bit_length(1), 1);
        assert_eq!(bit_length(2), 2);
        assert_eq!(bit_length(7), 3);
        assert_eq!(bit_length(8), 4);
        assert_eq!(bit_length(0xffff), 16);
        assert_eq!(bit_length(u64::MAX), 64);
    }

    #[test]
    fn test_encode_msb_first() {
        assert_eq!(encode(9).to_string(), "1001__");
        assert_eq!(encode(6).to_string(), "110__");
        assert_eq!(encode(1).to_string(), "1__");
    }

    #[test]
    fn test_encode_zero_is_single_digit() {
        let tape = encode(0);
        assert_eq!(tape.to_string(), "0__");
        assert_eq!(tape.live_count(), 1);
    }

    #[test]
    fn test_encode_u64_max() {
        let tape = encode(u64::MAX);
        assert_eq!(tape.len(), 64 + TAPE_SLACK);
        assert_eq!(tape.live_count(), 64);
    }

    #[test]
    fn test_decode() {
        for n in [0, 1, 6, 9, 10, 0xffff, u64::MAX] {
            assert_eq!(decode(&encode(n)), Some(n));
        }
        assert_eq!(decode(&Tape::blank(3)), None);
    }

    #[test]
    fn test_decode_stops_at_blank() {
        let tape = Tape::from_symbols(vec![
            Symbol::One,
            Symbol::Zero,
            Symbol::Blank,
            Symbol::One,
        ]);
        assert_eq!(decode(&tape), Some(2));
    }
}
