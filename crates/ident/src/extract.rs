//! Digit and hex extraction from digests.
//!
//! These helpers turn a digest (or a random source) into the fixed-length bodies used by the IRI
//! scheme. They never fail; short values are left-padded with `0` and long values truncated.

use crate::DIGEST_LEN;
use ethnum::U256;
use rand::RngCore;

/// Number of characters in each underscore-separated digit group.
const GROUP_LEN: usize = 4;

/// Returns the first `len` decimal digits of `digest` read as an unsigned big-endian integer.
///
/// The decimal rendering is left-padded with `0` when it has fewer than `len` digits.
pub fn decimal_digits(digest: &[u8; DIGEST_LEN], len: usize) -> String {
    let decimal = U256::from_be_bytes(*digest).to_string();
    format!("{decimal:0>len$}").chars().take(len).collect()
}

/// Returns the first `len` characters of the lowercase hex encoding of `digest`.
pub fn hex_prefix(digest: &[u8], len: usize) -> String {
    let mut encoded = hex::encode(digest);
    encoded.truncate(len.min(encoded.len()));
    encoded
}

/// Returns `len` decimal digits drawn from `rng`.
///
/// Each draw is a random `u64` rendered in decimal, left-padded with `0` and truncated to `len`.
/// Providers pass the operating system's secure source here.
pub fn random_digits<R: RngCore + ?Sized>(rng: &mut R, len: usize) -> String {
    if len == 0 {
        return String::new();
    }
    loop {
        let value = rng.next_u64();
        let digits: String = format!("{value:0>len$}").chars().take(len).collect();
        if !digits.trim().is_empty() {
            return digits;
        }
    }
}

/// Splits `body` into groups of four characters joined by `_`.
///
/// A 16-digit body becomes `dddd_dddd_dddd_dddd`.
pub fn group_digits(body: &str) -> String {
    let chars: Vec<char> = body.chars().collect();
    chars
        .chunks(GROUP_LEN)
        .map(|group| group.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::OsRng;

    /// Places `value` in the low-order bytes of an otherwise zero digest.
    fn digest_from(value: u128) -> [u8; DIGEST_LEN] {
        let mut digest = [0u8; DIGEST_LEN];
        digest[16..].copy_from_slice(&value.to_be_bytes());
        digest
    }

    #[test]
    fn test_decimal_digits_takes_leading_digits() {
        let value: u128 = 12_345_678_901_234_567_890;
        assert_eq!(decimal_digits(&digest_from(value), 16), "1234567890123456");
        assert_eq!(
            decimal_digits(&digest_from(u128::MAX), 39),
            u128::MAX.to_string()
        );
    }

    #[test]
    fn test_decimal_digits_pads_short_values() {
        assert_eq!(decimal_digits(&digest_from(256), 16), "0000000000000256");
        assert_eq!(decimal_digits(&[0u8; DIGEST_LEN], 16), "0000000000000000");
    }

    #[test]
    fn test_decimal_digits_reads_big_endian() {
        let mut digest = [0u8; DIGEST_LEN];
        digest[0] = 0x01;
        // 2^248
        assert_eq!(decimal_digits(&digest, 16), "4523128485832663");
    }

    #[test]
    fn test_decimal_digits_full_digest_length() {
        let digest = [0xabu8; DIGEST_LEN];
        let digits = decimal_digits(&digest, 16);
        assert_eq!(digits.len(), 16);
        assert!(digits.bytes().all(|b| b.is_ascii_digit()));
    }

    #[test]
    fn test_hex_prefix() {
        let digest = [0xde, 0xad, 0xbe, 0xef, 0x01, 0x23];
        assert_eq!(hex_prefix(&digest, 8), "deadbeef");
        assert_eq!(hex_prefix(&digest, 3), "dea");
        assert_eq!(hex_prefix(&digest, 100), "deadbeef0123");
    }

    #[test]
    fn test_random_digits_shape() {
        for _ in 0..32 {
            let digits = random_digits(&mut OsRng, 16);
            assert_eq!(digits.len(), 16);
            assert!(digits.bytes().all(|b| b.is_ascii_digit()));
        }
        assert_eq!(random_digits(&mut OsRng, 0), "");
    }

    #[test]
    fn test_random_digits_pads_and_truncates() {
        let mut small = rand::rngs::mock::StepRng::new(42, 0);
        assert_eq!(random_digits(&mut small, 16), "0000000000000042");

        let mut large = rand::rngs::mock::StepRng::new(u64::MAX, 0);
        assert_eq!(random_digits(&mut large, 16), "1844674407370955");
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("1234567890123456"), "1234_5678_9012_3456");
        assert_eq!(group_digits("12345"), "1234_5");
        assert_eq!(group_digits(""), "");
    }
}
