//! Digit-literal and primality checks

/// Check that every character of `value` is an ASCII decimal digit.
///
/// Signs, decimal points and whitespace all fail, so strings like `"-7"`,
/// `"7.0"` and `" 7"` never reach the primality test. The empty string is
/// vacuously true; the integer parse rejects it downstream.
pub fn is_digits(value: &str) -> bool {
    value.bytes().all(|b| b.is_ascii_digit())
}

/// Check whether `value` spells a base-10 integer that is prime.
///
/// Leading zeros are accepted (`"013"` parses to 13). Empty strings and
/// digit runs beyond the `u32` range fail the parse and are skipped.
pub fn is_prime_literal(value: &str) -> bool {
    if !is_digits(value) {
        return false;
    }
    match value.parse::<u32>() {
        Ok(n) => primal::is_prime(u64::from(n)),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_digits() {
        assert!(is_digits("7"));
        assert!(is_digits("007"));
        assert!(is_digits("4294967296"));
        assert!(is_digits(""));
        assert!(!is_digits("-7"));
        assert!(!is_digits("+7"));
        assert!(!is_digits("7.0"));
        assert!(!is_digits(" 7"));
        assert!(!is_digits("7 "));
        assert!(!is_digits("1,000"));
        assert!(!is_digits("abc"));
        // non-ASCII digits don't count
        assert!(!is_digits("٧"));
    }

    #[test]
    fn test_is_prime_literal() {
        assert!(is_prime_literal("2"));
        assert!(is_prime_literal("17"));
        assert!(is_prime_literal("7919"));
        assert!(is_prime_literal("013"));
        assert!(is_prime_literal("2147483647"));

        assert!(!is_prime_literal("0"));
        assert!(!is_prime_literal("1"));
        assert!(!is_prime_literal("9"));
        assert!(!is_prime_literal("09"));
        assert!(!is_prime_literal("-7"));
        assert!(!is_prime_literal("7.0"));
        assert!(!is_prime_literal("abc"));
    }

    #[test]
    fn test_is_prime_literal_rejects_empty_and_overflow() {
        assert!(!is_prime_literal(""));
        // 2^64 + something, far past any u32
        assert!(!is_prime_literal("99999999999999999999"));
    }
}
