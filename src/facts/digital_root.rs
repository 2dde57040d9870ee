//! Iterative digit-sum reduction

/// Reduces the ASCII digits of `text` to a single decimal digit.
///
/// Non-digit characters are ignored, so `"2025-08-15"` and `"20250815"`
/// share a root. Input without any digit reduces to 0.
pub fn digital_root(text: &str) -> u8 {
    let mut sum: u64 = text
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(u64::from)
        .sum();

    while sum > 9 {
        sum = digit_sum(sum);
    }

    sum as u8
}

fn digit_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pass() {
        assert_eq!(digital_root("2025"), 9);
        assert_eq!(digital_root("7"), 7);
    }

    #[test]
    fn test_repeated_reduction() {
        // 1+9+9+9 = 28 -> 10 -> 1
        assert_eq!(digital_root("1999"), 1);
        assert_eq!(digital_root("99999999999"), 9);
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(digital_root(""), 0);
        assert_eq!(digital_root("no digits here"), 0);
        assert_eq!(digital_root("000"), 0);
    }

    #[test]
    fn test_separators_ignored() {
        assert_eq!(digital_root("2025-08-15"), digital_root("20250815"));
        assert_eq!(digital_root("2025-08-15"), 5);
        assert_eq!(digital_root("23:10"), 6);
    }

    #[test]
    fn test_non_ascii_digits_ignored() {
        // Arabic-Indic digits are not decimal digits for this purpose
        assert_eq!(digital_root("\u{0663}\u{0664}"), 0);
        assert_eq!(digital_root("4\u{0663}"), 4);
    }
}
