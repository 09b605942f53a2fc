//! Display formatting for canonical numbers

use serde::{Deserialize, Serialize};

/// Which form to render a number in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Notation {
    /// Trunk-prefixed local form, `0917 123 4567`
    #[default]
    Local,
    /// Country-prefixed form, `+63 917 123 4567`
    International,
}

/// Render `0` + digits, grouped 4-3-4 when a separator is given
pub(crate) fn local(digits: &str, separator: &str) -> String {
    let number = format!("0{}", digits);
    if separator.is_empty() {
        return number;
    }

    format!(
        "{}{sep}{}{sep}{}",
        &number[..4],
        &number[4..7],
        &number[7..],
        sep = separator
    )
}

/// Render country prefix + digits
///
/// The separator goes after the country prefix, then at positions 7 and 11
/// of the string as it stands after each previous insertion. With the
/// default `+63` and a one-character separator this gives
/// `+63-917-123-4567`; other prefixes shift the grouping accordingly.
pub(crate) fn international(digits: &str, country_prefix: &str, separator: &str) -> String {
    let mut number = format!("{}{}", country_prefix, digits);
    if separator.is_empty() {
        return number;
    }

    splice(&mut number, country_prefix.chars().count(), separator);
    splice(&mut number, 7, separator);
    splice(&mut number, 11, separator);
    number
}

/// Insert `insert` before the `at`-th character, or append when past the end
fn splice(s: &mut String, at: usize, insert: &str) {
    let idx = s
        .char_indices()
        .nth(at)
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    s.insert_str(idx, insert);
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIGITS: &str = "9171234567";

    #[test]
    fn test_local_plain() {
        assert_eq!(local(DIGITS, ""), "09171234567");
    }

    #[test]
    fn test_local_grouped() {
        assert_eq!(local(DIGITS, "-"), "0917-123-4567");
        assert_eq!(local(DIGITS, " "), "0917 123 4567");
        assert_eq!(local(DIGITS, " - "), "0917 - 123 - 4567");
    }

    #[test]
    fn test_zero_is_a_separator() {
        assert_eq!(local(DIGITS, "0"), "0917012304567");
        assert_eq!(international(DIGITS, "+63", "0"), "+630917012304567");
    }

    #[test]
    fn test_international_plain() {
        assert_eq!(international(DIGITS, "+63", ""), "+639171234567");
    }

    #[test]
    fn test_international_grouped() {
        assert_eq!(international(DIGITS, "+63", "-"), "+63-917-123-4567");
        assert_eq!(international(DIGITS, "+63", " "), "+63 917 123 4567");
    }

    #[test]
    fn test_international_sequential_splice() {
        // positions 7 and 11 are taken from the evolving string
        assert_eq!(international(DIGITS, "63", "-"), "63-9171-234-567");
        assert_eq!(international(DIGITS, "+063", "-"), "+063-91-712-34567");
        assert_eq!(international(DIGITS, "+63", "--"), "+63--91--71--234567");
    }

    #[test]
    fn test_international_empty_prefix() {
        assert_eq!(international(DIGITS, "", "-"), "-917123-456-7");
    }

    #[test]
    fn test_splice_past_end_appends() {
        let mut s = String::from("abc");
        splice(&mut s, 10, "-");
        assert_eq!(s, "abc-");
    }

    #[test]
    fn test_splice_multibyte_prefix() {
        assert_eq!(international(DIGITS, "☎63", "·"), "☎63·917·123·4567");
    }
}
