use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::as_chars::AsChars;
use crate::error::{Result, TrieError};

/// A decoded TeX-style hyphenation pattern.
///
/// Pattern strings intersperse single digits between letters: `hy3ph` means
/// the letters `h`, `y`, `p`, `h` where the gap after `y` carries the value 3.
/// A digit in front of the first letter is the *prefix value* (`5emnix`).
///
/// # Examples
///
/// ```
/// use hyphtrie::Pattern;
///
/// let pattern = Pattern::parse("hy3phe2n5a4t2io2n");
/// assert_eq!(pattern.word(), "hyphenation");
/// assert_eq!(pattern.values(), &[0, 3, 0, 0, 2, 5, 4, 2, 0, 2, 0]);
/// assert_eq!(pattern.prefix(), None);
///
/// let pattern = Pattern::parse("5emnix");
/// assert_eq!(pattern.prefix(), Some(5));
/// assert_eq!(pattern.aligned_values(), vec![5, 0, 0, 0, 0, 0]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pattern {
    letters: Vec<char>,
    values: Vec<i32>,
    prefix: Option<i32>,
}

fn digit_value(c: char) -> Option<i32> {
    c.to_digit(10).map(|d| d as i32)
}

impl Pattern {
    /// Decodes an interspersed pattern string.
    ///
    /// Decoding never fails. A digit at position 0 becomes the prefix value,
    /// a digit right after a letter becomes that letter's value, and every
    /// other digit is skipped. Letters without a following digit get 0.
    /// Only ASCII `0`-`9` count as digits.
    pub fn parse(s: &str) -> Self {
        let chars: Vec<char> = s.chars().collect();
        let mut pattern = Pattern {
            letters: Vec::with_capacity(chars.len()),
            values: Vec::with_capacity(chars.len()),
            prefix: None,
        };

        for (pos, &c) in chars.iter().enumerate() {
            if let Some(digit) = digit_value(c) {
                if pos == 0 {
                    pattern.prefix = Some(digit);
                } else if digit_value(chars[pos - 1]).is_some() {
                    tracing::trace!(pattern = s, pos, "skipping digit that follows another digit");
                }
                continue;
            }

            let value = chars.get(pos + 1).copied().and_then(digit_value).unwrap_or(0);
            pattern.letters.push(c);
            pattern.values.push(value);
        }

        pattern
    }

    /// Builds a pattern from letters and aligned values.
    ///
    /// `values` holds one entry per letter, optionally preceded by a prefix
    /// value, exactly as accepted by [`ValueTrie::add`](crate::ValueTrie::add).
    pub fn from_parts<K: AsChars>(letters: K, values: &[i32]) -> Result<Self> {
        let letters = letters.as_chars_vec();
        let (prefix, values) = split_prefix(letters.len(), values)?;
        Ok(Pattern {
            letters,
            values: values.to_vec(),
            prefix,
        })
    }

    /// The pattern's letters, one per code point.
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// The letters with all digits stripped.
    pub fn word(&self) -> String {
        self.letters.iter().collect()
    }

    /// One value per letter.
    pub fn values(&self) -> &[i32] {
        &self.values
    }

    /// The value in front of the first letter, if the pattern had one.
    pub fn prefix(&self) -> Option<i32> {
        self.prefix
    }

    /// The values in the order a lookup reports them: prefix first, when
    /// present, then one value per letter.
    pub fn aligned_values(&self) -> Vec<i32> {
        self.prefix.into_iter().chain(self.values.iter().copied()).collect()
    }

    /// Returns `true` if the pattern has no letters.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

/// Splits a value slice into an optional prefix value and the per-letter part.
pub(crate) fn split_prefix(key_len: usize, values: &[i32]) -> Result<(Option<i32>, &[i32])> {
    if values.len() == key_len {
        Ok((None, values))
    } else if values.len() == key_len + 1 {
        Ok((Some(values[0]), &values[1..]))
    } else {
        Err(TrieError::InvalidArgument {
            key_len,
            values_len: values.len(),
        })
    }
}

impl FromStr for Pattern {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Pattern::parse(s))
    }
}

/// Writes the interspersed form. Zero letter values are left out; a prefix
/// value is always written when present.
impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(prefix) = self.prefix {
            write!(f, "{prefix}")?;
        }
        for (c, value) in self.letters.iter().zip(&self.values) {
            write!(f, "{c}")?;
            if *value != 0 {
                write!(f, "{value}")?;
            }
        }
        Ok(())
    }
}

/// Encodes letters and aligned values into a pattern string.
///
/// Unlike [`Pattern`]'s `Display`, this rejects values that do not fit in a
/// single digit, so the result always decodes back to the same input.
///
/// ```
/// # use hyphtrie::encode_pattern;
/// let encoded = encode_pattern("hyphenation", &[0, 3, 0, 0, 2, 5, 4, 2, 0, 2, 0]).unwrap();
/// assert_eq!(encoded, "hy3phe2n5a4t2io2n");
/// assert!(encode_pattern("ab", &[0, 10]).is_err());
/// ```
pub fn encode_pattern<K: AsChars>(letters: K, values: &[i32]) -> Result<String> {
    let pattern = Pattern::from_parts(letters, values)?;

    for (index, &value) in values.iter().enumerate() {
        if !(0..=9).contains(&value) {
            return Err(TrieError::ValueOutOfRange { index, value });
        }
    }

    Ok(pattern.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_interior_digits() {
        let pattern = Pattern::parse("hy3phe2n5a4t2io2n");
        assert_eq!(pattern.word(), "hyphenation");
        assert_eq!(pattern.values(), &[0, 3, 0, 0, 2, 5, 4, 2, 0, 2, 0]);
        assert_eq!(pattern.prefix(), None);
    }

    #[test]
    fn test_parse_prefix_value() {
        let pattern = Pattern::parse("5emnix");
        assert_eq!(pattern.word(), "emnix");
        assert_eq!(pattern.prefix(), Some(5));
        assert_eq!(pattern.values(), &[0, 0, 0, 0, 0]);
        assert_eq!(pattern.aligned_values(), vec![5, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_parse_trailing_digit_and_boundaries() {
        let pattern = Pattern::parse(".ach4");
        assert_eq!(pattern.word(), ".ach");
        assert_eq!(pattern.values(), &[0, 0, 0, 4]);

        let pattern = Pattern::parse("1na");
        assert_eq!(pattern.prefix(), Some(1));
        assert_eq!(pattern.word(), "na");
    }

    #[test]
    fn test_parse_is_permissive_with_adjacent_digits() {
        let pattern = Pattern::parse("a12b");
        assert_eq!(pattern.word(), "ab");
        assert_eq!(pattern.values(), &[1, 0]);

        let pattern = Pattern::parse("34xy");
        assert_eq!(pattern.prefix(), Some(3));
        assert_eq!(pattern.word(), "xy");
        assert_eq!(pattern.values(), &[0, 0]);

        let pattern = Pattern::parse("7");
        assert!(pattern.is_empty());
        assert_eq!(pattern.prefix(), Some(7));
    }

    #[test]
    fn test_parse_multibyte_letters() {
        let pattern = Pattern::parse("é2ß3ü");
        assert_eq!(pattern.letters(), &['é', 'ß', 'ü']);
        assert_eq!(pattern.values(), &[2, 3, 0]);
    }

    #[test]
    fn test_non_ascii_digits_are_letters() {
        let pattern = Pattern::parse("a٣b");
        assert_eq!(pattern.word(), "a٣b");
        assert_eq!(pattern.values(), &[0, 0, 0]);
    }

    #[test]
    fn test_display_round_trips() {
        for text in ["hy3phe2n5a4t2io2n", "5emnix", ".ach4", "0ab"] {
            let pattern: Pattern = text.parse().unwrap();
            assert_eq!(pattern.to_string(), text);
        }
    }

    #[test]
    fn test_from_parts_rejects_misaligned_values() {
        assert_eq!(
            Pattern::from_parts("abc", &[1, 2]),
            Err(TrieError::InvalidArgument {
                key_len: 3,
                values_len: 2
            })
        );
        let pattern = Pattern::from_parts("abc", &[4, 1, 2, 3]).unwrap();
        assert_eq!(pattern.prefix(), Some(4));
        assert_eq!(pattern.values(), &[1, 2, 3]);
    }

    #[test]
    fn test_encode_pattern() {
        assert_eq!(encode_pattern("emnix", &[5, 0, 0, 0, 0, 0]).unwrap(), "5emnix");
        assert_eq!(
            encode_pattern("ab", &[0, -1]),
            Err(TrieError::ValueOutOfRange { index: 1, value: -1 })
        );
    }
}
