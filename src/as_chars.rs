/// The `AsChars` trait allows a type to be used as a key in a [`Trie`] or [`ValueTrie`].
///
/// Keys are walked one code point per trie level, so every implementation must
/// yield decoded `char`s rather than encoded units.
///
/// [`Trie`]: crate::Trie
/// [`ValueTrie`]: crate::ValueTrie
pub trait AsChars {
    /// Returns the code points of the key in order.
    fn as_chars(&self) -> impl Iterator<Item = char>;

    fn as_chars_vec(&self) -> Vec<char> {
        self.as_chars().collect()
    }

    /// Number of code points in the key.
    fn char_len(&self) -> usize {
        self.as_chars().count()
    }
}

impl AsChars for char {
    fn as_chars(&self) -> impl Iterator<Item = char> {
        Some(*self).into_iter()
    }
}

impl AsChars for str {
    fn as_chars(&self) -> impl Iterator<Item = char> {
        self.chars()
    }
}

impl AsChars for String {
    fn as_chars(&self) -> impl Iterator<Item = char> {
        self.as_str().chars()
    }
}

impl AsChars for [char] {
    fn as_chars(&self) -> impl Iterator<Item = char> {
        self.iter().copied()
    }

    fn char_len(&self) -> usize {
        self.len()
    }
}

impl AsChars for Vec<char> {
    fn as_chars(&self) -> impl Iterator<Item = char> {
        self.iter().copied()
    }

    fn char_len(&self) -> usize {
        self.len()
    }
}

impl<const N: usize> AsChars for [char; N] {
    fn as_chars(&self) -> impl Iterator<Item = char> {
        self.iter().copied()
    }

    fn char_len(&self) -> usize {
        N
    }
}

impl<T: AsChars + ?Sized> AsChars for &T {
    fn as_chars(&self) -> impl Iterator<Item = char> {
        T::as_chars(*self)
    }

    fn char_len(&self) -> usize {
        T::char_len(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multibyte_text_yields_one_char_per_code_point() {
        let key = "naïve€";
        assert_eq!(key.char_len(), 6);
        assert_eq!(key.as_chars_vec(), vec!['n', 'a', 'ï', 'v', 'e', '€']);
    }

    #[test]
    fn char_collections_agree_with_strings() {
        let arr = ['a', 'b', 'c'];
        let vec = vec!['a', 'b', 'c'];
        assert_eq!(arr.as_chars_vec(), "abc".as_chars_vec());
        assert_eq!(vec.char_len(), 3);
        assert_eq!((&arr[..]).char_len(), 3);
        assert_eq!(String::from("abc").as_chars_vec(), vec);
        assert_eq!('x'.as_chars_vec(), vec!['x']);
    }
}
