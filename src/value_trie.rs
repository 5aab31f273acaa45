use std::fmt;

use crate::as_chars::AsChars;
use crate::error::Result;
use crate::iter::{MatchWalker, Substrings};
use crate::node::{CharValue, Payload, TrieNode};
use crate::pattern::{Pattern, split_prefix};

/// A `ValueTrie` stores strings together with one integer per character.
///
/// Each node keeps the value of the character that leads to it. The node for
/// the first character of an inserted string may also keep a *prefix value*:
/// the value of the gap in front of that character. This is the layout TeX
/// hyphenation patterns need, and patterns can be added directly in their
/// interspersed form.
///
/// Values are written once. When a path already exists, adding a string
/// along it marks the end as a member but keeps the stored values.
///
/// # Examples
///
/// ```
/// use hyphtrie::ValueTrie;
///
/// let mut trie = ValueTrie::new();
/// trie.add_pattern_string("hy3phe2n5a4t2io2n");
/// trie.add_pattern_string("5emnix");
///
/// let (values, ok) = trie.values_for_string("hyphenation");
/// assert!(ok);
/// assert_eq!(values, vec![0, 3, 0, 0, 2, 5, 4, 2, 0, 2, 0]);
///
/// assert_eq!(trie.values_for_string("emnix"), (vec![5, 0, 0, 0, 0, 0], true));
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ValueTrie {
    pub(crate) root: TrieNode<CharValue>,
}

impl fmt::Debug for ValueTrie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.pattern_members(false)).finish()
    }
}

impl FromIterator<Pattern> for ValueTrie {
    fn from_iter<I: IntoIterator<Item = Pattern>>(iter: I) -> Self {
        let mut trie = ValueTrie::new();
        trie.extend(iter);
        trie
    }
}

impl Extend<Pattern> for ValueTrie {
    fn extend<I: IntoIterator<Item = Pattern>>(&mut self, iter: I) {
        for pattern in iter {
            self.add_pattern(&pattern);
        }
    }
}

impl<'a> Extend<&'a Pattern> for ValueTrie {
    fn extend<I: IntoIterator<Item = &'a Pattern>>(&mut self, iter: I) {
        for pattern in iter {
            self.add_pattern(pattern);
        }
    }
}

impl ValueTrie {
    /// Creates a new empty `ValueTrie`.
    pub fn new() -> Self {
        ValueTrie {
            root: TrieNode::new(),
        }
    }

    /// Builds a trie from interspersed pattern strings.
    ///
    /// ```
    /// # use hyphtrie::ValueTrie;
    /// let trie = ValueTrie::from_patterns(["hy3ph", "he2n"]);
    /// assert!(trie.contains("hyph"));
    /// assert!(trie.contains("hen"));
    /// ```
    pub fn from_patterns<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = ValueTrie::new();
        for pattern in patterns {
            trie.add_pattern_string(pattern.as_ref());
        }
        trie
    }

    /// Adds `key` with one value per character.
    ///
    /// `values` must hold either exactly one value per character, or one
    /// extra leading value that becomes the prefix value of the first
    /// character. Any other length is rejected and the trie is not touched.
    /// The empty key is checked the same way and then ignored.
    ///
    /// ```
    /// # use hyphtrie::{TrieError, ValueTrie};
    /// let mut trie = ValueTrie::new();
    /// trie.add("hen", &[0, 2, 0]).unwrap();
    /// assert_eq!(
    ///     trie.add("hen", &[1]),
    ///     Err(TrieError::InvalidArgument { key_len: 3, values_len: 1 })
    /// );
    /// ```
    pub fn add<K: AsChars>(&mut self, key: K, values: &[i32]) -> Result<()> {
        let chars = key.as_chars_vec();
        let (prefix, values) = split_prefix(chars.len(), values)?;
        if chars.is_empty() {
            return Ok(());
        }

        self.insert(&chars, prefix, values);
        Ok(())
    }

    /// Decodes a TeX-style pattern such as `hy3ph` or `5emnix` and adds it.
    ///
    /// Decoding is permissive; see [`Pattern::parse`].
    pub fn add_pattern_string(&mut self, pattern: &str) {
        self.add_pattern(&Pattern::parse(pattern));
    }

    /// Adds an already decoded pattern.
    pub fn add_pattern(&mut self, pattern: &Pattern) {
        if pattern.is_empty() {
            return;
        }
        self.insert(pattern.letters(), pattern.prefix(), pattern.values());
    }

    fn insert(&mut self, chars: &[char], prefix: Option<i32>, values: &[i32]) {
        debug_assert_eq!(chars.len(), values.len());

        let mut node = &mut self.root;
        let mut created = 0usize;

        for (depth, (&c, &value)) in chars.iter().zip(values).enumerate() {
            node = node.children.entry(c).or_insert_with(|| {
                created += 1;
                TrieNode::with_payload(CharValue {
                    value,
                    prefix: if depth == 0 { prefix } else { None },
                    member: None,
                })
            });
        }

        if !node.terminal {
            node.terminal = true;
            node.payload.member = Some(prefix.iter().chain(values).copied().collect());
        }

        if created < chars.len() {
            tracing::trace!(
                reused = chars.len() - created,
                created,
                "existing nodes keep their stored values"
            );
        }
    }

    /// Removes a string, pruning every node that no longer leads to a member.
    ///
    /// Values on surviving nodes are left as they are. Returns `true` if the
    /// trie is empty afterwards.
    pub fn remove<K: AsChars>(&mut self, key: K) -> bool {
        let mut chars = key.as_chars().peekable();
        if chars.peek().is_some() {
            self.root.remove_chars(&mut chars);
        }
        self.root.children.is_empty()
    }

    /// Returns `true` if `key` was added as a whole string.
    pub fn contains<K: AsChars>(&self, key: K) -> bool {
        self.root
            .find(key.as_chars())
            .is_some_and(|node| node.terminal)
    }

    /// Returns `true` if some member begins with `prefix`.
    pub fn starts_with<K: AsChars>(&self, prefix: K) -> bool {
        self.root.find(prefix.as_chars()).is_some()
    }

    /// Returns the values stored along the path for `key`.
    ///
    /// The flag is `true` only when `key` is a member. When the path breaks
    /// off, the values gathered up to that point are returned with `false`
    /// and should not be relied upon.
    pub fn values_for_string<K: AsChars>(&self, key: K) -> (Vec<i32>, bool) {
        let mut values = Vec::new();
        let mut node = &self.root;

        for c in key.as_chars() {
            match node.children.get(&c) {
                Some(child) => {
                    child.payload.extend_values(&mut values);
                    node = child;
                }
                None => return (values, false),
            }
        }

        (values, node.terminal)
    }

    /// The values `key` was added with, exactly as given.
    ///
    /// Unlike [`values_for_string`](Self::values_for_string), which reads the
    /// per-node values and so reflects whichever member created each node,
    /// this returns the member's own list: prefix value first when one was
    /// given, then one value per character. `None` if `key` is not a member.
    ///
    /// ```
    /// # use hyphtrie::ValueTrie;
    /// let trie = ValueTrie::from_patterns(["he2n", "hen5at"]);
    /// assert_eq!(trie.values_for_string("henat").0, vec![0, 2, 0, 0, 0]);
    /// assert_eq!(trie.member_values("henat"), Some(&[0, 0, 5, 0, 0][..]));
    /// assert_eq!(trie.member_values("he"), None);
    /// ```
    pub fn member_values<K: AsChars>(&self, key: K) -> Option<&[i32]> {
        self.root
            .find(key.as_chars())
            .filter(|node| node.terminal)
            .and_then(|node| node.payload.member.as_deref())
    }

    /// Follows `text` from the root for as long as the path exists.
    ///
    /// Returns the consumed prefix of `text` and its values. The stopping
    /// node does not need to be a member.
    ///
    /// ```
    /// # use hyphtrie::ValueTrie;
    /// let trie = ValueTrie::from_patterns(["hen5at"]);
    /// assert_eq!(trie.longest_substring("hence"), ("hen", vec![0, 0, 5]));
    /// assert_eq!(trie.longest_substring("xyz"), ("", vec![]));
    /// ```
    pub fn longest_substring<'s>(&self, text: &'s str) -> (&'s str, Vec<i32>) {
        let mut values = Vec::new();
        let mut node = &self.root;

        for (pos, c) in text.char_indices() {
            match node.children.get(&c) {
                Some(child) => {
                    child.payload.extend_values(&mut values);
                    node = child;
                }
                None => return (&text[..pos], values),
            }
        }

        (text, values)
    }

    /// Lazily yields every member that occurs in `text`, by increasing start
    /// offset and then by increasing length.
    pub fn substrings(&self, text: &str) -> Substrings<'_> {
        Substrings {
            walker: MatchWalker::new(&self.root, text.chars().collect()),
        }
    }

    /// Every member that occurs in `text`, in [`substrings`](Self::substrings) order.
    pub fn all_substrings(&self, text: &str) -> Vec<String> {
        self.substrings(text).map(|m| m.text).collect()
    }

    /// Every member that occurs in `text` along with its values.
    ///
    /// ```
    /// # use hyphtrie::ValueTrie;
    /// let trie = ValueTrie::from_patterns(["he2n", "hena4", "hen5at"]);
    /// let (found, values) = trie.all_substrings_and_values("henation");
    /// assert_eq!(found, vec!["hen", "hena", "henat"]);
    /// assert_eq!(values, vec![vec![0, 2, 0], vec![0, 2, 0, 4], vec![0, 2, 0, 4, 0]]);
    /// ```
    pub fn all_substrings_and_values(&self, text: &str) -> (Vec<String>, Vec<Vec<i32>>) {
        self.substrings(text).map(|m| (m.text, m.values)).unzip()
    }

    /// All members in lexicographic order.
    pub fn members(&self) -> Vec<String> {
        let mut members = Vec::new();
        self.root.collect_members(&mut String::new(), &mut members);
        members.sort();
        members
    }

    /// All members in interspersed pattern form, sorted.
    ///
    /// Zero letter values are written only when `include_zeroes` is set; a
    /// stored prefix value is always written, so every entry re-parses to
    /// the same values.
    ///
    /// ```
    /// # use hyphtrie::ValueTrie;
    /// let trie = ValueTrie::from_patterns(["hy3ph", "5emnix"]);
    /// assert_eq!(trie.pattern_members(false), vec!["5emnix", "hy3ph"]);
    /// assert_eq!(trie.pattern_members(true), vec!["5e0m0n0i0x0", "h0y3p0h0"]);
    /// ```
    pub fn pattern_members(&self, include_zeroes: bool) -> Vec<String> {
        let mut members = Vec::new();
        collect_patterns(&self.root, &mut String::new(), include_zeroes, &mut members);
        members.sort();
        members
    }

    /// Number of nodes below the root.
    pub fn size(&self) -> usize {
        self.root.size()
    }

    /// Returns `true` if the trie has no members.
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    /// Removes every member.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
    }
}

fn collect_patterns(
    node: &TrieNode<CharValue>,
    prefix: &mut String,
    include_zeroes: bool,
    out: &mut Vec<String>,
) {
    if node.terminal {
        out.push(prefix.clone());
    }

    for (&c, child) in &node.children {
        let len = prefix.len();
        if let Some(value) = child.payload.prefix {
            prefix.push_str(&value.to_string());
        }
        prefix.push(c);
        if child.payload.value != 0 || include_zeroes {
            prefix.push_str(&child.payload.value.to_string());
        }

        collect_patterns(child, prefix, include_zeroes, out);
        prefix.truncate(len);
    }
}
