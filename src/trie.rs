use std::fmt;

use crate::as_chars::AsChars;
use crate::iter::MatchWalker;
use crate::node::TrieNode;

/// A `Trie` is a set of strings stored as a prefix tree keyed by code point.
///
/// Shared prefixes are stored once. Every member is a path from the root to a
/// terminal node; a path that only leads to longer members is not a member.
///
/// # Examples
///
/// ```
/// use hyphtrie::Trie;
///
/// let mut trie = Trie::new();
/// trie.add("hello, world!");
/// trie.add("hello, there!");
///
/// assert!(trie.contains("hello, world!"));
/// assert!(!trie.contains("hello"));
/// assert_eq!(trie.size(), "hello, ".len() + "world!".len() + "there!".len());
///
/// trie.remove("hello, world!");
/// assert_eq!(trie.members(), vec!["hello, there!"]);
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Trie {
    pub(crate) root: TrieNode<()>,
}

impl fmt::Debug for Trie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.members()).finish()
    }
}

impl<K: AsChars> FromIterator<K> for Trie {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

impl<K: AsChars> Extend<K> for Trie {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.add(key);
        }
    }
}

impl<K: AsChars, const N: usize> From<[K; N]> for Trie {
    fn from(array: [K; N]) -> Self {
        array.into_iter().collect()
    }
}

impl Trie {
    /// Creates a new empty `Trie`.
    ///
    /// ```
    /// # use hyphtrie::Trie;
    /// let trie = Trie::new();
    /// assert!(trie.is_empty());
    /// assert_eq!(trie.size(), 0);
    /// ```
    pub fn new() -> Self {
        Trie {
            root: TrieNode::new(),
        }
    }

    /// Adds a string to the trie.
    ///
    /// Adding the empty string does nothing, and adding an existing member
    /// leaves the trie unchanged.
    pub fn add<K: AsChars>(&mut self, key: K) {
        let mut node = &mut self.root;
        let mut depth = 0;

        for c in key.as_chars() {
            node = node.children.entry(c).or_insert_with(TrieNode::new);
            depth += 1;
        }

        if depth > 0 {
            node.terminal = true;
        }
    }

    /// Removes a string, pruning every node that no longer leads to a member.
    ///
    /// Returns `true` if the trie is empty afterwards. For the empty string
    /// nothing is removed and the current emptiness is reported.
    ///
    /// ```
    /// # use hyphtrie::Trie;
    /// let mut trie = Trie::from(["hen", "hena"]);
    /// assert!(!trie.remove("hena"));
    /// assert_eq!(trie.size(), 3);
    /// assert!(trie.remove("hen"));
    /// ```
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

    /// All members in lexicographic order.
    pub fn members(&self) -> Vec<String> {
        let mut members = Vec::new();
        self.root.collect_members(&mut String::new(), &mut members);
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

    /// Every member that occurs in `text`, scanning each start offset in
    /// turn and reporting shorter matches before longer ones.
    ///
    /// ```
    /// # use hyphtrie::Trie;
    /// let trie = Trie::from(["hyph", "hen", "hena", "henat"]);
    /// assert_eq!(trie.all_substrings("henation"), vec!["hen", "hena", "henat"]);
    /// ```
    pub fn all_substrings(&self, text: &str) -> Vec<String> {
        let mut walker = MatchWalker::new(&self.root, text.chars().collect());
        let mut found = Vec::new();
        while let Some((start, end)) = walker.advance() {
            found.push(walker.matched(start, end));
        }
        found
    }
}
