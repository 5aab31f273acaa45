use crate::node::{CharValue, Payload, TrieNode};

/// Walks every start offset of a text and reports each terminal node reached
/// from the root, shortest match first.
pub(crate) struct MatchWalker<'a, P> {
    root: &'a TrieNode<P>,
    node: &'a TrieNode<P>,
    text: Vec<char>,
    start: usize,
    end: usize,
    values: Vec<i32>,
}

impl<'a, P: Payload> MatchWalker<'a, P> {
    pub(crate) fn new(root: &'a TrieNode<P>, text: Vec<char>) -> Self {
        MatchWalker {
            root,
            node: root,
            text,
            start: 0,
            end: 0,
            values: Vec::new(),
        }
    }

    fn restart_at_next_offset(&mut self) {
        self.start += 1;
        self.end = self.start;
        self.node = self.root;
        self.values.clear();
    }

    /// Advances to the next match and returns its char range.
    pub(crate) fn advance(&mut self) -> Option<(usize, usize)> {
        while self.start < self.text.len() {
            let node = self.node;
            let next = self.text.get(self.end).and_then(|c| node.children.get(c));

            match next {
                Some(child) => {
                    child.payload.extend_values(&mut self.values);
                    self.node = child;
                    self.end += 1;
                    if child.terminal {
                        return Some((self.start, self.end));
                    }
                }
                None => self.restart_at_next_offset(),
            }
        }
        None
    }

    pub(crate) fn matched(&self, start: usize, end: usize) -> String {
        self.text[start..end].iter().collect()
    }

    /// Values accumulated along the current path.
    pub(crate) fn values(&self) -> &[i32] {
        &self.values
    }

    /// The node the last match ended on.
    pub(crate) fn node(&self) -> &'a TrieNode<P> {
        self.node
    }
}

/// One trie member found inside a scanned text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubstringMatch {
    /// Char offset in the scanned text where the member starts.
    pub start: usize,
    /// The member itself.
    pub text: String,
    /// The per-node values along the member's path, prefix value first
    /// when one is stored.
    pub values: Vec<i32>,
    /// The values the member itself was added with.
    pub member_values: Vec<i32>,
}

impl SubstringMatch {
    /// Number of chars in the matched member.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// An iterator over every member of a [`ValueTrie`] that occurs in a text.
///
/// Matches come ordered by increasing start offset, then by increasing
/// length at the same offset.
///
/// This struct is created by the [`substrings`] method on [`ValueTrie`].
///
/// [`ValueTrie`]: crate::ValueTrie
/// [`substrings`]: crate::ValueTrie::substrings
pub struct Substrings<'a> {
    pub(crate) walker: MatchWalker<'a, CharValue>,
}

impl Iterator for Substrings<'_> {
    type Item = SubstringMatch;

    fn next(&mut self) -> Option<Self::Item> {
        let (start, end) = self.walker.advance()?;
        Some(SubstringMatch {
            start,
            text: self.walker.matched(start, end),
            values: self.walker.values().to_vec(),
            member_values: self
                .walker
                .node()
                .payload
                .member
                .as_deref()
                .map(<[i32]>::to_vec)
                .unwrap_or_default(),
        })
    }
}
