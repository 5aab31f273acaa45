use std::collections::HashMap;

/// Per-node data carried alongside the trie structure.
///
/// A payload knows how to contribute its values to a lookup result; the
/// membership trie carries `()` and contributes nothing.
pub(crate) trait Payload: Default {
    fn extend_values(&self, out: &mut Vec<i32>);

    /// Called when the node stops being the end of a member.
    fn clear_member(&mut self) {}
}

impl Payload for () {
    fn extend_values(&self, _out: &mut Vec<i32>) {}
}

/// The annotation stored on the node reached through a code point.
///
/// `prefix` is only ever set on a node directly below the root. `member`
/// holds the full value list a member was added with and is only set on
/// terminal nodes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct CharValue {
    pub(crate) value: i32,
    pub(crate) prefix: Option<i32>,
    pub(crate) member: Option<Box<[i32]>>,
}

impl Payload for CharValue {
    fn extend_values(&self, out: &mut Vec<i32>) {
        if let Some(prefix) = self.prefix {
            out.push(prefix);
        }
        out.push(self.value);
    }

    fn clear_member(&mut self) {
        self.member = None;
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct TrieNode<P> {
    pub(crate) terminal: bool,
    pub(crate) payload: P,
    pub(crate) children: HashMap<char, TrieNode<P>>,
}

impl<P: Payload> TrieNode<P> {
    pub(crate) fn new() -> Self {
        Self::with_payload(P::default())
    }

    pub(crate) fn with_payload(payload: P) -> Self {
        TrieNode {
            terminal: false,
            payload,
            children: HashMap::new(),
        }
    }

    /// Follows `chars` from this node, returning the node the path ends on.
    pub(crate) fn find<I>(&self, chars: I) -> Option<&Self>
    where
        I: IntoIterator<Item = char>,
    {
        let mut node = self;
        for c in chars {
            node = node.children.get(&c)?;
        }
        Some(node)
    }

    /// Clears the terminal flag at the end of `chars` and drops every node on
    /// the way back up that is left childless and non-terminal.
    ///
    /// Returns `true` when this node itself is now dead and should be pruned
    /// by its parent.
    pub(crate) fn remove_chars<I>(&mut self, chars: &mut I) -> bool
    where
        I: Iterator<Item = char>,
    {
        match chars.next() {
            None => {
                self.terminal = false;
                self.payload.clear_member();
            }
            Some(c) => {
                if let Some(child) = self.children.get_mut(&c) {
                    if child.remove_chars(chars) {
                        self.children.remove(&c);
                        tracing::trace!(%c, "pruned empty node");
                    }
                }
            }
        }

        !self.terminal && self.children.is_empty()
    }

    /// Pushes every terminal path below this node onto `out`, unordered.
    pub(crate) fn collect_members(&self, prefix: &mut String, out: &mut Vec<String>) {
        if self.terminal {
            out.push(prefix.clone());
        }

        for (&c, child) in &self.children {
            prefix.push(c);
            child.collect_members(prefix, out);
            prefix.pop();
        }
    }

    /// Number of nodes strictly below this one.
    pub(crate) fn size(&self) -> usize {
        self.children.len() + self.children.values().map(TrieNode::size).sum::<usize>()
    }
}
