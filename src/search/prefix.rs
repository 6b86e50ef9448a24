use std::collections::HashMap;

use crate::board::fold_char;

/// Index of a node inside a `PrefixSet` arena.
pub(crate) type NodeId = usize;

const ROOT: NodeId = 0;

#[derive(Clone, Debug, Default)]
struct TrieNode {
    children: HashMap<char, NodeId>,
    terminal: bool,
}

/// Every non-empty prefix of every dictionary word, stored as an arena trie.
///
/// Built once per dictionary and read-only afterwards, so a single instance can
/// serve any number of board searches, including concurrent ones.
#[derive(Clone, Debug)]
pub struct PrefixSet {
    nodes: Vec<TrieNode>,
    words: usize,
}

impl Default for PrefixSet {
    fn default() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            words: 0,
        }
    }
}

impl PrefixSet {
    /// Builds the set from a word list.
    ///
    /// Entries are trimmed and case-folded; empty entries are skipped and
    /// case variants of the same word collapse into one.
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        for word in words {
            set.insert(word.as_ref());
        }
        set
    }

    fn insert(&mut self, word: &str) {
        let word = word.trim();
        if word.is_empty() {
            return;
        }
        let mut node = ROOT;
        for ch in word.chars().map(fold_char) {
            node = match self.nodes[node].children.get(&ch) {
                Some(&next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[node].children.insert(ch, next);
                    next
                }
            };
        }
        if !self.nodes[node].terminal {
            self.nodes[node].terminal = true;
            self.words += 1;
        }
    }

    /// Returns `true` if `prefix` is a non-empty prefix of some word.
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        !prefix.is_empty() && self.walk(prefix).is_some()
    }

    /// Returns `true` if `word` is itself a dictionary word.
    pub fn contains_word(&self, word: &str) -> bool {
        self.walk(word).is_some_and(|node| self.is_terminal(node))
    }

    /// Number of distinct words in the set.
    pub fn word_count(&self) -> usize {
        self.words
    }

    /// Number of distinct non-empty prefixes in the set.
    pub fn prefix_count(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    pub(crate) fn root(&self) -> NodeId {
        ROOT
    }

    /// Steps from `node` along the already-folded character `ch`.
    pub(crate) fn child(&self, node: NodeId, ch: char) -> Option<NodeId> {
        self.nodes[node].children.get(&ch).copied()
    }

    pub(crate) fn is_terminal(&self, node: NodeId) -> bool {
        self.nodes[node].terminal
    }

    fn walk(&self, text: &str) -> Option<NodeId> {
        text.chars()
            .map(fold_char)
            .try_fold(ROOT, |node, ch| self.child(node, ch))
    }
}
