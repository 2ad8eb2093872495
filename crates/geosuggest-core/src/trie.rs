// crates/geosuggest-core/src/trie.rs

//! # Prefix Trie
//!
//! Maps normalized character sequences to the places whose normalized name
//! starts with that sequence. Every node on a name's path carries the
//! place id, not just the terminal one, so a lookup of any prefix length
//! lands directly on the full candidate list.
//!
//! Only `a`..=`z` (after lowercasing) are indexable. Anything else is
//! skipped without breaking the walk: `"St. John's"` indexes as
//! `"stjohns"`.

use crate::model::PlaceId;
use std::collections::BTreeMap;
use tracing::debug;

/// Sparse 26-way fan-out.
type Children = BTreeMap<char, TrieNode>;

/// Characters that are skipped silently during insertion.
///
/// Anything outside `a`..=`z` and outside this set is still skipped, but is
/// reported as unrecognized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
    accepted: Vec<char>,
}

/// Punctuation seen in the Canada/USA city names.
pub const DEFAULT_ACCEPTED: &[char] = &['-', '\'', '.', ',', ' ', '(', ')', '1'];

impl Default for Alphabet {
    fn default() -> Self {
        Self::new(DEFAULT_ACCEPTED.iter().copied())
    }
}

impl Alphabet {
    pub fn new(accepted: impl IntoIterator<Item = char>) -> Self {
        Self {
            accepted: accepted.into_iter().collect(),
        }
    }

    #[inline]
    pub fn is_indexable(c: char) -> bool {
        c.is_ascii_lowercase()
    }

    /// `true` for characters that are neither indexable nor on the allow-list.
    #[inline]
    pub fn is_unrecognized(&self, c: char) -> bool {
        !Self::is_indexable(c) && !self.accepted.contains(&c)
    }
}

/// One character position shared by every place name passing through it.
#[derive(Clone, Debug)]
pub struct TrieNode {
    ch: char,
    ids: Vec<PlaceId>,
    children: Children,
}

impl TrieNode {
    fn new(ch: char) -> Self {
        Self {
            ch,
            ids: Vec::new(),
            children: Children::new(),
        }
    }

    /// The character this node was reached by. Diagnostic only.
    pub fn ch(&self) -> char {
        self.ch
    }

    /// Every place id whose name passes through this node, in insertion
    /// order. Duplicates are kept.
    pub fn ids(&self) -> &[PlaceId] {
        &self.ids
    }

    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    pub fn children(&self) -> impl Iterator<Item = &TrieNode> {
        self.children.values()
    }

    fn count_nodes(&self) -> usize {
        1 + self.children.values().map(TrieNode::count_nodes).sum::<usize>()
    }
}

/// Outcome of a single [`PrefixTrie::insert`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Insertion {
    /// Number of nodes the id was appended to.
    pub depth: usize,
    /// Skipped characters not on the allow-list, in order of appearance.
    pub unrecognized: Vec<char>,
}

/// Character trie over normalized place names.
///
/// Append-only: there is no removal, and ids are never deduplicated.
#[derive(Clone, Debug, Default)]
pub struct PrefixTrie {
    roots: Children,
    alphabet: Alphabet,
}

impl PrefixTrie {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_alphabet(alphabet: Alphabet) -> Self {
        Self {
            roots: Children::new(),
            alphabet,
        }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Appends `id` at every node along the path of `name`.
    ///
    /// A name without any indexable character is a no-op.
    pub fn insert(&mut self, id: PlaceId, name: &str) -> Insertion {
        let mut out = Insertion::default();
        let mut level = &mut self.roots;

        for c in name.chars().flat_map(char::to_lowercase) {
            if !Alphabet::is_indexable(c) {
                if self.alphabet.is_unrecognized(c) {
                    debug!(character = ?c, id, name, "unrecognized character skipped");
                    out.unrecognized.push(c);
                }
                continue;
            }
            let node = level.entry(c).or_insert_with(|| TrieNode::new(c));
            node.ids.push(id);
            out.depth += 1;
            level = &mut node.children;
        }

        out
    }

    /// Walks `prefix` and returns the node it ends on.
    ///
    /// Returns `None` when a required child is missing, and also when the
    /// prefix holds no indexable character at all.
    pub fn lookup(&self, prefix: &str) -> Option<&TrieNode> {
        let mut node: Option<&TrieNode> = None;

        for c in prefix.chars().flat_map(char::to_lowercase) {
            if !Alphabet::is_indexable(c) {
                continue;
            }
            let next = match node {
                None => self.roots.get(&c),
                Some(n) => n.children.get(&c),
            };
            // short-circuit
            node = Some(next?);
        }

        node
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total number of nodes, excluding the implicit root.
    pub fn node_count(&self) -> usize {
        self.roots.values().map(TrieNode::count_nodes).sum()
    }
}
