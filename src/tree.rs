//! Huffman tree construction and code-table derivation.
//!
//! # Historical Context
//!
//! David Huffman (1952) devised the greedy bottom-up merge as a term
//! paper at MIT, sidestepping the top-down splitting of Shannon-Fano
//! codes and producing provably minimum-redundancy prefix codes.

use std::collections::HashMap;
use std::hash::Hash;

use crate::heap::MinHeap;

/// Per-symbol bit codes derived from a tree. Each `u8` in a code is a
/// single bit, 0 or 1.
pub type CodeTable<S> = HashMap<S, Vec<u8>>;

/// Huffman tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<S> {
    /// A terminal node carrying one input symbol.
    Leaf {
        /// The symbol this leaf encodes.
        symbol: S,
        /// Occurrence count of the symbol in the input.
        weight: u64,
    },
    /// A merge of two subtrees.
    Inner {
        /// The `0` branch.
        left: Box<Node<S>>,
        /// The `1` branch. Absent only at the root of the degenerate
        /// single-symbol tree; every other inner node has both children.
        right: Option<Box<Node<S>>>,
        /// Sum of the children's weights.
        weight: u64,
    },
}

impl<S> Node<S> {
    /// Total weight of this subtree.
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Inner { weight, .. } => *weight,
        }
    }
}

/// A frequency-weighted binary prefix-code tree.
///
/// Returned by [`encode`](crate::encode) alongside the bit sequence and
/// required by [`decode`](crate::decode). The empty input produces the
/// empty marker, a tree with no root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree<S> {
    root: Option<Node<S>>,
}

impl<S> HuffmanTree<S> {
    /// The empty marker: the tree of the empty input.
    pub fn empty() -> Self {
        Self { root: None }
    }

    /// The root node, absent for the empty marker.
    pub fn root(&self) -> Option<&Node<S>> {
        self.root.as_ref()
    }

    /// True for the empty marker.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Total weight of the tree: the length of the input it was built
    /// from. Zero for the empty marker.
    pub fn weight(&self) -> u64 {
        self.root.as_ref().map_or(0, Node::weight)
    }

    /// Number of leaves: the distinct-symbol count of the input.
    pub fn leaf_count(&self) -> usize {
        fn leaves<S>(node: &Node<S>) -> usize {
            match node {
                Node::Leaf { .. } => 1,
                Node::Inner { left, right, .. } => {
                    leaves(left) + right.as_deref().map_or(0, leaves)
                }
            }
        }
        self.root.as_ref().map_or(0, leaves)
    }
}

impl<S: Copy + Eq + Hash> HuffmanTree<S> {
    /// Build a tree from `(symbol, count)` pairs.
    ///
    /// Zero counts mark absent symbols and are skipped. An empty (or
    /// all-zero) distribution yields the empty marker. A single distinct
    /// symbol hangs off a one-branch inner root so it still receives the
    /// one-bit code `0` rather than a zero-length code.
    ///
    /// Symbols with equal counts may land in either branch of a merge;
    /// the resulting code lengths are optimal either way.
    pub fn from_frequencies<I>(frequencies: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
    {
        let mut heap = MinHeap::new();
        for (symbol, weight) in frequencies {
            if weight > 0 {
                heap.push(Node::Leaf { symbol, weight }, weight);
            }
        }

        if heap.is_empty() {
            return Self::empty();
        }

        if heap.len() == 1 {
            // invariant: the heap holds exactly one entry at this point
            let (leaf, weight) = heap.pop().unwrap();
            return Self {
                root: Some(Node::Inner {
                    left: Box::new(leaf),
                    right: None,
                    weight,
                }),
            };
        }

        // Greedy merge: combine the two lightest pending nodes until a
        // single root remains.
        let mut root = None;
        while let Some((first, first_weight)) = heap.pop() {
            match heap.pop() {
                Some((second, second_weight)) => {
                    let weight = first_weight + second_weight;
                    let merged = Node::Inner {
                        left: Box::new(first),
                        right: Some(Box::new(second)),
                        weight,
                    };
                    heap.push(merged, weight);
                }
                None => {
                    root = Some(first);
                    break;
                }
            }
        }
        Self { root }
    }

    /// Derive the per-symbol code table by walking the tree.
    ///
    /// Left edges append `0`, right edges append `1`; the accumulated
    /// path at each leaf is that symbol's code. No code is a prefix of
    /// another because every leaf sits at the end of a unique path.
    /// Recursion depth is bounded by the distinct-symbol count, not the
    /// input length.
    pub fn code_table(&self) -> CodeTable<S> {
        let mut table = CodeTable::new();
        if let Some(root) = &self.root {
            collect_codes(root, Vec::new(), &mut table);
        }
        table
    }
}

fn collect_codes<S: Copy + Eq + Hash>(node: &Node<S>, prefix: Vec<u8>, table: &mut CodeTable<S>) {
    match node {
        Node::Leaf { symbol, .. } => {
            table.insert(*symbol, prefix);
        }
        Node::Inner { left, right, .. } => {
            let mut left_prefix = prefix.clone();
            left_prefix.push(0);
            collect_codes(left, left_prefix, table);

            if let Some(right) = right {
                let mut right_prefix = prefix;
                right_prefix.push(1);
                collect_codes(right, right_prefix, table);
            }
        }
    }
}
