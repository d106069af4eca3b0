//! Encode and decode entry points.
//!
//! The two operations form the public contract: `encode` turns a symbol
//! sequence into an abstract bit sequence plus the tree that frames it,
//! and `decode` walks that tree bit-by-bit to reconstruct the sequence.

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::{Error, Result};
use crate::tree::{CodeTable, HuffmanTree, Node};

/// Encode `input` into a bit sequence and the tree required to decode it.
///
/// Each element of the returned vector is a single bit, 0 or 1; the bits
/// are not packed into bytes. Codes are concatenated in input order with
/// no separators, so framing rests entirely on prefix-freedom. The tree
/// is a necessary side channel: the bits alone cannot be decoded.
///
/// The empty input returns an empty bit sequence and the empty marker
/// without building anything.
pub fn encode<S: Copy + Eq + Hash>(input: &[S]) -> (Vec<u8>, HuffmanTree<S>) {
    if input.is_empty() {
        return (Vec::new(), HuffmanTree::empty());
    }

    let mut counts: HashMap<S, u64> = HashMap::new();
    for &symbol in input {
        *counts.entry(symbol).or_insert(0) += 1;
    }

    let tree = HuffmanTree::from_frequencies(counts);
    let table = tree.code_table();

    let mut bits = Vec::new();
    for symbol in input {
        // the table covers every input symbol: it was derived from this input
        bits.extend_from_slice(&table[symbol]);
    }
    (bits, tree)
}

/// Encode `input` against a caller-supplied code table.
///
/// Useful when one distribution encodes several sequences. Unlike
/// [`encode`], the table may not cover the input; a symbol without a
/// code is reported as [`Error::UnknownSymbol`] with its position.
pub fn encode_with<S: Eq + Hash>(input: &[S], table: &CodeTable<S>) -> Result<Vec<u8>> {
    let mut bits = Vec::new();
    for (pos, symbol) in input.iter().enumerate() {
        let code = table.get(symbol).ok_or(Error::UnknownSymbol(pos))?;
        bits.extend_from_slice(code);
    }
    Ok(bits)
}

/// Decode `bits` with the tree returned by the matching [`encode`] call.
///
/// Bit `0` steps left, bit `1` steps right; landing on a leaf emits its
/// symbol and resets the walk to the root. A bit sequence that ends
/// mid-path silently discards the trailing partial path. Supplying a
/// tree other than the one `encode` returned for these bits yields
/// garbage, not an error.
pub fn decode<S: Copy>(bits: &[u8], tree: &HuffmanTree<S>) -> Vec<S> {
    let root = match tree.root() {
        Some(root) => root,
        None => return Vec::new(),
    };

    let mut out = Vec::new();
    let mut node = root;
    for &bit in bits {
        node = match node {
            Node::Inner { left, right, .. } => {
                if bit == 0 {
                    left
                } else {
                    match right {
                        Some(right) => right,
                        // only the degenerate single-symbol tree lacks a
                        // right branch, and matching input never sends a
                        // 1 bit there; stop rather than guess
                        None => return out,
                    }
                }
            }
            // the walk rests on the root or mid-path, never on a leaf
            Node::Leaf { .. } => unreachable!(),
        };

        if let Node::Leaf { symbol, .. } = node {
            out.push(*symbol);
            node = root;
        }
    }
    out
}
