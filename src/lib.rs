//! # Huffman Coding
//!
//! *Minimum-redundancy prefix codes from symbol frequencies.*
//!
//! ## Intuition First
//!
//! Imagine a game of twenty questions where every question must be
//! yes/no and the question plan is fixed in advance. If one answer is
//! far more likely than the rest, you ask about it first, so the common
//! case is settled in a single question and only the rare cases need
//! long question chains.
//!
//! Huffman coding applies the same idea to symbols: frequent symbols sit
//! near the root of a binary tree and receive short codes, rare symbols
//! sit deep and receive long ones. The tree grows greedily from the
//! bottom by repeatedly merging the two least frequent pending nodes
//! until a single root remains. Reading the path to each leaf (left = 0,
//! right = 1) yields a code table in which no code is a prefix of
//! another, so the concatenated output needs no separators.
//!
//! ## The Problem
//!
//! Fixed-width codes spend as many bits on the rarest symbol as on the
//! most common one. An optimal variable-width code should spend bits in
//! proportion to surprise, but variable widths raise a framing question:
//! where does one code end and the next begin? Prefix-freedom answers it
//! structurally, with no length markers in the stream.
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon     Entropy as the fundamental limit
//! 1949  Fano        Top-down splitting (Shannon-Fano), suboptimal
//! 1952  Huffman     Bottom-up greedy merge, provably optimal
//! 1987  Vitter      Adaptive Huffman with one-pass tree updates
//! 1990s DEFLATE     Canonical Huffman as the zip/gzip entropy stage
//! 2015  HPACK       Static Huffman table for HTTP/2 headers
//! ```
//!
//! ## Mathematical Formulation
//!
//! For a source with symbol probabilities $p_s$, the expected code
//! length $L$ of a Huffman code satisfies
//!
//! ```text
//! H(P) <= L < H(P) + 1,    H(P) = -sum_s p_s log2 p_s
//! ```
//!
//! and no prefix code does better than $H(P)$. The one-bit gap is the
//! price of rounding probabilities to powers of two; closing it takes
//! arithmetic coding or ANS.
//!
//! ## Complexity Analysis
//!
//! - **Construction**: $O(k \log k)$ for $k$ distinct symbols (each heap
//!   operation is $O(\log k)$, and $k - 1$ merges run).
//! - **Encoding/Decoding**: $O(1)$ amortized per output bit; tree depth,
//!   and therefore traversal recursion, is bounded by $k$, not by the
//!   input length.
//!
//! ## Failure Modes
//!
//! 1. **Tree/bits mismatch**: decoding with a tree other than the one
//!    returned by the matching encode call yields garbage, by contract.
//! 2. **Tied frequencies**: equal-weight nodes merge in unspecified
//!    order, so the exact bit patterns (never the total code length
//!    cost) may differ between runs.
//!
//! ## Implementation Notes
//!
//! This crate keeps bit sequences abstract: a code is a `Vec<u8>` whose
//! elements are the values 0 and 1. Packing bits into bytes, persisting
//! the tree, and canonical or adaptive variants are deliberately out of
//! scope.
//!
//! ## References
//!
//! - Huffman, D. A. (1952). "A Method for the Construction of
//!   Minimum-Redundancy Codes." Proceedings of the IRE, 40(9).
//! - Moffat, A. (2019). "Huffman Coding." ACM Computing Surveys, 52(4).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod error;
pub mod heap;
pub mod tree;

pub use codec::{decode, encode, encode_with};
pub use error::Error;
pub use heap::MinHeap;
pub use tree::{CodeTable, HuffmanTree, Node};
