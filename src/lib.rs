//! Huffman prefix-code compression engine.
//!
//! Builds a frequency-weighted binary tree from an input symbol sequence,
//! derives a variable-length bit code per distinct symbol, packs the coded
//! stream most-significant-bit-first into 64-bit words grouped into
//! fixed-capacity blocks, and decodes the packed stream back by walking the
//! tree one bit at a time.
//!
//! The tree is the contract between encoder and decoder: there is no
//! serialized header format, so both sides must share the same `Node` graph
//! out of band.
//!
//! Basic usage:
//!
//! ```
//! use huffpack::huffman::{decode::decode, encode::encode, tree::build_tree};
//!
//! let text = "abracadabra";
//! let tree = build_tree(text)?;
//! let packed = encode(text, &tree)?;
//! assert_eq!(decode(&packed, &tree)?, text);
//! # Ok::<(), huffpack::error::HuffmanError>(())
//! ```
pub mod bitstream;
pub mod error;
pub mod huffman;
pub mod tools;
