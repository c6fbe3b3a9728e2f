//! The huffman module builds the code tree and runs both directions of the
//! transformation.
//!
//! Compression flows: frequency counts -> merge tree -> code table -> packed
//! bit stream. Decompression replays the packed stream against the same
//! tree, one bit at a time, emitting a symbol every time the walk reaches a
//! leaf.
//!
//! The tree is shared out of band: the packed stream alone cannot be
//! decoded, and no serialized tree format exists.
pub mod code_table;
pub mod decode;
pub mod encode;
pub mod tree;
