//! The bitstream module is the storage layer for the packed code stream.
//!
//! Encoded bits are packed most-significant-bit-first into 64-bit words,
//! and the words are grouped into fixed-capacity blocks so that growing the
//! stream never moves what is already written.
//!
//! Block boundaries are a storage detail: nothing about the bit semantics
//! changes at a block edge.
pub mod bitbuffer;
