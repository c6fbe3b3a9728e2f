use log::{debug, error};

use super::tree::{Node, NodeData};
use crate::bitstream::bitbuffer::{BitBuffer, WORD_BITS};
use crate::error::HuffmanError;

/// Resumable decode cursor over one tree.
///
/// A symbol's code may straddle word and block boundaries, so the cursor is
/// an object that survives across words rather than a per-word function:
/// feed it bits in stream order and it emits a symbol each time a
/// root-to-leaf walk completes.
pub struct TreeWalker<'a> {
    root: &'a Node,
    current: &'a Node,
}

impl<'a> TreeWalker<'a> {
    pub fn new(root: &'a Node) -> Self {
        Self {
            root,
            current: root,
        }
    }

    /// Consume one bit, descending right on 1 and left on 0. Returns the
    /// decoded symbol when the walk reaches a leaf, resetting the cursor to
    /// the root for the next code.
    pub fn step(&mut self, bit: bool) -> Option<char> {
        // A lone-leaf tree decodes one symbol per consumed bit, mirroring
        // the one-bit code the table generator reserves for it.
        if let NodeData::Leaf(symbol) = self.root.node_data {
            return Some(symbol);
        }
        if let NodeData::Kids(left, right) = &self.current.node_data {
            self.current = if bit { right } else { left };
        }
        if let NodeData::Leaf(symbol) = self.current.node_data {
            self.current = self.root;
            return Some(symbol);
        }
        None
    }

    /// True while the cursor is partway through a code.
    pub fn mid_walk(&self) -> bool {
        !std::ptr::eq(self.current, self.root)
    }
}

/// Replay the packed stream against the tree, word by word, bit by bit
/// MSB-first, and accumulate the decoded symbols.
///
/// Every non-final word contributes 64 valid bits; the final word
/// contributes only the buffer's trailing fill count. A well-formed stream
/// ends exactly on a leaf - ending partway through a code fails with
/// `TruncatedCode`.
pub fn decode(buffer: &BitBuffer, tree: &Node) -> Result<String, HuffmanError> {
    let mut walker = TreeWalker::new(tree);
    let mut output = String::new();
    let mut remaining = buffer.total_bits();

    for mut word in buffer.words() {
        if remaining == 0 {
            break;
        }
        let mut len = remaining.min(WORD_BITS);
        remaining -= len;
        while len > 0 {
            let bit = word >> (WORD_BITS - 1) == 1;
            if let Some(symbol) = walker.step(bit) {
                output.push(symbol);
            }
            word <<= 1;
            len -= 1;
        }
    }

    if walker.mid_walk() {
        error!(
            "Valid bits ran out partway through a code after {} symbols.",
            output.chars().count()
        );
        return Err(HuffmanError::TruncatedCode);
    }
    debug!(
        "Decoded {} bits into {} symbols.",
        buffer.total_bits(),
        output.chars().count()
    );
    Ok(output)
}
