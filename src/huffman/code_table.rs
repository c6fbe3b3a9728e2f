use log::trace;
use rustc_hash::FxHashMap;

use super::tree::{Node, NodeData};
use crate::bitstream::bitbuffer::WORD_BITS;

/// One symbol's code: `len` bits packed MSB-first into 64-bit words. The
/// final word may be only partially filled; the rest is zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code {
    pub len: usize,
    pub words: Vec<u64>,
}

impl Code {
    /// Pack a left-to-right bit path into the word representation.
    pub fn pack(bits: &[bool]) -> Self {
        let word_count = (bits.len() + WORD_BITS - 1) / WORD_BITS;
        let mut words = vec![0_u64; word_count];
        for (i, &bit) in bits.iter().enumerate() {
            if bit {
                words[i / WORD_BITS] |= 1 << (WORD_BITS - 1 - (i % WORD_BITS));
            }
        }
        Self {
            len: bits.len(),
            words,
        }
    }

    /// Render the code as "0"/"1" text, for logging and tests.
    pub fn bits(&self) -> String {
        (0..self.len)
            .map(|i| {
                if self.words[i / WORD_BITS] >> (WORD_BITS - 1 - (i % WORD_BITS)) & 1 == 1 {
                    '1'
                } else {
                    '0'
                }
            })
            .collect()
    }
}

/// Mapping from symbol to code, derived once per tree.
pub struct CodeTable {
    codes: FxHashMap<char, Code>,
}

impl CodeTable {
    /// Walk the tree depth-first, appending 0 for each left descent and 1
    /// for each right descent, and record the accumulated path at each leaf.
    ///
    /// A lone-leaf root gets the one-bit code 0 - as if a synthetic sibling
    /// occupied the right branch - so that decoding can always make progress
    /// by consuming a bit per walk.
    pub fn from_tree(root: &Node) -> Self {
        let mut codes = FxHashMap::default();
        if let NodeData::Leaf(symbol) = root.node_data {
            trace!("{:?} -> 0", symbol);
            codes.insert(symbol, Code::pack(&[false]));
            return Self { codes };
        }
        let mut path = Vec::new();
        walk(root, &mut path, &mut codes);
        Self { codes }
    }

    /// Look up a symbol's code.
    pub fn get(&self, symbol: char) -> Option<&Code> {
        self.codes.get(&symbol)
    }

    /// Number of coded symbols.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate (symbol, code) pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&char, &Code)> {
        self.codes.iter()
    }
}

fn walk(node: &Node, path: &mut Vec<bool>, codes: &mut FxHashMap<char, Code>) {
    match &node.node_data {
        NodeData::Leaf(symbol) => {
            let code = Code::pack(path);
            trace!("{:?} -> {}", symbol, code.bits());
            codes.insert(*symbol, code);
        }
        NodeData::Kids(left, right) => {
            path.push(false);
            walk(left, path, codes);
            path.pop();
            path.push(true);
            walk(right, path, codes);
            path.pop();
        }
    }
}
