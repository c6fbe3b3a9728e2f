use log::{debug, error};

use super::code_table::CodeTable;
use super::tree::Node;
use crate::bitstream::bitbuffer::BitBuffer;
use crate::error::HuffmanError;

/// Encode the input against a previously built tree: derive the code table,
/// then splice each symbol's code onto the buffer in input order.
///
/// Fails with `CodeNotFound` when the input contains a symbol the tree has
/// never seen; the caller must rebuild the tree over an input that includes
/// it.
pub fn encode(text: &str, tree: &Node) -> Result<BitBuffer, HuffmanError> {
    let table = CodeTable::from_tree(tree);
    let mut buffer = BitBuffer::new();
    for symbol in text.chars() {
        let code = match table.get(symbol) {
            Some(code) => code,
            None => {
                error!("Symbol {:?} has no code in the tree.", symbol);
                return Err(HuffmanError::CodeNotFound(symbol));
            }
        };
        buffer.append_bits(&code.words, code.len);
    }
    debug!(
        "Encoded {} symbols over a {}-symbol alphabet into {} bits, ending at {}.",
        text.chars().count(),
        table.len(),
        buffer.total_bits(),
        buffer.loc()
    );
    Ok(buffer)
}
