/// Errors surfaced by tree building, encoding, and decoding.
///
/// `EmptyInput` is recoverable (the caller can treat it as an empty output).
/// The other two are fatal to the call that produced them: `CodeNotFound`
/// means the tree must be rebuilt over an input that includes the symbol,
/// and `TruncatedCode` means the buffer is corrupt or was encoded against a
/// different tree.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum HuffmanError {
    #[error("no symbols to build a tree from")]
    EmptyInput,
    #[error("symbol {0:?} has no code in the tree")]
    CodeNotFound(char),
    #[error("bit stream ended in the middle of a code")]
    TruncatedCode,
}
