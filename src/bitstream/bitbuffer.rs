/// Number of bits in one packed word.
pub const WORD_BITS: usize = 64;
/// Words per allocation block.
pub const BLOCK_WORDS: usize = 1024;

/// Append-only buffer of packed bits.
///
/// All words except the last hold exactly 64 valid bits, ordered
/// most-significant-bit-first; the last word holds `last_bits` valid
/// high-order bits and zero padding below them. The padding must never be
/// read as code bits - `total_bits` is the authoritative bit count.
#[derive(Debug)]
pub struct BitBuffer {
    /// Backing storage, segmented into blocks of `BLOCK_WORDS` words.
    blocks: Vec<Vec<u64>>,
    /// Number of valid bits written so far.
    total_bits: usize,
    /// Valid high-order bits in the trailing word, in [0, 64).
    last_bits: usize,
}

impl BitBuffer {
    /// Create an empty buffer: one block holding one zero word.
    pub fn new() -> Self {
        let mut block = Vec::with_capacity(BLOCK_WORDS);
        block.push(0_u64);
        Self {
            blocks: vec![block],
            total_bits: 0,
            last_bits: 0,
        }
    }

    /// Splice `len` bits, packed MSB-first in `words`, onto the end of the
    /// buffer. The final word of `words` may be only partially filled; every
    /// earlier word carries 64 valid bits.
    pub fn append_bits(&mut self, words: &[u64], len: usize) {
        if len == 0 {
            return;
        }
        // Valid bits in the final incoming word.
        let last = if len % WORD_BITS == 0 {
            WORD_BITS
        } else {
            len % WORD_BITS
        };

        // Every full word but the last: the top part completes the trailing
        // buffer word, the low-order remainder starts a new one. Appending
        // exactly 64 bits leaves the fill offset unchanged.
        for &word in &words[..words.len() - 1] {
            let fill = self.last_bits;
            *self.last_word_mut() |= word >> fill;
            let spill = if fill == 0 {
                0
            } else {
                word << (WORD_BITS - fill)
            };
            self.push_word(spill);
        }

        // The final (possibly partial) word, then reconcile the fill count.
        let fill = self.last_bits;
        let word = words[words.len() - 1];
        *self.last_word_mut() |= word >> fill;
        if last + fill < WORD_BITS {
            self.last_bits += last;
        } else if last + fill == WORD_BITS {
            self.last_bits = 0;
            self.push_word(0);
        } else {
            self.push_word(word << (WORD_BITS - fill));
            self.last_bits = last - (WORD_BITS - fill);
        }
        self.total_bits += len;
    }

    /// Number of valid bits written so far.
    pub fn total_bits(&self) -> usize {
        self.total_bits
    }

    /// Valid high-order bits in the trailing word, in [0, 64).
    pub fn last_bits(&self) -> usize {
        self.last_bits
    }

    /// Bytes needed to hold the valid bits.
    pub fn byte_len(&self) -> usize {
        (self.total_bits + 7) / 8
    }

    /// Total words stored, trailing word included.
    pub fn word_count(&self) -> usize {
        self.blocks.iter().map(|block| block.len()).sum()
    }

    /// Number of allocation blocks in use.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Iterate the stored words in order, across block boundaries.
    pub fn words(&self) -> impl Iterator<Item = u64> + '_ {
        self.blocks.iter().flatten().copied()
    }

    /// Debugging function to return the words.bits position written so far.
    pub fn loc(&self) -> String {
        format!(
            "[{}.{}]",
            self.total_bits / WORD_BITS,
            self.total_bits % WORD_BITS
        )
    }

    fn last_word_mut(&mut self) -> &mut u64 {
        self.blocks.last_mut().unwrap().last_mut().unwrap()
    }

    /// Append a word, opening a new block when the active one is full.
    fn push_word(&mut self, word: u64) {
        if self.blocks.last().unwrap().len() == BLOCK_WORDS {
            self.blocks.push(Vec::with_capacity(BLOCK_WORDS));
        }
        self.blocks.last_mut().unwrap().push(word);
    }
}

impl Default for BitBuffer {
    fn default() -> Self {
        Self::new()
    }
}
