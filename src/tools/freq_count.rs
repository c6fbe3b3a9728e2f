use rustc_hash::FxHashMap;

/// Returns a frequency count of the input symbols, in first-appearance
/// order. The order matters: tree building breaks weight ties by it, so the
/// tree shape is a pure function of the input.
pub fn freqs(text: &str) -> Vec<(char, u32)> {
    let mut index: FxHashMap<char, usize> = FxHashMap::default();
    let mut counts: Vec<(char, u32)> = Vec::new();
    for symbol in text.chars() {
        match index.get(&symbol) {
            Some(&at) => counts[at].1 += 1,
            None => {
                index.insert(symbol, counts.len());
                counts.push((symbol, 1));
            }
        }
    }
    counts
}

#[cfg(test)]
mod test {
    use super::freqs;

    #[test]
    fn empty_input_empty_counts() {
        assert!(freqs("").is_empty());
    }

    #[test]
    fn counts_in_first_appearance_order() {
        assert_eq!(
            freqs("aaabbbbbccccccddddee"),
            vec![('a', 3), ('b', 5), ('c', 6), ('d', 4), ('e', 2)]
        );
    }

    #[test]
    fn interleaved_symbols_keep_first_appearance_order() {
        assert_eq!(freqs("abcabcbc"), vec![('a', 2), ('b', 3), ('c', 3)]);
    }

    #[test]
    fn multibyte_symbols_count_as_one() {
        assert_eq!(freqs("急急急u"), vec![('急', 3), ('u', 1)]);
    }
}
