use huffpack::bitstream::bitbuffer::WORD_BITS;
use huffpack::huffman::code_table::CodeTable;
use huffpack::huffman::decode::decode;
use huffpack::huffman::encode::encode;
use huffpack::huffman::tree::build_tree;
use huffpack::tools::freq_count::freqs;
use quickcheck_macros::quickcheck;
use rand::Rng;

/// Property test verifying that decoding an encoded stream of symbols
/// results in the same stream of symbols.
#[quickcheck]
fn encoder_and_decoder_cancel(input: String) -> bool {
    if input.is_empty() {
        return true;
    }
    let tree = build_tree(&input).expect("Tree build failed");
    let buffer = encode(&input, &tree).expect("Encoding failed");
    decode(&buffer, &tree).expect("Decoding failed") == input
}

/// The buffer's bit count is the sum of the per-symbol code lengths, and
/// the trailing fill count is its remainder modulo the word width.
#[quickcheck]
fn buffer_accounting_holds(input: String) -> bool {
    if input.is_empty() {
        return true;
    }
    let tree = build_tree(&input).expect("Tree build failed");
    let table = CodeTable::from_tree(&tree);
    let expected_bits: usize = input
        .chars()
        .map(|symbol| table.get(symbol).expect("missing code").len)
        .sum();
    let buffer = encode(&input, &tree).expect("Encoding failed");
    buffer.total_bits() == expected_bits && buffer.last_bits() == expected_bits % WORD_BITS
}

/// No symbol's code is a prefix of another's.
#[quickcheck]
fn codes_are_prefix_free(input: String) -> bool {
    if input.is_empty() {
        return true;
    }
    let tree = build_tree(&input).expect("Tree build failed");
    let table = CodeTable::from_tree(&tree);
    let rendered: Vec<String> = table.iter().map(|(_, code)| code.bits()).collect();
    rendered.iter().enumerate().all(|(i, a)| {
        rendered
            .iter()
            .enumerate()
            .all(|(j, b)| i == j || !b.starts_with(a.as_str()))
    })
}

/// A single repeated symbol terminates and reproduces the full count.
#[test]
fn single_symbol_sequences_round_trip() {
    let count = rand::rng().random_range(1..2000);
    let input = "x".repeat(count);
    let tree = build_tree(&input).expect("Tree build failed");
    let buffer = encode(&input, &tree).expect("Encoding failed");
    assert_eq!(buffer.total_bits(), count);
    assert_eq!(decode(&buffer, &tree).expect("Decoding failed"), input);
}

/// The worked scenario: more frequent symbols never get longer codes, and
/// the literal text survives the round trip.
#[test]
fn known_scenario_code_lengths_follow_weights() {
    let input = "aaabbbbbccccccddddee";
    let tree = build_tree(input).expect("Tree build failed");
    let table = CodeTable::from_tree(&tree);

    let mut counts = freqs(input);
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    let lens: Vec<usize> = counts
        .iter()
        .map(|&(symbol, _)| table.get(symbol).expect("missing code").len)
        .collect();
    assert!(
        lens.windows(2).all(|pair| pair[0] <= pair[1]),
        "code lengths {:?} not monotone against weights {:?}",
        lens,
        counts
    );

    let buffer = encode(input, &tree).expect("Encoding failed");
    assert_eq!(decode(&buffer, &tree).expect("Decoding failed"), input);
}

/// A stream whose bit length is an exact word multiple ends with a zero
/// fill count and one more trailing (empty) word than the bits require.
#[test]
fn exact_word_multiple_leaves_empty_trailing_word() {
    // 64 repetitions of a lone symbol encode to exactly one full word.
    let input = "y".repeat(64);
    let tree = build_tree(&input).expect("Tree build failed");
    let buffer = encode(&input, &tree).expect("Encoding failed");
    assert_eq!(buffer.total_bits(), 64);
    assert_eq!(buffer.last_bits(), 0);
    assert_eq!(buffer.word_count(), 2);
    assert_eq!(buffer.words().last(), Some(0));
    assert_eq!(decode(&buffer, &tree).expect("Decoding failed"), input);
}
