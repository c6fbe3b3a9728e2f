use clap::Parser;

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Huffman prefix-code compression demonstrator",
    long_about = "
    Builds a Huffman tree over the input, encodes the input against it, and
    reports the packed size. There is no on-disk format: the tree lives only
    in memory, so the run finishes by decoding the packed stream against the
    same tree and verifying the round trip."
)]
pub struct Args {
    /// Filename of file to read; built-in sample text is used when omitted
    #[clap()]
    pub filename: Option<String>,

    /// Encode a literal string instead of a file
    #[clap(short = 't', long = "text", conflicts_with = "filename")]
    pub text: Option<String>,

    /// Skip the decode-and-compare verification pass
    #[clap(short = 'n', long = "no-verify")]
    pub no_verify: bool,

    /// Verbosity (-v for debug detail, -vv for per-code trace)
    #[clap(short = 'v', long = "verbose", parse(from_occurrences))]
    pub verbose: usize,
}
