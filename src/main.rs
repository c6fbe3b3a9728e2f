//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::fs;
use std::io::{self, Error};

use clap::Parser;
use log::{error, info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

use huffpack::huffman::decode::decode;
use huffpack::huffman::encode::encode;
use huffpack::huffman::tree::build_tree;
use huffpack::tools::cli::Args;

/// Built-in sample used when no input is given.
const SAMPLE: &str = "aaabbbbbccccccddddee";

fn main() -> Result<(), std::io::Error> {
    let args = Args::parse();

    // Available log levels are Error, Warn, Info, Debug, Trace
    TermLogger::init(
        match args.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        },
        Config::default(),
        TerminalMode::Stdout,
        simplelog::ColorChoice::AlwaysAnsi,
    )
    .unwrap();

    let text = match (&args.filename, &args.text) {
        (Some(name), _) => fs::read_to_string(name)?,
        (None, Some(literal)) => literal.clone(),
        (None, None) => SAMPLE.to_string(),
    };

    let tree = match build_tree(&text) {
        Ok(tree) => tree,
        Err(e) => {
            error!("{}", e);
            return Err(Error::new(io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    let buffer = match encode(&text, &tree) {
        Ok(buffer) => buffer,
        Err(e) => {
            error!("{}", e);
            return Err(Error::new(io::ErrorKind::InvalidData, e.to_string()));
        }
    };
    info!(
        "Encoded {} bytes as {} bytes ({} bits in {} words, {} valid in the last).",
        text.len(),
        buffer.byte_len(),
        buffer.total_bits(),
        buffer.word_count(),
        buffer.last_bits()
    );

    if !args.no_verify {
        match decode(&buffer, &tree) {
            Ok(output) if output == text => info!("Round trip verified."),
            Ok(_) => {
                error!("Round trip mismatch.");
                return Err(Error::new(io::ErrorKind::InvalidData, "round trip mismatch"));
            }
            Err(e) => {
                error!("{}", e);
                return Err(Error::new(io::ErrorKind::InvalidData, e.to_string()));
            }
        }
    }

    info!("Done.");
    Ok(())
}
