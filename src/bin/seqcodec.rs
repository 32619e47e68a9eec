use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use seqcodec::bits::sanitize;
use seqcodec::tokenize::{split_auto, split_chars, split_words};
use seqcodec::{ArithmeticCoder, Lz78Coder, Method, Report};

#[derive(Parser, Debug)]
#[command(about = "Encode and decode token sequences", long_about = None)]
struct Args {
    /// Increase log verbosity (repeatable).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode text and print the bits with the side information needed to decode.
    Encode {
        /// Coder to use: arithmetic or lz78.
        #[arg(short, long, default_value = "arithmetic")]
        method: Method,

        /// Treat every character as a token.
        #[arg(long, conflicts_with = "words")]
        chars: bool,

        /// Split on whitespace even when the text has none.
        #[arg(long)]
        words: bool,

        /// The text to encode.
        text: String,
    },
    /// Decode a bitstream back into tokens.
    Decode {
        /// Coder that produced the bits: arithmetic or lz78.
        #[arg(short, long, default_value = "arithmetic")]
        method: Method,

        /// Comma-separated symbols in the order printed by `encode`.
        #[arg(short, long)]
        symbols: String,

        /// Original number of tokens.
        #[arg(short, long)]
        length: usize,

        /// The encoded bits. Characters other than 0 and 1 are ignored.
        bits: String,
    },
}

fn encode(method: Method, chars: bool, words: bool, text: String) -> Result<()> {
    // Words when the text has whitespace, characters otherwise.
    let tokens = if chars {
        split_chars(&text)
    } else if words {
        split_words(&text)
    } else {
        split_auto(&text)
    };
    if tokens.is_empty() {
        bail!("input cannot be empty");
    }

    let (bits, symbols) = match method {
        Method::Arithmetic => {
            let encoded = ArithmeticCoder::new().encode(&tokens)?;
            if !encoded.exact {
                log::warn!("output hit the bit cap and may not decode");
            }
            (encoded.bits, encoded.symbols)
        }
        Method::Lz78 => {
            let encoded = Lz78Coder::new().encode(&tokens)?;
            (encoded.bits, encoded.alphabet)
        }
    };

    let report = Report {
        method,
        input: text,
        tokens: tokens.len(),
        alphabet_len: symbols.len(),
        bits,
    };
    println!("{report}");
    println!();
    println!("SYMBOLS: {}", symbols.join(","));
    println!("LENGTH: {}", tokens.len());
    Ok(())
}

fn decode(method: Method, symbols: &str, length: usize, bits: &str) -> Result<()> {
    let symbols: Vec<&str> = symbols
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    let bits = sanitize(bits);

    let decoded = match method {
        Method::Arithmetic => ArithmeticCoder::new().decode(&bits, length, &symbols)?,
        Method::Lz78 => Lz78Coder::new().decode(&bits, length, &symbols)?,
    };
    if decoded.len() < length {
        log::warn!("decoded {} of {} tokens", decoded.len(), length);
    }
    println!("{}", decoded.join(" "));
    Ok(())
}

pub fn main() -> Result<()> {
    let args = Args::parse();

    stderrlog::new()
        .verbosity(1 + args.verbose as usize)
        .timestamp(stderrlog::Timestamp::Off)
        .init()?;

    match args.command {
        Command::Encode {
            method,
            chars,
            words,
            text,
        } => encode(method, chars, words, text),
        Command::Decode {
            method,
            symbols,
            length,
            bits,
        } => decode(method, &symbols, length, &bits),
    }
}
