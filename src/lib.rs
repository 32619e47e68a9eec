//! # Sequence Coders
//!
//! *Lossless compression of token sequences with an adaptive arithmetic coder
//! and an LZ78 dictionary coder.*
//!
//! ## Intuition First
//!
//! Think of a sentence as a walk through a small vocabulary. An arithmetic
//! coder spends bits in proportion to how surprising each step is: common
//! tokens cost a fraction of a bit, rare ones cost more. A dictionary coder
//! spends bits on *repetition* instead: once it has seen a phrase, later
//! copies are named by a single index.
//!
//! Both coders here work on tokens (words, letters, punctuation) rather than
//! bytes, and both return a plain string of `0`/`1` characters.
//!
//! ## The Problem
//!
//! - **Arithmetic coding** must narrow an interval inside `[0, 1)` once per
//!   token. The width shrinks geometrically, so a double runs out of
//!   precision after a few dozen tokens. The interval here is kept exactly.
//! - **LZ78** must pack `(phrase, symbol)` pairs without sending the field
//!   widths. Both widths are fixed for the whole stream and rederived by the
//!   decoder from side information.
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon     Entropy as the fundamental limit
//! 1976  Rissanen    Arithmetic coding: optimal rate
//! 1978  Ziv-Lempel  LZ78: adaptive dictionary compression
//! 1984  Welch       LZW: LZ78 without explicit symbols
//! 1987  Witten      Practical adaptive arithmetic coding (Witten-Neal-Cleary)
//! ```
//!
//! ## Side Information
//!
//! Neither bitstream carries framing. To decode, the caller keeps:
//!
//! - the ordered symbol set (arithmetic) or alphabet (LZ78), in
//!   first-occurrence order, exactly as returned by `encode`;
//! - the original token count.
//!
//! ## Normalization
//!
//! A token consisting of a single ASCII letter is lowercased before coding;
//! everything else is kept verbatim. Decoding returns normalized tokens.
//!
//! ## Failure Modes
//!
//! 1. **Wrong side information**: a mismatched length or symbol order yields
//!    garbage or short output, never a panic.
//! 2. **Precision exhaustion**: the arithmetic coder stops after a fixed
//!    number of bits and reports the result as inexact.
//!
//! ## Example
//!
//! ```
//! use seqcodec::{ArithmeticCoder, Lz78Coder};
//!
//! let tokens = ["A", "B", "B", "C", "A"];
//!
//! let ac = ArithmeticCoder::new();
//! let encoded = ac.encode(&tokens).unwrap();
//! let decoded = ac.decode(&encoded.bits, tokens.len(), &encoded.symbols).unwrap();
//! assert_eq!(decoded, ["a", "b", "b", "c", "a"]);
//!
//! let lz = Lz78Coder::new();
//! let encoded = lz.encode(&tokens).unwrap();
//! let decoded = lz.decode(&encoded.bits, tokens.len(), &encoded.alphabet).unwrap();
//! assert_eq!(decoded, ["a", "b", "b", "c", "a"]);
//! ```
//!
//! ## References
//!
//! - Witten, I. H., Neal, R. M., Cleary, J. G. (1987). "Arithmetic coding for data compression."
//! - Ziv, J., Lempel, A. (1978). "Compression of individual sequences via variable-rate coding."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod arithmetic;
pub mod bits;
pub mod error;
pub mod lz78;
pub mod report;
pub mod symbols;
pub mod tokenize;

pub use arithmetic::ArithmeticCoder;
pub use error::{Error, Result};
pub use lz78::Lz78Coder;
pub use report::{Method, Report};
pub use symbols::{efficiency, normalize, normalize_sequence, SymbolTable};
