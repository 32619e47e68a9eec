//! Plain-text summaries of an encode run.

use std::fmt;
use std::str::FromStr;

use crate::symbols;

/// Which coder produced a bitstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Adaptive arithmetic coding.
    Arithmetic,
    /// LZ78 dictionary coding.
    Lz78,
}

impl Method {
    fn title(self) -> &'static str {
        match self {
            Method::Arithmetic => "ADAPTIVE ARITHMETIC CODING",
            Method::Lz78 => "LEMPEL-ZIV 78 CODING",
        }
    }

    fn rule(self) -> &'static str {
        match self {
            Method::Arithmetic => "================",
            Method::Lz78 => "==================",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Arithmetic => write!(f, "arithmetic"),
            Method::Lz78 => write!(f, "lz78"),
        }
    }
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "arithmetic" | "arith" | "ac" => Ok(Method::Arithmetic),
            "lz78" | "lz" => Ok(Method::Lz78),
            other => Err(format!("unknown method `{other}` (expected arithmetic or lz78)")),
        }
    }
}

/// Summary of one encode call.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Coder used.
    pub method: Method,
    /// Raw input text.
    pub input: String,
    /// Number of tokens encoded.
    pub tokens: usize,
    /// Number of distinct symbols.
    pub alphabet_len: usize,
    /// Encoded bitstream.
    pub bits: String,
}

impl Report {
    /// Compressed size relative to a fixed-width code.
    pub fn efficiency(&self) -> f64 {
        symbols::efficiency(self.tokens, self.bits.len(), self.alphabet_len)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.method.title())?;
        writeln!(f, "{}", self.method.rule())?;
        writeln!(f, "INPUT: {}", self.input)?;
        writeln!(f, "TOKENS: {}", self.tokens)?;
        writeln!(f, "BIT LENGTH: {}", self.bits.len())?;
        writeln!(f, "EFFICIENCY: {:.2}%", self.efficiency() * 100.0)?;
        writeln!(f)?;
        writeln!(f, "BINARY OUTPUT:")?;
        write!(f, "{}", self.bits)
    }
}
