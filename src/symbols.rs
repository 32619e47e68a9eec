//! Token normalization and the insertion-ordered symbol table.
//!
//! Both coders index symbols by their position in first-occurrence order.
//! That index decides cumulative-frequency boundaries in the arithmetic
//! coder and the packed symbol field in LZ78, so the order is part of the
//! wire contract and is kept explicitly rather than left to a hash set.

use std::collections::HashMap;

/// Normalize a single token.
///
/// A token made of exactly one ASCII letter is lowercased; every other token
/// (words, digits, punctuation, mixed) passes through unchanged.
pub fn normalize(token: &str) -> String {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => c.to_ascii_lowercase().to_string(),
        _ => token.to_owned(),
    }
}

/// Normalize every token of a sequence.
pub fn normalize_sequence<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    tokens.iter().map(|t| normalize(t.as_ref())).collect()
}

/// Distinct symbols in first-occurrence order, with reverse lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    symbols: Vec<String>,
    index: HashMap<String, usize>,
}

impl SymbolTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize a raw sequence and collect its distinct symbols.
    ///
    /// Returns the table together with the symbol index of every token.
    pub fn from_sequence<S: AsRef<str>>(tokens: &[S]) -> (Self, Vec<usize>) {
        let mut table = Self::new();
        let indices = tokens
            .iter()
            .map(|t| table.insert(&normalize(t.as_ref())))
            .collect();
        (table, indices)
    }

    /// Adopt side information supplied by a caller, in the given order.
    ///
    /// Symbols are taken verbatim. A repeated symbol keeps its first index,
    /// but still occupies its slot so positional lookups match the caller's
    /// list.
    pub fn from_symbols<S: AsRef<str>>(symbols: &[S]) -> Self {
        let mut table = Self::new();
        for (i, s) in symbols.iter().enumerate() {
            let s = s.as_ref().to_owned();
            table.index.entry(s.clone()).or_insert(i);
            table.symbols.push(s);
        }
        table
    }

    /// Insert a symbol if absent and return its index.
    pub fn insert(&mut self, symbol: &str) -> usize {
        if let Some(&i) = self.index.get(symbol) {
            return i;
        }
        let i = self.symbols.len();
        self.symbols.push(symbol.to_owned());
        self.index.insert(symbol.to_owned(), i);
        i
    }

    /// Symbol at a given index.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.symbols.get(index).map(String::as_str)
    }

    /// Number of symbol slots.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the table holds no symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Consume the table, returning the ordered symbols.
    pub fn into_vec(self) -> Vec<String> {
        self.symbols
    }
}

/// `ceil(log2(n))`, with `ceil_log2(0) == ceil_log2(1) == 0`.
pub fn ceil_log2(n: usize) -> u32 {
    if n <= 1 {
        0
    } else {
        usize::BITS - (n - 1).leading_zeros()
    }
}

/// Compressed size relative to a fixed-width code over the same alphabet.
///
/// The baseline spends `ceil(log2(alphabet_len))` bits per token. Values
/// below 1 mean the coder beat it. Returns 0 when the baseline is empty.
pub fn efficiency(original_len: usize, compressed_bits: usize, alphabet_len: usize) -> f64 {
    let baseline = original_len as f64 * ceil_log2(alphabet_len) as f64;
    if baseline == 0.0 {
        return 0.0;
    }
    compressed_bits as f64 / baseline
}
