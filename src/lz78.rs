//! LZ78 (Lempel-Ziv 1978) coding over string tokens.
//!
//! The encoder walks a trie of previously seen phrases. When the current
//! phrase cannot be extended by the next token it emits a
//! `(phrase index, symbol index)` pair and registers the extended phrase
//! under the next free index. Index 0 is the empty phrase.
//!
//! Pairs are packed with two widths fixed for the whole stream:
//!
//! ```text
//! [index: idx_width bits][symbol: sym_width bits] x pairs
//! ```
//!
//! Neither width is transmitted. The decoder derives `sym_width` from the
//! alphabet and `idx_width` from the original token count, so the caller
//! must hand back the exact length used at encode time.
//!
//! If the input ends in the middle of a known phrase, a final pair
//! `(phrase index, 0)` flushes it. Its symbol field is a placeholder, not a
//! real token, and the decoder drops the overshoot by truncating to the
//! original length.

use std::collections::HashMap;

use log::{debug, trace};

use crate::bits::{push_fixed, read_fixed};
use crate::error::{Error, Result};
use crate::symbols::{self, ceil_log2, SymbolTable};

/// One emitted LZ78 token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pair {
    /// Index of the longest known prefix phrase (0 = empty phrase).
    pub index: usize,
    /// Alphabet index of the token extending it.
    pub symbol: usize,
}

/// Width of the index field for a stream of `max_value` indices.
///
/// `max(1, ceil(log2(max_value + 1)))`.
pub fn index_width(max_value: usize) -> u32 {
    ceil_log2(max_value.saturating_add(1)).max(1)
}

/// Width of the symbol field for an alphabet of `alphabet_len` symbols.
pub fn symbol_width(alphabet_len: usize) -> u32 {
    ceil_log2(alphabet_len.max(1)).max(1)
}

/// Parse a sequence into LZ78 pairs, returning them with the alphabet.
pub fn pairs<S: AsRef<str>>(tokens: &[S]) -> (Vec<Pair>, SymbolTable) {
    let (alphabet, indices) = SymbolTable::from_sequence(tokens);

    // Trie: (parent phrase, symbol) -> phrase index
    let mut trie: HashMap<(usize, usize), usize> = HashMap::new();
    let mut next_index = 1;
    let mut current = 0;
    let mut pairs = Vec::new();

    for &symbol in &indices {
        if let Some(&child) = trie.get(&(current, symbol)) {
            current = child;
            continue;
        }
        pairs.push(Pair {
            index: current,
            symbol,
        });
        trie.insert((current, symbol), next_index);
        next_index += 1;
        current = 0;
    }

    if current != 0 {
        pairs.push(Pair {
            index: current,
            symbol: 0,
        });
    }

    (pairs, alphabet)
}

/// Output of [`Lz78Coder::encode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    /// Packed pairs.
    pub bits: String,
    /// Distinct normalized symbols in first-occurrence order.
    pub alphabet: Vec<String>,
}

impl Encoded {
    /// Size of `bits` relative to a fixed-width code for `original_len` tokens.
    pub fn efficiency(&self, original_len: usize) -> f64 {
        symbols::efficiency(original_len, self.bits.len(), self.alphabet.len())
    }
}

/// LZ78 coder with fixed-width bit packing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lz78Coder;

impl Lz78Coder {
    /// Create a coder.
    pub fn new() -> Self {
        Self
    }

    /// Encode a token sequence.
    ///
    /// # Errors
    /// `EmptyInput` for an empty sequence.
    pub fn encode<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Encoded> {
        if tokens.is_empty() {
            return Err(Error::EmptyInput);
        }

        let (pairs, alphabet) = pairs(tokens);
        if alphabet.is_empty() {
            return Err(Error::NoSymbols);
        }

        // The decoder only knows the token count, which bounds both the pair
        // count and every emitted index.
        let max_index = pairs.iter().map(|p| p.index).max().unwrap_or(0);
        let idx_width = index_width(max_index.max(pairs.len()).max(tokens.len()));
        let sym_width = symbol_width(alphabet.len());

        let mut bits = String::with_capacity(pairs.len() * (idx_width + sym_width) as usize);
        for pair in &pairs {
            push_fixed(&mut bits, pair.index as u64, idx_width);
            push_fixed(&mut bits, pair.symbol as u64, sym_width);
        }

        debug!(
            "lz78: {} tokens -> {} pairs ({}+{} bits each), {} bits",
            tokens.len(),
            pairs.len(),
            idx_width,
            sym_width,
            bits.len()
        );

        Ok(Encoded {
            bits,
            alphabet: alphabet.into_vec(),
        })
    }

    /// Decode up to `length` tokens from `bits`.
    ///
    /// `length` must be the original token count; any other value derives a
    /// different index width and yields garbage or short output. Unknown
    /// phrase indices read as the empty phrase and out-of-range symbol
    /// fields add nothing.
    ///
    /// # Errors
    /// `EmptyAlphabet` if `alphabet` is empty.
    pub fn decode<S: AsRef<str>>(
        &self,
        bits: &str,
        length: usize,
        alphabet: &[S],
    ) -> Result<Vec<String>> {
        if alphabet.is_empty() {
            return Err(Error::EmptyAlphabet);
        }
        let alphabet = SymbolTable::from_symbols(alphabet);

        let sym_width = symbol_width(alphabet.len()) as usize;
        let idx_width = index_width(length) as usize;
        let chunk = idx_width + sym_width;
        let bits = bits.as_bytes();

        // Dictionary: index -> phrase as alphabet indices. Index 0 = empty.
        let mut dict: Vec<Vec<usize>> = vec![Vec::new()];
        let mut decoded: Vec<String> = Vec::new();
        let mut pos = 0;

        while decoded.len() < length && pos + chunk <= bits.len() {
            let index = read_fixed(&bits[pos..pos + idx_width]);
            let symbol = read_fixed(&bits[pos + idx_width..pos + chunk]);
            pos += chunk;

            let mut phrase = usize::try_from(index)
                .ok()
                .and_then(|i| dict.get(i))
                .cloned()
                .unwrap_or_default();
            if let Some(s) = usize::try_from(symbol).ok().filter(|&s| s < alphabet.len()) {
                phrase.push(s);
            }

            decoded.extend(
                phrase
                    .iter()
                    .filter_map(|&s| alphabet.get(s))
                    .map(str::to_owned),
            );
            dict.push(phrase);
        }

        if decoded.len() < length {
            trace!("lz78: bitstream exhausted after {} tokens", decoded.len());
        }
        decoded.truncate(length);

        debug!(
            "lz78: {} bits -> {} of {} tokens",
            bits.len(),
            decoded.len(),
            length
        );
        Ok(decoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::normalize_sequence;
    use proptest::prelude::*;

    fn chars(s: &str) -> Vec<String> {
        s.chars().map(String::from).collect()
    }

    #[test]
    fn test_lz78_alternating_roundtrip() {
        let coder = Lz78Coder::new();
        let input = chars("abababa");
        let (pairs, _) = pairs(&input);
        assert_eq!(
            pairs,
            [
                Pair { index: 0, symbol: 0 },
                Pair { index: 0, symbol: 1 },
                Pair { index: 1, symbol: 1 },
                Pair { index: 3, symbol: 0 },
            ]
        );

        let encoded = coder.encode(&input).unwrap();
        assert_eq!(encoded.alphabet, ["a", "b"]);
        assert_eq!(encoded.bits, "0000000100110110");
        let decoded = coder.decode(&encoded.bits, 7, &encoded.alphabet).unwrap();
        assert_eq!(decoded, input);
    }

    #[test]
    fn test_lz78_trailing_flush_pair() {
        let coder = Lz78Coder::new();
        let input: Vec<&str> = "the cat the cat the".split(' ').collect();
        let (pairs, _) = pairs(&input);
        assert_eq!(pairs.last(), Some(&Pair { index: 1, symbol: 0 }));

        let encoded = coder.encode(&input).unwrap();
        let decoded = coder.decode(&encoded.bits, input.len(), &encoded.alphabet).unwrap();
        assert_eq!(decoded, input);
    }

    #[test]
    fn test_lz78_repetitive_roundtrip() {
        let coder = Lz78Coder::new();
        let input = chars("aaaaaaaa");
        let encoded = coder.encode(&input).unwrap();
        assert_eq!(encoded.bits, "00000000100010000100");
        let decoded = coder.decode(&encoded.bits, 8, &encoded.alphabet).unwrap();
        assert_eq!(decoded, input);
    }

    #[test]
    fn test_lz78_normalizes_letters() {
        let coder = Lz78Coder::new();
        let encoded = coder.encode(&["A", "b", "B", "Ab"]).unwrap();
        assert_eq!(encoded.alphabet, ["a", "b", "Ab"]);
        let decoded = coder.decode(&encoded.bits, 4, &encoded.alphabet).unwrap();
        assert_eq!(decoded, ["a", "b", "b", "Ab"]);
    }

    #[test]
    fn test_side_information_read_positionally() {
        let coder = Lz78Coder::new();
        let alphabet = ["x", "x", "y"];
        let decoded = coder.decode("00100001", 2, &alphabet).unwrap();
        assert_eq!(decoded, ["y", "x"]);
    }

    #[test]
    fn test_widths() {
        assert_eq!(index_width(0), 1);
        assert_eq!(index_width(1), 1);
        assert_eq!(index_width(3), 2);
        assert_eq!(index_width(4), 3);
        assert_eq!(index_width(usize::MAX), 64);
        assert_eq!(symbol_width(0), 1);
        assert_eq!(symbol_width(1), 1);
        assert_eq!(symbol_width(2), 1);
        assert_eq!(symbol_width(3), 2);
        assert_eq!(symbol_width(5), 3);
    }

    #[test]
    fn test_empty_inputs_rejected() {
        let coder = Lz78Coder::new();
        let empty: [&str; 0] = [];
        assert_eq!(coder.encode(&empty), Err(Error::EmptyInput));
        assert_eq!(coder.decode("0101", 2, &empty), Err(Error::EmptyAlphabet));
    }

    #[test]
    fn test_wrong_length_degrades() {
        let coder = Lz78Coder::new();
        let input = chars("abababa");
        let encoded = coder.encode(&input).unwrap();
        let decoded = coder.decode(&encoded.bits, 3, &encoded.alphabet).unwrap();
        assert_eq!(decoded, ["a", "a", "a"]);

        let decoded = coder.decode(&encoded.bits, 1000, &encoded.alphabet).unwrap();
        assert!(decoded.len() <= 1000);
    }

    #[test]
    fn test_malformed_bits_never_panic() {
        let coder = Lz78Coder::new();
        let alphabet = ["x", "y", "z"];
        let decoded = coder.decode("111111111111", 4, &alphabet).unwrap();
        assert!(decoded.len() <= 4);
        let decoded = coder.decode("1", 4, &alphabet).unwrap();
        assert!(decoded.is_empty());
        let decoded = coder.decode("", usize::MAX, &alphabet).unwrap();
        assert!(decoded.is_empty());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(128))]

        #[test]
        fn prop_lz78_roundtrip(
            input in prop::collection::vec(prop::sample::select(vec!["a", "B", "b", "cd", "."]), 1..200),
        ) {
            let coder = Lz78Coder::new();
            let encoded = coder.encode(&input).unwrap();
            let decoded = coder.decode(&encoded.bits, input.len(), &encoded.alphabet).unwrap();
            prop_assert_eq!(decoded, normalize_sequence(&input));
        }
    }
}
