//! Adaptive order-0 arithmetic coding over string tokens.
//!
//! Every distinct symbol starts with a count of 1 and gains 1 each time it
//! is coded, so encoder and decoder evolve the same model in lockstep.
//!
//! The coding interval `[low, high)` is held in fixed point: both bounds are
//! big integers over `2^precision`, where `precision` is the bit cap plus
//! [`GUARD_BITS`]. Sub-range boundaries are floored, so the sub-ranges of one
//! step tile the current interval exactly and the decoder retraces the
//! encoder's integers bit for bit. Memory per token stays constant no matter
//! how long the sequence is.
//!
//! The final interval is serialized as the shortest prefix of the binary
//! expansion of its midpoint that already lies inside it.

use log::{debug, trace, warn};
use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::error::{Error, Result};
use crate::symbols::{self, SymbolTable};

/// Hard cap on the number of bits emitted for one sequence.
pub const DEFAULT_MAX_BITS: usize = 2000;

/// Working precision beyond the bit cap.
pub const GUARD_BITS: usize = 64;

/// Longest sequence accepted by default.
pub const DEFAULT_MAX_TOKENS: usize = 1 << 16;

/// Adaptive frequency model with a cumulative table.
///
/// `cumul[i]` is the summed count of symbols `0..i`; `cumul[n]` is the total.
#[derive(Debug, Clone)]
struct AdaptiveModel {
    cumul: Vec<u64>,
}

impl AdaptiveModel {
    fn new(num_symbols: usize) -> Self {
        Self {
            cumul: (0..=num_symbols as u64).collect(),
        }
    }

    fn num_symbols(&self) -> usize {
        self.cumul.len() - 1
    }

    fn total(&self) -> u64 {
        self.cumul[self.num_symbols()]
    }

    /// `[cum_low, cum_high)` for a symbol.
    fn bounds(&self, symbol: usize) -> (u64, u64) {
        (self.cumul[symbol], self.cumul[symbol + 1])
    }

    fn update(&mut self, symbol: usize) {
        for c in &mut self.cumul[symbol + 1..] {
            *c += 1;
        }
    }
}

/// Fixed-point interval `[low / 2^precision, high / 2^precision)`.
#[derive(Debug, Clone)]
struct Interval {
    low: BigUint,
    high: BigUint,
    precision: usize,
}

impl Interval {
    fn unit(precision: usize) -> Self {
        Self {
            low: BigUint::zero(),
            high: BigUint::one() << precision,
            precision,
        }
    }

    fn width(&self) -> BigUint {
        &self.high - &self.low
    }

    /// Offset of the boundary at cumulative count `cum` out of `total`.
    fn boundary(&self, width: &BigUint, cum: u64, total: u64) -> BigUint {
        &self.low + width * BigUint::from(cum) / BigUint::from(total)
    }

    /// Narrow to the sub-range `[cum_low / total, cum_high / total)`.
    fn narrow(&mut self, cum_low: u64, cum_high: u64, total: u64) {
        let width = self.width();
        let high = self.boundary(&width, cum_high, total);
        self.low = self.boundary(&width, cum_low, total);
        self.high = high;
    }

    /// First symbol whose sub-range contains `value`.
    fn select(&self, value: &BigUint, model: &AdaptiveModel) -> Option<usize> {
        if *value < self.low || *value >= self.high {
            return None;
        }
        let width = self.width();
        let total = model.total();
        (0..model.num_symbols())
            .find(|&s| *value < self.boundary(&width, model.bounds(s).1, total))
    }

    /// Read a bit string as a fraction at this interval's precision.
    ///
    /// Bits past the working precision are dropped.
    fn fraction(&self, bits: &str) -> BigUint {
        let value = bits
            .bytes()
            .take(self.precision)
            .fold(BigUint::zero(), |acc, b| (acc << 1usize) + u32::from(b == b'1'));
        value << (self.precision - bits.len().min(self.precision))
    }

    /// Shortest binary prefix of the midpoint lying inside the interval.
    ///
    /// Returns the bits and whether containment was reached within
    /// `max_bits`.
    fn midpoint_bits(&self, max_bits: usize) -> (String, bool) {
        // midpoint = frac / 2^(precision + 1)
        let denom = BigUint::one() << (self.precision + 1);
        let mut frac = &self.low + &self.high;
        let mut candidate = BigUint::zero();
        let mut bits = String::new();

        for k in 1..=max_bits {
            frac <<= 1usize;
            candidate <<= 1usize;
            if frac >= denom {
                frac -= &denom;
                candidate += 1u32;
                bits.push('1');
            } else {
                bits.push('0');
            }

            let lhs = &candidate << self.precision;
            if (&self.low << k) <= lhs && lhs < (&self.high << k) {
                return (bits, true);
            }
        }
        (bits, false)
    }
}

/// Output of [`ArithmeticCoder::encode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    /// Binary fraction, most significant bit first.
    pub bits: String,
    /// Distinct normalized symbols in first-occurrence order.
    pub symbols: Vec<String>,
    /// `false` when the bit cap was hit before the fraction fell inside the
    /// final interval. The bits are then a best effort and may not decode.
    pub exact: bool,
}

impl Encoded {
    /// Size of `bits` relative to a fixed-width code for `original_len` tokens.
    pub fn efficiency(&self, original_len: usize) -> f64 {
        symbols::efficiency(original_len, self.bits.len(), self.symbols.len())
    }
}

/// Adaptive arithmetic coder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArithmeticCoder {
    max_bits: usize,
    max_tokens: usize,
}

impl ArithmeticCoder {
    /// Coder with the default bit cap and length limit.
    pub fn new() -> Self {
        Self {
            max_bits: DEFAULT_MAX_BITS,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// Set the cap on emitted bits.
    pub fn with_max_bits(mut self, max_bits: usize) -> Self {
        self.max_bits = max_bits;
        self
    }

    /// Set the longest sequence accepted by `encode` and produced by `decode`.
    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Encode a token sequence.
    ///
    /// # Errors
    /// `EmptyInput` for an empty sequence, `SequenceTooLong` above the
    /// configured limit.
    pub fn encode<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Encoded> {
        if tokens.is_empty() {
            return Err(Error::EmptyInput);
        }
        if tokens.len() > self.max_tokens {
            return Err(Error::SequenceTooLong {
                len: tokens.len(),
                max: self.max_tokens,
            });
        }

        let (table, indices) = SymbolTable::from_sequence(tokens);
        if table.is_empty() {
            return Err(Error::NoSymbols);
        }

        let mut model = AdaptiveModel::new(table.len());
        let mut interval = Interval::unit(self.precision());
        for (i, &s) in indices.iter().enumerate() {
            let (cum_low, cum_high) = model.bounds(s);
            interval.narrow(cum_low, cum_high, model.total());
            model.update(s);
            if interval.width().is_zero() {
                warn!("interval collapsed after {} of {} tokens", i + 1, indices.len());
                break;
            }
        }

        let (bits, exact) = interval.midpoint_bits(self.max_bits);
        if !exact {
            warn!(
                "bit cap of {} reached before the code fell inside the final interval",
                self.max_bits
            );
        }
        debug!(
            "arithmetic: {} tokens, {} symbols -> {} bits",
            tokens.len(),
            table.len(),
            bits.len()
        );

        Ok(Encoded {
            bits,
            symbols: table.into_vec(),
            exact,
        })
    }

    /// Decode up to `length` tokens from `bits`.
    ///
    /// The coder must be configured with the same bit cap as the one that
    /// encoded, since the cap fixes the working precision. Stops early,
    /// without error, when the bits no longer select a symbol.
    ///
    /// # Errors
    /// `EmptySymbolSet` if `symbols` is empty.
    pub fn decode<S: AsRef<str>>(
        &self,
        bits: &str,
        length: usize,
        symbols: &[S],
    ) -> Result<Vec<String>> {
        if symbols.is_empty() {
            return Err(Error::EmptySymbolSet);
        }
        let table = SymbolTable::from_symbols(symbols);

        let mut model = AdaptiveModel::new(table.len());
        let mut interval = Interval::unit(self.precision());
        let value = interval.fraction(bits);
        let mut decoded = Vec::new();

        for _ in 0..length.min(self.max_tokens) {
            let Some(s) = interval.select(&value, &model) else {
                trace!("no symbol matches after {} tokens", decoded.len());
                break;
            };
            let Some(symbol) = table.get(s) else {
                break;
            };

            let (cum_low, cum_high) = model.bounds(s);
            interval.narrow(cum_low, cum_high, model.total());
            model.update(s);
            decoded.push(symbol.to_owned());
        }

        debug!(
            "arithmetic: {} bits -> {} of {} tokens",
            bits.len(),
            decoded.len(),
            length
        );
        Ok(decoded)
    }

    fn precision(&self) -> usize {
        self.max_bits + GUARD_BITS
    }
}

impl Default for ArithmeticCoder {
    fn default() -> Self {
        Self::new()
    }
}
