//! Textual bitstreams.
//!
//! Streams are strings of `'0'` and `'1'`, most significant bit first.
//! Readers treat any character other than `'1'` as a zero bit, so malformed
//! input degrades instead of failing.

/// Append `value` to `out` as exactly `width` bits.
///
/// Bits of `value` above `width` are dropped.
pub fn push_fixed(out: &mut String, value: u64, width: u32) {
    for i in (0..width).rev() {
        let bit = if i < u64::BITS { (value >> i) & 1 } else { 0 };
        out.push(if bit == 1 { '1' } else { '0' });
    }
}

/// Read a big-endian unsigned integer from a field of at most 64 bits.
pub fn read_fixed(bits: &[u8]) -> u64 {
    bits.iter().fold(0u64, |acc, &b| (acc << 1) | u64::from(b == b'1'))
}

/// Keep only the `0` and `1` characters of `text`.
pub fn sanitize(text: &str) -> String {
    text.chars().filter(|c| matches!(c, '0' | '1')).collect()
}
