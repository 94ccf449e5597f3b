//! Zigzag mapping between signed and unsigned integers.
//!
//! `0, -1, 1, -2, 2, …` maps to `0, 1, 2, 3, 4, …`, so deltas of small
//! magnitude stay small once varint-encoded. TWKB runs every coordinate delta
//! and the precision nibble through it.

/// Zigzag-encode a 64-bit signed integer.
///
/// # Example
///
/// ```
/// use geocodec_core::zigzag;
///
/// assert_eq!(zigzag::encode(0), 0);
/// assert_eq!(zigzag::encode(-1), 1);
/// assert_eq!(zigzag::encode(1), 2);
/// assert_eq!(zigzag::decode(zigzag::encode(-100_000)), -100_000);
/// ```
pub const fn encode(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

/// Inverse of [`encode`].
pub const fn decode(value: u64) -> i64 {
    ((value >> 1) as i64) ^ -((value & 1) as i64)
}
