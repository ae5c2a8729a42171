//! Bit-label combinatorics
//!
//! Index `i` of a constellation IS its m-bit label. Enumerating the points
//! whose k-th bit has a fixed value is done by counting over the other m-1
//! bits and opening a zero "hole" at position k.

/// Number of label bits for a power-of-two order
#[inline]
pub fn bits_per_symbol(order: usize) -> u32 {
    order.trailing_zeros()
}

/// Insert a zero bit at position `k` of the (m-1)-bit value `i`
///
/// Bits of `i` below `k` stay in place; bits at or above `k` shift up by one.
///
/// # Arguments
/// * `i` - Partial index, 0 ≤ i < 2^(m-1)
/// * `k` - Hole position, 0 ≤ k < m
/// * `m` - Total label width in bits
///
/// # Returns
/// The m-bit index with bit `k` cleared
#[inline]
pub fn insert_zero(i: usize, k: u32, m: u32) -> usize {
    debug_assert!(k < m, "bit position {} out of range for {} bits", k, m);
    let above = ((1usize << (m - k)) - 1) << (k + 1);
    let below = (1usize << k) - 1;
    ((i << 1) & above) | (i & below)
}

/// Indices of the 2^(m-1) labels whose bit `k` equals `b`, in ascending order
pub fn label_subset(k: u32, b: usize, m: u32) -> impl Iterator<Item = usize> {
    debug_assert!(b <= 1);
    let half = 1usize << (m - 1);
    (0..half).map(move |i| insert_zero(i, k, m) | (b << k))
}
