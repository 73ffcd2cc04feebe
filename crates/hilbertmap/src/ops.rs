//! Gray code operations used by the Hilbert state machines.

/// Convert a binary index to its Binary Reflected Gray Code (BRGC) form.
pub fn graycode(x: u32) -> u32 {
    x ^ (x >> 1)
}

/// Inverse Gray code: recover binary from a BRGC value `x`.
pub fn igraycode(x: u32) -> u32 {
    let mut shift = 1;
    let mut b = x;
    while shift < u32::BITS {
        b ^= b >> shift;
        shift <<= 1;
    }
    b
}
