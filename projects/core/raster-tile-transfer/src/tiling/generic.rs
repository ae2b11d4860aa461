//! Portable bit deposit and extract.

/// Scatters the low bits of `value` into the set bits of `mask`, lowest first.
#[inline]
pub fn pdep(mut value: u32, mut mask: u32) -> u32 {
    let mut result = 0;
    while mask != 0 {
        let lowest = mask & mask.wrapping_neg();
        if value & 1 != 0 {
            result |= lowest;
        }
        value >>= 1;
        mask &= mask - 1;
    }
    result
}

/// Gathers the bits of `value` selected by `mask` into the low bits of the result.
#[inline]
pub fn pext(value: u32, mut mask: u32) -> u32 {
    let mut result = 0;
    let mut bit = 0;
    while mask != 0 {
        let lowest = mask & mask.wrapping_neg();
        if value & lowest != 0 {
            result |= 1 << bit;
        }
        bit += 1;
        mask &= mask - 1;
    }
    result
}
