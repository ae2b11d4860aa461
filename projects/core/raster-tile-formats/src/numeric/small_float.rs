//! Reduced precision floats with a 5 bit exponent.
//!
//! Covers the signed 16 bit half float (10 bit mantissa) and the unsigned 11 bit (6 bit
//! mantissa) and 10 bit (5 bit mantissa) floats used by packed colour formats. All three share
//! the exponent bias of 15; only the mantissa width and the presence of a sign bit differ.

const EXPONENT_MASK: u32 = 0x1F;
const F32_EXPONENT_BIAS: u32 = 127;
const SMALL_EXPONENT_BIAS: u32 = 15;

/// `f32` biased exponent of the smallest normal small float (2^-14).
const MIN_NORMAL_F32_EXPONENT: u32 = F32_EXPONENT_BIAS - SMALL_EXPONENT_BIAS + 1;

/// Decodes a small float into an `f32`.
///
/// `MANTISSA_BITS` is the mantissa width (at most 10). When `SIGNED` is set, the bit directly
/// above the exponent is the sign bit. Zero, subnormals, infinity and NaN decode exactly.
pub fn small_float_to_f32<const MANTISSA_BITS: u32, const SIGNED: bool>(bits: u32) -> f32 {
    debug_assert!(MANTISSA_BITS <= 10);

    let mantissa_mask = (1 << MANTISSA_BITS) - 1;
    let mut mantissa = bits & mantissa_mask;
    let exponent = (bits >> MANTISSA_BITS) & EXPONENT_MASK;
    let sign = match SIGNED {
        true => ((bits >> (MANTISSA_BITS + 5)) & 1) << 31,
        false => 0,
    };
    let mantissa_shift = 23 - MANTISSA_BITS;

    let result = match exponent {
        0 if mantissa == 0 => sign,
        0 => {
            // Subnormal; normalise into an f32 exponent.
            let mut f32_exponent = MIN_NORMAL_F32_EXPONENT;
            while mantissa & (1 << MANTISSA_BITS) == 0 {
                mantissa <<= 1;
                f32_exponent -= 1;
            }
            mantissa &= mantissa_mask;
            sign | (f32_exponent << 23) | (mantissa << mantissa_shift)
        }
        EXPONENT_MASK => sign | 0x7F80_0000 | (mantissa << mantissa_shift),
        _ => {
            let f32_exponent = exponent + F32_EXPONENT_BIAS - SMALL_EXPONENT_BIAS;
            sign | (f32_exponent << 23) | (mantissa << mantissa_shift)
        }
    };

    f32::from_bits(result)
}

/// Encodes an `f32` as a small float.
///
/// Rounding truncates, except that a value whose dropped mantissa bits are all ones rounds up
/// (carrying into the exponent if needed). Magnitudes above the largest finite value saturate
/// to it, magnitudes below the smallest subnormal flush to zero. Infinity is preserved.
///
/// Unsigned variants (`SIGNED == false`) clamp every negative input to zero. NaN encodes as a
/// quiet NaN; for signed variants the sign bit of the NaN is set.
pub fn f32_to_small_float<const MANTISSA_BITS: u32, const SIGNED: bool>(value: f32) -> u32 {
    debug_assert!(MANTISSA_BITS <= 10);

    let bits = value.to_bits();
    let magnitude = bits & 0x7FFF_FFFF;
    let negative = bits >> 31 != 0;
    let sign_bit = 1 << (MANTISSA_BITS + 5);
    let mantissa_mask = (1 << MANTISSA_BITS) - 1;
    let infinity = EXPONENT_MASK << MANTISSA_BITS;

    if magnitude > 0x7F80_0000 {
        let quiet = infinity | (1 << (MANTISSA_BITS - 1));
        return match SIGNED {
            true => sign_bit | quiet,
            false => quiet,
        };
    }

    if !SIGNED && negative {
        return 0;
    }

    let sign = match SIGNED && negative {
        true => sign_bit,
        false => 0,
    };

    if magnitude == 0x7F80_0000 {
        return sign | infinity;
    }

    let mantissa_shift = 23 - MANTISSA_BITS;
    let largest_finite = ((F32_EXPONENT_BIAS + SMALL_EXPONENT_BIAS) << 23)
        | (mantissa_mask << mantissa_shift);
    if magnitude > largest_finite {
        return sign | ((EXPONENT_MASK - 1) << MANTISSA_BITS) | mantissa_mask;
    }

    let exponent = magnitude >> 23;
    let mantissa = magnitude & 0x7F_FFFF;

    if exponent < MIN_NORMAL_F32_EXPONENT {
        // Subnormal result. The implicit leading one becomes explicit.
        let shift = (MIN_NORMAL_F32_EXPONENT - exponent) + mantissa_shift;
        if shift > 24 {
            return sign;
        }

        let full = mantissa | 0x80_0000;
        let dropped = (1 << shift) - 1;
        let mut result = full >> shift;
        if full & dropped == dropped {
            result += 1;
        }
        return sign | result;
    }

    let mut small_exponent = exponent - (F32_EXPONENT_BIAS - SMALL_EXPONENT_BIAS);
    let mut small_mantissa = mantissa >> mantissa_shift;
    let dropped = (1 << mantissa_shift) - 1;
    if mantissa & dropped == dropped {
        small_mantissa += 1;
        if small_mantissa > mantissa_mask {
            small_mantissa = 0;
            small_exponent += 1;
        }
    }

    sign | (small_exponent << MANTISSA_BITS) | small_mantissa
}

/// Decodes an IEEE half float.
#[inline]
pub fn half_to_f32(bits: u16) -> f32 {
    small_float_to_f32::<10, true>(bits as u32)
}

/// Encodes an IEEE half float.
#[inline]
pub fn f32_to_half(value: f32) -> u16 {
    f32_to_small_float::<10, true>(value) as u16
}

/// Decodes an unsigned 11 bit float (5 bit exponent, 6 bit mantissa).
#[inline]
pub fn float11_to_f32(bits: u32) -> f32 {
    small_float_to_f32::<6, false>(bits & 0x7FF)
}

/// Encodes an unsigned 11 bit float (5 bit exponent, 6 bit mantissa).
#[inline]
pub fn f32_to_float11(value: f32) -> u32 {
    f32_to_small_float::<6, false>(value)
}

/// Decodes an unsigned 10 bit float (5 bit exponent, 5 bit mantissa).
#[inline]
pub fn float10_to_f32(bits: u32) -> f32 {
    small_float_to_f32::<5, false>(bits & 0x3FF)
}

/// Encodes an unsigned 10 bit float (5 bit exponent, 5 bit mantissa).
#[inline]
pub fn f32_to_float10(value: f32) -> u32 {
    f32_to_small_float::<5, false>(value)
}
