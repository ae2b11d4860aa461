use super::small_float::{
    f32_to_float10, f32_to_float11, f32_to_half, float10_to_f32, float11_to_f32, half_to_f32,
};
use crate::format::ComponentType;
use crate::srgb::{linear_to_srgb, srgb8_to_linear, srgb_to_linear};

/// Widths at or below this are scaled in `f32`; wider components use `f64` so that every
/// integer endpoint is exact.
const MAX_F32_EXACT_BITS: u32 = 24;

/// The conversion rule for one component, resolved from its type tag and width.
///
/// Built once per format by [`ComponentKind::new`]; unsupported type/width pairs never make it
/// this far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    /// Unsigned normalized; `srgb` applies the sRGB curve.
    Unorm { bits: u32, srgb: bool },
    /// Signed normalized.
    Snorm { bits: u32 },
    /// Unsigned integer, raw bit pattern in the float slot.
    Uint { bits: u32 },
    /// Signed integer, raw bit pattern in the float slot.
    Sint { bits: u32 },
    /// Signed 16 bit float.
    Half,
    /// Unsigned 11 bit float.
    Float11,
    /// Unsigned 10 bit float.
    Float10,
    /// 32 bit float, stored as is.
    Float32,
    /// 64 bit float.
    Float64,
    /// Unsigned integer, converted numerically.
    Uscaled { bits: u32 },
    /// Signed integer, converted numerically.
    Sscaled { bits: u32 },
    /// Signed 16.16 fixed point.
    Sfixed,
    /// Padding.
    Unused,
}

impl ComponentKind {
    /// Resolves the rule for a component of type `ty` and width `bits`.
    ///
    /// `srgb` only has an effect on [`ComponentType::Unorm`]. Returns [`None`] for pairs that
    /// have no conversion rule.
    pub fn new(ty: ComponentType, bits: u32, srgb: bool) -> Option<Self> {
        let kind = match (ty, bits) {
            (ComponentType::Unorm, 1..=32) => Self::Unorm { bits, srgb },
            (ComponentType::Snorm, 2..=32) => Self::Snorm { bits },
            (ComponentType::Uint, 1..=32) => Self::Uint { bits },
            (ComponentType::Sint, 1..=32) => Self::Sint { bits },
            (ComponentType::Float, 16) => Self::Half,
            (ComponentType::Float, 11) => Self::Float11,
            (ComponentType::Float, 10) => Self::Float10,
            (ComponentType::Float, 32) => Self::Float32,
            (ComponentType::Float, 64) => Self::Float64,
            (ComponentType::Uscaled, 1..=32) => Self::Uscaled { bits },
            (ComponentType::Sscaled, 2..=32) => Self::Sscaled { bits },
            (ComponentType::Sfixed, 32) => Self::Sfixed,
            (ComponentType::Unused, 1..=64) => Self::Unused,
            _ => return None,
        };
        Some(kind)
    }

    /// The component carries no value.
    #[inline]
    pub fn is_unused(self) -> bool {
        matches!(self, Self::Unused)
    }

    /// Encodes `value` into the low bits of the result.
    pub fn encode(self, value: f32) -> u64 {
        match self {
            Self::Unorm { bits, srgb } => encode_unorm(value, bits, srgb),
            Self::Snorm { bits } => encode_snorm(value, bits),
            Self::Uint { bits } => {
                let raw = value.to_bits();
                match bits < 32 {
                    true => raw.min(max_unsigned(bits) as u32) as u64,
                    false => raw as u64,
                }
            }
            Self::Sint { bits } => {
                let raw = value.to_bits() as i32;
                let clamped = match bits < 32 {
                    true => raw.clamp(min_signed(bits) as i32, max_signed(bits) as i32),
                    false => raw,
                };
                clamped as u32 as u64 & mask(bits)
            }
            Self::Half => f32_to_half(value) as u64,
            Self::Float11 => f32_to_float11(value) as u64,
            Self::Float10 => f32_to_float10(value) as u64,
            Self::Float32 => value.to_bits() as u64,
            Self::Float64 => (value as f64).to_bits(),
            Self::Uscaled { bits } => {
                let value = not_nan(value) as f64;
                value.clamp(0.0, max_unsigned(bits) as f64).round() as u64
            }
            Self::Sscaled { bits } => {
                let value = not_nan(value) as f64;
                let clamped = value.clamp(min_signed(bits) as f64, max_signed(bits) as f64);
                clamped.round() as i64 as u64 & mask(bits)
            }
            Self::Sfixed => {
                let fixed = (not_nan(value) as f64 * 65536.0).round();
                fixed.clamp(i32::MIN as f64, i32::MAX as f64) as i32 as u32 as u64
            }
            Self::Unused => 0,
        }
    }

    /// Decodes the low bits of `raw`.
    pub fn decode(self, raw: u64) -> f32 {
        match self {
            Self::Unorm { bits, srgb } => decode_unorm(raw, bits, srgb),
            Self::Snorm { bits } => {
                let value = sign_extend(raw, bits);
                if value == min_signed(bits) {
                    return -1.0;
                }
                match bits <= MAX_F32_EXACT_BITS {
                    true => value as f32 / max_signed(bits) as f32,
                    false => (value as f64 / max_signed(bits) as f64) as f32,
                }
            }
            Self::Uint { .. } => f32::from_bits(raw as u32),
            Self::Sint { bits } => f32::from_bits(sign_extend(raw, bits) as i32 as u32),
            Self::Half => half_to_f32(raw as u16),
            Self::Float11 => float11_to_f32(raw as u32),
            Self::Float10 => float10_to_f32(raw as u32),
            Self::Float32 => f32::from_bits(raw as u32),
            Self::Float64 => f64::from_bits(raw) as f32,
            Self::Uscaled { .. } => raw as f32,
            Self::Sscaled { bits } => sign_extend(raw, bits) as f32,
            Self::Sfixed => (raw as u32 as i32) as f32 / 65536.0,
            Self::Unused => 0.0,
        }
    }
}

fn encode_unorm(value: f32, bits: u32, srgb: bool) -> u64 {
    let value = not_nan(value).clamp(0.0, 1.0);
    let value = match srgb {
        true => linear_to_srgb(value),
        false => value,
    };

    // Ties round to even, matching `_mm_cvtps_epi32` in the batched converters.
    let max = max_unsigned(bits);
    match bits <= MAX_F32_EXACT_BITS {
        true => (value * max as f32).round_ties_even() as u64,
        false => (value as f64 * max as f64).round_ties_even() as u64,
    }
}

fn decode_unorm(raw: u64, bits: u32, srgb: bool) -> f32 {
    if srgb && bits == 8 {
        return srgb8_to_linear(raw as u8);
    }

    let max = max_unsigned(bits);
    let linear = if bits <= 16 {
        // The reciprocal is exact enough that `max * (1 / max)` is still 1.0 at these widths.
        raw as f32 * (1.0 / max as f32)
    } else {
        (raw as f64 / max as f64) as f32
    };

    match srgb {
        true => srgb_to_linear(linear),
        false => linear,
    }
}

fn encode_snorm(value: f32, bits: u32) -> u64 {
    let max = max_signed(bits);
    let value = not_nan(value).clamp(-1.0, 1.0);
    let scaled = match bits <= MAX_F32_EXACT_BITS {
        true => (value * max as f32).round() as i64,
        false => (value as f64 * max as f64).round() as i64,
    };
    scaled as u64 & mask(bits)
}

#[inline(always)]
fn not_nan(value: f32) -> f32 {
    match value.is_nan() {
        true => 0.0,
        false => value,
    }
}

#[inline(always)]
fn mask(bits: u32) -> u64 {
    match bits >= 64 {
        true => u64::MAX,
        false => (1u64 << bits) - 1,
    }
}

#[inline(always)]
fn max_unsigned(bits: u32) -> u64 {
    mask(bits)
}

#[inline(always)]
fn max_signed(bits: u32) -> i64 {
    (1i64 << (bits - 1)) - 1
}

#[inline(always)]
fn min_signed(bits: u32) -> i64 {
    -(1i64 << (bits - 1))
}

#[inline(always)]
fn sign_extend(raw: u64, bits: u32) -> i64 {
    let shift = 64 - bits;
    ((raw << shift) as i64) >> shift
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    fn kind(ty: ComponentType, bits: u32) -> ComponentKind {
        ComponentKind::new(ty, bits, false).unwrap()
    }

    #[test]
    fn unorm_endpoints_are_exact_for_every_width() {
        for bits in 1..=32 {
            let unorm = kind(ComponentType::Unorm, bits);
            assert_eq!(unorm.encode(1.0), max_unsigned(bits), "bits {bits}");
            assert_eq!(unorm.decode(unorm.encode(1.0)), 1.0, "bits {bits}");
            assert_eq!(unorm.decode(unorm.encode(0.0)), 0.0, "bits {bits}");
        }
    }

    #[test]
    fn snorm_minus_one_decodes_exactly() {
        for bits in 2..=32 {
            let snorm = kind(ComponentType::Snorm, bits);
            assert_eq!(snorm.decode(snorm.encode(-1.0)), -1.0, "bits {bits}");
            assert_eq!(snorm.decode(snorm.encode(1.0)), 1.0, "bits {bits}");
            // The reserved most negative encoding also decodes to -1.
            assert_eq!(snorm.decode(1 << (bits - 1)), -1.0, "bits {bits}");
        }
    }

    #[test]
    fn unorm_halfway_values_round_to_even() {
        // 0.5 * (2^n - 1) always lands exactly on a tie.
        assert_eq!(kind(ComponentType::Unorm, 1).encode(0.5), 0);
        for bits in 2..=32 {
            let unorm = kind(ComponentType::Unorm, bits);
            assert_eq!(unorm.encode(0.5), 1 << (bits - 1), "bits {bits}");
        }
    }

    #[rstest]
    #[case(0.5, 0x80)] // 127.5 ties to even
    #[case(0.25, 0x40)] // 63.75
    #[case(-3.0, 0x00)]
    #[case(7.0, 0xFF)]
    #[case(f32::NAN, 0x00)]
    fn unorm8_encode(#[case] value: f32, #[case] expected: u64) {
        assert_eq!(kind(ComponentType::Unorm, 8).encode(value), expected);
    }

    #[rstest]
    #[case(0.5, 0x40)] // 63.5 rounds away from zero
    #[case(-0.5, 0xC0)] // -63.5 rounds away from zero
    #[case(-2.0, 0x81)]
    #[case(2.0, 0x7F)]
    fn snorm8_encode(#[case] value: f32, #[case] expected: u64) {
        assert_eq!(kind(ComponentType::Snorm, 8).encode(value), expected);
    }

    #[test]
    fn srgb_endpoints_and_mid_grey() {
        let srgb = ComponentKind::new(ComponentType::Unorm, 8, true).unwrap();
        assert_eq!(srgb.encode(0.0), 0);
        assert_eq!(srgb.encode(1.0), 255);
        assert_eq!(srgb.decode(255), 1.0);
        // Mid grey encodes well above half.
        assert_eq!(srgb.encode(0.5), 188);
    }

    #[test]
    fn uint_is_bit_reinterpreted_not_cast() {
        let uint = kind(ComponentType::Uint, 8);
        assert_eq!(uint.encode(f32::from_bits(200)), 200);
        assert_eq!(uint.encode(f32::from_bits(1000)), 255);
        // A numeric 1.0 is a huge integer and clamps.
        assert_eq!(uint.encode(1.0), 255);
        assert_eq!(uint.decode(42).to_bits(), 42);

        let uint32 = kind(ComponentType::Uint, 32);
        assert_eq!(uint32.encode(f32::from_bits(0xDEAD_BEEF)), 0xDEAD_BEEF);
    }

    #[test]
    fn sint_is_bit_reinterpreted_and_clamped() {
        let sint = kind(ComponentType::Sint, 8);
        assert_eq!(sint.encode(f32::from_bits(-5i32 as u32)), 0xFB);
        assert_eq!(sint.encode(f32::from_bits(-500i32 as u32)), 0x80);
        assert_eq!(sint.encode(f32::from_bits(500)), 0x7F);
        assert_eq!(sint.decode(0xFB).to_bits() as i32, -5);
    }

    #[rstest]
    #[case(ComponentType::Uscaled, 8, 3.4, 3, 3.0)]
    #[case(ComponentType::Uscaled, 8, 300.0, 255, 255.0)]
    #[case(ComponentType::Sscaled, 8, -3.6, 0xFC, -4.0)]
    #[case(ComponentType::Sscaled, 16, -40000.0, 0x8000, -32768.0)]
    fn scaled_components_convert_numerically(
        #[case] ty: ComponentType,
        #[case] bits: u32,
        #[case] value: f32,
        #[case] encoded: u64,
        #[case] decoded: f32,
    ) {
        let scaled = kind(ty, bits);
        assert_eq!(scaled.encode(value), encoded);
        assert_eq!(scaled.decode(encoded), decoded);
    }

    #[test]
    fn sfixed_is_16_16() {
        let fixed = kind(ComponentType::Sfixed, 32);
        assert_eq!(fixed.encode(1.5), 0x0001_8000);
        assert_eq!(fixed.encode(-1.0), 0xFFFF_0000);
        assert_eq!(fixed.decode(0xFFFF_0000), -1.0);
    }

    #[test]
    fn float64_widens_and_narrows() {
        let double = kind(ComponentType::Float, 64);
        assert_eq!(double.encode(0.1), (0.1f32 as f64).to_bits());
        assert_eq!(double.decode(2.5f64.to_bits()), 2.5);
    }

    #[rstest]
    #[case(ComponentType::Float, 24)]
    #[case(ComponentType::Snorm, 1)]
    #[case(ComponentType::Unorm, 0)]
    #[case(ComponentType::Sfixed, 16)]
    #[case(ComponentType::Unknown, 8)]
    fn unsupported_pairs_have_no_rule(#[case] ty: ComponentType, #[case] bits: u32) {
        assert_eq!(ComponentKind::new(ty, bits, false), None);
    }
}
