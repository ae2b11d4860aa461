//! Bit deposit and extract through the BMI2 instructions.

#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// Scatters the low bits of `value` into the set bits of `mask`.
///
/// # Safety
///
/// - The CPU must support BMI2.
#[target_feature(enable = "bmi2")]
#[inline]
pub unsafe fn pdep(value: u32, mask: u32) -> u32 {
    _pdep_u32(value, mask)
}

/// Gathers the bits of `value` selected by `mask` into the low bits of the result.
///
/// # Safety
///
/// - The CPU must support BMI2.
#[target_feature(enable = "bmi2")]
#[inline]
pub unsafe fn pext(value: u32, mask: u32) -> u32 {
    _pext_u32(value, mask)
}
