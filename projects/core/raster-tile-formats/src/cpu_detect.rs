//! Runtime CPU feature detection.
//!
//! Backed by the `cpufeatures` crate: the first call queries `cpuid`, every later call is a
//! single load and compare. Callers pick a SIMD path with these unless the
//! `no-runtime-cpu-detection` feature is enabled, in which case the compile time target
//! features decide.

/// Checks if the CPU supports SSE2 (Streaming SIMD Extensions 2) instructions.
///
/// SSE2 is the baseline for the batched 8 bit colour store paths.
///
/// # Returns
/// `true` if the CPU supports SSE2 instructions, `false` otherwise.
#[inline]
#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub fn has_sse2() -> bool {
    cpufeatures::new!(cpuid_sse2, "sse2");
    cpuid_sse2::get()
}

/// Checks if the CPU supports BMI2 (Bit Manipulation Instruction Set 2) instructions.
///
/// BMI2 provides `pdep`/`pext`, used for tiled surface address swizzling.
///
/// # Returns
/// `true` if the CPU supports BMI2 instructions, `false` otherwise.
#[inline]
#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub fn has_bmi2() -> bool {
    cpufeatures::new!(cpuid_bmi2, "bmi2");
    cpuid_bmi2::get()
}
