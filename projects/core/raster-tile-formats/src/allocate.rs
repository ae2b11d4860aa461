//! Aligned allocation helpers.
//!
//! Surfaces and hot tiles are owned by the caller, but tests, benches and fuzz targets need
//! backing memory with the alignment a real rasterizer would give them. Tiled surfaces in
//! particular must start on a 4 KiB boundary for the batched store paths to be selected.
//!
//! [`allocate_align_64`]: Allocates zeroed memory aligned to 64 bytes.
//! [`allocate_aligned`]: Allocates zeroed memory with an arbitrary power of two alignment.

use core::alloc::{Layout, LayoutError};
use safe_allocator_api::allocator_api::*;
use safe_allocator_api::RawAlloc;
use thiserror::Error;

/// Alignment of a tiled surface base address.
pub const PAGE_ALIGNMENT: usize = 4096;

/// Allocates zeroed data with an alignment of 64 bytes.
///
/// # Parameters
///
/// - `num_bytes`: The number of bytes to allocate
///
/// # Returns
///
/// A [`RawAlloc`] containing the allocated data
pub fn allocate_align_64(num_bytes: usize) -> Result<RawAlloc, AllocateError> {
    allocate_aligned(num_bytes, 64)
}

/// Allocates zeroed data with the given alignment.
///
/// # Parameters
///
/// - `num_bytes`: The number of bytes to allocate
/// - `align`: The alignment; must be a power of two
///
/// # Returns
///
/// A [`RawAlloc`] containing the allocated data
pub fn allocate_aligned(num_bytes: usize, align: usize) -> Result<RawAlloc, AllocateError> {
    let layout = Layout::from_size_align(num_bytes, align)?;
    let mut alloc = RawAlloc::new(layout)?;
    unsafe {
        core::ptr::write_bytes(alloc.as_mut_ptr(), 0, num_bytes);
    }
    Ok(alloc)
}

/// An error that happened in memory allocation within the library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocateError {
    /// An error that occurred while creating a layout for allocation.
    #[error("Invalid layout provided. Likely due to `num_bytes` being larger than isize::MAX or `align` not being a power of two. {0}")]
    LayoutError(#[from] LayoutError),

    /// An error that occurred while allocating memory.
    #[error(transparent)]
    AllocationFailed(#[from] AllocError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case(64)]
    #[case(PAGE_ALIGNMENT)]
    fn allocations_are_aligned_and_zeroed(#[case] align: usize) {
        let alloc = allocate_aligned(3 * align + 5, align).unwrap();
        assert_eq!(alloc.as_ptr() as usize % align, 0);
        assert!(alloc.as_slice().iter().all(|&x| x == 0));
    }

    #[test]
    fn non_power_of_two_alignment_is_rejected() {
        assert!(matches!(
            allocate_aligned(16, 48),
            Err(AllocateError::LayoutError(_))
        ));
    }
}
