//! Common test imports and utilities for format tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.

// External crates commonly used in tests
pub use rstest::rstest;

// Core functionality from this crate
pub use crate::allocate::{allocate_align_64, allocate_aligned};
pub use crate::format::{ComponentType, Format};
pub use crate::pixel::{convert_pixel_from_float, convert_pixel_to_float, PixelCodec};

// Standard library imports commonly used in tests
pub use safe_allocator_api::RawAlloc;
pub use std::{vec, vec::Vec};
