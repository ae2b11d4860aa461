//! Scalar numeric conversions between `f32` and component encodings.
//!
//! [`small_float`] holds the bit level reduced float codecs; [`ComponentKind`] applies the
//! per component encode/decode rules on top of them.

mod component;
pub mod small_float;

pub use component::ComponentKind;
pub use small_float::{
    f32_to_float10, f32_to_float11, f32_to_half, f32_to_small_float, float10_to_f32,
    float11_to_f32, half_to_f32, small_float_to_f32,
};
