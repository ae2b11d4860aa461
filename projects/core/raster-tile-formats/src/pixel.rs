//! Whole pixel conversion between the canonical `[f32; 4]` (RGBA) representation and a
//! format's packed bytes.
//!
//! A [`PixelCodec`] is resolved once per format from the trait table and cached for the life
//! of the process; [`convert_pixel_from_float`] and [`convert_pixel_to_float`] are the checked
//! entry points.

use crate::error::ConversionError;
use crate::format::Format;
use crate::numeric::ComponentKind;
use once_cell::sync::Lazy;

/// Size of the widest pixel of any transferable format (`R64G64B64A64_FLOAT`).
pub const MAX_BYTES_PER_PIXEL: usize = 32;

static CODECS: Lazy<Vec<Result<PixelCodec, ConversionError>>> =
    Lazy::new(|| Format::ALL.iter().map(|&format| PixelCodec::build(format)).collect());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PackedComponent {
    kind: ComponentKind,
    bit_offset: u32,
    bits: u32,
    slot: usize,
}

/// Packs and unpacks single pixels of one format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelCodec {
    format: Format,
    bytes_per_pixel: usize,
    components: Vec<PackedComponent>,
    defaults: [u32; 4],
    luminance: bool,
}

impl PixelCodec {
    /// Returns the cached codec for `format`.
    ///
    /// # Errors
    ///
    /// [`ConversionError::Untransferable`] for block compressed and subsampled formats, and
    /// [`ConversionError::UnsupportedComponent`] if a component has no conversion rule.
    pub fn for_format(format: Format) -> Result<&'static PixelCodec, ConversionError> {
        match &CODECS[format.row()] {
            Ok(codec) => Ok(codec),
            Err(e) => Err(*e),
        }
    }

    fn build(format: Format) -> Result<PixelCodec, ConversionError> {
        let info = format.info();
        if info.is_block_compressed || info.is_subsampled {
            return Err(ConversionError::Untransferable(format));
        }

        let mut components = Vec::with_capacity(info.num_components as usize);
        let mut bit_offset = 0;
        for (component, (ty, bits, slot)) in info.components().enumerate() {
            // Alpha is never gamma encoded.
            let srgb = info.is_srgb && slot != 3;
            let kind = ComponentKind::new(ty, bits, srgb).ok_or(
                ConversionError::UnsupportedComponent {
                    format,
                    component,
                    ty,
                    bits,
                },
            )?;

            components.push(PackedComponent {
                kind,
                bit_offset,
                bits,
                slot,
            });
            bit_offset += bits;
        }

        debug_assert!(bit_offset <= info.bits_per_pixel);
        debug_assert!(info.bytes_per_pixel as usize <= MAX_BYTES_PER_PIXEL);
        Ok(PixelCodec {
            format,
            bytes_per_pixel: info.bytes_per_pixel as usize,
            components,
            defaults: info.defaults,
            luminance: info.is_luminance,
        })
    }

    /// The format this codec converts.
    #[inline]
    pub fn format(&self) -> Format {
        self.format
    }

    /// Size of one packed pixel.
    #[inline]
    pub fn bytes_per_pixel(&self) -> usize {
        self.bytes_per_pixel
    }

    /// Default RGBA values, used for slots the format does not declare.
    #[inline]
    pub fn defaults(&self) -> [f32; 4] {
        self.defaults.map(f32::from_bits)
    }

    /// Packs `src` into the first [`bytes_per_pixel`] bytes of `dst`.
    ///
    /// Only the bits owned by declared components are written; the rest of `dst` is left as
    /// is.
    ///
    /// # Panics
    ///
    /// If `dst` is shorter than [`bytes_per_pixel`].
    ///
    /// [`bytes_per_pixel`]: PixelCodec::bytes_per_pixel
    #[inline]
    pub fn encode(&self, dst: &mut [u8], src: &[f32; 4]) {
        let dst = &mut dst[..self.bytes_per_pixel];
        for component in &self.components {
            let raw = component.kind.encode(src[component.slot]);
            write_bits(dst, component.bit_offset, component.bits, raw);
        }
    }

    /// Unpacks the first [`bytes_per_pixel`] bytes of `src`.
    ///
    /// # Panics
    ///
    /// If `src` is shorter than [`bytes_per_pixel`].
    ///
    /// [`bytes_per_pixel`]: PixelCodec::bytes_per_pixel
    #[inline]
    pub fn decode(&self, src: &[u8]) -> [f32; 4] {
        let src = &src[..self.bytes_per_pixel];
        let mut out = self.defaults();
        for component in &self.components {
            if component.kind.is_unused() {
                continue;
            }

            let raw = read_bits(src, component.bit_offset, component.bits);
            out[component.slot] = component.kind.decode(raw);
        }

        if self.luminance {
            out[1] = out[0];
            out[2] = out[0];
        }
        out
    }
}

/// Converts one canonical RGBA pixel into `format`, writing the packed bytes to `dst`.
///
/// # Errors
///
/// If the format has no per-pixel conversion, or `dst` cannot hold one pixel.
pub fn convert_pixel_from_float(
    format: Format,
    dst: &mut [u8],
    src: &[f32; 4],
) -> Result<(), ConversionError> {
    let codec = PixelCodec::for_format(format)?;
    check_len(codec, dst.len())?;
    codec.encode(dst, src);
    Ok(())
}

/// Converts one packed pixel of `format` into canonical RGBA.
///
/// Slots the format does not declare hold the format's defaults.
///
/// # Errors
///
/// If the format has no per-pixel conversion, or `src` is shorter than one pixel.
pub fn convert_pixel_to_float(format: Format, src: &[u8]) -> Result<[f32; 4], ConversionError> {
    let codec = PixelCodec::for_format(format)?;
    check_len(codec, src.len())?;
    Ok(codec.decode(src))
}

#[inline]
fn check_len(codec: &PixelCodec, actual: usize) -> Result<(), ConversionError> {
    match actual < codec.bytes_per_pixel {
        true => Err(ConversionError::BufferTooSmall {
            needed: codec.bytes_per_pixel,
            actual,
        }),
        false => Ok(()),
    }
}

/// Reads `bits` bits (at most 64) starting `offset` bits into little endian `src`.
fn read_bits(src: &[u8], offset: u32, bits: u32) -> u64 {
    let mut value = 0u64;
    let mut done = 0;
    while done < bits {
        let position = offset + done;
        let shift = position % 8;
        let take = (8 - shift).min(bits - done);
        let chunk = (src[(position / 8) as usize] >> shift) as u64 & ((1 << take) - 1);
        value |= chunk << done;
        done += take;
    }
    value
}

/// Writes the low `bits` bits of `value` starting `offset` bits into little endian `dst`.
fn write_bits(dst: &mut [u8], offset: u32, bits: u32, value: u64) {
    let mut done = 0;
    while done < bits {
        let position = offset + done;
        let shift = position % 8;
        let take = (8 - shift).min(bits - done);
        let mask = (((1u16 << take) - 1) << shift) as u8;
        let chunk = ((value >> done) as u8) << shift;
        let byte = &mut dst[(position / 8) as usize];
        *byte = (*byte & !mask) | (chunk & mask);
        done += take;
    }
}
