//! Validated pixel buffers
//!
//! The analysis core only needs a linear sequence of RGB triples. Width,
//! height and stride belong to the decoder; any alpha channel is dropped
//! when the buffer is built.

use image::{DynamicImage, Rgb, Rgba};

use crate::error::{AnalysisError, Result};

/// A single RGB pixel with channels in [0, 255]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Pixel {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a pixel from untyped channel values, checking each is in [0, 255]
    pub fn try_from_channels(r: i32, g: i32, b: i32) -> Result<Self> {
        Ok(Self {
            r: channel_to_u8("red", r)?,
            g: channel_to_u8("green", g)?,
            b: channel_to_u8("blue", b)?,
        })
    }
}

impl From<Rgb<u8>> for Pixel {
    fn from(px: Rgb<u8>) -> Self {
        let [r, g, b] = px.0;
        Self { r, g, b }
    }
}

impl From<Rgba<u8>> for Pixel {
    fn from(px: Rgba<u8>) -> Self {
        let [r, g, b, _] = px.0;
        Self { r, g, b }
    }
}

impl From<[u8; 3]> for Pixel {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

fn channel_to_u8(name: &str, value: i32) -> Result<u8> {
    u8::try_from(value).map_err(|_| {
        AnalysisError::invalid_input(format!(
            "{name} channel value {value} outside [0, 255]"
        ))
    })
}

/// Non-empty, flat sequence of pixels ready for scanning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pixels: Vec<Pixel>,
}

impl PixelBuffer {
    /// Wrap already-typed pixels
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidInput` if `pixels` is empty.
    pub fn from_pixels(pixels: Vec<Pixel>) -> Result<Self> {
        if pixels.is_empty() {
            return Err(AnalysisError::invalid_input("pixel buffer is empty"));
        }
        Ok(Self { pixels })
    }

    /// Build from interleaved RGBA bytes, as produced by a canvas or `RgbaImage`
    pub fn from_rgba_bytes(data: &[u8]) -> Result<Self> {
        Self::from_interleaved(data, 4)
    }

    /// Build from interleaved RGB bytes
    pub fn from_rgb_bytes(data: &[u8]) -> Result<Self> {
        Self::from_interleaved(data, 3)
    }

    /// Build from interleaved integer channel values
    ///
    /// `channels` must be 3 (RGB) or 4 (RGBA). Every value, alpha included,
    /// must lie in [0, 255].
    pub fn from_channel_values(values: &[i32], channels: usize) -> Result<Self> {
        check_layout(values.len(), channels)?;
        let pixels: Vec<Pixel> = values
            .chunks_exact(channels)
            .map(|px| {
                if channels == 4 {
                    channel_to_u8("alpha", px[3])?;
                }
                Pixel::try_from_channels(px[0], px[1], px[2])
            })
            .collect::<Result<_>>()?;
        debug_assert!(!pixels.is_empty());
        Ok(Self { pixels })
    }

    /// Flatten a decoded image, discarding alpha
    pub fn from_image(image: &DynamicImage) -> Result<Self> {
        let rgb = image.to_rgb8();
        Self::from_rgb_bytes(rgb.as_raw())
    }

    fn from_interleaved(data: &[u8], channels: usize) -> Result<Self> {
        check_layout(data.len(), channels)?;
        let pixels: Vec<Pixel> = data
            .chunks_exact(channels)
            .map(|px| Pixel::new(px[0], px[1], px[2]))
            .collect();
        debug_assert!(!pixels.is_empty());
        Ok(Self { pixels })
    }

    /// Number of pixels in the buffer
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// False for every constructed buffer; all constructors reject empty input
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn as_slice(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pixel> {
        self.pixels.iter()
    }
}

impl<'a> IntoIterator for &'a PixelBuffer {
    type Item = &'a Pixel;
    type IntoIter = std::slice::Iter<'a, Pixel>;

    fn into_iter(self) -> Self::IntoIter {
        self.pixels.iter()
    }
}

fn check_layout(len: usize, channels: usize) -> Result<()> {
    if channels != 3 && channels != 4 {
        return Err(AnalysisError::invalid_input(format!(
            "expected 3 or 4 channels per pixel, got {channels}"
        )));
    }
    if len == 0 {
        return Err(AnalysisError::invalid_input("pixel buffer is empty"));
    }
    if len % channels != 0 {
        return Err(AnalysisError::invalid_input(format!(
            "buffer length {len} is not a multiple of {channels} channels"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, RgbaImage};

    #[test]
    fn test_rgba_drops_alpha() {
        let buffer = PixelBuffer::from_rgba_bytes(&[200, 120, 90, 0, 10, 20, 30, 255]).unwrap();
        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.as_slice()[0], Pixel::new(200, 120, 90));
        assert_eq!(buffer.as_slice()[1], Pixel::new(10, 20, 30));
    }

    #[test]
    fn test_rgb_bytes() {
        let buffer = PixelBuffer::from_rgb_bytes(&[1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.as_slice()[2], Pixel::new(7, 8, 9));
    }

    #[test]
    fn test_constructed_buffers_are_never_empty() {
        let buffers = [
            PixelBuffer::from_rgb_bytes(&[1, 2, 3]).unwrap(),
            PixelBuffer::from_rgba_bytes(&[1, 2, 3, 4]).unwrap(),
            PixelBuffer::from_channel_values(&[1, 2, 3], 3).unwrap(),
            PixelBuffer::from_pixels(vec![Pixel::new(1, 2, 3)]).unwrap(),
        ];
        for buffer in &buffers {
            assert!(!buffer.is_empty());
            assert_eq!(buffer.len(), 1);
        }
    }

    #[test]
    fn test_empty_buffer_rejected() {
        assert!(matches!(
            PixelBuffer::from_rgba_bytes(&[]),
            Err(AnalysisError::InvalidInput { .. })
        ));
        assert!(matches!(
            PixelBuffer::from_pixels(Vec::new()),
            Err(AnalysisError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_wrong_arity_rejected() {
        assert!(matches!(
            PixelBuffer::from_rgba_bytes(&[1, 2, 3, 4, 5]),
            Err(AnalysisError::InvalidInput { .. })
        ));
        assert!(matches!(
            PixelBuffer::from_rgb_bytes(&[1, 2]),
            Err(AnalysisError::InvalidInput { .. })
        ));
        assert!(matches!(
            PixelBuffer::from_channel_values(&[1, 2, 3, 4, 5], 5),
            Err(AnalysisError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_out_of_range_channel_rejected() {
        let err = PixelBuffer::from_channel_values(&[200, 256, 90], 3).unwrap_err();
        assert!(err.to_string().contains("green channel value 256"));

        let err = PixelBuffer::from_channel_values(&[-1, 120, 90], 3).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidInput { .. }));

        let err = PixelBuffer::from_channel_values(&[200, 120, 90, 300], 4).unwrap_err();
        assert!(err.to_string().contains("alpha"));
    }

    #[test]
    fn test_channel_values_accepted() {
        let buffer = PixelBuffer::from_channel_values(&[200, 120, 90, 255, 0, 0, 0, 0], 4).unwrap();
        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.as_slice()[1], Pixel::new(0, 0, 0));
    }

    #[test]
    fn test_from_image() {
        let img: RgbaImage = ImageBuffer::from_pixel(2, 2, Rgba([200, 120, 90, 17]));
        let buffer = PixelBuffer::from_image(&DynamicImage::ImageRgba8(img)).unwrap();
        assert_eq!(buffer.len(), 4);
        assert!(buffer.iter().all(|p| *p == Pixel::new(200, 120, 90)));
    }

    #[test]
    fn test_pixel_from_image_types() {
        assert_eq!(Pixel::from(Rgb([1, 2, 3])), Pixel::new(1, 2, 3));
        assert_eq!(Pixel::from(Rgba([1, 2, 3, 4])), Pixel::new(1, 2, 3));
        assert_eq!(Pixel::from([9, 8, 7]), Pixel::new(9, 8, 7));
    }
}
