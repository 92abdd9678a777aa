//! Image - host-owned pixel buffer handed to the recognition backend
//!
//! An [`Image`] is filled by the host and then borrowed by the engine for
//! the duration of `load_image`. The backend copies the pixels into its own
//! storage, so the `Image` can be dropped or reused right after loading.
//!
//! # Pixel layout
//!
//! - Rows are `bytes_per_line` bytes apart
//! - Images built with [`Image::new`] are 32-bit RGBA, one byte per channel,
//!   red first
//! - [`Image::from_raw`] accepts any layout; it is checked by
//!   [`Image::validate`] when loaded, not when constructed

use crate::error::{Error, Result};

/// Bytes per pixel of images created by [`Image::new`].
pub const RGBA_BYTES_PER_PIXEL: u32 = 4;

/// Pixel buffer plus the geometry needed to interpret it.
///
/// # Examples
///
/// ```
/// use pageocr_core::Image;
///
/// let mut image = Image::new(4, 2);
/// image.put_rgba(1, 1, [255, 255, 255, 255]);
/// assert_eq!(image.bytes_per_line(), 16);
/// assert!(image.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    bytes_per_pixel: u32,
    bytes_per_line: u32,
    data: Vec<u8>,
}

impl Image {
    /// Create a zeroed 32-bit RGBA image.
    ///
    /// A zero width or height produces an empty buffer which `load_image`
    /// will reject.
    pub fn new(width: u32, height: u32) -> Self {
        let bytes_per_line = width.saturating_mul(RGBA_BYTES_PER_PIXEL);
        let len = (bytes_per_line as usize).saturating_mul(height as usize);
        Self {
            width,
            height,
            bytes_per_pixel: RGBA_BYTES_PER_PIXEL,
            bytes_per_line,
            data: vec![0u8; len],
        }
    }

    /// Wrap an existing pixel buffer without validating it.
    pub fn from_raw(
        data: Vec<u8>,
        width: u32,
        height: u32,
        bytes_per_pixel: u32,
        bytes_per_line: u32,
    ) -> Self {
        Self {
            width,
            height,
            bytes_per_pixel,
            bytes_per_line,
            data,
        }
    }

    /// Convert any decoded image to 32-bit RGBA.
    pub fn from_dynamic(image: &::image::DynamicImage) -> Self {
        Self::from(image.to_rgba8())
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn bytes_per_pixel(&self) -> u32 {
        self.bytes_per_pixel
    }

    #[inline]
    pub fn bytes_per_line(&self) -> u32 {
        self.bytes_per_line
    }

    /// Get raw access to the pixel data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get mutable access to the pixel data for the host to fill.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the image and return its pixel buffer.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Write one RGBA pixel.
    ///
    /// # Panics
    ///
    /// Panics if the image is not 4 bytes per pixel or `(x, y)` lies outside
    /// the buffer.
    pub fn put_rgba(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        assert_eq!(self.bytes_per_pixel, RGBA_BYTES_PER_PIXEL);
        let start = y as usize * self.bytes_per_line as usize + x as usize * 4;
        self.data[start..start + 4].copy_from_slice(&rgba);
    }

    /// Number of bytes a buffer of this geometry must hold.
    pub fn required_len(&self) -> usize {
        (self.height as usize).saturating_mul(self.bytes_per_line as usize)
    }

    /// Check that the geometry describes the buffer.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimension`] if width or height is 0
    /// - [`Error::UnsupportedPixelSize`] unless bytes per pixel is 1, 3 or 4
    /// - [`Error::InvalidStride`] if a row does not fit in `bytes_per_line`
    /// - [`Error::BufferTooShort`] if the buffer is shorter than
    ///   `height * bytes_per_line`
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidDimension {
                width: self.width,
                height: self.height,
            });
        }
        if !matches!(self.bytes_per_pixel, 1 | 3 | 4) {
            return Err(Error::UnsupportedPixelSize(self.bytes_per_pixel));
        }
        let row_bytes = u64::from(self.width) * u64::from(self.bytes_per_pixel);
        if u64::from(self.bytes_per_line) < row_bytes {
            return Err(Error::InvalidStride {
                width: self.width,
                bytes_per_pixel: self.bytes_per_pixel,
                bytes_per_line: self.bytes_per_line,
            });
        }
        let required = self.required_len();
        if self.data.len() < required {
            return Err(Error::BufferTooShort {
                required,
                actual: self.data.len(),
            });
        }
        Ok(())
    }
}

impl From<::image::RgbaImage> for Image {
    fn from(rgba: ::image::RgbaImage) -> Self {
        let (width, height) = rgba.dimensions();
        Self::from_raw(
            rgba.into_raw(),
            width,
            height,
            RGBA_BYTES_PER_PIXEL,
            width.saturating_mul(RGBA_BYTES_PER_PIXEL),
        )
    }
}
