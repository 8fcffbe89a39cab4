//! Pixel-grid images: the 2-D form used by the padding primitives.
//!
//! This module provides [`PixelImage`], a plain 2-D grid of pixels with
//! integer channel values in [0, 255], and [`Channels`], the set of channel
//! layouts the grid can represent.
//!
//! # Memory Layout
//!
//! Pixels are stored interleaved in row-major order, top-to-bottom:
//!
//! ```text
//! Memory: [R G B R G B R G B ...]  <- Row 0
//!         [R G B R G B R G B ...]  <- Row 1
//!         ...
//! ```
//!
//! For RGBA images alpha is interleaved: `[R G B A R G B A ...]`.
//!
//! # Usage
//!
//! ```rust
//! use imgnode_core::{Channels, PixelImage};
//!
//! let img = PixelImage::filled(4, 2, Channels::Rgb, &[255, 128, 0]);
//! assert_eq!(img.dimensions(), (4, 2));
//! assert_eq!(img.pixel(0, 0), &[255, 128, 0]);
//! ```
//!
//! # Used By
//!
//! - [`crate::convert`] - conversion to/from array form
//! - `imgnode-transform` - border expansion

use crate::{Error, Result};

/// Channel layouts a pixel grid can hold.
///
/// Only grayscale, RGB, and RGBA are representable; any other channel
/// count is rejected at the conversion boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channels {
    /// Single luminance channel.
    Gray,
    /// Red, green, blue.
    Rgb,
    /// Red, green, blue, alpha.
    Rgba,
}

impl Channels {
    /// Returns the number of values per pixel.
    #[inline]
    pub const fn count(self) -> usize {
        match self {
            Self::Gray => 1,
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }

    /// Maps a channel count to a layout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ChannelCount`] for any count other than 1, 3, or 4.
    ///
    /// # Example
    ///
    /// ```rust
    /// use imgnode_core::Channels;
    ///
    /// assert_eq!(Channels::from_count(3).unwrap(), Channels::Rgb);
    /// assert!(Channels::from_count(2).is_err());
    /// ```
    pub fn from_count(count: usize) -> Result<Self> {
        match count {
            1 => Ok(Self::Gray),
            3 => Ok(Self::Rgb),
            4 => Ok(Self::Rgba),
            other => Err(Error::channel_count(other)),
        }
    }
}

/// Owned 2-D pixel grid with 8-bit interleaved channels.
///
/// Invariant: `data.len() == width * height * channels.count()`. All
/// constructors uphold it, so accessors never need to re-check.
///
/// # Example
///
/// ```rust
/// use imgnode_core::{Channels, PixelImage};
///
/// let img = PixelImage::new(8, 8, Channels::Rgba);
/// assert_eq!(img.width(), 8);
/// assert_eq!(img.channels(), Channels::Rgba);
/// assert_eq!(img.data().len(), 8 * 8 * 4);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct PixelImage {
    /// Image width in pixels.
    pub(crate) width: u32,
    /// Image height in pixels.
    pub(crate) height: u32,
    /// Channel layout.
    pub(crate) channels: Channels,
    /// Interleaved channel values, row-major.
    pub(crate) data: Vec<u8>,
}

impl PixelImage {
    /// Creates a zero-filled image (black, and fully transparent for RGBA).
    pub fn new(width: u32, height: u32, channels: Channels) -> Self {
        let len = width as usize * height as usize * channels.count();
        Self {
            width,
            height,
            channels,
            data: vec![0; len],
        }
    }

    /// Creates an image filled with a single pixel value.
    ///
    /// # Panics
    ///
    /// Panics (debug builds) if `pixel.len()` does not match the layout's
    /// channel count.
    ///
    /// # Example
    ///
    /// ```rust
    /// use imgnode_core::{Channels, PixelImage};
    ///
    /// let white = PixelImage::filled(2, 2, Channels::Gray, &[255]);
    /// assert_eq!(white.data(), &[255, 255, 255, 255]);
    /// ```
    pub fn filled(width: u32, height: u32, channels: Channels, pixel: &[u8]) -> Self {
        debug_assert_eq!(pixel.len(), channels.count(), "fill pixel length");
        let count = width as usize * height as usize;
        let mut data = Vec::with_capacity(count * channels.count());
        for _ in 0..count {
            data.extend_from_slice(pixel);
        }
        Self {
            width,
            height,
            channels,
            data,
        }
    }

    /// Creates an image from existing interleaved pixel data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataLength`] if `data.len()` is not
    /// `width * height * channels.count()`.
    pub fn from_raw(width: u32, height: u32, channels: Channels, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * channels.count();
        if data.len() != expected {
            return Err(Error::data_length(expected, data.len()));
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the image dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the channel layout.
    #[inline]
    pub fn channels(&self) -> Channels {
        self.channels
    }

    /// Returns the raw interleaved pixel data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns mutable access to the raw interleaved pixel data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns a row of pixels as a slice.
    ///
    /// # Panics
    ///
    /// Panics (debug builds) if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        debug_assert!(y < self.height, "row out of bounds");
        let stride = self.width as usize * self.channels.count();
        let start = y as usize * stride;
        &self.data[start..start + stride]
    }

    /// Returns the channel values of the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics (debug builds) if (x, y) is out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let n = self.channels.count();
        let offset = (y as usize * self.width as usize + x as usize) * n;
        &self.data[offset..offset + n]
    }
}

impl std::fmt::Debug for PixelImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("channels", &self.channels)
            .finish()
    }
}
