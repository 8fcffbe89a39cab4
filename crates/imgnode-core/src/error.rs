//! Error types for imgnode-core operations.
//!
//! This module provides the validation and construction errors shared by the
//! core data types and the shape conversions built on top of them.
//!
//! # Overview
//!
//! The [`Error`] enum covers the failure modes of this crate:
//! - Input validation for host-supplied arrays (rank, channel count, batch size)
//! - Buffer-length guards on tensor and pixel-image construction
//! - Fill-color parsing
//!
//! # Usage
//!
//! ```rust
//! use imgnode_core::{Error, Result};
//!
//! fn check_rank(shape: &[usize]) -> Result<()> {
//!     if shape.len() != 4 {
//!         return Err(Error::rank(shape.len()));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
///
/// Convenience alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the core image types and conversions.
///
/// The first three variants are input validation on host-supplied arrays and
/// surface to the host unchanged; the remaining two guard construction and
/// color parsing inside this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Array-form image does not have exactly four axes.
    ///
    /// The host hands images over as (batch, height, width, channel) arrays;
    /// anything else cannot be interpreted as an image.
    #[error("expected rank-4 array, got rank {got}")]
    Rank {
        /// Rank of the offending array
        got: usize,
    },

    /// Channel axis length is not 1, 3, or 4.
    ///
    /// Grayscale, RGB, and RGBA are the only pixel layouts the pixel-grid
    /// form can represent.
    #[error("unsupported channel count: {got} (expected 1, 3, or 4)")]
    ChannelCount {
        /// Length of the channel axis
        got: usize,
    },

    /// Batch axis holds more than one image.
    ///
    /// Conversion to pixel-grid form drops the batch axis, which requires
    /// exactly one batch element.
    #[error("expected a single-image batch, got {got}")]
    BatchSize {
        /// Length of the batch axis
        got: usize,
    },

    /// Buffer length does not match the declared shape or dimensions.
    #[error("expected {expected} elements, got {got}")]
    DataLength {
        /// Element count implied by the shape
        expected: usize,
        /// Element count actually supplied
        got: usize,
    },

    /// Fill-color string could not be parsed.
    ///
    /// Accepted forms are hex (`#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`,
    /// leading `#` optional) and CSS3 color names.
    #[error("unrecognized color {spec:?}")]
    Color {
        /// The string that failed to parse
        spec: String,
    },
}

impl Error {
    /// Creates an [`Error::Rank`] error.
    #[inline]
    pub fn rank(got: usize) -> Self {
        Self::Rank { got }
    }

    /// Creates an [`Error::ChannelCount`] error.
    #[inline]
    pub fn channel_count(got: usize) -> Self {
        Self::ChannelCount { got }
    }

    /// Creates an [`Error::BatchSize`] error.
    #[inline]
    pub fn batch_size(got: usize) -> Self {
        Self::BatchSize { got }
    }

    /// Creates an [`Error::DataLength`] error.
    #[inline]
    pub fn data_length(expected: usize, got: usize) -> Self {
        Self::DataLength { expected, got }
    }

    /// Creates an [`Error::Color`] error.
    #[inline]
    pub fn color(spec: impl Into<String>) -> Self {
        Self::Color { spec: spec.into() }
    }

    /// Returns `true` if this error came from validating a host-supplied array.
    #[inline]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Rank { .. } | Self::ChannelCount { .. } | Self::BatchSize { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_message() {
        let err = Error::rank(3);
        assert_eq!(err.to_string(), "expected rank-4 array, got rank 3");
        assert!(err.is_validation());
    }

    #[test]
    fn test_channel_count_message() {
        let err = Error::channel_count(2);
        assert!(err.to_string().contains("unsupported channel count: 2"));
        assert!(err.is_validation());
    }

    #[test]
    fn test_batch_size_message() {
        let err = Error::batch_size(4);
        assert!(err.to_string().contains("single-image batch"));
        assert!(err.to_string().contains('4'));
        assert!(err.is_validation());
    }

    #[test]
    fn test_data_length_message() {
        let err = Error::data_length(12, 9);
        assert_eq!(err.to_string(), "expected 12 elements, got 9");
        assert!(!err.is_validation());
    }

    #[test]
    fn test_color_message() {
        let err = Error::color("notacolor");
        assert!(err.to_string().contains("notacolor"));
        assert!(!err.is_validation());
    }
}
