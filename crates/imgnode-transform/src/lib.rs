//! # imgnode-transform
//!
//! Padding and size-alignment operations for node-based image workflows.
//!
//! This crate provides the pixel-level operations behind the size-align
//! node: border expansion and modulus alignment.
//!
//! # Modules
//!
//! - [`expand`] - Solid-color border expansion
//! - [`align`] - Padding to the next multiple of a modulus
//!
//! # Example
//!
//! ```rust
//! use imgnode_core::ImageTensor;
//! use imgnode_transform::size_align;
//!
//! // A 10x10 RGB image padded up to the next multiple of 8.
//! let image = ImageTensor::from_nhwc(10, 10, 3, vec![0.5; 300]).unwrap();
//! let result = size_align(&image, 8, "#ffffff").unwrap();
//! assert_eq!((result.padded_width, result.padded_height), (16, 16));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod align;
pub mod expand;

pub use align::{alignment_padding, size_align, SizeAlignment};
pub use expand::expand;
