//! Runtime values exchanged with the workflow host.
//!
//! A node invocation receives a bag of named [`Value`]s and returns a
//! positional list of them, matching the declared output schema. The
//! [`Inputs`] helpers do the type checking a host wiring mistake would
//! otherwise push into every node body.
//!
//! # Example
//!
//! ```rust
//! use imgnode_core::ImageTensor;
//! use imgnode_host::{Inputs, Value};
//!
//! let image = ImageTensor::from_nhwc(2, 2, 3, vec![0.0; 12]).unwrap();
//! let mut inputs = Inputs::new();
//! inputs.insert("image", image);
//! inputs.insert("modulus", 8i64);
//!
//! assert!(inputs.image("image").is_ok());
//! assert_eq!(inputs.int("modulus").unwrap(), 8);
//! assert!(inputs.int("image").is_err()); // wrong type
//! ```

use std::collections::HashMap;

use imgnode_core::ImageTensor;
use serde::Serialize;

use crate::error::{HostError, HostResult};

/// The type of a [`Value`], as declared in node schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// An array-form image.
    Image,
    /// A signed integer.
    Int,
    /// A text string.
    Text,
}

impl ValueKind {
    /// Returns the lowercase label used in schemas and error messages.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Int => "int",
            Self::Text => "text",
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A runtime value passed into or out of a node.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An array-form image.
    Image(ImageTensor),
    /// A signed integer.
    Int(i64),
    /// A text string.
    Text(String),
}

impl Value {
    /// Returns this value's kind.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Image(_) => ValueKind::Image,
            Self::Int(_) => ValueKind::Int,
            Self::Text(_) => ValueKind::Text,
        }
    }

    /// Returns the image if this is an image value.
    pub fn as_image(&self) -> Option<&ImageTensor> {
        match self {
            Self::Image(t) => Some(t),
            _ => None,
        }
    }

    /// Returns the integer if this is an integer value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the string if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<ImageTensor> for Value {
    fn from(t: ImageTensor) -> Self {
        Self::Image(t)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// Named inputs for one node invocation.
#[derive(Debug, Clone, Default)]
pub struct Inputs {
    values: HashMap<String, Value>,
}

impl Inputs {
    /// Creates an empty input set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a named value, replacing any previous one.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    /// Returns the raw value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Returns the number of supplied inputs.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no inputs were supplied.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the named input as an image.
    ///
    /// # Errors
    ///
    /// [`HostError::MissingInput`] if absent, [`HostError::InputType`] if
    /// present with a different kind.
    pub fn image(&self, name: &str) -> HostResult<&ImageTensor> {
        let value = self.require(name)?;
        value
            .as_image()
            .ok_or_else(|| HostError::input_type(name, ValueKind::Image, value.kind()))
    }

    /// Returns the named input as an integer.
    ///
    /// # Errors
    ///
    /// [`HostError::MissingInput`] if absent, [`HostError::InputType`] if
    /// present with a different kind.
    pub fn int(&self, name: &str) -> HostResult<i64> {
        let value = self.require(name)?;
        value
            .as_int()
            .ok_or_else(|| HostError::input_type(name, ValueKind::Int, value.kind()))
    }

    /// Returns the named input as a string.
    ///
    /// # Errors
    ///
    /// [`HostError::MissingInput`] if absent, [`HostError::InputType`] if
    /// present with a different kind.
    pub fn text(&self, name: &str) -> HostResult<&str> {
        let value = self.require(name)?;
        value
            .as_text()
            .ok_or_else(|| HostError::input_type(name, ValueKind::Text, value.kind()))
    }

    fn require(&self, name: &str) -> HostResult<&Value> {
        self.values
            .get(name)
            .ok_or_else(|| HostError::missing_input(name))
    }
}
