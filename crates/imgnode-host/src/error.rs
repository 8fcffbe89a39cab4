//! Error types for host integration.
//!
//! Dispatch errors ([`HostError::UnknownNode`], [`HostError::MissingInput`],
//! [`HostError::InputType`]) mean the host wired a node incorrectly.
//! Validation errors from the image layer pass through unchanged via
//! [`HostError::Validation`], so the host sees the original message.

use thiserror::Error;

use crate::value::ValueKind;

/// Result type alias for host operations.
pub type HostResult<T> = std::result::Result<T, HostError>;

/// Errors surfaced to the workflow host.
#[derive(Debug, Error)]
pub enum HostError {
    /// No node with the requested name is registered.
    #[error("unknown node {name:?}")]
    UnknownNode {
        /// The name the host asked for.
        name: String,
    },

    /// A required input was not supplied.
    #[error("missing input {input:?}")]
    MissingInput {
        /// The absent input's name.
        input: String,
    },

    /// An input was supplied with the wrong value type.
    #[error("input {input:?} expects {expected}, got {got}")]
    InputType {
        /// The offending input's name.
        input: String,
        /// The type the schema declares.
        expected: ValueKind,
        /// The type the host actually passed.
        got: ValueKind,
    },

    /// A validation error from the image layer, passed through unchanged.
    #[error(transparent)]
    Validation(#[from] imgnode_core::Error),
}

impl HostError {
    /// Creates an [`HostError::UnknownNode`] error.
    #[inline]
    pub fn unknown_node(name: impl Into<String>) -> Self {
        Self::UnknownNode { name: name.into() }
    }

    /// Creates a [`HostError::MissingInput`] error.
    #[inline]
    pub fn missing_input(input: impl Into<String>) -> Self {
        Self::MissingInput {
            input: input.into(),
        }
    }

    /// Creates an [`HostError::InputType`] error.
    #[inline]
    pub fn input_type(input: impl Into<String>, expected: ValueKind, got: ValueKind) -> Self {
        Self::InputType {
            input: input.into(),
            expected,
            got,
        }
    }
}
