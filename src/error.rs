// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for containers and text buffers.
//!
//! Two tiers: running out of memory is a
//! [`ContainerError`], everything the caller asked for wrong is a
//! [`TextError`] variant of its own. A text operation that fails to allocate
//! wraps the container error so `?` works across both layers.

use std::fmt;

/// Allocation failures raised by [`Container`](crate::Container) growth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerError {
    /// The allocator refused to reserve `requested` slots.
    Alloc { requested: usize },
    /// Doubling the capacity would overflow `usize`.
    CapacityOverflow,
}

impl fmt::Display for ContainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerError::Alloc { requested } => {
                write!(f, "allocation of {} slots failed", requested)
            }
            ContainerError::CapacityOverflow => write!(f, "capacity overflow"),
        }
    }
}

impl std::error::Error for ContainerError {}

/// Failures raised by [`Text`](crate::Text) operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextError {
    /// The underlying container could not grow.
    Container(ContainerError),
    /// Insert position past the end of the buffer.
    OutOfBounds { pos: usize, length: usize },
    /// Search or replace with an empty pattern.
    EmptyPattern,
    /// Replace pattern longer than the whole buffer.
    PatternTooLong { pattern: usize, length: usize },
    /// A conversion ran out of arguments.
    MissingArgument { conversion: char, index: usize },
    /// The argument at `index` is not the kind `conversion` renders.
    ArgumentMismatch {
        conversion: char,
        index: usize,
        found: &'static str,
    },
}

impl fmt::Display for TextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextError::Container(e) => write!(f, "{}", e),
            TextError::OutOfBounds { pos, length } => {
                write!(f, "position {} > length {}", pos, length)
            }
            TextError::EmptyPattern => write!(f, "empty pattern"),
            TextError::PatternTooLong { pattern, length } => {
                write!(f, "pattern length {} > text length {}", pattern, length)
            }
            TextError::MissingArgument { conversion, index } => {
                write!(f, "missing argument {} for '%{}'", index, conversion)
            }
            TextError::ArgumentMismatch {
                conversion,
                index,
                found,
            } => {
                write!(
                    f,
                    "argument {} is {} but '%{}' expects another kind",
                    index, found, conversion
                )
            }
        }
    }
}

impl std::error::Error for TextError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TextError::Container(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ContainerError> for TextError {
    fn from(e: ContainerError) -> Self {
        TextError::Container(e)
    }
}
