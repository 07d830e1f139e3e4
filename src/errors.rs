// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Error Types** - *Kernel Operation Error Handling*
//!
//! Error types for the checked kernel entry points.
//!
//! The flat kernels themselves are infallible and panic on out-of-range views, the same way
//! slice indexing does. Errors only surface from the jagged-matrix dispatchers, which confirm
//! row shapes before touching any row, and from the `try_*` window wrappers.

use core::fmt;
use std::error::Error;

/// Error type for kernel operations.
///
/// Each variant carries a contextual message naming the operation and the offending sizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    /// Operand length mismatch, either in outer row counts or within a row.
    LengthMismatch(String),

    /// An offset/length window runs past the end of its buffer.
    OutOfBounds(String),
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::LengthMismatch(msg) => write!(f, "Length mismatch: {}", msg),
            KernelError::OutOfBounds(msg) => write!(f, "Out of bounds: {}", msg),
        }
    }
}

impl Error for KernelError {}
