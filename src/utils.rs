// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Utility Functions** - *Shape Validation Helpers*
//!
//! Validation helpers shared by the checked kernel entry points.

use crate::errors::KernelError;

/// Validates that two lengths are equal for binary kernel operations.
///
/// Used by the jagged-matrix dispatchers to confirm outer row counts and per-row lengths
/// before any row is written, so a rejected call leaves every destination untouched.
///
/// # Parameters
/// - `label`: Descriptive context label for error reporting (e.g., "flag_and_rows: row 3")
/// - `a`: Length of the first input (usually the destination)
/// - `b`: Length of the second input
///
/// # Returns
/// `Ok(())` if lengths are equal, otherwise `KernelError::LengthMismatch` with diagnostic details.
#[inline(always)]
pub fn confirm_equal_len(label: &str, a: usize, b: usize) -> Result<(), KernelError> {
    if a != b {
        return Err(KernelError::LengthMismatch(format!(
            "{}: length mismatch (lhs: {}, rhs: {})",
            label, a, b
        )));
    }
    Ok(())
}

/// Validates that the window `[offset, offset + len)` lies within a buffer of `buf_len` elements.
///
/// Overflowing `offset + len` is reported as out of bounds rather than wrapping.
#[inline(always)]
pub fn confirm_window(
    label: &str,
    buf_len: usize,
    offset: usize,
    len: usize,
) -> Result<(), KernelError> {
    match offset.checked_add(len) {
        Some(end) if end <= buf_len => Ok(()),
        _ => Err(KernelError::OutOfBounds(format!(
            "{}: window [{}, {}+{}) exceeds buffer length {}",
            label, offset, offset, len, buf_len
        ))),
    }
}
