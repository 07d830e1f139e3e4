// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Flag Scalar Kernels** - *Portable Conditional Flagging*
//!
//! Scalar bodies for the flag-and family. These are the reference semantics every other
//! path must reproduce bit for bit, and the tail loop of the SIMD bodies.
//!
//! Element count is always taken from the destination. Operand slices must be at least as
//! long; a shorter operand panics at the slice boundary.
//!
//! The `value == 0` fast path lives in `dispatch.rs`; these bodies always run the general loop.

use num_traits::Float;

/// `dest[i] = 0` where `control[i] == 0`, else `value`.
#[inline(always)]
pub fn flag_and_std<T: Float>(dest: &mut [T], value: T, control: &[T]) {
    let control = &control[..dest.len()];
    let zero = T::zero();
    for (d, &c) in dest.iter_mut().zip(control) {
        *d = if c == zero { zero } else { value };
    }
}

/// `dest[i] = 0` where `lhs[i] == 0`, else `rhs[i]`.
#[inline(always)]
pub fn flag_and_select_std<T: Float>(dest: &mut [T], lhs: &[T], rhs: &[T]) {
    let n = dest.len();
    let (lhs, rhs) = (&lhs[..n], &rhs[..n]);
    let zero = T::zero();
    for ((d, &l), &r) in dest.iter_mut().zip(lhs).zip(rhs) {
        *d = if l == zero { zero } else { r };
    }
}

/// In-place form of [`flag_and_std`]: `data` is both control and destination.
#[inline(always)]
pub fn flag_and_inplace_std<T: Float>(data: &mut [T], value: T) {
    let zero = T::zero();
    for d in data.iter_mut() {
        *d = if *d == zero { zero } else { value };
    }
}

/// In-place form of [`flag_and_select_std`]: `data` is both control and destination.
#[inline(always)]
pub fn flag_and_select_inplace_std<T: Float>(data: &mut [T], rhs: &[T]) {
    let rhs = &rhs[..data.len()];
    let zero = T::zero();
    for (d, &r) in data.iter_mut().zip(rhs) {
        *d = if *d == zero { zero } else { r };
    }
}
