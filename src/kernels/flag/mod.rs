// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Flag Kernels Module** - *Conditional Flagging over Dense Float Buffers*
//!
//! Elementwise "flag and": write `0` where a control value is exactly zero, otherwise a
//! broadcast value or the matching element of a second buffer. Typically used to gate
//! computed quantities on presence/absence signals encoded as zero/nonzero floats.
//!
//! ## Modules
//! - **`dispatch`**: Public `f32`/`f64` entry points selecting SIMD vs scalar bodies
//! - **`simd`**: `std::simd` bodies, two lane-chunks per iteration with a scalar tail
//! - **`std`**: Scalar bodies defining the reference semantics
//!
//! ## Scope
//! **Single buffers only, on the caller's thread.** Row-parallel dispatch over jagged
//! matrices lives in `kernels::rows`.

pub mod dispatch;
#[cfg(feature = "simd")]
pub mod simd;
pub mod std;

// Shared tests for SIMD and Std
