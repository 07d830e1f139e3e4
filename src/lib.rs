// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under the Mozilla Public License (MPL) 2.0.

//! # **Flag Kernels** - *Conditional Flagging over Dense and Jagged Float Buffers*
//!
//! Elementwise "flag and" kernels: write `0` wherever a control value is exactly zero and a
//! chosen value elsewhere, in place into caller-owned buffers.
//!
//! - `kernels::flag::dispatch`: single-buffer `f32`/`f64` entry points (SIMD with scalar tail)
//! - `kernels::rows`: the same kernels applied row by row over jagged matrices on rayon
//!
//! ```rust
//! use flag_kernels::kernels::flag::dispatch::flag_and_f32;
//!
//! let mut dest = [1.0f32, 1.0, 1.0, 1.0];
//! flag_and_f32(&mut dest, 2.0, &[0.0, 5.0, 0.0, -3.0]);
//! assert_eq!(dest, [0.0, 2.0, 0.0, 2.0]);
//! ```

// At the time of writing `std::simd` is nightly-only.
#![cfg_attr(feature = "simd", feature(portable_simd))]

// compile with RUSTFLAGS="-C target-cpu=native" to pick up the widest lanes the host supports

pub mod kernels {
    pub mod flag;
    pub mod rows;
}

pub mod config;

pub mod errors;

pub mod utils;
