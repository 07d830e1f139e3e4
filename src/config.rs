// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

// These parameters should rarely need adjustment.

//! # **Configuration Constants** - *Runtime Behaviour Parameters*
//!
//! Compile-time constants controlling kernel dispatch. Lane widths are not here; they are
//! generated by `build.rs` from the target features (see `SIMD_LANES_OVERRIDE`).

/// Minimum number of rows before the jagged-matrix dispatchers fan out onto the rayon pool.
///
/// Below this, rows are processed inline on the caller's thread. Results are identical
/// either way since rows never share memory.
pub const MIN_PARALLEL_ROWS: usize = 2;
