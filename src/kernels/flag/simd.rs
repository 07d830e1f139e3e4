// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **SIMD Flag Kernels** - *Lane-Chunked Conditional Flagging*
//!
//! Inner SIMD bodies using `std::simd`. Prefer `dispatch.rs` for the general case; these
//! are exposed for callers that want a specific lane count in a hot loop.
//!
//! ## Layout
//! - The main loop handles two `LANES`-wide chunks per iteration.
//! - Whatever is left, including a dangling single chunk, goes through the scalar body in
//!   `std.rs`, so the tail has exactly the scalar semantics.
//! - Loads and stores use `from_slice`/`copy_to_slice`, which carry no alignment requirement,
//!   so offset windows into larger buffers take this path too.
//!
//! Zero tests use `simd_eq` against a splatted `0`, i.e. exact IEEE equality: `-0.0` is zero,
//! `NaN` is not.

use core::simd::{LaneCount, Mask, Simd, SimdElement, SupportedLaneCount};
use std::simd::cmp::SimdPartialEq;

use num_traits::Float;

use crate::kernels::flag::std::{
    flag_and_inplace_std, flag_and_select_inplace_std, flag_and_select_std, flag_and_std,
};

/// SIMD body for `dest[i] = control[i] == 0 ? 0 : value`.
#[inline(always)]
pub fn flag_and_simd<T, const LANES: usize>(dest: &mut [T], value: T, control: &[T])
where
    T: SimdElement + Float,
    LaneCount<LANES>: SupportedLaneCount,
    Simd<T, LANES>: SimdPartialEq<Mask = Mask<<T as SimdElement>::Mask, LANES>>,
{
    let n = dest.len();
    let control = &control[..n];
    let zero = Simd::<T, LANES>::splat(T::zero());
    let value_v = Simd::<T, LANES>::splat(value);

    let step = 2 * LANES;
    let paired = n / step * step;
    let mut i = 0;
    while i < paired {
        let c0 = Simd::<T, LANES>::from_slice(&control[i..i + LANES]);
        let c1 = Simd::<T, LANES>::from_slice(&control[i + LANES..i + step]);
        c0.simd_eq(zero)
            .select(zero, value_v)
            .copy_to_slice(&mut dest[i..i + LANES]);
        c1.simd_eq(zero)
            .select(zero, value_v)
            .copy_to_slice(&mut dest[i + LANES..i + step]);
        i += step;
    }

    flag_and_std(&mut dest[i..], value, &control[i..]);
}

/// SIMD body for `dest[i] = lhs[i] == 0 ? 0 : rhs[i]`.
#[inline(always)]
pub fn flag_and_select_simd<T, const LANES: usize>(dest: &mut [T], lhs: &[T], rhs: &[T])
where
    T: SimdElement + Float,
    LaneCount<LANES>: SupportedLaneCount,
    Simd<T, LANES>: SimdPartialEq<Mask = Mask<<T as SimdElement>::Mask, LANES>>,
{
    let n = dest.len();
    let (lhs, rhs) = (&lhs[..n], &rhs[..n]);
    let zero = Simd::<T, LANES>::splat(T::zero());

    let step = 2 * LANES;
    let paired = n / step * step;
    let mut i = 0;
    while i < paired {
        let l0 = Simd::<T, LANES>::from_slice(&lhs[i..i + LANES]);
        let l1 = Simd::<T, LANES>::from_slice(&lhs[i + LANES..i + step]);
        let r0 = Simd::<T, LANES>::from_slice(&rhs[i..i + LANES]);
        let r1 = Simd::<T, LANES>::from_slice(&rhs[i + LANES..i + step]);
        l0.simd_eq(zero)
            .select(zero, r0)
            .copy_to_slice(&mut dest[i..i + LANES]);
        l1.simd_eq(zero)
            .select(zero, r1)
            .copy_to_slice(&mut dest[i + LANES..i + step]);
        i += step;
    }

    flag_and_select_std(&mut dest[i..], &lhs[i..], &rhs[i..]);
}

/// In-place SIMD body: `data` is both control and destination.
#[inline(always)]
pub fn flag_and_inplace_simd<T, const LANES: usize>(data: &mut [T], value: T)
where
    T: SimdElement + Float,
    LaneCount<LANES>: SupportedLaneCount,
    Simd<T, LANES>: SimdPartialEq<Mask = Mask<<T as SimdElement>::Mask, LANES>>,
{
    let n = data.len();
    let zero = Simd::<T, LANES>::splat(T::zero());
    let value_v = Simd::<T, LANES>::splat(value);

    let step = 2 * LANES;
    let paired = n / step * step;
    let mut i = 0;
    while i < paired {
        let c0 = Simd::<T, LANES>::from_slice(&data[i..i + LANES]);
        let c1 = Simd::<T, LANES>::from_slice(&data[i + LANES..i + step]);
        c0.simd_eq(zero)
            .select(zero, value_v)
            .copy_to_slice(&mut data[i..i + LANES]);
        c1.simd_eq(zero)
            .select(zero, value_v)
            .copy_to_slice(&mut data[i + LANES..i + step]);
        i += step;
    }

    flag_and_inplace_std(&mut data[i..], value);
}

/// In-place SIMD body: `data[i] = data[i] == 0 ? 0 : rhs[i]`.
#[inline(always)]
pub fn flag_and_select_inplace_simd<T, const LANES: usize>(data: &mut [T], rhs: &[T])
where
    T: SimdElement + Float,
    LaneCount<LANES>: SupportedLaneCount,
    Simd<T, LANES>: SimdPartialEq<Mask = Mask<<T as SimdElement>::Mask, LANES>>,
{
    let n = data.len();
    let rhs = &rhs[..n];
    let zero = Simd::<T, LANES>::splat(T::zero());

    let step = 2 * LANES;
    let paired = n / step * step;
    let mut i = 0;
    while i < paired {
        let l0 = Simd::<T, LANES>::from_slice(&data[i..i + LANES]);
        let l1 = Simd::<T, LANES>::from_slice(&data[i + LANES..i + step]);
        let r0 = Simd::<T, LANES>::from_slice(&rhs[i..i + LANES]);
        let r1 = Simd::<T, LANES>::from_slice(&rhs[i + LANES..i + step]);
        l0.simd_eq(zero)
            .select(zero, r0)
            .copy_to_slice(&mut data[i..i + LANES]);
        l1.simd_eq(zero)
            .select(zero, r1)
            .copy_to_slice(&mut data[i + LANES..i + step]);
        i += step;
    }

    flag_and_select_inplace_std(&mut data[i..], &rhs[i..]);
}
