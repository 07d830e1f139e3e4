// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Flag Dispatch Module** - *SIMD/Scalar Dispatch for Conditional Flagging*
//!
//! Public `f32`/`f64` entry points for the flag-and family. Selects the SIMD body at compile
//! time when the `simd` feature is on, with the build-time lane width for the element type,
//! and the scalar body otherwise.
//!
//! ## Operations
//! - **Broadcast**: `dest[i] = control[i] == 0 ? 0 : value`, with a zero fast path that clears
//!   `dest` without reading `control`.
//! - **Select**: `dest[i] = lhs[i] == 0 ? 0 : rhs[i]`. No fast path.
//! - **Windowed** forms take an offset per buffer plus a shared `len`; `try_*` forms validate
//!   the windows and return `KernelError::OutOfBounds` instead of panicking.
//! - **In-place** forms use the destination as its own control.
//!
//! Unchecked forms panic if an operand is shorter than the destination (or window), the same
//! way slice indexing does.

include!(concat!(env!("OUT_DIR"), "/simd_lanes.rs"));

use crate::errors::KernelError;
#[cfg(feature = "simd")]
use crate::kernels::flag::simd::{
    flag_and_inplace_simd, flag_and_select_inplace_simd, flag_and_select_simd, flag_and_simd,
};
#[cfg(not(feature = "simd"))]
use crate::kernels::flag::std::{
    flag_and_inplace_std, flag_and_select_inplace_std, flag_and_select_std, flag_and_std,
};
use crate::utils::confirm_window;

/// Generates the broadcast-value entry points for one float width.
macro_rules! impl_flag_and_broadcast {
    (
        $ty:ty, $lanes:expr,
        $fn_name:ident, $by_control:ident, $range:ident, $try_range:ident, $inplace:ident
    ) => {
        #[doc = concat!(
            "Sets `dest[i]` to `0` where `control[i] == 0`, otherwise to `value`, over `&mut [",
            stringify!($ty), "]`. SIMD-accelerated using ", stringify!($lanes),
            " lanes when available.\n\n",
            "If `value == 0` the destination is zero-filled and `control` is never read.\n\n",
            "# Panics\nIf `value != 0` and `control` is shorter than `dest`."
        )]
        #[inline(always)]
        pub fn $fn_name(dest: &mut [$ty], value: $ty, control: &[$ty]) {
            if value == 0.0 {
                dest.fill(0.0);
                return;
            }
            #[cfg(feature = "simd")]
            flag_and_simd::<$ty, $lanes>(dest, value, control);
            #[cfg(not(feature = "simd"))]
            flag_and_std(dest, value, control);
        }

        #[doc = concat!(
            "Same as [`", stringify!($fn_name), "`] with the broadcast value last."
        )]
        #[inline(always)]
        pub fn $by_control(dest: &mut [$ty], control: &[$ty], value: $ty) {
            $fn_name(dest, value, control)
        }

        #[doc = concat!(
            "Windowed [`", stringify!($fn_name), "`]: flags `dest[dest_offset..dest_offset + len]` ",
            "from `control[control_offset..control_offset + len]`. Elements outside the ",
            "destination window are untouched.\n\n",
            "# Panics\nIf either window runs past the end of its buffer ",
            "(the control window is not inspected when `value == 0`)."
        )]
        #[inline(always)]
        pub fn $range(
            dest: &mut [$ty],
            dest_offset: usize,
            value: $ty,
            control: &[$ty],
            control_offset: usize,
            len: usize,
        ) {
            debug_assert!(
                dest_offset.checked_add(len).is_some_and(|end| end <= dest.len()),
                "{}: dest window [{dest_offset}, +{len}) exceeds length {}",
                stringify!($range),
                dest.len()
            );
            let dest = &mut dest[dest_offset..dest_offset + len];
            if value == 0.0 {
                dest.fill(0.0);
                return;
            }
            $fn_name(dest, value, &control[control_offset..control_offset + len]);
        }

        #[doc = concat!(
            "Checked [`", stringify!($range), "`]. Returns `KernelError::OutOfBounds` without ",
            "writing anything if either window runs past the end of its buffer."
        )]
        pub fn $try_range(
            dest: &mut [$ty],
            dest_offset: usize,
            value: $ty,
            control: &[$ty],
            control_offset: usize,
            len: usize,
        ) -> Result<(), KernelError> {
            confirm_window(
                concat!(stringify!($try_range), ": dest"),
                dest.len(),
                dest_offset,
                len,
            )?;
            confirm_window(
                concat!(stringify!($try_range), ": control"),
                control.len(),
                control_offset,
                len,
            )?;
            $range(dest, dest_offset, value, control, control_offset, len);
            Ok(())
        }

        #[doc = concat!(
            "In-place flagging over `&mut [", stringify!($ty), "]`: nonzero elements become ",
            "`value`, zeros (including `-0.0`) become `0`."
        )]
        #[inline(always)]
        pub fn $inplace(data: &mut [$ty], value: $ty) {
            if value == 0.0 {
                data.fill(0.0);
                return;
            }
            #[cfg(feature = "simd")]
            flag_and_inplace_simd::<$ty, $lanes>(data, value);
            #[cfg(not(feature = "simd"))]
            flag_and_inplace_std(data, value);
        }
    };
}

/// Generates the two-array select entry points for one float width.
macro_rules! impl_flag_and_select {
    ($ty:ty, $lanes:expr, $fn_name:ident, $range:ident, $try_range:ident, $inplace:ident) => {
        #[doc = concat!(
            "Sets `dest[i]` to `0` where `lhs[i] == 0`, otherwise to `rhs[i]`, over `&mut [",
            stringify!($ty), "]`. SIMD-accelerated using ", stringify!($lanes),
            " lanes when available.\n\n",
            "# Panics\nIf `lhs` or `rhs` is shorter than `dest`."
        )]
        #[inline(always)]
        pub fn $fn_name(dest: &mut [$ty], lhs: &[$ty], rhs: &[$ty]) {
            #[cfg(feature = "simd")]
            flag_and_select_simd::<$ty, $lanes>(dest, lhs, rhs);
            #[cfg(not(feature = "simd"))]
            flag_and_select_std(dest, lhs, rhs);
        }

        #[doc = concat!(
            "Windowed [`", stringify!($fn_name), "`] over `len` elements starting at each ",
            "buffer's own offset.\n\n# Panics\nIf any window runs past the end of its buffer."
        )]
        #[inline(always)]
        pub fn $range(
            dest: &mut [$ty],
            dest_offset: usize,
            lhs: &[$ty],
            lhs_offset: usize,
            rhs: &[$ty],
            rhs_offset: usize,
            len: usize,
        ) {
            debug_assert!(
                dest_offset.checked_add(len).is_some_and(|end| end <= dest.len()),
                "{}: dest window [{dest_offset}, +{len}) exceeds length {}",
                stringify!($range),
                dest.len()
            );
            $fn_name(
                &mut dest[dest_offset..dest_offset + len],
                &lhs[lhs_offset..lhs_offset + len],
                &rhs[rhs_offset..rhs_offset + len],
            );
        }

        #[doc = concat!(
            "Checked [`", stringify!($range), "`]. Returns `KernelError::OutOfBounds` without ",
            "writing anything if any window runs past the end of its buffer."
        )]
        pub fn $try_range(
            dest: &mut [$ty],
            dest_offset: usize,
            lhs: &[$ty],
            lhs_offset: usize,
            rhs: &[$ty],
            rhs_offset: usize,
            len: usize,
        ) -> Result<(), KernelError> {
            confirm_window(concat!(stringify!($try_range), ": dest"), dest.len(), dest_offset, len)?;
            confirm_window(concat!(stringify!($try_range), ": lhs"), lhs.len(), lhs_offset, len)?;
            confirm_window(concat!(stringify!($try_range), ": rhs"), rhs.len(), rhs_offset, len)?;
            $range(dest, dest_offset, lhs, lhs_offset, rhs, rhs_offset, len);
            Ok(())
        }

        #[doc = concat!(
            "In-place select: `data[i] = data[i] == 0 ? 0 : rhs[i]`.\n\n",
            "# Panics\nIf `rhs` is shorter than `data`."
        )]
        #[inline(always)]
        pub fn $inplace(data: &mut [$ty], rhs: &[$ty]) {
            #[cfg(feature = "simd")]
            flag_and_select_inplace_simd::<$ty, $lanes>(data, rhs);
            #[cfg(not(feature = "simd"))]
            flag_and_select_inplace_std(data, rhs);
        }
    };
}

impl_flag_and_broadcast!(
    f32, W32,
    flag_and_f32, flag_and_by_control_f32, flag_and_range_f32, try_flag_and_range_f32,
    flag_and_inplace_f32
);
impl_flag_and_broadcast!(
    f64, W64,
    flag_and_f64, flag_and_by_control_f64, flag_and_range_f64, try_flag_and_range_f64,
    flag_and_inplace_f64
);

impl_flag_and_select!(
    f32, W32,
    flag_and_select_f32, flag_and_select_range_f32, try_flag_and_select_range_f32,
    flag_and_select_inplace_f32
);
impl_flag_and_select!(
    f64, W64,
    flag_and_select_f64, flag_and_select_range_f64, try_flag_and_select_range_f64,
    flag_and_select_inplace_f64
);
