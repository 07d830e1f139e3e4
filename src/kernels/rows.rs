// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Row Dispatch Module** - *Fork-Join Flagging over Jagged Matrices*
//!
//! Applies the flat flag kernels once per row of a jagged (ragged) matrix, with rows spread
//! over the rayon global pool. A matrix is any slice of rows, e.g. `Vec<Vec<f32>>` or
//! `[&mut [f32]]`, and rows may differ in length.
//!
//! ## Semantics
//! - Each row is flagged over **its own length**; the row count never stands in for it.
//! - Operand matrices must match the destination in row count and per-row length. This is
//!   confirmed for every row before any row is written, so a rejected call leaves `dest`
//!   untouched and returns `KernelError::LengthMismatch`.
//! - Rows are disjoint, so execution order and thread assignment do not affect the result.
//!   The broadcast value is shared read-only across row tasks.
//! - Blocks until every row is done. Matrices with fewer than
//!   [`MIN_PARALLEL_ROWS`](crate::config::MIN_PARALLEL_ROWS) rows run inline.

use log::{debug, trace};
use rayon::prelude::*;

use crate::config::MIN_PARALLEL_ROWS;
use crate::errors::KernelError;
use crate::kernels::flag::dispatch::{
    flag_and_f32, flag_and_f64, flag_and_select_f32, flag_and_select_f64,
};
use crate::utils::confirm_equal_len;

/// Confirms `dest` and `src` have the same row count and matching row lengths.
fn confirm_rows<T, D, S>(label: &str, dest: &mut [D], src: &[S]) -> Result<(), KernelError>
where
    D: AsMut<[T]>,
    S: AsRef<[T]>,
{
    confirm_equal_len(label, dest.len(), src.len()).inspect_err(|e| debug!("{e}"))?;
    for (row, (d, s)) in dest.iter_mut().zip(src).enumerate() {
        let (d_len, s_len) = (d.as_mut().len(), s.as_ref().len());
        if d_len != s_len {
            return confirm_equal_len(&format!("{label}: row {row}"), d_len, s_len)
                .inspect_err(|e| debug!("{e}"));
        }
    }
    Ok(())
}

/// Runs `kernel` on each `(dest_row, src_row)` pair after confirming shapes.
fn for_each_row<T, D, S, F>(
    label: &str,
    dest: &mut [D],
    src: &[S],
    kernel: F,
) -> Result<(), KernelError>
where
    T: Send + Sync,
    D: AsMut<[T]> + Send,
    S: AsRef<[T]> + Sync,
    F: Fn(&mut [T], &[T]) + Sync + Send,
{
    confirm_rows::<T, _, _>(label, dest, src)?;

    if dest.len() < MIN_PARALLEL_ROWS {
        trace!("{label}: {} row(s) inline", dest.len());
        dest.iter_mut()
            .zip(src)
            .for_each(|(d, s)| kernel(d.as_mut(), s.as_ref()));
    } else {
        trace!(
            "{label}: {} rows across {} rayon threads",
            dest.len(),
            rayon::current_num_threads()
        );
        dest.par_iter_mut()
            .zip(src.par_iter())
            .for_each(|(d, s)| kernel(d.as_mut(), s.as_ref()));
    }
    Ok(())
}

/// Runs `kernel` on each `(dest_row, lhs_row, rhs_row)` triple after confirming shapes.
fn for_each_row_pair<T, D, L, R, F>(
    label: &str,
    dest: &mut [D],
    lhs: &[L],
    rhs: &[R],
    kernel: F,
) -> Result<(), KernelError>
where
    T: Send + Sync,
    D: AsMut<[T]> + Send,
    L: AsRef<[T]> + Sync,
    R: AsRef<[T]> + Sync,
    F: Fn(&mut [T], &[T], &[T]) + Sync + Send,
{
    confirm_rows::<T, _, _>(&format!("{label} (lhs)"), dest, lhs)?;
    confirm_rows::<T, _, _>(&format!("{label} (rhs)"), dest, rhs)?;

    if dest.len() < MIN_PARALLEL_ROWS {
        trace!("{label}: {} row(s) inline", dest.len());
        dest.iter_mut()
            .zip(lhs.iter().zip(rhs))
            .for_each(|(d, (l, r))| kernel(d.as_mut(), l.as_ref(), r.as_ref()));
    } else {
        trace!(
            "{label}: {} rows across {} rayon threads",
            dest.len(),
            rayon::current_num_threads()
        );
        dest.par_iter_mut()
            .zip(lhs.par_iter().zip(rhs.par_iter()))
            .for_each(|(d, (l, r))| kernel(d.as_mut(), l.as_ref(), r.as_ref()));
    }
    Ok(())
}

/// Generates the jagged-matrix entry points for one float width.
macro_rules! impl_flag_and_rows {
    (
        $ty:ty, $flat:ident, $flat_select:ident,
        $rows:ident, $rows_by_value:ident, $select_rows:ident
    ) => {
        #[doc = concat!(
            "Row-parallel [`", stringify!($flat), "`]: `dest_rows[r][i] = 0` where ",
            "`control_rows[r][i] == 0`, otherwise `value`.\n\n",
            "Returns `KernelError::LengthMismatch` if the row counts or any row lengths differ."
        )]
        pub fn $rows<D, C>(
            dest_rows: &mut [D],
            control_rows: &[C],
            value: $ty,
        ) -> Result<(), KernelError>
        where
            D: AsMut<[$ty]> + Send,
            C: AsRef<[$ty]> + Sync,
        {
            for_each_row(stringify!($rows), dest_rows, control_rows, |d: &mut [$ty], c: &[$ty]| {
                $flat(d, value, c)
            })
        }

        #[doc = concat!(
            "Same as [`", stringify!($rows), "`] with the broadcast value before the control rows."
        )]
        pub fn $rows_by_value<D, C>(
            dest_rows: &mut [D],
            value: $ty,
            control_rows: &[C],
        ) -> Result<(), KernelError>
        where
            D: AsMut<[$ty]> + Send,
            C: AsRef<[$ty]> + Sync,
        {
            for_each_row(stringify!($rows_by_value), dest_rows, control_rows, |d: &mut [$ty], c: &[$ty]| {
                $flat(d, value, c)
            })
        }

        #[doc = concat!(
            "Row-parallel [`", stringify!($flat_select), "`]: `dest_rows[r][i] = 0` where ",
            "`lhs_rows[r][i] == 0`, otherwise `rhs_rows[r][i]`.\n\n",
            "Each row is processed over its own length. Returns `KernelError::LengthMismatch` ",
            "if the row counts or any row lengths differ."
        )]
        pub fn $select_rows<D, L, R>(
            dest_rows: &mut [D],
            lhs_rows: &[L],
            rhs_rows: &[R],
        ) -> Result<(), KernelError>
        where
            D: AsMut<[$ty]> + Send,
            L: AsRef<[$ty]> + Sync,
            R: AsRef<[$ty]> + Sync,
        {
            for_each_row_pair(stringify!($select_rows), dest_rows, lhs_rows, rhs_rows, $flat_select)
        }
    };
}

impl_flag_and_rows!(
    f32, flag_and_f32, flag_and_select_f32,
    flag_and_rows_f32, flag_and_rows_by_value_f32, flag_and_select_rows_f32
);
impl_flag_and_rows!(
    f64, flag_and_f64, flag_and_select_f64,
    flag_and_rows_f64, flag_and_rows_by_value_f64, flag_and_select_rows_f64
);

#[cfg(test)]
mod tests {
    use super::*;

    fn ragged_control(rows: usize) -> Vec<Vec<f32>> {
        (0..rows)
            .map(|r| (0..(r * 3 + 1)).map(|i| ((i + r) % 3) as f32).collect())
            .collect()
    }

    #[test]
    fn test_flag_and_rows_ragged() {
        let control = ragged_control(9);
        let mut dest: Vec<Vec<f32>> = control.iter().map(|r| vec![-1.0; r.len()]).collect();
        flag_and_rows_f32(&mut dest, &control, 4.0).unwrap();
        for (d, c) in dest.iter().zip(&control) {
            let expect: Vec<f32> = c.iter().map(|&x| if x == 0.0 { 0.0 } else { 4.0 }).collect();
            assert_eq!(d, &expect);
        }
    }

    #[test]
    fn test_rows_by_value_matches_rows() {
        let control = ragged_control(6);
        let mut a: Vec<Vec<f32>> = control.iter().map(|r| vec![0.5; r.len()]).collect();
        let mut b = a.clone();
        flag_and_rows_f32(&mut a, &control, 2.0).unwrap();
        flag_and_rows_by_value_f32(&mut b, 2.0, &control).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_select_rows_uses_each_row_length() {
        // Row count (3) differs from every row length; no row is truncated or overrun.
        let lhs = vec![vec![0.0f64, 1.0], vec![1.0, 1.0, 0.0, 1.0, 1.0], vec![]];
        let rhs = vec![vec![5.0f64, 6.0], vec![1.0, 2.0, 3.0, 4.0, 5.0], vec![]];
        let mut dest = vec![vec![9.0f64; 2], vec![9.0; 5], vec![]];
        flag_and_select_rows_f64(&mut dest, &lhs, &rhs).unwrap();
        assert_eq!(dest[0], vec![0.0, 6.0]);
        assert_eq!(dest[1], vec![1.0, 2.0, 0.0, 4.0, 5.0]);
        assert!(dest[2].is_empty());
    }

    #[test]
    fn test_row_count_mismatch_rejected() {
        let control = ragged_control(3);
        let mut dest: Vec<Vec<f32>> = vec![vec![1.0; 1], vec![1.0; 4]];
        let err = flag_and_rows_f32(&mut dest, &control, 1.0).unwrap_err();
        assert!(matches!(err, KernelError::LengthMismatch(_)));
        assert_eq!(dest, vec![vec![1.0; 1], vec![1.0; 4]]);
    }

    #[test]
    fn test_row_length_mismatch_rejected_before_any_write() {
        let control = vec![vec![1.0f32; 4], vec![1.0; 4], vec![1.0; 2]];
        let mut dest = vec![vec![0.0f32; 4], vec![0.0; 4], vec![0.0; 3]];
        let err = flag_and_rows_f32(&mut dest, &control, 3.0).unwrap_err();
        assert!(err.to_string().contains("row 2"));
        assert!(dest.iter().flatten().all(|&x| x == 0.0));

        let lhs = vec![vec![1.0f32; 4]];
        let rhs = vec![vec![1.0f32; 5]];
        let mut dest = vec![vec![0.0f32; 4]];
        let err = flag_and_select_rows_f32(&mut dest, &lhs, &rhs).unwrap_err();
        assert!(err.to_string().contains("rhs"));
    }

    fn ragged_control_f64(rows: usize) -> Vec<Vec<f64>> {
        (0..rows)
            .map(|r| (0..(r * 5 + 2)).map(|i| ((i * 7 + r) % 4) as f64).collect())
            .collect()
    }

    #[test]
    fn test_flag_and_rows_f64_ragged() {
        let control = ragged_control_f64(7);
        let mut dest: Vec<Vec<f64>> = control.iter().map(|r| vec![-1.0; r.len()]).collect();
        flag_and_rows_f64(&mut dest, &control, 2.5).unwrap();
        for (d, c) in dest.iter().zip(&control) {
            let expect: Vec<f64> = c.iter().map(|&x| if x == 0.0 { 0.0 } else { 2.5 }).collect();
            assert_eq!(d, &expect);
        }
    }

    #[test]
    fn test_flag_and_rows_by_value_f64_ragged() {
        let control = ragged_control_f64(5);
        let mut dest: Vec<Vec<f64>> = control.iter().map(|r| vec![9.0; r.len()]).collect();
        flag_and_rows_by_value_f64(&mut dest, -4.0, &control).unwrap();
        for (d, c) in dest.iter().zip(&control) {
            let expect: Vec<f64> = c.iter().map(|&x| if x == 0.0 { 0.0 } else { -4.0 }).collect();
            assert_eq!(d, &expect);
        }

        let mut short = vec![vec![0.0f64; 2]; 4];
        let err = flag_and_rows_by_value_f64(&mut short, 1.0, &control).unwrap_err();
        assert!(matches!(err, KernelError::LengthMismatch(_)));
    }

    #[test]
    fn test_flag_and_select_rows_f64_ragged() {
        let lhs = ragged_control_f64(6);
        let rhs: Vec<Vec<f64>> = lhs
            .iter()
            .map(|r| (0..r.len()).map(|i| 100.0 + i as f64).collect())
            .collect();
        let mut dest: Vec<Vec<f64>> = lhs.iter().map(|r| vec![f64::NAN; r.len()]).collect();
        flag_and_select_rows_f64(&mut dest, &lhs, &rhs).unwrap();
        for ((d, l), r) in dest.iter().zip(&lhs).zip(&rhs) {
            let expect: Vec<f64> = l
                .iter()
                .zip(r)
                .map(|(&a, &b)| if a == 0.0 { 0.0 } else { b })
                .collect();
            assert_eq!(d, &expect);
        }
    }

    #[test]
    fn test_empty_and_single_row() {
        let mut dest: Vec<Vec<f32>> = Vec::new();
        let control: Vec<Vec<f32>> = Vec::new();
        flag_and_rows_f32(&mut dest, &control, 1.0).unwrap();

        let mut dest = vec![vec![3.0f32; 3]];
        flag_and_rows_f32(&mut dest, &[vec![0.0f32, 2.0, 0.0]], 8.0).unwrap();
        assert_eq!(dest, vec![vec![0.0, 8.0, 0.0]]);
    }

    #[test]
    fn test_borrowed_row_slices() {
        let mut backing = [1.0f32; 10];
        let (a, b) = backing.split_at_mut(4);
        let mut dest: Vec<&mut [f32]> = vec![a, b];
        let control: Vec<&[f32]> = vec![&[0.0, 1.0, 0.0, 1.0][..], &[1.0, 1.0, 0.0, 0.0, 1.0, 1.0][..]];
        flag_and_rows_by_value_f32(&mut dest, 5.0, &control).unwrap();
        assert_eq!(backing, [0.0, 5.0, 0.0, 5.0, 5.0, 5.0, 0.0, 0.0, 5.0, 5.0]);
    }
}
