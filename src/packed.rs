//! Packed lower-triangle storage: codec and single-row extraction.
//!
//! Packed storage is the linear row-major enumeration of the lower triangle
//! of an `n x n` matrix: row `i` contributes its `i + 1` leading elements,
//! so position `(i, j)` with `j <= i` lives at packed index
//! `i * (i + 1) / 2 + j`. Callers index packed buffers directly, so this
//! mapping is part of the API contract, exposed as [`packed_index`].

use crate::mirror::{ensure_square, fill_triu};
use crate::relation::Relation;
use crate::scalar::Scalar;
use crate::{Result, TrilError};

/// Number of elements in the packed lower triangle of an `n x n` matrix.
#[inline]
pub const fn packed_len(n: usize) -> usize {
    n * (n + 1) / 2
}

/// Packed index of matrix position `(i, j)` with `j <= i`.
#[inline]
pub const fn packed_index(i: usize, j: usize) -> usize {
    debug_assert!(j <= i);
    i * (i + 1) / 2 + j
}

fn ensure_packed(len: usize, n: usize) -> Result<()> {
    let expected = packed_len(n);
    if len != expected {
        return Err(TrilError::PackedLen { n, expected, len });
    }
    Ok(())
}

/// Pack the lower triangle of a square row-major matrix into `tril`.
///
/// Writes `tril[packed_index(i, j)] = mat[i][j]` for all `j <= i`. Only the
/// lower triangle and the diagonal are read; the upper triangle is ignored
/// even if populated.
pub fn pack_tril<T: Scalar>(tril: &mut [T], mat: &[T], n: usize) -> Result<()> {
    ensure_packed(tril.len(), n)?;
    ensure_square(mat.len(), n)?;
    let mut ij = 0;
    for i in 0..n {
        let row = i * n;
        tril[ij..ij + i + 1].copy_from_slice(&mat[row..row + i + 1]);
        ij += i + 1;
    }
    Ok(())
}

/// Unpack packed lower-triangle storage into a full square matrix.
///
/// Row `i`'s `i + 1` packed elements land at `mat[i][0..=i]`. With
/// `fill = Some(rel)` the upper triangle is then completed by
/// [`fill_triu`]; with `fill = None` only the lower triangle is written and
/// the upper triangle keeps whatever the buffer already held.
pub fn unpack_tril<T: Scalar>(
    mat: &mut [T],
    tril: &[T],
    n: usize,
    fill: Option<Relation>,
) -> Result<()> {
    ensure_square(mat.len(), n)?;
    ensure_packed(tril.len(), n)?;
    let mut ij = 0;
    for i in 0..n {
        let row = i * n;
        mat[row..row + i + 1].copy_from_slice(&tril[ij..ij + i + 1]);
        ij += i + 1;
    }
    if let Some(rel) = fill {
        fill_triu(mat, n, rel)?;
    }
    Ok(())
}

/// Extract one full logical row from packed storage without unpacking the
/// whole matrix.
///
/// The prefix `out[0..=row]` is a single contiguous copy from packed offset
/// `packed_index(row, 0)`; each `out[j]` with `j > row` is the stored
/// `(j, row)` entry. The result is always the plain-symmetric row view:
/// unlike [`unpack_tril`] there is no sign or conjugation variant, only the
/// raw stored triangle reflected across the diagonal.
pub fn unpack_row<T: Scalar>(out: &mut [T], tril: &[T], n: usize, row: usize) -> Result<()> {
    ensure_packed(tril.len(), n)?;
    if row >= n {
        return Err(TrilError::RowOutOfBounds { row, n });
    }
    if out.len() != n {
        return Err(TrilError::RowLen { n, len: out.len() });
    }
    let start = packed_index(row, 0);
    out[..=row].copy_from_slice(&tril[start..start + row + 1]);
    // Walk down column `row`: consecutive packed rows grow by one element,
    // so the index advances by j at each step.
    let mut idx = start + row;
    for j in row + 1..n {
        idx += j;
        out[j] = tril[idx];
    }
    Ok(())
}
