//! Index-list block gather/scatter with accumulation.
//!
//! Both directions accumulate (`+=`) rather than overwrite. Index lists
//! need not be unique or sorted; repeated indices accumulate repeatedly,
//! which callers rely on for symmetry-block accumulation patterns.

use crate::scalar::Scalar;
use crate::{Result, TrilError};

/// Accumulate an index-selected sub-block of `src` into a dense buffer.
///
/// For each `i < idx.len()` and `j < idy.len()`:
/// `dest[i * odim + j] += src[idx[i] * idim + idy[j]]`.
///
/// `odim` and `idim` are the row strides of `dest` and `src`. The
/// destination is accumulated into, never overwritten; callers wanting a
/// fresh gather must pre-zero it. Empty index lists are a no-op.
pub fn gather_into<T: Scalar>(
    dest: &mut [T],
    odim: usize,
    src: &[T],
    idim: usize,
    idx: &[usize],
    idy: &[usize],
) -> Result<()> {
    let (nx, ny) = (idx.len(), idy.len());
    if nx == 0 || ny == 0 {
        return Ok(());
    }
    ensure_dense(dest.len(), odim, nx, ny)?;
    ensure_indexed(src.len(), idim, idx, idy)?;
    for (i, &xi) in idx.iter().enumerate() {
        let base = xi * idim;
        let row = i * odim;
        let dest_row = &mut dest[row..row + ny];
        for (d, &yj) in dest_row.iter_mut().zip(idy) {
            // SAFETY: base + yj <= max_idx * idim + max_idy < src.len(),
            // checked in ensure_indexed.
            let v = unsafe { *src.get_unchecked(base + yj) };
            *d = *d + v;
        }
    }
    Ok(())
}

/// Scatter a dense block back into an index-selected sub-block of `dest`.
///
/// For each `i < idx.len()` and `j < idy.len()`:
/// `dest[idx[i] * odim + idy[j]] += src[i * idim + j]`.
///
/// The layout inverse of [`gather_into`]: `idim` is now the row stride of
/// the dense input and `odim` that of the indexed target. With repeated
/// indices several input cells accumulate into the same target cell.
pub fn scatter_into<T: Scalar>(
    dest: &mut [T],
    odim: usize,
    src: &[T],
    idim: usize,
    idx: &[usize],
    idy: &[usize],
) -> Result<()> {
    let (nx, ny) = (idx.len(), idy.len());
    if nx == 0 || ny == 0 {
        return Ok(());
    }
    ensure_dense(src.len(), idim, nx, ny)?;
    ensure_indexed(dest.len(), odim, idx, idy)?;
    for (i, &xi) in idx.iter().enumerate() {
        let base = xi * odim;
        let row = i * idim;
        let src_row = &src[row..row + ny];
        for (&v, &yj) in src_row.iter().zip(idy) {
            // SAFETY: base + yj <= max_idx * odim + max_idy < dest.len(),
            // checked in ensure_indexed.
            unsafe {
                let d = dest.get_unchecked_mut(base + yj);
                *d = *d + v;
            }
        }
    }
    Ok(())
}

/// The dense side must hold `rows` rows of `cols` used elements at `stride`.
/// A trailing partial row is accepted: only `(rows - 1) * stride + cols`
/// elements are touched.
fn ensure_dense(len: usize, stride: usize, rows: usize, cols: usize) -> Result<()> {
    if stride < cols {
        return Err(TrilError::StrideTooSmall { stride, cols });
    }
    let needed = (rows - 1)
        .checked_mul(stride)
        .and_then(|v| v.checked_add(cols))
        .ok_or(TrilError::ExtentOverflow)?;
    if needed > len {
        return Err(TrilError::BlockOutOfBounds {
            rows,
            cols,
            stride,
            len,
        });
    }
    Ok(())
}

/// The indexed side must reach every `(idx[i], idy[j])` cell: column
/// indices stay below the row stride and the farthest cell stays inside
/// the buffer.
fn ensure_indexed(len: usize, dim: usize, idx: &[usize], idy: &[usize]) -> Result<()> {
    let max_y = idy.iter().copied().max().unwrap_or(0);
    if max_y >= dim {
        return Err(TrilError::IndexOutOfBounds {
            index: max_y,
            extent: dim,
        });
    }
    let max_x = idx.iter().copied().max().unwrap_or(0);
    let last = max_x
        .checked_mul(dim)
        .and_then(|v| v.checked_add(max_y))
        .ok_or(TrilError::ExtentOverflow)?;
    if last >= len {
        return Err(TrilError::IndexOutOfBounds {
            index: max_x,
            extent: len / dim,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gather_accumulates() {
        // 3x3 source, gather rows [2, 0] x cols [1, 2] into a 2x2 block.
        let src: Vec<f64> = (0..9).map(|k| k as f64).collect();
        let mut dest = vec![100.0; 4];
        gather_into(&mut dest, 2, &src, 3, &[2, 0], &[1, 2]).unwrap();
        assert_eq!(dest, [107.0, 108.0, 101.0, 102.0]);
    }

    #[test]
    fn test_scatter_repeated_indices_accumulate() {
        // idx = [0, 0] scatters both input rows into target row 0.
        let src = [3.0, 4.0];
        let mut dest = vec![0.0f64; 4];
        scatter_into(&mut dest, 2, &src, 1, &[0, 0], &[1]).unwrap();
        assert_eq!(dest, [0.0, 7.0, 0.0, 0.0]);
    }

    #[test]
    fn test_gather_wide_strides() {
        // dest rows wider than the block: only the first ny columns of each
        // dest row are touched.
        let src: Vec<f64> = (0..4).map(|k| k as f64).collect();
        let mut dest = vec![0.0f64; 6];
        gather_into(&mut dest, 3, &src, 2, &[1, 0], &[0]).unwrap();
        assert_eq!(dest, [2.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_empty_index_lists() {
        let src = [1.0f64];
        let mut dest = [0.0f64; 1];
        gather_into(&mut dest, 1, &src, 1, &[], &[0]).unwrap();
        scatter_into(&mut dest, 1, &src, 1, &[0], &[]).unwrap();
        assert_eq!(dest, [0.0]);
    }

    #[test]
    fn test_index_out_of_bounds() {
        let src = [1.0f64; 4];
        let mut dest = [0.0f64; 4];
        assert!(matches!(
            gather_into(&mut dest, 2, &src, 2, &[0], &[2]),
            Err(TrilError::IndexOutOfBounds { index: 2, extent: 2 })
        ));
        assert!(matches!(
            gather_into(&mut dest, 2, &src, 2, &[2], &[0]),
            Err(TrilError::IndexOutOfBounds { index: 2, extent: 2 })
        ));
    }

    #[test]
    fn test_stride_too_small() {
        let src = [1.0f64; 4];
        let mut dest = [0.0f64; 4];
        assert!(matches!(
            gather_into(&mut dest, 1, &src, 2, &[0], &[0, 1]),
            Err(TrilError::StrideTooSmall { stride: 1, cols: 2 })
        ));
    }
}
