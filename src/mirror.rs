//! In-place triangle mirror for square row-major matrices.

use crate::relation::Relation;
use crate::scalar::Scalar;
use crate::{Result, TrilError, BLOCK_DIM};

/// Fill the upper triangle of a square row-major matrix from its lower
/// triangle, applying `rel` to each mirrored value.
///
/// Every element `(i, j)` with `j > i` is overwritten with
/// `rel.apply(mat[j][i])`; the lower triangle and the diagonal are left
/// untouched. `n = 0` is a no-op.
///
/// Iteration is tiled with [`BLOCK_DIM`] for cache locality. The tile size
/// has no observable effect on the result: the output equals the naive
/// double loop `mat[j][i] = rel.apply(mat[i][j])` over all `j < i`.
pub fn fill_triu<T: Scalar>(mat: &mut [T], n: usize, rel: Relation) -> Result<()> {
    ensure_square(mat.len(), n)?;
    match rel {
        Relation::Symmetric => fill_blocked(mat, n, |v| v),
        Relation::Antisymmetric => fill_blocked(mat, n, |v| -v),
        Relation::Hermitian => fill_blocked(mat, n, |v| v.conj()),
        Relation::AntiHermitian => fill_blocked(mat, n, |v| -v.conj()),
    }
    Ok(())
}

pub(crate) fn ensure_square(len: usize, n: usize) -> Result<()> {
    let expected = n.checked_mul(n).ok_or(TrilError::ExtentOverflow)?;
    if len != expected {
        return Err(TrilError::SquareLen { n, expected, len });
    }
    Ok(())
}

/// Blocked mirror with the relation already monomorphized into `f`.
///
/// Full tiles strictly below the diagonal band are mirrored whole; the tile
/// straddling the diagonal is handled element-wise restricted to `j < i`.
fn fill_blocked<T: Scalar>(mat: &mut [T], n: usize, f: impl Fn(T) -> T) {
    for i0 in (0..n).step_by(BLOCK_DIM) {
        let i1 = (i0 + BLOCK_DIM).min(n);
        // j0 and i0 are both multiples of BLOCK_DIM, so full tiles end at
        // j0 + BLOCK_DIM <= i0 <= n without clamping.
        for j0 in (0..i0).step_by(BLOCK_DIM) {
            for i in i0..i1 {
                for j in j0..j0 + BLOCK_DIM {
                    // SAFETY: i < n and j < i0 <= n, and len == n * n was
                    // checked in ensure_square.
                    unsafe {
                        let v = *mat.get_unchecked(i * n + j);
                        *mat.get_unchecked_mut(j * n + i) = f(v);
                    }
                }
            }
        }
        for i in i0..i1 {
            for j in i0..i {
                // SAFETY: j < i < n, and len == n * n was checked.
                unsafe {
                    let v = *mat.get_unchecked(i * n + j);
                    *mat.get_unchecked_mut(j * n + i) = f(v);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    /// Reference implementation: naive double loop.
    fn fill_triu_naive<T: Scalar>(mat: &mut [T], n: usize, rel: Relation) {
        for i in 0..n {
            for j in 0..i {
                mat[j * n + i] = rel.apply(mat[i * n + j]);
            }
        }
    }

    fn lower_filled(n: usize) -> Vec<f64> {
        // Upper triangle poisoned so the mirror has to overwrite it.
        let mut mat = vec![f64::NAN; n * n];
        for i in 0..n {
            for j in 0..=i {
                mat[i * n + j] = (i * n + j + 1) as f64;
            }
        }
        mat
    }

    #[test]
    fn test_matches_naive_across_block_boundaries() {
        // Sizes straddling multiples of BLOCK_DIM.
        for n in [1, 2, 7, BLOCK_DIM - 1, BLOCK_DIM, BLOCK_DIM + 1, 3 * BLOCK_DIM + 5] {
            for rel in [Relation::Symmetric, Relation::Antisymmetric] {
                let mut blocked = lower_filled(n);
                let mut naive = lower_filled(n);
                fill_triu(&mut blocked, n, rel).unwrap();
                fill_triu_naive(&mut naive, n, rel);
                assert_eq!(blocked, naive, "n = {n}, rel = {rel:?}");
            }
        }
    }

    #[test]
    fn test_diagonal_and_lower_untouched() {
        let n = 5;
        let mut mat = lower_filled(n);
        let before = mat.clone();
        fill_triu(&mut mat, n, Relation::Antisymmetric).unwrap();
        for i in 0..n {
            for j in 0..=i {
                assert_eq!(mat[i * n + j], before[i * n + j]);
            }
        }
    }

    #[test]
    fn test_hermitian_complex() {
        let n = 3;
        let mut mat = vec![Complex64::new(0.0, 0.0); n * n];
        for i in 0..n {
            for j in 0..=i {
                mat[i * n + j] = Complex64::new(i as f64, j as f64 + 1.0);
            }
        }
        fill_triu(&mut mat, n, Relation::Hermitian).unwrap();
        for i in 0..n {
            for j in 0..i {
                assert_eq!(mat[j * n + i], mat[i * n + j].conj());
            }
        }
    }

    #[test]
    fn test_empty() {
        let mut mat: Vec<f64> = vec![];
        fill_triu(&mut mat, 0, Relation::Symmetric).unwrap();
    }

    #[test]
    fn test_len_mismatch() {
        let mut mat = vec![0.0f64; 8];
        assert!(matches!(
            fill_triu(&mut mat, 3, Relation::Symmetric),
            Err(TrilError::SquareLen { n: 3, expected: 9, len: 8 })
        ));
    }
}
