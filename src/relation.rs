//! Mirror relation tags.

use crate::scalar::Scalar;

/// How the upper triangle of a square matrix is derived from its lower
/// triangle.
///
/// For real element types conjugation is a no-op, so [`Hermitian`] behaves
/// like [`Symmetric`] and [`AntiHermitian`] like [`Antisymmetric`].
///
/// [`Hermitian`]: Relation::Hermitian
/// [`Symmetric`]: Relation::Symmetric
/// [`AntiHermitian`]: Relation::AntiHermitian
/// [`Antisymmetric`]: Relation::Antisymmetric
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// `mat[j][i] = mat[i][j]`
    Symmetric,
    /// `mat[j][i] = -mat[i][j]`. The mirror never touches the diagonal, so
    /// a truly antisymmetric result requires the caller to have zeroed it.
    Antisymmetric,
    /// `mat[j][i] = conj(mat[i][j])`
    Hermitian,
    /// `mat[j][i] = -conj(mat[i][j])`
    AntiHermitian,
}

impl Relation {
    /// Map a lower-triangle value to its mirror above the diagonal.
    #[inline(always)]
    pub fn apply<T: Scalar>(self, value: T) -> T {
        match self {
            Relation::Symmetric => value,
            Relation::Antisymmetric => -value,
            Relation::Hermitian => value.conj(),
            Relation::AntiHermitian => -value.conj(),
        }
    }
}
