use crate::error::Singular;
use crate::num_traits::FilterScalar;
use nalgebra::linalg::LU;
use nalgebra::{Matrix3, Vector3, U3};
use num_traits::Float;

/// An LU factorization `P·A = L·U` of a 3×3 matrix, obtained with partial (row) pivoting,
/// whose pivots have all been checked against a relative tolerance.
pub struct LuDecomposition<T: FilterScalar> {
    lu: LU<T, U3, U3>,
}

impl<T> LuDecomposition<T>
where
    T: FilterScalar,
{
    /// Factorizes the matrix.
    ///
    /// The pivot of column `k` counts as negligible when `|uₖₖ| <= 3·ε·maxᵢ|aᵢₖ|`, i.e. when
    /// it vanishes relative to the magnitude of the same column of `matrix`. A badly scaled
    /// but regular matrix, such as `diag(1e20, 1e20, 0.02)`, therefore still factorizes.
    ///
    /// ## Errors
    /// Returns [`Singular`] with the first column whose pivot is negligible, or column `0`
    /// when the matrix contains non-finite values.
    pub fn decompose(matrix: &Matrix3<T>) -> Result<Self, Singular> {
        if !matrix.iter().all(|value| Float::is_finite(*value)) {
            return Err(Singular { column: 0 });
        }

        let three = T::one() + T::one() + T::one();
        let relative = three * <T as Float>::epsilon();

        let lu = LU::new(*matrix);
        let u = lu.u();
        for column in 0..3 {
            let magnitude = matrix
                .column(column)
                .iter()
                .fold(T::zero(), |max, value| Float::max(max, Float::abs(*value)));

            if Float::abs(u[(column, column)]) <= relative * magnitude {
                return Err(Singular { column });
            }
        }

        Ok(Self { lu })
    }

    /// Returns the determinant of the factorized matrix.
    pub fn determinant(&self) -> T {
        self.lu.determinant()
    }

    /// Solves `A·x = b` for `x`.
    pub fn solve(&self, b: &Vector3<T>) -> Option<Vector3<T>> {
        self.lu.solve(b)
    }

    /// Returns the inverse of the factorized matrix.
    pub fn inverse(&self) -> Option<Matrix3<T>> {
        self.lu.try_inverse()
    }

    /// Returns the column with the smallest pivot.
    fn weakest_column(&self) -> usize {
        let u = self.lu.u();
        (1..3).fold(0, |weakest, column| {
            if Float::abs(u[(column, column)]) < Float::abs(u[(weakest, weakest)]) {
                column
            } else {
                weakest
            }
        })
    }
}

/// Inverts a 3×3 matrix through its LU factorization.
///
/// ## Errors
/// Returns [`Singular`] if the matrix has no numerically reliable inverse.
pub fn invert<T>(matrix: &Matrix3<T>) -> Result<Matrix3<T>, Singular>
where
    T: FilterScalar,
{
    let lu = LuDecomposition::decompose(matrix)?;
    lu.inverse().ok_or_else(|| Singular {
        column: lu.weakest_column(),
    })
}
