use crate::estimate::{Estimate, EstimateVariance};
use crate::num_traits::FilterScalar;
use nalgebra::{Matrix3, Vector3};
use num_traits::Float;

/// The persistent state of the filter: the current estimate and its uncertainty.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FilterState<T> {
    /// The state vector `x` of latitude, longitude and speed.
    pub estimate: Vector3<T>,
    /// The estimate covariance `P`.
    pub covariance: Matrix3<T>,
}

impl<T> FilterState<T>
where
    T: FilterScalar,
{
    /// Initializes the state with a zero estimate and `uncertainty` on the covariance diagonal.
    pub fn initial(uncertainty: T) -> Self {
        Self {
            estimate: Vector3::zeros(),
            covariance: Matrix3::from_diagonal_element(uncertainty),
        }
    }

    /// Returns the estimate as a record.
    #[inline]
    pub fn as_estimate(&self) -> Estimate<T> {
        self.estimate.into()
    }

    /// Returns the variance of every axis.
    #[inline]
    pub fn variance(&self) -> EstimateVariance<T> {
        self.covariance.diagonal().into()
    }

    /// Returns whether the estimate and the covariance hold only finite values.
    pub fn is_finite(&self) -> bool {
        self.estimate.iter().all(|value| Float::is_finite(*value))
            && self.covariance.iter().all(|value| Float::is_finite(*value))
    }
}
