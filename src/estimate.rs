use crate::impl_standard_traits;
use crate::num_traits::FilterScalar;
use nalgebra::Vector3;
use uniform_array_derive::UniformArray;

/// The filtered position and speed published after every cycle.
#[derive(UniformArray)]
#[cfg_attr(test, ensure_uniform_type::ensure_uniform_type)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Estimate<T> {
    /// The latitude, in decimal degrees.
    pub latitude: T,
    /// The longitude, in decimal degrees.
    pub longitude: T,
    /// The speed over ground, in the unit the receiver reports.
    pub speed: T,
}

/// The diagonal of the estimate covariance, i.e. the per-axis variances of an [`Estimate`].
///
/// ## Interpretation
/// - Low Variance: Indicates high certainty in the estimate.
/// - High Variance: Indicates that the filter has not yet seen enough good fixes,
///   or that fixes have been missing for a while.
#[derive(UniformArray)]
#[cfg_attr(test, ensure_uniform_type::ensure_uniform_type)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct EstimateVariance<T> {
    /// The latitude variance, in degrees².
    pub latitude: T,
    /// The longitude variance, in degrees².
    pub longitude: T,
    /// The speed variance.
    pub speed: T,
}

impl_standard_traits!(Estimate, T, latitude, longitude, speed);
impl_standard_traits!(EstimateVariance, T, latitude, longitude, speed);

impl<T> From<Vector3<T>> for Estimate<T>
where
    T: FilterScalar,
{
    fn from(value: Vector3<T>) -> Self {
        Self::new(value.x, value.y, value.z)
    }
}

impl<T> From<Estimate<T>> for Vector3<T>
where
    T: FilterScalar,
{
    fn from(value: Estimate<T>) -> Self {
        Vector3::new(value.latitude, value.longitude, value.speed)
    }
}

impl<T> From<Vector3<T>> for EstimateVariance<T>
where
    T: FilterScalar,
{
    fn from(value: Vector3<T>) -> Self {
        Self::new(value.x, value.y, value.z)
    }
}
