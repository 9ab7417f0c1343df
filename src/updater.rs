use crate::error::FilterError;
use crate::inverse::invert;
use crate::measurement::Measurement;
use crate::model::TransitionModel;
use crate::num_traits::FilterScalar;
use crate::state::FilterState;
use nalgebra::Matrix3;

/// Corrects a predicted state with a measurement.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MeasurementUpdater<T> {
    observation: Matrix3<T>,
}

impl<T> MeasurementUpdater<T>
where
    T: FilterScalar,
{
    /// Initializes the updater with the observation matrix of the model.
    pub fn new(model: &TransitionModel<T>) -> Self {
        Self {
            observation: *model.observation(),
        }
    }

    /// Performs the measurement update.
    ///
    /// ```text
    /// S  = H·P·Hᵀ + R
    /// K  = P·Hᵀ·S⁻¹
    /// y  = z - H·x
    /// x' = x + K·y
    /// P' = P - K·H·P
    /// ```
    ///
    /// Every term is computed from the predicted `state`; the corrected state is
    /// returned as a new value.
    ///
    /// ## Errors
    /// Returns [`FilterError::SingularCovariance`] if the innovation covariance `S`
    /// cannot be inverted, and [`FilterError::NonFiniteCorrection`] if the corrected
    /// estimate or covariance overflowed. The predicted state is then still valid and
    /// should be kept.
    pub fn update(
        &self,
        state: &FilterState<T>,
        measurement: &Measurement<T>,
    ) -> Result<FilterState<T>, FilterError> {
        let h = self.observation;
        let ht = h.transpose();
        let x = state.estimate;
        let p = state.covariance;

        let s = h * p * ht + measurement.covariance;
        let s_inv = invert(&s)?;
        let k = p * ht * s_inv;

        let y = measurement.value - h * x;

        let corrected = FilterState {
            estimate: x + k * y,
            covariance: p - k * h * p,
        };

        if !corrected.is_finite() {
            return Err(FilterError::NonFiniteCorrection);
        }
        Ok(corrected)
    }
}
