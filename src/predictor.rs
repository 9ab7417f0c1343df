use crate::model::TransitionModel;
use crate::num_traits::FilterScalar;
use crate::state::FilterState;

/// Advances the filter state by one cycle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StatePredictor<T> {
    model: TransitionModel<T>,
}

impl<T> StatePredictor<T>
where
    T: FilterScalar,
{
    /// Initializes the predictor for the given model.
    pub const fn new(model: TransitionModel<T>) -> Self {
        Self { model }
    }

    /// Returns the model.
    pub const fn model(&self) -> &TransitionModel<T> {
        &self.model
    }

    /// Performs the time update `x' = F·x`, `P' = F·P·Fᵀ + Q`.
    ///
    /// The prediction never fails; it runs every cycle, whether a fix arrived or not.
    pub fn predict(&self, state: &FilterState<T>) -> FilterState<T> {
        let f = *self.model.transition();
        let q = *self.model.process_noise();

        FilterState {
            estimate: f * state.estimate,
            covariance: f * state.covariance * f.transpose() + q,
        }
    }
}
