use crate::num_traits::FilterScalar;
use nalgebra::Matrix3;

/// The constant matrices of the linear model.
///
/// ## Model
/// - State transition `F`: how the state evolves from one cycle to the next.
/// - Process noise `Q`: how much uncertainty every cycle adds.
/// - Observation `H`: how the state maps to a measurement.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TransitionModel<T> {
    transition: Matrix3<T>,
    process_noise: Matrix3<T>,
    observation: Matrix3<T>,
}

impl<T> TransitionModel<T>
where
    T: FilterScalar,
{
    /// Initializes a random-walk model: `F = I`, `Q = process_noise·I`, `H = I`.
    pub fn new(process_noise: T) -> Self {
        Self {
            transition: Matrix3::identity(),
            process_noise: Matrix3::from_diagonal_element(process_noise),
            observation: Matrix3::identity(),
        }
    }

    /// Replaces the state transition matrix, e.g. to account for the time step.
    pub fn with_transition(mut self, transition: Matrix3<T>) -> Self {
        self.transition = transition;
        self
    }

    /// Returns the state transition matrix `F`.
    #[inline(always)]
    pub fn transition(&self) -> &Matrix3<T> {
        &self.transition
    }

    /// Returns the process noise covariance `Q`.
    #[inline(always)]
    pub fn process_noise(&self) -> &Matrix3<T> {
        &self.process_noise
    }

    /// Returns the observation matrix `H`.
    #[inline(always)]
    pub fn observation(&self) -> &Matrix3<T> {
        &self.observation
    }
}

impl<T> Default for TransitionModel<T>
where
    T: FilterScalar,
{
    fn default() -> Self {
        Self::new(T::DEFAULT_PROCESS_NOISE)
    }
}
