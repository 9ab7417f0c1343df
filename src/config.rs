use crate::error::FilterError;
use crate::num_traits::FilterScalar;
use num_traits::Float;

/// Tuning constants of the filter.
///
/// ## Example
/// ```
/// use gps_kalman::FilterConfig;
///
/// let config = FilterConfig::<f64>::default().with_process_noise(0.05);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterConfig<T> {
    /// The variance added to every diagonal covariance entry per cycle (`Q = q·I`).
    pub process_noise: T,
    /// The variance of every axis at start and after a reset (`P₀ = p·I`).
    pub initial_uncertainty: T,
    /// The measurement variance of the speed axis.
    pub speed_variance: T,
    /// Fixes with a dilution of precision at or above this value are rejected.
    pub dop_sentinel: T,
}

impl<T> FilterConfig<T>
where
    T: FilterScalar,
{
    /// Replaces the process noise.
    pub fn with_process_noise(mut self, value: T) -> Self {
        self.process_noise = value;
        self
    }

    /// Replaces the initial uncertainty.
    pub fn with_initial_uncertainty(mut self, value: T) -> Self {
        self.initial_uncertainty = value;
        self
    }

    /// Replaces the speed measurement variance.
    pub fn with_speed_variance(mut self, value: T) -> Self {
        self.speed_variance = value;
        self
    }

    /// Replaces the "undetermined" dilution of precision sentinel.
    pub fn with_dop_sentinel(mut self, value: T) -> Self {
        self.dop_sentinel = value;
        self
    }

    /// Ensures every value is finite and strictly positive.
    ///
    /// ## Errors
    /// Returns [`FilterError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<(), FilterError> {
        let fields = [
            ("process_noise", self.process_noise),
            ("initial_uncertainty", self.initial_uncertainty),
            ("speed_variance", self.speed_variance),
            ("dop_sentinel", self.dop_sentinel),
        ];

        for (name, value) in fields {
            if !Float::is_finite(value) || value <= T::zero() {
                return Err(FilterError::InvalidConfig(name));
            }
        }
        Ok(())
    }
}

impl<T> Default for FilterConfig<T>
where
    T: FilterScalar,
{
    fn default() -> Self {
        Self {
            process_noise: T::DEFAULT_PROCESS_NOISE,
            initial_uncertainty: T::DEFAULT_INITIAL_UNCERTAINTY,
            speed_variance: T::DEFAULT_SPEED_VARIANCE,
            dop_sentinel: T::DOP_UNDETERMINED,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FilterConfig::<f64>::default();
        assert_eq!(config.process_noise, 0.1);
        assert_eq!(config.initial_uncertainty, 1.0e6);
        assert_eq!(config.speed_variance, 0.01);
        assert_eq!(config.dop_sentinel, 99.99);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_setters() {
        let config = FilterConfig::<f32>::default()
            .with_process_noise(0.5)
            .with_initial_uncertainty(10.0)
            .with_speed_variance(0.2)
            .with_dop_sentinel(50.0);
        assert_eq!(config.process_noise, 0.5);
        assert_eq!(config.initial_uncertainty, 10.0);
        assert_eq!(config.speed_variance, 0.2);
        assert_eq!(config.dop_sentinel, 50.0);
    }

    #[test]
    fn test_rejects_non_positive() {
        let config = FilterConfig::<f64>::default().with_speed_variance(0.0);
        assert_eq!(
            config.validate(),
            Err(FilterError::InvalidConfig("speed_variance"))
        );

        let config = FilterConfig::<f64>::default().with_process_noise(-1.0);
        assert_eq!(
            config.validate(),
            Err(FilterError::InvalidConfig("process_noise"))
        );
    }

    #[test]
    fn test_rejects_non_finite() {
        let config = FilterConfig::<f64>::default().with_initial_uncertainty(f64::INFINITY);
        assert_eq!(
            config.validate(),
            Err(FilterError::InvalidConfig("initial_uncertainty"))
        );

        let config = FilterConfig::<f64>::default().with_dop_sentinel(f64::NAN);
        assert_eq!(
            config.validate(),
            Err(FilterError::InvalidConfig("dop_sentinel"))
        );
    }
}
