use crate::config::FilterConfig;
use crate::coordinates::decimal_minutes_to_degrees;
use crate::gate::FixQualityGate;
use crate::num_traits::FilterScalar;
use crate::report::RawFixReport;
use nalgebra::{Matrix3, Vector3};
use num_traits::Float;

/// A fix normalized for the measurement update.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Measurement<T> {
    /// The measurement vector `z`: latitude and longitude in decimal degrees, and speed.
    pub value: Vector3<T>,
    /// The measurement noise covariance `R`.
    pub covariance: Matrix3<T>,
    /// Whether the fix passed the quality gate. A measurement that did not
    /// must not be applied.
    pub fix_ok: bool,
}

impl<T> Measurement<T>
where
    T: FilterScalar,
{
    /// Converts a report into a measurement.
    ///
    /// The position variance is the absolute dilution of precision, the speed variance
    /// is taken from the configuration.
    pub fn from_report(
        report: &RawFixReport<T>,
        gate: &FixQualityGate<T>,
        config: &FilterConfig<T>,
    ) -> Self {
        let value = Vector3::new(
            decimal_minutes_to_degrees(report.latitude),
            decimal_minutes_to_degrees(report.longitude),
            report.speed,
        );

        let dop = Float::abs(report.dop);
        let covariance = Matrix3::from_diagonal(&Vector3::new(dop, dop, config.speed_variance));

        Self {
            value,
            covariance,
            fix_ok: gate.is_fix_ok(Some(report)),
        }
    }
}
