use crate::num_traits::FilterScalar;
use crate::report::RawFixReport;

/// Decides whether a fix is trustworthy enough for a measurement update.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FixQualityGate<T> {
    dop_sentinel: T,
}

impl<T> FixQualityGate<T>
where
    T: FilterScalar,
{
    /// Initializes a gate that rejects fixes whose dilution of precision is at or above
    /// the `dop_sentinel`.
    pub const fn new(dop_sentinel: T) -> Self {
        Self { dop_sentinel }
    }

    /// Returns the "undetermined" dilution of precision sentinel.
    pub const fn dop_sentinel(&self) -> T {
        self.dop_sentinel
    }

    /// Determines whether the fix may be used.
    ///
    /// A fix passes only if the receiver has at least a two-dimensional solution,
    /// the signal quality is at least a plain fix and the dilution of precision is
    /// strictly below the sentinel. Absent fixes, unknown codes and a NaN dilution of
    /// precision never pass.
    pub fn is_fix_ok(&self, report: Option<&RawFixReport<T>>) -> bool {
        let Some(report) = report else {
            return false;
        };

        let has_position = report
            .operating_mode()
            .map(|mode| mode.has_position())
            .unwrap_or(false);
        let has_signal = report
            .signal_quality()
            .map(|signal| signal.is_valid())
            .unwrap_or(false);

        has_position && has_signal && report.dop < self.dop_sentinel
    }
}

impl<T> Default for FixQualityGate<T>
where
    T: FilterScalar,
{
    fn default() -> Self {
        Self::new(T::DOP_UNDETERMINED)
    }
}
