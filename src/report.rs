use crate::coordinates::decimal_minutes_to_degrees;
use crate::error::{FilterError, MalformedField};
use crate::num_traits::FilterScalar;
use num_traits::Float;

/// The solution type a receiver reports.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum OperatingMode {
    /// No position solution is available.
    NoFix = 1,
    /// A two-dimensional (latitude, longitude) solution.
    Fix2D = 2,
    /// A three-dimensional solution including altitude.
    Fix3D = 3,
}

impl OperatingMode {
    /// Determines whether the mode carries a usable position.
    #[inline]
    pub const fn has_position(&self) -> bool {
        matches!(self, Self::Fix2D | Self::Fix3D)
    }
}

impl TryFrom<u8> for OperatingMode {
    type Error = MalformedField;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::NoFix),
            2 => Ok(Self::Fix2D),
            3 => Ok(Self::Fix3D),
            other => Err(MalformedField::Mode(other)),
        }
    }
}

/// The signal quality tier of a fix.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum SignalQuality {
    /// The fix is invalid.
    Invalid = 0,
    /// A plain GPS fix.
    Fix = 1,
    /// A differentially corrected fix.
    Differential = 2,
    /// A high-sensitivity fix.
    Sensitive = 3,
}

impl SignalQuality {
    /// Determines whether the tier is at least a plain fix.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        !matches!(self, Self::Invalid)
    }
}

impl TryFrom<u8> for SignalQuality {
    type Error = MalformedField;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Invalid),
            1 => Ok(Self::Fix),
            2 => Ok(Self::Differential),
            3 => Ok(Self::Sensitive),
            other => Err(MalformedField::Signal(other)),
        }
    }
}

/// A fix as reported by the receiver, before any conversion.
///
/// Latitude and longitude use the `DDDMM.mmmmm` degrees and decimal minutes encoding.
/// The mode and signal fields keep their wire codes so that a report with unknown
/// codes can still be represented, and rejected, by the filter.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawFixReport<T> {
    /// The operating mode code, see [`OperatingMode`].
    pub mode: u8,
    /// The signal quality code, see [`SignalQuality`].
    pub signal: u8,
    /// The dilution of precision.
    pub dop: T,
    /// The latitude, in `DDMM.mmmmm`.
    pub latitude: T,
    /// The longitude, in `DDDMM.mmmmm`.
    pub longitude: T,
    /// The speed over ground.
    pub speed: T,
    /// The heading, in degrees. Carried along but not filtered.
    pub heading: T,
}

impl<T> RawFixReport<T>
where
    T: FilterScalar,
{
    /// Returns the decoded operating mode.
    #[inline]
    pub fn operating_mode(&self) -> Result<OperatingMode, MalformedField> {
        OperatingMode::try_from(self.mode)
    }

    /// Returns the decoded signal quality.
    #[inline]
    pub fn signal_quality(&self) -> Result<SignalQuality, MalformedField> {
        SignalQuality::try_from(self.signal)
    }

    /// Checks the report for structurally invalid content.
    ///
    /// A report is malformed if a code is unknown, a filtered numeric field is not finite,
    /// a coordinate lies beyond 90° latitude or 180° longitude once converted, or the
    /// dilution of precision is NaN. An infinite dilution of precision is well-formed;
    /// the quality gate decides on it.
    ///
    /// ## Errors
    /// Returns [`FilterError::MalformedReport`] naming the first offending field.
    pub fn validate(&self) -> Result<(), FilterError> {
        self.check_fields().map_err(FilterError::MalformedReport)
    }

    fn check_fields(&self) -> Result<(), MalformedField> {
        self.operating_mode()?;
        self.signal_quality()?;

        if Float::is_nan(self.dop) {
            return Err(MalformedField::Dop);
        }
        if !within(self.latitude, T::MAX_LATITUDE) {
            return Err(MalformedField::Latitude);
        }
        if !within(self.longitude, T::MAX_LONGITUDE) {
            return Err(MalformedField::Longitude);
        }
        if !Float::is_finite(self.speed) {
            return Err(MalformedField::Speed);
        }
        Ok(())
    }
}

/// Whether a `DDDMM.mmmmm` coordinate is finite and at most `limit` degrees away from zero.
fn within<T>(coordinate: T, limit: T) -> bool
where
    T: FilterScalar,
{
    Float::is_finite(coordinate) && Float::abs(decimal_minutes_to_degrees(coordinate)) <= limit
}
