use crate::num_traits::FilterScalar;
use num_traits::Float;

/// Converts a `DDDMM.mmmmm` (degrees and decimal minutes) value to `DDD.dddddd` decimal degrees.
///
/// The integer part of `value / 100` holds the degrees, the remainder holds the minutes.
/// The integer part truncates toward zero, so a negative input keeps its sign on both
/// the degrees and the minutes, e.g. `-4730.0` becomes `-47.5`. Splitting with `floor`
/// instead gives `-48` degrees and `70` minutes, i.e. `-46.8333`, for the same input;
/// both agree for non-negative values.
///
/// ## Example
/// ```
/// use gps_kalman::decimal_minutes_to_degrees;
///
/// assert_eq!(decimal_minutes_to_degrees(4730.0_f64), 47.5);
/// ```
pub fn decimal_minutes_to_degrees<T>(value: T) -> T
where
    T: FilterScalar,
{
    let degrees = Float::trunc(value / T::DEGREE_FIELD_SCALE); // DDD
    let minutes = value - T::DEGREE_FIELD_SCALE * degrees; // MM.mmmmm
    degrees + minutes / T::MINUTES_PER_DEGREE
}
