use core::fmt::Debug;

/// A floating-point type the filter can run on.
///
/// Carries the constants of the GPS domain so that generic code needs no fallible casts.
///
/// Both [`num_traits::Float`] and [`nalgebra::RealField`] define methods such as `abs`;
/// generic code calls them as `Float::abs(value)`.
pub trait FilterScalar: nalgebra::RealField + num_traits::Float + Debug {
    /// Scale of the degree field in a `DDDMM.mmmmm` value, i.e. `100`.
    const DEGREE_FIELD_SCALE: Self;

    /// Minutes per degree, i.e. `60`.
    const MINUTES_PER_DEGREE: Self;

    /// The dilution of precision a receiver reports when it cannot determine one.
    const DOP_UNDETERMINED: Self;

    /// The default process noise added to every diagonal entry per cycle.
    const DEFAULT_PROCESS_NOISE: Self;

    /// The default initial variance, large enough to express "unknown".
    const DEFAULT_INITIAL_UNCERTAINTY: Self;

    /// The default measurement variance of the reported speed.
    const DEFAULT_SPEED_VARIANCE: Self;

    /// The largest latitude magnitude, in degrees.
    const MAX_LATITUDE: Self;

    /// The largest longitude magnitude, in degrees.
    const MAX_LONGITUDE: Self;
}

impl FilterScalar for f32 {
    const DEGREE_FIELD_SCALE: f32 = 100.0;
    const MINUTES_PER_DEGREE: f32 = 60.0;
    const DOP_UNDETERMINED: f32 = 99.99;
    const DEFAULT_PROCESS_NOISE: f32 = 0.1;
    const DEFAULT_INITIAL_UNCERTAINTY: f32 = 1.0e6;
    const DEFAULT_SPEED_VARIANCE: f32 = 0.01;
    const MAX_LATITUDE: f32 = 90.0;
    const MAX_LONGITUDE: f32 = 180.0;
}

impl FilterScalar for f64 {
    const DEGREE_FIELD_SCALE: f64 = 100.0;
    const MINUTES_PER_DEGREE: f64 = 60.0;
    const DOP_UNDETERMINED: f64 = 99.99;
    const DEFAULT_PROCESS_NOISE: f64 = 0.1;
    const DEFAULT_INITIAL_UNCERTAINTY: f64 = 1.0e6;
    const DEFAULT_SPEED_VARIANCE: f64 = 0.01;
    const MAX_LATITUDE: f64 = 90.0;
    const MAX_LONGITUDE: f64 = 180.0;
}
