use thiserror::Error;

/// The matrix could not be inverted because its LU factorization ran into a
/// zero or numerically negligible pivot.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("matrix is singular: negligible pivot in column {column}")]
pub struct Singular {
    /// The column in which elimination failed.
    pub column: usize,
}

/// The field of a fix report that failed validation.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum MalformedField {
    /// The operating mode code is not one of the known modes.
    #[error("unknown operating mode code {0}")]
    Mode(u8),
    /// The signal quality code is not one of the known tiers.
    #[error("unknown signal quality code {0}")]
    Signal(u8),
    /// The dilution of precision is not a number.
    #[error("dilution of precision is NaN")]
    Dop,
    /// The latitude is not a finite number or lies beyond the poles.
    #[error("latitude is not finite or out of range")]
    Latitude,
    /// The longitude is not a finite number or lies beyond ±180°.
    #[error("longitude is not finite or out of range")]
    Longitude,
    /// The speed is not a finite number.
    #[error("non-finite speed")]
    Speed,
}

/// Errors surfaced by the filter and its host adapter.
///
/// None of these are fatal: a failed cycle degrades to a prediction-only cycle
/// and the persistent filter state stays consistent.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// A fix report carried structurally invalid fields.
    #[error("malformed fix report: {0}")]
    MalformedReport(MalformedField),
    /// The innovation covariance could not be inverted.
    #[error("innovation covariance is not invertible")]
    SingularCovariance(#[from] Singular),
    /// The corrected state held infinite or NaN values and was discarded.
    #[error("correction produced a non-finite state")]
    NonFiniteCorrection,
    /// A command code that the application does not know.
    #[error("invalid command code {0}")]
    InvalidCommand(u16),
    /// A configuration value that must be finite and positive is not.
    #[error("invalid configuration: {0} must be finite and positive")]
    InvalidConfig(&'static str),
}
