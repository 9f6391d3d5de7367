//! Error type shared by the distance oracle, the operators and the runner.

/// Errors raised while evaluating or evolving tours.
///
/// Location identifiers are carried in their `Debug` rendering so the error
/// stays independent of the location type.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TspError {
    #[error("unknown location: {location}")]
    UnknownLocation { location: String },
    #[error("missing distance: from={from}, to={to}")]
    MissingDistance { from: String, to: String },
    #[error("tour has {actual} locations, expected {expected}")]
    TourLength { expected: usize, actual: usize },
    #[error("mixing number {mixing_number} needs more cut points than {locations} locations allow")]
    NotEnoughCutPoints {
        mixing_number: usize,
        locations: usize,
    },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("population is empty")]
    EmptyPopulation,
}

pub type Result<T> = std::result::Result<T, TspError>;
