use thiserror::Error;

/// Failures surfaced to callers of the valuation and profit APIs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValuationError {
    #[error("{field} {value} is outside {min}..={max}")]
    InvalidInput {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
    #[error("no vehicle named {0:?} in the catalog")]
    RecordNotFound(String),
}

/// Reference data rejected while building a catalog or region table.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("catalog has no vehicles")]
    Empty,
    #[error("duplicate vehicle name {0:?}")]
    DuplicateName(String),
    #[error("vehicle {name:?} has a zero {field}")]
    NonPositiveField { name: String, field: &'static str },
    #[error("region {region:?} has {found} multipliers, expected {expected}")]
    RegionLength {
        region: String,
        expected: usize,
        found: usize,
    },
    #[error("region {region:?} multiplier #{index} must be a positive number")]
    InvalidMultiplier { region: String, index: usize },
    #[error("region {0:?} has no keywords")]
    NoKeywords(String),
}
