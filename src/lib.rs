//! Used vehicle valuation: reference catalog, regional sales ranking,
//! age/mileage depreciation and dealer profit projections.

pub mod app;
pub mod domain;
pub mod infra;
pub mod util;
