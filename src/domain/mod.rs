//! Valuation logic for used vehicles lives here.

pub mod catalog;
pub mod entities;
pub mod error;
pub mod profit;
pub mod region;
pub mod valuation;

pub use catalog::{market_overview, Catalog, MarketOverview, RegionalSales};
pub use entities::{
    MarginClass, ProfitResult, TitleStatus, ValuationResult, VehicleRecord, VehicleType,
};
pub use error::{CatalogError, ValuationError};
pub use profit::{classify_margin, compute_profit, ProfitInput};
pub use region::{RegionProfile, RegionResolver, RegionRule, NATIONAL_REGION};
pub use valuation::{valuate, valuate_at, ValuationInput, CURRENT_YEAR};
