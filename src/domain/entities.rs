use std::fmt;

use serde::{Deserialize, Serialize};

/// Body style used to group the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleType {
    Truck,
    #[serde(rename = "SUV")]
    Suv,
    Sedan,
}

impl VehicleType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Truck => "Truck",
            Self::Suv => "SUV",
            Self::Sedan => "Sedan",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the reference catalog.
///
/// `base_price` and `base_days_to_sell` assume a clean title and average
/// mileage for the vehicle's age.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRecord {
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,
    pub make: String,
    pub model: String,
    pub full_name: String,
    /// Baseline annual unit sales, nationwide.
    pub national_sales: u32,
    pub base_price: u32,
    pub base_days_to_sell: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TitleStatus {
    #[default]
    Clean,
    SalvageRebuilt,
}

impl TitleStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Clean => "Clean Title",
            Self::SalvageRebuilt => "Salvage/Rebuilt Title",
        }
    }

    pub fn is_salvage(&self) -> bool {
        matches!(self, Self::SalvageRebuilt)
    }
}

/// Output of the valuation engine. Recomputed on every input change.
#[derive(Clone, Debug, PartialEq)]
pub struct ValuationResult {
    pub estimated_value: u32,
    /// Never below [`MIN_DAYS_TO_SELL`](crate::domain::valuation::MIN_DAYS_TO_SELL).
    pub estimated_days_to_sell: u32,
    pub age: u32,
    pub expected_miles: i64,
    /// Odometer minus expected miles; negative means under-mileage.
    pub mile_diff: i64,
    pub mile_factor: f64,
    /// Age depreciation, with the title penalty already folded in.
    pub dep_factor: f64,
    /// Signed day adjustment applied to the base days-to-sell.
    pub days_adjustment: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProfitResult {
    pub gross_profit: i64,
    pub monthly_profit: i64,
    pub yearly_profit: i64,
    pub margin: MarginClass,
}

/// Display guidance derived from gross profit per unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarginClass {
    Excellent,
    Solid,
    Tight,
}

impl MarginClass {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Solid => "solid",
            Self::Tight => "tight",
        }
    }

    pub fn guidance(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent profit potential!",
            Self::Solid => "Solid margin.",
            Self::Tight => "Tight margin, consider costs carefully.",
        }
    }
}
