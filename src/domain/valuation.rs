//! Age/mileage depreciation model for used vehicle values.

use super::{
    entities::{TitleStatus, ValuationResult, VehicleRecord},
    error::ValuationError,
};

pub const CURRENT_YEAR: i32 = 2025;
pub const MIN_MODEL_YEAR: i32 = 2010;
pub const MAX_MODEL_YEAR: i32 = 2025;
pub const MAX_ODOMETER_MILES: u32 = 300_000;

pub const DEFAULT_MODEL_YEAR: i32 = 2023;
pub const DEFAULT_ODOMETER_MILES: u32 = 50_000;

pub const AVG_ANNUAL_MILES: i64 = 13_500;
pub const MIN_DAYS_TO_SELL: i64 = 10;

const OVER_MILE_PENALTY: f64 = 0.0003;
const UNDER_MILE_BONUS: f64 = 0.0004;
const MIN_MILE_FACTOR: f64 = 0.5;
const OVER_MILES_PER_DAY: i64 = 5_000;
const UNDER_MILES_PER_DAY: i64 = 10_000;

const FIRST_YEAR_FACTOR: f64 = 0.80;
const YEARLY_FACTOR: f64 = 0.90;

const SALVAGE_FACTOR: f64 = 0.60;
const SALVAGE_EXTRA_DAYS: i64 = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValuationInput {
    pub model_year: i32,
    pub odometer_miles: u32,
    pub title_status: TitleStatus,
}

impl Default for ValuationInput {
    fn default() -> Self {
        Self {
            model_year: DEFAULT_MODEL_YEAR,
            odometer_miles: DEFAULT_ODOMETER_MILES,
            title_status: TitleStatus::Clean,
        }
    }
}

impl ValuationInput {
    /// Rejects model years and odometer readings outside the accepted bounds.
    pub fn new(
        model_year: i32,
        odometer_miles: i64,
        title_status: TitleStatus,
    ) -> Result<Self, ValuationError> {
        if !(MIN_MODEL_YEAR..=MAX_MODEL_YEAR).contains(&model_year) {
            return Err(ValuationError::InvalidInput {
                field: "model_year",
                value: i64::from(model_year),
                min: i64::from(MIN_MODEL_YEAR),
                max: i64::from(MAX_MODEL_YEAR),
            });
        }
        if !(0..=i64::from(MAX_ODOMETER_MILES)).contains(&odometer_miles) {
            return Err(ValuationError::InvalidInput {
                field: "odometer_miles",
                value: odometer_miles,
                min: 0,
                max: i64::from(MAX_ODOMETER_MILES),
            });
        }

        Ok(Self {
            model_year,
            odometer_miles: odometer_miles as u32,
            title_status,
        })
    }

    /// Same as [`ValuationInput::new`] but pulls out-of-range values onto the bounds.
    pub fn clamped(model_year: i32, odometer_miles: i64, title_status: TitleStatus) -> Self {
        Self {
            model_year: model_year.clamp(MIN_MODEL_YEAR, MAX_MODEL_YEAR),
            odometer_miles: odometer_miles.clamp(0, i64::from(MAX_ODOMETER_MILES)) as u32,
            title_status,
        }
    }
}

/// Values `record` as of [`CURRENT_YEAR`].
pub fn valuate(record: &VehicleRecord, input: &ValuationInput) -> ValuationResult {
    valuate_at(record, input, CURRENT_YEAR)
}

pub fn valuate_at(
    record: &VehicleRecord,
    input: &ValuationInput,
    current_year: i32,
) -> ValuationResult {
    // Future model years count as brand new.
    let age = current_year.saturating_sub(input.model_year).max(0) as u32;
    let expected_miles = i64::from(age) * AVG_ANNUAL_MILES;
    let mile_diff = i64::from(input.odometer_miles) - expected_miles;

    let (mile_factor, mut days_adjustment) = mileage_adjustment(mile_diff);
    let mut dep_factor = depreciation_factor(age);

    if input.title_status.is_salvage() {
        dep_factor *= SALVAGE_FACTOR;
        days_adjustment += SALVAGE_EXTRA_DAYS;
    }

    let estimated_value = (f64::from(record.base_price) * dep_factor * mile_factor).trunc();
    let estimated_value = estimated_value.clamp(0.0, f64::from(u32::MAX)) as u32;

    let days = (i64::from(record.base_days_to_sell) + days_adjustment).max(MIN_DAYS_TO_SELL);

    ValuationResult {
        estimated_value,
        estimated_days_to_sell: days as u32,
        age,
        expected_miles,
        mile_diff,
        mile_factor,
        dep_factor,
        days_adjustment,
    }
}

/// Multiplicative value adjustment and day offset for a mileage deviation.
///
/// Over-mileage is floored at half value; under-mileage has no ceiling.
/// Day offsets truncate toward zero in both directions.
pub fn mileage_adjustment(mile_diff: i64) -> (f64, i64) {
    if mile_diff > 0 {
        let factor = (1.0 - mile_diff as f64 * OVER_MILE_PENALTY).max(MIN_MILE_FACTOR);
        (factor, mile_diff / OVER_MILES_PER_DAY)
    } else if mile_diff < 0 {
        let factor = 1.0 - mile_diff as f64 * UNDER_MILE_BONUS;
        (factor, mile_diff / UNDER_MILES_PER_DAY)
    } else {
        (1.0, 0)
    }
}

/// 20% off in the first year, then a further 10% per year, compounding.
pub fn depreciation_factor(age: u32) -> f64 {
    match age {
        0 => 1.0,
        1 => FIRST_YEAR_FACTOR,
        _ => FIRST_YEAR_FACTOR * YEARLY_FACTOR.powf(f64::from(age - 1)),
    }
}
