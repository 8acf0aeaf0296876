//! Text reports built on top of the domain layer.
//!
//! Each report is recomputed from scratch on every call; nothing is cached.

use std::fmt::Write as _;

use tracing::{debug, warn};

use crate::{
    domain::{
        market_overview,
        profit::suggested_sell_price,
        valuate_at, MarketOverview, ProfitInput, ProfitResult, RegionProfile,
        ValuationError, ValuationInput, ValuationResult, VehicleRecord, VehicleType,
    },
    infra::ReferenceData,
    util::{format_dollars, format_thousands},
};

/// Rows shown in the sales volume chart.
pub const CHART_ROWS: usize = 10;

/// Process-wide state: read-only reference data and the valuation year.
pub struct App {
    data: ReferenceData,
    current_year: i32,
}

/// Optional buy/sell overrides for a valuation; gaps take suggested defaults.
#[derive(Clone, Copy, Debug, Default)]
pub struct DealPlan {
    pub buy_price: Option<u32>,
    pub sell_price: Option<u32>,
    pub monthly_goal: Option<u32>,
}

impl App {
    pub fn new(data: ReferenceData, current_year: i32) -> Self {
        Self { data, current_year }
    }

    pub fn data(&self) -> &ReferenceData {
        &self.data
    }

    pub fn region(&self, location: &str) -> &RegionProfile {
        let profile = self.data.regions.resolve(location);
        debug!(location, region = %profile.name, "resolved region");
        profile
    }

    pub fn overview(&self, location: &str, filter: Option<VehicleType>) -> MarketOverview<'_> {
        market_overview(&self.data.catalog, self.region(location), filter)
    }

    pub fn market_report(&self, location: &str, filter: Option<VehicleType>, top: usize) -> String {
        let overview = self.overview(location, filter);
        let mut out = String::new();

        let _ = writeln!(out, "Market Overview - {}", overview.region_name);
        if let Some(kind) = filter {
            let _ = writeln!(out, "Vehicle type: {kind}");
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "{:<28} {:>14} {:>12}", "Model", "Est. Sales", "Base Price");
        for row in overview.top(top) {
            let _ = writeln!(
                out,
                "{:<28} {:>14} {:>12}",
                row.record.full_name,
                format_thousands(row.estimated_sales as i64),
                format_dollars(i64::from(row.record.base_price)),
            );
        }
        out
    }

    /// Looks a model up within the filtered list, the way the model picker offers it.
    pub fn select_record(
        &self,
        full_name: &str,
        filter: Option<VehicleType>,
    ) -> Result<&VehicleRecord, ValuationError> {
        let record = self.data.catalog.get_record(full_name)?;
        if filter.map_or(false, |kind| kind != record.vehicle_type) {
            warn!(full_name, "model is excluded by the vehicle type filter");
            return Err(ValuationError::RecordNotFound(full_name.to_string()));
        }
        Ok(record)
    }

    pub fn valuate(&self, record: &VehicleRecord, input: &ValuationInput) -> ValuationResult {
        valuate_at(record, input, self.current_year)
    }

    pub fn valuation_report(
        &self,
        record: &VehicleRecord,
        input: &ValuationInput,
        plan: DealPlan,
    ) -> Result<String, ValuationError> {
        let result = self.valuate(record, input);
        let suggested = ProfitInput::suggested(result.estimated_value);
        let buy_price = plan.buy_price.unwrap_or(suggested.buy_price);
        let sell_price = plan
            .sell_price
            .unwrap_or_else(|| suggested_sell_price(result.estimated_value, buy_price));
        let profit = ProfitInput::new(
            buy_price,
            sell_price,
            plan.monthly_goal.unwrap_or(suggested.monthly_goal),
        )?;

        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} {} ({}, {} miles)",
            input.model_year,
            record.full_name,
            input.title_status.label(),
            format_thousands(i64::from(input.odometer_miles)),
        );
        let _ = writeln!(
            out,
            "Estimated Fair Market Value: {}",
            format_dollars(i64::from(result.estimated_value))
        );
        let _ = writeln!(out, "Est. Days to Sell: {} days", result.estimated_days_to_sell);
        let _ = writeln!(
            out,
            "  age {}y, expected {} mi, depreciation x{:.4}, mileage x{:.4}, days {:+}",
            result.age,
            format_thousands(result.expected_miles),
            result.dep_factor,
            result.mile_factor,
            result.days_adjustment,
        );
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Buy {} / Sell {}",
            format_dollars(i64::from(profit.buy_price)),
            format_dollars(i64::from(profit.sell_price))
        );
        out.push_str(&profit_summary(&profit.compute(), profit.monthly_goal));
        Ok(out)
    }

    pub fn regions_report(&self) -> String {
        let mut out = String::new();
        for rule in self.data.regions.rules() {
            let _ = writeln!(out, "{:<24} {}", rule.name, rule.keywords.join(", "));
        }
        let _ = writeln!(out, "{:<24} (anything else)", self.data.regions.national().name);
        out
    }
}

pub fn profit_summary(result: &ProfitResult, monthly_goal: u32) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Profit Summary");
    let _ = writeln!(
        out,
        "- Gross Profit per Car: {}",
        format_dollars(result.gross_profit)
    );
    let _ = writeln!(
        out,
        "- Monthly Profit ({monthly_goal} cars): {}",
        format_dollars(result.monthly_profit)
    );
    let _ = writeln!(out, "- Yearly Profit: {}", format_dollars(result.yearly_profit));
    let _ = writeln!(
        out,
        "Margin: {}. {}",
        result.margin.label(),
        result.margin.guidance()
    );
    out
}
