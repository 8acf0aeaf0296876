use super::{
    entities::{MarginClass, ProfitResult},
    error::ValuationError,
};

pub const MIN_BUY_PRICE: u32 = 1_000;
/// Sell price must clear the buy price by at least this much.
pub const MIN_SELL_INCREMENT: u32 = 500;
pub const MIN_MONTHLY_GOAL: u32 = 1;
pub const MAX_MONTHLY_GOAL: u32 = 30;
pub const DEFAULT_MONTHLY_GOAL: u32 = 5;

const SUGGESTED_BUY_RATIO: f64 = 0.85;
const EXCELLENT_ABOVE: i64 = 6_000;
const SOLID_ABOVE: i64 = 2_000;

/// Buy/sell plan checked against the calculator bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProfitInput {
    pub buy_price: u32,
    pub sell_price: u32,
    pub monthly_goal: u32,
}

impl ProfitInput {
    pub fn new(buy_price: u32, sell_price: u32, monthly_goal: u32) -> Result<Self, ValuationError> {
        if buy_price < MIN_BUY_PRICE {
            return Err(ValuationError::InvalidInput {
                field: "buy_price",
                value: i64::from(buy_price),
                min: i64::from(MIN_BUY_PRICE),
                max: i64::from(u32::MAX),
            });
        }
        let min_sell = min_sell_price(buy_price);
        if sell_price < min_sell {
            return Err(ValuationError::InvalidInput {
                field: "sell_price",
                value: i64::from(sell_price),
                min: i64::from(min_sell),
                max: i64::from(u32::MAX),
            });
        }
        if !(MIN_MONTHLY_GOAL..=MAX_MONTHLY_GOAL).contains(&monthly_goal) {
            return Err(ValuationError::InvalidInput {
                field: "monthly_goal",
                value: i64::from(monthly_goal),
                min: i64::from(MIN_MONTHLY_GOAL),
                max: i64::from(MAX_MONTHLY_GOAL),
            });
        }

        Ok(Self {
            buy_price,
            sell_price,
            monthly_goal,
        })
    }

    /// Defaults offered for a freshly valued vehicle.
    pub fn suggested(estimated_value: u32) -> Self {
        let buy_price = suggested_buy_price(estimated_value);
        Self {
            buy_price,
            sell_price: suggested_sell_price(estimated_value, buy_price),
            monthly_goal: DEFAULT_MONTHLY_GOAL,
        }
    }

    pub fn compute(&self) -> ProfitResult {
        compute_profit(self.buy_price, self.sell_price, self.monthly_goal)
    }
}

/// Per-unit, monthly and yearly profit. Performs no validation.
pub fn compute_profit(buy_price: u32, sell_price: u32, monthly_goal: u32) -> ProfitResult {
    let gross_profit = i64::from(sell_price) - i64::from(buy_price);
    let monthly_profit = gross_profit * i64::from(monthly_goal);

    ProfitResult {
        gross_profit,
        monthly_profit,
        yearly_profit: monthly_profit * 12,
        margin: classify_margin(gross_profit),
    }
}

pub fn classify_margin(gross_profit: i64) -> MarginClass {
    if gross_profit > EXCELLENT_ABOVE {
        MarginClass::Excellent
    } else if gross_profit > SOLID_ABOVE {
        MarginClass::Solid
    } else {
        MarginClass::Tight
    }
}

/// 85% of the estimated value, truncated, never under [`MIN_BUY_PRICE`].
pub fn suggested_buy_price(estimated_value: u32) -> u32 {
    let suggested = (f64::from(estimated_value) * SUGGESTED_BUY_RATIO).trunc() as u32;
    suggested.max(MIN_BUY_PRICE)
}

pub fn min_sell_price(buy_price: u32) -> u32 {
    buy_price.saturating_add(MIN_SELL_INCREMENT)
}

pub fn suggested_sell_price(estimated_value: u32, buy_price: u32) -> u32 {
    estimated_value.max(min_sell_price(buy_price))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_projection() {
        let result = compute_profit(11628, 13680, 5);
        assert_eq!(result.gross_profit, 2052);
        assert_eq!(result.monthly_profit, 10260);
        assert_eq!(result.yearly_profit, 123120);
        assert_eq!(result.margin, MarginClass::Solid);
    }

    #[test]
    fn test_margin_boundaries() {
        assert_eq!(classify_margin(6001), MarginClass::Excellent);
        assert_eq!(classify_margin(6000), MarginClass::Solid);
        assert_eq!(classify_margin(2001), MarginClass::Solid);
        assert_eq!(classify_margin(2000), MarginClass::Tight);
        assert_eq!(classify_margin(-500), MarginClass::Tight);
    }

    #[test]
    fn test_compute_profit_does_not_validate() {
        let result = compute_profit(5000, 4000, 2);
        assert_eq!(result.gross_profit, -1000);
        assert_eq!(result.yearly_profit, -24000);
    }

    #[test]
    fn test_suggested_prices() {
        assert_eq!(suggested_buy_price(13680), 11628);
        assert_eq!(suggested_buy_price(500), MIN_BUY_PRICE);

        let suggested = ProfitInput::suggested(13680);
        assert_eq!(suggested.buy_price, 11628);
        assert_eq!(suggested.sell_price, 13680);
        assert_eq!(suggested.monthly_goal, 5);
        assert_eq!(suggested.compute().gross_profit, 2052);

        // Sell never drops under buy + increment.
        assert_eq!(ProfitInput::suggested(1000).sell_price, 1500);
    }

    #[test]
    fn test_input_checks() {
        assert!(ProfitInput::new(10000, 10500, 1).is_ok());
        assert!(matches!(
            ProfitInput::new(10000, 10499, 1),
            Err(ValuationError::InvalidInput { field: "sell_price", min: 10500, .. })
        ));
        assert!(matches!(
            ProfitInput::new(999, 5000, 1),
            Err(ValuationError::InvalidInput { field: "buy_price", .. })
        ));
        assert!(matches!(
            ProfitInput::new(10000, 12000, 31),
            Err(ValuationError::InvalidInput { field: "monthly_goal", .. })
        ));
    }
}
