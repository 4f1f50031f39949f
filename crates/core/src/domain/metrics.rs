use serde::{Deserialize, Serialize};

/// Per-company metrics. Raw fields are passed through in their original units; the two ratios
/// are rounded to 4 decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    pub annual_return: f64,
    pub volatility: f64,
    pub sharpe_ratio: f64,
    pub coefficient_of_variation: f64,
    pub beta: f64,
    pub pe_ratio: f64,
    pub dividend_yield: f64,
    pub current_price: f64,
}
