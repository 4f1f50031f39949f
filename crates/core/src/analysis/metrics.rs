use crate::domain::company::CompanyRecord;
use crate::domain::metrics::DerivedMetrics;

/// Baseline annual return used for the Sharpe ratio, as a fraction.
pub const RISK_FREE_RATE: f64 = 0.045;

pub fn compute(record: &CompanyRecord) -> DerivedMetrics {
    let annual_return = record.annual_return / 100.0;
    let volatility = record.volatility / 100.0;

    // Zero denominators yield 0 rather than an error.
    let sharpe_ratio = if volatility == 0.0 {
        0.0
    } else {
        (annual_return - RISK_FREE_RATE) / volatility
    };

    // Not meaningful for non-positive returns.
    let coefficient_of_variation = if annual_return > 0.0 {
        volatility / annual_return
    } else {
        0.0
    };

    DerivedMetrics {
        annual_return: record.annual_return,
        volatility: record.volatility,
        sharpe_ratio: round4(sharpe_ratio),
        coefficient_of_variation: round4(coefficient_of_variation),
        beta: record.beta,
        pe_ratio: record.pe_ratio,
        dividend_yield: record.dividend_yield,
        current_price: record.current_price,
    }
}

/// Half-way cases round away from zero on the scaled binary value, so exact ties may differ
/// from a decimal round-half-even.
fn round4(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}
