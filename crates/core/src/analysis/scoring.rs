use crate::domain::metrics::DerivedMetrics;
use crate::domain::recommendation::{Recommendation, RecommendationLabel};

/// Score contribution of a single rule and the reason it fired, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleOutcome {
    pub delta: i32,
    pub reason: Option<String>,
}

impl RuleOutcome {
    fn scored(delta: i32, reason: impl Into<String>) -> Self {
        Self {
            delta,
            reason: Some(reason.into()),
        }
    }

    fn neutral() -> Self {
        Self {
            delta: 0,
            reason: None,
        }
    }
}

pub type Rule = fn(&DerivedMetrics) -> RuleOutcome;

/// Evaluation order is the order of `reasons` in the output.
pub const RULES: [Rule; 5] = [
    sharpe_rule,
    return_rule,
    volatility_rule,
    pe_rule,
    dividend_rule,
];

pub fn recommend(metrics: &DerivedMetrics) -> Recommendation {
    let mut score = 0;
    let mut reasons = Vec::with_capacity(RULES.len());

    for rule in RULES {
        let outcome = rule(metrics);
        score += outcome.delta;
        reasons.extend(outcome.reason);
    }

    let label = RecommendationLabel::from_score(score);
    Recommendation {
        recommendation: label,
        description: label.description().to_string(),
        score,
        reasons,
    }
}

pub fn sharpe_rule(m: &DerivedMetrics) -> RuleOutcome {
    if m.sharpe_ratio > 0.5 {
        RuleOutcome::scored(3, "Good risk-adjusted returns (Sharpe Ratio > 0.5)")
    } else if m.sharpe_ratio > 0.0 {
        RuleOutcome::scored(1, "Moderate risk-adjusted returns")
    } else {
        RuleOutcome::scored(-2, "Poor risk-adjusted returns")
    }
}

pub fn return_rule(m: &DerivedMetrics) -> RuleOutcome {
    if m.annual_return > 25.0 {
        RuleOutcome::scored(3, "Strong annual returns (> 25%)")
    } else if m.annual_return > 15.0 {
        RuleOutcome::scored(2, "Good annual returns (15-25%)")
    } else if m.annual_return > 10.0 {
        RuleOutcome::scored(1, "Moderate annual returns (10-15%)")
    } else {
        RuleOutcome::scored(-1, "Low annual returns (< 10%)")
    }
}

pub fn volatility_rule(m: &DerivedMetrics) -> RuleOutcome {
    if m.volatility < 20.0 {
        RuleOutcome::scored(2, "Low volatility (< 20%) - Stable investment")
    } else if m.volatility < 30.0 {
        RuleOutcome::scored(1, "Moderate volatility (20-30%)")
    } else {
        RuleOutcome::scored(-1, "High volatility (> 30%) - Higher risk")
    }
}

/// 20..=50 is neutral and adds no reason.
pub fn pe_rule(m: &DerivedMetrics) -> RuleOutcome {
    if m.pe_ratio < 20.0 {
        RuleOutcome::scored(1, "Favorable P/E ratio (< 20) - Potentially undervalued")
    } else if m.pe_ratio > 50.0 {
        RuleOutcome::scored(-1, "High P/E ratio (> 50) - Potentially overvalued")
    } else {
        RuleOutcome::neutral()
    }
}

pub fn dividend_rule(m: &DerivedMetrics) -> RuleOutcome {
    if m.dividend_yield > 2.0 {
        RuleOutcome::scored(
            1,
            format!("Good dividend yield ({}%)", format_number(m.dividend_yield)),
        )
    } else {
        RuleOutcome::neutral()
    }
}

/// Whole numbers keep one decimal place ("3.0"), everything else uses the shortest form.
fn format_number(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.1}")
    } else {
        v.to_string()
    }
}
