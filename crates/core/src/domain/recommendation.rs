use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecommendationLabel {
    #[serde(rename = "STRONG BUY")]
    StrongBuy,
    #[serde(rename = "BUY")]
    Buy,
    #[serde(rename = "HOLD")]
    Hold,
    #[serde(rename = "WEAK HOLD")]
    WeakHold,
    #[serde(rename = "SELL/AVOID")]
    SellAvoid,
}

impl RecommendationLabel {
    /// Highest threshold wins.
    pub fn from_score(score: i32) -> Self {
        match score {
            s if s >= 6 => Self::StrongBuy,
            s if s >= 4 => Self::Buy,
            s if s >= 2 => Self::Hold,
            s if s >= 0 => Self::WeakHold,
            _ => Self::SellAvoid,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::StrongBuy => "STRONG BUY",
            Self::Buy => "BUY",
            Self::Hold => "HOLD",
            Self::WeakHold => "WEAK HOLD",
            Self::SellAvoid => "SELL/AVOID",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::StrongBuy => "Excellent risk-return profile with strong fundamentals.",
            Self::Buy => "Good investment opportunity with favorable metrics.",
            Self::Hold => "Moderate investment with mixed signals. Requires careful monitoring.",
            Self::WeakHold => "Weak fundamentals. Consider alternatives.",
            Self::SellAvoid => "Poor risk-return profile. Avoid this investment.",
        }
    }
}

impl fmt::Display for RecommendationLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub recommendation: RecommendationLabel,
    pub description: String,
    pub score: i32,
    /// One entry per rule that fired, in rule evaluation order.
    pub reasons: Vec<String>,
}
