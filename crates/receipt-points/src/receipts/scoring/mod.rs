mod rules;

use serde::{Deserialize, Serialize};

use super::domain::Receipt;

/// Reward points for a receipt. Pure; malformed fields only zero out their own rule.
pub fn score(receipt: &Receipt) -> u64 {
    breakdown(receipt).total
}

/// Scores a receipt and keeps the per-rule contributions for auditing.
pub fn breakdown(receipt: &Receipt) -> PointsBreakdown {
    let components = rules::score_receipt(receipt);
    let total = components
        .iter()
        .fold(0u64, |sum, component| sum.saturating_add(component.points));

    PointsBreakdown { components, total }
}

/// Independent rules whose contributions add up to a receipt's points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringRule {
    RetailerName,
    RoundDollarTotal,
    QuarterMultipleTotal,
    ItemDescriptions,
    ItemPairs,
    OddPurchaseDay,
    AfternoonPurchase,
}

impl ScoringRule {
    pub fn label(self) -> &'static str {
        match self {
            ScoringRule::RetailerName => "Retailer name",
            ScoringRule::RoundDollarTotal => "Round dollar total",
            ScoringRule::QuarterMultipleTotal => "Total multiple of 0.25",
            ScoringRule::ItemDescriptions => "Item descriptions",
            ScoringRule::ItemPairs => "Item pairs",
            ScoringRule::OddPurchaseDay => "Odd purchase day",
            ScoringRule::AfternoonPurchase => "Afternoon purchase",
        }
    }
}

/// Discrete contribution of one rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub rule: ScoringRule,
    pub points: u64,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsBreakdown {
    pub components: Vec<ScoreComponent>,
    pub total: u64,
}

impl PointsBreakdown {
    pub fn points_for(&self, rule: ScoringRule) -> u64 {
        self.components
            .iter()
            .filter(|component| component.rule == rule)
            .map(|component| component.points)
            .sum()
    }
}
