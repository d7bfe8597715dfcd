//! The six strict quality rules.
//!
//! Each rule pairs an absolute threshold with a comparison against the
//! entity's sector mean. Every comparison requires both operands to be finite,
//! so a degenerate ratio can never satisfy a rule, not even through the
//! sector disjunct of the margin rules.

use crate::RatioSet;
use serde::{Deserialize, Serialize};

/// Minimum gross margin (percent) that passes without the sector comparison.
pub const MIN_GROSS_MARGIN_PCT: f64 = 35.0;
/// Minimum EBITDA margin (percent) that passes without the sector comparison.
pub const MIN_EBITDA_MARGIN_PCT: f64 = 15.0;
/// Minimum return on equity (percent).
pub const MIN_ROE_PCT: f64 = 15.0;
/// Maximum price/earnings ratio.
pub const MAX_PE_RATIO: f64 = 20.0;
/// Maximum enterprise value/EBITDA ratio.
pub const MAX_EV_EBITDA_RATIO: f64 = 10.0;
/// Maximum debt/equity (percent).
pub const MAX_DEBT_TO_EQUITY_PCT: f64 = 50.0;

/// One of the six screening rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rule {
    /// Gross margin at least 35% or at least the sector mean.
    GrossMargin,
    /// EBITDA margin at least 15% or at least the sector mean.
    EbitdaMargin,
    /// Positive ROE of at least 15% and at least the sector mean.
    ReturnOnEquity,
    /// Positive P/E of at most 20 and at most the sector mean.
    PriceEarnings,
    /// Positive EV/EBITDA of at most 10 and at most the sector mean.
    EvEbitda,
    /// Positive debt/equity of at most 50% and at most the sector mean.
    DebtToEquity,
}

impl Rule {
    /// All rules, in `rule1..rule6` order.
    pub const ALL: [Self; 6] = [
        Self::GrossMargin,
        Self::EbitdaMargin,
        Self::ReturnOnEquity,
        Self::PriceEarnings,
        Self::EvEbitda,
        Self::DebtToEquity,
    ];

    /// Short identifier (`rule1` .. `rule6`).
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::GrossMargin => "rule1",
            Self::EbitdaMargin => "rule2",
            Self::ReturnOnEquity => "rule3",
            Self::PriceEarnings => "rule4",
            Self::EvEbitda => "rule5",
            Self::DebtToEquity => "rule6",
        }
    }

    /// Human-readable statement of the rule.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::GrossMargin => "Gross margin >= 35% or >= sector mean",
            Self::EbitdaMargin => "EBITDA margin >= 15% or >= sector mean",
            Self::ReturnOnEquity => "ROE > 0, >= 15% and >= sector mean",
            Self::PriceEarnings => "P/E > 0, <= 20 and <= sector mean",
            Self::EvEbitda => "EV/EBITDA > 0, <= 10 and <= sector mean",
            Self::DebtToEquity => "Debt/equity > 0, <= 50% and <= sector mean",
        }
    }

    /// The ratio this rule is stated in.
    #[must_use]
    pub const fn ratio_of(&self, ratios: &RatioSet) -> f64 {
        match self {
            Self::GrossMargin => ratios.gross_margin_pct,
            Self::EbitdaMargin => ratios.ebitda_margin_pct,
            Self::ReturnOnEquity => ratios.roe_pct,
            Self::PriceEarnings => ratios.pe_ratio,
            Self::EvEbitda => ratios.ev_ebitda_ratio,
            Self::DebtToEquity => ratios.debt_to_equity_pct,
        }
    }

    /// Decide the rule for an entity's own value and its sector mean.
    #[must_use]
    pub fn passes(&self, own: f64, sector_mean: f64) -> bool {
        match self {
            Self::GrossMargin => {
                at_least(own, MIN_GROSS_MARGIN_PCT) || at_least(own, sector_mean)
            }
            Self::EbitdaMargin => {
                at_least(own, MIN_EBITDA_MARGIN_PCT) || at_least(own, sector_mean)
            }
            Self::ReturnOnEquity => {
                above(own, 0.0) && at_least(own, MIN_ROE_PCT) && at_least(own, sector_mean)
            }
            Self::PriceEarnings => {
                above(own, 0.0) && at_most(own, MAX_PE_RATIO) && at_most(own, sector_mean)
            }
            Self::EvEbitda => {
                above(own, 0.0)
                    && at_most(own, MAX_EV_EBITDA_RATIO)
                    && at_most(own, sector_mean)
            }
            Self::DebtToEquity => {
                above(own, 0.0)
                    && at_most(own, MAX_DEBT_TO_EQUITY_PCT)
                    && at_most(own, sector_mean)
            }
        }
    }
}

/// Pass/fail outcome of the six rules for one entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RuleOutcome {
    /// Gross margin rule.
    pub rule1: bool,
    /// EBITDA margin rule.
    pub rule2: bool,
    /// Return on equity rule.
    pub rule3: bool,
    /// P/E rule.
    pub rule4: bool,
    /// EV/EBITDA rule.
    pub rule5: bool,
    /// Debt/equity rule.
    pub rule6: bool,
}

impl RuleOutcome {
    /// Evaluate every rule against an entity's ratios and its sector means.
    #[must_use]
    pub fn evaluate(ratios: &RatioSet, sector_mean: &RatioSet) -> Self {
        let [rule1, rule2, rule3, rule4, rule5, rule6] =
            Rule::ALL.map(|rule| rule.passes(rule.ratio_of(ratios), rule.ratio_of(sector_mean)));

        Self {
            rule1,
            rule2,
            rule3,
            rule4,
            rule5,
            rule6,
        }
    }

    /// Outcome of a single rule.
    #[must_use]
    pub const fn get(&self, rule: Rule) -> bool {
        match rule {
            Rule::GrossMargin => self.rule1,
            Rule::EbitdaMargin => self.rule2,
            Rule::ReturnOnEquity => self.rule3,
            Rule::PriceEarnings => self.rule4,
            Rule::EvEbitda => self.rule5,
            Rule::DebtToEquity => self.rule6,
        }
    }

    /// Outcomes in `rule1..rule6` order.
    #[must_use]
    pub const fn as_array(&self) -> [bool; 6] {
        [
            self.rule1, self.rule2, self.rule3, self.rule4, self.rule5, self.rule6,
        ]
    }

    /// Number of rules passed.
    #[must_use]
    pub fn passed_count(&self) -> u8 {
        self.as_array().iter().map(|&passed| u8::from(passed)).sum()
    }
}

fn at_least(value: f64, bound: f64) -> bool {
    value.is_finite() && bound.is_finite() && value >= bound
}

fn at_most(value: f64, bound: f64) -> bool {
    value.is_finite() && bound.is_finite() && value <= bound
}

fn above(value: f64, bound: f64) -> bool {
    value.is_finite() && value > bound
}
