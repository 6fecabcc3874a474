//! Strength report value types shared by the evaluator and its consumers.

use serde::Serialize;

/// The six password criteria, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    Length,
    Upper,
    Lower,
    Digit,
    Symbol,
    Common,
}

impl Criterion {
    /// All criteria, in evaluation order.
    pub const ALL: [Criterion; 6] = [
        Criterion::Length,
        Criterion::Upper,
        Criterion::Lower,
        Criterion::Digit,
        Criterion::Symbol,
        Criterion::Common,
    ];

    /// Lowercase wire name, matching the serialized `Criteria` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Criterion::Length => "length",
            Criterion::Upper => "upper",
            Criterion::Lower => "lower",
            Criterion::Digit => "digit",
            Criterion::Symbol => "symbol",
            Criterion::Common => "common",
        }
    }

    /// Improvement hint shown when this criterion is not satisfied.
    pub fn suggestion(&self) -> &'static str {
        match self {
            Criterion::Length => "Use at least 12 characters",
            Criterion::Upper => "Add an uppercase letter",
            Criterion::Lower => "Add a lowercase letter",
            Criterion::Digit => "Include a number",
            Criterion::Symbol => "Include a symbol",
            Criterion::Common => "Avoid common passwords",
        }
    }
}

/// Per-criterion results. Field order is evaluation order, which is also the
/// serialization order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Criteria {
    pub length: bool,
    pub upper: bool,
    pub lower: bool,
    pub digit: bool,
    pub symbol: bool,
    pub common: bool,
}

impl Criteria {
    /// Looks up a single criterion result.
    pub fn get(&self, criterion: Criterion) -> bool {
        match criterion {
            Criterion::Length => self.length,
            Criterion::Upper => self.upper,
            Criterion::Lower => self.lower,
            Criterion::Digit => self.digit,
            Criterion::Symbol => self.symbol,
            Criterion::Common => self.common,
        }
    }

    /// Iterates `(criterion, satisfied)` pairs in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = (Criterion, bool)> + '_ {
        Criterion::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    /// Number of satisfied criteria, 0 through 6.
    pub fn satisfied(&self) -> u8 {
        self.iter().filter(|(_, ok)| *ok).count() as u8
    }
}

/// Coarse three-level strength classification driving the visual meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTier {
    Low,
    Mid,
    High,
}

impl ColorTier {
    /// Tier for a percent score. The 83 cutoff puts exactly 5-of-6 criteria
    /// (83.33%, rounded to 83) in the top tier.
    pub fn from_percent(percent: u8) -> Self {
        if percent >= 83 {
            ColorTier::High
        } else if percent >= 50 {
            ColorTier::Mid
        } else {
            ColorTier::Low
        }
    }
}

/// Result of evaluating one candidate password. Freshly constructed per
/// evaluation, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrengthReport {
    pub criteria: Criteria,
    pub passed: u8,
    pub percent: u8,
    pub tier: ColorTier,
}

impl StrengthReport {
    /// Builds a report from criteria results. `passed` is the satisfied-count;
    /// `percent` is `round(passed / 6 * 100)` (half rounds away from zero,
    /// which agrees with half-even for every reachable value).
    pub(crate) fn from_criteria(criteria: Criteria) -> Self {
        let passed = criteria.satisfied();
        let percent = (f64::from(passed) / 6.0 * 100.0).round() as u8;
        StrengthReport {
            criteria,
            passed,
            percent,
            tier: ColorTier::from_percent(percent),
        }
    }

    /// Report for the empty candidate: the denylist criterion is vacuously
    /// satisfied, but the meter shows no progress at all.
    pub(crate) fn empty(criteria: Criteria) -> Self {
        StrengthReport {
            criteria,
            passed: 0,
            percent: 0,
            tier: ColorTier::Low,
        }
    }

    /// `true` when all six criteria are satisfied. Whether that gates
    /// submission is the form layer's call, not the evaluator's.
    pub fn meets_all(&self) -> bool {
        self.passed == 6
    }

    /// Improvement hints for the unsatisfied criteria, in evaluation order.
    pub fn suggestions(&self) -> Vec<&'static str> {
        self.criteria
            .iter()
            .filter(|(_, ok)| !ok)
            .map(|(c, _)| c.suggestion())
            .collect()
    }
}
