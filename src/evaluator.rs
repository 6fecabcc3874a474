//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

use crate::criteria::{
    common_criterion, digit_criterion, length_criterion, lower_criterion, symbol_criterion,
    upper_criterion,
};
use crate::report::{Criteria, StrengthReport};

/// Evaluates password strength and returns a per-criterion report.
///
/// Total over every string input, including the empty string; synchronous
/// and re-entrant, with no state beyond the read-only denylist. Cheap enough
/// to run on every keystroke.
///
/// # Arguments
/// * `password` - The candidate password to evaluate
///
/// # Returns
/// A `StrengthReport` with the six criterion results, the satisfied count,
/// the percent score and the color tier.
pub fn evaluate_password_strength(password: &SecretString) -> StrengthReport {
    let criteria = Criteria {
        length: length_criterion(password),
        upper: upper_criterion(password),
        lower: lower_criterion(password),
        digit: digit_criterion(password),
        symbol: symbol_criterion(password),
        common: common_criterion(password),
    };

    // An empty candidate reports zero progress even though the denylist
    // criterion is vacuously satisfied.
    if password.expose_secret().is_empty() {
        return StrengthReport::empty(criteria);
    }

    StrengthReport::from_criteria(criteria)
}
