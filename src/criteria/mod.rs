//! Password criteria checks
//!
//! One module per criterion group; each check looks at the whole candidate
//! independently of the others.

mod denylist;
mod length;
mod variety;

pub use denylist::common_criterion;
pub use length::length_criterion;
pub use variety::{digit_criterion, lower_criterion, symbol_criterion, upper_criterion};
