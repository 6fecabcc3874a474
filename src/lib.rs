//! Signup form core library
//!
//! This library provides the reusable core of a signup flow: a pure
//! password strength evaluator with denylist support, field validation,
//! draft persistence, strong-password generation and a simulated
//! email-availability check.
//!
//! # Features
//!
//! - `async` (default): Enables the simulated availability check and form
//!   submission with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `SIGNUP_DENYLIST_PATH`: Custom path to an extra denylist file
//!   (default: `./assets/denylist.txt`)
//! - `SIGNUP_DRAFT_PATH`: Custom path to the draft file
//!   (default: `./signup-draft.json`)
//!
//! # Example
//!
//! ```rust
//! use signup_kit::evaluate_password_strength;
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Str0ng!Passw0rd".to_string().into());
//! let report = evaluate_password_strength(&password);
//!
//! println!("Passed: {}/6", report.passed);
//! println!("Percent: {}", report.percent);
//! println!("Tier: {:?}", report.tier);
//! ```

// Internal modules
#[cfg(feature = "async")]
mod availability;
mod criteria;
mod denylist;
mod draft;
mod evaluator;
mod form;
mod generator;
mod report;
mod route;

// Public API
pub use denylist::{
    BUILTIN_DENYLIST, DenylistError, init_denylist, init_denylist_from_path, is_common_password,
};
pub use draft::{DraftError, DraftStore, SignupDraft};
pub use evaluator::evaluate_password_strength;
pub use form::{Field, FieldError, SignupForm};
pub use generator::generate_strong_password;
pub use report::{ColorTier, Criteria, Criterion, StrengthReport};
pub use route::Route;

#[cfg(feature = "async")]
pub use availability::{
    AVAILABILITY_CHECK_DELAY, check_email_availability, check_email_availability_tx,
};
#[cfg(feature = "async")]
pub use form::SUBMIT_DELAY;
