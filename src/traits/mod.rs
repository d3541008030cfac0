//! Extension traits that turn `Result` and `Option` into [`Outcome`]s.
//!
//! - [`IntoOutcome`]: fails a `Result` with a chosen status
//! - [`OptionOutcomeExt`]: fails a missing `Option` with a status and payload
//!
//! # Examples
//!
//! ```
//! use validation_outcome::traits::{IntoOutcome, OptionOutcomeExt};
//! use validation_outcome::{Outcome, StatusCode};
//!
//! let port: Outcome<u16> = "80x".parse::<u16>().into_outcome_with(StatusCode::BadRequest, |e| e.to_string().into());
//! assert_eq!(port.status(), StatusCode::BadRequest);
//!
//! let user: Outcome<&str, &str> = Some("alice").ok_or_outcome(StatusCode::NotFound, "no such user");
//! assert!(user.is_valid());
//! ```

pub mod into_outcome;

pub use into_outcome::{IntoOutcome, OptionOutcomeExt};
