//! The [`Outcome`] type and its combinators.
//!
//! An outcome threads the result of one validation stage into the next.
//! Stages are chained with [`Outcome::map`]; the first failing stage decides
//! the status and payload that reach the end of the chain.
//!
//! # Examples
//!
//! ```
//! use validation_outcome::outcome::Outcome;
//! use validation_outcome::{ErrorMessage, StatusCode};
//!
//! let mut accepted = Vec::new();
//! let mut rendered = None;
//!
//! let outcome: Outcome<&str> = Outcome::success("{\"hosts\": 1}")
//!     .map(|body| {
//!         if body.is_empty() {
//!             Outcome::error(StatusCode::BadRequest, ErrorMessage::payload_mandatory())
//!         } else {
//!             Outcome::success(body)
//!         }
//!     })
//!     .map(|_| Outcome::error(StatusCode::BadRequest, ErrorMessage::wrong_datatypes([("hosts", "Array expected")])))
//!     .valid(|body| accepted.push(*body));
//!
//! outcome.on_error(|status, message| rendered = Some((status, message.to_string())));
//!
//! assert!(accepted.is_empty());
//! assert_eq!(
//!     rendered,
//!     Some((StatusCode::BadRequest, "Invalid configuration (wrong_datatypes: hosts (Array expected))".to_string()))
//! );
//! ```
pub mod core;
pub mod iter;

pub use self::core::*;
pub use self::iter::*;
