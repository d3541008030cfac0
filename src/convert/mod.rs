//! Conversion helpers between `Result`, `Option`, and [`Outcome`].
//!
//! These adapters let validation stages reuse code that already reports
//! failures through `Result` or `Option`, and hand a finished chain back to
//! code that expects a `Result`.
//!
//! # Examples
//!
//! ```
//! use validation_outcome::convert::*;
//! use validation_outcome::{Outcome, StatusCode};
//!
//! let parsed: Result<u32, &str> = "42".parse::<u32>().map_err(|_| "not a number");
//! let outcome: Outcome<u32, &str> = result_to_outcome(parsed, StatusCode::BadRequest);
//! assert!(outcome.is_valid());
//!
//! let back = outcome_to_result(outcome);
//! assert_eq!(back, Ok(42));
//! ```

use crate::outcome::Outcome;
use crate::types::{Rejection, StatusCode};

/// Converts an [`Outcome`] into a `Result`, the failure becoming a [`Rejection`].
///
/// # Examples
///
/// ```
/// use validation_outcome::convert::outcome_to_result;
/// use validation_outcome::{Outcome, Rejection, StatusCode};
///
/// let failed = Outcome::<(), _>::error(StatusCode::Forbidden, "denied");
/// assert_eq!(outcome_to_result(failed), Err(Rejection::new(StatusCode::Forbidden, "denied")));
/// ```
#[inline]
pub fn outcome_to_result<C, R>(outcome: Outcome<C, R>) -> Result<C, Rejection<R>> {
    outcome.into_result()
}

/// Converts a `Result` into an [`Outcome`], failing with `status` on `Err`.
///
/// # Examples
///
/// ```
/// use validation_outcome::convert::result_to_outcome;
/// use validation_outcome::{ErrorMessage, Outcome, StatusCode};
///
/// let failed: Outcome<i32> = result_to_outcome(Err::<i32, _>("unknown tenant"), StatusCode::NotFound);
/// assert_eq!(failed.status(), StatusCode::NotFound);
/// assert_eq!(failed.error_message(), Some(&ErrorMessage::new("unknown tenant")));
/// ```
#[inline]
pub fn result_to_outcome<C, E, R>(result: Result<C, E>, status: StatusCode) -> Outcome<C, R>
where
    E: Into<R>,
{
    match result {
        Ok(content) => Outcome::success(content),
        Err(error) => Outcome::error(status, error.into()),
    }
}

/// Converts an `Option` into an [`Outcome`], failing with `status` and
/// `payload` on `None`.
///
/// # Examples
///
/// ```
/// use validation_outcome::convert::option_to_outcome;
/// use validation_outcome::{Outcome, StatusCode};
///
/// let found: Outcome<&str, &str> = option_to_outcome(Some("admin"), StatusCode::NotFound, "no such role");
/// assert_eq!(found.into_content(), Some("admin"));
///
/// let missing: Outcome<&str, &str> = option_to_outcome(None, StatusCode::NotFound, "no such role");
/// assert_eq!(missing.error_message(), Some(&"no such role"));
/// ```
#[inline]
pub fn option_to_outcome<C, R>(option: Option<C>, status: StatusCode, payload: R) -> Outcome<C, R> {
    match option {
        Some(content) => Outcome::success(content),
        None => Outcome::error(status, payload),
    }
}

impl<C, R> From<Result<C, Rejection<R>>> for Outcome<C, R> {
    #[inline]
    fn from(result: Result<C, Rejection<R>>) -> Self {
        match result {
            Ok(content) => Outcome::success(content),
            Err(rejection) => Outcome::from_rejection(rejection),
        }
    }
}

impl<C, R> From<Outcome<C, R>> for Result<C, Rejection<R>> {
    #[inline]
    fn from(outcome: Outcome<C, R>) -> Self {
        outcome.into_result()
    }
}

impl<C, R> From<Rejection<R>> for Outcome<C, R> {
    #[inline]
    fn from(rejection: Rejection<R>) -> Self {
        Outcome::from_rejection(rejection)
    }
}
