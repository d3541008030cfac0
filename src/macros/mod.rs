//! Early-return shorthands for validation stages.
//!
//! - [`macro@crate::ensure`] - Returns a failed [`Outcome`](crate::Outcome)
//!   from the enclosing function when a condition does not hold.
//! - [`macro@crate::reject`] - Returns a failed outcome unconditionally.
//!
//! Both convert the payload with `Into`, so a `&'static str` can stand in for
//! an [`ErrorMessage`](crate::ErrorMessage).
//!
//! # Examples
//!
//! ```
//! use validation_outcome::{ensure, reject, Outcome, StatusCode};
//!
//! fn check_name(name: &str) -> Outcome<&str> {
//!     ensure!(!name.is_empty(), StatusCode::BadRequest, "name must not be empty");
//!     if name.starts_with('.') {
//!         reject!(StatusCode::Forbidden, "hidden names are reserved");
//!     }
//!     Outcome::success(name)
//! }
//!
//! assert!(check_name("alice").is_valid());
//! assert_eq!(check_name("").status(), StatusCode::BadRequest);
//! assert_eq!(check_name(".kibana").status(), StatusCode::Forbidden);
//! ```

/// Returns `Outcome::error(status, payload.into())` from the enclosing
/// function unless `cond` is true.
///
/// # Examples
///
/// ```
/// use validation_outcome::{ensure, Outcome, StatusCode};
///
/// fn at_most_ten(n: u32) -> Outcome<u32, &'static str> {
///     ensure!(n <= 10, StatusCode::BadRequest, "too large");
///     Outcome::success(n)
/// }
///
/// assert!(at_most_ten(3).is_valid());
/// assert_eq!(at_most_ten(11).error_message(), Some(&"too large"));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $status:expr, $payload:expr $(,)?) => {
        if !$cond {
            return $crate::Outcome::error($status, ::core::convert::Into::into($payload));
        }
    };
}

/// Returns `Outcome::error(status, payload.into())` from the enclosing function.
///
/// # Examples
///
/// ```
/// use validation_outcome::{reject, ErrorMessage, Outcome, StatusCode};
///
/// fn never() -> Outcome<()> {
///     reject!(StatusCode::NotImplemented, ErrorMessage::new("not supported"));
/// }
///
/// assert_eq!(never().status(), StatusCode::NotImplemented);
/// ```
#[macro_export]
macro_rules! reject {
    ($status:expr, $payload:expr $(,)?) => {
        return $crate::Outcome::error($status, ::core::convert::Into::into($payload))
    };
}
