use crate::outcome::Outcome;
use crate::types::StatusCode;

/// Extension trait for lifting a `Result` into an [`Outcome`].
///
/// # Examples
///
/// ```
/// use validation_outcome::traits::IntoOutcome;
/// use validation_outcome::{ErrorMessage, Outcome, StatusCode};
///
/// fn lookup(name: &str) -> Result<u32, &'static str> {
///     if name == "admin" { Ok(1) } else { Err("unknown user") }
/// }
///
/// let found: Outcome<u32> = lookup("admin").into_outcome(StatusCode::NotFound);
/// assert_eq!(found.into_content(), Some(1));
///
/// let missing: Outcome<u32> = lookup("guest").into_outcome(StatusCode::NotFound);
/// assert_eq!(missing.error_message(), Some(&ErrorMessage::new("unknown user")));
/// ```
pub trait IntoOutcome<T, E> {
    /// Fails with `status`, converting the error into the payload.
    fn into_outcome<R>(self, status: StatusCode) -> Outcome<T, R>
    where
        E: Into<R>;

    /// Fails with `status`, building the payload with `f`.
    fn into_outcome_with<R, F>(self, status: StatusCode, f: F) -> Outcome<T, R>
    where
        F: FnOnce(E) -> R;
}

impl<T, E> IntoOutcome<T, E> for Result<T, E> {
    #[inline]
    fn into_outcome<R>(self, status: StatusCode) -> Outcome<T, R>
    where
        E: Into<R>,
    {
        self.into_outcome_with(status, Into::into)
    }

    #[inline]
    fn into_outcome_with<R, F>(self, status: StatusCode, f: F) -> Outcome<T, R>
    where
        F: FnOnce(E) -> R,
    {
        match self {
            Ok(value) => Outcome::success(value),
            Err(error) => Outcome::error(status, f(error)),
        }
    }
}

/// Extension trait for lifting an `Option` into an [`Outcome`].
pub trait OptionOutcomeExt<T> {
    /// Fails with `status` and `payload` when `None`.
    fn ok_or_outcome<R>(self, status: StatusCode, payload: R) -> Outcome<T, R>;

    /// Like [`ok_or_outcome`](Self::ok_or_outcome), building the payload only
    /// when it is needed.
    fn ok_or_outcome_with<R, F>(self, status: StatusCode, f: F) -> Outcome<T, R>
    where
        F: FnOnce() -> R;
}

impl<T> OptionOutcomeExt<T> for Option<T> {
    #[inline]
    fn ok_or_outcome<R>(self, status: StatusCode, payload: R) -> Outcome<T, R> {
        match self {
            Some(value) => Outcome::success(value),
            None => Outcome::error(status, payload),
        }
    }

    #[inline]
    fn ok_or_outcome_with<R, F>(self, status: StatusCode, f: F) -> Outcome<T, R>
    where
        F: FnOnce() -> R,
    {
        match self {
            Some(value) => Outcome::success(value),
            None => Outcome::error(status, f()),
        }
    }
}
