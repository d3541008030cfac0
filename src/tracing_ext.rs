//! Tracing integration for validation outcomes.
//!
//! Emits one structured event for each failed outcome that passes through
//! [`OutcomeTracingExt::trace_error`]. Successes are never logged.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! validation-outcome = { version = "0.1", features = ["tracing"] }
//! ```
//!
//! Client errors (4xx) are recorded at `WARN`, server errors (5xx) at
//! `ERROR`, anything else at `DEBUG`.

use tracing::Span;

use crate::outcome::Outcome;
use crate::types::{Rejection, Renderable};

/// Extension trait that records the failure branch of an [`Outcome`].
///
/// # Example
///
/// ```rust
/// use validation_outcome::tracing_ext::OutcomeTracingExt;
/// use validation_outcome::{Outcome, StatusCode};
///
/// let outcome = Outcome::<(), _>::error(StatusCode::BadRequest, "missing body")
///     .trace_error();
///
/// assert_eq!(outcome.status(), StatusCode::BadRequest);
/// ```
pub trait OutcomeTracingExt: Sized {
    /// Records a failure in the current span and returns `self` unchanged.
    fn trace_error(self) -> Self;

    /// Records a failure inside `span` and returns `self` unchanged.
    fn trace_error_in(self, span: &Span) -> Self {
        span.in_scope(|| self.trace_error())
    }
}

impl<C, R: Renderable> OutcomeTracingExt for Outcome<C, R> {
    fn trace_error(self) -> Self {
        if let Some(rejection) = self.rejection() {
            record_rejection(rejection);
        }
        self
    }
}

/// Emits the event for a single rejection.
pub fn record_rejection<R: Renderable>(rejection: &Rejection<R>) {
    let status = rejection.status();
    let code = status.as_u16();
    let name = status.name();
    let body = rejection.payload().to_body();

    if status.is_server_error() {
        tracing::error!(status = code, status_name = name, error = %body, "validation stage failed");
    } else if status.is_client_error() {
        tracing::warn!(status = code, status_name = name, error = %body, "validation rejected input");
    } else {
        tracing::debug!(status = code, status_name = name, error = %body, "validation outcome carried an error");
    }
}
