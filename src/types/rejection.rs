use core::fmt;

use crate::types::render::{RenderConfig, Renderable, ResponseBody};
use crate::types::StatusCode;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The failure branch of an [`Outcome`](crate::Outcome): a status and the
/// payload describing what went wrong.
///
/// `Rejection` is also a standalone error value, so a failed outcome can be
/// turned into a `Result` and propagated with `?`.
///
/// # Examples
///
/// ```
/// use validation_outcome::{Rejection, StatusCode};
///
/// let rejection = Rejection::new(StatusCode::Forbidden, "read only index");
/// assert_eq!(rejection.status(), StatusCode::Forbidden);
/// assert_eq!(rejection.to_string(), "403 Forbidden: read only index");
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Rejection<R> {
    status: StatusCode,
    payload: R,
}

impl<R> Rejection<R> {
    /// Creates a rejection.
    ///
    /// # Arguments
    ///
    /// * `status` - The classifier reported to the caller
    /// * `payload` - The renderable description of the failure
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_outcome::{Rejection, StatusCode};
    ///
    /// let rejection = Rejection::new(StatusCode::NotFound, "gone");
    /// assert_eq!(rejection.payload(), &"gone");
    /// ```
    #[inline]
    pub const fn new(status: StatusCode, payload: R) -> Self {
        Self { status, payload }
    }

    /// The status this rejection reports.
    #[must_use]
    #[inline]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Borrows the payload.
    #[must_use]
    #[inline]
    pub const fn payload(&self) -> &R {
        &self.payload
    }

    /// Consumes the rejection, dropping the status.
    #[must_use]
    #[inline]
    pub fn into_payload(self) -> R {
        self.payload
    }

    /// Consumes the rejection, returning status and payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_outcome::{Rejection, StatusCode};
    ///
    /// let (status, payload) = Rejection::new(StatusCode::Conflict, "taken").into_parts();
    /// assert_eq!(status, StatusCode::Conflict);
    /// assert_eq!(payload, "taken");
    /// ```
    #[must_use]
    #[inline]
    pub fn into_parts(self) -> (StatusCode, R) {
        (self.status, self.payload)
    }

    /// Transforms the payload, keeping the status.
    ///
    /// # Arguments
    ///
    /// * `f` - Function applied to the payload
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_outcome::{ErrorMessage, Rejection, StatusCode};
    ///
    /// let rejection = Rejection::new(StatusCode::BadRequest, "bad port")
    ///     .map_payload(|reason| ErrorMessage::new(reason));
    /// assert_eq!(rejection.status(), StatusCode::BadRequest);
    /// assert_eq!(rejection.payload().reason(), "bad port");
    /// ```
    #[inline]
    pub fn map_payload<S, F>(self, f: F) -> Rejection<S>
    where
        F: FnOnce(R) -> S,
    {
        Rejection { status: self.status, payload: f(self.payload) }
    }

    /// Converts `&Rejection<R>` into `Rejection<&R>`.
    #[inline]
    pub const fn as_ref(&self) -> Rejection<&R> {
        Rejection { status: self.status, payload: &self.payload }
    }
}

impl<R: Renderable> Rejection<R> {
    /// Status first, then the payload's own fields.
    ///
    /// The status key is reserved: a payload field with the same name never
    /// replaces the status.
    ///
    /// # Arguments
    ///
    /// * `config` - Controls whether and how the status is written
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_outcome::{ErrorMessage, RenderConfig, Rejection, StatusCode};
    ///
    /// let rejection = Rejection::new(StatusCode::BadRequest, ErrorMessage::invalid_keys(["colour"]));
    /// assert_eq!(
    ///     rejection.render_with(&RenderConfig::numeric()).to_string(),
    ///     "status=400, reason=Invalid configuration, invalid_keys={keys=colour}"
    /// );
    /// ```
    #[must_use]
    pub fn render_with(&self, config: &RenderConfig) -> ResponseBody {
        let mut body = ResponseBody::new();
        self.render_into(config, &mut body);
        body
    }

    fn render_into(&self, config: &RenderConfig, body: &mut ResponseBody) {
        config.write_status(self.status, body);
        self.payload.render(body);
        // written again so the payload cannot shadow it; position is kept
        config.write_status(self.status, body);
    }
}

impl<R: Renderable> Renderable for Rejection<R> {
    fn render(&self, body: &mut ResponseBody) {
        self.render_into(&RenderConfig::default(), body);
    }
}

impl<R: fmt::Display> fmt::Display for Rejection<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status, self.payload)
    }
}

impl<R> core::error::Error for Rejection<R> where R: fmt::Debug + fmt::Display {}
