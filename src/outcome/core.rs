use crate::types::alloc_type::Text;
use crate::types::{ErrorMessage, Rejection, RenderConfig, Renderable, ResponseBody, StatusCode};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of one step in a chain of dependent validation stages.
///
/// `Outcome<C, R>` is either a success holding content of type `C` (status
/// [`StatusCode::Ok`]) or a failure holding a [`Rejection`]: a status code and
/// a renderable payload of type `R`. Exactly one of the two is ever present.
///
/// Chains step forward with [`map`](Self::map). Once a stage fails, every
/// later `map` passes the original status and payload through without calling
/// its mapper. [`valid`](Self::valid) and [`on_error`](Self::on_error) run side
/// effects on one branch only.
///
/// # Type Parameters
///
/// * `C` - The content produced by a successful stage
/// * `R` - The error payload, [`ErrorMessage`] unless chosen otherwise
///
/// # Examples
///
/// ```
/// use validation_outcome::{ErrorMessage, Outcome, StatusCode};
///
/// fn parse(raw: &str) -> Outcome<i64> {
///     match raw.parse() {
///         Ok(n) => Outcome::success(n),
///         Err(_) => Outcome::error(StatusCode::BadRequest, ErrorMessage::body_not_parseable()),
///     }
/// }
///
/// fn positive(n: i64) -> Outcome<u64> {
///     if n > 0 {
///         Outcome::success(n as u64)
///     } else {
///         Outcome::bad_request("value must be positive")
///     }
/// }
///
/// assert_eq!(parse("12").map(positive).into_content(), Some(12));
///
/// let failed = parse("-3").map(positive);
/// assert_eq!(failed.status(), StatusCode::BadRequest);
/// assert_eq!(failed.error_message().unwrap().reason(), "value must be positive");
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub enum Outcome<C, R = ErrorMessage> {
    Success(C),
    Failure(Rejection<R>),
}

impl<C, R> Outcome<C, R> {
    /// Creates a success with status [`StatusCode::Ok`].
    ///
    /// Any value is accepted, including an empty or default one.
    ///
    /// # Arguments
    ///
    /// * `content` - The value produced by the stage
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_outcome::{Outcome, StatusCode};
    ///
    /// let outcome = Outcome::<_, &str>::success(vec![1, 2]);
    /// assert!(outcome.is_valid());
    /// assert_eq!(outcome.status(), StatusCode::Ok);
    /// ```
    #[inline]
    pub const fn success(content: C) -> Self {
        Self::Success(content)
    }

    /// Creates a failure carrying `status` and `payload`.
    ///
    /// `status` is expected to be a non-success code. This is not checked.
    ///
    /// # Arguments
    ///
    /// * `status` - The classifier reported to the caller
    /// * `payload` - The renderable description of the failure
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_outcome::{Outcome, StatusCode};
    ///
    /// let outcome = Outcome::<(), _>::error(StatusCode::Conflict, "already exists");
    /// assert!(!outcome.is_valid());
    /// assert_eq!(outcome.error_message(), Some(&"already exists"));
    /// ```
    #[inline]
    pub const fn error(status: StatusCode, payload: R) -> Self {
        Self::Failure(Rejection::new(status, payload))
    }

    /// Wraps an existing [`Rejection`] as a failed outcome.
    ///
    /// # Arguments
    ///
    /// * `rejection` - The status and payload to carry
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_outcome::{Outcome, Rejection, StatusCode};
    ///
    /// let outcome = Outcome::<(), _>::from_rejection(Rejection::new(StatusCode::Conflict, "taken"));
    /// assert_eq!(outcome.status(), StatusCode::Conflict);
    /// ```
    #[inline]
    pub const fn from_rejection(rejection: Rejection<R>) -> Self {
        Self::Failure(rejection)
    }

    /// Status of this outcome: [`StatusCode::Ok`] for successes.
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_outcome::{Outcome, StatusCode};
    ///
    /// assert_eq!(Outcome::<_, &str>::success(1).status(), StatusCode::Ok);
    /// assert_eq!(Outcome::<(), _>::error(StatusCode::NotFound, "gone").status(), StatusCode::NotFound);
    /// ```
    #[must_use]
    #[inline]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Success(_) => StatusCode::Ok,
            Self::Failure(rejection) => rejection.status(),
        }
    }

    /// `true` when no error payload is present.
    #[must_use]
    #[inline]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// `true` when the outcome carries an error payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_outcome::{Outcome, StatusCode};
    ///
    /// assert!(Outcome::<(), _>::error(StatusCode::BadRequest, "bad").is_error());
    /// ```
    #[must_use]
    #[inline]
    pub const fn is_error(&self) -> bool {
        !self.is_valid()
    }

    /// The error payload, or `None` for a success.
    #[must_use]
    #[inline]
    pub const fn error_message(&self) -> Option<&R> {
        match self {
            Self::Success(_) => None,
            Self::Failure(rejection) => Some(rejection.payload()),
        }
    }

    /// The content of a success, or `None` for a failure.
    ///
    /// # Returns
    ///
    /// * `Some(&C)` - If the outcome is a success
    /// * `None` - If the outcome is a failure
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_outcome::Outcome;
    ///
    /// let outcome = Outcome::<_, &str>::success("alice");
    /// assert_eq!(outcome.content(), Some(&"alice"));
    /// ```
    #[must_use]
    #[inline]
    pub const fn content(&self) -> Option<&C> {
        match self {
            Self::Success(content) => Some(content),
            Self::Failure(_) => None,
        }
    }

    /// Borrows the failure branch as a whole: status and payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_outcome::{Outcome, StatusCode};
    ///
    /// let outcome = Outcome::<(), _>::error(StatusCode::Forbidden, "read only");
    /// let rejection = outcome.rejection().unwrap();
    /// assert_eq!(rejection.status(), StatusCode::Forbidden);
    /// assert_eq!(rejection.payload(), &"read only");
    /// ```
    #[must_use]
    #[inline]
    pub const fn rejection(&self) -> Option<&Rejection<R>> {
        match self {
            Self::Success(_) => None,
            Self::Failure(rejection) => Some(rejection),
        }
    }

    /// Consumes the outcome, returning the content of a success.
    ///
    /// # Returns
    ///
    /// * `Some(C)` - If the outcome is a success
    /// * `None` - If the outcome is a failure; status and payload are dropped
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_outcome::Outcome;
    ///
    /// assert_eq!(Outcome::<_, &str>::success(7).into_content(), Some(7));
    /// ```
    #[must_use]
    #[inline]
    pub fn into_content(self) -> Option<C> {
        match self {
            Self::Success(content) => Some(content),
            Self::Failure(_) => None,
        }
    }

    /// Consumes the outcome, returning the payload of a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_outcome::{Outcome, StatusCode};
    ///
    /// let outcome = Outcome::<(), _>::error(StatusCode::Conflict, "taken");
    /// assert_eq!(outcome.into_error_message(), Some("taken"));
    /// ```
    #[must_use]
    #[inline]
    pub fn into_error_message(self) -> Option<R> {
        match self {
            Self::Success(_) => None,
            Self::Failure(rejection) => Some(rejection.into_payload()),
        }
    }

    /// Splits into a `Result`, the failure branch becoming its [`Rejection`].
    #[inline]
    pub fn into_result(self) -> Result<C, Rejection<R>> {
        match self {
            Self::Success(content) => Ok(content),
            Self::Failure(rejection) => Err(rejection),
        }
    }

    /// Converts `&Outcome<C, R>` into `Outcome<&C, &R>`.
    ///
    /// Useful for running borrowed stages without giving up the original.
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_outcome::Outcome;
    ///
    /// let owned = Outcome::<_, &str>::success(String::from("ops"));
    /// let len = owned.as_ref().map(|name| Outcome::success(name.len()));
    /// assert_eq!(len.into_content(), Some(3));
    /// assert!(owned.is_valid());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&C, &R> {
        match self {
            Self::Success(content) => Outcome::Success(content),
            Self::Failure(rejection) => Outcome::Failure(rejection.as_ref()),
        }
    }

    /// Runs the next validation stage on the content.
    ///
    /// On a success, returns whatever `mapper` returns. On a failure,
    /// `mapper` is not called and the same status and payload are carried
    /// into an `Outcome<L, R>`.
    ///
    /// # Arguments
    ///
    /// * `mapper` - The next stage, called only on a success
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_outcome::{Outcome, StatusCode};
    ///
    /// let doubled = Outcome::<_, &str>::success(5)
    ///     .map(|n| Outcome::success(n * 2))
    ///     .map(|n| Outcome::success(n + 1));
    /// assert_eq!(doubled.into_content(), Some(11));
    ///
    /// let failed = Outcome::<i32, _>::error(StatusCode::BadRequest, "bad")
    ///     .map(|_| -> Outcome<i32, &str> { unreachable!() });
    /// assert_eq!(failed.status(), StatusCode::BadRequest);
    /// assert_eq!(failed.error_message(), Some(&"bad"));
    /// ```
    #[inline]
    pub fn map<L, F>(self, mapper: F) -> Outcome<L, R>
    where
        F: FnOnce(C) -> Outcome<L, R>,
    {
        match self {
            Self::Success(content) => mapper(content),
            Self::Failure(rejection) => Outcome::Failure(rejection),
        }
    }

    /// Like [`map`](Self::map), for stages that can themselves fail.
    ///
    /// A failure raised by `mapper` is returned as `Err` unchanged. On the
    /// failure branch `mapper` is not called and the pass-through outcome is
    /// returned in `Ok`.
    ///
    /// # Returns
    ///
    /// * `Ok(outcome)` - The stage's outcome, or the carried failure
    /// * `Err(E)` - The error raised by `mapper`
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_outcome::Outcome;
    ///
    /// fn decode(raw: &str) -> Result<Outcome<u8, &'static str>, core::num::ParseIntError> {
    ///     Ok(Outcome::success(raw.parse()?))
    /// }
    ///
    /// let ok = Outcome::success("7").try_map(decode);
    /// assert_eq!(ok.unwrap().into_content(), Some(7));
    ///
    /// let raised = Outcome::success("seven").try_map(decode);
    /// assert!(raised.is_err());
    /// ```
    #[inline]
    pub fn try_map<L, E, F>(self, mapper: F) -> Result<Outcome<L, R>, E>
    where
        F: FnOnce(C) -> Result<Outcome<L, R>, E>,
    {
        match self {
            Self::Success(content) => mapper(content),
            Self::Failure(rejection) => Ok(Outcome::Failure(rejection)),
        }
    }

    /// Alias of [`map`](Self::map) for `Result`-style call sites.
    #[inline]
    pub fn and_then<L, F>(self, mapper: F) -> Outcome<L, R>
    where
        F: FnOnce(C) -> Outcome<L, R>,
    {
        self.map(mapper)
    }

    /// Transforms the content of a success, leaving failures untouched.
    #[inline]
    pub fn map_content<L, F>(self, f: F) -> Outcome<L, R>
    where
        F: FnOnce(C) -> L,
    {
        match self {
            Self::Success(content) => Outcome::Success(f(content)),
            Self::Failure(rejection) => Outcome::Failure(rejection),
        }
    }

    /// Transforms the payload of a failure, keeping its status.
    #[inline]
    pub fn map_payload<S, F>(self, f: F) -> Outcome<C, S>
    where
        F: FnOnce(R) -> S,
    {
        match self {
            Self::Success(content) => Outcome::Success(content),
            Self::Failure(rejection) => Outcome::Failure(rejection.map_payload(f)),
        }
    }

    /// Calls `handler` with the content of a success and returns `self`
    /// unchanged. Failures skip the handler.
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_outcome::Outcome;
    ///
    /// let mut seen = Vec::new();
    /// let outcome = Outcome::<_, &str>::success("alice").valid(|name| seen.push(*name));
    ///
    /// assert_eq!(seen, ["alice"]);
    /// assert_eq!(outcome, Outcome::success("alice"));
    /// ```
    #[inline]
    pub fn valid<F>(self, handler: F) -> Self
    where
        F: FnOnce(&C),
    {
        if let Self::Success(content) = &self {
            handler(content);
        }
        self
    }

    /// Like [`valid`](Self::valid), for handlers that can fail.
    #[inline]
    pub fn try_valid<E, F>(self, handler: F) -> Result<Self, E>
    where
        F: FnOnce(&C) -> Result<(), E>,
    {
        if let Self::Success(content) = &self {
            handler(content)?;
        }
        Ok(self)
    }

    /// Calls `handler` with the status and payload of a failure. Successes
    /// skip the handler.
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_outcome::{Outcome, StatusCode};
    ///
    /// let mut emitted = None;
    /// Outcome::<(), _>::error(StatusCode::NotFound, "no such role")
    ///     .on_error(|status, payload| emitted = Some((status, *payload)));
    ///
    /// assert_eq!(emitted, Some((StatusCode::NotFound, "no such role")));
    /// ```
    #[inline]
    pub fn on_error<F>(&self, handler: F)
    where
        F: FnOnce(StatusCode, &R),
    {
        if let Self::Failure(rejection) = self {
            handler(rejection.status(), rejection.payload());
        }
    }

    /// Like [`on_error`](Self::on_error), for handlers that can fail.
    #[inline]
    pub fn try_on_error<E, F>(&self, handler: F) -> Result<(), E>
    where
        F: FnOnce(StatusCode, &R) -> Result<(), E>,
    {
        match self {
            Self::Success(_) => Ok(()),
            Self::Failure(rejection) => handler(rejection.status(), rejection.payload()),
        }
    }
}

impl<C, R: Renderable> Outcome<C, R> {
    /// Renders the failure branch, or `None` for a success.
    ///
    /// # Arguments
    ///
    /// * `config` - Controls whether and how the status is written
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_outcome::{Outcome, RenderConfig};
    ///
    /// let outcome: Outcome<()> = Outcome::not_found("Resource not found.");
    /// let body = outcome.render_error(&RenderConfig::default()).unwrap();
    /// assert_eq!(body.to_string(), "status=NOT_FOUND, reason=Resource not found.");
    /// ```
    #[must_use]
    pub fn render_error(&self, config: &RenderConfig) -> Option<ResponseBody> {
        self.rejection().map(|rejection| rejection.render_with(config))
    }
}

/// Shorthands pairing a common status with an [`ErrorMessage`] reason.
///
/// # Examples
///
/// ```
/// use validation_outcome::{Outcome, StatusCode};
///
/// let outcome: Outcome<()> = Outcome::conflict("Resource already exists.");
/// assert_eq!(outcome.status(), StatusCode::Conflict);
/// assert_eq!(outcome.error_message().unwrap().reason(), "Resource already exists.");
/// ```
impl<C> Outcome<C, ErrorMessage> {
    /// Failure with [`StatusCode::BadRequest`].
    #[inline]
    pub fn bad_request(reason: impl Into<Text>) -> Self {
        Self::error(StatusCode::BadRequest, ErrorMessage::new(reason))
    }

    /// Failure with [`StatusCode::Unauthorized`].
    #[inline]
    pub fn unauthorized(reason: impl Into<Text>) -> Self {
        Self::error(StatusCode::Unauthorized, ErrorMessage::new(reason))
    }

    /// Failure with [`StatusCode::Forbidden`].
    #[inline]
    pub fn forbidden(reason: impl Into<Text>) -> Self {
        Self::error(StatusCode::Forbidden, ErrorMessage::new(reason))
    }

    /// Failure with [`StatusCode::NotFound`].
    #[inline]
    pub fn not_found(reason: impl Into<Text>) -> Self {
        Self::error(StatusCode::NotFound, ErrorMessage::new(reason))
    }

    /// Failure with [`StatusCode::Conflict`].
    #[inline]
    pub fn conflict(reason: impl Into<Text>) -> Self {
        Self::error(StatusCode::Conflict, ErrorMessage::new(reason))
    }

    /// Failure with [`StatusCode::InternalServerError`].
    #[inline]
    pub fn internal_server_error(reason: impl Into<Text>) -> Self {
        Self::error(StatusCode::InternalServerError, ErrorMessage::new(reason))
    }
}
