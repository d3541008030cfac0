//! HTTP-style status codes carried by every [`Outcome`](crate::Outcome).
//!
//! The set mirrors the statuses a REST validation layer actually answers
//! with. Codes outside the set are rejected by [`StatusCode::try_from`].
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

macro_rules! status_codes {
    ($( ($variant:ident, $code:literal, $name:literal, $reason:literal); )+) => {
        /// Enumerated outcome classifier, numbered like HTTP statuses.
        ///
        /// Serializes as its upper snake case name (`"BAD_REQUEST"`).
        ///
        /// # Examples
        ///
        /// ```
        /// use validation_outcome::StatusCode;
        ///
        /// assert_eq!(StatusCode::BadRequest.as_u16(), 400);
        /// assert_eq!(StatusCode::BadRequest.name(), "BAD_REQUEST");
        /// assert_eq!(StatusCode::try_from(404u16), Ok(StatusCode::NotFound));
        /// ```
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
        pub enum StatusCode {
            $( $variant, )+
        }

        impl StatusCode {
            /// Numeric value of the status.
            #[must_use]
            #[inline]
            pub const fn as_u16(self) -> u16 {
                match self {
                    $( Self::$variant => $code, )+
                }
            }

            /// Looks a status up by its numeric value.
            #[must_use]
            pub const fn from_u16(code: u16) -> Option<Self> {
                match code {
                    $( $code => Some(Self::$variant), )+
                    _ => None,
                }
            }

            /// Upper snake case name, e.g. `NOT_FOUND`.
            #[must_use]
            #[inline]
            pub const fn name(self) -> &'static str {
                match self {
                    $( Self::$variant => $name, )+
                }
            }

            /// Canonical reason phrase, e.g. `Not Found`.
            #[must_use]
            #[inline]
            pub const fn reason(self) -> &'static str {
                match self {
                    $( Self::$variant => $reason, )+
                }
            }
        }
    };
}

status_codes! {
    (Ok, 200, "OK", "OK");
    (Created, 201, "CREATED", "Created");
    (Accepted, 202, "ACCEPTED", "Accepted");
    (NoContent, 204, "NO_CONTENT", "No Content");
    (BadRequest, 400, "BAD_REQUEST", "Bad Request");
    (Unauthorized, 401, "UNAUTHORIZED", "Unauthorized");
    (Forbidden, 403, "FORBIDDEN", "Forbidden");
    (NotFound, 404, "NOT_FOUND", "Not Found");
    (MethodNotAllowed, 405, "METHOD_NOT_ALLOWED", "Method Not Allowed");
    (Conflict, 409, "CONFLICT", "Conflict");
    (UnprocessableEntity, 422, "UNPROCESSABLE_ENTITY", "Unprocessable Entity");
    (TooManyRequests, 429, "TOO_MANY_REQUESTS", "Too Many Requests");
    (InternalServerError, 500, "INTERNAL_SERVER_ERROR", "Internal Server Error");
    (NotImplemented, 501, "NOT_IMPLEMENTED", "Not Implemented");
    (ServiceUnavailable, 503, "SERVICE_UNAVAILABLE", "Service Unavailable");
}

impl StatusCode {
    /// `true` for 2xx codes.
    #[must_use]
    #[inline]
    pub const fn is_success(self) -> bool {
        matches!(self.as_u16(), 200..=299)
    }

    /// `true` for 4xx codes.
    #[must_use]
    #[inline]
    pub const fn is_client_error(self) -> bool {
        matches!(self.as_u16(), 400..=499)
    }

    /// `true` for 5xx codes.
    #[must_use]
    #[inline]
    pub const fn is_server_error(self) -> bool {
        matches!(self.as_u16(), 500..=599)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason())
    }
}

impl From<StatusCode> for u16 {
    #[inline]
    fn from(status: StatusCode) -> Self {
        status.as_u16()
    }
}

impl TryFrom<u16> for StatusCode {
    type Error = UnknownStatusCode;

    #[inline]
    fn try_from(code: u16) -> Result<Self, Self::Error> {
        Self::from_u16(code).ok_or(UnknownStatusCode(code))
    }
}

/// Returned when a numeric code has no [`StatusCode`] counterpart.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct UnknownStatusCode(pub u16);

impl fmt::Display for UnknownStatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown status code: {}", self.0)
    }
}

impl core::error::Error for UnknownStatusCode {}
