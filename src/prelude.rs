//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use validation_outcome::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`ensure!`], [`reject!`]
//! - **Types**: [`Outcome`], [`StatusCode`], [`ErrorMessage`], [`Rejection`], [`ResponseBody`]
//! - **Traits**: [`Renderable`], [`IntoOutcome`], [`OptionOutcomeExt`]
//!
//! # Examples
//!
//! ```
//! use validation_outcome::prelude::*;
//!
//! fn require_body(body: Option<&str>) -> Outcome<&str> {
//!     body.ok_or_outcome(StatusCode::BadRequest, ErrorMessage::payload_mandatory())
//! }
//!
//! let outcome = require_body(None);
//! assert_eq!(outcome.status(), StatusCode::BadRequest);
//! ```

// Macros
pub use crate::{ensure, reject};

// Core types
pub use crate::outcome::Outcome;
pub use crate::types::{ErrorMessage, Rejection, RenderConfig, ResponseBody, StatusCode};

// Traits
pub use crate::traits::{IntoOutcome, OptionOutcomeExt};
pub use crate::types::Renderable;

#[cfg(feature = "tracing")]
pub use crate::tracing_ext::OutcomeTracingExt;
