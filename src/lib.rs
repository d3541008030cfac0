//! An outcome type for chains of dependent validation stages.
//!
//! Each stage produces an [`Outcome`]: either success content, or a status
//! code paired with a renderable error payload. Stages are chained with
//! [`Outcome::map`], which stops calling later stages once one fails and
//! carries that failure's status and payload to the end of the chain.
//! Side effects are attached to a single branch with [`Outcome::valid`] and
//! [`Outcome::on_error`].
//!
//! # Examples
//!
//! ## Chaining stages
//!
//! ```
//! use validation_outcome::{ErrorMessage, Outcome, StatusCode};
//!
//! fn has_body(body: &str) -> Outcome<&str> {
//!     if body.is_empty() {
//!         Outcome::error(StatusCode::BadRequest, ErrorMessage::payload_mandatory())
//!     } else {
//!         Outcome::success(body)
//!     }
//! }
//!
//! fn known_keys(body: &str) -> Outcome<&str> {
//!     if body.contains("colour") {
//!         Outcome::error(StatusCode::BadRequest, ErrorMessage::invalid_keys(["colour"]))
//!     } else {
//!         Outcome::success(body)
//!     }
//! }
//!
//! let accepted = Outcome::success("size=3").map(has_body).map(known_keys);
//! assert!(accepted.is_valid());
//!
//! let rejected = Outcome::success("").map(has_body).map(known_keys);
//! assert_eq!(rejected.status(), StatusCode::BadRequest);
//! assert_eq!(rejected.error_message(), Some(&ErrorMessage::payload_mandatory()));
//! ```
//!
//! ## Rendering the failure
//!
//! ```
//! use validation_outcome::{ErrorMessage, Outcome, RenderConfig, StatusCode};
//!
//! let outcome: Outcome<()> = Outcome::error(
//!     StatusCode::BadRequest,
//!     ErrorMessage::missing_mandatory_keys(["hosts"]),
//! );
//!
//! let body = outcome.render_error(&RenderConfig::default()).unwrap();
//! assert_eq!(
//!     body.to_string(),
//!     "status=BAD_REQUEST, reason=Invalid configuration, missing_mandatory_keys={keys=hosts}"
//! );
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between Result, Option, and Outcome
pub mod convert;
/// Early-return macros for validation stages
pub mod macros;
/// The Outcome type and its combinators
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension traits lifting Result and Option into Outcome
pub mod traits;
/// Status codes, rejections, and renderable payloads
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
#[cfg_attr(docsrs, doc(cfg(feature = "tracing")))]
pub mod tracing_ext;

pub use convert::*;
pub use outcome::Outcome;
pub use traits::*;
pub use types::{
    BodyValue, DetailValue, ErrorMessage, Rejection, RenderConfig, Renderable, ResponseBody,
    StatusCode, StatusStyle, UnknownStatusCode,
};
