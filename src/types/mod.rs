//! Building blocks carried by an [`Outcome`](crate::Outcome).
//!
//! - [`StatusCode`] classifies the outcome.
//! - [`Rejection`] pairs a status with an error payload.
//! - [`Renderable`] and [`ResponseBody`] describe how a payload is written out.
//! - [`ErrorMessage`] is the payload used when none is chosen explicitly.
//!
//! # Examples
//!
//! ```
//! use validation_outcome::types::{ErrorMessage, Rejection, Renderable, StatusCode};
//!
//! let rejection = Rejection::new(StatusCode::BadRequest, ErrorMessage::payload_mandatory());
//! assert_eq!(
//!     rejection.to_body().to_string(),
//!     "status=BAD_REQUEST, reason=Request body required for this action."
//! );
//! ```
pub mod alloc_type;
pub mod error_message;
pub mod rejection;
pub mod render;
pub mod status;

pub use error_message::*;
pub use rejection::*;
pub use render::*;
pub use status::*;
