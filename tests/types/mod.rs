pub mod error_message;
pub mod render;
