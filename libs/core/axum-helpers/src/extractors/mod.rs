//! Custom extractors for Axum handlers.
//!
//! Extractors here turn rejections into [`AppError`](crate::errors::AppError)
//! so that every failure reaches the client in the standard error shape.

pub mod json_body;

pub use json_body::JsonBody;
