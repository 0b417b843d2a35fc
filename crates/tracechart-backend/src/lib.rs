//! Rendering backend abstraction for tracechart.
//!
//! This crate defines the `RenderBackend` trait that every renderer must
//! implement, and provides a JSON backend that emits the chart specification.

pub mod backend;
pub mod json;

pub use backend::RenderBackend;
pub use json::JsonBackend;
