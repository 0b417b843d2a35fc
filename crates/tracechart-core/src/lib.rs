//! Core types for the tracechart toolchain.
//!
//! This crate defines the data structures shared by every other tracechart
//! crate: profiling samples, task expressions, the declarative chart model,
//! the palette catalog and the error type. It contains no layout logic.

pub mod chart;
pub mod error;
pub mod expr;
pub mod palette;
pub mod trace;

pub use error::{Error, Result};
pub use expr::{Callable, Expr};
pub use palette::{Color, Palette, PaletteCatalog};
pub use trace::{key_text, ExecutionRecord, Profile, ResourceSample, SlotId, TaskKey};
