//! Layout pipeline for tracechart.
//!
//! Turns task execution records and resource samples into declarative chart
//! models:
//! - [`summarize`] renders task expressions into short labels
//! - [`assign_colors`] maps labels to palette swatches
//! - [`TimelineLayoutBuilder`] lays tasks out per worker slot
//! - [`ResourceLayoutBuilder`] lays out CPU and memory over time
//! - [`compose`] / [`Compositor`] stack charts and hand them to a backend
//!
//! Every step is a pure function of its inputs; only [`Compositor::render`]
//! has side effects, and those go through the backend.

pub mod colors;
pub mod compose;
pub mod options;
pub mod resource;
pub mod summarize;
pub mod timeline;
pub mod visualize;

pub use colors::assign_colors;
pub use compose::{compose, Compositor, OutputIntent};
pub use options::{ChartDefaults, ChartOptions};
pub use resource::ResourceLayoutBuilder;
pub use summarize::{summarize, summarize_task, KeySet, TaskSummary};
pub use timeline::TimelineLayoutBuilder;
pub use visualize::{visualize, ChartSource};
