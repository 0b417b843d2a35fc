//! Tracechart: charts for parallel execution traces.
//!
//! This is the main entry point for user applications. It re-exports the
//! data model, the layout pipeline, the analysis tools and the render
//! backends from the other tracechart crates.

pub use tracechart_analysis as analysis;
pub use tracechart_backend as backend;
pub use tracechart_core as core;
pub use tracechart_layout as layout;

pub use tracechart_layout::visualize;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::{
        chart::{ChartModel, CompositeLayout, Tool},
        Callable, Color, Error, ExecutionRecord, Expr, Palette, PaletteCatalog, Profile,
        ResourceSample, Result, SlotId, TaskKey,
    };

    pub use crate::analysis::{Analyzer, Report, SlotAggregator, TraceMetrics};
    pub use crate::backend::{JsonBackend, RenderBackend};
    pub use crate::layout::{
        assign_colors, compose, summarize, visualize, ChartOptions, ChartSource, Compositor,
        OutputIntent, ResourceLayoutBuilder, TimelineLayoutBuilder,
    };
}
