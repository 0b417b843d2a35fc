//! Analysis tools for tracechart.
//!
//! This crate provides:
//! - Slot aggregation and busy-time ranking
//! - Trace metrics extraction
//! - Text and JSON reports

pub mod analyzer;
pub mod metrics;
pub mod report;
pub mod slots;

pub use analyzer::Analyzer;
pub use metrics::TraceMetrics;
pub use report::Report;
pub use slots::{Slot, SlotAggregator, SlotRanking};
