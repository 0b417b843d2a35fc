use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracechart_core::SlotId;

/// Summary statistics extracted from a task trace.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TraceMetrics {
    pub task_count: usize,
    /// Wall time from the first start to the last end, in seconds.
    pub span: f64,
    /// Slots busiest first.
    pub slots: Vec<SlotMetrics>,
    pub functions: BTreeMap<String, FunctionMetrics>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotMetrics {
    pub slot_id: SlotId,
    pub rank: usize,
    pub tasks: usize,
    pub busy: f64,
    /// `busy / span`, zero when the span is zero.
    pub utilization: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FunctionMetrics {
    pub invocations: u64,
    pub total_duration: f64,
    pub avg_duration: f64,
}
