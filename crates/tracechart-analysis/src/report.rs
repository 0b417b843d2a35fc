use crate::metrics::TraceMetrics;
use std::fmt::Write;
use tracechart_core::Result;

/// Generates human-readable and machine-readable reports.
pub struct Report {
    metrics: TraceMetrics,
}

impl Report {
    pub fn new(metrics: TraceMetrics) -> Self {
        Self { metrics }
    }

    /// Generate a human-readable text report.
    pub fn to_text(&self) -> String {
        let m = &self.metrics;
        let mut out = String::new();
        let _ = writeln!(out, "Tasks: {}", m.task_count);
        let _ = writeln!(out, "Span: {:.6} s", m.span);
        let _ = writeln!(out);
        let _ = writeln!(out, "Slots (busiest first):");
        for slot in &m.slots {
            let _ = writeln!(
                out,
                "  #{:<3} {:<16} tasks={:<6} busy={:.6}s util={:.1}%",
                slot.rank,
                slot.slot_id,
                slot.tasks,
                slot.busy,
                slot.utilization * 100.0
            );
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "Functions:");
        for (name, f) in &m.functions {
            let _ = writeln!(
                out,
                "  {:<24} calls={:<6} total={:.6}s avg={:.6}s",
                name, f.invocations, f.total_duration, f.avg_duration
            );
        }
        out
    }

    /// Generate a JSON report.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.metrics)?)
    }
}
