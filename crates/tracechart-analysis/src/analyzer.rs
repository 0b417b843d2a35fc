use crate::metrics::{FunctionMetrics, SlotMetrics, TraceMetrics};
use crate::slots::SlotAggregator;
use std::collections::BTreeMap;
use tracechart_core::{Error, ExecutionRecord, Result};

/// Label used for tasks whose expression is not a call.
pub const DATA_TASK: &str = "<data>";

/// Analyzes task traces to extract per-slot and per-function metrics.
pub struct Analyzer {}

impl Analyzer {
    pub fn new() -> Self {
        Self {}
    }

    pub fn analyze(&self, records: &[ExecutionRecord]) -> Result<TraceMetrics> {
        let (left, right) = records
            .iter()
            .map(|r| (r.start_time, r.end_time))
            .reduce(|(l, r), (s, e)| (l.min(s), r.max(e)))
            .ok_or_else(|| Error::empty_trace("no task records to analyze"))?;
        let span = right - left;

        let aggregator = SlotAggregator::aggregate(records);
        let ranking = aggregator.ranking();
        let mut slots: Vec<SlotMetrics> = aggregator
            .slots()
            .iter()
            .map(|slot| SlotMetrics {
                slot_id: slot.id.clone(),
                rank: ranking.rank(slot.id).unwrap_or_default(),
                tasks: slot.records.len(),
                busy: slot.total_busy,
                utilization: if span > 0.0 { slot.total_busy / span } else { 0.0 },
            })
            .collect();
        slots.sort_by_key(|m| m.rank);

        let mut functions: BTreeMap<String, FunctionMetrics> = BTreeMap::new();
        for record in records {
            let name = record
                .expression
                .function_name()
                .unwrap_or_else(|| DATA_TASK.to_string());
            let entry = functions.entry(name).or_default();
            entry.invocations += 1;
            entry.total_duration += record.duration();
        }
        for metrics in functions.values_mut() {
            metrics.avg_duration = metrics.total_duration / metrics.invocations as f64;
        }

        Ok(TraceMetrics {
            task_count: records.len(),
            span,
            slots,
            functions,
        })
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracechart_core::Expr;

    #[test]
    fn test_analyze() {
        let records = vec![
            ExecutionRecord::new("c", Expr::call("add", vec![]), 0.0, 2.0, "w1"),
            ExecutionRecord::new("d", Expr::call("mul", vec![]), 1.0, 2.0, "w2"),
            ExecutionRecord::new("e", Expr::call("add", vec![]), 2.0, 4.0, "w1"),
            ExecutionRecord::new("f", Expr::leaf(3), 3.0, 3.5, "w2"),
        ];
        let metrics = Analyzer::new().analyze(&records).unwrap();
        assert_eq!(metrics.task_count, 4);
        assert_eq!(metrics.span, 4.0);
        assert_eq!(metrics.slots[0].slot_id.0, "w1");
        assert_eq!(metrics.slots[0].utilization, 1.0);
        assert_eq!(metrics.slots[1].busy, 1.5);
        assert_eq!(metrics.functions["add"].invocations, 2);
        assert_eq!(metrics.functions["add"].avg_duration, 2.0);
        assert_eq!(metrics.functions[DATA_TASK].invocations, 1);
    }

    #[test]
    fn test_analyze_empty() {
        let err = Analyzer::new().analyze(&[]).unwrap_err();
        assert!(matches!(err, Error::EmptyTrace(_)));
    }
}
