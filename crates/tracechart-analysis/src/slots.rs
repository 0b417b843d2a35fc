//! Grouping of execution records by worker slot.

use itertools::Itertools;
use std::collections::HashMap;
use tracechart_core::{ExecutionRecord, SlotId};

/// All records that ran on one worker slot.
#[derive(Debug, Clone)]
pub struct Slot<'a> {
    pub id: &'a SlotId,
    pub records: Vec<&'a ExecutionRecord>,
    /// Sum of the durations of `records`.
    pub total_busy: f64,
}

/// Partitions records by slot, keeping slots in order of first appearance.
#[derive(Debug, Clone)]
pub struct SlotAggregator<'a> {
    slots: Vec<Slot<'a>>,
}

impl<'a> SlotAggregator<'a> {
    pub fn aggregate(records: &'a [ExecutionRecord]) -> Self {
        let mut index: HashMap<&'a SlotId, usize> = HashMap::new();
        let mut slots: Vec<Slot<'a>> = Vec::new();

        for record in records {
            let i = *index.entry(&record.slot_id).or_insert_with(|| {
                slots.push(Slot {
                    id: &record.slot_id,
                    records: Vec::new(),
                    total_busy: 0.0,
                });
                slots.len() - 1
            });
            let slot = &mut slots[i];
            slot.records.push(record);
            slot.total_busy += record.duration();
        }

        Self { slots }
    }

    pub fn slots(&self) -> &[Slot<'a>] {
        &self.slots
    }

    /// Rank slots busiest first; equal totals keep first-seen order.
    pub fn ranking(&self) -> SlotRanking {
        let order: Vec<SlotId> = self
            .slots
            .iter()
            .sorted_by(|a, b| b.total_busy.total_cmp(&a.total_busy))
            .map(|slot| slot.id.clone())
            .collect();
        let ranks = order
            .iter()
            .enumerate()
            .map(|(rank, id)| (id.clone(), rank))
            .collect();

        tracing::debug!(slots = order.len(), "ranked worker slots");
        SlotRanking { order, ranks }
    }
}

/// Dense `0..N` ranking of slots, used as the vertical chart coordinate.
#[derive(Debug, Clone, Default)]
pub struct SlotRanking {
    order: Vec<SlotId>,
    ranks: HashMap<SlotId, usize>,
}

impl SlotRanking {
    pub fn rank(&self, id: &SlotId) -> Option<usize> {
        self.ranks.get(id).copied()
    }

    /// Slot ids from rank 0 upward.
    pub fn order(&self) -> &[SlotId] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracechart_core::Expr;

    fn record(key: &str, start: f64, end: f64, slot: &str) -> ExecutionRecord {
        ExecutionRecord::new(key, Expr::leaf(1), start, end, slot)
    }

    #[test]
    fn test_aggregate_sums_busy_time() {
        let records = vec![
            record("a", 0.0, 2.0, "w1"),
            record("b", 0.0, 1.0, "w2"),
            record("c", 2.0, 5.0, "w1"),
        ];
        let agg = SlotAggregator::aggregate(&records);
        let slots = agg.slots();
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].id, &SlotId::new("w1"));
        assert_eq!(slots[0].records.len(), 2);
        assert_eq!(slots[0].total_busy, 5.0);
        assert_eq!(slots[1].total_busy, 1.0);
    }

    #[test]
    fn test_ranking_busiest_first() {
        let records = vec![
            record("a", 0.0, 1.0, "w1"),
            record("b", 0.0, 4.0, "w2"),
            record("c", 0.0, 2.0, "w3"),
        ];
        let ranking = SlotAggregator::aggregate(&records).ranking();
        assert_eq!(ranking.rank(&SlotId::new("w2")), Some(0));
        assert_eq!(ranking.rank(&SlotId::new("w3")), Some(1));
        assert_eq!(ranking.rank(&SlotId::new("w1")), Some(2));
        assert_eq!(ranking.rank(&SlotId::new("w9")), None);
    }

    #[test]
    fn test_ranking_ties_keep_first_seen_order() {
        let records = vec![
            record("a", 0.0, 3.0, "late"),
            record("b", 1.0, 4.0, "early"),
            record("c", 0.0, 3.0, "third"),
        ];
        let ranking = SlotAggregator::aggregate(&records).ranking();
        let order: Vec<&str> = ranking.order().iter().map(|id| id.0.as_str()).collect();
        assert_eq!(order, vec!["late", "early", "third"]);
    }

    #[test]
    fn test_empty_records() {
        let ranking = SlotAggregator::aggregate(&[]).ranking();
        assert!(ranking.is_empty());
    }
}
