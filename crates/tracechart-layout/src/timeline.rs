//! Gantt-style layout of task executions.

use crate::colors::assign_colors;
use crate::options::{ChartDefaults, ChartOptions};
use crate::summarize::summarize_task;
use itertools::izip;
use std::collections::HashSet;
use tracechart_analysis::SlotAggregator;
use tracechart_core::chart::{
    Axis, Borders, ChartKind, ChartModel, HoverSpec, PointPolicy, Range, Rectangle, Tool,
    TooltipField,
};
use tracechart_core::{Color, Error, ExecutionRecord, PaletteCatalog, Result, TaskKey};

pub const TIME_AXIS_LABEL: &str = "Time (s)";
pub const SLOT_AXIS_LABEL: &str = "Worker ID";
const OUTLINE_COLOR: &str = "gray";

/// Builds one rectangle per task, placed at its slot's rank and its start
/// time relative to the earliest start in the trace.
pub struct TimelineLayoutBuilder<'c> {
    catalog: &'c PaletteCatalog,
    options: ChartOptions,
    known_keys: HashSet<TaskKey>,
}

impl TimelineLayoutBuilder<'static> {
    pub fn new() -> Self {
        Self::with_catalog(PaletteCatalog::builtin())
    }
}

impl Default for TimelineLayoutBuilder<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'c> TimelineLayoutBuilder<'c> {
    pub fn with_catalog(catalog: &'c PaletteCatalog) -> Self {
        Self {
            catalog,
            options: ChartOptions::default(),
            known_keys: HashSet::new(),
        }
    }

    pub fn with_options(mut self, options: ChartOptions) -> Self {
        self.options = options;
        self
    }

    /// Keys that count as task references in addition to the traced ones,
    /// such as inputs that were never executed.
    pub fn with_known_keys<I>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = TaskKey>,
    {
        self.known_keys.extend(keys);
        self
    }

    pub fn build(&self, records: &[ExecutionRecord]) -> Result<ChartModel> {
        let _span = tracing::info_span!("timeline_layout", records = records.len()).entered();
        let opts = self.options.resolve(&ChartDefaults::timeline())?;

        let (left, right) = records
            .iter()
            .map(|r| (r.start_time, r.end_time))
            .reduce(|(l, r), (s, e)| (l.min(s), r.max(e)))
            .ok_or_else(|| Error::empty_trace("no task records to lay out"))?;

        let ranking = SlotAggregator::aggregate(records).ranking();

        let mut keys = self.known_keys.clone();
        keys.extend(records.iter().map(|r| r.key.clone()));
        let summaries: Vec<_> = records
            .iter()
            .map(|r| summarize_task(&r.expression, &keys, opts.label_size))
            .collect();
        let heads: Vec<&str> = summaries.iter().map(|s| s.head.as_str()).collect();
        let colors = assign_colors(self.catalog, &opts.palette, &heads)?;

        let rectangles: Vec<Rectangle> = izip!(records, summaries, colors)
            .map(|(record, summary, color)| {
                let rank = ranking.rank(&record.slot_id).unwrap_or_default();
                let width = record.duration();
                let label = record.key.to_string();
                Rectangle {
                    x_center: record.start_time + width / 2.0 - left,
                    width,
                    y: rank + 1,
                    height: 1.0,
                    color,
                    line_color: Color::from(OUTLINE_COLOR),
                    tooltip_text: format!("Key: {}\nTask: {}", label, summary.text),
                    label,
                    tooltip_expression: summary.text,
                }
            })
            .collect();

        let hover = opts.tools.contains(&Tool::Hover).then(|| HoverSpec {
            fields: vec![
                TooltipField {
                    label: "Key".into(),
                    field: "label".into(),
                },
                TooltipField {
                    label: "Task".into(),
                    field: "tooltip_expression".into(),
                },
            ],
            point_policy: PointPolicy::FollowMouse,
        });

        tracing::debug!(
            slots = ranking.len(),
            span = right - left,
            "built timeline layout"
        );

        Ok(ChartModel {
            title: Some(opts.title),
            width: opts.width,
            height: opts.height,
            tools: opts.tools,
            x_range: Range::numeric(0.0, right - left),
            y_range: Range::categorical((0..ranking.len()).map(|i| i.to_string()).collect()),
            x_axis: Axis::labelled(TIME_AXIS_LABEL),
            y_axis: Axis::labelled(SLOT_AXIS_LABEL),
            show_grid: false,
            borders: Borders::default(),
            hover,
            kind: ChartKind::Timeline { rectangles },
        })
    }
}
