//! Dual-axis CPU / memory layout of resource samples.

use crate::options::{ChartDefaults, ChartOptions};
use crate::timeline::TIME_AXIS_LABEL;
use tracechart_core::chart::{
    Axis, Borders, ChartKind, ChartModel, LineSeries, Range, TimeSeriesOverlay,
};
use tracechart_core::{Color, Error, PaletteCatalog, ResourceSample, Result};

pub const CPU_AXIS_LABEL: &str = "% CPU";
pub const MEMORY_AXIS_LABEL: &str = "Memory (MB)";
pub const MEMORY_RANGE_NAME: &str = "memory";

const SERIES_SWATCH_SET: usize = 6;
const CPU_SWATCH: usize = 0;
const MEMORY_SWATCH: usize = 2;
const LINE_WIDTH: f64 = 4.0;

pub struct ResourceLayoutBuilder<'c> {
    catalog: &'c PaletteCatalog,
    options: ChartOptions,
}

impl ResourceLayoutBuilder<'static> {
    pub fn new() -> Self {
        Self::with_catalog(PaletteCatalog::builtin())
    }
}

impl Default for ResourceLayoutBuilder<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'c> ResourceLayoutBuilder<'c> {
    pub fn with_catalog(catalog: &'c PaletteCatalog) -> Self {
        Self {
            catalog,
            options: ChartOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ChartOptions) -> Self {
        self.options = options;
        self
    }

    /// Lay out `samples` in timestamp order. Axis maxima are the observed
    /// maxima, without padding.
    pub fn build(&self, samples: &[ResourceSample]) -> Result<ChartModel> {
        let _span = tracing::info_span!("resource_layout", samples = samples.len()).entered();
        let opts = self.options.resolve(&ChartDefaults::resource())?;

        let mut samples = samples.to_vec();
        samples.sort_by(|a, b| a.timestamp.total_cmp(&b.timestamp));
        let (first, last) = match (samples.first(), samples.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(Error::empty_trace("no resource samples to lay out")),
        };
        let left = first.timestamp;
        let right = last.timestamp;

        let max_cpu = samples.iter().map(|s| s.cpu_percent).fold(first.cpu_percent, f64::max);
        let max_memory = samples.iter().map(|s| s.memory_mb).fold(first.memory_mb, f64::max);

        let palette = self.catalog.get(&opts.palette)?;
        let swatches = palette
            .swatches(SERIES_SWATCH_SET)
            .unwrap_or_else(|| palette.closest(SERIES_SWATCH_SET));
        let swatch = |i: usize| -> Color {
            swatches
                .get(i)
                .or_else(|| swatches.last())
                .cloned()
                .unwrap_or_else(|| Color::from("black"))
        };

        let cpu = LineSeries {
            legend: CPU_AXIS_LABEL.to_string(),
            points: samples.iter().map(|s| (s.timestamp - left, s.cpu_percent)).collect(),
            color: swatch(CPU_SWATCH),
            line_width: LINE_WIDTH,
            y_range_name: None,
        };
        let memory = LineSeries {
            legend: "Memory".to_string(),
            points: samples.iter().map(|s| (s.timestamp - left, s.memory_mb)).collect(),
            color: swatch(MEMORY_SWATCH),
            line_width: LINE_WIDTH,
            y_range_name: Some(MEMORY_RANGE_NAME.to_string()),
        };

        tracing::debug!(max_cpu, max_memory, span = right - left, "built resource layout");

        let cpu_range = Range::numeric(0.0, max_cpu);
        Ok(ChartModel {
            title: Some(opts.title),
            width: opts.width,
            height: opts.height,
            tools: opts.tools,
            x_range: Range::numeric(0.0, right - left),
            y_range: cpu_range.clone(),
            x_axis: Axis::labelled(TIME_AXIS_LABEL),
            y_axis: Axis::labelled(CPU_AXIS_LABEL),
            show_grid: true,
            borders: Borders::default(),
            hover: None,
            kind: ChartKind::Resource {
                overlay: TimeSeriesOverlay {
                    cpu,
                    memory,
                    cpu_range,
                    memory_range: Range::numeric(0.0, max_memory),
                    memory_axis: Axis::labelled(MEMORY_AXIS_LABEL),
                },
            },
        })
    }
}
