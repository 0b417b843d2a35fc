//! Vertical stacking of charts on a shared time axis, and hand-off to a
//! rendering backend.

use std::path::PathBuf;
use tracechart_backend::RenderBackend;
use tracechart_core::chart::{ChartModel, CompositeLayout};
use tracechart_core::{Error, Result};

/// Border above every chart but the first, and below every chart but the last.
pub const STACK_BORDER: u32 = 20;
/// Left and right border of every stacked chart.
pub const SIDE_BORDER: u32 = 75;

/// What to do with a composed layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputIntent {
    pub show: bool,
    pub save: bool,
    /// Where to save; the backend's default destination when `None`.
    pub destination: Option<PathBuf>,
}

impl OutputIntent {
    pub fn show() -> Self {
        Self {
            show: true,
            ..Self::default()
        }
    }

    pub fn save_to(destination: impl Into<PathBuf>) -> Self {
        Self {
            save: true,
            destination: Some(destination.into()),
            ..Self::default()
        }
    }
}

/// Stack `charts` into one layout.
///
/// A single chart passes through untouched. When stacking, every chart takes
/// the first chart's horizontal range, only the first keeps its title and only
/// the last keeps its horizontal axis label.
pub fn compose(mut charts: Vec<ChartModel>) -> Result<CompositeLayout> {
    match charts.len() {
        0 => return Err(Error::empty_trace("no charts to compose")),
        1 => return Ok(CompositeLayout { charts }),
        _ => {}
    }

    let x_range = charts[0].x_range.clone();
    let last = charts.len() - 1;
    for (i, chart) in charts.iter_mut().enumerate() {
        if i > 0 {
            chart.x_range = x_range.clone();
            chart.title = None;
            chart.borders.top = Some(STACK_BORDER);
        }
        if i < last {
            chart.x_axis.label = None;
            chart.borders.bottom = Some(STACK_BORDER);
        }
        chart.borders.left = Some(SIDE_BORDER);
        chart.borders.right = Some(SIDE_BORDER);
    }

    tracing::debug!(charts = charts.len(), "stacked charts");
    Ok(CompositeLayout { charts })
}

/// Composes charts and materializes them through a backend.
pub struct Compositor<B> {
    backend: B,
}

impl<B: RenderBackend> Compositor<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Compose `charts`, then show and/or save the result, in that order.
    ///
    /// Layout errors are returned before the backend is called.
    pub fn render(&self, charts: Vec<ChartModel>, intent: &OutputIntent) -> Result<CompositeLayout> {
        let layout = compose(charts)?;
        if intent.show {
            tracing::debug!(backend = self.backend.name(), "showing layout");
            self.backend.show(&layout)?;
        }
        if intent.save {
            let destination = intent
                .destination
                .clone()
                .unwrap_or_else(|| self.backend.default_destination());
            tracing::debug!(backend = self.backend.name(), path = %destination.display(), "saving layout");
            self.backend.save(&layout, &destination)?;
        }
        Ok(layout)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::{ResourceLayoutBuilder, TimelineLayoutBuilder};
    use std::path::Path;
    use std::sync::Mutex;
    use tracechart_core::chart::Range;
    use tracechart_core::{ExecutionRecord, Expr, ResourceSample};

    /// Records every call it receives.
    #[derive(Default)]
    pub(crate) struct RecordingBackend {
        pub calls: Mutex<Vec<String>>,
    }

    impl RecordingBackend {
        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl RenderBackend for RecordingBackend {
        fn name(&self) -> &'static str {
            "recording"
        }

        fn show(&self, layout: &CompositeLayout) -> Result<()> {
            self.calls.lock().unwrap().push(format!("show:{}", layout.charts.len()));
            Ok(())
        }

        fn save(&self, layout: &CompositeLayout, destination: &Path) -> Result<()> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("save:{}:{}", layout.charts.len(), destination.display()));
            Ok(())
        }
    }

    fn timeline() -> ChartModel {
        let records = vec![
            ExecutionRecord::new("a", Expr::leaf(1), 10.0, 14.0, "w1"),
            ExecutionRecord::new("b", Expr::leaf(1), 11.0, 12.0, "w2"),
        ];
        TimelineLayoutBuilder::new().build(&records).unwrap()
    }

    fn resources() -> ChartModel {
        let samples = vec![
            ResourceSample::new(10.0, 5.0, 90.0),
            ResourceSample::new(19.0, 85.0, 120.0),
        ];
        ResourceLayoutBuilder::new().build(&samples).unwrap()
    }

    #[test]
    fn test_single_chart_passthrough() {
        let chart = timeline();
        let layout = compose(vec![chart.clone()]).unwrap();
        assert_eq!(layout.charts, vec![chart]);
        assert!(!layout.is_stacked());
    }

    #[test]
    fn test_stacking_shares_first_range() {
        let layout = compose(vec![timeline(), resources()]).unwrap();
        let (top, bottom) = (&layout.charts[0], &layout.charts[1]);
        assert_eq!(bottom.x_range, Range::numeric(0.0, 4.0));
        assert_eq!(bottom.x_range, top.x_range);
        assert_eq!(top.title.as_deref(), Some("Profile Results"));
        assert_eq!(bottom.title, None);
        assert_eq!(top.x_axis.label, None);
        assert_eq!(bottom.x_axis.label.as_deref(), Some("Time (s)"));
    }

    #[test]
    fn test_stacking_borders() {
        let layout = compose(vec![timeline(), resources(), timeline()]).unwrap();
        let borders: Vec<_> = layout.charts.iter().map(|c| c.borders).collect();
        assert_eq!(borders[0].top, None);
        assert_eq!(borders[1].top, Some(STACK_BORDER));
        assert_eq!(borders[2].top, Some(STACK_BORDER));
        assert_eq!(borders[0].bottom, Some(STACK_BORDER));
        assert_eq!(borders[2].bottom, None);
        assert!(borders.iter().all(|b| b.left == Some(SIDE_BORDER) && b.right == Some(SIDE_BORDER)));
    }

    #[test]
    fn test_compose_nothing() {
        let err = compose(Vec::new()).unwrap_err();
        assert!(matches!(err, Error::EmptyTrace(_)));
    }

    #[test]
    fn test_render_calls_show_then_save() {
        let compositor = Compositor::new(RecordingBackend::default());
        let intent = OutputIntent {
            show: true,
            save: true,
            destination: Some(PathBuf::from("out/profile.html")),
        };
        compositor.render(vec![timeline(), resources()], &intent).unwrap();
        assert_eq!(
            compositor.backend().calls(),
            vec!["show:2".to_string(), "save:2:out/profile.html".to_string()]
        );
    }

    #[test]
    fn test_render_default_destination() {
        let compositor = Compositor::new(RecordingBackend::default());
        let intent = OutputIntent {
            save: true,
            ..OutputIntent::default()
        };
        compositor.render(vec![timeline()], &intent).unwrap();
        assert_eq!(compositor.backend().calls(), vec!["save:1:profile.html".to_string()]);
    }

    #[test]
    fn test_render_nothing_requested() {
        let compositor = Compositor::new(RecordingBackend::default());
        compositor.render(vec![timeline()], &OutputIntent::default()).unwrap();
        assert!(compositor.backend().calls().is_empty());
    }

    #[test]
    fn test_failed_layout_skips_backend() {
        let compositor = Compositor::new(RecordingBackend::default());
        assert!(compositor.render(Vec::new(), &OutputIntent::show()).is_err());
        assert!(compositor.backend().calls().is_empty());
    }
}
