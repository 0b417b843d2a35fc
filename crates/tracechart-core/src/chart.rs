//! Declarative chart descriptions handed to a rendering backend.
//!
//! Nothing in here knows how to draw. A [`ChartModel`] is a complete,
//! resolved description of axes, drawable primitives and interaction
//! affordances; a [`CompositeLayout`] stacks several of them on one time axis.

use crate::palette::Color;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Interaction affordances a backend may attach to a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    Hover,
    Save,
    Reset,
    Resize,
    #[serde(rename = "xwheel_zoom")]
    XWheelZoom,
    #[serde(rename = "xpan")]
    XPan,
}

impl Tool {
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Hover => "hover",
            Tool::Save => "save",
            Tool::Reset => "reset",
            Tool::Resize => "resize",
            Tool::XWheelZoom => "xwheel_zoom",
            Tool::XPan => "xpan",
        }
    }

    /// Parse a comma-separated tool list such as `"hover,save,xpan"`.
    pub fn parse_list(list: &str) -> Result<Vec<Tool>> {
        list.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Tool::from_str)
            .collect()
    }
}

impl FromStr for Tool {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "hover" => Ok(Tool::Hover),
            "save" => Ok(Tool::Save),
            "reset" => Ok(Tool::Reset),
            "resize" => Ok(Tool::Resize),
            "xwheel_zoom" => Ok(Tool::XWheelZoom),
            "xpan" => Ok(Tool::XPan),
            other => Err(Error::InvalidOption(format!("unknown tool '{}'", other))),
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Extent of one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Range {
    Numeric { start: f64, end: f64 },
    Categorical { factors: Vec<String> },
}

impl Range {
    pub fn numeric(start: f64, end: f64) -> Self {
        Range::Numeric { start, end }
    }

    pub fn categorical(factors: Vec<String>) -> Self {
        Range::Categorical { factors }
    }

    /// `(start, end)` for numeric ranges.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        match self {
            Range::Numeric { start, end } => Some((*start, *end)),
            Range::Categorical { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub label: Option<String>,
}

impl Axis {
    pub fn labelled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
        }
    }
}

/// Minimum space, in pixels, a backend reserves around the plot area.
/// `None` leaves the backend's own default in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Borders {
    pub top: Option<u32>,
    pub bottom: Option<u32>,
    pub left: Option<u32>,
    pub right: Option<u32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointPolicy {
    #[default]
    SnapToData,
    FollowMouse,
}

/// One line of a hover tooltip: a caption and the primitive field it shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipField {
    pub label: String,
    pub field: String,
}

/// What to show when the pointer is near a primitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoverSpec {
    pub fields: Vec<TooltipField>,
    pub point_policy: PointPolicy,
}

/// One task on the timeline, in (time, slot rank) space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub x_center: f64,
    pub width: f64,
    /// Slot rank, 1-based.
    pub y: usize,
    pub height: f64,
    pub color: Color,
    pub line_color: Color,
    /// The task key.
    pub label: String,
    pub tooltip_text: String,
    pub tooltip_expression: String,
}

/// A polyline drawn against either the primary or a named extra y-range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSeries {
    pub legend: String,
    pub points: Vec<(f64, f64)>,
    pub color: Color,
    pub line_width: f64,
    pub y_range_name: Option<String>,
}

/// CPU on the primary y-axis, memory on a secondary right-hand axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesOverlay {
    pub cpu: LineSeries,
    pub memory: LineSeries,
    pub cpu_range: Range,
    pub memory_range: Range,
    pub memory_axis: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChartKind {
    Timeline { rectangles: Vec<Rectangle> },
    Resource { overlay: TimeSeriesOverlay },
}

/// A single fully resolved chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartModel {
    pub title: Option<String>,
    pub width: u32,
    pub height: u32,
    pub tools: Vec<Tool>,
    pub x_range: Range,
    pub y_range: Range,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub show_grid: bool,
    pub borders: Borders,
    pub hover: Option<HoverSpec>,
    pub kind: ChartKind,
}

impl ChartModel {
    pub fn rectangles(&self) -> Option<&[Rectangle]> {
        match &self.kind {
            ChartKind::Timeline { rectangles } => Some(rectangles),
            ChartKind::Resource { .. } => None,
        }
    }

    pub fn overlay(&self) -> Option<&TimeSeriesOverlay> {
        match &self.kind {
            ChartKind::Resource { overlay } => Some(overlay),
            ChartKind::Timeline { .. } => None,
        }
    }
}

/// Charts stacked vertically and sharing one horizontal range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeLayout {
    pub charts: Vec<ChartModel>,
}

impl CompositeLayout {
    pub fn is_stacked(&self) -> bool {
        self.charts.len() > 1
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
