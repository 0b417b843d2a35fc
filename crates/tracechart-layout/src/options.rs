//! Caller overrides merged over per-chart defaults.

use serde::{Deserialize, Serialize};
use tracechart_core::chart::Tool;
use tracechart_core::{Error, Result};

pub const DEFAULT_TITLE: &str = "Profile Results";
pub const DEFAULT_PALETTE: &str = "GnBu";
pub const DEFAULT_LABEL_SIZE: usize = 60;
pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 300;

/// Optional chart settings. Every field that is set wins over the defaults
/// of whichever builder consumes the options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartOptions {
    pub title: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub tools: Option<Vec<Tool>>,
    pub palette: Option<String>,
    pub label_size: Option<usize>,
}

impl ChartOptions {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn tools(mut self, tools: Vec<Tool>) -> Self {
        self.tools = Some(tools);
        self
    }

    pub fn palette(mut self, palette: impl Into<String>) -> Self {
        self.palette = Some(palette.into());
        self
    }

    pub fn label_size(mut self, label_size: usize) -> Self {
        self.label_size = Some(label_size);
        self
    }

    /// Layer `overrides` on top of `self`; fields set in `overrides` win.
    pub fn merge(self, overrides: ChartOptions) -> ChartOptions {
        ChartOptions {
            title: overrides.title.or(self.title),
            width: overrides.width.or(self.width),
            height: overrides.height.or(self.height),
            tools: overrides.tools.or(self.tools),
            palette: overrides.palette.or(self.palette),
            label_size: overrides.label_size.or(self.label_size),
        }
    }

    pub(crate) fn resolve(&self, defaults: &ChartDefaults) -> Result<ResolvedOptions> {
        let resolved = ResolvedOptions {
            title: self.title.clone().unwrap_or_else(|| defaults.title.to_string()),
            width: self.width.unwrap_or(defaults.width),
            height: self.height.unwrap_or(defaults.height),
            tools: self.tools.clone().unwrap_or_else(|| defaults.tools.to_vec()),
            palette: self.palette.clone().unwrap_or_else(|| defaults.palette.to_string()),
            label_size: self.label_size.unwrap_or(defaults.label_size),
        };

        if resolved.width == 0 || resolved.height == 0 {
            return Err(Error::InvalidOption(format!(
                "chart dimensions must be positive, got {}x{}",
                resolved.width, resolved.height
            )));
        }
        if resolved.label_size == 0 {
            return Err(Error::InvalidOption("label size must be positive".into()));
        }
        Ok(resolved)
    }
}

/// Settings a builder falls back to when the caller leaves them unset.
#[derive(Debug, Clone, Copy)]
pub struct ChartDefaults {
    pub title: &'static str,
    pub width: u32,
    pub height: u32,
    pub tools: &'static [Tool],
    pub palette: &'static str,
    pub label_size: usize,
}

impl ChartDefaults {
    pub const fn timeline() -> Self {
        Self {
            title: DEFAULT_TITLE,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            tools: &[
                Tool::Hover,
                Tool::Save,
                Tool::Reset,
                Tool::Resize,
                Tool::XWheelZoom,
                Tool::XPan,
            ],
            palette: DEFAULT_PALETTE,
            label_size: DEFAULT_LABEL_SIZE,
        }
    }

    pub const fn resource() -> Self {
        Self {
            tools: &[
                Tool::Save,
                Tool::Reset,
                Tool::Resize,
                Tool::XWheelZoom,
                Tool::XPan,
            ],
            ..Self::timeline()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ResolvedOptions {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub tools: Vec<Tool>,
    pub palette: String,
    pub label_size: usize,
}
