//! Named, size-indexed color palettes.
//!
//! The built-in catalog carries the ColorBrewer schemes. It is built once per
//! process and only ever read; components take a `&PaletteCatalog` so a
//! caller can substitute a catalog loaded from JSON.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

/// A CSS color string, e.g. `#43a2ca` or `gray`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub String);

impl Color {
    pub fn new(color: impl Into<String>) -> Self {
        Self(color.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// One scheme, available in several discrete sizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<usize, Vec<Color>>", into = "BTreeMap<usize, Vec<Color>>")]
pub struct Palette {
    sets: BTreeMap<usize, Vec<Color>>,
}

impl Palette {
    pub fn new(sets: BTreeMap<usize, Vec<Color>>) -> Result<Self> {
        if sets.is_empty() || sets.values().any(Vec::is_empty) {
            return Err(Error::InvalidPalette(
                "palette must define at least one non-empty swatch set".into(),
            ));
        }
        Ok(Self { sets })
    }

    pub fn min_size(&self) -> usize {
        self.sets.keys().next().copied().unwrap_or_default()
    }

    pub fn max_size(&self) -> usize {
        self.sets.keys().next_back().copied().unwrap_or_default()
    }

    pub fn sizes(&self) -> impl Iterator<Item = usize> + '_ {
        self.sets.keys().copied()
    }

    /// The swatch set of exactly `n` colors, if the scheme defines one.
    pub fn swatches(&self, n: usize) -> Option<&[Color]> {
        self.sets.get(&n).map(Vec::as_slice)
    }

    /// The swatch set whose size is nearest to `n`, preferring the larger
    /// set on a tie.
    pub fn closest(&self, n: usize) -> &[Color] {
        self.sets
            .iter()
            .min_by_key(|(size, _)| (size.abs_diff(n), std::cmp::Reverse(**size)))
            .map(|(_, colors)| colors.as_slice())
            .unwrap_or_default()
    }
}

impl TryFrom<BTreeMap<usize, Vec<Color>>> for Palette {
    type Error = Error;

    fn try_from(sets: BTreeMap<usize, Vec<Color>>) -> Result<Self> {
        Palette::new(sets)
    }
}

impl From<Palette> for BTreeMap<usize, Vec<Color>> {
    fn from(palette: Palette) -> Self {
        palette.sets
    }
}

/// Read-only lookup from palette name to [`Palette`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaletteCatalog {
    palettes: BTreeMap<String, Palette>,
}

static BUILTIN: OnceLock<PaletteCatalog> = OnceLock::new();

impl PaletteCatalog {
    /// The ColorBrewer catalog, built on first use.
    pub fn builtin() -> &'static PaletteCatalog {
        BUILTIN.get_or_init(Self::brewer)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn insert(&mut self, name: impl Into<String>, palette: Palette) {
        self.palettes.insert(name.into(), palette);
    }

    pub fn get(&self, name: &str) -> Result<&Palette> {
        self.palettes
            .get(name)
            .ok_or_else(|| Error::InvalidPalette(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.palettes.keys().map(String::as_str)
    }

    fn brewer() -> Self {
        let mut catalog = PaletteCatalog::default();
        for (name, sets) in BREWER_GRADED {
            let sets = sets
                .iter()
                .map(|set| (set.len(), set.iter().map(|c| Color::from(*c)).collect()))
                .collect();
            catalog.palettes.insert(name.to_string(), Palette { sets });
        }
        for (name, min, colors) in BREWER_QUALITATIVE {
            let sets = (*min..=colors.len())
                .map(|n| (n, colors[..n].iter().map(|c| Color::from(*c)).collect()))
                .collect();
            catalog.palettes.insert(name.to_string(), Palette { sets });
        }
        catalog
    }
}

// Sequential and diverging schemes: each size is its own hand-tuned set,
// listed from the smallest size up.
const BREWER_GRADED: &[(&str, &[&[&str]])] = &[
    ("GnBu", &[
        &["#e0f3db", "#a8ddb5", "#43a2ca"],
        &["#f0f9e8", "#bae4bc", "#7bccc4", "#2b8cbe"],
        &["#f0f9e8", "#bae4bc", "#7bccc4", "#43a2ca", "#0868ac"],
        &["#f0f9e8", "#ccebc5", "#a8ddb5", "#7bccc4", "#43a2ca", "#0868ac"],
        &["#f0f9e8", "#ccebc5", "#a8ddb5", "#7bccc4", "#4eb3d3", "#2b8cbe", "#08589e"],
        &["#f7fcf0", "#e0f3db", "#ccebc5", "#a8ddb5", "#7bccc4", "#4eb3d3", "#2b8cbe", "#08589e"],
        &["#f7fcf0", "#e0f3db", "#ccebc5", "#a8ddb5", "#7bccc4", "#4eb3d3", "#2b8cbe", "#0868ac", "#084081"],
    ]),
    ("Blues", &[
        &["#deebf7", "#9ecae1", "#3182bd"],
        &["#eff3ff", "#bdd7e7", "#6baed6", "#2171b5"],
        &["#eff3ff", "#bdd7e7", "#6baed6", "#3182bd", "#08519c"],
        &["#eff3ff", "#c6dbef", "#9ecae1", "#6baed6", "#3182bd", "#08519c"],
        &["#eff3ff", "#c6dbef", "#9ecae1", "#6baed6", "#4292c6", "#2171b5", "#084594"],
        &["#f7fbff", "#deebf7", "#c6dbef", "#9ecae1", "#6baed6", "#4292c6", "#2171b5", "#084594"],
        &["#f7fbff", "#deebf7", "#c6dbef", "#9ecae1", "#6baed6", "#4292c6", "#2171b5", "#08519c", "#08306b"],
    ]),
    ("Greens", &[
        &["#e5f5e0", "#a1d99b", "#31a354"],
        &["#edf8e9", "#bae4b3", "#74c476", "#238b45"],
        &["#edf8e9", "#bae4b3", "#74c476", "#31a354", "#006d2c"],
        &["#edf8e9", "#c7e9c0", "#a1d99b", "#74c476", "#31a354", "#006d2c"],
        &["#edf8e9", "#c7e9c0", "#a1d99b", "#74c476", "#41ab5d", "#238b45", "#005a32"],
        &["#f7fcf5", "#e5f5e0", "#c7e9c0", "#a1d99b", "#74c476", "#41ab5d", "#238b45", "#005a32"],
        &["#f7fcf5", "#e5f5e0", "#c7e9c0", "#a1d99b", "#74c476", "#41ab5d", "#238b45", "#006d2c", "#00441b"],
    ]),
    ("Greys", &[
        &["#f0f0f0", "#bdbdbd", "#636363"],
        &["#f7f7f7", "#cccccc", "#969696", "#525252"],
        &["#f7f7f7", "#cccccc", "#969696", "#636363", "#252525"],
        &["#f7f7f7", "#d9d9d9", "#bdbdbd", "#969696", "#636363", "#252525"],
        &["#f7f7f7", "#d9d9d9", "#bdbdbd", "#969696", "#737373", "#525252", "#252525"],
        &["#ffffff", "#f0f0f0", "#d9d9d9", "#bdbdbd", "#969696", "#737373", "#525252", "#252525"],
        &["#ffffff", "#f0f0f0", "#d9d9d9", "#bdbdbd", "#969696", "#737373", "#525252", "#252525", "#000000"],
    ]),
    ("Oranges", &[
        &["#fee6ce", "#fdae6b", "#e6550d"],
        &["#feedde", "#fdbe85", "#fd8d3c", "#d94701"],
        &["#feedde", "#fdbe85", "#fd8d3c", "#e6550d", "#a63603"],
        &["#feedde", "#fdd0a2", "#fdae6b", "#fd8d3c", "#e6550d", "#a63603"],
        &["#feedde", "#fdd0a2", "#fdae6b", "#fd8d3c", "#f16913", "#d94801", "#8c2d04"],
        &["#fff5eb", "#fee6ce", "#fdd0a2", "#fdae6b", "#fd8d3c", "#f16913", "#d94801", "#8c2d04"],
        &["#fff5eb", "#fee6ce", "#fdd0a2", "#fdae6b", "#fd8d3c", "#f16913", "#d94801", "#a63603", "#7f2704"],
    ]),
    ("Purples", &[
        &["#efedf5", "#bcbddc", "#756bb1"],
        &["#f2f0f7", "#cbc9e2", "#9e9ac8", "#6a51a3"],
        &["#f2f0f7", "#cbc9e2", "#9e9ac8", "#756bb1", "#54278f"],
        &["#f2f0f7", "#dadaeb", "#bcbddc", "#9e9ac8", "#756bb1", "#54278f"],
        &["#f2f0f7", "#dadaeb", "#bcbddc", "#9e9ac8", "#807dba", "#6a51a3", "#4a1486"],
        &["#fcfbfd", "#efedf5", "#dadaeb", "#bcbddc", "#9e9ac8", "#807dba", "#6a51a3", "#4a1486"],
        &["#fcfbfd", "#efedf5", "#dadaeb", "#bcbddc", "#9e9ac8", "#807dba", "#6a51a3", "#54278f", "#3f007d"],
    ]),
    ("Reds", &[
        &["#fee0d2", "#fc9272", "#de2d26"],
        &["#fee5d9", "#fcae91", "#fb6a4a", "#cb181d"],
        &["#fee5d9", "#fcae91", "#fb6a4a", "#de2d26", "#a50f15"],
        &["#fee5d9", "#fcbba1", "#fc9272", "#fb6a4a", "#de2d26", "#a50f15"],
        &["#fee5d9", "#fcbba1", "#fc9272", "#fb6a4a", "#ef3b2c", "#cb181d", "#99000d"],
        &["#fff5f0", "#fee0d2", "#fcbba1", "#fc9272", "#fb6a4a", "#ef3b2c", "#cb181d", "#99000d"],
        &["#fff5f0", "#fee0d2", "#fcbba1", "#fc9272", "#fb6a4a", "#ef3b2c", "#cb181d", "#a50f15", "#67000d"],
    ]),
    ("BrBG", &[
        &["#d8b365", "#f5f5f5", "#5ab4ac"],
        &["#a6611a", "#dfc27d", "#80cdc1", "#018571"],
        &["#a6611a", "#dfc27d", "#f5f5f5", "#80cdc1", "#018571"],
        &["#8c510a", "#d8b365", "#f6e8c3", "#c7eae5", "#5ab4ac", "#01665e"],
        &["#8c510a", "#d8b365", "#f6e8c3", "#f5f5f5", "#c7eae5", "#5ab4ac", "#01665e"],
        &["#8c510a", "#bf812d", "#dfc27d", "#f6e8c3", "#c7eae5", "#80cdc1", "#35978f", "#01665e"],
        &["#8c510a", "#bf812d", "#dfc27d", "#f6e8c3", "#f5f5f5", "#c7eae5", "#80cdc1", "#35978f", "#01665e"],
        &["#543005", "#8c510a", "#bf812d", "#dfc27d", "#f6e8c3", "#c7eae5", "#80cdc1", "#35978f", "#01665e", "#003c30"],
        &["#543005", "#8c510a", "#bf812d", "#dfc27d", "#f6e8c3", "#f5f5f5", "#c7eae5", "#80cdc1", "#35978f", "#01665e", "#003c30"],
    ]),
    ("RdBu", &[
        &["#ef8a62", "#f7f7f7", "#67a9cf"],
        &["#ca0020", "#f4a582", "#92c5de", "#0571b0"],
        &["#ca0020", "#f4a582", "#f7f7f7", "#92c5de", "#0571b0"],
        &["#b2182b", "#ef8a62", "#fddbc7", "#d1e5f0", "#67a9cf", "#2166ac"],
        &["#b2182b", "#ef8a62", "#fddbc7", "#f7f7f7", "#d1e5f0", "#67a9cf", "#2166ac"],
        &["#b2182b", "#d6604d", "#f4a582", "#fddbc7", "#d1e5f0", "#92c5de", "#4393c3", "#2166ac"],
        &["#b2182b", "#d6604d", "#f4a582", "#fddbc7", "#f7f7f7", "#d1e5f0", "#92c5de", "#4393c3", "#2166ac"],
        &["#67001f", "#b2182b", "#d6604d", "#f4a582", "#fddbc7", "#d1e5f0", "#92c5de", "#4393c3", "#2166ac", "#053061"],
        &["#67001f", "#b2182b", "#d6604d", "#f4a582", "#fddbc7", "#f7f7f7", "#d1e5f0", "#92c5de", "#4393c3", "#2166ac", "#053061"],
    ]),
    ("Spectral", &[
        &["#fc8d59", "#ffffbf", "#99d594"],
        &["#d7191c", "#fdae61", "#abdda4", "#2b83ba"],
        &["#d7191c", "#fdae61", "#ffffbf", "#abdda4", "#2b83ba"],
        &["#d53e4f", "#fc8d59", "#fee08b", "#e6f598", "#99d594", "#3288bd"],
        &["#d53e4f", "#fc8d59", "#fee08b", "#ffffbf", "#e6f598", "#99d594", "#3288bd"],
        &["#d53e4f", "#f46d43", "#fdae61", "#fee08b", "#e6f598", "#abdda4", "#66c2a5", "#3288bd"],
        &["#d53e4f", "#f46d43", "#fdae61", "#fee08b", "#ffffbf", "#e6f598", "#abdda4", "#66c2a5", "#3288bd"],
        &["#9e0142", "#d53e4f", "#f46d43", "#fdae61", "#fee08b", "#e6f598", "#abdda4", "#66c2a5", "#3288bd", "#5e4fa2"],
        &["#9e0142", "#d53e4f", "#f46d43", "#fdae61", "#fee08b", "#ffffbf", "#e6f598", "#abdda4", "#66c2a5", "#3288bd", "#5e4fa2"],
    ]),
];

// Qualitative schemes: smaller sizes are prefixes of the full set.
const BREWER_QUALITATIVE: &[(&str, usize, &[&str])] = &[
    ("Set1", 3, &["#e41a1c", "#377eb8", "#4daf4a", "#984ea3", "#ff7f00", "#ffff33", "#a65628", "#f781bf", "#999999"]),
    ("Set2", 3, &["#66c2a5", "#fc8d62", "#8da0cb", "#e78ac3", "#a6d854", "#ffd92f", "#e5c494", "#b3b3b3"]),
    ("Dark2", 3, &["#1b9e77", "#d95f02", "#7570b3", "#e7298a", "#66a61e", "#e6ab02", "#a6761d", "#666666"]),
    ("Paired", 3, &[
        "#a6cee3", "#1f78b4", "#b2df8a", "#33a02c", "#fb9a99", "#e31a1c",
        "#fdbf6f", "#ff7f00", "#cab2d6", "#6a3d9a", "#ffff99", "#b15928",
    ]),
];
