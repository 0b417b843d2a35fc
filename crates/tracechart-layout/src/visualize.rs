//! One-call path from collected samples to a materialized layout.

use crate::compose::{Compositor, OutputIntent};
use crate::options::ChartOptions;
use crate::resource::ResourceLayoutBuilder;
use crate::timeline::TimelineLayoutBuilder;
use tracechart_backend::RenderBackend;
use tracechart_core::chart::{ChartModel, CompositeLayout};
use tracechart_core::{ExecutionRecord, PaletteCatalog, Profile, ResourceSample, Result, TaskKey};

/// Samples that become one chart.
#[derive(Debug, Clone, Copy)]
pub enum ChartSource<'a> {
    /// Task records, plus keys that count as references without having run.
    Tasks {
        records: &'a [ExecutionRecord],
        known_keys: &'a [TaskKey],
    },
    Resources(&'a [ResourceSample]),
}

impl<'a> ChartSource<'a> {
    /// The profile's task records, resolved against its whole task graph.
    pub fn tasks_of(profile: &'a Profile) -> Self {
        ChartSource::Tasks {
            records: &profile.tasks,
            known_keys: &profile.graph_keys,
        }
    }

    pub fn resources_of(profile: &'a Profile) -> Self {
        ChartSource::Resources(&profile.resources)
    }

    /// Task chart first, then resource chart, skipping empty sections.
    pub fn from_profile(profile: &'a Profile) -> Vec<ChartSource<'a>> {
        let mut sources = Vec::new();
        if !profile.tasks.is_empty() {
            sources.push(Self::tasks_of(profile));
        }
        if !profile.resources.is_empty() {
            sources.push(Self::resources_of(profile));
        }
        sources
    }

    pub fn build(&self, catalog: &PaletteCatalog, options: &ChartOptions) -> Result<ChartModel> {
        match self {
            ChartSource::Tasks {
                records,
                known_keys,
            } => TimelineLayoutBuilder::with_catalog(catalog)
                .with_options(options.clone())
                .with_known_keys(known_keys.iter().cloned())
                .build(records),
            ChartSource::Resources(samples) => ResourceLayoutBuilder::with_catalog(catalog)
                .with_options(options.clone())
                .build(samples),
        }
    }
}

/// Build one chart per source with the same options, stack them and hand
/// the result to the compositor's backend.
///
/// Every chart is built before the backend sees anything; the first error
/// aborts the whole call.
pub fn visualize<B: RenderBackend>(
    compositor: &Compositor<B>,
    sources: &[ChartSource<'_>],
    catalog: &PaletteCatalog,
    options: &ChartOptions,
    intent: &OutputIntent,
) -> Result<CompositeLayout> {
    let charts = sources
        .iter()
        .map(|source| source.build(catalog, options))
        .collect::<Result<Vec<_>>>()?;
    compositor.render(charts, intent)
}
