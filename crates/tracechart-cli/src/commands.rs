//! Command implementations for the tracechart CLI.

use crate::{ChartArgs, ChartSelection};
use anyhow::{Context, Result};
use std::path::Path;
use tracechart_analysis::{Analyzer, Report};
use tracechart_backend::{JsonBackend, RenderBackend};
use tracechart_core::chart::Tool;
use tracechart_core::{PaletteCatalog, Profile};
use tracechart_layout::{visualize, ChartOptions, ChartSource, Compositor, OutputIntent};

fn load_profile(path: &Path) -> Result<Profile> {
    Profile::load(path).with_context(|| format!("Failed to load profile {}", path.display()))
}

fn load_catalog(path: Option<&Path>) -> Result<PaletteCatalog> {
    match path {
        Some(path) => PaletteCatalog::load(path)
            .with_context(|| format!("Failed to load palette catalog {}", path.display())),
        None => Ok(PaletteCatalog::builtin().clone()),
    }
}

/// Options from the config file, overridden by whatever flags were given.
fn chart_options(args: &ChartArgs) -> Result<ChartOptions> {
    let base = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            ChartOptions::from_json(&text)
                .with_context(|| format!("Invalid chart options in {}", path.display()))?
        }
        None => ChartOptions::default(),
    };
    let tools = args
        .tools
        .as_deref()
        .map(Tool::parse_list)
        .transpose()
        .context("Invalid --tools")?;
    let flags = ChartOptions {
        title: args.title.clone(),
        width: args.width,
        height: args.height,
        tools,
        palette: args.palette.clone(),
        label_size: args.label_size,
    };
    Ok(base.merge(flags))
}

/// Layout commands: build the selected charts and emit them as JSON.
pub fn chart(selection: ChartSelection, profile_path: &Path, args: &ChartArgs) -> Result<()> {
    let profile = load_profile(profile_path)?;
    let catalog = load_catalog(args.palette_catalog.as_deref())?;
    let options = chart_options(args)?;

    let sources = match selection {
        ChartSelection::Tasks => vec![ChartSource::tasks_of(&profile)],
        ChartSelection::Resources => vec![ChartSource::resources_of(&profile)],
        ChartSelection::Both => vec![
            ChartSource::tasks_of(&profile),
            ChartSource::resources_of(&profile),
        ],
    };

    let compositor = Compositor::new(JsonBackend::stdout());
    let intent = OutputIntent {
        show: args.show,
        save: args.output.is_some() || !args.show,
        destination: args.output.clone(),
    };
    let layout = visualize(&compositor, &sources, &catalog, &options, &intent)
        .context("Failed to lay out profile")?;

    if intent.save {
        let destination = intent
            .destination
            .unwrap_or_else(|| compositor.backend().default_destination());
        eprintln!(
            "Wrote {} chart(s) to {}",
            layout.charts.len(),
            destination.display()
        );
    }
    Ok(())
}

/// Analyze command: print trace metrics.
pub fn analyze(profile_path: &Path, json: bool) -> Result<()> {
    let profile = load_profile(profile_path)?;
    let metrics = Analyzer::new()
        .analyze(&profile.tasks)
        .context("Failed to analyze profile")?;
    let report = Report::new(metrics);

    if json {
        println!("{}", report.to_json()?);
    } else {
        println!("Analyzing profile: {}", profile_path.display());
        println!();
        print!("{}", report.to_text());
    }
    Ok(())
}

/// Palettes command: list catalog entries.
pub fn list_palettes(catalog_path: Option<&Path>) -> Result<()> {
    let catalog = load_catalog(catalog_path)?;
    for name in catalog.names() {
        let palette = catalog.get(name)?;
        let sizes: Vec<String> = palette.sizes().map(|n| n.to_string()).collect();
        println!("  {:<12} sizes: {}", name, sizes.join(", "));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let dir = std::env::temp_dir().join(format!("tracechart-cli-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let config = dir.join("options.json");
        std::fs::write(&config, r#"{"title": "From config", "palette": "Blues", "width": 640}"#).unwrap();

        let args = ChartArgs {
            title: Some("From flags".into()),
            tools: Some("hover,xpan".into()),
            config: Some(config),
            ..ChartArgs::default()
        };
        let options = chart_options(&args).unwrap();
        assert_eq!(options.title.as_deref(), Some("From flags"));
        assert_eq!(options.palette.as_deref(), Some("Blues"));
        assert_eq!(options.width, Some(640));
        assert_eq!(options.tools, Some(vec![Tool::Hover, Tool::XPan]));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_bad_tools_flag() {
        let args = ChartArgs {
            tools: Some("hover,laser".into()),
            ..ChartArgs::default()
        };
        assert!(chart_options(&args).is_err());
    }
}
