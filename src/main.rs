mod app;
mod chart;
mod color;
mod data;
mod scale;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use app::HeatmapApp;
use clap::Parser;
use eframe::egui;

use chart::layout::ChartLayout;
use data::loader::{DATASET_URL, Source};

/// Heat-map calendar of monthly global land-surface temperature.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Dataset URL
    #[arg(long, default_value = DATASET_URL, conflicts_with = "file")]
    url: String,

    /// Read the dataset from a local JSON file instead of fetching it
    #[arg(long)]
    file: Option<PathBuf>,

    /// Write the chart as an HTML page to this path and exit, without a window
    #[arg(long, value_name = "PATH")]
    export: Option<PathBuf>,
}

impl Cli {
    fn source(&self) -> Source {
        match &self.file {
            Some(path) => Source::File(path.clone()),
            None => Source::Url(self.url.clone()),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let source = cli.source();

    if let Some(out) = &cli.export {
        return export(&source, out);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1600.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Global Land-Surface Temperature",
        options,
        Box::new(move |cc| Ok(Box::new(HeatmapApp::new(&cc.egui_ctx, source)))),
    )
    .map_err(|e| anyhow::anyhow!("running viewer: {e}"))
}

/// Headless pipeline: load → lay out → write HTML.
fn export(source: &Source, out: &std::path::Path) -> Result<()> {
    let dataset = source
        .load()
        .inspect_err(|e| log::error!("Failed to load {source}: {e}"))
        .with_context(|| format!("loading dataset from {source}"))?;
    if dataset.is_empty() {
        log::warn!("{source} has no observations, the chart will be empty");
    }
    log::info!("Loaded {} observations", dataset.len());

    let chart = ChartLayout::build(&dataset);
    chart::svg::write_document(out, &chart)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::tests::SAMPLE;

    #[test]
    fn export_writes_one_cell_per_observation() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("global-temperature.json");
        let out = dir.path().join("heatmap.html");
        std::fs::write(&input, SAMPLE).unwrap();

        export(&Source::File(input), &out).unwrap();

        let html = std::fs::read_to_string(&out).unwrap();
        assert_eq!(html.matches(r#"class="cell""#).count(), 3);
        assert!(html.contains("1753 - 1754: base temperature 8.66℃"));
    }

    #[test]
    fn export_fails_without_writing_on_bad_input() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("heatmap.html");

        let err = export(&Source::File(dir.path().join("missing.json")), &out).unwrap_err();
        assert!(err.to_string().contains("loading dataset"));
        assert!(!out.exists());
    }

    #[test]
    fn file_flag_overrides_url() {
        let cli = Cli::parse_from(["temp-heatmap", "--file", "local.json"]);
        assert_eq!(cli.source(), Source::File(PathBuf::from("local.json")));
        let cli = Cli::parse_from(["temp-heatmap"]);
        assert_eq!(cli.source(), Source::default());
    }
}
