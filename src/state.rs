use crate::chart::layout::ChartLayout;
use crate::chart::tooltip::Tooltip;
use crate::data::loader::{LoadError, Source};
use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Where the current (or pending) dataset comes from.
    pub source: Source,

    /// Loaded dataset (None until a load succeeds).
    pub dataset: Option<Dataset>,

    /// Chart built from `dataset`.
    pub chart: Option<ChartLayout>,

    /// Hover tooltip over the chart.
    pub tooltip: Tooltip,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a load is in progress.
    pub loading: bool,
}

impl AppState {
    pub fn new(source: Source) -> Self {
        Self {
            source,
            ..Self::default()
        }
    }

    /// Start a fresh pipeline run: the previous chart is dropped.
    pub fn begin_load(&mut self, source: Source) {
        log::info!("Loading dataset from {source}");
        self.source = source;
        self.dataset = None;
        self.chart = None;
        self.tooltip = Tooltip::default();
        self.status_message = None;
        self.loading = true;
    }

    /// Apply the outcome of a load. Failures are logged and leave no chart.
    pub fn finish_load(&mut self, result: Result<Dataset, LoadError>) {
        match result {
            Ok(dataset) => self.set_dataset(dataset),
            Err(e) => {
                log::error!("Failed to load {}: {e}", self.source);
                self.status_message = Some(format!("Error: {e}"));
                self.loading = false;
            }
        }
    }

    /// Ingest a newly loaded dataset and lay out the chart.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        log::info!(
            "Loaded {} observations, base temperature {}",
            dataset.len(),
            dataset.base_temperature
        );
        self.chart = Some(ChartLayout::build(&dataset));
        self.dataset = Some(dataset);
        self.tooltip = Tooltip::default();
        self.status_message = None;
        self.loading = false;
    }

    /// Update the tooltip for a pointer at canvas coordinates, or `None` when
    /// the pointer left the canvas.
    pub fn hover(&mut self, pointer: Option<(f64, f64)>) {
        let hit = self
            .chart
            .as_ref()
            .zip(pointer)
            .and_then(|(chart, (x, y))| chart.cell_at(x, y));
        match hit {
            Some(cell) => self.tooltip.show(cell),
            None => self.tooltip.hide(),
        }
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use super::*;
    use crate::data::loader::parse_dataset;
    use crate::data::loader::tests::SAMPLE;

    fn loaded() -> AppState {
        let mut state = AppState::default();
        state.begin_load(Source::default());
        state.finish_load(Ok(parse_dataset(SAMPLE).unwrap()));
        state
    }

    #[test]
    fn successful_load_builds_chart() {
        let state = loaded();
        assert!(!state.loading);
        assert_eq!(state.chart.as_ref().unwrap().cells.len(), 3);
        assert!(state.status_message.is_none());
    }

    #[test]
    fn failed_request_leaves_no_chart() {
        let mut state = AppState::default();
        state.begin_load(Source::default());
        state.finish_load(Err(LoadError::RequestFailed {
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }));
        assert!(state.chart.is_none());
        assert!(state.dataset.is_none());
        assert!(!state.loading);
        assert!(state.status_message.unwrap().contains("Request Failed"));
    }

    #[test]
    fn reload_drops_previous_chart() {
        let mut state = loaded();
        state.begin_load(Source::File("missing.json".into()));
        assert!(state.chart.is_none());
        assert!(state.loading);
    }

    #[test]
    fn hover_over_cell_then_away() {
        let mut state = loaded();
        let (x, y) = {
            let cell = &state.chart.as_ref().unwrap().cells[1];
            (cell.x + 0.5, cell.y + 0.5)
        };
        state.hover(Some((x, y)));
        assert!(state.tooltip.is_visible());
        assert!(state.tooltip.text().starts_with("1753 - February"));

        state.hover(Some((0.0, 0.0)));
        assert!(!state.tooltip.is_visible());

        state.hover(Some((x, y)));
        state.hover(None);
        assert!(!state.tooltip.is_visible());
    }
}
