use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use eframe::egui;

use crate::data::loader::{LoadError, Source};
use crate::data::model::Dataset;
use crate::state::AppState;
use crate::ui::{heatmap, panels};

type LoadResult = Result<Dataset, LoadError>;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct HeatmapApp {
    pub state: AppState,
    pending: Option<Receiver<LoadResult>>,
}

impl HeatmapApp {
    /// Create the app and kick off the initial fetch.
    pub fn new(ctx: &egui::Context, source: Source) -> Self {
        let mut app = Self {
            state: AppState::new(source.clone()),
            pending: None,
        };
        app.start_load(ctx, source);
        app
    }

    /// Run one load on a worker thread; the result arrives via `poll_load`.
    fn start_load(&mut self, ctx: &egui::Context, source: Source) {
        self.state.begin_load(source.clone());

        let (tx, rx) = mpsc::channel();
        let ctx = ctx.clone();
        thread::spawn(move || {
            let result = source.load();
            // Receiver is gone if a newer load replaced this one.
            let _ = tx.send(result);
            ctx.request_repaint();
        });
        self.pending = Some(rx);
    }

    fn poll_load(&mut self) {
        let Some(rx) = &self.pending else {
            return;
        };
        match rx.try_recv() {
            Ok(result) => {
                self.pending = None;
                self.state.finish_load(result);
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                self.pending = None;
                log::error!("Loader thread exited without a result");
                self.state.status_message = Some("Error: loader thread exited".to_string());
                self.state.loading = false;
            }
        }
    }
}

impl eframe::App for HeatmapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_load();

        // ---- Top panel: menu bar ----
        let request = egui::TopBottomPanel::top("top_bar")
            .show(ctx, |ui| panels::top_bar(ui, &mut self.state))
            .inner;

        // ---- Central panel: heat map ----
        egui::CentralPanel::default().show(ctx, |ui| {
            heatmap::heatmap(ui, &mut self.state);
        });

        if let Some(source) = request {
            self.start_load(ctx, source);
        }
    }
}
