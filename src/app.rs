use std::path::PathBuf;

use eframe::egui;

use crate::data::model::ReadingSequence;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

/// The viewer window. Owns the readings until the window is closed.
pub struct HumidityApp {
    pub source: PathBuf,
    pub readings: ReadingSequence,
}

impl HumidityApp {
    pub fn new(source: PathBuf, readings: ReadingSequence) -> Self {
        Self { source, readings }
    }
}

impl eframe::App for HumidityApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Bottom panel: status bar ----
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            panels::status_bar(ui, &self.source, &self.readings);
        });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::humidity_plot(ui, &self.readings);
        });
    }
}
