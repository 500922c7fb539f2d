use std::path::Path;

use eframe::egui::{RichText, Ui};

use crate::data::model::ReadingSequence;

// ---------------------------------------------------------------------------
// Bottom status bar
// ---------------------------------------------------------------------------

/// Source file name, reading count and value range.
pub fn status_bar(ui: &mut Ui, source: &Path, readings: &ReadingSequence) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(RichText::new(file_label(source)).strong());
        ui.separator();
        ui.label(summary(readings));
    });
}

pub fn file_label(source: &Path) -> String {
    source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| source.display().to_string())
}

fn summary(readings: &ReadingSequence) -> String {
    match readings.range() {
        Some((min, max)) => format!("{} readings, min {min}, max {max}", readings.len()),
        None => "no readings".to_string(),
    }
}
