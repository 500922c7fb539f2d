use eframe::egui::Ui;
use egui_plot::{Line, LineStyle, Plot, PlotPoints};

use crate::data::model::ReadingSequence;

pub const Y_AXIS_LABEL: &str = "Humidity";

/// Dashed stroke of the humidity line.
pub fn reading_line_style() -> LineStyle {
    LineStyle::dashed_loose()
}

// ---------------------------------------------------------------------------
// Humidity plot (central panel)
// ---------------------------------------------------------------------------

/// Draw the readings as a dashed line, x = row index, y = humidity.
/// An empty sequence gives an empty plot.
pub fn humidity_plot(ui: &mut Ui, readings: &ReadingSequence) {
    Plot::new("humidity_plot")
        .y_axis_label(Y_AXIS_LABEL)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let line = Line::new(PlotPoints::new(readings.points()))
                .style(reading_line_style())
                .width(1.5);

            plot_ui.line(line);
        });
}
