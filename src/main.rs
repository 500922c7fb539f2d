mod app;
mod data;
mod error;
mod ui;

use std::path::PathBuf;

use app::HumidityApp;
use clap::Parser;
use eframe::egui;

use crate::data::model::ReadingSequence;
use crate::error::PlotterError;

const APP_NAME: &str = "PS Plotter";

#[derive(Parser, Debug)]
#[command(name = "ps-plotter")]
#[command(about = "Plot logged humidity readings as a dashed line", long_about = None)]
struct Args {
    /// CSV file whose second column holds integer humidity readings
    filepath: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let readings = data::loader::load_file(&args.filepath)?;
    show(args.filepath, readings)?;
    Ok(())
}

/// Open the viewer and block until its window is closed.
fn show(source: PathBuf, readings: ReadingSequence) -> error::Result<()> {
    let title = format!("{APP_NAME} – {}", ui::panels::file_label(&source));
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title)
            .with_inner_size([1000.0, 600.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    log::info!("showing {} readings", readings.len());
    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |_cc| Ok(Box::new(HumidityApp::new(source, readings)))),
    )
    .map_err(PlotterError::from)
}
