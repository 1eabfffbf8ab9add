//! BioSeqenzer - DNA Sequence Analysis Tool
//!
//! Desktop front-end: motif scanning, translation, molecular weight and
//! primer design for a single DNA sequence.

use env_logger::Env;
use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod app;

use app::BioSeqenzerApp;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([700.0, 500.0])
            .with_title("BioSeqenzer"),
        ..Default::default()
    };

    eframe::run_native(
        "BioSeqenzer",
        native_options,
        Box::new(|cc| Ok(Box::new(BioSeqenzerApp::new(cc)))),
    )
}
