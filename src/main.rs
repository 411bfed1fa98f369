#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod app;

use crate::app::{
    QuickLinksApp, APP_DISPLAY_NAME, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, WINDOW_HEIGHT,
    WINDOW_WIDTH,
};
use eframe::egui;
use log::{info, warn};
use quick_links::{FileStore, MemoryStore, QuickLinks, Store};

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let links = QuickLinks::load(open_store());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_min_inner_size([MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        APP_DISPLAY_NAME,
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(QuickLinksApp::new(links)))
        }),
    )
}

fn open_store() -> Box<dyn Store> {
    match FileStore::default_dir() {
        Some(dir) => {
            info!("Storing links in {}", dir.display());
            Box::new(FileStore::new(dir))
        }
        None => {
            warn!("No config directory available, links will only last this session");
            Box::new(MemoryStore::new())
        }
    }
}
