//! Indimap Main Application
//! Main window with control panel and map viewer.

use crate::charts::{write_map_json, ClockView, MapData, StaticMapRenderer};
use crate::data::{clean_indications, read_indication_csv, DataLoader, IndicationTable};
use crate::gui::{ControlPanel, ControlPanelAction, MapViewer};
use egui::SidePanel;
use polars::prelude::*;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;

/// CSV loading result from background thread
enum LoadResult {
    Progress(String),
    Complete(DataFrame),
    Error(String),
}

/// Map build result from background thread
enum BuildResult {
    Progress(f32, String),
    Complete {
        table: IndicationTable,
        map: MapData,
    },
    Error(String),
}

/// Main application window.
pub struct IndimapApp {
    loader: DataLoader,
    table: Option<IndicationTable>,
    control_panel: ControlPanel,
    map_viewer: MapViewer,

    // Async CSV loading
    load_rx: Option<Receiver<LoadResult>>,
    is_loading: bool,

    // Async map building
    build_rx: Option<Receiver<BuildResult>>,
    is_building: bool,
}

impl IndimapApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            loader: DataLoader::new(),
            table: None,
            control_panel: ControlPanel::new(),
            map_viewer: MapViewer::new(),
            load_rx: None,
            is_loading: false,
            build_rx: None,
            is_building: false,
        }
    }

    /// Handle CSV file selection - loads in the background
    fn handle_browse_csv(&mut self) {
        if self.is_loading {
            return; // Already loading
        }

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        {
            // Clear previous map
            self.map_viewer.clear();
            self.table = None;
            self.control_panel.export_enabled = false;
            self.control_panel.settings.csv_path = Some(path.clone());
            self.control_panel.set_progress(0.0, "Loading CSV file...");
            self.is_loading = true;

            let (tx, rx) = channel();
            self.load_rx = Some(rx);

            let path_str = path.to_string_lossy().to_string();

            thread::spawn(move || {
                let _ = tx.send(LoadResult::Progress("Reading CSV file...".to_string()));

                match read_indication_csv(&path_str) {
                    Ok(df) => {
                        let _ = tx.send(LoadResult::Complete(df));
                    }
                    Err(e) => {
                        let _ = tx.send(LoadResult::Error(e.to_string()));
                    }
                }
            });
        }
    }

    /// Check for CSV loading results
    fn check_load_results(&mut self) {
        let rx = self.load_rx.take();
        if let Some(rx) = rx {
            let mut should_keep_receiver = true;

            while let Ok(result) = rx.try_recv() {
                match result {
                    LoadResult::Progress(status) => {
                        self.control_panel.set_progress(0.0, &status);
                    }
                    LoadResult::Complete(df) => {
                        self.loader.set_dataframe(df);
                        let row_count = self.loader.get_row_count();
                        let column_count = self.loader.get_columns().len();
                        tracing::info!(rows = row_count, columns = column_count, "CSV loaded");
                        self.control_panel.build_enabled = true;
                        self.control_panel.set_progress(
                            0.0,
                            &format!("Loaded {} rows, {} columns", row_count, column_count),
                        );
                        self.is_loading = false;
                        should_keep_receiver = false;
                    }
                    LoadResult::Error(error) => {
                        tracing::error!(%error, "CSV load failed");
                        self.control_panel
                            .set_progress(0.0, &format!("Error: {}", error));
                        self.is_loading = false;
                        should_keep_receiver = false;
                    }
                }
            }

            if should_keep_receiver {
                self.load_rx = Some(rx);
            }
        }
    }

    /// Start cleaning + geometry build in a background thread
    fn start_build(&mut self) {
        let view = self.control_panel.settings.view;

        let Some(df) = self.loader.get_dataframe().cloned() else {
            self.control_panel.set_progress(0.0, "No data loaded");
            return;
        };

        let (tx, rx) = channel();
        self.build_rx = Some(rx);
        self.is_building = true;
        self.control_panel.set_progress(5.0, "Cleaning data...");

        thread::spawn(move || {
            Self::run_build(tx, df, view);
        });
    }

    /// Run cleaning + geometry build (called from background thread)
    fn run_build(tx: Sender<BuildResult>, df: DataFrame, view: ClockView) {
        let _ = tx.send(BuildResult::Progress(20.0, "Cleaning data...".to_string()));

        let table = match clean_indications(&df) {
            Ok(table) => table,
            Err(e) => {
                let _ = tx.send(BuildResult::Error(e.to_string()));
                return;
            }
        };

        let _ = tx.send(BuildResult::Progress(
            60.0,
            "Building map geometry...".to_string(),
        ));

        let map = MapData::build(&table, view);
        let _ = tx.send(BuildResult::Complete { table, map });
    }

    /// Check for map build results
    fn check_build_results(&mut self) {
        // Take the receiver temporarily to avoid borrow issues
        let rx = self.build_rx.take();
        if let Some(rx) = rx {
            let mut should_keep_receiver = true;

            while let Ok(result) = rx.try_recv() {
                match result {
                    BuildResult::Progress(progress, status) => {
                        self.control_panel.set_progress(progress, &status);
                    }
                    BuildResult::Complete { table, map } => {
                        let count = table.indications.len();
                        tracing::info!(indications = count, "map built");
                        self.table = Some(table);
                        self.map_viewer.set_map(map);
                        self.control_panel.export_enabled = true;
                        self.control_panel
                            .set_progress(100.0, &format!("Complete! {} indications mapped", count));
                        self.is_building = false;
                        should_keep_receiver = false;
                    }
                    BuildResult::Error(error) => {
                        tracing::error!(%error, "map build failed");
                        self.control_panel
                            .set_progress(0.0, &format!("Error: {}", error));
                        self.is_building = false;
                        should_keep_receiver = false;
                    }
                }
            }

            // Put receiver back if still needed
            if should_keep_receiver {
                self.build_rx = Some(rx);
            }
        }
    }

    /// Rebuild geometry for a new clock view without reloading the file
    fn handle_view_changed(&mut self) {
        let view = self.control_panel.settings.view;
        if let Some(table) = &self.table {
            self.map_viewer.set_map(MapData::build(table, view));
            self.control_panel
                .set_progress(100.0, &format!("Complete! Centered on {}", view.label()));
        }
    }

    /// Handle PNG export
    fn handle_export_png(&mut self) {
        let Some(map) = self.map_viewer.map().cloned() else {
            self.control_panel.set_progress(0.0, "No map to export");
            return;
        };

        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name("indication_map.png")
            .save_file()
        else {
            return; // User cancelled
        };

        self.control_panel.set_progress(50.0, "Rendering map...");

        match StaticMapRenderer::render_png(&map, &path, 1600, 900) {
            Ok(()) => {
                self.control_panel
                    .set_progress(100.0, &format!("Complete! Saved {}", path.display()));
                if let Err(e) = open::that(&path) {
                    tracing::warn!(error = %e, "could not open exported image");
                }
            }
            Err(e) => {
                self.control_panel
                    .set_progress(0.0, &format!("Error: {}", e));
            }
        }
    }

    /// Handle JSON export
    fn handle_export_json(&mut self) {
        let Some(table) = self.table.clone() else {
            self.control_panel.set_progress(0.0, "No data to export");
            return;
        };
        let view = self.control_panel.settings.view;

        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name("indication_map.json")
            .save_file()
        else {
            return; // User cancelled
        };

        match write_map_json(&table, view, &path) {
            Ok(()) => {
                self.control_panel
                    .set_progress(100.0, &format!("Complete! Saved {}", path.display()));
            }
            Err(e) => {
                self.control_panel
                    .set_progress(0.0, &format!("Error: {}", e));
            }
        }
    }
}

impl eframe::App for IndimapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for background results
        self.check_load_results();
        self.check_build_results();

        // Request repaint while loading or building
        if self.is_loading || self.is_building {
            ctx.request_repaint();
        }

        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(300.0)
            .max_width(350.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.control_panel.show(ui);

                    match action {
                        ControlPanelAction::BrowseCsv => self.handle_browse_csv(),
                        ControlPanelAction::ViewChanged => self.handle_view_changed(),
                        ControlPanelAction::BuildMap => {
                            if !self.is_building {
                                self.start_build();
                            }
                        }
                        ControlPanelAction::ExportPng => self.handle_export_png(),
                        ControlPanelAction::ExportJson => self.handle_export_json(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - Map Viewer
        egui::CentralPanel::default().show(ctx, |ui| {
            self.map_viewer.show(ui);
        });
    }
}
