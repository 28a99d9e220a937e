//! 903 Header Analyzer Main Application
//! Main window with control panel and chart viewer.

use crate::data::{DataLoader, HeaderCleaner};
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction};
use crate::stats::{HeaderSummary, SummaryCalculator};
use anyhow::Context;
use chrono::Local;
use egui::SidePanel;
use polars::prelude::DataFrame;
use std::sync::mpsc::{channel, Receiver};
use std::thread;

/// Pipeline result from background thread
enum PipelineResult {
    Progress(String),
    Complete {
        df: DataFrame,
        summary: HeaderSummary,
    },
    Error(String),
}

/// Main application window.
pub struct HeaderApp {
    loader: DataLoader,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,

    // Async pipeline run
    pipeline_rx: Option<Receiver<PipelineResult>>,
    is_running: bool,
}

impl HeaderApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            loader: DataLoader::new(),
            control_panel: ControlPanel::new(),
            chart_viewer: ChartViewer::new(),
            pipeline_rx: None,
            is_running: false,
        }
    }

    /// Run the full load -> clean -> summarize pipeline for one upload.
    /// The reference date for age computation is taken fresh per run.
    fn run_pipeline(path: &str) -> anyhow::Result<(DataFrame, HeaderSummary)> {
        let mut loader = DataLoader::new();
        loader.load_csv(path).context("file could not be read")?;
        let df = loader
            .get_dataframe()
            .cloned()
            .context("file could not be read")?;

        let reference_date = Local::now().date_naive();
        let cleaned =
            HeaderCleaner::clean(&df, reference_date).context("header could not be cleaned")?;
        let summary =
            SummaryCalculator::summarize(&cleaned).context("charts could not be computed")?;

        Ok((df, summary))
    }

    /// Handle CSV file selection - the pipeline runs on a background thread
    fn handle_browse_csv(&mut self) {
        if self.is_running {
            return; // Already running
        }

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        {
            // Clear previous charts
            self.chart_viewer.clear();
            self.control_panel.csv_path = Some(path.clone());
            self.control_panel.set_progress(0.0, "Loading CSV file...");
            self.is_running = true;

            let (tx, rx) = channel();
            self.pipeline_rx = Some(rx);

            let path_str = path.to_string_lossy().to_string();

            thread::spawn(move || {
                let _ = tx.send(PipelineResult::Progress("Reading CSV file...".to_string()));

                match Self::run_pipeline(&path_str) {
                    Ok((df, summary)) => {
                        let _ = tx.send(PipelineResult::Complete { df, summary });
                    }
                    Err(e) => {
                        let _ = tx.send(PipelineResult::Error(format!("Upload failed: {:#}", e)));
                    }
                }
            });
        }
    }

    /// Check for pipeline results
    fn check_pipeline_results(&mut self) {
        let rx = self.pipeline_rx.take();
        if let Some(rx) = rx {
            let mut should_keep_receiver = true;

            while let Ok(result) = rx.try_recv() {
                match result {
                    PipelineResult::Progress(status) => {
                        self.control_panel.set_progress(30.0, &status);
                    }
                    PipelineResult::Complete { df, summary } => {
                        self.loader.set_dataframe(df);
                        self.chart_viewer.set_summary(summary);
                        self.control_panel.set_progress(
                            100.0,
                            &format!(
                                "File successfully uploaded ({} rows, {} columns)",
                                self.loader.get_row_count(),
                                self.loader.get_columns().len()
                            ),
                        );
                        self.is_running = false;
                        should_keep_receiver = false;
                    }
                    PipelineResult::Error(error) => {
                        self.control_panel.set_progress(0.0, &error);
                        self.is_running = false;
                        should_keep_receiver = false;
                    }
                }
            }

            if should_keep_receiver {
                self.pipeline_rx = Some(rx);
            }
        }
    }
}

impl eframe::App for HeaderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for background results
        self.check_pipeline_results();

        // Request repaint while the pipeline is running
        if self.is_running {
            ctx.request_repaint();
        }

        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(260.0)
            .max_width(320.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.control_panel.show(ui);

                    match action {
                        ControlPanelAction::BrowseCsv => self.handle_browse_csv(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - Chart Viewer
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui);
        });
    }
}
