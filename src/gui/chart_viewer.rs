//! Chart Viewer Widget
//! Central scrollable panel showing the two summary charts for the current
//! upload: sex breakdown bar chart and ethnicity pie chart.

use crate::charts::ChartPlotter;
use crate::stats::HeaderSummary;
use egui::{RichText, ScrollArea};

const CARD_SPACING: f32 = 15.0;

/// Scrollable chart display area. Idle until a header has been uploaded.
pub struct ChartViewer {
    summary: HeaderSummary,
}

impl Default for ChartViewer {
    fn default() -> Self {
        Self {
            summary: HeaderSummary::default(),
        }
    }
}

impl ChartViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the current charts
    pub fn clear(&mut self) {
        self.summary = HeaderSummary::default();
    }

    /// Replace the displayed summary after a pipeline run
    pub fn set_summary(&mut self, summary: HeaderSummary) {
        self.summary = summary;
    }

    /// Draw the chart viewer
    pub fn show(&mut self, ui: &mut egui::Ui) {
        if self.summary.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No data").size(20.0));
            });
            return;
        }

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                Self::draw_chart_card(ui, "Breakdown by sex of 903 data", |ui| {
                    ChartPlotter::draw_sex_bar(ui, &self.summary.sex);
                });

                ui.add_space(CARD_SPACING);

                Self::draw_chart_card(ui, "Ethnicity shares", |ui| {
                    ChartPlotter::draw_ethnicity_pie(ui, &self.summary.ethnicity);
                });

                ui.add_space(CARD_SPACING);
            });
    }

    /// Draw a single titled chart card
    fn draw_chart_card(ui: &mut egui::Ui, title: &str, add_chart: impl FnOnce(&mut egui::Ui)) {
        egui::Frame::none()
            .rounding(8.0)
            .stroke(egui::Stroke::new(1.5, ui.visuals().widgets.noninteractive.bg_stroke.color))
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width() - 20.0);

                ui.vertical(|ui| {
                    ui.label(RichText::new(title).size(16.0).strong());
                    ui.add_space(8.0);
                    add_chart(ui);
                });
            });
    }
}
