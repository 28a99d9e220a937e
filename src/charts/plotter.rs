//! Chart Plotter Module
//! Creates the two summary visualizations: a categorical bar chart of the sex
//! breakdown (egui_plot) and an ethnicity pie chart (painter mesh).

use crate::stats::CategoryCount;
use egui::{Color32, RichText};
use egui_plot::{Bar, BarChart, Plot};

/// Color palette for categories
pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(52, 152, 219),  // Blue
    Color32::from_rgb(231, 76, 60),   // Red
    Color32::from_rgb(46, 204, 113),  // Green
    Color32::from_rgb(155, 89, 182),  // Purple
    Color32::from_rgb(243, 156, 18),  // Orange
    Color32::from_rgb(26, 188, 156),  // Teal
    Color32::from_rgb(233, 30, 99),   // Pink
    Color32::from_rgb(0, 188, 212),   // Cyan
    Color32::from_rgb(255, 87, 34),   // Deep Orange
    Color32::from_rgb(121, 85, 72),   // Brown
];

const PIE_HEIGHT: f32 = 320.0;
const BAR_HEIGHT: f32 = 320.0;

/// Creates the summary charts for a cleaned header.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Get color for a category by position.
    pub fn category_color(index: usize) -> Color32 {
        PALETTE[index % PALETTE.len()]
    }

    /// Draw the sex breakdown as a categorical bar chart.
    /// X-axis: sex categories, Y-axis: row counts.
    pub fn draw_sex_bar(ui: &mut egui::Ui, counts: &[CategoryCount]) {
        let x_labels: Vec<String> = counts.iter().map(|c| c.label.clone()).collect();

        let bars: Vec<Bar> = counts
            .iter()
            .enumerate()
            .map(|(i, c)| {
                Bar::new(i as f64, c.count as f64)
                    .width(0.6)
                    .fill(Self::category_color(i))
                    .name(&c.label)
            })
            .collect();

        Plot::new("sex_bar")
            .height(BAR_HEIGHT)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .x_axis_label("Sex of children")
            .y_axis_label("Count")
            .include_y(0.0)
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round() as usize;
                if (mark.value - idx as f64).abs() < 1e-6 && idx < x_labels.len() {
                    x_labels[idx].clone()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars));
            });
    }

    /// Draw the ethnicity distribution as a pie of proportional shares with a
    /// legend alongside. Categories with zero rows still get a legend entry.
    pub fn draw_ethnicity_pie(ui: &mut egui::Ui, counts: &[CategoryCount]) {
        let total: usize = counts.iter().map(|c| c.count).sum();
        if total == 0 {
            ui.label(RichText::new("No ethnicity values").color(Color32::GRAY));
            return;
        }

        ui.horizontal(|ui| {
            let (response, painter) = ui.allocate_painter(
                egui::vec2(PIE_HEIGHT, PIE_HEIGHT),
                egui::Sense::hover(),
            );
            let rect = response.rect;
            let center = rect.center();
            let radius = rect.width().min(rect.height()) / 2.0 - 8.0;

            // Wedges as triangle fans, starting at 12 o'clock
            let mut start_angle = -std::f32::consts::FRAC_PI_2;
            for (i, category) in counts.iter().enumerate() {
                let sweep = category.share(total) as f32 * std::f32::consts::TAU;
                if sweep <= 0.0 {
                    continue;
                }

                let color = Self::category_color(i);
                let steps = ((sweep / 0.05).ceil() as usize).max(1);

                let mut mesh = egui::Mesh::default();
                mesh.colored_vertex(center, color);
                for s in 0..=steps {
                    let angle = start_angle + sweep * s as f32 / steps as f32;
                    let point = center + radius * egui::vec2(angle.cos(), angle.sin());
                    mesh.colored_vertex(point, color);
                }
                for s in 0..steps as u32 {
                    mesh.add_triangle(0, s + 1, s + 2);
                }
                painter.add(egui::Shape::mesh(mesh));

                start_angle += sweep;
            }

            ui.add_space(12.0);

            // Legend with percentage labels
            ui.vertical(|ui| {
                for (i, category) in counts.iter().enumerate() {
                    ui.horizontal(|ui| {
                        let (rect, _) = ui
                            .allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                        ui.painter().rect_filled(rect, 3.0, Self::category_color(i));
                        ui.label(
                            RichText::new(format!(
                                "{} - {} ({:.1}%)",
                                category.label,
                                category.count,
                                category.share(total) * 100.0
                            ))
                            .size(13.0),
                        );
                    });
                    ui.add_space(4.0);
                }
            });
        });
    }
}
