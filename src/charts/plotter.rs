//! Chart Plotter Module
//! Draws the dashboard's chart panels using egui_plot.

use crate::data::{BarArtifact, TrendArtifact};
use egui::{Align2, Color32};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoint, PlotPoints, Points, Text};

const CHART_HEIGHT: f32 = 340.0;

/// Series colors for the trend chart: incidents blue, fatal accidents red.
const TREND_COLORS: [Color32; 2] = [
    Color32::from_rgb(52, 152, 219),
    Color32::from_rgb(231, 76, 60),
];

const BAR_COLOR: Color32 = Color32::from_rgb(135, 206, 235); // Sky blue

/// Palette cycled across the horizontal seat-km bars.
const HBAR_PALETTE: [Color32; 5] = [
    Color32::from_rgb(135, 206, 235), // Sky blue
    Color32::from_rgb(250, 128, 114), // Salmon
    Color32::from_rgb(144, 238, 144), // Light green
    Color32::from_rgb(255, 165, 0),   // Orange
    Color32::from_rgb(240, 128, 128), // Light coral
];

/// Renders view artifacts as interactive egui_plot charts.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Draw a multi-series line chart over a categorical airline axis,
    /// with each point labeled with its value.
    pub fn draw_trend_chart(ui: &mut egui::Ui, chart: &TrendArtifact) {
        let labels = chart.labels.clone();

        Plot::new(chart.title.clone())
            .height(CHART_HEIGHT)
            .legend(Legend::default())
            .allow_scroll(false)
            .x_axis_label("Airline")
            .y_axis_label("Count")
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round() as usize;
                if (mark.value - idx as f64).abs() < 1e-6 && idx < labels.len() {
                    labels[idx].clone()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                for (series_idx, series) in chart.series.iter().enumerate() {
                    let color = TREND_COLORS[series_idx % TREND_COLORS.len()];
                    let points_vec: Vec<[f64; 2]> = series
                        .values
                        .iter()
                        .enumerate()
                        .map(|(i, &v)| [i as f64, v])
                        .collect();

                    plot_ui.line(
                        Line::new(PlotPoints::from_iter(points_vec.iter().copied()))
                            .color(color)
                            .width(1.5)
                            .name(&series.name),
                    );
                    plot_ui.points(
                        Points::new(PlotPoints::from_iter(points_vec.iter().copied()))
                            .radius(3.0)
                            .color(color),
                    );

                    for &[x, y] in &points_vec {
                        plot_ui.text(
                            Text::new(PlotPoint::new(x, y), format!("{}", y as i64))
                                .anchor(Align2::CENTER_BOTTOM)
                                .color(color),
                        );
                    }
                }
            });
    }

    /// Draw a bar chart with one bar per airline and a value label on each
    /// bar. Horizontal artifacts put airlines on the y axis.
    pub fn draw_bar_chart(ui: &mut egui::Ui, chart: &BarArtifact) {
        let labels: Vec<String> = chart.bars.iter().map(|(name, _)| name.clone()).collect();
        let label_formatter = move |mark: egui_plot::GridMark, _range: &_| {
            let idx = mark.value.round() as usize;
            if (mark.value - idx as f64).abs() < 1e-6 && idx < labels.len() {
                labels[idx].clone()
            } else {
                String::new()
            }
        };

        let bars: Vec<Bar> = chart
            .bars
            .iter()
            .enumerate()
            .map(|(i, (name, value))| {
                let color = if chart.horizontal {
                    HBAR_PALETTE[i % HBAR_PALETTE.len()]
                } else {
                    BAR_COLOR
                };
                Bar::new(i as f64, *value).width(0.6).fill(color).name(name)
            })
            .collect();

        let mut plot = Plot::new(chart.title.clone())
            .height(CHART_HEIGHT)
            .allow_scroll(false);

        plot = if chart.horizontal {
            plot.x_axis_label(chart.value_label.clone())
                .y_axis_label(chart.category_label.clone())
                .y_axis_formatter(label_formatter)
        } else {
            plot.x_axis_label(chart.category_label.clone())
                .y_axis_label(chart.value_label.clone())
                .x_axis_formatter(label_formatter)
        };

        plot.show(ui, |plot_ui| {
            let mut bar_chart = BarChart::new(bars);
            if chart.horizontal {
                bar_chart = bar_chart.horizontal();
            }
            plot_ui.bar_chart(bar_chart);

            for (i, (_, value)) in chart.bars.iter().enumerate() {
                let (pos, anchor) = if chart.horizontal {
                    (PlotPoint::new(*value, i as f64), Align2::LEFT_CENTER)
                } else {
                    (PlotPoint::new(i as f64, *value), Align2::CENTER_BOTTOM)
                };
                plot_ui.text(Text::new(pos, format_count(*value)).anchor(anchor));
            }
        });
    }
}

/// Format a non-negative value with thousands separators, e.g. 1,234,567.
fn format_count(value: f64) -> String {
    let digits = (value as i64).to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
