//! Dashboard Application
//! Single scrollable page: title, column descriptions, the time-range
//! control and the fixed sequence of table/chart panels.

use crate::charts::ChartPlotter;
use crate::data::{
    self, BarArtifact, SafetyTable, TableArtifact, TimeRange, TrendArtifact, ViewError,
};
use crate::gui::panels;
use egui::{CollapsingHeader, RichText, ScrollArea};
use tracing::error;

/// How many airlines the top/bottom ranking panels show.
const TOP_N: usize = 5;

/// Main application window. The table is immutable; every panel below the
/// time-range control is a precomputed artifact, and only the two
/// range-bound artifacts are recomputed when the control changes.
pub struct DashboardApp {
    table: SafetyTable,
    range: TimeRange,

    // Range-bound panels (views 1 and 2)
    never_incident: TableArtifact,
    never_incident_in_range: TableArtifact,

    // Fixed panels
    never_incident_00_14: TableArtifact,
    never_fatal_accident: TableArtifact,
    trend_zero_fatal_85_99: TrendArtifact,
    top_deadliest: BarArtifact,
    bottom_deadliest: BarArtifact,
    top_seat_km: BarArtifact,
}

impl DashboardApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        table: SafetyTable,
    ) -> Result<Self, ViewError> {
        let range = TimeRange::default();

        Ok(Self {
            never_incident: data::never_incident(&table, range)?,
            never_incident_in_range: data::never_incident_in(&table, range)?,
            never_incident_00_14: data::never_incident_00_14(&table)?,
            never_fatal_accident: data::never_fatal_accident(&table)?,
            trend_zero_fatal_85_99: data::incident_trend_zero_fatal_85_99(&table)?,
            top_deadliest: data::top_deadliest(&table, TOP_N)?,
            bottom_deadliest: data::bottom_deadliest(&table, TOP_N)?,
            top_seat_km: data::top_seat_km(&table, TOP_N)?,
            table,
            range,
        })
    }

    /// Recompute the two panels bound to the time-range control. The other
    /// panels are untouched. On a view error the previous artifact stays.
    fn refresh_range_views(&mut self) {
        match data::never_incident(&self.table, self.range) {
            Ok(artifact) => self.never_incident = artifact,
            Err(e) => error!("never-incident view failed: {e}"),
        }
        match data::never_incident_in(&self.table, self.range) {
            Ok(artifact) => self.never_incident_in_range = artifact,
            Err(e) => error!("never-incident-in-period view failed: {e}"),
        }
    }

    fn section_header(ui: &mut egui::Ui, title: &str) {
        ui.add_space(18.0);
        ui.label(RichText::new(title).size(16.0).strong());
        ui.add_space(6.0);
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                ui.add_space(8.0);
                ui.heading(RichText::new("Airline Safety Dashboard").size(24.0));
                ui.add_space(10.0);

                CollapsingHeader::new("Column descriptions")
                    .default_open(false)
                    .show(ui, panels::draw_descriptions);

                ui.add_space(12.0);
                ui.separator();

                // Time-range control, bound to the two panels right below it
                let previous = self.range;
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Year range:").strong());
                    ui.radio_value(
                        &mut self.range,
                        TimeRange::Y1985To1999,
                        TimeRange::Y1985To1999.label(),
                    );
                    ui.radio_value(
                        &mut self.range,
                        TimeRange::Y2000To2014,
                        TimeRange::Y2000To2014.label(),
                    );
                });
                if self.range != previous {
                    self.refresh_range_views();
                }

                // View 1, collapsible like the original expander
                Self::section_header(ui, &self.never_incident.title);
                CollapsingHeader::new("Show table")
                    .id_salt("never_incident_expander")
                    .default_open(true)
                    .show(ui, |ui| panels::draw_table(ui, &self.never_incident));

                // View 2
                Self::section_header(ui, &self.never_incident_in_range.title);
                panels::draw_table(ui, &self.never_incident_in_range);

                // View 3
                Self::section_header(ui, &self.never_incident_00_14.title);
                panels::draw_table(ui, &self.never_incident_00_14);

                // View 4
                Self::section_header(ui, &self.never_fatal_accident.title);
                panels::draw_table(ui, &self.never_fatal_accident);

                // View 5
                Self::section_header(ui, &self.trend_zero_fatal_85_99.title);
                ChartPlotter::draw_trend_chart(ui, &self.trend_zero_fatal_85_99);

                // Views 7-9
                Self::section_header(ui, &self.top_deadliest.title);
                ChartPlotter::draw_bar_chart(ui, &self.top_deadliest);

                Self::section_header(ui, &self.bottom_deadliest.title);
                ChartPlotter::draw_bar_chart(ui, &self.bottom_deadliest);

                Self::section_header(ui, &self.top_seat_km.title);
                ChartPlotter::draw_bar_chart(ui, &self.top_seat_km);

                ui.add_space(20.0);
            });
        });
    }
}
