//! Dashboard Panels
//! Table rendering and the static description panel text.

use crate::data::TableArtifact;
use egui::RichText;

/// Static description of the dataset columns, shown in the collapsible
/// panel at the top of the page. The asterisk marking follows the dataset.
pub const COLUMN_DESCRIPTIONS: [(&str, &str); 8] = [
    ("airline", "airline name (an asterisk means regional subsidiaries are included)"),
    ("avail_seat_km_per_week", "available seat-kilometers flown every week"),
    ("incidents_85_99", "total number of incidents, 1985-1999"),
    ("fatal_accidents_85_99", "total number of fatal accidents, 1985-1999"),
    ("fatalities_85_99", "total number of fatalities, 1985-1999"),
    ("incidents_00_14", "total number of incidents, 2000-2014"),
    ("fatal_accidents_00_14", "total number of fatal accidents, 2000-2014"),
    ("fatalities_00_14", "total number of fatalities, 2000-2014"),
];

/// Draw the column-description list.
pub fn draw_descriptions(ui: &mut egui::Ui) {
    for (column, description) in COLUMN_DESCRIPTIONS {
        ui.horizontal_wrapped(|ui| {
            ui.label(RichText::new(column).strong().size(12.0));
            ui.label(RichText::new(format!(": {description}")).size(12.0));
        });
    }
}

/// Draw a table artifact as a striped grid. An artifact with no rows still
/// shows its header row, plus a dimmed placeholder line.
pub fn draw_table(ui: &mut egui::Ui, table: &TableArtifact) {
    egui::Frame::none()
        .fill(ui.visuals().widgets.noninteractive.bg_fill)
        .rounding(5.0)
        .inner_margin(8.0)
        .show(ui, |ui| {
            egui::Grid::new(ui.make_persistent_id(&table.title))
                .striped(true)
                .min_col_width(140.0)
                .spacing([16.0, 4.0])
                .show(ui, |ui| {
                    for column in &table.columns {
                        ui.label(RichText::new(column).strong().size(12.0));
                    }
                    ui.end_row();

                    for row in &table.rows {
                        for cell in row {
                            ui.label(RichText::new(cell).size(12.0));
                        }
                        ui.end_row();
                    }
                });

            if table.rows.is_empty() {
                ui.label(RichText::new("No matching airlines").weak().italics());
            }
        });
}
