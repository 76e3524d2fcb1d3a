//! Data module - dataset loading and view generation

mod loader;
mod views;

pub use loader::{LoaderError, SafetyRecord, SafetyTable};
pub use views::{
    bottom_deadliest, incident_trend_zero_fatal_85_99, never_fatal_accident, never_incident,
    never_incident_00_14, never_incident_in, top_deadliest, top_seat_km, BarArtifact,
    TableArtifact, TimeRange, TrendArtifact, TrendSeries, ViewError,
};
