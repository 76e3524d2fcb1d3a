//! GUI module - dashboard window and panels

mod app;
mod panels;

pub use app::DashboardApp;
