//! Charts module - chart drawing

mod plotter;

pub use plotter::ChartPlotter;
