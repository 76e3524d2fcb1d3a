//! View Generator Module
//! Pure filter/aggregation views over the loaded safety table. Each view
//! takes the immutable table and returns a renderable artifact; nothing
//! here mutates shared state.

use polars::prelude::*;
use thiserror::Error;

use super::loader::{
    SafetyTable, AIRLINE, FATAL_ACCIDENTS_00_14, FATAL_ACCIDENTS_85_99, INCIDENTS_00_14,
    INCIDENTS_85_99,
};

#[derive(Error, Debug)]
pub enum ViewError {
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
    #[error("Loader error: {0}")]
    Loader(#[from] super::loader::LoaderError),
}

/// The two reporting periods of the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    #[default]
    Y1985To1999,
    Y2000To2014,
}

impl TimeRange {
    /// Column suffix as it appears in the dataset.
    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::Y1985To1999 => "85_99",
            TimeRange::Y2000To2014 => "00_14",
        }
    }

    /// Human-readable span for panel titles.
    pub fn span(&self) -> &'static str {
        match self {
            TimeRange::Y1985To1999 => "1985 and 1999",
            TimeRange::Y2000To2014 => "2000 and 2014",
        }
    }

    pub fn incidents_column(&self) -> &'static str {
        match self {
            TimeRange::Y1985To1999 => INCIDENTS_85_99,
            TimeRange::Y2000To2014 => INCIDENTS_00_14,
        }
    }
}

/// A table panel: header row plus stringified cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableArtifact {
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// One line series of a trend chart.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendSeries {
    pub name: String,
    pub values: Vec<f64>,
}

/// A line chart over a categorical axis (one label per airline).
#[derive(Debug, Clone, PartialEq)]
pub struct TrendArtifact {
    pub title: String,
    pub labels: Vec<String>,
    pub series: Vec<TrendSeries>,
}

/// A bar chart panel. `horizontal` flips the bars on their side, with the
/// category labels on the y axis.
#[derive(Debug, Clone, PartialEq)]
pub struct BarArtifact {
    pub title: String,
    pub value_label: String,
    pub category_label: String,
    pub bars: Vec<(String, f64)>,
    pub horizontal: bool,
}

/// View 1: airlines that never had an incident, range-dependent.
///
/// The 85-99 variant requires a clean record across both periods and shows
/// both incident columns; the 00-14 variant only looks at the later period.
pub fn never_incident(table: &SafetyTable, range: TimeRange) -> Result<TableArtifact, ViewError> {
    match range {
        TimeRange::Y1985To1999 => {
            let df = table
                .frame()
                .clone()
                .lazy()
                .filter(
                    col(INCIDENTS_85_99)
                        .eq(lit(0))
                        .and(col(INCIDENTS_00_14).eq(lit(0))),
                )
                .select([col(AIRLINE), col(INCIDENTS_85_99), col(INCIDENTS_00_14)])
                .collect()?;
            to_table("Airlines with no incidents between 1985 and 2014", &df)
        }
        TimeRange::Y2000To2014 => {
            let df = table
                .frame()
                .clone()
                .lazy()
                .filter(col(INCIDENTS_00_14).eq(lit(0)))
                .select([col(AIRLINE), col(INCIDENTS_00_14)])
                .collect()?;
            to_table("Airlines with no incidents between 2000 and 2014", &df)
        }
    }
}

/// View 2: airlines with no incidents in the selected period only.
pub fn never_incident_in(
    table: &SafetyTable,
    range: TimeRange,
) -> Result<TableArtifact, ViewError> {
    let column = range.incidents_column();
    let df = table
        .frame()
        .clone()
        .lazy()
        .filter(col(column).eq(lit(0)))
        .select([col(AIRLINE), col(column)])
        .collect()?;
    to_table(
        &format!("Airlines with no incidents between {}", range.span()),
        &df,
    )
}

/// View 3: airlines with no incidents between 2000 and 2014, fixed.
pub fn never_incident_00_14(table: &SafetyTable) -> Result<TableArtifact, ViewError> {
    let df = table
        .frame()
        .clone()
        .lazy()
        .filter(col(INCIDENTS_00_14).eq(lit(0)))
        .select([col(AIRLINE), col(INCIDENTS_00_14)])
        .collect()?;
    to_table("Airlines with no incidents between 2000 and 2014", &df)
}

/// View 4: airlines with no fatal accident in either period.
pub fn never_fatal_accident(table: &SafetyTable) -> Result<TableArtifact, ViewError> {
    let df = table
        .frame()
        .clone()
        .lazy()
        .filter(
            col(FATAL_ACCIDENTS_85_99)
                .eq(lit(0))
                .and(col(FATAL_ACCIDENTS_00_14).eq(lit(0))),
        )
        .select([
            col(AIRLINE),
            col(FATAL_ACCIDENTS_85_99),
            col(FATAL_ACCIDENTS_00_14),
        ])
        .collect()?;
    to_table("Airlines with no fatal accident between 1985 and 2014", &df)
}

/// View 5: incident and fatal-accident counts for airlines with zero fatal
/// accidents in 1985-1999, as two line series.
pub fn incident_trend_zero_fatal_85_99(table: &SafetyTable) -> Result<TrendArtifact, ViewError> {
    let df = table
        .frame()
        .clone()
        .lazy()
        .filter(col(FATAL_ACCIDENTS_85_99).eq(lit(0)))
        .select([col(AIRLINE), col(INCIDENTS_85_99), col(FATAL_ACCIDENTS_85_99)])
        .collect()?;

    let labels: Vec<String> = df
        .column(AIRLINE)?
        .str()?
        .into_iter()
        .map(|v| v.unwrap_or_default().to_string())
        .collect();

    let series = [INCIDENTS_85_99, FATAL_ACCIDENTS_85_99]
        .iter()
        .copied()
        .map(|name| {
            let values = df
                .column(name)?
                .i64()?
                .into_iter()
                .map(|v| v.unwrap_or_default() as f64)
                .collect();
            Ok(TrendSeries {
                name: name.to_string(),
                values,
            })
        })
        .collect::<Result<Vec<_>, ViewError>>()?;

    Ok(TrendArtifact {
        title: "Fatal accidents vs total incidents between 1985 and 1999".to_string(),
        labels,
        series,
    })
}

/// View 7: the `n` airlines with the most total fatalities, descending.
///
/// Selection is a stable sort on the value only, so ties keep dataset
/// row order.
pub fn top_deadliest(table: &SafetyTable, n: usize) -> Result<BarArtifact, ViewError> {
    let mut rows: Vec<(String, i64)> = table
        .records()?
        .into_iter()
        .map(|r| (r.airline, r.total_fatalities))
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1));
    rows.truncate(n);

    Ok(BarArtifact {
        title: format!("Top {n} airlines by fatalities between 1985 and 2014"),
        value_label: "Total fatalities".to_string(),
        category_label: "Airline".to_string(),
        bars: rows.into_iter().map(|(name, v)| (name, v as f64)).collect(),
        horizontal: false,
    })
}

/// View 8: the `n` airlines with the fewest total fatalities, ascending.
pub fn bottom_deadliest(table: &SafetyTable, n: usize) -> Result<BarArtifact, ViewError> {
    let mut rows: Vec<(String, i64)> = table
        .records()?
        .into_iter()
        .map(|r| (r.airline, r.total_fatalities))
        .collect();
    rows.sort_by(|a, b| a.1.cmp(&b.1));
    rows.truncate(n);

    Ok(BarArtifact {
        title: format!("Top {n} airlines by fewest fatalities between 1985 and 2014"),
        value_label: "Total fatalities".to_string(),
        category_label: "Airline".to_string(),
        bars: rows.into_iter().map(|(name, v)| (name, v as f64)).collect(),
        horizontal: false,
    })
}

/// View 9: the `n` airlines with the most weekly seat-kilometers, displayed
/// ascending as horizontal bars.
pub fn top_seat_km(table: &SafetyTable, n: usize) -> Result<BarArtifact, ViewError> {
    let mut rows: Vec<(String, i64)> = table
        .records()?
        .into_iter()
        .map(|r| (r.airline, r.avail_seat_km_per_week))
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1));
    rows.truncate(n);
    // Largest at the top of the horizontal chart.
    rows.reverse();

    Ok(BarArtifact {
        title: format!("Top {n} airlines by available seat-kilometers per week"),
        value_label: "Seat-kilometers per week".to_string(),
        category_label: "Airline".to_string(),
        bars: rows.into_iter().map(|(name, v)| (name, v as f64)).collect(),
        horizontal: true,
    })
}

/// Stringify a projected DataFrame into a table artifact. An empty frame
/// yields an artifact with headers and zero rows.
fn to_table(title: &str, df: &DataFrame) -> Result<TableArtifact, ViewError> {
    let columns: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    let mut rows = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let mut row = Vec::with_capacity(df.width());
        for column in df.get_columns() {
            let val = column.get(i)?;
            if val.is_null() {
                row.push(String::new());
            } else {
                row.push(val.to_string().trim_matches('"').to_string());
            }
        }
        rows.push(row);
    }

    Ok(TableArtifact {
        title: title.to_string(),
        columns,
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::{FATALITIES_00_14, FATALITIES_85_99, SEAT_KM};

    fn sample_table() -> SafetyTable {
        let df = df![
            AIRLINE => ["Alpha Air", "Bravo Air", "Charlie Air", "Delta Air", "Echo Air", "Foxtrot Air"],
            SEAT_KM => [100i64, 600, 300, 400, 500, 200],
            INCIDENTS_85_99 => [0i64, 3, 1, 0, 2, 5],
            FATAL_ACCIDENTS_85_99 => [0i64, 0, 1, 0, 2, 3],
            FATALITIES_85_99 => [0i64, 0, 10, 0, 50, 200],
            INCIDENTS_00_14 => [0i64, 0, 2, 1, 0, 4],
            FATAL_ACCIDENTS_00_14 => [0i64, 0, 0, 1, 0, 2],
            FATALITIES_00_14 => [0i64, 0, 0, 5, 0, 100],
        ]
        .unwrap();
        SafetyTable::from_frame(df).unwrap()
    }

    fn airlines(table: &TableArtifact) -> Vec<&str> {
        table.rows.iter().map(|row| row[0].as_str()).collect()
    }

    #[test]
    fn total_fatalities_is_sum_of_periods() {
        for r in sample_table().records().unwrap() {
            assert_eq!(r.total_fatalities, r.fatalities_85_99 + r.fatalities_00_14);
        }
    }

    #[test]
    fn never_incident_combined_requires_both_periods_clean() {
        let table = sample_table();

        let combined = never_incident(&table, TimeRange::Y1985To1999).unwrap();
        assert_eq!(airlines(&combined), ["Alpha Air"]);
        assert_eq!(
            combined.columns,
            [AIRLINE, INCIDENTS_85_99, INCIDENTS_00_14]
        );

        let later = never_incident(&table, TimeRange::Y2000To2014).unwrap();
        assert_eq!(airlines(&later), ["Alpha Air", "Bravo Air", "Echo Air"]);
        assert_eq!(later.columns, [AIRLINE, INCIDENTS_00_14]);

        // Every combined-view airline also appears in the 00-14 view.
        for name in airlines(&combined) {
            assert!(airlines(&later).contains(&name));
        }
    }

    #[test]
    fn never_incident_in_selected_period() {
        let table = sample_table();

        let early = never_incident_in(&table, TimeRange::Y1985To1999).unwrap();
        assert_eq!(airlines(&early), ["Alpha Air", "Delta Air"]);
        assert_eq!(early.columns, [AIRLINE, INCIDENTS_85_99]);

        let later = never_incident_in(&table, TimeRange::Y2000To2014).unwrap();
        assert_eq!(airlines(&later), ["Alpha Air", "Bravo Air", "Echo Air"]);
    }

    #[test]
    fn fixed_00_14_view_matches_period_filter() {
        let table = sample_table();
        let fixed = never_incident_00_14(&table).unwrap();

        assert_eq!(airlines(&fixed), ["Alpha Air", "Bravo Air", "Echo Air"]);
        assert_eq!(fixed.columns, [AIRLINE, INCIDENTS_00_14]);
    }

    #[test]
    fn never_fatal_accident_requires_both_counts_zero() {
        let view = never_fatal_accident(&sample_table()).unwrap();

        assert_eq!(airlines(&view), ["Alpha Air", "Bravo Air"]);
        assert_eq!(
            view.columns,
            [AIRLINE, FATAL_ACCIDENTS_85_99, FATAL_ACCIDENTS_00_14]
        );
    }

    #[test]
    fn trend_covers_zero_fatal_85_99_airlines() {
        let trend = incident_trend_zero_fatal_85_99(&sample_table()).unwrap();

        assert_eq!(trend.labels, ["Alpha Air", "Bravo Air", "Delta Air"]);
        assert_eq!(trend.series.len(), 2);
        assert_eq!(trend.series[0].name, INCIDENTS_85_99);
        assert_eq!(trend.series[0].values, [0.0, 3.0, 0.0]);
        assert_eq!(trend.series[1].values, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn top_deadliest_sorts_descending_with_stable_ties() {
        let view = top_deadliest(&sample_table(), 5).unwrap();

        assert_eq!(view.bars.len(), 5);
        let names: Vec<&str> = view.bars.iter().map(|(n, _)| n.as_str()).collect();
        // Alpha and Bravo tie at zero; Alpha comes first in the dataset.
        assert_eq!(
            names,
            ["Foxtrot Air", "Echo Air", "Charlie Air", "Delta Air", "Alpha Air"]
        );
        let values: Vec<f64> = view.bars.iter().map(|(_, v)| *v).collect();
        assert!(values.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn bottom_deadliest_sorts_ascending_with_stable_ties() {
        let view = bottom_deadliest(&sample_table(), 5).unwrap();

        let names: Vec<&str> = view.bars.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(
            names,
            ["Alpha Air", "Bravo Air", "Delta Air", "Charlie Air", "Echo Air"]
        );
        let values: Vec<f64> = view.bars.iter().map(|(_, v)| *v).collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn top_seat_km_selects_largest_displays_ascending() {
        let view = top_seat_km(&sample_table(), 5).unwrap();

        assert!(view.horizontal);
        let names: Vec<&str> = view.bars.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(
            names,
            ["Foxtrot Air", "Charlie Air", "Delta Air", "Echo Air", "Bravo Air"]
        );
        let values: Vec<f64> = view.bars.iter().map(|(_, v)| *v).collect();
        assert_eq!(values, [200.0, 300.0, 400.0, 500.0, 600.0]);
    }

    #[test]
    fn short_tables_yield_short_bar_charts() {
        let df = df![
            AIRLINE => ["Alpha Air", "Bravo Air"],
            SEAT_KM => [100i64, 200],
            INCIDENTS_85_99 => [1i64, 2],
            FATAL_ACCIDENTS_85_99 => [1i64, 1],
            FATALITIES_85_99 => [5i64, 6],
            INCIDENTS_00_14 => [1i64, 2],
            FATAL_ACCIDENTS_00_14 => [1i64, 1],
            FATALITIES_00_14 => [0i64, 0],
        ]
        .unwrap();
        let table = SafetyTable::from_frame(df).unwrap();

        assert_eq!(top_deadliest(&table, 5).unwrap().bars.len(), 2);
        assert_eq!(bottom_deadliest(&table, 5).unwrap().bars.len(), 2);
    }

    #[test]
    fn empty_filter_results_render_empty() {
        let df = df![
            AIRLINE => ["Alpha Air", "Bravo Air"],
            SEAT_KM => [100i64, 200],
            INCIDENTS_85_99 => [1i64, 2],
            FATAL_ACCIDENTS_85_99 => [1i64, 1],
            FATALITIES_85_99 => [5i64, 6],
            INCIDENTS_00_14 => [1i64, 2],
            FATAL_ACCIDENTS_00_14 => [1i64, 1],
            FATALITIES_00_14 => [0i64, 0],
        ]
        .unwrap();
        let table = SafetyTable::from_frame(df).unwrap();

        let view = never_incident(&table, TimeRange::Y2000To2014).unwrap();
        assert!(view.rows.is_empty());
        assert_eq!(view.columns, [AIRLINE, INCIDENTS_00_14]);

        let trend = incident_trend_zero_fatal_85_99(&table).unwrap();
        assert!(trend.labels.is_empty());
        assert!(trend.series.iter().all(|s| s.values.is_empty()));
    }

    #[test]
    fn range_toggle_leaves_fixed_views_unchanged() {
        let table = sample_table();

        // Only the two range-bound views take the toggle; recomputing the
        // fixed views around a range switch must be a no-op.
        let before = (
            never_incident_00_14(&table).unwrap(),
            never_fatal_accident(&table).unwrap(),
            incident_trend_zero_fatal_85_99(&table).unwrap(),
            top_deadliest(&table, 5).unwrap(),
            bottom_deadliest(&table, 5).unwrap(),
            top_seat_km(&table, 5).unwrap(),
        );

        let switched = never_incident(&table, TimeRange::Y2000To2014).unwrap();
        assert_ne!(
            switched,
            never_incident(&table, TimeRange::Y1985To1999).unwrap()
        );

        let after = (
            never_incident_00_14(&table).unwrap(),
            never_fatal_accident(&table).unwrap(),
            incident_trend_zero_fatal_85_99(&table).unwrap(),
            top_deadliest(&table, 5).unwrap(),
            bottom_deadliest(&table, 5).unwrap(),
            top_seat_km(&table, 5).unwrap(),
        );
        assert_eq!(before, after);
    }
}
