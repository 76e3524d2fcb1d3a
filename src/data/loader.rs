//! Dataset Loader Module
//! Loads the airline safety CSV into an immutable table using Polars.

use polars::prelude::*;
use thiserror::Error;

/// Column names of the airline safety dataset.
pub const AIRLINE: &str = "airline";
pub const SEAT_KM: &str = "avail_seat_km_per_week";
pub const INCIDENTS_85_99: &str = "incidents_85_99";
pub const FATAL_ACCIDENTS_85_99: &str = "fatal_accidents_85_99";
pub const FATALITIES_85_99: &str = "fatalities_85_99";
pub const INCIDENTS_00_14: &str = "incidents_00_14";
pub const FATAL_ACCIDENTS_00_14: &str = "fatal_accidents_00_14";
pub const FATALITIES_00_14: &str = "fatalities_00_14";
/// Derived at load time: fatalities_85_99 + fatalities_00_14.
pub const TOTAL_FATALITIES: &str = "total_fatalities";

/// Columns the input file must provide.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    AIRLINE,
    SEAT_KM,
    INCIDENTS_85_99,
    FATAL_ACCIDENTS_85_99,
    FATALITIES_85_99,
    INCIDENTS_00_14,
    FATAL_ACCIDENTS_00_14,
    FATALITIES_00_14,
];

const COUNT_COLUMNS: [&str; 7] = [
    SEAT_KM,
    INCIDENTS_85_99,
    FATAL_ACCIDENTS_85_99,
    FATALITIES_85_99,
    INCIDENTS_00_14,
    FATAL_ACCIDENTS_00_14,
    FATALITIES_00_14,
];

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("Dataset is missing required columns: {0}")]
    MissingColumns(String),
}

/// One airline's safety statistics, with the derived fatality total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafetyRecord {
    pub airline: String,
    pub avail_seat_km_per_week: i64,
    pub incidents_85_99: i64,
    pub fatal_accidents_85_99: i64,
    pub fatalities_85_99: i64,
    pub incidents_00_14: i64,
    pub fatal_accidents_00_14: i64,
    pub fatalities_00_14: i64,
    pub total_fatalities: i64,
}

/// The loaded airline safety table. Immutable after construction; the
/// derived total_fatalities column is appended exactly once, here.
#[derive(Debug, Clone)]
pub struct SafetyTable {
    df: DataFrame,
}

impl SafetyTable {
    /// Load the dataset CSV. One-shot startup operation, no retry; a missing
    /// file, missing columns or non-numeric counts all fail the load.
    pub fn load(path: &str) -> Result<Self, LoaderError> {
        let df = LazyCsvReader::new(path)
            .with_infer_schema_length(Some(10000))
            .finish()?
            .collect()?;

        Self::from_frame(df)
    }

    /// Validate required columns, normalize count dtypes and append the
    /// derived total_fatalities column.
    pub fn from_frame(df: DataFrame) -> Result<Self, LoaderError> {
        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|name| df.column(name).is_err())
            .collect();
        if !missing.is_empty() {
            return Err(LoaderError::MissingColumns(missing.join(", ")));
        }

        let df = df
            .lazy()
            .with_columns(COUNT_COLUMNS.map(|name| col(name).cast(DataType::Int64)))
            .with_column(
                (col(FATALITIES_85_99) + col(FATALITIES_00_14)).alias(TOTAL_FATALITIES),
            )
            .collect()?;

        Ok(Self { df })
    }

    /// Get a reference to the underlying DataFrame.
    pub fn frame(&self) -> &DataFrame {
        &self.df
    }

    /// Number of airlines in the table.
    pub fn len(&self) -> usize {
        self.df.height()
    }

    pub fn is_empty(&self) -> bool {
        self.df.height() == 0
    }

    /// Extract typed records in dataset row order.
    pub fn records(&self) -> Result<Vec<SafetyRecord>, LoaderError> {
        let airline = self.df.column(AIRLINE)?.str()?.clone();
        let seat_km = self.df.column(SEAT_KM)?.i64()?.clone();
        let incidents_85_99 = self.df.column(INCIDENTS_85_99)?.i64()?.clone();
        let fatal_accidents_85_99 = self.df.column(FATAL_ACCIDENTS_85_99)?.i64()?.clone();
        let fatalities_85_99 = self.df.column(FATALITIES_85_99)?.i64()?.clone();
        let incidents_00_14 = self.df.column(INCIDENTS_00_14)?.i64()?.clone();
        let fatal_accidents_00_14 = self.df.column(FATAL_ACCIDENTS_00_14)?.i64()?.clone();
        let fatalities_00_14 = self.df.column(FATALITIES_00_14)?.i64()?.clone();
        let total_fatalities = self.df.column(TOTAL_FATALITIES)?.i64()?.clone();

        let mut records = Vec::with_capacity(self.df.height());
        for i in 0..self.df.height() {
            records.push(SafetyRecord {
                airline: airline.get(i).unwrap_or_default().to_string(),
                avail_seat_km_per_week: seat_km.get(i).unwrap_or_default(),
                incidents_85_99: incidents_85_99.get(i).unwrap_or_default(),
                fatal_accidents_85_99: fatal_accidents_85_99.get(i).unwrap_or_default(),
                fatalities_85_99: fatalities_85_99.get(i).unwrap_or_default(),
                incidents_00_14: incidents_00_14.get(i).unwrap_or_default(),
                fatal_accidents_00_14: fatal_accidents_00_14.get(i).unwrap_or_default(),
                fatalities_00_14: fatalities_00_14.get(i).unwrap_or_default(),
                total_fatalities: total_fatalities.get(i).unwrap_or_default(),
            });
        }

        Ok(records)
    }
}
