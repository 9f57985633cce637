//! Reader for the whitespace-delimited response-table text format.
//!
//! ```text
//! DATE        T_START                  WAVE_STR  WAVELNTH  EFF_AREA
//! 2010-03-24  2010-05-01T00:00:00.000  171_THIN  171       2.8412
//! 2010-03-24  2010-05-01T00:00:00.000  193_THIN  193       2.0413
//! ```
//!
//! The first non-blank, non-comment line names the columns.  Only the
//! wavelength, effective-area and timestamp columns are read; everything
//! else is ignored.

use crate::table::{CalibrationRecord, CalibrationTable};
use crate::wavelength::Wavelength;
use aia_core::errors::{Error, Result};
use aia_core::Real;
use aia_time::parse_timestamp;
use std::io::BufRead;
use std::path::Path;

/// Where the calibration epoch lives in a response table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeColumn {
    /// Zero-based column position.
    Index(usize),
    /// Column header name.
    Named(String),
}

/// Column layout of a response table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    /// The timestamp column (default: the second column).
    pub time_column: TimeColumn,
    /// Header of the channel column.
    pub wavelength_column: String,
    /// Header of the effective-area column.
    pub effective_area_column: String,
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            time_column: TimeColumn::Index(1),
            wavelength_column: "WAVELNTH".into(),
            effective_area_column: "EFF_AREA".into(),
        }
    }
}

impl TableLayout {
    /// Read the timestamp from the column with this header.
    pub fn with_time_column_named(mut self, name: impl Into<String>) -> Self {
        self.time_column = TimeColumn::Named(name.into());
        self
    }
}

struct ColumnIndices {
    time: usize,
    wavelength: usize,
    effective_area: usize,
    width: usize,
}

fn resolve(header: &[&str], layout: &TableLayout) -> Result<ColumnIndices> {
    let find = |name: &str| {
        header
            .iter()
            .position(|h| *h == name)
            .ok_or_else(|| Error::Parse(format!("response table has no '{name}' column")))
    };
    let time = match &layout.time_column {
        TimeColumn::Index(i) if *i < header.len() => *i,
        TimeColumn::Index(i) => {
            return Err(Error::Parse(format!(
                "time column {i} is beyond the {} header columns",
                header.len()
            )))
        }
        TimeColumn::Named(name) => find(name.as_str())?,
    };
    Ok(ColumnIndices {
        time,
        wavelength: find(layout.wavelength_column.as_str())?,
        effective_area: find(layout.effective_area_column.as_str())?,
        width: header.len(),
    })
}

fn parse_real(field: &str, column: &str, line_no: usize) -> Result<Real> {
    field.parse::<Real>().map_err(|_| {
        Error::Parse(format!(
            "line {line_no}: {column} value '{field}' is not a number"
        ))
    })
}

/// Read a response table from any buffered reader.
///
/// # Errors
/// * `Error::Io` if reading fails.
/// * `Error::Parse` for a missing header or column, a short row, or an
///   unparseable field (the message names the line).
/// * Any error from [`CalibrationTable::new`].
pub fn read_table<R: BufRead>(reader: R, layout: &TableLayout) -> Result<CalibrationTable> {
    let mut lines = reader.lines().enumerate().filter_map(|(i, line)| match line {
        Ok(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                None
            } else {
                Some(Ok((i + 1, trimmed.to_string())))
            }
        }
        Err(e) => Some(Err(Error::from(e))),
    });

    let (_, header_line) = lines
        .next()
        .transpose()?
        .ok_or_else(|| Error::Parse("response table is empty".into()))?;
    let header: Vec<&str> = header_line.split_whitespace().collect();
    let cols = resolve(&header, layout)?;

    let mut records = Vec::new();
    for line in lines {
        let (line_no, text) = line?;
        let fields: Vec<&str> = text.split_whitespace().collect();
        if fields.len() < cols.width {
            return Err(Error::Parse(format!(
                "line {line_no}: expected {} fields, found {}",
                cols.width,
                fields.len()
            )));
        }

        let wavelength = Wavelength::new(parse_real(
            fields[cols.wavelength],
            &layout.wavelength_column,
            line_no,
        )?)?;
        let effective_area = parse_real(
            fields[cols.effective_area],
            &layout.effective_area_column,
            line_no,
        )?;
        let timestamp = parse_timestamp(fields[cols.time])
            .map_err(|e| Error::Parse(format!("line {line_no}: {e}")))?;

        records.push(CalibrationRecord {
            wavelength,
            timestamp,
            effective_area,
        });
    }

    let table = CalibrationTable::new(records)?;
    log::debug!(
        "read {} calibration rows for {} channels",
        table.len(),
        table.wavelengths().len()
    );
    Ok(table)
}

/// Read a response table from a local file.
///
/// # Errors
/// `Error::Io` if the file cannot be opened, otherwise as [`read_table`].
pub fn read_table_file(path: impl AsRef<Path>, layout: &TableLayout) -> Result<CalibrationTable> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .map_err(|e| Error::Io(format!("{}: {e}", path.display())))?;
    log::debug!("reading response table {}", path.display());
    read_table(std::io::BufReader::new(file), layout)
}
