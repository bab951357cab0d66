use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::{LocatorError, Result};
use crate::models::StationDistance;
use crate::utils::constants::{
    COLUMN_LATITUDE, COLUMN_LONGITUDE, COLUMN_RADAR_ID, FORMAT_JSON, FORMAT_LIST,
    FORMAT_READABLE,
};

/// Shape in which proximity query results are returned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// Station identifiers only
    IdList,
    /// `StationDistance` records, ready for serialization
    Structured,
    /// A text table, one station per line
    Readable,
}

impl OutputFormat {
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::IdList => FORMAT_LIST,
            OutputFormat::Structured => FORMAT_JSON,
            OutputFormat::Readable => FORMAT_READABLE,
        }
    }
}

impl FromStr for OutputFormat {
    type Err = LocatorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "list" | "id-list" | "ids" => Ok(OutputFormat::IdList),
            "json" | "structured" => Ok(OutputFormat::Structured),
            "readable" | "table" | "text" => Ok(OutputFormat::Readable),
            _ => Err(LocatorError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Query results rendered in one of the `OutputFormat` shapes
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryOutput {
    IdList(Vec<String>),
    Structured(Vec<StationDistance>),
    Readable(String),
}

impl QueryOutput {
    /// Render already filtered and sorted matches. Order is kept as given.
    pub fn render(matches: Vec<StationDistance>, format: OutputFormat) -> Self {
        match format {
            OutputFormat::IdList => {
                QueryOutput::IdList(matches.into_iter().map(|m| m.station_id).collect())
            }
            OutputFormat::Structured => QueryOutput::Structured(matches),
            OutputFormat::Readable => QueryOutput::Readable(render_table(&matches)),
        }
    }

    pub fn format(&self) -> OutputFormat {
        match self {
            QueryOutput::IdList(_) => OutputFormat::IdList,
            QueryOutput::Structured(_) => OutputFormat::Structured,
            QueryOutput::Readable(_) => OutputFormat::Readable,
        }
    }

    /// Text suitable for printing: ids one per line, pretty JSON, or the table
    pub fn to_text(&self) -> Result<String> {
        match self {
            QueryOutput::IdList(ids) => Ok(ids.join("\n")),
            QueryOutput::Structured(records) => Ok(serde_json::to_string_pretty(records)?),
            QueryOutput::Readable(table) => Ok(table.clone()),
        }
    }
}

pub(crate) const COLUMN_DISTANCE: &str = "distance_km";

fn render_table(matches: &[StationDistance]) -> String {
    let rows: Vec<[String; 4]> = matches
        .iter()
        .map(|m| {
            [
                m.station_id.clone(),
                format!("{:.4}", m.latitude),
                format!("{:.4}", m.longitude),
                format!("{:.2}", m.distance_km),
            ]
        })
        .collect();

    render_columns(
        [
            COLUMN_RADAR_ID,
            COLUMN_LATITUDE,
            COLUMN_LONGITUDE,
            COLUMN_DISTANCE,
        ],
        &rows,
    )
}

/// Right-aligned text table: a header line then one line per row, columns
/// separated by a single space and sized to their widest cell.
pub(crate) fn render_columns<const N: usize>(header: [&str; N], rows: &[[String; N]]) -> String {
    let mut widths = header.map(str::len);
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(format_row(header.iter().copied(), &widths));
    for row in rows {
        lines.push(format_row(row.iter().map(String::as_str), &widths));
    }
    lines.join("\n")
}

fn format_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths.iter())
        .map(|(cell, width)| format!("{:>width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join(" ")
}
