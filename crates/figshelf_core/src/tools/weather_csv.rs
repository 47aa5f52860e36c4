//! Weather JSON to CSV conversion.
//!
//! # Invariants
//! - The header row is fixed and unquoted.
//! - Text fields are quoted; numeric fields are written bare.

use super::{ToolError, ToolResult};
use csv::{QuoteStyle, WriterBuilder};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CSV_HEADER: &str = "fecha,ubicacion,temperatura,humedad,precipitacion,viento_kmh";

/// One weather observation as found in the input array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub fecha: String,
    pub ubicacion: String,
    pub temperatura: f64,
    pub humedad: f64,
    pub precipitacion: f64,
    pub viento_kmh: f64,
}

/// Parses a JSON document that must be an array of readings.
pub fn parse_readings(json: &str) -> ToolResult<Vec<WeatherReading>> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if !value.is_array() {
        return Err(ToolError::NotAnArray);
    }
    Ok(serde_json::from_value(value)?)
}

/// Encodes readings as CSV with the fixed header.
///
/// The writer never quotes on its own; text columns are quoted up front so
/// that numeric-looking text such as `"2024"` keeps its quotes.
pub fn to_csv(readings: &[WeatherReading]) -> ToolResult<String> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .from_writer(Vec::new());

    for reading in readings {
        writer.write_record([
            quote_text(&reading.fecha),
            quote_text(&reading.ubicacion),
            reading.temperatura.to_string(),
            reading.humedad.to_string(),
            reading.precipitacion.to_string(),
            reading.viento_kmh.to_string(),
        ])?;
    }

    let rows = writer
        .into_inner()
        .map_err(|err| ToolError::Csv(err.into_error().into()))?;
    Ok(format!("{CSV_HEADER}\n{}", String::from_utf8_lossy(&rows)))
}

fn quote_text(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Converts `input` (JSON) into `output` (CSV) and returns the row count.
pub fn convert_file(input: &Path, output: &Path) -> ToolResult<usize> {
    let json = fs::read_to_string(input).map_err(|source| ToolError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    let readings = parse_readings(&json)?;
    let csv = to_csv(&readings)?;
    fs::write(output, csv).map_err(|source| ToolError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    Ok(readings.len())
}
