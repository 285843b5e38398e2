//! Output formatting utilities

use comfy_table::Table;
use serde::Serialize;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "csv" => Self::Csv,
            _ => Self::Table,
        }
    }
}

/// A row that can be rendered as table or CSV cells
pub trait TableRow {
    fn headers() -> Vec<&'static str>;

    fn cells(&self) -> Vec<String>;
}

/// Format rows based on format type
pub fn format_output<T: Serialize + TableRow>(rows: &[T], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(T::headers())?;
            for row in rows {
                writer.write_record(row.cells())?;
            }
            let bytes = writer
                .into_inner()
                .map_err(|e| anyhow::anyhow!("Failed to flush CSV output: {}", e))?;
            Ok(String::from_utf8(bytes)?)
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_header(T::headers());
            for row in rows {
                table.add_row(row.cells());
            }
            Ok(table.to_string())
        }
    }
}

/// Render an optional number, blank when absent
pub fn optional<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
