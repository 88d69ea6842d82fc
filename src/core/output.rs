use crate::core::{Record, TranslationTable};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}

pub fn render(records: &[Record], table: &TranslationTable, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => render_json(records, table),
        OutputFormat::Csv => render_csv(records, table),
    }
}

/// Pretty JSON array; absent values become `null`. Keys follow the table order.
pub fn render_json(records: &[Record], table: &TranslationTable) -> Result<String> {
    let rows: Vec<serde_json::Map<String, serde_json::Value>> = records
        .iter()
        .map(|record| {
            table
                .field_names()
                .map(|field| {
                    let value = match record.get(field) {
                        Some(text) => serde_json::Value::String(text.to_string()),
                        None => serde_json::Value::Null,
                    };
                    (field.to_string(), value)
                })
                .collect()
        })
        .collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}

/// CSV with a header row in table order; absent values are empty cells.
pub fn render_csv(records: &[Record], table: &TranslationTable) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(table.field_names())?;
    for record in records {
        writer.write_record(table.field_names().map(|field| record.get(field).unwrap_or("")))?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
