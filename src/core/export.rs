use crate::core::catalog::PortfolioCatalog;
use crate::utils::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Csv,
    #[default]
    Text,
}

impl FromStr for ExportFormat {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "text" | "txt" => Ok(ExportFormat::Text),
            other => Err(CatalogError::ConfigError {
                message: format!("Unsupported format '{}'. Valid formats: json, csv, text", other),
            }),
        }
    }
}

pub fn export(catalog: &PortfolioCatalog, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Json => export_json(catalog),
        ExportFormat::Csv => export_csv(catalog),
        ExportFormat::Text => Ok(export_text(catalog)),
    }
}

fn export_json(catalog: &PortfolioCatalog) -> Result<String> {
    Ok(serde_json::to_string_pretty(catalog.get_portfolio())?)
}

fn export_csv(catalog: &PortfolioCatalog) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["title", "key", "img", "line_break"])?;
    for entry in catalog {
        writer.write_record([
            entry.title(),
            entry.key(),
            entry.img(),
            entry.line_break().unwrap_or(""),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CatalogError::IoError(std::io::Error::new(e.error().kind(), e.error().to_string())))?;
    String::from_utf8(bytes).map_err(|e| CatalogError::ConfigError {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}

fn export_text(catalog: &PortfolioCatalog) -> String {
    let mut out = String::new();
    for entry in catalog {
        if let Some(label) = entry.line_break() {
            out.push_str(&format!("== {} ==\n", label));
        }
        out.push_str(&format!("{} [{}] {}\n", entry.title(), entry.key(), entry.img()));
    }
    out
}
