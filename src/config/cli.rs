use crate::config::toml_config::TomlFileSource;
use crate::core::catalog::BuiltinSource;
use crate::core::export::ExportFormat;
use crate::domain::ports::CatalogSource;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "portfolio-catalog")]
#[command(about = "Print the portfolio catalog used by the gallery UI")]
pub struct CliConfig {
    /// Load entries from a TOML catalog instead of the built-in table
    #[arg(long)]
    pub catalog: Option<String>,

    /// Output format: json, csv or text
    #[arg(long, default_value = "text")]
    pub format: ExportFormat,

    /// Print only the number of entries
    #[arg(long)]
    pub count: bool,

    /// Print only the entry with this key
    #[arg(long, conflicts_with = "count")]
    pub key: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn source(&self) -> Box<dyn CatalogSource> {
        match &self.catalog {
            Some(path) => Box::new(TomlFileSource::new(path)),
            None => Box::new(BuiltinSource),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.catalog {
            validate_path("catalog", path)?;
        }
        if let Some(key) = &self.key {
            validate_non_empty_string("key", key)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_use_builtin_catalog() {
        let config = CliConfig::parse_from(["portfolio-catalog"]);
        assert_eq!(config.format, ExportFormat::Text);
        assert!(!config.count);
        assert!(config.validate().is_ok());
        assert_eq!(config.source().describe(), "built-in catalog");
    }

    #[test]
    fn test_catalog_flag_selects_file_source() {
        let config = CliConfig::parse_from(["portfolio-catalog", "--catalog", "catalog.toml", "--format", "json"]);
        assert_eq!(config.format, ExportFormat::Json);
        assert!(config.source().describe().contains("catalog.toml"));
    }

    #[test]
    fn test_blank_key_fails_validation() {
        let config = CliConfig::parse_from(["portfolio-catalog", "--key", " "]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_count_conflicts_with_key() {
        assert!(CliConfig::try_parse_from(["portfolio-catalog", "--count", "--key", "maze"]).is_err());
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(CliConfig::try_parse_from(["portfolio-catalog", "--format", "xml"]).is_err());
    }
}
