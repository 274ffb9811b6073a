use crate::core::catalog::PortfolioCatalog;
use crate::domain::model::PortfolioEntry;
use crate::domain::ports::CatalogSource;
use crate::utils::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// On-disk catalog:
///
/// ```toml
/// [[entries]]
/// title = "GRNmap"
/// key = "grnmap"
/// img = "images/grnmap.png"
/// line_break = "Research"
/// ```
///
/// `lineBreak` is accepted in place of `line_break`, and is what gets written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlCatalog {
    #[serde(default)]
    pub entries: Vec<PortfolioEntry>,
}

impl TomlCatalog {
    /// 從 TOML 檔案載入目錄
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析目錄
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CatalogError::ParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn to_toml_string(catalog: &PortfolioCatalog) -> Result<String> {
        let doc = TomlCatalog {
            entries: catalog.get_portfolio().to_vec(),
        };
        toml::to_string(&doc).map_err(|e| CatalogError::ParseError {
            message: format!("TOML serialization error: {}", e),
        })
    }

    pub fn into_catalog(self) -> Result<PortfolioCatalog> {
        PortfolioCatalog::try_new(self.entries)
    }
}

/// Catalog loaded from a TOML file at `load` time.
#[derive(Debug, Clone)]
pub struct TomlFileSource {
    path: PathBuf,
}

impl TomlFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for TomlFileSource {
    fn describe(&self) -> String {
        format!("catalog file {}", self.path.display())
    }

    fn load(&self) -> Result<PortfolioCatalog> {
        tracing::debug!("Reading catalog from {}", self.path.display());
        let catalog = TomlCatalog::from_file(&self.path)?.into_catalog()?;
        tracing::info!(
            "Loaded {} portfolio entries from {}",
            catalog.get_topic_count(),
            self.path.display()
        );
        Ok(catalog)
    }
}
