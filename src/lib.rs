#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{TomlCatalog, TomlFileSource};

pub use core::{
    catalog::{BuiltinSource, PortfolioCatalog, BUILTIN_ENTRIES},
    export::{export, ExportFormat},
    sections::sections,
};
pub use domain::model::{PortfolioEntry, Section};
pub use domain::ports::CatalogSource;
pub use utils::error::{CatalogError, Result};
