use crate::core::catalog::PortfolioCatalog;
use crate::utils::error::Result;

/// Anything that can hand out a catalog: the built-in table, a TOML file, ...
pub trait CatalogSource {
    fn describe(&self) -> String;
    fn load(&self) -> Result<PortfolioCatalog>;
}
