pub mod catalog;
pub mod export;
pub mod sections;

pub use crate::domain::model::{PortfolioEntry, Section};
pub use crate::domain::ports::CatalogSource;
pub use crate::utils::error::Result;
