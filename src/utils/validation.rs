use crate::domain::model::PortfolioEntry;
use crate::utils::error::{CatalogError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::ValidationError {
            field: field_name.to_string(),
            message: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    validate_non_empty_string(field_name, path)?;

    if path.contains('\0') {
        return Err(CatalogError::ValidationError {
            field: field_name.to_string(),
            message: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_entry(index: usize, entry: &PortfolioEntry) -> Result<()> {
    validate_non_empty_string(&format!("entries[{}].title", index), entry.title())?;
    validate_non_empty_string(&format!("entries[{}].key", index), entry.key())?;
    validate_path(&format!("entries[{}].img", index), entry.img())?;
    if let Some(label) = entry.line_break() {
        validate_non_empty_string(&format!("entries[{}].line_break", index), label)?;
    }
    Ok(())
}

pub fn validate_unique_keys(entries: &[PortfolioEntry]) -> Result<()> {
    let mut seen = HashSet::with_capacity(entries.len());
    for entry in entries {
        if !seen.insert(entry.key()) {
            return Err(CatalogError::DuplicateKeyError {
                key: entry.key().to_string(),
            });
        }
    }
    Ok(())
}
