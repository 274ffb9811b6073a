use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Catalog parsing error: {message}")]
    ParseError { message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Validation error in '{field}': {message}")]
    ValidationError { field: String, message: String },

    #[error("Duplicate portfolio key: {key}")]
    DuplicateKeyError { key: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

impl CatalogError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            CatalogError::IoError(e) => format!("Could not read the catalog file: {}", e),
            CatalogError::ParseError { .. } => "The catalog file is not valid TOML".to_string(),
            CatalogError::SerializationError(_) | CatalogError::CsvError(_) => {
                "Could not render the catalog in the requested format".to_string()
            }
            CatalogError::ValidationError { field, message } => {
                format!("Invalid value for {}: {}", field, message)
            }
            CatalogError::DuplicateKeyError { key } => {
                format!("The key '{}' is used by more than one entry", key)
            }
            CatalogError::ConfigError { message } => message.clone(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CatalogError::IoError(_) => "Check that the --catalog path exists and is readable",
            CatalogError::ParseError { .. } => {
                "Each entry must be a [[entries]] table with title, key and img"
            }
            CatalogError::SerializationError(_) | CatalogError::CsvError(_) => {
                "Try a different --format"
            }
            CatalogError::ValidationError { .. } => {
                "Fill in every title, key and img field with a non-blank value"
            }
            CatalogError::DuplicateKeyError { .. } => "Give every entry a unique key",
            CatalogError::ConfigError { .. } => "Run with --help to see the accepted options",
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
