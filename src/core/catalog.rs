use crate::domain::model::PortfolioEntry;
use crate::domain::ports::CatalogSource;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{validate_entry, validate_unique_keys};
use std::borrow::Cow;

/// The portfolio as it ships, in display order.
pub const BUILTIN_ENTRIES: &[PortfolioEntry] = &[
    PortfolioEntry::borrowed("Keyframe", "tweener", "images/smol.png", Some("Tweener")),
    PortfolioEntry::borrowed("Maze Builder Web App", "maze", "images/maze.png", None),
    PortfolioEntry::borrowed("Talk About Yourself", "self", "images/self_inclusion.png", None),
    PortfolioEntry::borrowed("GRNmap", "grnmap", "images/grnmap.png", Some("Research")),
    PortfolioEntry::borrowed("Website Portfolio", "website", "images/self_inclusion.png", None),
    PortfolioEntry::borrowed("Pluvio", "pluvio", "images/pluvio.png", Some("App")),
    PortfolioEntry::borrowed("Work", "work", "images/self_inclusion.png", Some("Experience")),
    PortfolioEntry::borrowed("Oxtails", "oxtails", "images/oxtails.png", Some("Project")),
    PortfolioEntry::borrowed("jen-lang", "jen", "images/jen-lang.png", None),
];

static BUILTIN: PortfolioCatalog = PortfolioCatalog {
    entries: Cow::Borrowed(BUILTIN_ENTRIES),
};

/// Ordered, read-only collection of portfolio entries.
///
/// The entry list is fixed when the catalog is built and there is no way to
/// change it afterwards, so a shared `&PortfolioCatalog` can be read from any
/// number of threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioCatalog {
    entries: Cow<'static, [PortfolioEntry]>,
}

impl PortfolioCatalog {
    /// Wraps `entries` as-is. Keys are not checked for uniqueness.
    pub fn new(entries: Vec<PortfolioEntry>) -> Self {
        Self {
            entries: Cow::Owned(entries),
        }
    }

    /// Like [`PortfolioCatalog::new`] but rejects blank fields, duplicate keys
    /// and empty catalogs.
    pub fn try_new(entries: Vec<PortfolioEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(CatalogError::ValidationError {
                field: "entries".to_string(),
                message: "Catalog must contain at least one entry".to_string(),
            });
        }
        for (index, entry) in entries.iter().enumerate() {
            validate_entry(index, entry)?;
        }
        validate_unique_keys(&entries)?;
        Ok(Self::new(entries))
    }

    pub fn builtin() -> &'static PortfolioCatalog {
        &BUILTIN
    }

    pub fn get_portfolio(&self) -> &[PortfolioEntry] {
        &self.entries
    }

    pub fn get_topic_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry whose key matches.
    pub fn find(&self, key: &str) -> Option<&PortfolioEntry> {
        self.entries.iter().find(|entry| entry.key() == key)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PortfolioEntry> {
        self.entries.iter()
    }
}

impl Default for PortfolioCatalog {
    fn default() -> Self {
        BUILTIN.clone()
    }
}

impl<'a> IntoIterator for &'a PortfolioCatalog {
    type Item = &'a PortfolioEntry;
    type IntoIter = std::slice::Iter<'a, PortfolioEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Source for the compiled-in table.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSource;

impl CatalogSource for BuiltinSource {
    fn describe(&self) -> String {
        "built-in catalog".to_string()
    }

    fn load(&self) -> Result<PortfolioCatalog> {
        Ok(PortfolioCatalog::builtin().clone())
    }
}
