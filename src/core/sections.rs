use crate::core::catalog::PortfolioCatalog;
use crate::domain::model::Section;

/// Splits the catalog into display sections.
///
/// Every entry carrying a line break opens a new section under that label.
/// Entries ahead of the first break land in an unlabelled leading section.
pub fn sections(catalog: &PortfolioCatalog) -> Vec<Section<'_>> {
    let mut result: Vec<Section<'_>> = Vec::new();

    for entry in catalog {
        if entry.line_break().is_none() {
            if let Some(current) = result.last_mut() {
                current.entries.push(entry);
                continue;
            }
        }
        result.push(Section {
            label: entry.line_break(),
            entries: vec![entry],
        });
    }

    result
}
