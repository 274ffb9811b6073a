use portfolio_catalog::{
    export, sections, CatalogError, CatalogSource, ExportFormat, PortfolioCatalog, PortfolioEntry,
    TomlCatalog, TomlFileSource,
};
use std::io::Write;
use std::thread;
use tempfile::NamedTempFile;

#[test]
fn test_builtin_catalog_scenario() {
    let catalog = PortfolioCatalog::builtin();
    let portfolio = catalog.get_portfolio();

    assert_eq!(catalog.get_topic_count(), 9);
    assert_eq!(portfolio.len(), catalog.get_topic_count());
    assert_eq!(portfolio[0].key(), "tweener");
    assert_eq!(portfolio[3].line_break(), Some("Research"));
    assert_eq!(portfolio[2].line_break(), None);

    let titles: Vec<&str> = portfolio.iter().map(|e| e.title()).collect();
    assert_eq!(
        titles,
        vec![
            "Keyframe",
            "Maze Builder Web App",
            "Talk About Yourself",
            "GRNmap",
            "Website Portfolio",
            "Pluvio",
            "Work",
            "Oxtails",
            "jen-lang",
        ]
    );
}

#[test]
fn test_concurrent_readers_see_same_catalog() {
    let expected: Vec<PortfolioEntry> = PortfolioCatalog::builtin().get_portfolio().to_vec();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(|| {
                let catalog = PortfolioCatalog::builtin();
                (catalog.get_topic_count(), catalog.get_portfolio().to_vec())
            })
        })
        .collect();

    for handle in handles {
        let (count, entries) = handle.join().unwrap();
        assert_eq!(count, expected.len());
        assert_eq!(entries, expected);
    }
}

#[test]
fn test_file_catalog_end_to_end() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[[entries]]
title = "Pluvio"
key = "pluvio"
img = "images/pluvio.png"
line_break = "App"

[[entries]]
title = "Work"
key = "work"
img = "images/self_inclusion.png"
line_break = "Experience"

[[entries]]
title = "jen-lang"
key = "jen"
img = "images/jen-lang.png"
"#
    )
    .unwrap();

    let catalog = TomlFileSource::new(file.path()).load().unwrap();
    assert_eq!(catalog.get_topic_count(), 3);

    let grouped = sections(&catalog);
    assert_eq!(grouped.len(), 2);
    assert_eq!(grouped[1].label, Some("Experience"));
    assert_eq!(grouped[1].entries.len(), 2);

    let csv = export(&catalog, ExportFormat::Csv).unwrap();
    assert!(csv.contains("jen-lang,jen,images/jen-lang.png,"));
}

#[test]
fn test_file_catalog_with_blank_title_is_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[[entries]]\ntitle = \"\"\nkey = \"maze\"\nimg = \"images/maze.png\"\n").unwrap();

    match TomlFileSource::new(file.path()).load() {
        Err(CatalogError::ValidationError { field, .. }) => assert_eq!(field, "entries[0].title"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_exported_toml_can_be_reloaded() {
    let text = TomlCatalog::to_toml_string(PortfolioCatalog::builtin()).unwrap();
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();

    let reloaded = TomlFileSource::new(file.path()).load().unwrap();
    assert_eq!(reloaded.get_portfolio(), PortfolioCatalog::builtin().get_portfolio());
}
