//! Integration tests for loading a catalog from disk and browsing it.
//!
//! These go through the public API only: `Catalog::load` / `from_path`,
//! `Session` handlers and a `Renderer` implemented here.
//!
//! ```bash
//! cargo test --test catalog_session
//! ```

use std::num::NonZeroUsize;
use std::path::Path;
use std::sync::Arc;

use shelfscan::core::catalog::{
    BookCard, Catalog, CatalogError, FilterCriteria, Renderer, Session, SessionPhase,
};
use tempfile::TempDir;

/// A(author=1,[x]), B(author=1,[y]), C(author=2,[x]), D(author=3,[z]).
const SCENARIO_JSON: &str = r#"{
  "authors": { "1": "Author One", "2": "Author Two", "3": "Author Three" },
  "genres": { "x": "Genre X", "y": "Genre Y", "z": "Genre Z" },
  "books": [
    { "id": "A", "title": "Alpha",   "authorId": "1", "genreIds": ["x"], "publishedDate": "2001-01-01" },
    { "id": "B", "title": "Bravo",   "authorId": "1", "genreIds": ["y"], "publishedDate": "2002-02-02" },
    { "id": "C", "title": "Charlie", "authorId": "2", "genreIds": ["x"], "publishedDate": "2003-03-03",
      "description": "Third.", "image": "https://covers.example.org/c.jpg" },
    { "id": "D", "title": "Delta",   "authorId": "3", "genreIds": ["z"], "publishedDate": "2004-04-04" }
  ]
}"#;

#[derive(Default)]
struct CardLog {
    renders: Vec<Option<Vec<String>>>,
}

impl CardLog {
    fn last_ids(&self) -> Option<Vec<String>> {
        self.renders.last().cloned().flatten()
    }
}

impl Renderer for CardLog {
    fn render(&mut self, cards: &[BookCard]) {
        self.renders
            .push(Some(cards.iter().map(|c| c.id.clone()).collect()));
    }

    fn render_empty(&mut self) {
        self.renders.push(None);
    }
}

fn write_catalog(dir: &TempDir, json: &str) -> std::path::PathBuf {
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, json).expect("write catalog");
    path
}

fn two() -> NonZeroUsize {
    NonZeroUsize::new(2).expect("non-zero")
}

#[test]
fn test_browse_catalog_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(&dir, SCENARIO_JSON);
    let catalog = Arc::new(Catalog::load(Some(path.as_path())).unwrap());
    let mut session = Session::new(catalog, two());
    let mut log = CardLog::default();

    session.start(&mut log).unwrap();
    assert_eq!(log.last_ids(), Some(vec!["A".into(), "B".into()]));

    let expansion = session.load_more(&mut log).unwrap().unwrap();
    assert_eq!(expansion.appended, 1);
    assert_eq!(
        log.last_ids(),
        Some(vec!["A".into(), "B".into(), "C".into(), "D".into(), "A".into()])
    );

    assert!(session.select("C").unwrap());
    let detail = session.detail().unwrap();
    assert_eq!(detail.author, "Author Two");
    assert_eq!(detail.genres, vec!["Genre X".to_string()]);
    assert_eq!(detail.record.description, "Third.");

    // dialog is modal
    assert!(session.load_more(&mut log).unwrap().is_none());
    assert!(session.dismiss_detail());

    let count = session
        .submit_filter(FilterCriteria::new("", "any", "x"), &mut log)
        .unwrap();
    assert_eq!(count, Some(2));
    assert_eq!(session.cursor().pages_revealed(), 1);
    assert_eq!(log.last_ids(), Some(vec!["A".into(), "C".into()]));

    session
        .submit_filter(FilterCriteria::new("omega", "any", "any"), &mut log)
        .unwrap();
    assert_eq!(session.phase(), &SessionPhase::Filtered);
    assert_eq!(log.renders.last(), Some(&None));
}

#[test]
fn test_unknown_author_is_integrity_error() {
    let dir = TempDir::new().unwrap();
    let broken = SCENARIO_JSON.replace(r#""authorId": "3""#, r#""authorId": "9""#);
    let path = write_catalog(&dir, &broken);

    let err = Catalog::from_path(&path).unwrap_err();

    assert!(matches!(err, CatalogError::DataIntegrity { .. }));
    assert!(err.to_string().contains("'9'"));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = Catalog::from_path(Path::new("/definitely/not/here.json")).unwrap_err();
    match err {
        CatalogError::Io { path, .. } => assert_eq!(path, Path::new("/definitely/not/here.json")),
        other => panic!("expected Io, got {other:?}"),
    }
}

#[test]
fn test_malformed_json_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(&dir, "{ \"books\": [ ");
    assert!(matches!(
        Catalog::from_path(&path).unwrap_err(),
        CatalogError::Parse(_)
    ));
}

#[test]
fn test_bundled_catalog_is_valid() {
    let catalog = Catalog::load(None).unwrap();
    assert!(!catalog.is_empty());
    for record in catalog.records() {
        assert!(catalog.resolve_author(&record.author_id).is_ok());
        assert_eq!(catalog.genre_names(record).unwrap().len(), record.genre_ids.len());
    }
}
