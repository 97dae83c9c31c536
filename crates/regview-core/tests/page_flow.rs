//! Artifacts page driven end to end over the sample catalog.

use std::cell::Cell;

use regview_core::{
    ArtifactSearchResults, ArtifactSource, ArtifactsPage, Error, InMemoryCatalog, PageCommand,
    PageInput, Result,
};
use regview_testing::fixtures::sample_catalog;
use regview_types::{Artifact, FilterCriteria, Route};

/// Sample catalog that can be switched offline
struct FlakySource {
    catalog: InMemoryCatalog,
    online: Cell<bool>,
}

impl ArtifactSource for FlakySource {
    fn fetch(&self, criteria: &FilterCriteria) -> Result<ArtifactSearchResults> {
        if self.online.get() {
            self.catalog.fetch(criteria)
        } else {
            Err(Error::Source("offline".to_string()))
        }
    }

    fn get(&self, id: &str) -> Option<Artifact> {
        self.catalog.get(id)
    }
}

fn row_keys(page: &mut ArtifactsPage<regview_core::InMemoryCatalog>) -> Vec<String> {
    page.view().list.rows.into_iter().map(|row| row.key).collect()
}

fn type_text(page: &mut ArtifactsPage<regview_core::InMemoryCatalog>, text: &str) {
    page.handle(PageInput::Char('/'));
    for c in text.chars() {
        page.handle(PageInput::Char(c));
    }
    page.handle(PageInput::Enter);
}

#[test]
fn test_filter_labels_then_open_detail() {
    let mut page = ArtifactsPage::new(sample_catalog());
    page.pump();
    assert_eq!(page.view().toolbar.count_text, "5 Artifacts Found");

    // Everything -> Name -> Description -> Labels
    page.handle(PageInput::Char('f'));
    for _ in 0..3 {
        page.handle(PageInput::Down);
    }
    page.handle(PageInput::Enter);
    type_text(&mut page, "auth");
    assert_eq!(page.pump(), 2);

    assert_eq!(row_keys(&mut page), ["audit-log"]);
    assert_eq!(page.view().toolbar.count_text, "1 Artifacts Found");
    assert_eq!(
        page.handle(PageInput::Enter),
        PageCommand::Navigate(Route::ArtifactDetail("audit-log".into()))
    );
}

#[test]
fn test_everything_filter_matches_name_description_and_labels() {
    let mut page = ArtifactsPage::new(sample_catalog());
    page.pump();
    type_text(&mut page, "auth");
    page.pump();
    assert_eq!(row_keys(&mut page), ["audit-log", "auth-api"]);
}

#[test]
fn test_descending_sort_persists_across_filters() {
    let mut page = ArtifactsPage::new(sample_catalog());
    page.pump();
    page.handle(PageInput::Char('s'));
    type_text(&mut page, "a");
    page.pump();

    let view = page.view();
    let titles: Vec<String> = view.list.rows.iter().map(|r| r.title.to_lowercase()).collect();
    let mut sorted = titles.clone();
    sorted.sort();
    sorted.reverse();
    assert_eq!(titles.len(), 5);
    assert_eq!(titles, sorted);
    assert!(!view.toolbar.sort_ascending);
}

#[test]
fn test_header_links() {
    let mut page = ArtifactsPage::new(sample_catalog());
    let view = page.view();
    assert_eq!(view.header.settings.route, Route::Rules.path());
    assert_eq!(view.header.home.route, Route::Artifacts.path());
}

#[test]
fn test_failed_fetch_keeps_rows_and_reports_error() {
    let source = FlakySource {
        catalog: sample_catalog(),
        online: Cell::new(true),
    };
    let mut page = ArtifactsPage::new(&source);
    page.pump();

    source.online.set(false);
    page.handle(PageInput::Char('s'));
    assert_eq!(page.pump(), 1);

    let view = page.view();
    assert_eq!(view.list.rows.len(), 5);
    assert_eq!(view.list.rows[0].key, "audit-log");
    assert_eq!(
        view.chrome.error_message.as_deref(),
        Some("Artifact source error: offline")
    );
    assert_eq!(view.toolbar.count_text, "5 Artifacts Found");

    source.online.set(true);
    page.handle(PageInput::Char('s'));
    page.pump();

    let view = page.view();
    assert_eq!(view.chrome.error_message, None);
    assert_eq!(view.toolbar.count_text, "5 Artifacts Found");
    assert!(view.toolbar.sort_ascending);
}
