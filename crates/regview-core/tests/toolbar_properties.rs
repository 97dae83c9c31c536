//! Toolbar behavior as seen by its owner.

use regview_core::FilterSortToolbar;
use regview_core::components::artifact_list::render_row;
use regview_testing::CriteriaRecorder;
use regview_types::{Artifact, ArtifactType, FilterCriteria};

#[test]
fn test_edit_then_submit_emits_once_with_defaults() {
    let recorder = CriteriaRecorder::new();
    let mut toolbar = FilterSortToolbar::new(recorder.props(None));

    toolbar.edit_filter_text("auth");
    toolbar.submit_filter();

    assert_eq!(recorder.received(), [FilterCriteria::new("", "auth", true)]);
    insta::assert_json_snapshot!(recorder.received(), @r#"
    [
      {
        "type": "",
        "value": "auth",
        "sortAscending": true
      }
    ]
    "#);
}

#[test]
fn test_select_field_then_toggle_sort_emits_twice() {
    let recorder = CriteriaRecorder::new();
    let mut toolbar = FilterSortToolbar::new(recorder.props(None));

    toolbar.select_field("Name");
    toolbar.toggle_sort();

    let received = recorder.received();
    assert_eq!(received.len(), 2);
    assert_eq!(received[0], FilterCriteria::new("Name", "", true));
    assert_eq!(received[1], FilterCriteria::new("Name", "", false));
}

#[test]
fn test_toggle_sort_always_emits_new_direction() {
    let recorder = CriteriaRecorder::new();
    let mut toolbar = FilterSortToolbar::new(recorder.props(Some(4)));

    let mut expected = true;
    for _ in 0..5 {
        expected = !expected;
        toolbar.toggle_sort();
        assert_eq!(recorder.last().map(|c| c.sort_ascending), Some(expected));
        // alternate flushed and unflushed toggles
        if expected {
            toolbar.flush();
        }
    }
    toolbar.flush();
    assert_eq!(toolbar.state().sort_ascending, expected);
    assert_eq!(recorder.len(), 5);
}

#[test]
fn test_submit_sees_text_from_separate_callback() {
    let recorder = CriteriaRecorder::new();
    let mut toolbar = FilterSortToolbar::new(recorder.props(None));

    // first callback: text edit, render happens in between
    toolbar.edit_filter_text("orders");
    toolbar.flush();

    // second callback
    toolbar.edit_filter_text("orders-v2");
    toolbar.submit_filter();

    assert_eq!(recorder.last().map(|c| c.value), Some("orders-v2".to_string()));
}

#[test]
fn test_missing_callback_is_a_noop() {
    let mut toolbar = FilterSortToolbar::new(regview_core::ToolbarProps::new(None));
    let outcome = toolbar.toggle_sort();
    assert_eq!(outcome.emitted, Some(FilterCriteria::new("", "", false)));
}

#[test]
fn test_unknown_count_renders_blank() {
    let recorder = CriteriaRecorder::new();
    let mut toolbar = FilterSortToolbar::new(recorder.props(None));
    let count_text = toolbar.view().count_text.clone();
    assert_eq!(count_text, "");
    assert_ne!(count_text, "null");
    assert_ne!(count_text, "0");
}

#[test]
fn test_artifacts_without_labels_render_no_badges() {
    for artifact_type in ArtifactType::ALL {
        let artifact = Artifact::new("id", "name", artifact_type);
        assert!(render_row(&artifact).badges.is_empty());
    }
}
