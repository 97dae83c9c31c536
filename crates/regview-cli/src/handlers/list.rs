use anyhow::Result;
use regview_core::{
    ArtifactList, ArtifactSource, FilterSortToolbar, InMemoryCatalog, ToolbarProps,
    components::ArtifactListProps,
};
use regview_types::{FilterCriteria, FilterField};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

use crate::presentation::renderers::ConsoleRenderer;
use crate::presentation::view_models::ListCommandViewModel;
use crate::types::OutputFormat;

pub struct ListRequest {
    /// `None` keeps the toolbar's initial empty selection
    pub field: Option<FilterField>,
    pub filter: String,
    pub descending: bool,
}

pub fn handle(catalog: &InMemoryCatalog, request: ListRequest, format: OutputFormat) -> Result<()> {
    let view_model = build(catalog, request)?;
    ConsoleRenderer::new(format).render_list(&view_model)
}

/// Replay the request as toolbar interactions and query with the last
/// criteria the toolbar emitted.
pub fn build(catalog: &InMemoryCatalog, request: ListRequest) -> Result<ListCommandViewModel> {
    let last_emitted: Rc<RefCell<Option<FilterCriteria>>> = Rc::default();
    let sink = Rc::clone(&last_emitted);
    let mut toolbar = FilterSortToolbar::new(
        ToolbarProps::new(None).on_change(move |criteria| *sink.borrow_mut() = Some(criteria)),
    );

    if let Some(field) = request.field {
        toolbar.toggle_dropdown(true);
        toolbar.select_field(field.as_str());
    }
    if !request.filter.is_empty() {
        toolbar.edit_filter_text(request.filter);
    }
    if request.descending {
        toolbar.toggle_sort();
    }
    toolbar.submit_filter();

    let criteria = last_emitted.borrow_mut().take().unwrap_or_default();
    debug!(?criteria, "list query");
    let results = catalog.fetch(&criteria)?;
    toolbar.set_artifacts_count(Some(results.count));

    let count = results.count;
    let mut list = ArtifactList::new(ArtifactListProps {
        artifacts: results.artifacts,
    });

    Ok(ListCommandViewModel {
        criteria,
        count,
        toolbar: toolbar.view().clone(),
        rows: list.view().rows.clone(),
    })
}
