use std::cell::RefCell;
use std::rc::Rc;

use regview_core::ToolbarProps;
use regview_types::FilterCriteria;

/// Shared log of every criteria handed to a toolbar callback.
///
/// # Example
/// ```
/// use regview_core::FilterSortToolbar;
/// use regview_testing::CriteriaRecorder;
///
/// let recorder = CriteriaRecorder::new();
/// let mut toolbar = FilterSortToolbar::new(recorder.props(None));
/// toolbar.submit_filter();
/// assert_eq!(recorder.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CriteriaRecorder {
    received: Rc<RefCell<Vec<FilterCriteria>>>,
}

impl CriteriaRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toolbar props whose callback appends to this recorder
    pub fn props(&self, artifacts_count: Option<u64>) -> ToolbarProps {
        let received = Rc::clone(&self.received);
        ToolbarProps::new(artifacts_count)
            .on_change(move |criteria| received.borrow_mut().push(criteria))
    }

    pub fn received(&self) -> Vec<FilterCriteria> {
        self.received.borrow().clone()
    }

    pub fn last(&self) -> Option<FilterCriteria> {
        self.received.borrow().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.received.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.received.borrow().is_empty()
    }
}
