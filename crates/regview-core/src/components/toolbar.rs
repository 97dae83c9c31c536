//! Filter/sort toolbar for the artifacts screen
//!
//! Owns dropdown, filter text and sort direction. Committing interactions
//! (field selection, submit, sort toggle) hand a [`FilterCriteria`] to the
//! owner's callback.

use regview_types::{FilterCriteria, FilterField};
use tracing::debug;

use crate::view::{Patch, StateDelta, ViewHost, ViewSpec};
use crate::view_models::{DropdownItemViewModel, SortIcon, ToolbarViewModel};

/// Owner callback receiving every emitted criteria
pub type OnChange = Box<dyn FnMut(FilterCriteria)>;

pub struct ToolbarProps {
    /// `None` while the owner is still loading
    pub artifacts_count: Option<u64>,
    pub on_change: Option<OnChange>,
}

impl ToolbarProps {
    pub fn new(artifacts_count: Option<u64>) -> Self {
        Self {
            artifacts_count,
            on_change: None,
        }
    }

    pub fn on_change(mut self, callback: impl FnMut(FilterCriteria) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }
}

impl Default for ToolbarProps {
    fn default() -> Self {
        Self::new(None)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarState {
    pub filter_dropdown_open: bool,
    /// Raw dropdown selection; empty until the user picks one
    pub selected_field: String,
    pub filter_text: String,
    pub sort_ascending: bool,
}

impl Default for ToolbarState {
    fn default() -> Self {
        Self {
            filter_dropdown_open: false,
            selected_field: String::new(),
            filter_text: String::new(),
            sort_ascending: true,
        }
    }
}

impl ToolbarState {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new(
            self.selected_field.clone(),
            self.filter_text.clone(),
            self.sort_ascending,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolbarField {
    FilterDropdownOpen(bool),
    SelectedField(String),
    FilterText(String),
    SortAscending(bool),
}

impl Patch for ToolbarState {
    type Field = ToolbarField;

    fn apply(self, field: ToolbarField) -> Self {
        match field {
            ToolbarField::FilterDropdownOpen(filter_dropdown_open) => Self {
                filter_dropdown_open,
                ..self
            },
            ToolbarField::SelectedField(selected_field) => Self {
                selected_field,
                ..self
            },
            ToolbarField::FilterText(filter_text) => Self {
                filter_text,
                ..self
            },
            ToolbarField::SortAscending(sort_ascending) => Self {
                sort_ascending,
                ..self
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolbarAction {
    ToggleDropdown(bool),
    SelectField(String),
    EditFilterText(String),
    SubmitFilter,
    ToggleSort,
}

/// What one action does to the toolbar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub delta: Option<StateDelta<ToolbarField>>,
    pub emits: bool,
    pub prevents_default: bool,
}

/// Pure transition function. Total: every action maps to a transition.
pub fn reduce(state: &ToolbarState, action: ToolbarAction) -> Transition {
    match action {
        ToolbarAction::ToggleDropdown(open) => Transition {
            delta: Some(StateDelta::Single(ToolbarField::FilterDropdownOpen(open))),
            emits: false,
            prevents_default: false,
        },
        ToolbarAction::SelectField(field) => Transition {
            delta: Some(StateDelta::Multi(vec![
                ToolbarField::FilterDropdownOpen(false),
                ToolbarField::SelectedField(field),
            ])),
            emits: true,
            prevents_default: false,
        },
        ToolbarAction::EditFilterText(text) => Transition {
            delta: Some(StateDelta::Single(ToolbarField::FilterText(text))),
            emits: false,
            prevents_default: false,
        },
        ToolbarAction::SubmitFilter => Transition {
            delta: None,
            emits: true,
            prevents_default: true,
        },
        ToolbarAction::ToggleSort => Transition {
            delta: Some(StateDelta::Single(ToolbarField::SortAscending(
                !state.sort_ascending,
            ))),
            emits: true,
            prevents_default: false,
        },
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToolbarOutcome {
    /// Criteria built by a committing action, delivered or not
    pub emitted: Option<FilterCriteria>,
    /// The host should skip its default submit behavior
    pub default_prevented: bool,
}

struct DisplayProps {
    artifacts_count: Option<u64>,
}

const TOOLBAR: ViewSpec<DisplayProps, ToolbarState, ToolbarViewModel> =
    ViewSpec::new("artifacts-toolbar", init_state, render);

fn init_state(_props: &DisplayProps) -> ToolbarState {
    ToolbarState::default()
}

fn render(props: &DisplayProps, state: &ToolbarState) -> ToolbarViewModel {
    let dropdown_label = if state.selected_field.is_empty() {
        FilterField::Everything.as_str().to_string()
    } else {
        state.selected_field.clone()
    };

    let dropdown_items = FilterField::ALL
        .iter()
        .map(|field| DropdownItemViewModel {
            key: field.as_str().to_lowercase(),
            label: field.as_str().to_string(),
        })
        .collect();

    ToolbarViewModel {
        dropdown_label,
        dropdown_open: state.filter_dropdown_open,
        dropdown_items,
        filter_text: state.filter_text.clone(),
        sort_ascending: state.sort_ascending,
        sort_icon: if state.sort_ascending {
            SortIcon::SortAlphaDown
        } else {
            SortIcon::SortAlphaDownAlt
        },
        count_text: count_text(props.artifacts_count),
    }
}

fn count_text(count: Option<u64>) -> String {
    match count {
        Some(count) => format!("{} Artifacts Found", count),
        None => String::new(),
    }
}

pub struct FilterSortToolbar {
    host: ViewHost<DisplayProps, ToolbarState, ToolbarViewModel>,
    on_change: Option<OnChange>,
}

impl FilterSortToolbar {
    pub fn new(props: ToolbarProps) -> Self {
        let ToolbarProps {
            artifacts_count,
            on_change,
        } = props;
        Self {
            host: TOOLBAR.mount(DisplayProps { artifacts_count }),
            on_change,
        }
    }

    pub fn dispatch(&mut self, action: ToolbarAction) -> ToolbarOutcome {
        log_action(&action);

        let transition = reduce(&self.host.latest_state(), action);
        if let Some(delta) = transition.delta {
            self.host.enqueue(delta);
        }

        let emitted = if transition.emits {
            Some(self.emit())
        } else {
            None
        };

        ToolbarOutcome {
            emitted,
            default_prevented: transition.prevents_default,
        }
    }

    pub fn toggle_dropdown(&mut self, open: bool) -> ToolbarOutcome {
        self.dispatch(ToolbarAction::ToggleDropdown(open))
    }

    pub fn select_field(&mut self, field: impl Into<String>) -> ToolbarOutcome {
        self.dispatch(ToolbarAction::SelectField(field.into()))
    }

    pub fn edit_filter_text(&mut self, text: impl Into<String>) -> ToolbarOutcome {
        self.dispatch(ToolbarAction::EditFilterText(text.into()))
    }

    pub fn submit_filter(&mut self) -> ToolbarOutcome {
        self.dispatch(ToolbarAction::SubmitFilter)
    }

    pub fn toggle_sort(&mut self) -> ToolbarOutcome {
        self.dispatch(ToolbarAction::ToggleSort)
    }

    pub fn set_artifacts_count(&mut self, artifacts_count: Option<u64>) {
        if self.host.props().artifacts_count != artifacts_count {
            self.host
                .update_props(|props| props.artifacts_count = artifacts_count);
        }
    }

    pub fn artifacts_count(&self) -> Option<u64> {
        self.host.props().artifacts_count
    }

    /// Committed state
    pub fn state(&self) -> &ToolbarState {
        self.host.state()
    }

    /// State including updates not yet flushed
    pub fn latest_state(&self) -> ToolbarState {
        self.host.latest_state()
    }

    pub fn flush(&mut self) -> bool {
        self.host.flush()
    }

    pub fn view(&mut self) -> &ToolbarViewModel {
        self.host.view()
    }

    pub fn render_count(&self) -> u64 {
        self.host.render_count()
    }

    fn emit(&mut self) -> FilterCriteria {
        let criteria = self.host.latest_state().criteria();
        match self.on_change.as_mut() {
            Some(callback) => {
                debug!(
                    field = %criteria.field,
                    value = %criteria.value,
                    sort_ascending = criteria.sort_ascending,
                    "emitting filter criteria"
                );
                callback(criteria.clone());
            }
            None => debug!("no change listener; criteria dropped"),
        }
        criteria
    }
}

fn log_action(action: &ToolbarAction) {
    match action {
        ToolbarAction::ToggleDropdown(open) => debug!(open, "toggling filter dropdown"),
        ToolbarAction::SelectField(field) => debug!(field = %field, "setting filter type"),
        ToolbarAction::EditFilterText(text) => debug!(value = %text, "setting filter value"),
        ToolbarAction::SubmitFilter => debug!("filter submit"),
        ToolbarAction::ToggleSort => debug!("toggling the ascending flag"),
    }
}
