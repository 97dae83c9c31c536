//! Artifacts screen: owner of the header, toolbar and list.
//!
//! The toolbar's callback forwards criteria into a channel. [`ArtifactsPage::pump`]
//! drains it, queries the [`ArtifactSource`] and hands the results to the
//! list. Keyboard input arrives already decoded as [`PageInput`].

use std::sync::mpsc::{self, Receiver, Sender};

use regview_types::{Artifact, FilterCriteria, FilterField, Route};
use serde::Serialize;
use tracing::{debug, warn};

use crate::components::{
    ArtifactList, FilterSortToolbar, NavigationHeader, ToolbarOutcome, ToolbarProps,
};
use crate::service::ArtifactSource;
use crate::view::{Patch, ViewHost, ViewSpec};
use crate::view_models::{ArtifactsPageViewModel, PageChromeViewModel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Focus {
    #[default]
    List,
    FilterInput,
    Dropdown,
}

/// Decoded key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageInput {
    Char(char),
    Backspace,
    Enter,
    Up,
    Down,
    Escape,
}

/// What the host should do after an input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageCommand {
    None,
    Navigate(Route),
    Quit,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct PageState {
    focus: Focus,
    selected_row: usize,
    dropdown_cursor: usize,
    error_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PageField {
    Focus(Focus),
    SelectedRow(usize),
    DropdownCursor(usize),
    ErrorMessage(Option<String>),
}

impl Patch for PageState {
    type Field = PageField;

    fn apply(self, field: PageField) -> Self {
        match field {
            PageField::Focus(focus) => Self { focus, ..self },
            PageField::SelectedRow(selected_row) => Self {
                selected_row,
                ..self
            },
            PageField::DropdownCursor(dropdown_cursor) => Self {
                dropdown_cursor,
                ..self
            },
            PageField::ErrorMessage(error_message) => Self {
                error_message,
                ..self
            },
        }
    }
}

struct ChromeProps {
    row_count: usize,
}

const CHROME: ViewSpec<ChromeProps, PageState, PageChromeViewModel> =
    ViewSpec::new("artifacts-page", init_chrome, render_chrome);

fn init_chrome(_props: &ChromeProps) -> PageState {
    PageState::default()
}

fn render_chrome(props: &ChromeProps, state: &PageState) -> PageChromeViewModel {
    let selected_row = match props.row_count {
        0 => None,
        n => Some(state.selected_row.min(n - 1)),
    };
    PageChromeViewModel {
        focus: state.focus,
        selected_row,
        dropdown_cursor: state.dropdown_cursor,
        error_message: state.error_message.clone(),
    }
}

pub struct ArtifactsPage<S> {
    source: S,
    header: NavigationHeader,
    toolbar: FilterSortToolbar,
    list: ArtifactList,
    chrome: ViewHost<ChromeProps, PageState, PageChromeViewModel>,
    requests: Sender<FilterCriteria>,
    inbox: Receiver<FilterCriteria>,
}

impl<S: ArtifactSource> ArtifactsPage<S> {
    /// Mount the screen and queue the initial load. Nothing is fetched until
    /// the first [`pump`](Self::pump).
    pub fn new(source: S) -> Self {
        let (requests, inbox) = mpsc::channel();
        let forward = requests.clone();
        let toolbar = FilterSortToolbar::new(ToolbarProps::new(None).on_change(move |criteria| {
            if forward.send(criteria).is_err() {
                warn!("artifacts page dropped; criteria discarded");
            }
        }));

        let mut page = Self {
            source,
            header: NavigationHeader::new(),
            toolbar,
            list: ArtifactList::default(),
            chrome: CHROME.mount(ChromeProps { row_count: 0 }),
            requests,
            inbox,
        };
        page.refresh();
        page
    }

    /// Re-request the toolbar's current criteria.
    pub fn refresh(&mut self) {
        let criteria = self.toolbar.latest_state().criteria();
        self.toolbar.set_artifacts_count(None);
        if self.requests.send(criteria).is_err() {
            warn!("criteria inbox closed; refresh discarded");
        }
    }

    /// Serve every queued criteria in arrival order. Returns how many were
    /// served.
    pub fn pump(&mut self) -> usize {
        let mut served = 0;
        while let Ok(criteria) = self.inbox.try_recv() {
            self.load(&criteria);
            served += 1;
        }
        served
    }

    fn load(&mut self, criteria: &FilterCriteria) {
        match self.source.fetch(criteria) {
            Ok(results) => {
                debug!(count = results.count, "artifacts loaded");
                let row_count = results.artifacts.len();
                self.list.set_artifacts(results.artifacts);
                self.toolbar.set_artifacts_count(Some(results.count));
                self.chrome.update_props(|props| props.row_count = row_count);
                self.chrome.set_multi_state([
                    PageField::SelectedRow(0),
                    PageField::ErrorMessage(None),
                ]);
            }
            Err(err) => {
                warn!(error = %err, "artifact fetch failed");
                // Rows from the last good load stay on screen.
                self.toolbar
                    .set_artifacts_count(Some(self.list.len() as u64));
                self.chrome
                    .set_single_state(PageField::ErrorMessage(Some(err.to_string())));
            }
        }
    }

    pub fn handle(&mut self, input: PageInput) -> PageCommand {
        let ui = self.chrome.latest_state();
        debug!(?input, focus = ?ui.focus, "page input");

        match ui.focus {
            Focus::List => self.handle_list(input, &ui),
            Focus::FilterInput => {
                self.handle_filter_input(input);
                PageCommand::None
            }
            Focus::Dropdown => {
                self.handle_dropdown(input, &ui);
                PageCommand::None
            }
        }
    }

    fn handle_list(&mut self, input: PageInput, ui: &PageState) -> PageCommand {
        let last_row = self.list.len().saturating_sub(1);
        match input {
            PageInput::Up | PageInput::Char('k') => {
                let row = ui.selected_row.min(last_row).saturating_sub(1);
                self.chrome.set_single_state(PageField::SelectedRow(row));
            }
            PageInput::Down | PageInput::Char('j') => {
                let row = (ui.selected_row + 1).min(last_row);
                self.chrome.set_single_state(PageField::SelectedRow(row));
            }
            PageInput::Enter => {
                if let Some(artifact) = self.list.artifacts().get(ui.selected_row.min(last_row)) {
                    return PageCommand::Navigate(Route::ArtifactDetail(artifact.id.clone()));
                }
            }
            PageInput::Char('/') => {
                self.chrome.set_single_state(PageField::Focus(Focus::FilterInput));
            }
            PageInput::Char('f') => {
                let current = FilterField::from_selection(&self.toolbar.latest_state().selected_field);
                let cursor = FilterField::ALL
                    .iter()
                    .position(|field| *field == current)
                    .unwrap_or_default();
                self.toolbar.toggle_dropdown(true);
                self.chrome.set_multi_state([
                    PageField::Focus(Focus::Dropdown),
                    PageField::DropdownCursor(cursor),
                ]);
            }
            PageInput::Char('s') => {
                let outcome = self.toolbar.toggle_sort();
                self.committed(outcome);
            }
            PageInput::Char('r') => return PageCommand::Navigate(Route::Rules),
            PageInput::Char('q') => return PageCommand::Quit,
            _ => {}
        }
        PageCommand::None
    }

    fn handle_filter_input(&mut self, input: PageInput) {
        let mut text = self.toolbar.latest_state().filter_text;
        match input {
            PageInput::Char(c) => {
                text.push(c);
                self.toolbar.edit_filter_text(text);
            }
            PageInput::Backspace => {
                if text.pop().is_some() {
                    self.toolbar.edit_filter_text(text);
                }
            }
            PageInput::Enter => {
                let outcome = self.toolbar.submit_filter();
                self.committed(outcome);
                self.chrome.set_single_state(PageField::Focus(Focus::List));
            }
            PageInput::Escape => {
                self.chrome.set_single_state(PageField::Focus(Focus::List));
            }
            PageInput::Up | PageInput::Down => {}
        }
    }

    fn handle_dropdown(&mut self, input: PageInput, ui: &PageState) {
        let last_item = FilterField::ALL.len() - 1;
        match input {
            PageInput::Up | PageInput::Char('k') => {
                let cursor = ui.dropdown_cursor.saturating_sub(1);
                self.chrome.set_single_state(PageField::DropdownCursor(cursor));
            }
            PageInput::Down | PageInput::Char('j') => {
                let cursor = (ui.dropdown_cursor + 1).min(last_item);
                self.chrome.set_single_state(PageField::DropdownCursor(cursor));
            }
            PageInput::Enter => {
                let field = FilterField::ALL[ui.dropdown_cursor.min(last_item)];
                let outcome = self.toolbar.select_field(field.as_str());
                self.committed(outcome);
                self.chrome.set_single_state(PageField::Focus(Focus::List));
            }
            PageInput::Escape => {
                self.toolbar.toggle_dropdown(false);
                self.chrome.set_single_state(PageField::Focus(Focus::List));
            }
            _ => {}
        }
    }

    /// The count is unknown from emission until the next load completes.
    fn committed(&mut self, outcome: ToolbarOutcome) {
        if outcome.emitted.is_some() {
            self.toolbar.set_artifacts_count(None);
        }
    }

    pub fn focus(&self) -> Focus {
        self.chrome.latest_state().focus
    }

    pub fn selected_artifact(&self) -> Option<&Artifact> {
        let row = self.chrome.latest_state().selected_row;
        self.list
            .artifacts()
            .get(row.min(self.list.len().saturating_sub(1)))
    }

    pub fn toolbar(&self) -> &FilterSortToolbar {
        &self.toolbar
    }

    pub fn toolbar_mut(&mut self) -> &mut FilterSortToolbar {
        &mut self.toolbar
    }

    pub fn list(&self) -> &ArtifactList {
        &self.list
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Flush every child and compose the screen.
    pub fn view(&mut self) -> ArtifactsPageViewModel {
        ArtifactsPageViewModel {
            header: self.header.view().clone(),
            toolbar: self.toolbar.view().clone(),
            list: self.list.view().clone(),
            chrome: self.chrome.view().clone(),
        }
    }
}
