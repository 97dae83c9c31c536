//! Browse application: routes between the artifacts page, artifact detail
//! and the rules screen.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};
use regview_core::presenters::present_artifact_detail;
use regview_core::view_models::ArtifactDetailViewModel;
use regview_core::{ArtifactSource, ArtifactsPage, Focus, PageCommand, PageInput};
use regview_types::Route;
use tracing::info;

use crate::presentation::views::tui::{
    ArtifactDetailView, ArtifactListView, ArtifactMissingView, DropdownView, HeaderView,
    RulesView, StatusBarView, ToolbarView,
};

const LIST_HINTS: &[(&str, &str)] = &[
    ("/", "Filter"),
    ("f", "Field"),
    ("s", "Sort"),
    ("Enter", "View Artifact"),
    ("r", "Settings"),
    ("q", "Quit"),
];
const INPUT_HINTS: &[(&str, &str)] = &[("Enter", "Apply"), ("Esc", "Cancel")];
const DROPDOWN_HINTS: &[(&str, &str)] = &[("j/k", "Move"), ("Enter", "Select"), ("Esc", "Close")];
const SCREEN_HINTS: &[(&str, &str)] = &[("Esc", "Back"), ("r", "Settings"), ("q", "Quit")];

pub struct BrowseApp<S> {
    page: ArtifactsPage<S>,
    route: Route,
    /// Presented artifact while on a detail route; `None` when the id is unknown
    detail: Option<ArtifactDetailViewModel>,
    should_quit: bool,
}

impl<S: ArtifactSource> BrowseApp<S> {
    pub fn new(source: S) -> Self {
        let mut page = ArtifactsPage::new(source);
        page.pump();
        Self {
            page,
            route: Route::Artifacts,
            detail: None,
            should_quit: false,
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn page(&self) -> &ArtifactsPage<S> {
        &self.page
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Serve queued criteria. Called once per loop iteration.
    pub fn tick(&mut self) -> usize {
        self.page.pump()
    }

    pub fn navigate(&mut self, route: Route) {
        info!(from = %self.route, to = %route, "navigate");
        self.detail = match &route {
            Route::ArtifactDetail(id) => self
                .page
                .source()
                .get(id)
                .map(|artifact| present_artifact_detail(&artifact)),
            Route::Artifacts | Route::Rules => None,
        };
        self.route = route;
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.route {
            Route::Artifacts => {
                let Some(input) = page_input(&key) else {
                    return;
                };
                match self.page.handle(input) {
                    PageCommand::None => {}
                    PageCommand::Navigate(route) => self.navigate(route),
                    PageCommand::Quit => self.should_quit = true,
                }
            }
            Route::ArtifactDetail(_) | Route::Rules => match key.code {
                KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => {
                    self.navigate(Route::Artifacts)
                }
                KeyCode::Char('r') => self.navigate(Route::Rules),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
        }
    }

    pub fn render(&mut self, f: &mut Frame) {
        let page = self.page.view();
        let [header_area, toolbar_area, body_area, status_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(f.area());

        f.render_widget(HeaderView::new(&page.header, self.route.path()), header_area);

        // Detail and rules screens take the toolbar's rows as well.
        let screen_area = Rect {
            height: toolbar_area.height + body_area.height,
            ..toolbar_area
        };

        let hints = match &self.route {
            Route::Artifacts => {
                let focus = page.chrome.focus;
                f.render_widget(ToolbarView::new(&page.toolbar, focus), toolbar_area);
                f.render_widget(
                    ArtifactListView::new(&page.list, page.chrome.selected_row, focus == Focus::List),
                    body_area,
                );

                if page.toolbar.dropdown_open {
                    let dropdown = DropdownView::new(&page.toolbar, page.chrome.dropdown_cursor);
                    let area = dropdown_area(toolbar_area, dropdown.height(), f.area());
                    f.render_widget(dropdown, area);
                }

                match focus {
                    Focus::List => LIST_HINTS,
                    Focus::FilterInput => INPUT_HINTS,
                    Focus::Dropdown => DROPDOWN_HINTS,
                }
            }
            Route::ArtifactDetail(id) => {
                match &self.detail {
                    Some(detail) => f.render_widget(ArtifactDetailView::new(detail), screen_area),
                    None => f.render_widget(ArtifactMissingView::new(id), screen_area),
                }
                SCREEN_HINTS
            }
            Route::Rules => {
                f.render_widget(RulesView, screen_area);
                SCREEN_HINTS
            }
        };

        f.render_widget(
            StatusBarView::new(hints, page.chrome.error_message.as_deref()),
            status_area,
        );
    }
}

/// Overlay just below the dropdown label, clamped to the frame.
fn dropdown_area(toolbar: Rect, height: u16, frame: Rect) -> Rect {
    let x = toolbar.x + 1;
    let y = toolbar.y + toolbar.height.saturating_sub(1);
    Rect {
        x,
        y,
        width: 22.min(frame.right().saturating_sub(x)),
        height: height.min(frame.bottom().saturating_sub(y)),
    }
}

pub fn page_input(key: &KeyEvent) -> Option<PageInput> {
    match key.code {
        KeyCode::Char(c) => Some(PageInput::Char(c)),
        KeyCode::Backspace => Some(PageInput::Backspace),
        KeyCode::Enter => Some(PageInput::Enter),
        KeyCode::Up => Some(PageInput::Up),
        KeyCode::Down => Some(PageInput::Down),
        KeyCode::Esc => Some(PageInput::Escape),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::views::tui::test_support::{buffer_lines, contains};
    use ratatui::{Terminal, backend::TestBackend};
    use regview_core::InMemoryCatalog;
    use regview_testing::fixtures::sample_catalog;

    fn press(app: &mut BrowseApp<InMemoryCatalog>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
        app.tick();
    }

    fn type_text(app: &mut BrowseApp<InMemoryCatalog>, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn screen(app: &mut BrowseApp<InMemoryCatalog>) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        buffer_lines(terminal.backend().buffer())
    }

    #[test]
    fn test_initial_screen() {
        let mut app = BrowseApp::new(sample_catalog());
        let lines = screen(&mut app);

        assert!(contains(&lines, "Service Registry"));
        assert!(contains(&lines, "5 Artifacts Found"));
        assert!(contains(&lines, "> [JSON] Audit Log  #auth #compliance"));
    }

    #[test]
    fn test_filter_then_open_detail_and_go_back() {
        let mut app = BrowseApp::new(sample_catalog());

        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "billing");
        press(&mut app, KeyCode::Enter);
        let lines = screen(&mut app);
        assert!(contains(&lines, "1 Artifacts Found"));
        assert!(contains(&lines, "/ billing"));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.route(), &Route::ArtifactDetail("billing".to_string()));
        let lines = screen(&mut app);
        assert!(contains(&lines, "Protobuf Schema (PROTOBUF)"));
        assert!(contains(&lines, "Invoices and payments"));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.route(), &Route::Artifacts);
    }

    #[test]
    fn test_dropdown_overlay_and_selection() {
        let mut app = BrowseApp::new(sample_catalog());

        press(&mut app, KeyCode::Char('f'));
        let lines = screen(&mut app);
        assert!(contains(&lines, "Filter by"));
        assert!(contains(&lines, "> Everything"));

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        let lines = screen(&mut app);
        assert!(!contains(&lines, "Filter by"));
        assert!(contains(&lines, "[f] Labels ▾"));
        assert_eq!(app.page().toolbar().state().selected_field, "Labels");
    }

    #[test]
    fn test_sort_toggle_reverses_rows() {
        let mut app = BrowseApp::new(sample_catalog());
        press(&mut app, KeyCode::Char('s'));

        let lines = screen(&mut app);
        assert!(contains(&lines, "Z→A"));
        assert_eq!(
            app.page().selected_artifact().map(|a| a.id.as_str()),
            Some("user-events")
        );
    }

    #[test]
    fn test_settings_screen_and_quit() {
        let mut app = BrowseApp::new(sample_catalog());

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.route(), &Route::Rules);
        assert!(contains(&screen(&mut app), "Global Rules"));

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_unknown_detail_route() {
        let mut app = BrowseApp::new(sample_catalog());
        app.navigate(Route::ArtifactDetail("gone".to_string()));
        assert!(contains(&screen(&mut app), "Artifact 'gone' not found"));
    }

    #[test]
    fn test_ctrl_c_quits_from_filter_input() {
        let mut app = BrowseApp::new(sample_catalog());
        press(&mut app, KeyCode::Char('/'));
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }
}
