use regview_types::Route;

use crate::view::{EmptyState, ViewHost, ViewSpec};
use crate::view_models::{HeaderViewModel, NavActionViewModel};

pub const BRAND_TEXT: &str = "Service Registry";
pub const BRAND_ALT: &str = "Apicurio Registry";

const HEADER: ViewSpec<(), EmptyState, HeaderViewModel> =
    ViewSpec::new("app-header", EmptyState::init, render);

fn render(_props: &(), _state: &EmptyState) -> HeaderViewModel {
    HeaderViewModel {
        brand_alt: BRAND_ALT.to_string(),
        brand_text: BRAND_TEXT.to_string(),
        home: NavActionViewModel::new(BRAND_TEXT, &Route::Artifacts),
        settings: NavActionViewModel::new("Settings", &Route::Rules),
    }
}

/// Top-of-screen branding and the settings link
pub struct NavigationHeader {
    host: ViewHost<(), EmptyState, HeaderViewModel>,
}

impl NavigationHeader {
    pub fn new() -> Self {
        Self {
            host: HEADER.mount(()),
        }
    }

    pub fn view(&mut self) -> &HeaderViewModel {
        self.host.view()
    }
}

impl Default for NavigationHeader {
    fn default() -> Self {
        Self::new()
    }
}
