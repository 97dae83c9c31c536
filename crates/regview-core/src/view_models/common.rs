use regview_types::Route;
use serde::Serialize;

/// A link to another screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavActionViewModel {
    pub label: String,
    pub route: String,
}

impl NavActionViewModel {
    pub fn new(label: impl Into<String>, route: &Route) -> Self {
        Self {
            label: label.into(),
            route: route.path(),
        }
    }
}
