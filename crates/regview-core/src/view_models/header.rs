use serde::Serialize;

use super::common::NavActionViewModel;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderViewModel {
    pub brand_alt: String,
    pub brand_text: String,
    /// Clicking the brand returns to the artifact list
    pub home: NavActionViewModel,
    pub settings: NavActionViewModel,
}
