//! View models: the rendered output of every component.
//!
//! Pure data containers. Must implement `Serialize`; no calculation logic.
//! Painting them (terminal widgets, JSON, plain text) happens outside this
//! crate.

pub mod artifact_list;
pub mod common;
pub mod detail;
pub mod header;
pub mod page;
pub mod toolbar;

pub use artifact_list::{ArtifactListViewModel, ArtifactRowViewModel, TypeIndicatorViewModel};
pub use common::NavActionViewModel;
pub use detail::ArtifactDetailViewModel;
pub use header::HeaderViewModel;
pub use page::{ArtifactsPageViewModel, PageChromeViewModel};
pub use toolbar::{DropdownItemViewModel, SortIcon, ToolbarViewModel};
