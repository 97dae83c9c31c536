//! Screen elements
//!
//! Each component wraps a [`crate::view::ViewHost`] mounted from a private
//! `ViewSpec` and exposes the operations its owner may call. State is
//! private; owners only see the rendered view model.

pub mod artifact_list;
pub mod header;
pub mod toolbar;

pub use artifact_list::{ArtifactList, ArtifactListProps};
pub use header::NavigationHeader;
pub use toolbar::{
    FilterSortToolbar, OnChange, ToolbarAction, ToolbarField, ToolbarOutcome, ToolbarProps,
    ToolbarState, Transition,
};
