//! # regview-core
//!
//! Presentation core for the artifact registry browser.
//!
//! ```text
//! [ keys ] --> ArtifactsPage --> FilterSortToolbar --criteria--> ArtifactSource
//!                   |                                                 |
//!                   +<------------- ArtifactList <----- results ------+
//! ```
//!
//! Every element is a [`view::ViewHost`] mounted from a [`view::ViewSpec`]
//! (initializer + render function). Render functions produce view models
//! from `view_models/`; painting them is left to the caller.
//!
//! Nothing in this crate touches the filesystem, network or terminal.

pub mod components;
pub mod error;
pub mod page;
pub mod presenters;
pub mod service;
pub mod view;
pub mod view_models;

pub use components::{
    ArtifactList, FilterSortToolbar, NavigationHeader, OnChange, ToolbarAction, ToolbarOutcome,
    ToolbarProps, ToolbarState,
};
pub use error::{Error, Result};
pub use page::{ArtifactsPage, Focus, PageCommand, PageInput};
pub use service::{ArtifactSearchResults, ArtifactSource, InMemoryCatalog};
pub use view::{EmptyState, Patch, StateDelta, ViewHost, ViewSpec};
