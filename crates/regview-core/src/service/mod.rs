//! Data-access seam consumed by the owning screen.
//!
//! Components never call this; [`crate::page::ArtifactsPage`] does, with the
//! criteria its toolbar emitted.

mod catalog;

pub use catalog::InMemoryCatalog;

use regview_types::{Artifact, FilterCriteria};
use serde::Serialize;

use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactSearchResults {
    pub artifacts: Vec<Artifact>,
    pub count: u64,
}

pub trait ArtifactSource {
    /// Filtered and sorted artifacts for the given criteria
    fn fetch(&self, criteria: &FilterCriteria) -> Result<ArtifactSearchResults>;

    fn get(&self, id: &str) -> Option<Artifact>;
}

impl<T: ArtifactSource + ?Sized> ArtifactSource for &T {
    fn fetch(&self, criteria: &FilterCriteria) -> Result<ArtifactSearchResults> {
        (**self).fetch(criteria)
    }

    fn get(&self, id: &str) -> Option<Artifact> {
        (**self).get(id)
    }
}
