pub mod artifact;
pub mod criteria;
pub mod route;

pub use artifact::{Artifact, ArtifactType};
pub use criteria::{FilterCriteria, FilterField};
pub use route::Route;
