use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// Catalog document is not valid artifact JSON
    CatalogParse(serde_json::Error),

    /// Two catalog entries share an id
    DuplicateId(String),

    /// The data source could not answer a query
    Source(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::CatalogParse(err) => write!(f, "Catalog parse error: {}", err),
            Error::DuplicateId(id) => write!(f, "Duplicate artifact id: {}", id),
            Error::Source(msg) => write!(f, "Artifact source error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::CatalogParse(err) => Some(err),
            Error::DuplicateId(_) | Error::Source(_) => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::CatalogParse(err)
    }
}
