use std::fmt;

/// Addressable screens. The core only builds and parses path strings;
/// switching screens is the host's job.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Artifacts,
    ArtifactDetail(String),
    Rules,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Artifacts => "/artifacts".to_string(),
            Route::ArtifactDetail(id) => format!("/artifacts/{}", id),
            Route::Rules => "/rules".to_string(),
        }
    }

    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" | "/artifacts" => Some(Route::Artifacts),
            "/rules" => Some(Route::Rules),
            _ => {
                let id = trimmed.strip_prefix("/artifacts/")?;
                if id.is_empty() || id.contains('/') {
                    return None;
                }
                Some(Route::ArtifactDetail(id.to_string()))
            }
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(Route::Artifacts.path(), "/artifacts");
        assert_eq!(Route::Rules.path(), "/rules");
        assert_eq!(
            Route::ArtifactDetail("petstore".into()).path(),
            "/artifacts/petstore"
        );
    }

    #[test]
    fn test_parse_round_trips_detail() {
        assert_eq!(
            Route::parse("/artifacts/orders-v2"),
            Some(Route::ArtifactDetail("orders-v2".into()))
        );
        assert_eq!(Route::parse("/"), Some(Route::Artifacts));
        assert_eq!(Route::parse("/artifacts/a/b"), None);
        assert_eq!(Route::parse("/unknown"), None);
    }
}
