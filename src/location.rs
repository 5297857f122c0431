use serde::{Deserialize, Serialize};

/// Opaque identifier for a trip endpoint. The advisor only threads these
/// through to the data feeds; nothing is derived from their contents.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Location(String);

impl Location {
    pub fn new<S: Into<String>>(name: S) -> Location {
        Location(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
