use serde::{Deserialize, Serialize};

/// Query string of `GET /api/greet`.
///
/// `name` is required; it is optional here only so its absence can be
/// reported as a missing parameter.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct GreetQuery {
    pub name: Option<String>,
}

impl GreetQuery {
    /// Pick the parameters out of decoded query pairs. A repeated key keeps
    /// its last value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let name = pairs
            .into_iter()
            .filter(|(key, _)| key == "name")
            .map(|(_, value)| value)
            .last();

        Self { name }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    pub message: String,
}

impl Greeting {
    /// Echoes `name` verbatim; no escaping or length limit is applied.
    pub fn for_name(name: &str) -> Self {
        Self {
            message: format!("Hello, {}!", name),
        }
    }
}
