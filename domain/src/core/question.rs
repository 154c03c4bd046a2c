//! Question value object

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Option keys every survey question offers, in display order
pub const OPTION_KEYS: [&str; 4] = ["A", "B", "C", "D"];

/// A multiple-choice survey question (Value Object)
///
/// Options are keyed by a single uppercase letter. The map is ordered, so
/// serialization always lists `A` through `D` in sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: String,
    text: String,
    options: BTreeMap<String, String>,
}

impl Question {
    /// Create a question from its id, text, and `(key, text)` option pairs
    pub fn new<I, K, V>(id: impl Into<String>, text: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            id: id.into(),
            text: text.into(),
            options: options
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Stable identifier, e.g. `Q1`
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The question wording shown to the user
    pub fn text(&self) -> &str {
        &self.text
    }

    /// All options, ordered by key
    pub fn options(&self) -> &BTreeMap<String, String> {
        &self.options
    }

    /// Text of a single option, if the key exists
    pub fn option_text(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.id, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Question {
        Question::new(
            "Q7",
            "Letting go of old experience feels like a",
            [("B", "Challenge"), ("A", "Threat"), ("D", "Opportunity"), ("C", "Liberation")],
        )
    }

    #[test]
    fn test_option_lookup() {
        let q = sample();
        assert_eq!(q.option_text("C"), Some("Liberation"));
        assert_eq!(q.option_text("E"), None);
    }

    #[test]
    fn test_options_serialize_in_key_order() {
        let json = serde_json::to_string(&sample()).unwrap();
        let a = json.find("\"A\"").unwrap();
        let b = json.find("\"B\"").unwrap();
        let c = json.find("\"C\"").unwrap();
        let d = json.find("\"D\"").unwrap();
        assert!(a < b && b < c && c < d);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            sample().to_string(),
            "Q7: Letting go of old experience feels like a"
        );
    }
}
