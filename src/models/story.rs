use serde::{Deserialize, Serialize};

/// The three user-supplied words a story is built from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordTriple {
    pub noun: String,
    pub verb: String,
    pub adjective: String,
}

impl WordTriple {
    pub fn new(
        noun: impl Into<String>,
        verb: impl Into<String>,
        adjective: impl Into<String>,
    ) -> Self {
        Self {
            noun: noun.into(),
            verb: verb.into(),
            adjective: adjective.into(),
        }
    }

    /// Presence check only; whitespace-only values count as filled in,
    /// matching the hosted frontend.
    pub fn is_complete(&self) -> bool {
        !self.noun.is_empty() && !self.verb.is_empty() && !self.adjective.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_expected_field_names() {
        let words = WordTriple::new("dragon", "paints", "tiny");
        let json = serde_json::to_value(&words).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"noun": "dragon", "verb": "paints", "adjective": "tiny"})
        );
    }

    #[test]
    fn test_is_complete_requires_all_three() {
        assert!(WordTriple::new("dragon", "paints", "tiny").is_complete());
        assert!(!WordTriple::new("", "paints", "tiny").is_complete());
        assert!(!WordTriple::new("dragon", "", "tiny").is_complete());
        assert!(!WordTriple::new("dragon", "paints", "").is_complete());
    }

    #[test]
    fn test_whitespace_only_words_pass_the_presence_check() {
        assert!(WordTriple::new("  ", "paints", "tiny").is_complete());
    }
}
