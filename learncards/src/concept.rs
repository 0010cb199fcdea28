//! # Concept Cards
//!
//! Data types for the React core-concept cards: a concept has prose
//! content, runnable code examples, and the category/difficulty axes the
//! site filters on.

use serde::{Deserialize, Serialize};

/// Concept category filter axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConceptCategory {
    Basics,
    Hooks,
    Performance,
    Patterns,
}

/// Difficulty filter axis, shared with TypeScript topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// A code example attached to a card.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeExample {
    pub id: String,
    pub title: String,
    pub code: String,

    /// Highlighting language, e.g. `jsx` or `tsx`.
    pub language: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the site offers a live playground for this example.
    #[serde(default)]
    pub runnable: bool,
}

/// A React concept card.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Concept {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: ConceptCategory,
    pub difficulty: Difficulty,

    /// Markdown body shown on the detail page.
    pub content: String,

    pub code_examples: Vec<CodeExample>,

    /// Ids of related concepts, rendered as links.
    pub related_concepts: Vec<String>,

    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&ConceptCategory::Performance).unwrap();
        assert_eq!(json, "\"performance\"");

        let back: Difficulty = serde_json::from_str("\"intermediate\"").unwrap();
        assert_eq!(back, Difficulty::Intermediate);
    }
}
