//! # TypeScript Topic Cards
//!
//! Cards teaching TypeScript-in-React, each pairing a JavaScript example
//! with its typed counterpart.

use serde::{Deserialize, Serialize};

use crate::concept::Difficulty;

/// TypeScript topic category filter axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopicCategory {
    Basics,
    Components,
    Hooks,
    Patterns,
    Advanced,
}

/// A TypeScript topic card.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeScriptTopic {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: TopicCategory,
    pub difficulty: Difficulty,

    /// Markdown body shown on the detail page.
    pub content: String,

    /// Untyped example, rendered side by side with `ts_example`.
    pub js_example: String,

    /// Typed counterpart.
    pub ts_example: String,

    pub benefits: Vec<String>,
    pub common_mistakes: Vec<String>,
    pub best_practices: Vec<String>,
    pub related_topics: Vec<String>,
}
