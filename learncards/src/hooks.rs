//! # Hook Cards
//!
//! Reference cards for React hooks: signature, parameters, return value,
//! common patterns and pitfalls.

use serde::{Deserialize, Serialize};

use crate::concept::CodeExample;

/// Built-in React hook vs. a custom hook from the site's cookbook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HookCategory {
    BuiltIn,
    Custom,
}

/// What concern the hook addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HookKind {
    State,
    Effect,
    Context,
    Performance,
    Utility,
}

/// One parameter in a hook signature.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,

    /// TypeScript type as displayed.
    #[serde(rename = "type")]
    pub type_name: String,

    pub description: String,

    #[serde(default)]
    pub optional: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

/// A hook reference card.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: HookCategory,

    #[serde(rename = "type")]
    pub kind: HookKind,

    /// Signature line shown in the card header.
    pub syntax: String,

    pub parameters: Vec<Parameter>,
    pub return_value: String,
    pub examples: Vec<CodeExample>,
    pub common_patterns: Vec<String>,
    pub pitfalls: Vec<String>,
    pub related_hooks: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_kebab_case() {
        let json = serde_json::to_string(&HookCategory::BuiltIn).unwrap();
        assert_eq!(json, "\"built-in\"");
    }
}
