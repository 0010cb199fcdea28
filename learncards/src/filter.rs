//! # Card Filtering
//!
//! Client-side filtering for the list pages: equality on the category
//! axes plus a case-insensitive substring search. `None` on an axis means
//! the page's "all" option.
//!
//! Filtering is pure linear predicate evaluation over the catalog slice,
//! so applying the same filter twice yields the same rows as applying it
//! once.

use crate::concept::{Concept, ConceptCategory, Difficulty};
use crate::hooks::{HookCategory, HookInfo, HookKind};
use crate::typescript::{TopicCategory, TypeScriptTopic};

/// Case-insensitive substring match against a set of haystack fields.
fn search_matches(needle: &Option<String>, fields: &[&str]) -> bool {
    match needle {
        None => true,
        Some(term) => {
            let term = term.to_lowercase();
            term.is_empty() || fields.iter().any(|f| f.to_lowercase().contains(&term))
        }
    }
}

/// Filter for concept cards: category, difficulty and search term.
#[derive(Debug, Clone, Default)]
pub struct ConceptFilter {
    pub category: Option<ConceptCategory>,
    pub difficulty: Option<Difficulty>,
    pub search: Option<String>,
}

impl ConceptFilter {
    pub fn matches(&self, concept: &Concept) -> bool {
        self.category.map_or(true, |c| concept.category == c)
            && self.difficulty.map_or(true, |d| concept.difficulty == d)
            && search_matches(
                &self.search,
                &[
                    &concept.title,
                    &concept.description,
                    &concept.tags.join(" "),
                ],
            )
    }

    pub fn apply<'a>(&self, concepts: &'a [Concept]) -> Vec<&'a Concept> {
        concepts.iter().filter(|c| self.matches(c)).collect()
    }
}

/// Filter for hook cards: category, kind and search term.
#[derive(Debug, Clone, Default)]
pub struct HookFilter {
    pub category: Option<HookCategory>,
    pub kind: Option<HookKind>,
    pub search: Option<String>,
}

impl HookFilter {
    pub fn matches(&self, hook: &HookInfo) -> bool {
        self.category.map_or(true, |c| hook.category == c)
            && self.kind.map_or(true, |k| hook.kind == k)
            && search_matches(&self.search, &[&hook.name, &hook.description])
    }

    pub fn apply<'a>(&self, hooks: &'a [HookInfo]) -> Vec<&'a HookInfo> {
        hooks.iter().filter(|h| self.matches(h)).collect()
    }
}

/// Filter for TypeScript topic cards: category, difficulty and search.
#[derive(Debug, Clone, Default)]
pub struct TopicFilter {
    pub category: Option<TopicCategory>,
    pub difficulty: Option<Difficulty>,
    pub search: Option<String>,
}

impl TopicFilter {
    pub fn matches(&self, topic: &TypeScriptTopic) -> bool {
        self.category.map_or(true, |c| topic.category == c)
            && self.difficulty.map_or(true, |d| topic.difficulty == d)
            && search_matches(&self.search, &[&topic.title, &topic.description])
    }

    pub fn apply<'a>(&self, topics: &'a [TypeScriptTopic]) -> Vec<&'a TypeScriptTopic> {
        topics.iter().filter(|t| self.matches(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    #[test]
    fn test_empty_filter_keeps_everything() {
        let concepts = data::concepts();
        let filter = ConceptFilter::default();
        assert_eq!(filter.apply(&concepts).len(), concepts.len());
    }

    #[test]
    fn test_category_equality() {
        let concepts = data::concepts();
        let filter = ConceptFilter {
            category: Some(ConceptCategory::Basics),
            ..Default::default()
        };

        let hits = filter.apply(&concepts);
        assert!(!hits.is_empty());
        assert!(hits.iter().all(|c| c.category == ConceptCategory::Basics));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let concepts = data::concepts();
        let filter = ConceptFilter {
            search: Some("JSX".to_string()),
            ..Default::default()
        };
        let upper = filter.apply(&concepts);

        let filter = ConceptFilter {
            search: Some("jsx".to_string()),
            ..Default::default()
        };
        let lower = filter.apply(&concepts);

        assert!(!upper.is_empty());
        assert_eq!(
            upper.iter().map(|c| &c.id).collect::<Vec<_>>(),
            lower.iter().map(|c| &c.id).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let concepts = data::concepts();
        let filter = ConceptFilter {
            category: Some(ConceptCategory::Hooks),
            difficulty: Some(Difficulty::Intermediate),
            search: Some("state".to_string()),
        };

        let once: Vec<Concept> = filter.apply(&concepts).into_iter().cloned().collect();
        let twice = filter.apply(&once);

        assert_eq!(
            once.iter().map(|c| &c.id).collect::<Vec<_>>(),
            twice.iter().map(|c| &c.id).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_hook_filter_axes() {
        let hooks = data::hooks();
        let filter = HookFilter {
            category: Some(HookCategory::BuiltIn),
            kind: Some(HookKind::State),
            search: None,
        };

        let hits = filter.apply(&hooks);
        assert!(hits.iter().all(|h| h.category == HookCategory::BuiltIn
            && h.kind == HookKind::State));
    }

    #[test]
    fn test_topic_filter_idempotent() {
        let topics = data::typescript_topics();
        let filter = TopicFilter {
            category: Some(TopicCategory::Components),
            ..Default::default()
        };

        let once: Vec<TypeScriptTopic> = filter.apply(&topics).into_iter().cloned().collect();
        let twice = filter.apply(&once);
        assert_eq!(once.len(), twice.len());
    }

    #[test]
    fn test_empty_search_term_keeps_everything() {
        let hooks = data::hooks();
        let filter = HookFilter {
            search: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(filter.apply(&hooks).len(), hooks.len());
    }
}
