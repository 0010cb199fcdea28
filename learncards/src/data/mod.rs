//! # Seed Catalog
//!
//! The static card data the site ships with, one module per card type.

mod concepts;
mod hooks;
mod typescript;

pub use concepts::concepts;
pub use hooks::hooks;
pub use typescript::typescript_topics;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_concept_ids_unique() {
        let all = concepts();
        let ids: HashSet<_> = all.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), all.len());
    }

    #[test]
    fn test_related_concepts_resolve() {
        let all = concepts();
        let ids: HashSet<_> = all.iter().map(|c| c.id.as_str()).collect();
        for concept in &all {
            for related in &concept.related_concepts {
                assert!(ids.contains(related.as_str()), "dangling link: {}", related);
            }
        }
    }

    #[test]
    fn test_hook_ids_unique() {
        let all = hooks();
        let ids: HashSet<_> = all.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids.len(), all.len());
    }

    #[test]
    fn test_topic_ids_unique() {
        let all = typescript_topics();
        let ids: HashSet<_> = all.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), all.len());
    }
}
