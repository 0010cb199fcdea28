//! # Learning Catalog
//!
//! Content library for the React/TypeScript teaching site: card data
//! types, the shipped seed catalog, and the list-page filtering logic.
//!
//! ## Card Types
//!
//! | Type | Filter axes |
//! |------|-------------|
//! | [`Concept`] | category, difficulty, search |
//! | [`HookInfo`] | built-in/custom, kind, search |
//! | [`TypeScriptTopic`] | category, difficulty, search |
//!
//! ## Usage
//!
//! ```rust
//! use learncards::{data, ConceptFilter, ConceptCategory};
//!
//! let catalog = data::concepts();
//! let filter = ConceptFilter {
//!     category: Some(ConceptCategory::Basics),
//!     ..Default::default()
//! };
//! let basics = filter.apply(&catalog);
//! assert!(!basics.is_empty());
//! ```

pub mod concept;
pub mod data;
pub mod filter;
pub mod hooks;
pub mod typescript;

pub use concept::{CodeExample, Concept, ConceptCategory, Difficulty};
pub use filter::{ConceptFilter, HookFilter, TopicFilter};
pub use hooks::{HookCategory, HookInfo, HookKind, Parameter};
pub use typescript::{TopicCategory, TypeScriptTopic};
