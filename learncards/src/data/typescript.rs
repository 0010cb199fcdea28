//! TypeScript topic seed data.

use crate::concept::Difficulty;
use crate::typescript::{TopicCategory, TypeScriptTopic};

/// The shipped TypeScript topic cards.
pub fn typescript_topics() -> Vec<TypeScriptTopic> {
    vec![
        TypeScriptTopic {
            id: "typed-props".into(),
            title: "Typing Component Props".into(),
            description: "Describe a component's props with an interface instead of PropTypes.".into(),
            category: TopicCategory::Components,
            difficulty: Difficulty::Beginner,
            content: "\
An interface per component makes the contract explicit: required vs. \
optional fields, unions for variants, and children typing all live in \
one place the editor can check.
"
            .into(),
            js_example: "function Badge({ label, tone }) {\n  return <span className={`badge-${tone}`}>{label}</span>;\n}"
                .into(),
            ts_example: "interface BadgeProps {\n  label: string;\n  tone?: \"info\" | \"warning\" | \"error\";\n}\n\nfunction Badge({ label, tone = \"info\" }: BadgeProps) {\n  return <span className={`badge-${tone}`}>{label}</span>;\n}"
                .into(),
            benefits: vec![
                "Typos in prop names fail at compile time".into(),
                "Editors autocomplete props at the call site".into(),
            ],
            common_mistakes: vec![
                "Using `any` for event handlers instead of React's event types".into(),
            ],
            best_practices: vec![
                "Prefer union literal types over bare strings for variant props".into(),
            ],
            related_topics: vec!["generic-components".into()],
        },
        TypeScriptTopic {
            id: "generic-components".into(),
            title: "Generic Components".into(),
            description: "Let the element type flow through list-like components.".into(),
            category: TopicCategory::Advanced,
            difficulty: Difficulty::Advanced,
            content: "\
A generic component keeps the item type connected from data to render \
callback, so `renderItem` receives the same `T` the `items` array holds.
"
            .into(),
            js_example: "function List({ items, renderItem }) {\n  return <ul>{items.map(renderItem)}</ul>;\n}"
                .into(),
            ts_example: "interface ListProps<T> {\n  items: T[];\n  renderItem: (item: T) => React.ReactNode;\n}\n\nfunction List<T>({ items, renderItem }: ListProps<T>) {\n  return <ul>{items.map(renderItem)}</ul>;\n}"
                .into(),
            benefits: vec!["The render callback's parameter is inferred, never `any`".into()],
            common_mistakes: vec!["Annotating `<T,>` incorrectly in .tsx files (the trailing comma matters)".into()],
            best_practices: vec!["Constrain the generic (`T extends { id: string }`) when the component needs keys".into()],
            related_topics: vec!["typed-props".into()],
        },
        TypeScriptTopic {
            id: "narrowing".into(),
            title: "Type Narrowing".into(),
            description: "Use control flow to refine a union to one of its members.".into(),
            category: TopicCategory::Basics,
            difficulty: Difficulty::Intermediate,
            content: "\
`typeof`, `in`, and discriminant fields all narrow a union inside the \
guarded branch. Exhaustive `switch` over a discriminant plus a `never` \
default catches unhandled variants at compile time.
"
            .into(),
            js_example: "function area(shape) {\n  if (shape.kind === \"circle\") return Math.PI * shape.r ** 2;\n  return shape.w * shape.h;\n}"
                .into(),
            ts_example: "type Shape =\n  | { kind: \"circle\"; r: number }\n  | { kind: \"rect\"; w: number; h: number };\n\nfunction area(shape: Shape): number {\n  switch (shape.kind) {\n    case \"circle\": return Math.PI * shape.r ** 2;\n    case \"rect\": return shape.w * shape.h;\n  }\n}"
                .into(),
            benefits: vec!["Adding a new variant breaks the build until every switch handles it".into()],
            common_mistakes: vec!["Checking a field that is not a literal discriminant narrows nothing".into()],
            best_practices: vec!["Name the discriminant `kind` or `type` consistently across unions".into()],
            related_topics: vec!["typed-props".into()],
        },
    ]
}
