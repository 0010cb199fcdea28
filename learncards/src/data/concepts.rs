//! React core-concept seed data.

use crate::concept::{CodeExample, Concept, ConceptCategory, Difficulty};

/// The shipped concept cards.
pub fn concepts() -> Vec<Concept> {
    vec![
        Concept {
            id: "jsx".into(),
            title: "JSX Syntax".into(),
            description: "JSX is a syntax extension that lets you write HTML-like markup inside JavaScript.".into(),
            category: ConceptCategory::Basics,
            difficulty: Difficulty::Beginner,
            content: "\
JSX (JavaScript XML) is one of React's core features. Every JSX element \
compiles down to a `React.createElement()` call.

## Rules

1. A JSX expression must have a single root element
2. Every tag must be closed
3. Use `className` instead of `class`
4. Attributes are camelCase
"
            .into(),
            code_examples: vec![
                CodeExample {
                    id: "jsx-basic".into(),
                    title: "Basic JSX".into(),
                    code: "function Welcome() {\n  return (\n    <div className=\"welcome\">\n      <h1>Hello, React!</h1>\n    </div>\n  );\n}"
                        .into(),
                    language: "jsx".into(),
                    description: Some("The basic shape of a JSX component.".into()),
                    runnable: true,
                },
                CodeExample {
                    id: "jsx-expression".into(),
                    title: "Expressions in JSX".into(),
                    code: "function Greeting({ name }) {\n  return <p>Hello, {name}! It is {new Date().toLocaleString()}</p>;\n}"
                        .into(),
                    language: "jsx".into(),
                    description: Some("Braces embed any JavaScript expression.".into()),
                    runnable: true,
                },
            ],
            related_concepts: vec!["components-props".into()],
            tags: vec!["jsx".into(), "syntax".into(), "basics".into()],
        },
        Concept {
            id: "components-props".into(),
            title: "Components and Props".into(),
            description: "Components are reusable UI functions; props are their read-only inputs.".into(),
            category: ConceptCategory::Basics,
            difficulty: Difficulty::Beginner,
            content: "\
A component is a function from props to markup. Props flow downward and \
are never mutated by the receiving component; when a parent re-renders \
with new props, the child re-renders with them.
"
            .into(),
            code_examples: vec![CodeExample {
                id: "props-destructure".into(),
                title: "Destructured props".into(),
                code: "function Badge({ label, tone = \"info\" }) {\n  return <span className={`badge badge-${tone}`}>{label}</span>;\n}"
                    .into(),
                language: "jsx".into(),
                description: None,
                runnable: true,
            }],
            related_concepts: vec!["jsx".into(), "lifting-state".into()],
            tags: vec!["components".into(), "props".into()],
        },
        Concept {
            id: "lifting-state".into(),
            title: "Lifting State Up".into(),
            description: "Move shared state to the closest common ancestor so siblings stay in sync.".into(),
            category: ConceptCategory::Hooks,
            difficulty: Difficulty::Intermediate,
            content: "\
When two components need the same changing data, the state lives in \
their closest common parent. The parent passes the value down as a prop \
and a setter callback alongside it.
"
            .into(),
            code_examples: vec![CodeExample {
                id: "lift-temperature".into(),
                title: "Shared temperature input".into(),
                code: "function Calculator() {\n  const [celsius, setCelsius] = useState(0);\n  return (\n    <>\n      <TemperatureInput value={celsius} onChange={setCelsius} />\n      <BoilingVerdict celsius={celsius} />\n    </>\n  );\n}"
                    .into(),
                language: "jsx".into(),
                description: Some("One state value drives both children.".into()),
                runnable: false,
            }],
            related_concepts: vec!["components-props".into()],
            tags: vec!["state".into(), "hooks".into(), "data-flow".into()],
        },
        Concept {
            id: "memoization".into(),
            title: "Memoization".into(),
            description: "Skip re-computation and re-rendering when inputs have not changed.".into(),
            category: ConceptCategory::Performance,
            difficulty: Difficulty::Advanced,
            content: "\
`React.memo`, `useMemo` and `useCallback` all trade memory for render \
time. Reach for them after profiling, not before: premature memoization \
adds dependency-array bugs without measurable wins.
"
            .into(),
            code_examples: vec![CodeExample {
                id: "memo-row".into(),
                title: "Memoized list row".into(),
                code: "const Row = React.memo(function Row({ item }) {\n  return <li>{item.label}</li>;\n});"
                    .into(),
                language: "jsx".into(),
                description: Some("Rows skip re-render while their item is referentially equal.".into()),
                runnable: false,
            }],
            related_concepts: vec!["lifting-state".into()],
            tags: vec!["performance".into(), "memo".into(), "state".into()],
        },
    ]
}
