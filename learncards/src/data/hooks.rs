//! Hook reference seed data.

use crate::concept::CodeExample;
use crate::hooks::{HookCategory, HookInfo, HookKind, Parameter};

/// The shipped hook cards.
pub fn hooks() -> Vec<HookInfo> {
    vec![
        HookInfo {
            id: "use-state".into(),
            name: "useState".into(),
            description: "Declares a state variable local to the component.".into(),
            category: HookCategory::BuiltIn,
            kind: HookKind::State,
            syntax: "const [state, setState] = useState(initialState)".into(),
            parameters: vec![Parameter {
                name: "initialState".into(),
                type_name: "T | () => T".into(),
                description: "Initial value, or a lazy initializer run once on mount.".into(),
                optional: false,
                default_value: None,
            }],
            return_value: "A pair: the current value and a stable setter.".into(),
            examples: vec![CodeExample {
                id: "use-state-counter".into(),
                title: "Counter".into(),
                code: "const [count, setCount] = useState(0);\nreturn <button onClick={() => setCount(c => c + 1)}>{count}</button>;"
                    .into(),
                language: "jsx".into(),
                description: None,
                runnable: true,
            }],
            common_patterns: vec![
                "Functional updates when the next value depends on the previous one".into(),
                "Lazy initialization for expensive initial values".into(),
            ],
            pitfalls: vec![
                "Setting state from the current render causes an infinite loop".into(),
                "State updates are batched; reading state right after setState sees the old value".into(),
            ],
            related_hooks: vec!["use-reducer".into()],
        },
        HookInfo {
            id: "use-effect".into(),
            name: "useEffect".into(),
            description: "Synchronizes the component with an external system after render.".into(),
            category: HookCategory::BuiltIn,
            kind: HookKind::Effect,
            syntax: "useEffect(setup, dependencies?)".into(),
            parameters: vec![
                Parameter {
                    name: "setup".into(),
                    type_name: "() => void | (() => void)".into(),
                    description: "Effect body; may return a cleanup function.".into(),
                    optional: false,
                    default_value: None,
                },
                Parameter {
                    name: "dependencies".into(),
                    type_name: "unknown[]".into(),
                    description: "Values the effect reads; the effect re-runs when any changes.".into(),
                    optional: true,
                    default_value: None,
                },
            ],
            return_value: "Nothing.".into(),
            examples: vec![CodeExample {
                id: "use-effect-title".into(),
                title: "Document title".into(),
                code: "useEffect(() => {\n  document.title = `${unread} unread`;\n}, [unread]);"
                    .into(),
                language: "jsx".into(),
                description: None,
                runnable: false,
            }],
            common_patterns: vec![
                "Subscription with cleanup on unmount".into(),
                "Empty dependency array for run-once setup".into(),
            ],
            pitfalls: vec![
                "Missing dependencies read stale values".into(),
                "Object/array literals in the dependency array re-run the effect every render".into(),
            ],
            related_hooks: vec!["use-state".into()],
        },
        HookInfo {
            id: "use-reducer".into(),
            name: "useReducer".into(),
            description: "State managed through a reducer function, for multi-field updates.".into(),
            category: HookCategory::BuiltIn,
            kind: HookKind::State,
            syntax: "const [state, dispatch] = useReducer(reducer, initialArg, init?)".into(),
            parameters: vec![
                Parameter {
                    name: "reducer".into(),
                    type_name: "(state, action) => state".into(),
                    description: "Pure transition function.".into(),
                    optional: false,
                    default_value: None,
                },
                Parameter {
                    name: "initialArg".into(),
                    type_name: "T".into(),
                    description: "Initial state, or the argument to `init`.".into(),
                    optional: false,
                    default_value: None,
                },
            ],
            return_value: "A pair: the current state and a stable dispatch.".into(),
            examples: vec![],
            common_patterns: vec!["Discriminated-union actions keep transitions explicit".into()],
            pitfalls: vec!["Mutating the state argument instead of returning a new object".into()],
            related_hooks: vec!["use-state".into()],
        },
        HookInfo {
            id: "use-debounce".into(),
            name: "useDebounce".into(),
            description: "Custom hook that delays a changing value until input settles.".into(),
            category: HookCategory::Custom,
            kind: HookKind::Utility,
            syntax: "const debounced = useDebounce(value, delayMs)".into(),
            parameters: vec![
                Parameter {
                    name: "value".into(),
                    type_name: "T".into(),
                    description: "The rapidly changing value.".into(),
                    optional: false,
                    default_value: None,
                },
                Parameter {
                    name: "delayMs".into(),
                    type_name: "number".into(),
                    description: "Quiet period before the value propagates.".into(),
                    optional: true,
                    default_value: Some("300".into()),
                },
            ],
            return_value: "The value as of the last quiet period.".into(),
            examples: vec![CodeExample {
                id: "use-debounce-search".into(),
                title: "Debounced search box".into(),
                code: "const query = useDebounce(input, 300);\nuseEffect(() => { search(query); }, [query]);"
                    .into(),
                language: "jsx".into(),
                description: Some("The request fires only after typing pauses.".into()),
                runnable: false,
            }],
            common_patterns: vec!["Pair with useEffect to throttle network calls".into()],
            pitfalls: vec!["Forgetting to clear the timer on unmount leaks the callback".into()],
            related_hooks: vec!["use-effect".into()],
        },
    ]
}
