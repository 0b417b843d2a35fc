//! Task expressions as recorded alongside each profiled execution.

use crate::trace::key_text;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;

/// The function position of a call expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Callable {
    /// A single named function.
    Named(String),
    /// A fused pipeline of functions, outermost first.
    Composed(Vec<String>),
}

impl Callable {
    pub fn named(name: impl Into<String>) -> Self {
        Callable::Named(name.into())
    }

    pub fn composed<I, S>(funcs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Callable::Composed(funcs.into_iter().map(Into::into).collect())
    }

    /// Function names in call order, outermost first.
    pub fn names(&self) -> Vec<&str> {
        match self {
            Callable::Named(name) => vec![name.as_str()],
            Callable::Composed(funcs) => funcs.iter().map(String::as_str).collect(),
        }
    }

    /// The rendered head of a call: `f` or, for a pipeline, `f(g(h`.
    pub fn head(&self) -> String {
        self.names().join("(")
    }

    /// True when there is no function name to render, as for `"func": []`.
    pub fn is_empty(&self) -> bool {
        match self {
            Callable::Named(name) => name.is_empty(),
            Callable::Composed(funcs) => funcs.is_empty(),
        }
    }

    /// Number of open parens the head leaves unclosed, at least one.
    pub fn depth(&self) -> usize {
        match self {
            Callable::Named(_) => 1,
            Callable::Composed(funcs) => funcs.len().max(1),
        }
    }
}

/// A single task's computation.
///
/// Leaves hold arbitrary literal values; a string leaf that names another
/// task in the same run is a reference to that task's output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Expr {
    Leaf {
        value: Value,
    },
    Call {
        func: Callable,
        #[serde(default)]
        args: Vec<Expr>,
    },
    List {
        items: Vec<Expr>,
    },
    /// A node of a shape this crate does not know about. Kept so that a
    /// profile written by a newer collector still loads.
    #[serde(other)]
    Opaque,
}

impl Expr {
    pub fn leaf(value: impl Into<Value>) -> Self {
        Expr::Leaf {
            value: value.into(),
        }
    }

    pub fn call(func: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::Call {
            func: Callable::named(func),
            args,
        }
    }

    pub fn composed<I, S>(funcs: I, args: Vec<Expr>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Expr::Call {
            func: Callable::composed(funcs),
            args,
        }
    }

    pub fn list(items: Vec<Expr>) -> Self {
        Expr::List { items }
    }

    /// Head label of a call expression. A call without a function name has
    /// none.
    pub fn function_name(&self) -> Option<String> {
        match self {
            Expr::Call { func, .. } if !func.is_empty() => Some(func.head()),
            _ => None,
        }
    }

    /// The key this leaf would name, in the same canonical form as
    /// [`TaskKey`](crate::TaskKey).
    pub fn as_key_candidate(&self) -> Option<Cow<'_, str>> {
        match self {
            Expr::Leaf { value } => key_text(value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_call() {
        let json = r#"{"kind":"call","func":"add","args":[{"kind":"leaf","value":"a"},{"kind":"leaf","value":1}]}"#;
        let expr: Expr = serde_json::from_str(json).unwrap();
        assert_eq!(expr, Expr::call("add", vec![Expr::leaf("a"), Expr::leaf(1)]));
    }

    #[test]
    fn test_deserialize_composed() {
        let json = r#"{"kind":"call","func":["inc","double"],"args":[]}"#;
        let expr: Expr = serde_json::from_str(json).unwrap();
        match expr {
            Expr::Call { func, args } => {
                assert_eq!(func.names(), vec!["inc", "double"]);
                assert!(args.is_empty());
            }
            _ => panic!("Expected Call"),
        }
    }

    #[test]
    fn test_composed_head() {
        let func = Callable::composed(["inc", "double", "neg"]);
        assert_eq!(func.head(), "inc(double(neg");
        assert_eq!(func.depth(), 3);
        assert_eq!(Callable::named("add").head(), "add");
        assert_eq!(Expr::leaf(1).function_name(), None);
    }

    #[test]
    fn test_unknown_kind_is_opaque() {
        let expr: Expr = serde_json::from_str(r#"{"kind":"lambda"}"#).unwrap();
        assert_eq!(expr, Expr::Opaque);
    }

    #[test]
    fn test_key_candidate() {
        assert_eq!(Expr::leaf("x").as_key_candidate().as_deref(), Some("x"));
        assert_eq!(Expr::leaf(3).as_key_candidate().as_deref(), Some("3"));
        assert_eq!(
            Expr::leaf(serde_json::json!(["x", 0])).as_key_candidate().as_deref(),
            Some("('x', 0)")
        );
        assert_eq!(Expr::leaf(true).as_key_candidate(), None);
        assert_eq!(Expr::list(vec![]).as_key_candidate(), None);
    }

    #[test]
    fn test_empty_pipeline_has_no_name() {
        let expr: Expr = serde_json::from_str(r#"{"kind":"call","func":[],"args":[]}"#).unwrap();
        match &expr {
            Expr::Call { func, .. } => assert!(func.is_empty()),
            _ => panic!("Expected Call"),
        }
        assert_eq!(expr.function_name(), None);
        assert_eq!(Expr::call("", vec![]).function_name(), None);
    }
}
