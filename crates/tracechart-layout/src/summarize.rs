//! Short, budgeted renderings of task expressions.
//!
//! A call renders as `f(arg, arg)`, a fused pipeline as `f(g(arg))`, a list
//! as `[a, b, c, ...]` (at most three items shown), a reference to another
//! task as `_` and any other value as `*`. Each call splits what is left of
//! its budget evenly between its arguments and collapses them to `...` once
//! the share is five characters or fewer.

use itertools::Itertools;
use std::collections::{BTreeSet, HashSet};
use std::hash::BuildHasher;
use tracechart_core::{Expr, TaskKey};

pub use crate::options::DEFAULT_LABEL_SIZE;

const ELLIPSIS: &str = "...";
const MAX_LIST_ITEMS: usize = 3;
const MIN_ARG_BUDGET: i64 = 5;

/// Membership test for the keys of a run.
pub trait KeySet {
    fn contains_key(&self, candidate: &str) -> bool;
}

impl<S: BuildHasher> KeySet for HashSet<TaskKey, S> {
    fn contains_key(&self, candidate: &str) -> bool {
        self.contains(candidate)
    }
}

impl<S: BuildHasher> KeySet for HashSet<&str, S> {
    fn contains_key(&self, candidate: &str) -> bool {
        self.contains(candidate)
    }
}

impl KeySet for BTreeSet<TaskKey> {
    fn contains_key(&self, candidate: &str) -> bool {
        self.contains(candidate)
    }
}

impl KeySet for [TaskKey] {
    fn contains_key(&self, candidate: &str) -> bool {
        self.iter().any(|key| key.as_str() == candidate)
    }
}

/// A task's rendered expression together with the head it is colored by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSummary {
    /// The call's head (`add`, `f(g`), or the whole text for non-calls.
    pub head: String,
    pub text: String,
}

/// Render `expr` within roughly `label_size` characters.
pub fn summarize<K: KeySet + ?Sized>(expr: &Expr, keys: &K, label_size: usize) -> String {
    render(expr, keys, i64::try_from(label_size).unwrap_or(i64::MAX))
}

pub fn summarize_task<K: KeySet + ?Sized>(expr: &Expr, keys: &K, label_size: usize) -> TaskSummary {
    let text = summarize(expr, keys, label_size);
    let head = expr.function_name().unwrap_or_else(|| text.clone());
    TaskSummary { head, text }
}

fn render<K: KeySet + ?Sized>(expr: &Expr, keys: &K, budget: i64) -> String {
    match expr {
        Expr::Call { func, .. } if func.is_empty() => "*".to_string(),
        Expr::Call { func, args } => {
            let head = func.head();
            let tail = ")".repeat(func.depth());
            let share = (budget - head.len() as i64 - tail.len() as i64) / args.len().max(1) as i64;
            let args = if share > MIN_ARG_BUDGET {
                args.iter().map(|arg| render(arg, keys, share)).join(", ")
            } else {
                ELLIPSIS.to_string()
            };
            format!("{}({}{}", head, args, tail)
        }
        Expr::List { items } => {
            let shown = &items[..items.len().min(MAX_LIST_ITEMS)];
            if shown.is_empty() {
                return "[]".to_string();
            }
            let count = shown.len() as i64;
            let share = ((budget - 2 - 2 * count) / count).max(0);
            let args = shown.iter().map(|item| render(item, keys, share)).join(", ");
            if items.len() > MAX_LIST_ITEMS {
                format!("[{}, {}]", args, ELLIPSIS)
            } else {
                format!("[{}]", args)
            }
        }
        Expr::Leaf { .. } => match expr.as_key_candidate() {
            Some(candidate) if keys.contains_key(&candidate) => "_".to_string(),
            _ => "*".to_string(),
        },
        Expr::Opaque => "*".to_string(),
    }
}
