//! Re-entrancy and depth guard for attribute reads.
//!
//! Every read of an attribute enters an evaluation guard for its slot.
//! Entering a slot that is already being evaluated means the dependency
//! graph loops back on itself; entering beyond the configured depth means
//! the chain is too deep for the call stack. Both are reported as
//! [`EvaluationError`]s instead of hanging or overflowing.

use std::cell::Cell;

use crate::config::DEFAULT_MAX_DEPTH;
use crate::types::EvaluationError;

thread_local! {
    static DEPTH: Cell<usize> = const { Cell::new(0) };
    static MAX_DEPTH: Cell<usize> = const { Cell::new(DEFAULT_MAX_DEPTH) };
}

/// Returns the depth limit in force on the current thread.
pub fn max_depth() -> usize {
    MAX_DEPTH.with(|limit| limit.get())
}

/// Returns how many attribute reads are currently nested on this thread.
///
/// Zero whenever no read is in progress.
pub fn current_depth() -> usize {
    DEPTH.with(|depth| depth.get())
}

pub(crate) fn set_max_depth(limit: usize) {
    MAX_DEPTH.with(|max| max.set(limit));
}

/// Marks a slot as being evaluated for the lifetime of the guard.
pub(crate) struct EvaluationGuard<'a> {
    evaluating: &'a Cell<bool>,
}

impl<'a> EvaluationGuard<'a> {
    pub(crate) fn enter(label: &str, evaluating: &'a Cell<bool>) -> Result<Self, EvaluationError> {
        if evaluating.get() {
            tracing::warn!(attribute = label, "Cyclic dependency detected");
            return Err(EvaluationError::CyclicDependency {
                attribute: label.to_string(),
            });
        }

        let limit = max_depth();
        let depth = current_depth();
        if depth >= limit {
            tracing::warn!(attribute = label, limit, "Dependency depth limit exceeded");
            return Err(EvaluationError::DepthExceeded {
                attribute: label.to_string(),
                limit,
            });
        }

        DEPTH.with(|d| d.set(depth + 1));
        evaluating.set(true);
        Ok(Self { evaluating })
    }
}

impl Drop for EvaluationGuard<'_> {
    fn drop(&mut self) {
        self.evaluating.set(false);
        DEPTH.with(|d| d.set(d.get().saturating_sub(1)));
    }
}
