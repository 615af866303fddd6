//! Lazily-evaluated attributes.
//!
//! An [`Attribute`] owns a slot holding the current [`Computation`]. Reads go
//! through the slot every time, so rebinding the computation is observed by
//! every reader at once, including [`AttributeHandle`]s obtained earlier.
//!
//! Handles are non-owning: they hold a weak pointer to the slot. A handle
//! outliving its attribute reads as [`EvaluationError::DanglingReference`].

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use super::computation::Computation;
use super::guard::EvaluationGuard;
use crate::types::EvaluationError;

struct Slot {
    name: Rc<str>,
    label: Rc<str>,
    computation: RefCell<Computation>,
    evaluating: Cell<bool>,
}

impl Slot {
    fn evaluate(&self) -> Result<f64, EvaluationError> {
        let _guard = EvaluationGuard::enter(&self.label, &self.evaluating)?;
        // Release the borrow before running so the computation may rebind this slot.
        let computation = Rc::clone(&self.computation.borrow());
        computation()
    }
}

/// A named, settable deferred computation.
///
/// # Examples
/// ```
/// use pricer_core::lazy::{wrap, Attribute};
///
/// let rate = Attribute::new("curve", "rate", wrap(0.05));
/// let handle = rate.get();
/// assert_eq!(handle.evaluate().unwrap(), 0.05);
///
/// rate.set(wrap(0.06));
/// assert_eq!(handle.evaluate().unwrap(), 0.06);
/// ```
pub struct Attribute {
    slot: Rc<Slot>,
}

impl Attribute {
    /// Creates an attribute named `name` belonging to the object `owner`.
    pub fn new(owner: &str, name: &str, computation: Computation) -> Self {
        Self {
            slot: Rc::new(Slot {
                name: Rc::from(name),
                label: Rc::from(format!("{}.{}", owner, name)),
                computation: RefCell::new(computation),
                evaluating: Cell::new(false),
            }),
        }
    }

    /// Attribute name within its owner.
    pub fn name(&self) -> &str {
        &self.slot.name
    }

    /// Qualified `owner.name` label used in errors and logs.
    pub fn label(&self) -> &str {
        &self.slot.label
    }

    /// Returns a fresh handle proxying this attribute.
    pub fn get(&self) -> AttributeHandle {
        AttributeHandle {
            label: Rc::clone(&self.slot.label),
            slot: Rc::downgrade(&self.slot),
        }
    }

    /// Replaces the underlying computation.
    pub fn set(&self, computation: Computation) {
        *self.slot.computation.borrow_mut() = computation;
        tracing::trace!(attribute = %self.slot.label, "Attribute rebound");
    }

    /// Runs the current computation.
    pub fn evaluate(&self) -> Result<f64, EvaluationError> {
        self.slot.evaluate()
    }
}

impl fmt::Debug for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attribute")
            .field("label", &self.label())
            .finish_non_exhaustive()
    }
}

/// Thin proxy to an [`Attribute`].
///
/// Cloning a handle is cheap. Every read indirects through the attribute's
/// slot, so the handle is never a snapshot.
#[derive(Clone)]
pub struct AttributeHandle {
    label: Rc<str>,
    slot: Weak<Slot>,
}

impl AttributeHandle {
    /// Qualified `owner.name` label of the referenced attribute.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns false once the referenced attribute has been dropped.
    pub fn is_alive(&self) -> bool {
        self.slot.strong_count() > 0
    }

    /// Returns true if this handle proxies `attribute`.
    pub fn refers_to(&self, attribute: &Attribute) -> bool {
        std::ptr::eq(self.slot.as_ptr(), Rc::as_ptr(&attribute.slot))
    }

    /// Runs the referenced attribute's current computation.
    pub fn evaluate(&self) -> Result<f64, EvaluationError> {
        match self.slot.upgrade() {
            Some(slot) => slot.evaluate(),
            None => Err(EvaluationError::DanglingReference {
                attribute: self.label.to_string(),
            }),
        }
    }

    /// Wraps the handle as a computation delegating to it.
    pub fn to_computation(&self) -> Computation {
        let handle = self.clone();
        Rc::new(move || handle.evaluate())
    }
}

impl fmt::Debug for AttributeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttributeHandle")
            .field("label", &self.label())
            .field("alive", &self.is_alive())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lazy::computation::{computation, wrap};

    #[test]
    fn test_label() {
        let attr = Attribute::new("bond", "price", wrap(1.0));
        assert_eq!(attr.name(), "price");
        assert_eq!(attr.label(), "bond.price");
        assert_eq!(attr.get().label(), "bond.price");
    }

    #[test]
    fn test_set_visible_through_old_handles() {
        let attr = Attribute::new("x", "y", wrap(1.0));
        let first = attr.get();
        let second = attr.get();

        attr.set(wrap(2.0));

        assert_eq!(first.evaluate().unwrap(), 2.0);
        assert_eq!(second.evaluate().unwrap(), 2.0);
        assert!(first.refers_to(&attr));
    }

    #[test]
    fn test_no_memoisation() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let attr = Attribute::new(
            "x",
            "y",
            computation(move || {
                counter.set(counter.get() + 1);
                Ok(3.0)
            }),
        );
        let handle = attr.get();

        assert_eq!(handle.evaluate().unwrap(), 3.0);
        assert_eq!(handle.evaluate().unwrap(), 3.0);
        assert_eq!(attr.evaluate().unwrap(), 3.0);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_downstream_follows_upstream_rebinding() {
        let upstream = Attribute::new("a", "rate", wrap(0.01));
        let up = upstream.get();
        let downstream = Attribute::new("b", "double", computation(move || Ok(2.0 * up.evaluate()?)));

        assert_eq!(downstream.evaluate().unwrap(), 0.02);
        upstream.set(wrap(0.05));
        assert_eq!(downstream.evaluate().unwrap(), 0.1);
    }

    #[test]
    fn test_self_reference_is_cyclic() {
        let attr = Attribute::new("a", "x", wrap(0.0));
        let me = attr.get();
        attr.set(computation(move || me.evaluate()));

        assert_eq!(
            attr.evaluate().unwrap_err(),
            EvaluationError::CyclicDependency {
                attribute: "a.x".to_string()
            }
        );
    }

    #[test]
    fn test_two_node_cycle_then_recovery() {
        let a = Attribute::new("o", "a", wrap(0.0));
        let b = Attribute::new("o", "b", wrap(0.0));
        let (ha, hb) = (a.get(), b.get());
        a.set(hb.to_computation());
        b.set(ha.to_computation());

        assert!(matches!(
            a.evaluate(),
            Err(EvaluationError::CyclicDependency { .. })
        ));
        assert!(matches!(
            b.evaluate(),
            Err(EvaluationError::CyclicDependency { .. })
        ));

        b.set(wrap(7.0));
        assert_eq!(a.evaluate().unwrap(), 7.0);
        assert_eq!(crate::lazy::guard::current_depth(), 0);
    }

    #[test]
    fn test_dangling_handle() {
        let handle = {
            let attr = Attribute::new("tmp", "v", wrap(1.0));
            attr.get()
        };
        assert!(!handle.is_alive());
        assert_eq!(
            handle.evaluate().unwrap_err(),
            EvaluationError::DanglingReference {
                attribute: "tmp.v".to_string()
            }
        );
    }

    #[test]
    fn test_rebinding_from_inside_computation() {
        let attr = Rc::new(Attribute::new("o", "v", wrap(0.0)));
        let inner = Rc::downgrade(&attr);
        attr.set(computation(move || {
            if let Some(attr) = inner.upgrade() {
                attr.set(wrap(5.0));
            }
            Ok(1.0)
        }));

        assert_eq!(attr.evaluate().unwrap(), 1.0);
        assert_eq!(attr.evaluate().unwrap(), 5.0);
    }

    #[test]
    fn test_debug_format() {
        let attr = Attribute::new("bond", "price", wrap(1.0));
        assert!(format!("{:?}", attr).contains("bond.price"));
        assert!(format!("{:?}", attr.get()).contains("alive: true"));
    }
}
