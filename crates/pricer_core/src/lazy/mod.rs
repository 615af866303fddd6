//! Lazy attribute evaluation.
//!
//! This module provides:
//! - [`Computation`]: deferred scalar computation, re-run on every read
//! - [`Attribute`] / [`AttributeHandle`]: settable slot and its thin proxy
//! - [`Input`]: constant, reference, or absent input for an attribute
//! - [`MathObject`]: named container wiring attributes together
//!
//! ## Evaluation model
//!
//! Reads are pull-based and synchronous. Nothing is cached: reading an
//! attribute re-runs its computation and, transitively, everything it reads.
//! Rebinding an attribute with [`Attribute::set`] is therefore visible to
//! every downstream reader on the next read, with no invalidation step.
//!
//! Cyclic wiring and excessively deep chains are reported as
//! [`EvaluationError`](crate::types::EvaluationError)s by the [`guard`].

pub mod attribute;
pub mod computation;
pub mod guard;
pub mod input;
pub mod object;

pub use attribute::{Attribute, AttributeHandle};
pub use computation::{checked_div, computation, wrap, Computation};
pub use input::Input;
pub use object::MathObject;
