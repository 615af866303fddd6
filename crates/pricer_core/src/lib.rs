//! # pricer_core: Lazy Evaluation Foundation
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core serves as the bottom layer of the workspace, providing:
//! - Deferred computations and settable attribute slots (`lazy`)
//! - The `MathObject` container that instruments are built from (`lazy::object`)
//! - Traits for instruments backed by math objects (`traits`)
//! - Error types: `ConfigurationError`, `EvaluationError`, `PricingError` (`types::error`)
//! - Evaluation limits loaded from TOML or the environment (`config`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - thiserror: Error derives
//! - serde / serde_json / toml: Loosely-typed inputs and configuration files
//! - tracing: Diagnostics on rebinding and cycle detection
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::lazy::{computation, MathObject};
//!
//! let mut account = MathObject::new("account");
//! let balance = account.define("balance", MathObject::input(100.0, 0.0)).unwrap();
//! let rate = account.define("rate", MathObject::input(None::<f64>, 0.02)).unwrap();
//! let interest = account
//!     .define("interest", computation(move || Ok(balance.evaluate()? * rate.evaluate()?)))
//!     .unwrap();
//!
//! assert!((interest.evaluate().unwrap() - 2.0).abs() < 1e-12);
//!
//! // Rebinding an input is visible downstream on the next read.
//! account.set("balance", MathObject::wrap(200.0)).unwrap();
//! assert!((interest.evaluate().unwrap() - 4.0).abs() < 1e-12);
//! ```
//!
//! ## Threading
//!
//! Computations are `Rc`-based and therefore `!Send`. A graph of math
//! objects lives on one thread; the depth limit installed through
//! [`config::EvalConfig::install`] is per thread as well.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod config;
pub mod lazy;
pub mod traits;
pub mod types;
