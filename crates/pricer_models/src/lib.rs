//! # Pricer Models (L2: Business Logic)
//!
//! Worked-example instruments built on the lazy math objects of
//! `pricer_core`.
//!
//! This crate provides:
//! - A fixed-coupon bond with price, duration, modified duration and convexity
//! - An option base type and a Black-Scholes European option
//! - Analytical leaf formulas (Black-Scholes, normal distribution)
//! - Coupon frequency conventions
//!
//! ## Design Principles
//!
//! - **Attributes, not fields**: every quantity is a named attribute that
//!   can be read, rebound, or referenced from another instrument
//! - **Builder pattern** for ergonomic construction with sensible defaults
//! - **Errors at the right time**: malformed inputs fail at construction,
//!   numerical problems fail when the affected attribute is read
//!
//! ## Example
//!
//! ```
//! use pricer_core::lazy::MathObject;
//! use pricer_models::instruments::Bond;
//!
//! let mut curve = MathObject::new("curve");
//! let ytm = curve.define("ytm", MathObject::wrap(0.04)).unwrap();
//!
//! let bond = Bond::builder("note")
//!     .face_value(1000.0)
//!     .yield_to_maturity(&ytm)
//!     .maturity(3.0)
//!     .coupon_rate(0.05)
//!     .build()
//!     .unwrap();
//! let before = bond.price().unwrap();
//!
//! curve.set("ytm", MathObject::wrap(0.05)).unwrap();
//! assert!(bond.price().unwrap() < before);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
pub mod schedules;
