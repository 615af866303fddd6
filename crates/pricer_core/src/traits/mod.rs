//! Core traits for lazily-evaluated instruments.
//!
//! This module defines fundamental abstractions for:
//! - Access to an instrument's attribute table (`LazyObject` trait)
//! - Price calculation (`Priceable` trait)

pub mod priceable;

pub use priceable::{LazyObject, Priceable};
