//! Lazily-evaluated instruments.
//!
//! This module provides:
//! - [`Bond`]: fixed-coupon bond with price, duration and convexity
//! - [`OptionBase`] and [`OptionInstrument`]: shared option attributes
//! - [`EuropeanOption`]: Black-Scholes European option
//!
//! Every instrument owns a [`pricer_core::lazy::MathObject`]. Inputs accept
//! constants, references to other objects' attributes, or nothing at all
//! (use the default), and every derived attribute is recomputed on read.

pub mod bond;
pub mod european;
pub mod option;

pub use bond::{Bond, BondBuilder, BondTerms};
pub use european::{EuropeanOption, EuropeanOptionBuilder};
pub use option::{OptionBase, OptionInstrument, OptionKind};
