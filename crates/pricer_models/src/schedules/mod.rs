//! Coupon schedule conventions.
//!
//! [`Frequency`] names the usual coupon frequencies and plugs straight into
//! a bond's `frequency` input:
//!
//! ```
//! use pricer_core::lazy::Input;
//! use pricer_models::schedules::Frequency;
//!
//! let input: Input = Frequency::SemiAnnual.into();
//! assert_eq!(input.resolve(1.0)().unwrap(), 2.0);
//! ```

mod frequency;

pub use frequency::Frequency;
