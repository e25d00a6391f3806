//! Core error types and numeric traits for distribution metrics
//!
//! This crate provides the shared foundation for the emd-stats workspace:
//! a unified [`Error`] type covering the failure taxonomy of elementwise
//! distribution arithmetic (arity mismatches, zero divisors, unparsable
//! tokens) and the [`Element`] trait bounding the bucket element type.
//!
//! Downstream crates re-export [`Result`] so callers only ever see one
//! error type.

pub mod error;
pub mod numeric;

pub use error::{Error, Result};
pub use numeric::Element;
