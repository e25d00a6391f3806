//! Generic element trait for distribution buckets
//!
//! This module provides the type foundation for generic bucket arithmetic
//! across numeric types (f64, f32, i64, ...) without imposing any
//! computational infrastructure.
//!
//! # Design Philosophy
//!
//! - **Pure type constraints**: the trait only names the capabilities the
//!   bucket arithmetic actually uses
//! - **Exact in `T`**: no float promotion; integer distributions stay integer
//!   through sums, differences, and distances
//! - **Extensible**: any signed numeric type picks up the blanket impl

use num_traits::{Num, Signed};
use std::fmt::Debug;

/// Element type of a distribution bucket.
///
/// Requires ring arithmetic with division (`Num`), a signed absolute value
/// (`Signed`), and the usual value-type markers. Unsigned integers are
/// excluded on purpose: elementwise differences and the cumulative-difference
/// distance need negative intermediates.
pub trait Element: Num + Signed + Copy + PartialOrd + Debug + Send + Sync + 'static {}

impl<T> Element for T where T: Num + Signed + Copy + PartialOrd + Debug + Send + Sync + 'static {}
