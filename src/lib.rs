//! Distribution arithmetic and closed-form 1-D Earth Mover's Distance
//!
//! This is an umbrella crate that re-exports the workspace members:
//!
//! - [`emd_core`]: shared error types and the generic bucket-element trait
//! - [`emd_distribution`]: the [`Distribution`] container, its arithmetic,
//!   line-oriented text I/O, and the [`emd`] metric
//!
//! # Example
//!
//! ```rust
//! use emd_stats::{emd, Distribution};
//!
//! let a: Distribution<f64> = "1 0 0".parse()?;
//! let b: Distribution<f64> = "0 0 1".parse()?;
//! assert_eq!(emd(&a, &b)?, 2.0);
//! # Ok::<(), emd_stats::Error>(())
//! ```

pub use emd_core;
pub use emd_distribution;

pub use emd_core::{Element, Error, Result};
pub use emd_distribution::{emd, read_distributions, Distribution};
