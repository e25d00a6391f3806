//! Fixed-arity distributions with elementwise arithmetic and a closed-form
//! Earth Mover's Distance
//!
//! This crate provides the distance-metric primitive for pipelines that
//! cluster probability distributions rather than Euclidean points: an
//! ordered, fixed-arity bucket container with checked vector-style
//! arithmetic, line-oriented text I/O, and the linear-time 1-D Wasserstein
//! distance between two equal-mass distributions.
//!
//! # Key Features
//!
//! - **Checked arithmetic**: every elementwise binary operation validates
//!   operand arity up front and surfaces a declared error instead of
//!   indexing out of bounds
//! - **Generic elements**: buckets are any signed numeric type
//!   ([`emd_core::Element`]); integer histograms get exact integer distances
//! - **Round-trippable text format**: one distribution per line,
//!   whitespace-separated tokens, arity inferred from the token count
//! - **Closed-form EMD**: a single prefix-sum pass over the elementwise
//!   difference, O(n) time
//!
//! # Examples
//!
//! ## Arithmetic and the metric
//!
//! ```rust
//! use emd_distribution::{emd, Distribution};
//!
//! let d1: Distribution<f64> = "1 0 0".parse()?;
//! let d2: Distribution<f64> = "0 0 1".parse()?;
//!
//! // one unit of mass moves two buckets
//! assert_eq!(emd(&d1, &d2)?, 2.0);
//!
//! // centroid of the two, bucket by bucket
//! let centroid = d1.checked_add(&d2)?.unscale(2.0)?;
//! assert_eq!(centroid.to_string(), "0.5 0 0.5");
//! # Ok::<(), emd_distribution::Error>(())
//! ```
//!
//! ## Ingesting a batch
//!
//! ```rust
//! use emd_distribution::{read_distributions, Distribution};
//! use std::io::Cursor;
//!
//! let input = Cursor::new("0.5 0.5\n1 0\n");
//! let batch: Vec<Distribution<f64>> = read_distributions(input)?;
//! assert_eq!(batch.len(), 2);
//! # Ok::<(), emd_distribution::Error>(())
//! ```
//!
//! Equal total mass across operands is a caller responsibility: [`emd`]
//! documents but does not enforce it. Normalize with
//! [`Distribution::unscale`] before comparing raw histograms.

pub mod metric;
pub mod ops;
pub mod parse;
pub mod types;

pub use metric::emd;
pub use parse::read_distributions;
pub use types::Distribution;

pub use emd_core::{Element, Error, Result};
