//! Closed-form Earth Mover's Distance on the ordered support
//!
//! For two discrete 1-D distributions with equal total mass laid out at
//! unit-spaced ordered support points, the minimum total mass-times-distance
//! to transform one into the other equals the sum of absolute values of the
//! cumulative elementwise difference at every prefix of the support. This
//! reduces optimal transport to a single prefix-sum pass: O(n) time, one
//! difference buffer of auxiliary space.

use crate::types::Distribution;
use emd_core::{Element, Result};

/// Earth Mover's (1-D Wasserstein) distance between two distributions.
///
/// Both operands must have equal arity; [`emd_core::Error::ArityMismatch`]
/// is surfaced otherwise. Both must carry equal total mass; that is the
/// caller's responsibility and is not validated here (check with
/// [`Distribution::sum`] if in doubt; the result is meaningless for unequal
/// masses).
///
/// Arity 0 yields zero; arity 1 yields `|d1[0] - d2[0]|`.
///
/// # Example
///
/// ```rust
/// use emd_distribution::{emd, Distribution};
///
/// let d1 = Distribution::from(vec![1.0, 0.0, 0.0]);
/// let d2 = Distribution::from(vec![0.0, 0.0, 1.0]);
/// assert_eq!(emd(&d1, &d2)?, 2.0);
/// # Ok::<(), emd_core::Error>(())
/// ```
pub fn emd<T: Element>(d1: &Distribution<T>, d2: &Distribution<T>) -> Result<T> {
    let mut flow = d1.checked_sub(d2)?;
    let buckets = flow.buckets_mut();
    // flow[i] becomes the net mass crossing the boundary between bucket i
    // and bucket i+1; each unit crossing costs one unit of distance.
    for i in 1..buckets.len() {
        let carried = buckets[i - 1];
        buckets[i] = buckets[i] + carried;
    }
    Ok(flow.abs_sum())
}
