//! Line-oriented text input for distributions
//!
//! One distribution per line; tokens are whitespace-separated numeric
//! literals and arity is inferred from the token count. There is no arity
//! header; a batch of distributions meant for the same pipeline run must
//! agree on arity, which [`read_distributions`] enforces.

use crate::types::Distribution;
use emd_core::{Element, Error, Result};
use std::io::BufRead;
use std::str::FromStr;

impl<T: Element + FromStr> Distribution<T> {
    /// Re-populate this distribution from one line of text.
    ///
    /// Tokenizes `line` by whitespace and converts each token to `T`, in
    /// order. Prior contents are **replaced**, never appended to: calling
    /// this twice on the same instance yields the result of the second call
    /// only. An all-whitespace line yields arity 0.
    ///
    /// On a parse failure the distribution is left unchanged and the
    /// offending token is reported with its zero-based position.
    pub fn set_from_line(&mut self, line: &str) -> Result<()> {
        let mut buckets = Vec::new();
        for (position, token) in line.split_whitespace().enumerate() {
            let value = token.parse::<T>().map_err(|_| Error::Parse {
                token: token.to_string(),
                position,
            })?;
            buckets.push(value);
        }
        *self.buckets_mut() = buckets;
        Ok(())
    }
}

impl<T: Element + FromStr> FromStr for Distribution<T> {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let mut distribution = Self::new();
        distribution.set_from_line(line)?;
        Ok(distribution)
    }
}

/// Parse one distribution per line from `reader`.
///
/// Blank lines are skipped. Every distribution in the batch must share the
/// arity of the first; a divergent line surfaces
/// [`Error::ArityMismatch`]. Consumers feeding a clustering run get the
/// uniform-arity guarantee the elementwise operations rely on.
pub fn read_distributions<T, R>(reader: R) -> Result<Vec<Distribution<T>>>
where
    T: Element + FromStr,
    R: BufRead,
{
    let mut distributions: Vec<Distribution<T>> = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let distribution: Distribution<T> = line.parse()?;
        if let Some(first) = distributions.first() {
            Error::check_same_arity(first.len(), distribution.len())?;
        }
        distributions.push(distribution);
    }
    log::debug!(
        "parsed {} distributions of arity {}",
        distributions.len(),
        distributions.first().map(Distribution::len).unwrap_or(0)
    );
    Ok(distributions)
}
