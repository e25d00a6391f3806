//! Elementwise and scalar arithmetic on distributions
//!
//! All elementwise binary operations require equal arity and surface
//! [`Error::ArityMismatch`] otherwise; divisions surface
//! [`Error::DivisionByZero`] when any divisor is the additive identity.
//! Preconditions are validated before any bucket is touched, so a failed
//! call never leaves a half-updated operand.
//!
//! Rust's `std::ops` traits cannot return `Result`, so the checked contract
//! is expressed as named fallible methods: `checked_add`, `checked_sub`,
//! `checked_mul`, `checked_div` and their `_assign` forms, plus
//! `scale`/`unscale` for scalars.

use crate::types::Distribution;
use emd_core::{Element, Error, Result};

impl<T: Element> Distribution<T> {
    /// Elementwise sum, `result[i] = self[i] + other[i]`
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        let mut out = self.clone();
        out.checked_add_assign(other)?;
        Ok(out)
    }

    /// Elementwise difference, `result[i] = self[i] - other[i]`
    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        let mut out = self.clone();
        out.checked_sub_assign(other)?;
        Ok(out)
    }

    /// Elementwise product, `result[i] = self[i] * other[i]`
    pub fn checked_mul(&self, other: &Self) -> Result<Self> {
        let mut out = self.clone();
        out.checked_mul_assign(other)?;
        Ok(out)
    }

    /// Elementwise quotient, `result[i] = self[i] / other[i]`
    pub fn checked_div(&self, other: &Self) -> Result<Self> {
        let mut out = self.clone();
        out.checked_div_assign(other)?;
        Ok(out)
    }

    /// In-place elementwise sum
    pub fn checked_add_assign(&mut self, other: &Self) -> Result<()> {
        Error::check_same_arity(self.len(), other.len())?;
        for (a, &b) in self.buckets_mut().iter_mut().zip(other.buckets()) {
            *a = *a + b;
        }
        Ok(())
    }

    /// In-place elementwise difference
    pub fn checked_sub_assign(&mut self, other: &Self) -> Result<()> {
        Error::check_same_arity(self.len(), other.len())?;
        for (a, &b) in self.buckets_mut().iter_mut().zip(other.buckets()) {
            *a = *a - b;
        }
        Ok(())
    }

    /// In-place elementwise product
    pub fn checked_mul_assign(&mut self, other: &Self) -> Result<()> {
        Error::check_same_arity(self.len(), other.len())?;
        for (a, &b) in self.buckets_mut().iter_mut().zip(other.buckets()) {
            *a = *a * b;
        }
        Ok(())
    }

    /// In-place elementwise quotient
    pub fn checked_div_assign(&mut self, other: &Self) -> Result<()> {
        Error::check_same_arity(self.len(), other.len())?;
        if let Some(index) = other.iter().position(|b| b.is_zero()) {
            return Err(Error::zero_bucket(index));
        }
        for (a, &b) in self.buckets_mut().iter_mut().zip(other.buckets()) {
            *a = *a / b;
        }
        Ok(())
    }

    /// Multiply every bucket by `scalar`
    pub fn scale(&self, scalar: T) -> Self {
        let mut out = self.clone();
        out.scale_assign(scalar);
        out
    }

    /// Multiply every bucket by `scalar` in place
    pub fn scale_assign(&mut self, scalar: T) {
        for bucket in self.buckets_mut().iter_mut() {
            *bucket = *bucket * scalar;
        }
    }

    /// Divide every bucket by `scalar`
    pub fn unscale(&self, scalar: T) -> Result<Self> {
        let mut out = self.clone();
        out.unscale_assign(scalar)?;
        Ok(out)
    }

    /// Divide every bucket by `scalar` in place
    pub fn unscale_assign(&mut self, scalar: T) -> Result<()> {
        if scalar.is_zero() {
            return Err(Error::zero_scalar());
        }
        for bucket in self.buckets_mut().iter_mut() {
            *bucket = *bucket / scalar;
        }
        Ok(())
    }
}
