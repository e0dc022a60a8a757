//! Validation utilities for curve arithmetic

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate that `value` lies in the half-open range `[low, high)`
#[inline(always)]
pub fn range(name: &'static str, value: u64, low: u64, high: u64) -> Result<()> {
    if value < low || value >= high {
        return Err(Error::param(
            name,
            format!("{} is outside [{}, {})", value, low, high),
        ));
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}
