//! Toy short Weierstrass curve primitives
//!
//! This module implements the group law of y² = x³ + a·x + b over a prime
//! field small enough to enumerate by hand. The fixed demonstration curve
//! is p = 17, a = 2, G = (5, 1) with n = 19 (see [`CurveParams::toy`]).
//!
//! Implements:
//! - affine point addition and doubling, including the identity and
//!   vertical-line cases,
//! - double-and-add scalar multiplication,
//! - scalars mod n with uniform sampling and digest reduction.
//!
//! Nothing here is constant-time; the field has 17 elements.

mod constants;
mod curve;
mod point;
mod scalar;

pub use constants::{TOY_FIELD_ELEMENT_SIZE, TOY_POINT_UNCOMPRESSED_SIZE};
pub use curve::CurveParams;
pub use point::CurvePoint;
pub use scalar::Scalar;

use crate::error::Result;
use rand::{CryptoRng, RngCore};

/// Get the base point G of the given curve
pub fn base_point_g(params: &CurveParams) -> CurvePoint {
    params.generator()
}

/// Point addition: P + Q
pub fn point_add(params: &CurveParams, lhs: CurvePoint, rhs: CurvePoint) -> Result<CurvePoint> {
    params.add(lhs, rhs)
}

/// General scalar multiplication: k·P
pub fn scalar_mult(params: &CurveParams, k: u64, point: CurvePoint) -> Result<CurvePoint> {
    params.scalar_mult(k, point)
}

/// Scalar multiplication with the base point: scalar·G
pub fn scalar_mult_base_g(params: &CurveParams, scalar: &Scalar) -> Result<CurvePoint> {
    params.scalar_mult_base_g(scalar.value())
}

/// Generate a keypair (d, d·G) with d uniform in [1, n−1]
pub fn generate_keypair<R: CryptoRng + RngCore>(
    params: &CurveParams,
    rng: &mut R,
) -> Result<(Scalar, CurvePoint)> {
    let private = Scalar::random(params, rng)?;
    let public = scalar_mult_base_g(params, &private)?;
    Ok((private, public))
}
