//! Toy curve points

use core::fmt;

use crate::ec::toy::constants::{TOY_FIELD_ELEMENT_SIZE, TOY_POINT_UNCOMPRESSED_SIZE};
use crate::error::{validate, Error, Result};

/// A point of the curve group: the identity or an affine pair
///
/// Coordinates are field elements in `[0, p)`. Range checks against a
/// concrete modulus happen in [`CurveParams`](super::CurveParams), which
/// owns `p`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurvePoint {
    /// The point at infinity (group identity)
    #[default]
    Infinity,
    /// Affine coordinates (x, y)
    Affine {
        /// x-coordinate
        x: u64,
        /// y-coordinate
        y: u64,
    },
}

impl CurvePoint {
    /// Create an affine point
    pub const fn affine(x: u64, y: u64) -> Self {
        CurvePoint::Affine { x, y }
    }

    /// The identity (point at infinity)
    pub const fn identity() -> Self {
        CurvePoint::Infinity
    }

    /// Is this the identity point?
    pub fn is_identity(&self) -> bool {
        matches!(self, CurvePoint::Infinity)
    }

    /// x-coordinate, or `None` for the identity
    pub fn x(&self) -> Option<u64> {
        self.coordinates().map(|(x, _)| x)
    }

    /// y-coordinate, or `None` for the identity
    pub fn y(&self) -> Option<u64> {
        self.coordinates().map(|(_, y)| y)
    }

    /// Both coordinates, or `None` for the identity
    pub fn coordinates(&self) -> Option<(u64, u64)> {
        match *self {
            CurvePoint::Infinity => None,
            CurvePoint::Affine { x, y } => Some((x, y)),
        }
    }

    /// Serialize as uncompressed: 0x04 ∥ x ∥ y, or all zeros for the identity
    pub fn serialize_uncompressed(&self) -> [u8; TOY_POINT_UNCOMPRESSED_SIZE] {
        let mut out = [0u8; TOY_POINT_UNCOMPRESSED_SIZE];
        if let CurvePoint::Affine { x, y } = *self {
            out[0] = 0x04;
            out[1..1 + TOY_FIELD_ELEMENT_SIZE].copy_from_slice(&x.to_be_bytes());
            out[1 + TOY_FIELD_ELEMENT_SIZE..].copy_from_slice(&y.to_be_bytes());
        }
        out
    }

    /// Deserialize from uncompressed bytes (0x04 ∥ x ∥ y), or all zeros for identity
    ///
    /// Coordinates are not reduced or range-checked here.
    pub fn deserialize_uncompressed(bytes: &[u8]) -> Result<Self> {
        validate::length("Toy Point", bytes.len(), TOY_POINT_UNCOMPRESSED_SIZE)?;
        if bytes.iter().all(|&b| b == 0) {
            return Ok(CurvePoint::Infinity);
        }
        if bytes[0] != 0x04 {
            return Err(Error::param("Toy Point", "Invalid prefix for uncompressed"));
        }
        let mut xb = [0u8; TOY_FIELD_ELEMENT_SIZE];
        let mut yb = [0u8; TOY_FIELD_ELEMENT_SIZE];
        xb.copy_from_slice(&bytes[1..1 + TOY_FIELD_ELEMENT_SIZE]);
        yb.copy_from_slice(&bytes[1 + TOY_FIELD_ELEMENT_SIZE..]);
        Ok(CurvePoint::Affine {
            x: u64::from_be_bytes(xb),
            y: u64::from_be_bytes(yb),
        })
    }
}

impl fmt::Display for CurvePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurvePoint::Infinity => write!(f, "point at infinity"),
            CurvePoint::Affine { x, y } => write!(f, "({}, {})", x, y),
        }
    }
}
