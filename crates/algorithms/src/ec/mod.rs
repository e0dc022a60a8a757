//! Elliptic Curve Primitives
//!
//! Short Weierstrass arithmetic over tiny prime fields. The curves here are
//! teaching instruments: every point and scalar fits in a `u64`.

pub mod toy;

pub use toy::{CurveParams, CurvePoint, Scalar as ToyScalar};
