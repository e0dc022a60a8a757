//! Toy curve domain parameters and the group law

use toyecc_common::math_common::{is_prime, mod_add, mod_inv, mod_mul, mod_neg, mod_sub};
use toyecc_params::traditional::ecdsa::{ToyCurveConstants, TOY_P17};

use crate::ec::toy::point::CurvePoint;
use crate::error::{validate, Error, Result};

/// Domain parameters {a, b, p, G, n} of y² = x³ + a·x + b over 𝔽ₚ
///
/// Immutable once built. Every arithmetic routine takes the parameters by
/// reference, so there is no process-wide curve state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveParams {
    a: u64,
    b: u64,
    p: u64,
    g: CurvePoint,
    n: u64,
}

impl CurveParams {
    /// Build and validate a parameter set
    ///
    /// Checks that `p > 3` and `n` are prime, that `a`, `b` and the
    /// generator coordinates are reduced mod `p`, and that `n·G` is the
    /// identity (so `n` is the order of `G`). Membership of `G` in the
    /// curve defined by `b` is not required; see [`Self::is_on_curve`].
    pub fn new(a: u64, b: u64, p: u64, g_x: u64, g_y: u64, n: u64) -> Result<Self> {
        validate::parameter(p > 3 && is_prime(p), "p", "modulus must be a prime greater than 3")?;
        validate::parameter(is_prime(n), "n", "group order must be prime")?;
        validate::range("a", a, 0, p)?;
        validate::range("b", b, 0, p)?;
        validate::range("G.x", g_x, 0, p)?;
        validate::range("G.y", g_y, 0, p)?;

        let params = CurveParams {
            a,
            b,
            p,
            g: CurvePoint::affine(g_x, g_y),
            n,
        };

        if !params.scalar_mult(n, params.g)?.is_identity() {
            return Err(Error::param("n", "n·G is not the point at infinity"));
        }

        Ok(params)
    }

    /// Build from a constant table, validating it
    pub fn from_constants(constants: &ToyCurveConstants) -> Result<Self> {
        Self::new(
            constants.a,
            constants.b,
            constants.p,
            constants.g_x,
            constants.g_y,
            constants.n,
        )
    }

    /// The fixed demonstration curve: a = 2, b = 3, p = 17, G = (5, 1), n = 19
    pub fn toy() -> Self {
        CurveParams {
            a: TOY_P17.a,
            b: TOY_P17.b,
            p: TOY_P17.p,
            g: CurvePoint::affine(TOY_P17.g_x, TOY_P17.g_y),
            n: TOY_P17.n,
        }
    }

    /// Coefficient a
    pub fn a(&self) -> u64 {
        self.a
    }

    /// Coefficient b
    pub fn b(&self) -> u64 {
        self.b
    }

    /// Field modulus p
    pub fn p(&self) -> u64 {
        self.p
    }

    /// Order n of the generator
    pub fn n(&self) -> u64 {
        self.n
    }

    /// The generator G
    pub fn generator(&self) -> CurvePoint {
        self.g
    }

    /// Reject points whose coordinates are not reduced mod p
    pub fn validate_point(&self, point: CurvePoint) -> Result<()> {
        if let CurvePoint::Affine { x, y } = point {
            validate::range("point x", x, 0, self.p)?;
            validate::range("point y", y, 0, self.p)?;
        }
        Ok(())
    }

    /// Check y² ≡ x³ + a·x + b (mod p); the identity is on every curve
    pub fn is_on_curve(&self, point: CurvePoint) -> bool {
        match point {
            CurvePoint::Infinity => true,
            CurvePoint::Affine { x, y } => {
                if x >= self.p || y >= self.p {
                    return false;
                }
                let p = self.p;
                let lhs = mod_mul(y, y, p);
                let x3 = mod_mul(mod_mul(x, x, p), x, p);
                let rhs = mod_add(mod_add(x3, mod_mul(self.a, x, p), p), self.b, p);
                lhs == rhs
            }
        }
    }

    /// Additive inverse: (x, y) ↦ (x, −y)
    pub fn negate(&self, point: CurvePoint) -> Result<CurvePoint> {
        self.validate_point(point)?;
        Ok(match point {
            CurvePoint::Infinity => CurvePoint::Infinity,
            CurvePoint::Affine { x, y } => CurvePoint::affine(x, mod_neg(y, self.p)),
        })
    }

    /// Add two points (group law)
    ///
    /// Vertical lines (Q = −P, including doubling a point with y = 0)
    /// give the identity. Any other zero denominator means the inputs are
    /// not points of one curve and yields [`Error::NotInvertible`].
    pub fn add(&self, lhs: CurvePoint, rhs: CurvePoint) -> Result<CurvePoint> {
        self.validate_point(lhs)?;
        self.validate_point(rhs)?;

        let ((x1, y1), (x2, y2)) = match (lhs, rhs) {
            (CurvePoint::Infinity, point) | (point, CurvePoint::Infinity) => return Ok(point),
            (CurvePoint::Affine { x: x1, y: y1 }, CurvePoint::Affine { x: x2, y: y2 }) => {
                ((x1, y1), (x2, y2))
            }
        };

        let p = self.p;

        if x1 == x2 && y1 == mod_neg(y2, p) {
            return Ok(CurvePoint::Infinity);
        }

        let lambda = if lhs != rhs {
            // λ = (y₂ − y₁) / (x₂ − x₁)
            let num = mod_sub(y2, y1, p);
            let den = mod_sub(x2, x1, p);
            mod_mul(num, self.inv_mod_p(den, "point addition")?, p)
        } else {
            // λ = (3·x₁² + a) / (2·y₁)
            let num = mod_add(mod_mul(3, mod_mul(x1, x1, p), p), self.a, p);
            let den = mod_add(y1, y1, p);
            mod_mul(num, self.inv_mod_p(den, "point doubling")?, p)
        };

        // x₃ = λ² − x₁ − x₂, y₃ = λ·(x₁ − x₃) − y₁
        let x3 = mod_sub(mod_sub(mod_mul(lambda, lambda, p), x1, p), x2, p);
        let y3 = mod_sub(mod_mul(lambda, mod_sub(x1, x3, p), p), y1, p);

        Ok(CurvePoint::affine(x3, y3))
    }

    /// Double a point: 2P
    pub fn double(&self, point: CurvePoint) -> Result<CurvePoint> {
        self.add(point, point)
    }

    /// Scalar multiplication k·P by double-and-add from the low bit
    pub fn scalar_mult(&self, k: u64, point: CurvePoint) -> Result<CurvePoint> {
        self.validate_point(point)?;

        let mut result = CurvePoint::Infinity;
        let mut addend = point;
        let mut k = k;

        while k != 0 {
            if k & 1 == 1 {
                result = self.add(result, addend)?;
            }
            addend = self.double(addend)?;
            k >>= 1;
        }

        Ok(result)
    }

    /// Scalar multiplication with the generator: k·G
    pub fn scalar_mult_base_g(&self, k: u64) -> Result<CurvePoint> {
        self.scalar_mult(k, self.g)
    }

    fn inv_mod_p(&self, value: u64, context: &'static str) -> Result<u64> {
        mod_inv(value, self.p).ok_or(Error::not_invertible(context, self.p))
    }
}
