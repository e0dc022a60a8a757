//! Toy scalar arithmetic: integers mod n

use rand::{CryptoRng, RngCore};
use toyecc_common::math_common::{mod_add, mod_inv, mod_mul};
use toyecc_params::traditional::ecdsa::TOY_SCALAR_SAMPLE_SIZE;
use zeroize::Zeroize;

use crate::ec::toy::curve::CurveParams;
use crate::error::{validate, Error, Result};

/// Scalar modulo the group order n of a [`CurveParams`]
///
/// Each scalar remembers its modulus so mixed-curve arithmetic is caught.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Zeroize)]
pub struct Scalar {
    value: u64,
    modulus: u64,
}

impl Scalar {
    /// Create a scalar in [1, n−1]; errors for 0 or values ≥ n
    pub fn new(params: &CurveParams, value: u64) -> Result<Self> {
        validate::range("scalar", value, 1, params.n())?;
        Ok(Scalar {
            value,
            modulus: params.n(),
        })
    }

    /// Create a scalar by reducing `value` mod n (zero allowed)
    pub fn reduce(params: &CurveParams, value: u64) -> Self {
        Scalar {
            value: value % params.n(),
            modulus: params.n(),
        }
    }

    /// Interpret big-endian bytes as an unbounded integer and reduce it mod n
    ///
    /// Used to turn a hash digest into the scalar h.
    pub fn from_digest(params: &CurveParams, digest: &[u8]) -> Self {
        let n = params.n();
        let value = digest
            .iter()
            .fold(0u64, |acc, &byte| mod_add(mod_mul(acc, 256, n), byte as u64, n));
        Scalar { value, modulus: n }
    }

    /// Draw a scalar uniformly from [1, n−1]
    ///
    /// Masked rejection sampling over RNG bytes; a failing generator is
    /// reported as [`Error::Rng`].
    pub fn random<R: RngCore + CryptoRng>(params: &CurveParams, rng: &mut R) -> Result<Self> {
        let n = params.n();
        let bits = 64 - (n - 1).leading_zeros();
        let mask = if bits >= 64 {
            u64::MAX
        } else {
            (1u64 << bits) - 1
        };

        let mut bytes = [0u8; TOY_SCALAR_SAMPLE_SIZE];
        loop {
            rng.try_fill_bytes(&mut bytes).map_err(|e| Error::Rng {
                context: "toy scalar sampling",
                details: e.to_string(),
            })?;
            let candidate = u64::from_be_bytes(bytes) & mask;
            bytes.zeroize();
            if candidate != 0 && candidate < n {
                return Ok(Scalar {
                    value: candidate,
                    modulus: n,
                });
            }
        }
    }

    /// Integer value in [0, n)
    pub fn value(&self) -> u64 {
        self.value
    }

    /// The modulus n
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Is this scalar zero?
    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// (self + other) mod n
    pub fn add_mod_n(&self, other: &Self) -> Result<Self> {
        self.check_same_modulus(other)?;
        Ok(Scalar {
            value: mod_add(self.value, other.value, self.modulus),
            modulus: self.modulus,
        })
    }

    /// (self · other) mod n
    pub fn mul_mod_n(&self, other: &Self) -> Result<Self> {
        self.check_same_modulus(other)?;
        Ok(Scalar {
            value: mod_mul(self.value, other.value, self.modulus),
            modulus: self.modulus,
        })
    }

    /// self⁻¹ mod n
    pub fn inv_mod_n(&self) -> Result<Self> {
        let value = mod_inv(self.value, self.modulus)
            .ok_or(Error::not_invertible("scalar inversion", self.modulus))?;
        Ok(Scalar {
            value,
            modulus: self.modulus,
        })
    }

    fn check_same_modulus(&self, other: &Self) -> Result<()> {
        validate::parameter(
            self.modulus == other.modulus,
            "scalar",
            "operands belong to different group orders",
        )
    }
}
