//! ECDSA over the toy demonstration curve
//!
//! Signing follows the textbook algorithm:
//!
//! 1. h = SHA-256(M) interpreted as an integer, reduced mod n
//! 2. draw k uniformly from [1, n-1]
//! 3. (x₁, y₁) = k·G, r = x₁ mod n; if r = 0, go back to step 2
//! 4. s = k⁻¹(h + r·d) mod n; if s = 0, go back to step 2
//! 5. return (r, s)
//!
//! With n = 19 both retry branches are reachable in practice, and the
//! private key can be recovered by trying every candidate (see
//! [`crate::attack`]).

use core::fmt;

use crate::error::{Error, Result};
use crate::traditional::ecdsa::common::SignatureComponents;
use rand::{CryptoRng, RngCore};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use toyecc_algorithms::ec::toy::{CurveParams, CurvePoint, Scalar, TOY_POINT_UNCOMPRESSED_SIZE};
use toyecc_api::{
    error::Error as ApiError, signature::SignatureBytes, signature::SignatureDerive,
    Result as ApiResult, ResultExt, Signature as SignatureTrait,
};
use zeroize::Zeroize;

/// Number of ephemeral-key draws after which the `trace` feature reports
/// a slow signing loop on stderr
pub const SIGN_RETRY_WARN_THRESHOLD: u32 = 32;

/// Toy private key: a scalar d in [1, n-1]
#[derive(Clone)]
pub struct SecretKey {
    d: Scalar,
}

impl SecretKey {
    /// Wrap a private scalar, rejecting 0 and values ≥ n
    pub fn new(params: &CurveParams, d: u64) -> Result<Self> {
        let d = Scalar::new(params, d).map_err(|_| {
            Error::InvalidKey(format!(
                "private scalar {} is outside [1, {})",
                d,
                params.n()
            ))
        })?;
        Ok(SecretKey { d })
    }

    /// The private scalar d
    pub fn value(&self) -> u64 {
        self.d.value()
    }

    /// The private scalar as a curve scalar
    pub fn scalar(&self) -> &Scalar {
        &self.d
    }
}

impl Zeroize for SecretKey {
    fn zeroize(&mut self) {
        self.d.zeroize();
    }
}

// Secure cleanup on drop
impl Drop for SecretKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl PartialEq for SecretKey {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.d.value().ct_eq(&other.d.value()))
            && self.d.modulus() == other.d.modulus()
    }
}

impl Eq for SecretKey {}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey { .. }")
    }
}

/// Toy public key: the point Q = d·G
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PublicKey(CurvePoint);

impl PublicKey {
    /// Accept an externally supplied point as a public key
    ///
    /// The identity and points with unreduced coordinates are rejected.
    pub fn from_point(params: &CurveParams, point: CurvePoint) -> Result<Self> {
        if point.is_identity() {
            return Err(Error::InvalidKey(
                "public key is the point at infinity".to_string(),
            ));
        }
        params
            .validate_point(point)
            .map_err(|e| Error::InvalidKey(e.to_string()))?;
        Ok(PublicKey(point))
    }

    /// Parse an uncompressed encoding (0x04 ∥ x ∥ y)
    pub fn from_bytes(params: &CurveParams, bytes: &[u8]) -> Result<Self> {
        let point = CurvePoint::deserialize_uncompressed(bytes)?;
        Self::from_point(params, point)
    }

    /// Uncompressed encoding (0x04 ∥ x ∥ y)
    pub fn to_bytes(&self) -> [u8; TOY_POINT_UNCOMPRESSED_SIZE] {
        self.0.serialize_uncompressed()
    }

    /// The point Q
    pub fn point(&self) -> CurvePoint {
        self.0
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A private key together with its public point
///
/// Only built by key generation or [`KeyPair::from_secret`], so the public
/// key always equals d·G.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    secret: SecretKey,
    public: PublicKey,
}

impl KeyPair {
    /// Rebuild a key pair from a private key, deriving Q = d·G
    pub fn from_secret(scheme: &ToyEcdsa, secret: SecretKey) -> Result<Self> {
        let public = scheme.derive_public_key(&secret)?;
        Ok(KeyPair { secret, public })
    }

    /// The private key d
    pub fn secret_key(&self) -> &SecretKey {
        &self.secret
    }

    /// The public key Q
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }
}

/// Signature (r, s)
///
/// Any pair of integers can be represented; [`ToyEcdsa::verify`] rejects
/// components outside [1, n-1].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Signature {
    r: u64,
    s: u64,
}

impl Signature {
    /// Build a signature from raw components
    pub fn new(r: u64, s: u64) -> Self {
        Signature { r, s }
    }

    /// Component r
    pub fn r(&self) -> u64 {
        self.r
    }

    /// Component s
    pub fn s(&self) -> u64 {
        self.s
    }

    /// ASN.1 DER encoding: SEQUENCE { r INTEGER, s INTEGER }
    pub fn to_der(&self) -> Vec<u8> {
        SignatureComponents {
            r: self.r,
            s: self.s,
        }
        .to_der()
    }

    /// Parse the ASN.1 DER encoding
    pub fn from_der(der: &[u8]) -> Result<Self> {
        let SignatureComponents { r, s } = SignatureComponents::from_der(der)?;
        Ok(Signature { r, s })
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.r, self.s)
    }
}

impl SignatureBytes for Signature {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Signature::from_der(bytes).map_err(ApiError::from)
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.to_der()
    }
}

/// ECDSA over an explicit set of curve parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToyEcdsa {
    params: CurveParams,
}

impl ToyEcdsa {
    /// Use the given curve parameters
    pub fn new(params: CurveParams) -> Self {
        ToyEcdsa { params }
    }

    /// The fixed demonstration curve (p = 17, n = 19)
    pub fn toy() -> Self {
        ToyEcdsa::new(CurveParams::toy())
    }

    /// The curve parameters this scheme signs over
    pub fn params(&self) -> &CurveParams {
        &self.params
    }

    /// Generate a key pair: d uniform in [1, n-1] and Q = d·G
    pub fn generate_keys<R: RngCore + CryptoRng>(&self, rng: &mut R) -> Result<KeyPair> {
        let d = Scalar::random(&self.params, rng)?;
        let q = self.params.scalar_mult_base_g(d.value())?;
        Ok(KeyPair {
            secret: SecretKey { d },
            public: PublicKey(q),
        })
    }

    /// Compute Q = d·G for a private key of this curve
    pub fn derive_public_key(&self, secret: &SecretKey) -> Result<PublicKey> {
        let d = self.check_secret(secret)?;
        Ok(PublicKey(self.params.scalar_mult_base_g(d.value())?))
    }

    /// h = SHA-256(message) as a big-endian integer, reduced mod n
    pub fn hash_message(&self, message: &[u8]) -> Scalar {
        Scalar::from_digest(&self.params, &Sha256::digest(message))
    }

    /// Sign a message with a fresh ephemeral key drawn from `rng`
    pub fn sign<R: RngCore + CryptoRng>(
        &self,
        message: &[u8],
        secret: &SecretKey,
        rng: &mut R,
    ) -> Result<Signature> {
        self.sign_with_attempts(message, secret, rng)
            .map(|(signature, _)| signature)
    }

    /// Sign a message, also reporting how many ephemeral keys were drawn
    ///
    /// The count is 1 unless a draw produced r = 0 or s = 0.
    pub fn sign_with_attempts<R: RngCore + CryptoRng>(
        &self,
        message: &[u8],
        secret: &SecretKey,
        rng: &mut R,
    ) -> Result<(Signature, u32)> {
        let d = self.check_secret(secret)?;
        let h = self.hash_message(message);

        let mut attempts: u32 = 0;
        loop {
            attempts = attempts.saturating_add(1);

            #[cfg(feature = "trace")]
            {
                if attempts == SIGN_RETRY_WARN_THRESHOLD {
                    eprintln!(
                        "toyecc-sign: {} ephemeral keys drawn without a usable signature",
                        attempts
                    );
                }
            }

            let mut k = Scalar::random(&self.params, rng)?;

            // (x₁, y₁) = k·G, r = x₁ mod n; the identity counts as r = 0
            let x1 = self.params.scalar_mult_base_g(k.value())?.x();
            let r = Scalar::reduce(&self.params, x1.unwrap_or(0));
            if r.is_zero() {
                k.zeroize();
                continue;
            }

            // s = k⁻¹(h + r·d) mod n
            let mut k_inv = k.inv_mod_n()?;
            k.zeroize();
            let s = k_inv.mul_mod_n(&h.add_mod_n(&r.mul_mod_n(&d)?)?)?;
            k_inv.zeroize();
            if s.is_zero() {
                continue;
            }

            return Ok((
                Signature {
                    r: r.value(),
                    s: s.value(),
                },
                attempts,
            ));
        }
    }

    /// Check a signature against a message and public key
    ///
    /// Out-of-range components, an unusable public key, and a verification
    /// point at infinity all make the signature invalid.
    pub fn verify(&self, message: &[u8], signature: &Signature, public_key: &PublicKey) -> bool {
        self.verification_point_matches(message, signature, public_key)
            .unwrap_or(false)
    }

    fn verification_point_matches(
        &self,
        message: &[u8],
        signature: &Signature,
        public_key: &PublicKey,
    ) -> Result<bool> {
        let n = self.params.n();
        if !(1..n).contains(&signature.r) || !(1..n).contains(&signature.s) {
            return Ok(false);
        }

        let q = public_key.point();
        if q.is_identity() {
            return Ok(false);
        }

        let r = Scalar::new(&self.params, signature.r)?;
        let s = Scalar::new(&self.params, signature.s)?;
        let h = self.hash_message(message);

        // w = s⁻¹, u₁ = h·w, u₂ = r·w
        let w = s.inv_mod_n()?;
        let u1 = h.mul_mod_n(&w)?;
        let u2 = r.mul_mod_n(&w)?;

        // (x₁, y₁) = u₁·G + u₂·Q
        let point = self.params.add(
            self.params.scalar_mult_base_g(u1.value())?,
            self.params.scalar_mult(u2.value(), q)?,
        )?;

        let x1 = match point.x() {
            Some(x) => x,
            None => return Ok(false),
        };

        Ok(bool::from((x1 % n).ct_eq(&r.value())))
    }

    fn check_secret(&self, secret: &SecretKey) -> Result<Scalar> {
        let d = *secret.scalar();
        if d.modulus() != self.params.n() || d.is_zero() {
            return Err(Error::InvalidKey(format!(
                "private scalar does not belong to a group of order {}",
                self.params.n()
            )));
        }
        Ok(d)
    }
}

impl Default for ToyEcdsa {
    fn default() -> Self {
        ToyEcdsa::toy()
    }
}

/// ECDSA over the fixed toy curve through the common [`SignatureTrait`] API
///
/// Ephemeral keys come from `rand::thread_rng`.
pub struct EcdsaToy;

impl SignatureTrait for EcdsaToy {
    type PublicKey = PublicKey;
    type SecretKey = SecretKey;
    type SignatureData = Signature;
    type KeyPair = KeyPair;

    fn name() -> &'static str {
        "ECDSA-Toy"
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        ToyEcdsa::toy()
            .generate_keys(rng)
            .with_context("ECDSA-Toy keypair")
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        *keypair.public_key()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.secret_key().clone()
    }

    fn sign(message: &[u8], secret_key: &Self::SecretKey) -> ApiResult<Self::SignatureData> {
        let mut rng = rand::thread_rng();
        ToyEcdsa::toy()
            .sign(message, secret_key, &mut rng)
            .with_context("ECDSA-Toy sign")
    }

    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> ApiResult<()> {
        if ToyEcdsa::toy().verify(message, signature, public_key) {
            Ok(())
        } else {
            Err(ApiError::InvalidSignature {
                context: "ECDSA-Toy verify",
                message: "Signature verification failed".to_string(),
            })
        }
    }
}

impl SignatureDerive for EcdsaToy {
    fn derive_public_key(secret_key: &Self::SecretKey) -> ApiResult<Self::PublicKey> {
        ToyEcdsa::toy()
            .derive_public_key(secret_key)
            .map_err(ApiError::from)
    }
}
