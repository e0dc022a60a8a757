//! Constants for ECDSA over toy short Weierstrass curves

/// Domain parameters of a short Weierstrass curve y² = x³ + a·x + b over 𝔽ₚ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToyCurveConstants {
    /// Coefficient a
    pub a: u64,
    /// Coefficient b
    pub b: u64,
    /// Prime field modulus
    pub p: u64,
    /// Base point x-coordinate
    pub g_x: u64,
    /// Base point y-coordinate
    pub g_y: u64,
    /// Order of the base point
    pub n: u64,
}

/// The demonstration curve: a = 2, b = 3, p = 17, G = (5, 1), n = 19
///
/// The group law never reads `b`. G = (5, 1) satisfies the equation with
/// b = 2, which is the curve whose 19 points the arithmetic walks.
pub const TOY_P17: ToyCurveConstants = ToyCurveConstants {
    a: 2,
    b: 3,
    p: 17,
    g_x: 5,
    g_y: 1,
    n: 19,
};

/// Size of a toy scalar in bytes when sampled from an RNG
pub const TOY_SCALAR_SAMPLE_SIZE: usize = 8;

/// Message signed by the demonstration program
pub const TOY_DEMO_MESSAGE: &str = "Send 1 BTC to Alice";
