//! Common mathematical operations for cryptographic algorithms
//!
//! All results are normalized into `[0, m)`.

/// Perform modular exponentiation (a^b mod m)
///
/// Implements the square-and-multiply algorithm for efficient
/// modular exponentiation.
pub fn mod_exp(a: u64, b: u64, m: u64) -> u64 {
    if m == 1 {
        return 0;
    }

    let mut result = 1;
    let mut base = a % m;
    let mut exp = b;

    while exp > 0 {
        if exp & 1 == 1 {
            result = mod_mul(result, base, m);
        }

        exp >>= 1;
        base = mod_mul(base, base, m);
    }

    result
}

/// Compute the greatest common divisor of two numbers
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Extended Euclidean algorithm to compute a^(-1) mod m
///
/// Returns `None` when `a ≡ 0 (mod m)` or when `a` and `m` share a factor.
pub fn mod_inv(a: u64, m: u64) -> Option<u64> {
    if m <= 1 {
        return None;
    }

    let a = a % m;
    if a == 0 {
        return None;
    }

    // Invariant: old_r = old_s * a (mod m), r = s * a (mod m)
    let (mut old_r, mut r) = (a as i128, m as i128);
    let (mut old_s, mut s) = (1i128, 0i128);

    while r != 0 {
        let q = old_r / r;

        let next_r = old_r - q * r;
        old_r = r;
        r = next_r;

        let next_s = old_s - q * s;
        old_s = s;
        s = next_s;
    }

    if old_r != 1 {
        return None;
    }

    Some(old_s.rem_euclid(m as i128) as u64)
}

/// Perform modular addition: (a + b) mod m
pub fn mod_add(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 + b as u128) % m as u128) as u64
}

/// Perform modular subtraction: (a - b) mod m
pub fn mod_sub(a: u64, b: u64, m: u64) -> u64 {
    let a = a % m;
    let b = b % m;
    if a >= b {
        a - b
    } else {
        m - (b - a)
    }
}

/// Perform modular negation: (-a) mod m
pub fn mod_neg(a: u64, m: u64) -> u64 {
    mod_sub(0, a, m)
}

/// Perform modular multiplication: (a * b) mod m
pub fn mod_mul(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

/// Deterministic primality test by trial division
///
/// Only meant for the small moduli of the toy curves.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut d = 3u64;
    while d.saturating_mul(d) <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}
