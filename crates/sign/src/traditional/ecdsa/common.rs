//! Common utilities for ECDSA implementations

use crate::error::{Error, Result};

/// ECDSA signature components (r, s)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SignatureComponents {
    pub r: u64,
    pub s: u64,
}

impl SignatureComponents {
    /// Serialize signature to DER format
    pub fn to_der(&self) -> Vec<u8> {
        // DER encoding: SEQUENCE { INTEGER r, INTEGER s }
        let r_bytes = encode_integer(self.r);
        let s_bytes = encode_integer(self.s);

        let mut der = Vec::with_capacity(6 + r_bytes.len() + s_bytes.len());
        der.push(0x30);
        der.push((4 + r_bytes.len() + s_bytes.len()) as u8);

        der.push(0x02);
        der.push(r_bytes.len() as u8);
        der.extend_from_slice(&r_bytes);

        der.push(0x02);
        der.push(s_bytes.len() as u8);
        der.extend_from_slice(&s_bytes);

        der
    }

    /// Parse signature from DER format
    pub fn from_der(der: &[u8]) -> Result<Self> {
        if der.len() < 8 {
            return Err(Error::Encoding("DER signature too short".to_string()));
        }

        // Check SEQUENCE tag
        if der[0] != 0x30 {
            return Err(Error::Encoding("Invalid DER SEQUENCE tag".to_string()));
        }
        if der[1] as usize != der.len() - 2 {
            return Err(Error::Encoding(format!(
                "DER SEQUENCE length {} does not match {} content bytes",
                der[1],
                der.len() - 2
            )));
        }

        let mut pos = 2;
        let r = read_integer(der, &mut pos, "r")?;
        let s = read_integer(der, &mut pos, "s")?;

        if pos != der.len() {
            return Err(Error::Encoding(
                "Trailing bytes after DER signature".to_string(),
            ));
        }

        Ok(SignatureComponents { r, s })
    }
}

/// Minimal big-endian encoding with a leading zero if the high bit is set
fn encode_integer(value: u64) -> Vec<u8> {
    let bytes = value.to_be_bytes();
    let first = bytes
        .iter()
        .position(|&b| b != 0)
        .unwrap_or(bytes.len() - 1);

    let mut result = Vec::with_capacity(9);
    if bytes[first] & 0x80 != 0 {
        result.push(0x00);
    }
    result.extend_from_slice(&bytes[first..]);
    result
}

fn read_integer(der: &[u8], pos: &mut usize, name: &str) -> Result<u64> {
    if der.get(*pos) != Some(&0x02) {
        return Err(Error::Encoding(format!(
            "Invalid DER INTEGER tag for {}",
            name
        )));
    }
    let len = *der
        .get(*pos + 1)
        .ok_or_else(|| Error::Encoding(format!("Missing DER length for {}", name)))?
        as usize;
    *pos += 2;

    let body = der
        .get(*pos..*pos + len)
        .ok_or_else(|| Error::Encoding(format!("Truncated DER INTEGER {}", name)))?;
    *pos += len;

    if body.is_empty() {
        return Err(Error::Encoding(format!("Empty DER INTEGER {}", name)));
    }
    if body[0] & 0x80 != 0 {
        return Err(Error::Encoding(format!("Negative DER INTEGER {}", name)));
    }

    // Decode integer (remove leading zeros)
    let first = body.iter().position(|&b| b != 0).unwrap_or(body.len());
    let digits = &body[first..];
    if digits.len() > 8 {
        return Err(Error::Encoding(format!(
            "DER INTEGER {} does not fit in 64 bits",
            name
        )));
    }

    Ok(digits.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64))
}
