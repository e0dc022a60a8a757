//! Testing utilities for the toyecc library
//!
//! Deterministic random sources for driving key generation and signing
//! through known-answer paths.

use rand::{CryptoRng, RngCore};

/// k·G for k = 0..=18 on the demonstration curve; `None` is the identity
pub const MULTIPLES_OF_G: [Option<(u64, u64)>; 19] = [
    None,
    Some((5, 1)),
    Some((6, 3)),
    Some((10, 6)),
    Some((3, 1)),
    Some((9, 16)),
    Some((16, 13)),
    Some((0, 6)),
    Some((13, 7)),
    Some((7, 6)),
    Some((7, 11)),
    Some((13, 10)),
    Some((0, 11)),
    Some((16, 4)),
    Some((9, 1)),
    Some((3, 16)),
    Some((10, 11)),
    Some((6, 14)),
    Some((5, 16)),
];

/// RNG that replays a fixed list of 64-bit words, cycling when exhausted
///
/// Each word is written big-endian into successive 8-byte chunks, which
/// is exactly one draw of the toy scalar sampler.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    words: Vec<u64>,
    pos: usize,
}

impl ScriptedRng {
    /// Replay `words` in order
    pub fn new(words: &[u64]) -> Self {
        assert!(!words.is_empty(), "ScriptedRng needs at least one word");
        ScriptedRng {
            words: words.to_vec(),
            pos: 0,
        }
    }

    /// How many words have been consumed
    pub fn consumed(&self) -> usize {
        self.pos
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    fn next_u64(&mut self) -> u64 {
        let word = self.words[self.pos % self.words.len()];
        self.pos += 1;
        word
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_be_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for ScriptedRng {}

/// RNG whose entropy source is always unavailable
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingRng;

impl RngCore for FailingRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, _dest: &mut [u8]) {}

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
        let code = core::num::NonZeroU32::new(rand::Error::CUSTOM_START)
            .expect("CUSTOM_START is non-zero");
        Err(rand::Error::from(code))
    }
}

impl CryptoRng for FailingRng {}
