// rng.rs - Default random source (xorshift32)
//
// Small, fast, and reproducible from a 32-bit seed. Implements the rand
// traits so any code written against `R: Rng` can use it, and tests can
// swap in another generator.

use rand::{Error, RngCore, SeedableRng};

const FALLBACK_STATE: u32 = 0xDEADBEEF;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    pub fn new(seed: u32) -> Self {
        // Zero is a fixed point of xorshift
        let state = if seed == 0 { FALLBACK_STATE } else { seed };
        Self { state }
    }
}

impl Default for XorShift32 {
    fn default() -> Self {
        Self::new(FALLBACK_STATE)
    }
}

impl RngCore for XorShift32 {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let hi = self.next_u32() as u64;
        let lo = self.next_u32() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for XorShift32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}

/// Replays a fixed list of draws. Each `(k, n)` is the raw word that makes
/// an `n`-wide `gen_range` return its `k`-th value.
#[cfg(test)]
pub(crate) struct Scripted {
    words: Vec<u32>,
    next: usize,
}

#[cfg(test)]
impl Scripted {
    pub(crate) fn new(draws: &[(u32, u32)]) -> Self {
        let words = draws
            .iter()
            .map(|&(k, n)| {
                assert!(k < n);
                // Smallest v with (v * n) >> 32 == k
                ((((k as u64) << 32) + n as u64 - 1) / n as u64) as u32
            })
            .collect();
        Self { words, next: 0 }
    }
}

#[cfg(test)]
impl RngCore for Scripted {
    fn next_u32(&mut self) -> u32 {
        let word = self.words[self.next];
        self.next += 1;
        word
    }

    fn next_u64(&mut self) -> u64 {
        self.next_u32() as u64
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for byte in dest {
            *byte = self.next_u32() as u8;
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
