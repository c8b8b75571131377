// Python-compatible random stream built on MT19937.
// - Seeding matches CPython `random.seed(int)`: the integer is split into
//   32-bit words (least significant first) and fed to init_by_array.
// - Bounded draws match `randint` / `_randbelow_with_getrandbits`.
// - Byte draws match `randbytes(n) == getrandbits(8 * n).to_bytes(n, "little")`.
//
// Every draw advances the same state, so callers must keep the draw order fixed.

use rand_mt::Mt;

pub struct PyRandom {
    mt: Mt,
}

impl PyRandom {
    /// Equivalent of `random.seed(seed)` for a non-negative integer below 2^32.
    pub fn seed_u32(seed: u32) -> Self {
        Self::with_key(&[seed])
    }

    /// Seed from a raw init_by_array key.
    pub fn with_key(key: &[u32]) -> Self {
        Self { mt: Mt::new_with_key(key.iter().copied()) }
    }

    #[inline(always)]
    pub fn next_u32(&mut self) -> u32 {
        self.mt.next_u32()
    }

    /// `getrandbits(k)` for 0 <= k <= 32.
    #[inline(always)]
    pub fn getrandbits(&mut self, k: u32) -> u32 {
        assert!(k <= 32, "getrandbits: k={} exceeds one word", k);
        if k == 0 {
            return 0;
        }
        self.next_u32() >> (32 - k)
    }

    /// Uniform value in [0, n) by rejection over bit_length(n) bits.
    pub fn randbelow(&mut self, n: u32) -> u32 {
        assert!(n > 0, "randbelow: empty range");
        // bit_length(n), not bit_length(n - 1): CPython wastes a bit on powers
        // of two and the stream has to waste it too.
        let k = 32 - n.leading_zeros();
        let mut r = self.getrandbits(k);
        while r >= n {
            r = self.getrandbits(k);
        }
        r
    }

    /// Inclusive draw in [lo, hi].
    pub fn randint(&mut self, lo: u32, hi: u32) -> u32 {
        assert!(lo <= hi, "randint: empty range {}..={}", lo, hi);
        // A width of 2^32 would need 33-bit draws spanning two words.
        let width = (hi - lo)
            .checked_add(1)
            .unwrap_or_else(|| panic!("randint: range {}..={} wider than one word", lo, hi));
        lo + self.randbelow(width)
    }

    /// `random()`: 53-bit float in [0, 1).
    pub fn random(&mut self) -> f64 {
        let a = (self.next_u32() >> 5) as f64;
        let b = (self.next_u32() >> 6) as f64;
        (a * 67_108_864.0 + b) * (1.0 / 9_007_199_254_740_992.0)
    }

    /// Fill `out` exactly as `randbytes(out.len())` would.
    pub fn fill_bytes(&mut self, out: &mut [u8]) {
        for chunk in out.chunks_mut(4) {
            let word = if chunk.len() == 4 {
                self.next_u32()
            } else {
                // Trailing partial word keeps its high bits
                self.getrandbits(8 * chunk.len() as u32)
            };
            chunk.copy_from_slice(&word.to_le_bytes()[..chunk.len()]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // First outputs of mt19937ar.out (init_by_array {0x123, 0x234, 0x345, 0x456}).
    #[test]
    fn reference_init_by_array_vector() {
        let mut rng = PyRandom::with_key(&[0x123, 0x234, 0x345, 0x456]);
        assert_eq!(rng.next_u32(), 1067595299);
        assert_eq!(rng.next_u32(), 955945823);
        assert_eq!(rng.next_u32(), 477289528);
    }

    #[test]
    fn random_matches_python() {
        assert_eq!(PyRandom::seed_u32(42).random(), 0.6394267984578837);
        assert_eq!(PyRandom::seed_u32(0).random(), 0.8444218515250481);
    }

    #[test]
    fn randint_matches_python() {
        let mut rng = PyRandom::seed_u32(1);
        let got: Vec<u32> = (0..8).map(|_| rng.randint(0, 9)).collect();
        assert_eq!(got, vec![2, 9, 1, 4, 1, 7, 7, 7]);
    }

    #[test]
    fn fill_bytes_partial_tail_matches_randbytes() {
        let mut rng = PyRandom::seed_u32(7);
        let mut out = [0u8; 7];
        rng.fill_bytes(&mut out);
        assert_eq!(hex::encode(out), "38b4e6524da7f2");
    }

    #[test]
    fn fill_bytes_full_words_are_little_endian() {
        let mut a = PyRandom::seed_u32(99);
        let mut b = PyRandom::seed_u32(99);
        let mut out = [0u8; 8];
        a.fill_bytes(&mut out);
        assert_eq!(out[..4], b.next_u32().to_le_bytes());
        assert_eq!(out[4..], b.next_u32().to_le_bytes());
    }

    #[test]
    fn randint_stays_in_range() {
        let mut rng = PyRandom::seed_u32(0x1234_5678);
        for _ in 0..10_000 {
            let v = rng.randint(0, 1023);
            assert!(v <= 1023);
        }
        for _ in 0..100 {
            assert_eq!(rng.randint(5, 5), 5);
        }
    }

    #[test]
    fn getrandbits_zero_consumes_nothing() {
        let mut a = PyRandom::seed_u32(3);
        let mut b = PyRandom::seed_u32(3);
        assert_eq!(a.getrandbits(0), 0);
        assert_eq!(a.next_u32(), b.next_u32());
    }
}
