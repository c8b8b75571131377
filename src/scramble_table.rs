// XMLY scramble table: a permutation of 0..TABLE_LEN built by a full-range
// swap shuffle over the identity sequence.

use crate::error::FixtureError;
use crate::fixture_params::{TABLE_BYTES, TABLE_LEN};
use crate::py_random::PyRandom;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrambleTable {
    entries: [u16; TABLE_LEN],
}

impl ScrambleTable {
    pub fn identity() -> Self {
        let mut entries = [0u16; TABLE_LEN];
        for (i, e) in entries.iter_mut().enumerate() {
            *e = i as u16;
        }
        Self { entries }
    }

    /// Shuffle the identity sequence. Every position swaps with a partner drawn
    /// over the whole table, not the shrinking tail.
    pub fn shuffled(rng: &mut PyRandom) -> Self {
        let mut table = Self::identity();
        let last = (TABLE_LEN - 1) as u32;
        for i in 0..TABLE_LEN {
            let j = rng.randint(0, last) as usize;
            table.entries.swap(i, j);
        }
        table
    }

    pub fn entries(&self) -> &[u16; TABLE_LEN] {
        &self.entries
    }

    pub fn to_le_bytes(&self) -> [u8; TABLE_BYTES] {
        let mut out = [0u8; TABLE_BYTES];
        for (dst, v) in out.chunks_exact_mut(2).zip(self.entries.iter()) {
            dst.copy_from_slice(&v.to_le_bytes());
        }
        out
    }

    /// Decode without checking; call `validate` for the permutation property.
    pub fn from_le_bytes(bytes: &[u8; TABLE_BYTES]) -> Self {
        let mut entries = [0u16; TABLE_LEN];
        for (e, src) in entries.iter_mut().zip(bytes.chunks_exact(2)) {
            *e = u16::from_le_bytes([src[0], src[1]]);
        }
        Self { entries }
    }

    pub fn validate(&self) -> Result<(), FixtureError> {
        let mut seen = [false; TABLE_LEN];
        for (index, &value) in self.entries.iter().enumerate() {
            let slot = seen
                .get_mut(value as usize)
                .ok_or(FixtureError::TableValueOutOfRange { index, value })?;
            if *slot {
                return Err(FixtureError::TableDuplicate { index, value });
            }
            *slot = true;
        }
        Ok(())
    }

    pub fn is_permutation(&self) -> bool {
        self.validate().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_ordered() {
        let t = ScrambleTable::identity();
        assert!(t.entries().iter().enumerate().all(|(i, &v)| v as usize == i));
        assert!(t.is_permutation());
    }

    #[test]
    fn shuffle_is_permutation() {
        for seed in [0u32, 1, 0x1234_5678, u32::MAX] {
            let mut rng = PyRandom::seed_u32(seed);
            let t = ScrambleTable::shuffled(&mut rng);
            assert!(t.is_permutation(), "seed {:#x} broke the permutation", seed);
            assert_ne!(t, ScrambleTable::identity());
        }
    }

    // Prefix and follow-up bytes recorded from CPython for seed 0x12345679.
    #[test]
    fn shuffle_matches_python_for_neighbour_seed() {
        let mut rng = PyRandom::seed_u32(0x1234_5679);
        let t = ScrambleTable::shuffled(&mut rng);
        assert_eq!(t.entries()[..4], [173, 271, 921, 150]);

        let mut next = [0u8; 4];
        rng.fill_bytes(&mut next);
        assert_eq!(hex::encode(next), "8b7adec4");
    }

    #[test]
    fn le_layout() {
        let bytes = ScrambleTable::identity().to_le_bytes();
        assert_eq!(bytes.len(), TABLE_BYTES);
        assert_eq!(bytes[..6], [0x00, 0x00, 0x01, 0x00, 0x02, 0x00]);
        // 1023 = 0x03FF
        assert_eq!(bytes[TABLE_BYTES - 2..], [0xFF, 0x03]);
    }

    #[test]
    fn decode_inverts_encode() {
        let mut rng = PyRandom::seed_u32(11);
        let t = ScrambleTable::shuffled(&mut rng);
        assert_eq!(ScrambleTable::from_le_bytes(&t.to_le_bytes()), t);
    }

    #[test]
    fn validate_rejects_duplicate() {
        let mut bytes = ScrambleTable::identity().to_le_bytes();
        // entry 5 := 4
        bytes[10] = 4;
        let err = ScrambleTable::from_le_bytes(&bytes).validate().unwrap_err();
        assert!(matches!(err, FixtureError::TableDuplicate { index: 5, value: 4 }));
    }

    #[test]
    fn validate_rejects_out_of_range() {
        let mut bytes = ScrambleTable::identity().to_le_bytes();
        // entry 0 := 1024
        bytes[0] = 0x00;
        bytes[1] = 0x04;
        let err = ScrambleTable::from_le_bytes(&bytes).validate().unwrap_err();
        assert!(matches!(
            err,
            FixtureError::TableValueOutOfRange { index: 0, value: 1024 }
        ));
    }
}
