// The three XMLY fixtures, drawn from one generator in a fixed order:
// table shuffle, then the x2m key, then the x3m key.

use std::path::Path;

use tracing::{debug, trace};

use crate::error::FixtureError;
use crate::fixture_io::{read_fixture, write_fixture};
use crate::fixture_params::{
    LONG_KEY_BYTES, LONG_KEY_FILE, SCRAMBLE_TABLE_FILE, SHORT_KEY_BYTES, SHORT_KEY_FILE,
    TABLE_BYTES,
};
use crate::py_random::PyRandom;
use crate::scramble_table::ScrambleTable;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixtureSet {
    pub table: ScrambleTable,
    pub short_key: [u8; SHORT_KEY_BYTES],
    pub long_key: [u8; LONG_KEY_BYTES],
}

impl FixtureSet {
    pub fn generate(seed: u32) -> Self {
        let mut rng = PyRandom::seed_u32(seed);

        let table = ScrambleTable::shuffled(&mut rng);

        let mut short_key = [0u8; SHORT_KEY_BYTES];
        rng.fill_bytes(&mut short_key);

        let mut long_key = [0u8; LONG_KEY_BYTES];
        rng.fill_bytes(&mut long_key);

        debug!(seed = %format!("{:#010x}", seed), "fixtures generated");
        trace!(
            short_key = %hex::encode(short_key),
            long_key = %hex::encode(long_key),
            "key material"
        );

        Self { table, short_key, long_key }
    }

    /// File name and serialized content, in write order.
    pub fn files(&self) -> [(&'static str, Vec<u8>); 3] {
        [
            (SCRAMBLE_TABLE_FILE, self.table.to_le_bytes().to_vec()),
            (SHORT_KEY_FILE, self.short_key.to_vec()),
            (LONG_KEY_FILE, self.long_key.to_vec()),
        ]
    }

    /// Write all three files into `dir`. Stops at the first failure; files
    /// already written stay on disk.
    pub fn write_to(&self, dir: &Path) -> Result<(), FixtureError> {
        for (name, bytes) in self.files() {
            write_fixture(&dir.join(name), &bytes)?;
        }
        Ok(())
    }

    /// Load the three files from `dir`, checking sizes and the permutation.
    pub fn read_from(dir: &Path) -> Result<Self, FixtureError> {
        let table_bytes = read_fixture(&dir.join(SCRAMBLE_TABLE_FILE), TABLE_BYTES)?;
        let short = read_fixture(&dir.join(SHORT_KEY_FILE), SHORT_KEY_BYTES)?;
        let long = read_fixture(&dir.join(LONG_KEY_FILE), LONG_KEY_BYTES)?;

        let mut table_arr = [0u8; TABLE_BYTES];
        table_arr.copy_from_slice(&table_bytes);
        let table = ScrambleTable::from_le_bytes(&table_arr);
        table.validate()?;

        let mut short_key = [0u8; SHORT_KEY_BYTES];
        short_key.copy_from_slice(&short);
        let mut long_key = [0u8; LONG_KEY_BYTES];
        long_key.copy_from_slice(&long);

        Ok(Self { table, short_key, long_key })
    }
}
