// Fixed parameters of the XMLY test fixtures.
// Changing any of these invalidates the fixtures already shipped in sample/.

/// Seed fed to the Python-compatible Mersenne Twister.
pub const SEED: u32 = 0x1234_5678;

pub const TABLE_LEN: usize = 1024;
pub const TABLE_BYTES: usize = TABLE_LEN * 2; // u16 little-endian, no header

pub const SHORT_KEY_BYTES: usize = 4; // x2m
pub const LONG_KEY_BYTES: usize = 32; // x3m

pub const SCRAMBLE_TABLE_FILE: &str = "test_xmly_scramble_table.bin";
pub const SHORT_KEY_FILE: &str = "test_x2m_key.bin";
pub const LONG_KEY_FILE: &str = "test_x3m_key.bin";

/// Fixtures land in the working directory.
pub const OUTPUT_DIR: &str = ".";
