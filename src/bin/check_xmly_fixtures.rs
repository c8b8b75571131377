// Checks the fixtures in the working directory against a fresh generation.

use std::path::Path;

use anyhow::{bail, Context};
use tracing::info;

use xmly_fixtures::fixture_params::{OUTPUT_DIR, SEED};
use xmly_fixtures::fixtures::FixtureSet;
use xmly_fixtures::logging::init_logging;

fn main() -> anyhow::Result<()> {
    init_logging("warn");

    let dir = Path::new(OUTPUT_DIR);
    let on_disk = FixtureSet::read_from(dir).context("fixtures on disk are unusable")?;
    info!("sizes and permutation OK");

    let expected = FixtureSet::generate(SEED);

    if on_disk.table != expected.table {
        bail!("scramble table differs from generator output");
    }
    info!("scramble table matches");

    if on_disk.short_key != expected.short_key {
        bail!(
            "x2m key mismatch: file {} generator {}",
            hex::encode(on_disk.short_key),
            hex::encode(expected.short_key)
        );
    }
    info!("x2m key matches");

    if on_disk.long_key != expected.long_key {
        bail!(
            "x3m key mismatch: file {} generator {}",
            hex::encode(on_disk.long_key),
            hex::encode(expected.long_key)
        );
    }
    info!("x3m key matches");

    println!("Fixture check OK (seed {:#010x})", SEED);
    Ok(())
}
