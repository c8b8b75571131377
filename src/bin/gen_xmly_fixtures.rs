// Writes the XMLY test fixtures into the working directory:
//   test_xmly_scramble_table.bin, test_x2m_key.bin, test_x3m_key.bin
// Silent on success.

use std::path::Path;

use xmly_fixtures::fixture_params::{OUTPUT_DIR, SEED};
use xmly_fixtures::fixtures::FixtureSet;
use xmly_fixtures::logging::init_logging;

fn main() -> anyhow::Result<()> {
    init_logging("warn");

    let fixtures = FixtureSet::generate(SEED);
    fixtures.write_to(Path::new(OUTPUT_DIR))?;

    Ok(())
}
