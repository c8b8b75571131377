use xmly_fixtures::fixture_params::SEED;
use xmly_fixtures::fixtures::FixtureSet;

fn main() {
    let set = FixtureSet::generate(SEED);

    let head: Vec<String> = set.table.entries()[..16]
        .iter()
        .map(|v| format!("{:4}", v))
        .collect();

    println!("seed        = {:#010x}", SEED);
    println!("table[..16] = {}", head.join(" "));
    println!("x2m (4)     = {}", hex::encode(set.short_key));
    println!("x3m (32)    = {}", hex::encode(set.long_key));
}
