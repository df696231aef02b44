//! Factory Pattern demos: animals, then vehicles.
//!
//! Run with: cargo run --bin factory

fn main() -> anyhow::Result<()> {
    pattern_catalog::cli::run_standalone(&["factory", "factory-vehicle"])
}
