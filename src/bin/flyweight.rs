//! Flyweight Pattern demo.
//!
//! Run with: cargo run --bin flyweight

fn main() -> anyhow::Result<()> {
    pattern_catalog::cli::run_standalone(&["flyweight"])
}
