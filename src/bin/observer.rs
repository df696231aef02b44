//! Observer Pattern demo.
//!
//! Run with: cargo run --bin observer

fn main() -> anyhow::Result<()> {
    pattern_catalog::cli::run_standalone(&["observer"])
}
