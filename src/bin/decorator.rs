//! Decorator Pattern demo.
//!
//! Run with: cargo run --bin decorator

fn main() -> anyhow::Result<()> {
    pattern_catalog::cli::run_standalone(&["decorator"])
}
