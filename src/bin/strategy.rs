//! Strategy Pattern demo.
//!
//! Run with: cargo run --bin strategy

fn main() -> anyhow::Result<()> {
    pattern_catalog::cli::run_standalone(&["strategy"])
}
