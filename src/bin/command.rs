//! Command Pattern demo.
//!
//! Run with: cargo run --bin command

fn main() -> anyhow::Result<()> {
    pattern_catalog::cli::run_standalone(&["command"])
}
