//! Builder Pattern demo.
//!
//! Run with: cargo run --bin builder

fn main() -> anyhow::Result<()> {
    pattern_catalog::cli::run_standalone(&["builder"])
}
