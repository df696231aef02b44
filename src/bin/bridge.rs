//! Bridge Pattern demo.
//!
//! Run with: cargo run --bin bridge

fn main() -> anyhow::Result<()> {
    pattern_catalog::cli::run_standalone(&["bridge"])
}
