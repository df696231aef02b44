//! Composite Pattern demo.
//!
//! Run with: cargo run --bin composite

fn main() -> anyhow::Result<()> {
    pattern_catalog::cli::run_standalone(&["composite"])
}
