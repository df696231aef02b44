//! Adapter Pattern demo.
//!
//! Run with: cargo run --bin adapter

fn main() -> anyhow::Result<()> {
    pattern_catalog::cli::run_standalone(&["adapter"])
}
