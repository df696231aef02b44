//! Proxy Pattern demo.
//!
//! Run with: cargo run --bin proxy

fn main() -> anyhow::Result<()> {
    pattern_catalog::cli::run_standalone(&["proxy"])
}
