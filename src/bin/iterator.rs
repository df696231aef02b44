//! Iterator Pattern demo.
//!
//! Run with: cargo run --bin iterator

fn main() -> anyhow::Result<()> {
    pattern_catalog::cli::run_standalone(&["iterator"])
}
