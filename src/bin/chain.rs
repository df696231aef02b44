//! Chain of Responsibility demo.
//!
//! Run with: cargo run --bin chain

fn main() -> anyhow::Result<()> {
    pattern_catalog::cli::run_standalone(&["chain"])
}
