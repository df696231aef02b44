//! Facade Pattern demo.
//!
//! Run with: cargo run --bin facade

fn main() -> anyhow::Result<()> {
    pattern_catalog::cli::run_standalone(&["facade"])
}
