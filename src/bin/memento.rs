//! Memento Pattern demo.
//!
//! Run with: cargo run --bin memento

fn main() -> anyhow::Result<()> {
    pattern_catalog::cli::run_standalone(&["memento"])
}
