//! State Pattern demo.
//!
//! Run with: cargo run --bin state

fn main() -> anyhow::Result<()> {
    pattern_catalog::cli::run_standalone(&["state"])
}
