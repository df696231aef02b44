//! Template Method demo.
//!
//! Run with: cargo run --bin template

fn main() -> anyhow::Result<()> {
    pattern_catalog::cli::run_standalone(&["template"])
}
