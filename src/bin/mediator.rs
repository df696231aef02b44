//! Mediator Pattern demo.
//!
//! Run with: cargo run --bin mediator

fn main() -> anyhow::Result<()> {
    pattern_catalog::cli::run_standalone(&["mediator"])
}
