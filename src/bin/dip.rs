//! Dependency Inversion Principle examples.
//!
//! Run with: cargo run --bin dip

fn main() -> anyhow::Result<()> {
    pattern_catalog::cli::run_standalone(&[
        "dip-greeter",
        "dip-lamp",
        "dip-user-service",
        "dip-alert",
    ])
}
