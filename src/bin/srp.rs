//! Single Responsibility Principle examples.
//!
//! Run with: cargo run --bin srp

fn main() -> anyhow::Result<()> {
    pattern_catalog::cli::run_standalone(&[
        "srp-user-printer",
        "srp-report",
        "srp-order",
        "srp-article",
        "srp-invoice",
        "srp-todo",
        "srp-registration",
    ])
}
