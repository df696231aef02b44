//! Singleton Pattern demos: app config, then the database handle.
//!
//! Run with: cargo run --bin singleton

fn main() -> anyhow::Result<()> {
    pattern_catalog::cli::run_standalone(&["singleton", "singleton-database"])
}
