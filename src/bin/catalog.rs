//! Catalog runner: list demos or run them by name.
//!
//! Run with:
//! ```bash
//! cargo run --bin catalog -- list
//! cargo run --bin catalog -- run observer
//! cargo run --bin catalog -- run --all --scratch-dir target/scratch
//! ```

fn main() -> anyhow::Result<()> {
    pattern_catalog::cli::main_entry()
}
