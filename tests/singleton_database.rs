//! Kept in its own test binary: the database singleton connects once per
//! process, so nothing else here may touch it first.

use anyhow::Result;
use pattern_catalog::creational::singleton::run_database;
use pattern_catalog::demo::capture;

/// The first lookup in a process connects; the second reuses the same connection
#[test]
fn test_first_lookup_connects() -> Result<()> {
    let transcript = capture(run_database, ".")?;
    assert_eq!(
        transcript,
        "Connecting to the Database...\n\
         Executing: SELECT * FROM users\n\
         true\n"
    );
    Ok(())
}
