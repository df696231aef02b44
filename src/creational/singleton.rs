//! Singleton Pattern
//! One process-wide instance behind `OnceLock`, handed out by reference.
//!
//! Run with: cargo run --bin singleton

use std::io::{self, Write};
use std::sync::{OnceLock, PoisonError, RwLock};

use crate::demo::DemoContext;
use crate::error;

// ============================================================================
// Example: Mutable application config
// ============================================================================

pub struct AppConfig {
    env: RwLock<String>,
}

impl AppConfig {
    pub fn instance() -> &'static AppConfig {
        static INSTANCE: OnceLock<AppConfig> = OnceLock::new();
        INSTANCE.get_or_init(|| AppConfig {
            env: RwLock::new("dev".to_string()),
        })
    }

    pub fn env(&self) -> String {
        self.env
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set_env(&self, env: impl Into<String>) {
        *self.env.write().unwrap_or_else(PoisonError::into_inner) = env.into();
    }
}

pub fn run(ctx: &mut DemoContext<'_>) -> error::Result<()> {
    let c1 = AppConfig::instance();
    let c2 = AppConfig::instance();

    c1.set_env("prod");

    writeln!(ctx.out, "c1 env = {}", c1.env())?;
    writeln!(ctx.out, "c2 env = {}", c2.env())?;
    writeln!(ctx.out, "Same object? {}", std::ptr::eq(c1, c2))?;
    Ok(())
}

// ============================================================================
// Example: Database connection opened exactly once
// ============================================================================

static CONNECTION: OnceLock<DatabaseConnection> = OnceLock::new();

#[derive(Debug)]
pub struct DatabaseConnection {
    url: String,
}

impl DatabaseConnection {
    const URL: &'static str = "postgres://localhost/catalog";

    /// Connects on the first call in this process and reports it to `out`;
    /// later calls hand back the same connection silently.
    pub fn instance(out: &mut dyn Write) -> io::Result<&'static DatabaseConnection> {
        let mut connected_now = false;
        let connection = CONNECTION.get_or_init(|| {
            connected_now = true;
            DatabaseConnection {
                url: Self::URL.to_string(),
            }
        });

        if connected_now {
            writeln!(out, "Connecting to the Database...")?;
            tracing::info!(url = %connection.url, "database connection opened");
        }
        Ok(connection)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn execute_query(&self, query: &str, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Executing: {}", query)
    }
}

pub fn run_database(ctx: &mut DemoContext<'_>) -> error::Result<()> {
    let connection1 = DatabaseConnection::instance(ctx.out)?;
    connection1.execute_query("SELECT * FROM users", ctx.out)?;

    let connection2 = DatabaseConnection::instance(ctx.out)?;
    writeln!(ctx.out, "{}", std::ptr::eq(connection1, connection2))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::capture;

    #[test]
    fn test_app_config_is_shared() {
        let a = AppConfig::instance();
        let b = AppConfig::instance();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_app_config_transcript() {
        assert_eq!(
            capture(run, ".").unwrap(),
            "c1 env = prod\nc2 env = prod\nSame object? true\n"
        );
    }

    #[test]
    fn test_database_connects_at_most_once() {
        let mut first = Vec::new();
        let mut second = Vec::new();
        let a = DatabaseConnection::instance(&mut first).unwrap();
        let b = DatabaseConnection::instance(&mut second).unwrap();

        assert!(std::ptr::eq(a, b));
        // Another test may have connected first, so `first` may be empty.
        assert!(second.is_empty());
        assert_eq!(a.url(), "postgres://localhost/catalog");
    }

    #[test]
    fn test_database_transcript_tail() {
        let out = capture(run_database, ".").unwrap();
        assert!(out.ends_with("Executing: SELECT * FROM users\ntrue\n"));
        assert!(out.matches("Connecting to the Database...").count() <= 1);
    }
}
