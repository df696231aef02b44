//! Adapter Pattern
//! Wrap a legacy type so it satisfies the trait the client expects.
//!
//! Run with: cargo run --bin adapter

use std::io::{self, Write};

use crate::demo::DemoContext;
use crate::error;

// Target interface the client code expects
pub trait Logger {
    fn log(&self, message: &str, out: &mut dyn Write) -> io::Result<()>;
}

/// Client that only knows about `Logger`.
pub struct App<L: Logger> {
    logger: L,
}

impl<L: Logger> App<L> {
    pub fn new(logger: L) -> Self {
        Self { logger }
    }

    pub fn run(&self, out: &mut dyn Write) -> io::Result<()> {
        self.logger.log("App started", out)?;
        self.logger.log("Doing work...", out)?;
        self.logger.log("App finished", out)
    }
}

// Existing third-party type with a different interface; we cannot change it.
pub struct LegacyFileLogger;

impl LegacyFileLogger {
    pub fn write_to_file(&self, text: &str, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "LEGACY FILE LOGGER: {}", text)
    }
}

pub struct LegacyFileLoggerAdapter {
    legacy: LegacyFileLogger,
}

impl LegacyFileLoggerAdapter {
    pub fn new(legacy: LegacyFileLogger) -> Self {
        Self { legacy }
    }
}

impl Logger for LegacyFileLoggerAdapter {
    fn log(&self, message: &str, out: &mut dyn Write) -> io::Result<()> {
        self.legacy.write_to_file(&format!("[LOG] {}", message), out)
    }
}

pub fn run(ctx: &mut DemoContext<'_>) -> error::Result<()> {
    let logger = LegacyFileLoggerAdapter::new(LegacyFileLogger);
    let app = App::new(logger);
    app.run(ctx.out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::capture;
    use std::cell::RefCell;

    struct RecordingLogger {
        messages: RefCell<Vec<String>>,
    }

    impl Logger for RecordingLogger {
        fn log(&self, message: &str, _out: &mut dyn Write) -> io::Result<()> {
            self.messages.borrow_mut().push(message.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_app_works_with_any_logger() {
        let app = App::new(RecordingLogger {
            messages: RefCell::new(Vec::new()),
        });
        app.run(&mut io::sink()).unwrap();
        assert_eq!(
            *app.logger.messages.borrow(),
            vec!["App started", "Doing work...", "App finished"]
        );
    }

    #[test]
    fn test_adapter_prefixes_messages() {
        let adapter = LegacyFileLoggerAdapter::new(LegacyFileLogger);
        let mut buf = Vec::new();
        adapter.log("hi", &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "LEGACY FILE LOGGER: [LOG] hi\n");
    }

    #[test]
    fn test_transcript() {
        assert_eq!(
            capture(run, ".").unwrap(),
            "LEGACY FILE LOGGER: [LOG] App started\n\
             LEGACY FILE LOGGER: [LOG] Doing work...\n\
             LEGACY FILE LOGGER: [LOG] App finished\n"
        );
    }
}
