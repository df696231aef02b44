//! Template Method Pattern
//! `run` fixes the order read -> process -> save; implementors only fill in
//! the processing step.
//!
//! Run with: cargo run --bin template

use std::io::{self, Write};

use crate::demo::DemoContext;
use crate::error;

pub trait DataProcessor {
    /// Template method. Implementors should not override it.
    fn run(&self, out: &mut dyn Write) -> io::Result<String> {
        let data = self.read(out)?;
        let result = self.process(&data, out)?;
        self.save(&result, out)?;
        Ok(result)
    }

    fn read(&self, out: &mut dyn Write) -> io::Result<String> {
        writeln!(out, "Reading data...")?;
        Ok("hello world".to_string())
    }

    fn process(&self, data: &str, out: &mut dyn Write) -> io::Result<String>;

    fn save(&self, result: &str, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Saving result: {}", result)
    }
}

pub struct UppercaseProcessor;

impl DataProcessor for UppercaseProcessor {
    fn process(&self, data: &str, out: &mut dyn Write) -> io::Result<String> {
        writeln!(out, "Processing: convert to UPPERCASE")?;
        Ok(data.to_uppercase())
    }
}

pub struct ReverseProcessor;

impl DataProcessor for ReverseProcessor {
    fn process(&self, data: &str, out: &mut dyn Write) -> io::Result<String> {
        writeln!(out, "Processing: REVERSE string")?;
        Ok(data.chars().rev().collect())
    }
}

pub fn run(ctx: &mut DemoContext<'_>) -> error::Result<()> {
    UppercaseProcessor.run(ctx.out)?;
    writeln!(ctx.out)?;
    ReverseProcessor.run(ctx.out)?;
    Ok(())
}
