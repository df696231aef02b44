use serde::Serialize;
use std::fmt;
use std::io::Write;
use std::path::PathBuf;

use crate::error::Result;

/// Which family a demo belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Creational,
    Structural,
    Behavioral,
    Solid,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Creational,
        Category::Structural,
        Category::Behavioral,
        Category::Solid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Creational => "creational",
            Category::Structural => "structural",
            Category::Behavioral => "behavioral",
            Category::Solid => "solid",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Category::Creational => "Creational Patterns",
            Category::Structural => "Structural Patterns",
            Category::Behavioral => "Behavioral Patterns",
            Category::Solid => "SOLID Principles",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a demo writes its transcript and scratch files.
pub struct DemoContext<'a> {
    pub out: &'a mut dyn Write,
    pub scratch_dir: PathBuf,
}

impl<'a> DemoContext<'a> {
    pub fn new(out: &'a mut dyn Write, scratch_dir: impl Into<PathBuf>) -> Self {
        Self {
            out,
            scratch_dir: scratch_dir.into(),
        }
    }

    pub fn scratch_path(&self, file_name: &str) -> PathBuf {
        self.scratch_dir.join(file_name)
    }
}

pub type RunFn = fn(&mut DemoContext<'_>) -> Result<()>;

/// A registered, runnable demo.
#[derive(Clone, Copy)]
pub struct Demo {
    pub name: &'static str,
    pub category: Category,
    pub summary: &'static str,
    pub run: RunFn,
}

impl Demo {
    pub fn info(&self) -> DemoInfo {
        DemoInfo {
            name: self.name,
            category: self.category,
            summary: self.summary,
        }
    }

    pub fn execute(&self, ctx: &mut DemoContext<'_>) -> Result<()> {
        tracing::debug!(demo = self.name, category = %self.category, "running demo");
        (self.run)(ctx)?;
        ctx.out.flush()?;
        tracing::debug!(demo = self.name, "demo finished");
        Ok(())
    }
}

impl fmt::Debug for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Demo")
            .field("name", &self.name)
            .field("category", &self.category)
            .field("summary", &self.summary)
            .finish_non_exhaustive()
    }
}

/// Serializable listing entry for `catalog list --format json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoInfo {
    pub name: &'static str,
    pub category: Category,
    pub summary: &'static str,
}

/// Runs a demo against an in-memory buffer and returns what it printed.
pub fn capture(run: RunFn, scratch_dir: impl Into<PathBuf>) -> Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    {
        let mut ctx = DemoContext::new(&mut buf, scratch_dir);
        run(&mut ctx)?;
    }
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
