//! Report: data, validation, file output and email are four types.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::{require_max_len, require_text, write_scratch, ValidationError, MAX_TITLE_LEN};
use crate::demo::DemoContext;
use crate::error;

pub const REPORT_FILE: &str = "report.txt";

#[derive(Debug, Clone)]
pub struct Report {
    title: String,
    content: String,
}

impl Report {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

pub struct ReportValidator;

impl ReportValidator {
    pub fn validate(&self, report: &Report) -> Result<(), ValidationError> {
        require_text("title", report.title())?;
        require_text("content", report.content())?;
        require_max_len("title", report.title(), MAX_TITLE_LEN)
    }
}

pub struct ReportFileWriter;

impl ReportFileWriter {
    pub fn write_to_file(
        &self,
        report: &Report,
        path: &Path,
        out: &mut dyn Write,
    ) -> io::Result<PathBuf> {
        let body = format!("{}\n---\n{}", report.title(), report.content());
        let written = write_scratch(path, &body)?;
        writeln!(out, "Report written to: {}", written.display())?;
        Ok(written)
    }
}

pub struct ReportEmailSender;

impl ReportEmailSender {
    pub fn send(&self, report: &Report, to: &str, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "--- Email (simulated) ---")?;
        writeln!(out, "To: {}", to)?;
        writeln!(out, "Subject: {}", report.title())?;
        writeln!(out, "Body: {}", report.content())?;
        writeln!(out, "--- Sent ---")
    }
}

pub fn run(ctx: &mut DemoContext<'_>) -> error::Result<()> {
    let report = Report::new("Monthly Sales", "Sales are up 10% this month.");

    if let Err(err) = ReportValidator.validate(&report) {
        tracing::info!(%err, "report rejected");
        writeln!(ctx.out, "Report validation failed.")?;
        return Ok(());
    }
    writeln!(ctx.out, "Report validated.")?;

    let path = ctx.scratch_path(REPORT_FILE);
    ReportFileWriter.write_to_file(&report, &path, ctx.out)?;

    ReportEmailSender.send(&report, "manager@company.com", ctx.out)?;
    Ok(())
}
