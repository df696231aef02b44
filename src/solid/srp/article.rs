//! Article publishing: five types, five reasons to change (rules, file
//! format, notification channel, log format, and the data itself).

use chrono::{DateTime, SecondsFormat, Utc};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::{require_text, write_scratch, ValidationError};
use crate::demo::DemoContext;
use crate::error;

#[derive(Debug, Clone)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author_id: String,
}

impl Article {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        author_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            author_id: author_id.into(),
        }
    }
}

pub struct ArticleValidator;

impl ArticleValidator {
    pub fn validate(&self, article: &Article) -> Result<(), ValidationError> {
        require_text("title", &article.title)?;
        require_text("content", &article.content)?;
        require_text("author id", &article.author_id)
    }
}

pub struct ArticleStorage;

impl ArticleStorage {
    pub fn save(&self, article: &Article, dir: &Path, out: &mut dyn Write) -> io::Result<PathBuf> {
        let path = dir.join(format!("article_{}.txt", article.id));
        let line = format!(
            "Article {} | Content {} | Author {}",
            article.title, article.content, article.author_id
        );
        let written = write_scratch(&path, &line)?;
        writeln!(out, "Article saved to: {}", written.display())?;
        Ok(written)
    }
}

pub struct ArticleNotifier;

impl ArticleNotifier {
    pub fn send_confirmation(&self, article: &Article, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "--- Confirmation (simulated) ---")?;
        writeln!(out, "To author: {}", article.author_id)?;
        writeln!(
            out,
            "Article {} by author {} has been published.",
            article.title, article.author_id
        )?;
        writeln!(out, "--- Sent ---")
    }
}

pub struct ArticleLogger;

impl ArticleLogger {
    /// `at` is passed in so the line is reproducible in tests.
    pub fn log_publish(
        &self,
        article: &Article,
        at: DateTime<Utc>,
        out: &mut dyn Write,
    ) -> io::Result<()> {
        writeln!(
            out,
            "LOG: Published at {} — Article {} by {}",
            at.to_rfc3339_opts(SecondsFormat::Millis, true),
            article.id,
            article.author_id
        )
    }
}

pub fn run(ctx: &mut DemoContext<'_>) -> error::Result<()> {
    let article = Article::new("art-1", "Hello World", "This is the content.", "author-42");

    if let Err(err) = ArticleValidator.validate(&article) {
        tracing::info!(%err, article = %article.id, "article rejected");
        writeln!(ctx.out, "Article validation failed.")?;
        return Ok(());
    }
    writeln!(ctx.out, "Article validated.")?;

    ArticleStorage.save(&article, &ctx.scratch_dir, ctx.out)?;
    ArticleNotifier.send_confirmation(&article, ctx.out)?;
    ArticleLogger.log_publish(&article, Utc::now(), ctx.out)?;
    Ok(())
}
