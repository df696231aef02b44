//! Command-line front end shared by the `catalog` binary and the
//! per-pattern binaries.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::CatalogConfig;
use crate::demo::{Category, Demo, DemoContext, DemoInfo};
use crate::error::Result;
use crate::{logging, registry};

#[derive(Debug, Parser)]
#[command(name = "catalog")]
#[command(about = "Runnable design pattern and SOLID principle demos")]
pub struct Cli {
    /// Debug-level diagnostics on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// TOML config file (falls back to $PATTERN_CATALOG_CONFIG)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Plain headings in `list`
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Where the SRP demos write their files
    #[arg(long, global = true)]
    pub scratch_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List available demos
    List {
        #[arg(long, value_enum, default_value_t = ListFormat::Text)]
        format: ListFormat,

        /// Only show one category
        #[arg(long, value_enum)]
        category: Option<Category>,
    },
    /// Run one demo by name, or every demo with --all
    Run {
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        name: Option<String>,

        #[arg(long)]
        all: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    Text,
    Json,
}

impl Cli {
    /// File settings first, then flags on top.
    pub fn resolve_config(&self) -> Result<CatalogConfig> {
        let mut config = CatalogConfig::load(self.config.as_deref())?;
        if self.verbose {
            config.verbose = true;
        }
        if self.no_color {
            config.color = false;
        }
        if let Some(dir) = &self.scratch_dir {
            config.scratch_dir = dir.clone();
        }
        Ok(config)
    }
}

pub fn dispatch(command: &Command, config: &CatalogConfig, out: &mut dyn Write) -> Result<()> {
    match command {
        Command::List { format, category } => {
            render_list(*format, *category, config.color, out)?;
        }
        Command::Run { name, all } => {
            let mut ctx = DemoContext::new(out, config.scratch_dir.clone());
            match name {
                Some(name) if !*all => registry::find(name)?.execute(&mut ctx)?,
                _ => registry::run_all(&mut ctx)?,
            }
        }
    }
    Ok(())
}

pub fn render_list(
    format: ListFormat,
    category: Option<Category>,
    color: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let categories: Vec<Category> = match category {
        Some(c) => vec![c],
        None => Category::ALL.to_vec(),
    };

    match format {
        ListFormat::Json => {
            let infos: Vec<DemoInfo> = categories
                .iter()
                .flat_map(|c| registry::by_category(*c))
                .map(Demo::info)
                .collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&infos)?)?;
        }
        ListFormat::Text => {
            for (index, c) in categories.iter().enumerate() {
                if index > 0 {
                    writeln!(out)?;
                }
                if color {
                    writeln!(out, "{}", c.title().bold().cyan())?;
                } else {
                    writeln!(out, "{}", c.title())?;
                }
                for demo in registry::by_category(*c) {
                    writeln!(out, "  {:<20} {}", demo.name, demo.summary)?;
                }
            }
        }
    }
    Ok(())
}

/// Entry point of the `catalog` binary.
pub fn main_entry() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli
        .resolve_config()
        .context("failed to load catalog configuration")?;

    logging::init(config.verbose);
    colored::control::set_override(config.color);
    tracing::debug!(?config, "configuration resolved");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    dispatch(&cli.command, &config, &mut out)?;
    Ok(())
}

/// Entry point of the per-pattern binaries. A single demo runs bare;
/// several run under banners like `catalog run --all`.
pub fn run_standalone(names: &[&str]) -> anyhow::Result<()> {
    let config = CatalogConfig::load(None).context("failed to load catalog configuration")?;
    logging::init(config.verbose);

    let demos = names
        .iter()
        .map(|name| registry::find(name))
        .collect::<Result<Vec<&Demo>>>()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut ctx = DemoContext::new(&mut out, config.scratch_dir.clone());
    match demos.as_slice() {
        [single] => single.execute(&mut ctx)?,
        many => registry::run_sequence(many, &mut ctx)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(format: ListFormat, category: Option<Category>) -> String {
        let mut buf = Vec::new();
        render_list(format, category, false, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_parse_run_by_name() {
        let cli = Cli::try_parse_from(["catalog", "run", "chain"]).unwrap();
        match cli.command {
            Command::Run { name, all } => {
                assert_eq!(name.as_deref(), Some("chain"));
                assert!(!all);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_run_requires_name_or_all() {
        assert!(Cli::try_parse_from(["catalog", "run"]).is_err());
        assert!(Cli::try_parse_from(["catalog", "run", "--all"]).is_ok());
        assert!(Cli::try_parse_from(["catalog", "run", "chain", "--all"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["catalog", "list", "--no-color", "-v"]).unwrap();
        assert!(cli.no_color);
        assert!(cli.verbose);
    }

    #[test]
    fn test_parse_list_options() {
        let cli = Cli::try_parse_from([
            "catalog",
            "list",
            "--format",
            "json",
            "--category",
            "behavioral",
        ])
        .unwrap();
        match cli.command {
            Command::List { format, category } => {
                assert_eq!(format, ListFormat::Json);
                assert_eq!(category, Some(Category::Behavioral));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "color = true\nscratch_dir = \"from-file\"").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = Cli::try_parse_from([
            "catalog",
            "--config",
            path.as_str(),
            "--no-color",
            "--scratch-dir",
            "from-flag",
            "list",
        ])
        .unwrap();
        let config = cli.resolve_config().unwrap();
        assert!(!config.color);
        assert_eq!(config.scratch_dir, PathBuf::from("from-flag"));
    }

    #[test]
    fn test_text_listing_for_one_category() {
        let text = render(ListFormat::Text, Some(Category::Creational));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Creational Patterns");
        assert_eq!(lines.len(), 6);
        assert!(lines[1].starts_with("  builder              "));
    }

    #[test]
    fn test_text_listing_separates_categories() {
        let text = render(ListFormat::Text, None);
        assert!(text.contains("\n\nStructural Patterns\n"));
        assert!(text.contains("\n\nSOLID Principles\n"));
    }

    #[test]
    fn test_json_listing() {
        let json = render(ListFormat::Json, Some(Category::Structural));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 7);
        assert_eq!(entries[0]["name"], "adapter");
        assert_eq!(entries[0]["category"], "structural");
    }

    #[test]
    fn test_dispatch_unknown_demo() {
        let config = CatalogConfig::default();
        let command = Command::Run {
            name: Some("singelton".into()),
            all: false,
        };
        let err = dispatch(&command, &config, &mut Vec::<u8>::new()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown demo 'singelton' (did you mean 'singleton'?)"
        );
    }
}
