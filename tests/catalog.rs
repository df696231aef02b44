use anyhow::Result;
use pattern_catalog::cli::{dispatch, Command, ListFormat};
use pattern_catalog::{registry, CatalogConfig, CatalogError, Category, DemoContext};
use tempfile::TempDir;

fn config_in(dir: &TempDir) -> CatalogConfig {
    CatalogConfig {
        scratch_dir: dir.path().to_path_buf(),
        color: false,
        verbose: false,
    }
}

/// `run <name>` prints the bare transcript with no banner
#[test]
fn test_run_single_demo_without_banner() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let command = Command::Run {
        name: Some("Strategy".to_string()),
        all: false,
    };

    let mut out = Vec::new();
    dispatch(&command, &config_in(&temp_dir), &mut out)?;

    assert_eq!(
        String::from_utf8(out)?,
        "Paid $100 using CASH\n\
         Paid $250 using CREDIT CARD (**** 1234)\n\
         Paid $75 using PAYPAL (mohit@example.com)\n"
    );
    Ok(())
}

/// `run --all` covers every registered demo and writes the SRP files into the scratch dir
#[test]
fn test_run_all_uses_scratch_dir() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let command = Command::Run {
        name: None,
        all: true,
    };

    let mut out = Vec::new();
    dispatch(&command, &config_in(&temp_dir), &mut out)?;
    let transcript = String::from_utf8(out)?;

    assert!(transcript.starts_with("==== builder ====\n"));
    assert!(transcript.ends_with("[EMAIL] Hello via email\n[SMS] Hello via SMS\n"));
    let banners = transcript.lines().filter(|l| l.starts_with("==== ")).count();
    assert_eq!(banners, registry::all().len());

    for file in ["report.txt", "order_ORD-001.txt", "article_art-1.txt", "todolist.txt"] {
        assert!(temp_dir.path().join(file).is_file(), "missing {}", file);
    }
    Ok(())
}

/// Unknown names fail with a suggestion when one is close
#[test]
fn test_unknown_demo_reports_suggestion() {
    let err = registry::find("obsrever").unwrap_err();
    assert!(matches!(
        &err,
        CatalogError::UnknownDemo { suggestion: Some(s), .. } if s == "observer"
    ));
    assert_eq!(
        err.to_string(),
        "unknown demo 'obsrever' (did you mean 'observer'?)"
    );
}

/// JSON listing contains every demo with its category
#[test]
fn test_json_listing_covers_registry() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let command = Command::List {
        format: ListFormat::Json,
        category: None,
    };

    let mut out = Vec::new();
    dispatch(&command, &config_in(&temp_dir), &mut out)?;
    let value: serde_json::Value = serde_json::from_slice(&out)?;
    let entries = value.as_array().expect("listing is an array");

    assert_eq!(entries.len(), registry::all().len());
    let solid = entries.iter().filter(|e| e["category"] == "solid").count();
    assert_eq!(solid, registry::by_category(Category::Solid).count());
    Ok(())
}

/// Each demo can be executed on its own through a context
#[test]
fn test_every_demo_executes_individually() -> Result<()> {
    let temp_dir = TempDir::new()?;
    for demo in registry::all() {
        let mut out = Vec::new();
        {
            let mut ctx = DemoContext::new(&mut out, temp_dir.path());
            demo.execute(&mut ctx)?;
        }
        // The database singleton only announces its connection once per process.
        if demo.name != "singleton-database" {
            assert!(!out.is_empty(), "{} printed nothing", demo.name);
        }
    }
    Ok(())
}
