use std::io;
use thiserror::Error;

use crate::creational::builder::BuildError;
use crate::creational::factory::FactoryError;

/// Errors surfaced by the catalog and its demos.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("i/o failure: {0}")]
    Io(#[from] io::Error),

    #[error("unknown demo '{name}'{}", did_you_mean(.suggestion))]
    UnknownDemo {
        name: String,
        suggestion: Option<String>,
    },

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Factory(#[from] FactoryError),

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to encode listing: {0}")]
    Json(#[from] serde_json::Error),
}

impl CatalogError {
    pub fn unknown_demo(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self::UnknownDemo {
            name: name.into(),
            suggestion,
        }
    }
}

fn did_you_mean(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean '{}'?)", s),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
