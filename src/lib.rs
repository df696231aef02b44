//! Design Patterns Catalog - Runnable Examples
//!
//! Classic object-oriented design patterns and SOLID principles, each as a
//! small self-contained demo that prints a fixed transcript.
//!
//! ## Creational Patterns
//! - Builder (consuming builder with validation)
//! - Factory (trait objects behind a string-keyed factory)
//! - Singleton (`OnceLock`)
//!
//! ## Structural Patterns
//! - Adapter, Bridge, Composite, Decorator, Facade, Flyweight, Proxy
//!
//! ## Behavioral Patterns
//! - Chain of Responsibility, Command, Iterator, Mediator, Memento,
//!   Observer, State, Strategy, Template Method
//!
//! ## SOLID Principles
//! - Single Responsibility (report, order, article, invoice, todo list, ...)
//! - Dependency Inversion (constructor injection)
//!
//! Run any demo with:
//! ```bash
//! cargo run --bin catalog -- run chain
//! cargo run --bin chain
//! ```
//!
//! Or list all demos:
//! ```bash
//! cargo run --bin catalog -- list
//! ```

pub mod behavioral;
pub mod cli;
pub mod config;
pub mod creational;
pub mod demo;
pub mod error;
pub mod logging;
pub mod registry;
pub mod solid;
pub mod structural;

pub use config::CatalogConfig;
pub use demo::{Category, Demo, DemoContext, DemoInfo};
pub use error::{CatalogError, Result};
