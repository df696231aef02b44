//! Proxy Pattern
//! A cheap stand-in that loads the real image only when first displayed.
//!
//! Run with: cargo run --bin proxy

use std::io::{self, Write};

use crate::demo::DemoContext;
use crate::error;

pub trait Image {
    fn display(&mut self, out: &mut dyn Write) -> io::Result<()>;
}

/// The heavy object.
pub struct RealImage {
    filename: String,
}

impl RealImage {
    pub fn load(filename: impl Into<String>, out: &mut dyn Write) -> io::Result<Self> {
        let filename = filename.into();
        writeln!(out, "Loading image from disk: {} (heavy)", filename)?;
        Ok(Self { filename })
    }
}

impl Image for RealImage {
    fn display(&mut self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Displaying image: {}", self.filename)
    }
}

pub struct ImageProxy {
    filename: String,
    real: Option<RealImage>,
}

impl ImageProxy {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            real: None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.real.is_some()
    }
}

impl Image for ImageProxy {
    fn display(&mut self, out: &mut dyn Write) -> io::Result<()> {
        if self.real.is_none() {
            self.real = Some(RealImage::load(self.filename.clone(), out)?);
        }
        match self.real.as_mut() {
            Some(real) => real.display(out),
            None => Ok(()),
        }
    }
}

pub fn run(ctx: &mut DemoContext<'_>) -> error::Result<()> {
    let mut image = ImageProxy::new("cat.png");
    writeln!(ctx.out, "Proxy created. Nothing loaded yet.\n")?;

    // First display triggers the real load
    image.display(ctx.out)?;

    writeln!(ctx.out)?;

    image.display(ctx.out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::capture;

    #[test]
    fn test_proxy_is_lazy() {
        let mut proxy = ImageProxy::new("dog.png");
        assert!(!proxy.is_loaded());
        proxy.display(&mut io::sink()).unwrap();
        assert!(proxy.is_loaded());
    }

    #[test]
    fn test_loads_only_once() {
        let mut proxy = ImageProxy::new("dog.png");
        let mut buf = Vec::new();
        proxy.display(&mut buf).unwrap();
        proxy.display(&mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert_eq!(out.matches("Loading image").count(), 1);
        assert_eq!(out.matches("Displaying image: dog.png").count(), 2);
    }

    #[test]
    fn test_transcript() {
        assert_eq!(
            capture(run, ".").unwrap(),
            "Proxy created. Nothing loaded yet.\n\
             \n\
             Loading image from disk: cat.png (heavy)\n\
             Displaying image: cat.png\n\
             \n\
             Displaying image: cat.png\n"
        );
    }
}
