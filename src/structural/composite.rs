//! Composite Pattern
//! Files and folders share one `Node` trait, so a whole tree is handled
//! the same way as a single leaf.
//!
//! Run with: cargo run --bin composite

use std::io::{self, Write};

use crate::demo::DemoContext;
use crate::error;

pub trait Node {
    /// Size in KB.
    fn size(&self) -> u64;
    fn print(&self, indent: &str, out: &mut dyn Write) -> io::Result<()>;
}

// Leaf
pub struct FileNode {
    name: String,
    size: u64,
}

impl FileNode {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

impl Node for FileNode {
    fn size(&self) -> u64 {
        self.size
    }

    fn print(&self, indent: &str, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}- File: {} ({} KB)", indent, self.name, self.size)
    }
}

// Composite
pub struct FolderNode {
    name: String,
    children: Vec<Box<dyn Node>>,
}

impl FolderNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn add(&mut self, node: impl Node + 'static) -> &mut Self {
        self.children.push(Box::new(node));
        self
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Node for FolderNode {
    fn size(&self) -> u64 {
        self.children.iter().map(|child| child.size()).sum()
    }

    fn print(&self, indent: &str, out: &mut dyn Write) -> io::Result<()> {
        writeln!(
            out,
            "{}+ Folder: {} (total {} KB)",
            indent,
            self.name,
            self.size()
        )?;
        let child_indent = format!("{}  ", indent);
        for child in &self.children {
            child.print(&child_indent, out)?;
        }
        Ok(())
    }
}

pub fn run(ctx: &mut DemoContext<'_>) -> error::Result<()> {
    let mut docs = FolderNode::new("docs");
    docs.add(FileNode::new("resume.pdf", 120));

    let mut root = FolderNode::new("root");
    root.add(docs)
        .add(FileNode::new("photo.png", 350))
        .add(FileNode::new("notes.txt", 10));

    root.print("", ctx.out)?;
    writeln!(ctx.out, "\nRoot total size = {} KB", root.size())?;
    Ok(())
}
