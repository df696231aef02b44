//! Flyweight Pattern
//! Trees share their intrinsic data (name, color) through a cache; only the
//! position is stored per tree.
//!
//! Run with: cargo run --bin flyweight

use std::collections::HashMap;
use std::io::{self, Write};
use std::rc::Rc;

use crate::demo::DemoContext;
use crate::error;

/// Shared, intrinsic state.
#[derive(Debug, PartialEq, Eq)]
pub struct TreeType {
    name: String,
    color: String,
}

impl TreeType {
    fn new(name: &str, color: &str) -> Self {
        Self {
            name: name.to_string(),
            color: color.to_string(),
        }
    }

    /// `x` and `y` are extrinsic: passed in on every draw.
    pub fn draw(&self, x: i32, y: i32, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Draw {} ({}) at ({},{})", self.name, self.color, x, y)
    }
}

/// Get-or-create cache keyed by `name|color`.
#[derive(Debug, Default)]
pub struct TreeFactory {
    cache: HashMap<String, Rc<TreeType>>,
}

impl TreeFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tree_type(&mut self, name: &str, color: &str, out: &mut dyn Write) -> io::Result<Rc<TreeType>> {
        let key = format!("{}|{}", name, color);

        if let Some(existing) = self.cache.get(&key) {
            tracing::trace!(%key, "tree type cache hit");
            return Ok(Rc::clone(existing));
        }

        let tree_type = Rc::new(TreeType::new(name, color));
        writeln!(out, "Created new TreeType: {}", key)?;
        self.cache.insert(key, Rc::clone(&tree_type));
        Ok(tree_type)
    }

    pub fn cached_types(&self) -> usize {
        self.cache.len()
    }
}

/// Context: extrinsic position plus a shared flyweight.
pub struct Tree {
    x: i32,
    y: i32,
    kind: Rc<TreeType>,
}

impl Tree {
    pub fn new(x: i32, y: i32, kind: Rc<TreeType>) -> Self {
        Self { x, y, kind }
    }

    pub fn draw(&self, out: &mut dyn Write) -> io::Result<()> {
        self.kind.draw(self.x, self.y, out)
    }
}

pub fn run(ctx: &mut DemoContext<'_>) -> error::Result<()> {
    let mut factory = TreeFactory::new();

    let trees = [
        Tree::new(10, 20, factory.tree_type("Oak", "Green", ctx.out)?),
        Tree::new(11, 21, factory.tree_type("Oak", "Green", ctx.out)?),
        Tree::new(50, 60, factory.tree_type("Pine", "DarkGreen", ctx.out)?),
        Tree::new(70, 80, factory.tree_type("Oak", "Green", ctx.out)?),
    ];

    writeln!(ctx.out, "\nCached TreeTypes = {}\n", factory.cached_types())?;

    for tree in &trees {
        tree.draw(ctx.out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::capture;

    #[test]
    fn test_same_key_shares_instance() {
        let mut factory = TreeFactory::new();
        let mut sink = io::sink();
        let a = factory.tree_type("Oak", "Green", &mut sink).unwrap();
        let b = factory.tree_type("Oak", "Green", &mut sink).unwrap();
        assert!(Rc::ptr_eq(&a, &b));
        assert_eq!(factory.cached_types(), 1);
    }

    #[test]
    fn test_creation_reported_once() {
        let mut factory = TreeFactory::new();
        let mut buf = Vec::new();
        factory.tree_type("Birch", "White", &mut buf).unwrap();
        factory.tree_type("Birch", "White", &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Created new TreeType: Birch|White\n");
    }

    #[test]
    fn test_four_trees_two_types() {
        let mut factory = TreeFactory::new();
        let mut sink = io::sink();
        let oak = factory.tree_type("Oak", "Green", &mut sink).unwrap();
        let _trees: Vec<Tree> = (0..3).map(|i| Tree::new(i, i, Rc::clone(&oak))).collect();
        factory.tree_type("Pine", "DarkGreen", &mut sink).unwrap();
        assert_eq!(factory.cached_types(), 2);
        // factory + local + three trees
        assert_eq!(Rc::strong_count(&oak), 5);
    }

    #[test]
    fn test_transcript() {
        assert_eq!(
            capture(run, ".").unwrap(),
            "Created new TreeType: Oak|Green\n\
             Created new TreeType: Pine|DarkGreen\n\
             \n\
             Cached TreeTypes = 2\n\
             \n\
             Draw Oak (Green) at (10,20)\n\
             Draw Oak (Green) at (11,21)\n\
             Draw Pine (DarkGreen) at (50,60)\n\
             Draw Oak (Green) at (70,80)\n"
        );
    }
}
