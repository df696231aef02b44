//! Iterator Pattern
//! Walk a collection without exposing how it stores its items.
//!
//! Run with: cargo run --bin iterator

use crate::demo::DemoContext;
use crate::error;

#[derive(Debug, Clone, Default)]
pub struct NameCollection {
    names: Vec<String>,
}

impl NameCollection {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn iter(&self) -> NameIter<'_> {
        NameIter {
            names: &self.names,
            index: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Cursor over a `NameCollection`.
pub struct NameIter<'a> {
    names: &'a [String],
    index: usize,
}

impl<'a> Iterator for NameIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.names.get(self.index)?;
        self.index += 1;
        Some(name.as_str())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.names.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for NameIter<'_> {}

impl<'a> IntoIterator for &'a NameCollection {
    type Item = &'a str;
    type IntoIter = NameIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub fn run(ctx: &mut DemoContext<'_>) -> error::Result<()> {
    let list = NameCollection::new(["Mohit", "Aman", "Riya"]);

    for name in &list {
        writeln!(ctx.out, "{}", name)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::capture;

    #[test]
    fn test_iteration_order() {
        let list = NameCollection::new(vec!["a".to_string(), "b".to_string()]);
        let names: Vec<&str> = list.iter().collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_exhausted_iterator_stays_empty() {
        let list = NameCollection::new(["only"]);
        let mut iter = list.iter();
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.next(), Some("only"));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_empty_collection() {
        let list = NameCollection::default();
        assert!(list.is_empty());
        assert_eq!(list.iter().count(), 0);
    }

    #[test]
    fn test_transcript() {
        assert_eq!(capture(run, ".").unwrap(), "Mohit\nAman\nRiya\n");
    }
}
