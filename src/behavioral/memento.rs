//! Memento Pattern
//! Snapshot an editor's text and restore it later without exposing the
//! editor's internals.
//!
//! Run with: cargo run --bin memento

use crate::demo::DemoContext;
use crate::error;

/// Immutable snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorMemento {
    text: String,
}

impl EditorMemento {
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Originator.
#[derive(Debug, Default)]
pub struct TextEditor {
    text: String,
}

impl TextEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn type_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn save(&self) -> EditorMemento {
        EditorMemento {
            text: self.text.clone(),
        }
    }

    pub fn restore(&mut self, memento: EditorMemento) {
        self.text = memento.text;
    }
}

/// Caretaker: a stack of snapshots.
#[derive(Debug, Default)]
pub struct History {
    stack: Vec<EditorMemento>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, memento: EditorMemento) {
        self.stack.push(memento);
    }

    pub fn pop(&mut self) -> Option<EditorMemento> {
        self.stack.pop()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

pub fn run(ctx: &mut DemoContext<'_>) -> error::Result<()> {
    let mut editor = TextEditor::new();
    let mut history = History::new();

    history.push(editor.save());

    for chunk in ["Hello", " World"] {
        editor.type_text(chunk);
        writeln!(ctx.out, "Text: {}", editor.text())?;
        history.push(editor.save());
    }

    editor.type_text(" !!!");
    writeln!(ctx.out, "Text: {}", editor.text())?;

    for step in 1..=3 {
        writeln!(ctx.out, "\nUndo {}", step)?;
        match history.pop() {
            Some(memento) => editor.restore(memento),
            None => writeln!(ctx.out, "Nothing to undo")?,
        }
        writeln!(ctx.out, "Text: {}", editor.text())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::capture;

    #[test]
    fn test_restore_returns_to_snapshot() {
        let mut editor = TextEditor::new();
        editor.type_text("abc");
        let snapshot = editor.save();
        editor.type_text("def");
        editor.restore(snapshot);
        assert_eq!(editor.text(), "abc");
    }

    #[test]
    fn test_snapshot_is_independent_of_later_edits() {
        let mut editor = TextEditor::new();
        editor.type_text("one");
        let snapshot = editor.save();
        editor.type_text(" two");
        assert_eq!(snapshot.text(), "one");
    }

    #[test]
    fn test_history_is_lifo() {
        let mut editor = TextEditor::new();
        let mut history = History::new();
        history.push(editor.save());
        editor.type_text("x");
        history.push(editor.save());

        assert_eq!(history.pop().unwrap().text(), "x");
        assert_eq!(history.pop().unwrap().text(), "");
        assert!(history.is_empty());
        assert!(history.pop().is_none());
    }

    #[test]
    fn test_transcript() {
        assert_eq!(
            capture(run, ".").unwrap(),
            "Text: Hello\n\
             Text: Hello World\n\
             Text: Hello World !!!\n\
             \n\
             Undo 1\n\
             Text: Hello World\n\
             \n\
             Undo 2\n\
             Text: Hello\n\
             \n\
             Undo 3\n\
             Text: \n"
        );
    }
}
