//! Todo list: `Task` is data, `TaskValidator` checks it, `TaskStore`
//! manages the in-memory list, `TaskFileStorage` persists it.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::{require_max_len, require_text, write_scratch, ValidationError, MAX_TITLE_LEN};
use crate::demo::DemoContext;
use crate::error;

pub const TODO_FILE: &str = "todolist.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub title: String,
    pub done: bool,
}

impl Task {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            done: false,
        }
    }
}

pub struct TaskValidator;

impl TaskValidator {
    pub fn validate(&self, task: &Task) -> Result<(), ValidationError> {
        require_text("title", &task.title)?;
        require_max_len("title", &task.title, MAX_TITLE_LEN)
    }
}

#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Marks the first task with this exact title. Returns false if none matched.
    pub fn mark_done(&mut self, title: &str) -> bool {
        match self.tasks.iter_mut().find(|t| t.title == title) {
            Some(task) => {
                task.done = true;
                true
            }
            None => false,
        }
    }

    pub fn incomplete_titles(&self) -> Vec<&str> {
        self.tasks
            .iter()
            .filter(|t| !t.done)
            .map(|t| t.title.as_str())
            .collect()
    }

    pub fn all_tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// One `title|done` line per task.
pub struct TaskFileStorage {
    path: PathBuf,
}

impl TaskFileStorage {
    pub fn new(dir: &Path) -> Self {
        Self {
            path: dir.join(TODO_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self, tasks: &[Task], out: &mut dyn Write) -> io::Result<PathBuf> {
        let body: String = tasks
            .iter()
            .map(|t| format!("{}|{}\n", t.title, t.done))
            .collect();
        let written = write_scratch(&self.path, &body)?;
        writeln!(out, "Tasks saved to: {}", written.display())?;
        Ok(written)
    }

    /// A missing file loads as an empty list. Lines without a `|` are skipped;
    /// the title is everything before the last `|`.
    pub fn load(&self) -> io::Result<Vec<Task>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };

        let tasks = text
            .lines()
            .filter_map(|line| {
                let Some((title, done)) = line.rsplit_once('|') else {
                    tracing::debug!(line, "skipping malformed todo line");
                    return None;
                };
                Some(Task {
                    title: title.to_string(),
                    done: done.trim().eq_ignore_ascii_case("true"),
                })
            })
            .collect();
        Ok(tasks)
    }
}

pub fn run(ctx: &mut DemoContext<'_>) -> error::Result<()> {
    let validator = TaskValidator;
    let mut store = TaskStore::new();
    let storage = TaskFileStorage::new(&ctx.scratch_dir);

    for title in ["Buy groceries", "Call mom", "Finish report"] {
        let task = Task::new(title);
        if let Err(err) = validator.validate(&task) {
            tracing::info!(%err, title, "task rejected");
            writeln!(ctx.out, "Invalid task: {}", title)?;
            continue;
        }
        store.add(task);
    }
    writeln!(ctx.out, "Added {} tasks.", store.len())?;

    store.mark_done("Call mom");
    writeln!(ctx.out, "Marked 'Call mom' done.")?;

    writeln!(ctx.out, "Incomplete: [{}]", store.incomplete_titles().join(", "))?;

    storage.save(store.all_tasks(), ctx.out)?;
    Ok(())
}
