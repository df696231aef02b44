//! Command Pattern
//! Requests become objects, so the invoker can keep a history and undo.
//!
//! Run with: cargo run --bin command

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use crate::demo::DemoContext;
use crate::error;

pub trait Command {
    fn execute(&mut self, out: &mut dyn Write) -> io::Result<()>;
    fn undo(&mut self, out: &mut dyn Write) -> io::Result<()>;
}

/// Receiver: the thing that actually does the work.
#[derive(Debug, Default)]
pub struct Light {
    on: bool,
}

impl Light {
    pub fn on(&mut self, out: &mut dyn Write) -> io::Result<()> {
        self.on = true;
        writeln!(out, "Light is ON")
    }

    pub fn off(&mut self, out: &mut dyn Write) -> io::Result<()> {
        self.on = false;
        writeln!(out, "Light is OFF")
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}

pub struct LightOnCommand {
    light: Rc<RefCell<Light>>,
}

impl LightOnCommand {
    pub fn new(light: Rc<RefCell<Light>>) -> Self {
        Self { light }
    }
}

impl Command for LightOnCommand {
    fn execute(&mut self, out: &mut dyn Write) -> io::Result<()> {
        self.light.borrow_mut().on(out)
    }

    fn undo(&mut self, out: &mut dyn Write) -> io::Result<()> {
        self.light.borrow_mut().off(out)
    }
}

pub struct LightOffCommand {
    light: Rc<RefCell<Light>>,
}

impl LightOffCommand {
    pub fn new(light: Rc<RefCell<Light>>) -> Self {
        Self { light }
    }
}

impl Command for LightOffCommand {
    fn execute(&mut self, out: &mut dyn Write) -> io::Result<()> {
        self.light.borrow_mut().off(out)
    }

    fn undo(&mut self, out: &mut dyn Write) -> io::Result<()> {
        self.light.borrow_mut().on(out)
    }
}

/// Invoker.
#[derive(Default)]
pub struct RemoteControl {
    history: Vec<Box<dyn Command>>,
}

impl RemoteControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, mut command: Box<dyn Command>, out: &mut dyn Write) -> io::Result<()> {
        command.execute(out)?;
        self.history.push(command);
        Ok(())
    }

    pub fn undo_last(&mut self, out: &mut dyn Write) -> io::Result<()> {
        match self.history.pop() {
            Some(mut last) => last.undo(out),
            None => writeln!(out, "Nothing to undo"),
        }
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

pub fn run(ctx: &mut DemoContext<'_>) -> error::Result<()> {
    let light = Rc::new(RefCell::new(Light::default()));
    let mut remote = RemoteControl::new();

    remote.press(Box::new(LightOnCommand::new(Rc::clone(&light))), ctx.out)?;
    remote.press(Box::new(LightOffCommand::new(Rc::clone(&light))), ctx.out)?;

    remote.undo_last(ctx.out)?; // undo OFF => ON
    remote.undo_last(ctx.out)?; // undo ON => OFF
    remote.undo_last(ctx.out)?; // nothing left

    Ok(())
}
