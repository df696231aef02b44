//! Mediator Pattern
//! Members talk through a chat room instead of holding references to
//! each other.
//!
//! Run with: cargo run --bin mediator

use std::io::{self, Write};

use crate::demo::DemoContext;
use crate::error;

/// Handle returned on registration; identifies the sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemberId(usize);

pub trait Colleague {
    fn name(&self) -> &str;
    fn receive(&self, message: &str, out: &mut dyn Write) -> io::Result<()>;
}

pub trait ChatMediator {
    fn register(&mut self, member: Box<dyn Colleague>) -> MemberId;
    fn send(&self, message: &str, from: MemberId, out: &mut dyn Write) -> io::Result<()>;
}

pub struct BasicUser {
    name: String,
}

impl BasicUser {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Colleague for BasicUser {
    fn name(&self) -> &str {
        &self.name
    }

    fn receive(&self, message: &str, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{} received -> {}", self.name, message)
    }
}

#[derive(Default)]
pub struct ChatRoom {
    members: Vec<Box<dyn Colleague>>,
}

impl ChatRoom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl ChatMediator for ChatRoom {
    fn register(&mut self, member: Box<dyn Colleague>) -> MemberId {
        self.members.push(member);
        MemberId(self.members.len() - 1)
    }

    /// Delivers to everyone except the sender.
    fn send(&self, message: &str, from: MemberId, out: &mut dyn Write) -> io::Result<()> {
        let Some(sender) = self.members.get(from.0) else {
            tracing::warn!(?from, "message from unregistered member dropped");
            return Ok(());
        };

        let line = format!("{}: {}", sender.name(), message);
        for (index, member) in self.members.iter().enumerate() {
            if index != from.0 {
                member.receive(&line, out)?;
            }
        }
        Ok(())
    }
}

pub fn run(ctx: &mut DemoContext<'_>) -> error::Result<()> {
    let mut room = ChatRoom::new();

    let mohit = room.register(Box::new(BasicUser::new("Mohit")));
    let aman = room.register(Box::new(BasicUser::new("Aman")));
    room.register(Box::new(BasicUser::new("Riya")));

    room.send("Hi everyone!", mohit, ctx.out)?;
    room.send("Yo Mohit!", aman, ctx.out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::capture;

    #[test]
    fn test_sender_does_not_receive_own_message() {
        let mut room = ChatRoom::new();
        let solo = room.register(Box::new(BasicUser::new("Solo")));
        let mut buf = Vec::new();
        room.send("anyone?", solo, &mut buf).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_unknown_sender_is_ignored() {
        let mut other = ChatRoom::new();
        other.register(Box::new(BasicUser::new("A")));
        let stranger = other.register(Box::new(BasicUser::new("B")));

        let mut room = ChatRoom::new();
        room.register(Box::new(BasicUser::new("C")));
        let mut buf = Vec::new();
        room.send("hi", stranger, &mut buf).unwrap();
        assert!(buf.is_empty());
        assert_eq!(room.len(), 1);
    }

    #[test]
    fn test_transcript() {
        assert_eq!(
            capture(run, ".").unwrap(),
            "Aman received -> Mohit: Hi everyone!\n\
             Riya received -> Mohit: Hi everyone!\n\
             Mohit received -> Aman: Yo Mohit!\n\
             Riya received -> Aman: Yo Mohit!\n"
        );
    }
}
