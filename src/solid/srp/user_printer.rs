//! Smallest split: `User` holds data, `UserPrinter` prints it.

use std::io::{self, Write};

use crate::demo::DemoContext;
use crate::error;

#[derive(Debug, Clone)]
pub struct User {
    pub name: String,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

pub struct UserPrinter;

impl UserPrinter {
    pub fn print(&self, user: &User, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "User: {}", user.name)
    }
}

pub fn run(ctx: &mut DemoContext<'_>) -> error::Result<()> {
    let user = User::new("Mohit");
    UserPrinter.print(&user, ctx.out)?;
    Ok(())
}
