//! Dependency Inversion Principle
//! High-level types depend on traits, and the caller injects the concrete
//! implementation through the constructor.
//!
//! Run with: cargo run --bin dip

use std::collections::HashMap;
use std::io::{self, Write};

use crate::demo::DemoContext;
use crate::error;

// ---------------------------------------------------------------------------
// Greeter
// ---------------------------------------------------------------------------

pub trait Printer {
    fn print(&mut self, text: &str) -> io::Result<()>;
}

/// Prints to whatever writer it was given.
pub struct ConsolePrinter<W: Write> {
    out: W,
}

impl<W: Write> ConsolePrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Printer for ConsolePrinter<W> {
    fn print(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }
}

pub struct Greeter<P: Printer> {
    printer: P,
}

impl<P: Printer> Greeter<P> {
    pub fn new(printer: P) -> Self {
        Self { printer }
    }

    pub fn say(&mut self, message: &str) -> io::Result<()> {
        self.printer.print(message)
    }
}

pub fn run_greeter(ctx: &mut DemoContext<'_>) -> error::Result<()> {
    let mut greeter = Greeter::new(ConsolePrinter::new(&mut *ctx.out));
    greeter.say("Hello")?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Lamp
// ---------------------------------------------------------------------------

pub trait Switch {
    fn turn_on(&mut self) -> io::Result<()>;
    fn turn_off(&mut self) -> io::Result<()>;
}

pub struct RealSwitch<W: Write> {
    out: W,
}

impl<W: Write> RealSwitch<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Switch for RealSwitch<W> {
    fn turn_on(&mut self) -> io::Result<()> {
        writeln!(self.out, "Light ON")
    }

    fn turn_off(&mut self) -> io::Result<()> {
        writeln!(self.out, "Light OFF")
    }
}

pub struct Lamp<S: Switch> {
    switch: S,
}

impl<S: Switch> Lamp<S> {
    pub fn new(switch: S) -> Self {
        Self { switch }
    }

    pub fn on(&mut self) -> io::Result<()> {
        self.switch.turn_on()
    }

    pub fn off(&mut self) -> io::Result<()> {
        self.switch.turn_off()
    }
}

pub fn run_lamp(ctx: &mut DemoContext<'_>) -> error::Result<()> {
    let mut lamp = Lamp::new(RealSwitch::new(&mut *ctx.out));
    lamp.on()?;
    lamp.off()?;
    Ok(())
}

// ---------------------------------------------------------------------------
// User service
// ---------------------------------------------------------------------------

pub trait UserRepository {
    fn save(&mut self, user: &str) -> io::Result<()>;
    fn find(&self, id: &str) -> Option<String>;
}

/// Pretends to talk to a database; every id resolves.
pub struct DatabaseUserRepository<W: Write> {
    out: W,
}

impl<W: Write> DatabaseUserRepository<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> UserRepository for DatabaseUserRepository<W> {
    fn save(&mut self, user: &str) -> io::Result<()> {
        writeln!(self.out, "DB: saved {}", user)
    }

    fn find(&self, id: &str) -> Option<String> {
        Some(format!("User-{}", id))
    }
}

/// Keyed by the user name itself.
pub struct InMemoryUserRepository<W: Write> {
    store: HashMap<String, String>,
    out: W,
}

impl<W: Write> InMemoryUserRepository<W> {
    pub fn new(out: W) -> Self {
        Self {
            store: HashMap::new(),
            out,
        }
    }
}

impl<W: Write> UserRepository for InMemoryUserRepository<W> {
    fn save(&mut self, user: &str) -> io::Result<()> {
        self.store.insert(user.to_string(), user.to_string());
        writeln!(self.out, "InMemory: saved {}", user)
    }

    fn find(&self, id: &str) -> Option<String> {
        self.store.get(id).cloned()
    }
}

pub struct UserService<'a> {
    repository: Box<dyn UserRepository + 'a>,
}

impl<'a> UserService<'a> {
    pub fn new(repository: impl UserRepository + 'a) -> Self {
        Self {
            repository: Box::new(repository),
        }
    }

    pub fn register(&mut self, name: &str) -> io::Result<()> {
        self.repository.save(name)
    }

    pub fn get_user(&self, id: &str) -> Option<String> {
        self.repository.find(id)
    }
}

pub fn run_user_service(ctx: &mut DemoContext<'_>) -> error::Result<()> {
    let mut with_db = UserService::new(DatabaseUserRepository::new(&mut *ctx.out));
    with_db.register("Alice")?;
    drop(with_db);

    let mut with_memory = UserService::new(InMemoryUserRepository::new(&mut *ctx.out));
    with_memory.register("Bob")?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Alerts
// ---------------------------------------------------------------------------

pub trait MessageSender {
    fn send(&mut self, message: &str) -> io::Result<()>;
}

pub struct EmailSender<W: Write> {
    out: W,
}

impl<W: Write> EmailSender<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> MessageSender for EmailSender<W> {
    fn send(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "[EMAIL] {}", message)
    }
}

pub struct SmsSender<W: Write> {
    out: W,
}

impl<W: Write> SmsSender<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> MessageSender for SmsSender<W> {
    fn send(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "[SMS] {}", message)
    }
}

/// Knows only `MessageSender`; swapping channels needs no change here.
pub struct AlertService<'a> {
    sender: Box<dyn MessageSender + 'a>,
}

impl<'a> AlertService<'a> {
    pub fn new(sender: impl MessageSender + 'a) -> Self {
        Self {
            sender: Box::new(sender),
        }
    }

    pub fn alert(&mut self, message: &str) -> io::Result<()> {
        self.sender.send(message)
    }
}

pub fn run_alert(ctx: &mut DemoContext<'_>) -> error::Result<()> {
    AlertService::new(EmailSender::new(&mut *ctx.out)).alert("Hello via email")?;
    AlertService::new(SmsSender::new(&mut *ctx.out)).alert("Hello via SMS")?;
    Ok(())
}
