//! Chain of Responsibility Pattern
//! A request passes through handlers in order; any handler may stop it.
//!
//! Run with: cargo run --bin chain

use std::io::{self, Write};

use crate::demo::DemoContext;
use crate::error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub user: Option<String>,
    pub token: Option<String>,
    /// Requests already made in the current window.
    pub requests_made: u32,
}

impl Request {
    pub fn new(user: &str, token: &str, requests_made: u32) -> Self {
        Self {
            user: Some(user.to_string()),
            token: Some(token.to_string()),
            requests_made,
        }
    }
}

/// What a handler decided about a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Pass to the next handler.
    Continue,
    /// Stop here, request rejected.
    Block,
    /// Stop here, request served.
    Accept,
}

pub trait Handler {
    fn name(&self) -> &'static str;
    fn handle(&self, request: &Request, out: &mut dyn Write) -> io::Result<Verdict>;
}

fn blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

fn pass(handler: &dyn Handler, out: &mut dyn Write) -> io::Result<Verdict> {
    writeln!(out, "{}: OK", handler.name())?;
    Ok(Verdict::Continue)
}

fn block(handler: &dyn Handler, reason: &str, out: &mut dyn Write) -> io::Result<Verdict> {
    writeln!(out, "{}: BLOCKED ({})", handler.name(), reason)?;
    Ok(Verdict::Block)
}

pub struct AuthHandler;

impl Handler for AuthHandler {
    fn name(&self) -> &'static str {
        "AuthHandler"
    }

    fn handle(&self, request: &Request, out: &mut dyn Write) -> io::Result<Verdict> {
        if request.token.as_deref().map_or(true, str::is_empty) {
            return block(self, "missing token", out);
        }
        pass(self, out)
    }
}

pub struct ValidationHandler;

impl Handler for ValidationHandler {
    fn name(&self) -> &'static str {
        "ValidationHandler"
    }

    fn handle(&self, request: &Request, out: &mut dyn Write) -> io::Result<Verdict> {
        if blank(&request.user) {
            return block(self, "missing user", out);
        }
        pass(self, out)
    }
}

pub struct RateLimitHandler {
    limit: u32,
}

impl RateLimitHandler {
    pub fn new(limit: u32) -> Self {
        Self { limit }
    }
}

impl Handler for RateLimitHandler {
    fn name(&self) -> &'static str {
        "RateLimitHandler"
    }

    fn handle(&self, request: &Request, out: &mut dyn Write) -> io::Result<Verdict> {
        if request.requests_made >= self.limit {
            tracing::debug!(made = request.requests_made, limit = self.limit, "rate limit hit");
            return block(self, "limit reached", out);
        }
        pass(self, out)
    }
}

/// Terminal handler: the actual business logic.
pub struct BusinessHandler;

impl Handler for BusinessHandler {
    fn name(&self) -> &'static str {
        "BusinessHandler"
    }

    fn handle(&self, request: &Request, out: &mut dyn Write) -> io::Result<Verdict> {
        writeln!(
            out,
            "{}: SUCCESS for user={}",
            self.name(),
            request.user.as_deref().unwrap_or_default()
        )?;
        Ok(Verdict::Accept)
    }
}

/// Ordered handlers. Running off the end accepts the request.
#[derive(Default)]
pub struct Chain {
    handlers: Vec<Box<dyn Handler>>,
}

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then(mut self, handler: impl Handler + 'static) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Returns whether the request made it through.
    pub fn handle(&self, request: &Request, out: &mut dyn Write) -> io::Result<bool> {
        for handler in &self.handlers {
            match handler.handle(request, out)? {
                Verdict::Continue => continue,
                Verdict::Block => {
                    tracing::debug!(handler = handler.name(), "request blocked");
                    return Ok(false);
                }
                Verdict::Accept => return Ok(true),
            }
        }
        Ok(true)
    }
}

/// Auth -> Validation -> RateLimit -> Business.
pub fn default_chain(rate_limit: u32) -> Chain {
    Chain::new()
        .then(AuthHandler)
        .then(ValidationHandler)
        .then(RateLimitHandler::new(rate_limit))
        .then(BusinessHandler)
}

pub fn run(ctx: &mut DemoContext<'_>) -> error::Result<()> {
    let chain = default_chain(3);

    writeln!(ctx.out, "---- Request 1 (good) ----")?;
    chain.handle(&Request::new("mohit", "token123", 0), ctx.out)?;

    writeln!(ctx.out, "\n---- Request 2 (missing token) ----")?;
    chain.handle(&Request::new("mohit", "", 0), ctx.out)?;

    writeln!(ctx.out, "\n---- Request 3 (rate limited) ----")?;
    chain.handle(&Request::new("mohit", "token123", 3), ctx.out)?;

    Ok(())
}
