//! Strategy Pattern
//! Swap the payment algorithm at runtime without touching the processor.
//!
//! Run with: cargo run --bin strategy

use std::io::{self, Write};

use crate::demo::DemoContext;
use crate::error;

pub trait PaymentStrategy {
    fn pay(&self, amount: u32, out: &mut dyn Write) -> io::Result<()>;
}

pub struct CashPayment;

impl PaymentStrategy for CashPayment {
    fn pay(&self, amount: u32, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Paid ${} using CASH", amount)
    }
}

pub struct CreditCardPayment {
    last4: String,
}

impl CreditCardPayment {
    pub fn new(last4: impl Into<String>) -> Self {
        Self {
            last4: last4.into(),
        }
    }
}

impl PaymentStrategy for CreditCardPayment {
    fn pay(&self, amount: u32, out: &mut dyn Write) -> io::Result<()> {
        writeln!(
            out,
            "Paid ${} using CREDIT CARD (**** {})",
            amount, self.last4
        )
    }
}

pub struct PayPalPayment {
    email: String,
}

impl PayPalPayment {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

impl PaymentStrategy for PayPalPayment {
    fn pay(&self, amount: u32, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Paid ${} using PAYPAL ({})", amount, self.email)
    }
}

/// Context.
pub struct PaymentProcessor {
    strategy: Box<dyn PaymentStrategy>,
}

impl PaymentProcessor {
    pub fn new(strategy: impl PaymentStrategy + 'static) -> Self {
        Self {
            strategy: Box::new(strategy),
        }
    }

    pub fn set_strategy(&mut self, strategy: impl PaymentStrategy + 'static) {
        self.strategy = Box::new(strategy);
    }

    pub fn checkout(&self, amount: u32, out: &mut dyn Write) -> io::Result<()> {
        self.strategy.pay(amount, out)
    }
}

pub fn run(ctx: &mut DemoContext<'_>) -> error::Result<()> {
    let mut processor = PaymentProcessor::new(CashPayment);
    processor.checkout(100, ctx.out)?;

    processor.set_strategy(CreditCardPayment::new("1234"));
    processor.checkout(250, ctx.out)?;

    processor.set_strategy(PayPalPayment::new("mohit@example.com"));
    processor.checkout(75, ctx.out)?;
    Ok(())
}
