//! State Pattern
//! The order delegates `pay` and `ship` to its current state object, and
//! the state decides what comes next.
//!
//! Run with: cargo run --bin state

use std::io::{self, Write};

use crate::demo::DemoContext;
use crate::error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    New,
    Paid,
    Shipped,
}

/// Next state plus the message describing what happened.
pub struct Transition {
    next: Box<dyn OrderState>,
    message: &'static str,
}

impl Transition {
    fn to(next: impl OrderState + 'static, message: &'static str) -> Self {
        Self {
            next: Box::new(next),
            message,
        }
    }
}

pub trait OrderState {
    fn status(&self) -> OrderStatus;
    fn pay(self: Box<Self>) -> Transition;
    fn ship(self: Box<Self>) -> Transition;
}

struct NewState;

impl OrderState for NewState {
    fn status(&self) -> OrderStatus {
        OrderStatus::New
    }

    fn pay(self: Box<Self>) -> Transition {
        Transition::to(PaidState, "Payment received. Order is now PAID.")
    }

    fn ship(self: Box<Self>) -> Transition {
        Transition::to(NewState, "Cannot ship. Order is not paid yet.")
    }
}

struct PaidState;

impl OrderState for PaidState {
    fn status(&self) -> OrderStatus {
        OrderStatus::Paid
    }

    fn pay(self: Box<Self>) -> Transition {
        Transition::to(PaidState, "Already paid. No action.")
    }

    fn ship(self: Box<Self>) -> Transition {
        Transition::to(ShippedState, "Shipping order. Order is now SHIPPED.")
    }
}

struct ShippedState;

impl OrderState for ShippedState {
    fn status(&self) -> OrderStatus {
        OrderStatus::Shipped
    }

    fn pay(self: Box<Self>) -> Transition {
        Transition::to(ShippedState, "Order already shipped. Payment step is done.")
    }

    fn ship(self: Box<Self>) -> Transition {
        Transition::to(ShippedState, "Already shipped. No action.")
    }
}

/// Context.
pub struct Order {
    // Only empty while a transition is being applied.
    state: Option<Box<dyn OrderState>>,
}

impl Order {
    pub fn new(out: &mut dyn Write) -> io::Result<Self> {
        writeln!(out, "Order created: NEW")?;
        Ok(Self {
            state: Some(Box::new(NewState)),
        })
    }

    pub fn status(&self) -> OrderStatus {
        self.state
            .as_ref()
            .map_or(OrderStatus::New, |state| state.status())
    }

    pub fn pay(&mut self, out: &mut dyn Write) -> io::Result<()> {
        self.apply(|state| state.pay(), out)
    }

    pub fn ship(&mut self, out: &mut dyn Write) -> io::Result<()> {
        self.apply(|state| state.ship(), out)
    }

    fn apply(
        &mut self,
        step: impl FnOnce(Box<dyn OrderState>) -> Transition,
        out: &mut dyn Write,
    ) -> io::Result<()> {
        let Some(current) = self.state.take() else {
            return Ok(());
        };
        let Transition { next, message } = step(current);
        self.state = Some(next);
        writeln!(out, "{}", message)
    }
}

pub fn run(ctx: &mut DemoContext<'_>) -> error::Result<()> {
    let mut order = Order::new(ctx.out)?;

    order.ship(ctx.out)?; // not paid yet
    order.pay(ctx.out)?;
    order.pay(ctx.out)?; // already paid
    order.ship(ctx.out)?;
    order.ship(ctx.out)?; // already shipped

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::capture;

    #[test]
    fn test_status_transitions() {
        let mut sink = io::sink();
        let mut order = Order::new(&mut sink).unwrap();
        assert_eq!(order.status(), OrderStatus::New);

        order.ship(&mut sink).unwrap();
        assert_eq!(order.status(), OrderStatus::New);

        order.pay(&mut sink).unwrap();
        assert_eq!(order.status(), OrderStatus::Paid);

        order.ship(&mut sink).unwrap();
        assert_eq!(order.status(), OrderStatus::Shipped);
    }

    #[test]
    fn test_pay_after_shipping() {
        let mut sink = io::sink();
        let mut order = Order::new(&mut sink).unwrap();
        order.pay(&mut sink).unwrap();
        order.ship(&mut sink).unwrap();

        let mut buf = Vec::new();
        order.pay(&mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Order already shipped. Payment step is done.\n"
        );
        assert_eq!(order.status(), OrderStatus::Shipped);
    }

    #[test]
    fn test_transcript() {
        assert_eq!(
            capture(run, ".").unwrap(),
            "Order created: NEW\n\
             Cannot ship. Order is not paid yet.\n\
             Payment received. Order is now PAID.\n\
             Already paid. No action.\n\
             Shipping order. Order is now SHIPPED.\n\
             Already shipped. No action.\n"
        );
    }
}
