//! Decorator Pattern
//! Wrap a coffee in add-ons; each wrapper is itself a `Coffee`.
//!
//! Run with: cargo run --bin decorator

use std::io::Write;

use crate::demo::DemoContext;
use crate::error;

pub trait Coffee {
    fn description(&self) -> String;
    /// Price in cents.
    fn cost(&self) -> u32;
}

// Boxed coffees stack at runtime too.
impl<C: Coffee + ?Sized> Coffee for Box<C> {
    fn description(&self) -> String {
        (**self).description()
    }

    fn cost(&self) -> u32 {
        (**self).cost()
    }
}

pub struct SimpleCoffee;

impl Coffee for SimpleCoffee {
    fn description(&self) -> String {
        "Coffee".to_string()
    }

    fn cost(&self) -> u32 {
        50
    }
}

pub struct Milk<C>(pub C);

impl<C: Coffee> Coffee for Milk<C> {
    fn description(&self) -> String {
        format!("{} + Milk", self.0.description())
    }

    fn cost(&self) -> u32 {
        self.0.cost() + 10
    }
}

pub struct Sugar<C>(pub C);

impl<C: Coffee> Coffee for Sugar<C> {
    fn description(&self) -> String {
        format!("{} + Sugar", self.0.description())
    }

    fn cost(&self) -> u32 {
        self.0.cost() + 5
    }
}

pub struct WhippedCream<C>(pub C);

impl<C: Coffee> Coffee for WhippedCream<C> {
    fn description(&self) -> String {
        format!("{} + WhippedCream", self.0.description())
    }

    fn cost(&self) -> u32 {
        self.0.cost() + 15
    }
}

fn print_coffee(coffee: &dyn Coffee, out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "{} = {}", coffee.description(), coffee.cost())
}

pub fn run(ctx: &mut DemoContext<'_>) -> error::Result<()> {
    let c1 = SimpleCoffee;
    print_coffee(&c1, ctx.out)?;

    let c2 = Milk(SimpleCoffee);
    print_coffee(&c2, ctx.out)?;

    // Wrap multiple times
    let c3 = WhippedCream(Sugar(Milk(SimpleCoffee)));
    print_coffee(&c3, ctx.out)?;

    Ok(())
}
