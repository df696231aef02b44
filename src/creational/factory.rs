//! Factory Pattern
//! One place decides which concrete type to create; callers ask by name
//! and get a trait object back.
//!
//! Run with: cargo run --bin factory

use std::io::{self, Write};
use thiserror::Error;

use crate::demo::DemoContext;
use crate::error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FactoryError {
    #[error("Unknown {family}: {kind}")]
    UnknownKind { family: &'static str, kind: String },
}

// ============================================================================
// Example: Animals
// ============================================================================

pub trait Animal {
    fn speak(&self, out: &mut dyn Write) -> io::Result<()>;
}

pub struct Dog;

impl Animal for Dog {
    fn speak(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Woof")
    }
}

pub struct Cat;

impl Animal for Cat {
    fn speak(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Meow")
    }
}

pub struct AnimalFactory;

impl AnimalFactory {
    /// Case-insensitive; unknown kinds fail fast.
    pub fn create(kind: &str) -> Result<Box<dyn Animal>, FactoryError> {
        match kind.to_lowercase().as_str() {
            "dog" => Ok(Box::new(Dog)),
            "cat" => Ok(Box::new(Cat)),
            _ => Err(FactoryError::UnknownKind {
                family: "animal",
                kind: kind.to_string(),
            }),
        }
    }
}

pub fn run(ctx: &mut DemoContext<'_>) -> error::Result<()> {
    let a1 = AnimalFactory::create("dog")?;
    a1.speak(ctx.out)?;

    let a2 = AnimalFactory::create("cat")?;
    a2.speak(ctx.out)?;

    Ok(())
}

// ============================================================================
// Example: Vehicles (same idea, different domain)
// ============================================================================

pub trait Vehicle {
    fn drive(&self, out: &mut dyn Write) -> io::Result<()>;
}

pub struct Car;

impl Vehicle for Car {
    fn drive(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Car: driving on road")
    }
}

pub struct Bike;

impl Vehicle for Bike {
    fn drive(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Bike: pedaling")
    }
}

pub struct VehicleFactory;

impl VehicleFactory {
    pub fn create(kind: &str) -> Result<Box<dyn Vehicle>, FactoryError> {
        match kind.to_lowercase().as_str() {
            "car" => Ok(Box::new(Car)),
            "bike" => Ok(Box::new(Bike)),
            _ => Err(FactoryError::UnknownKind {
                family: "vehicle",
                kind: kind.to_string(),
            }),
        }
    }
}

pub fn run_vehicles(ctx: &mut DemoContext<'_>) -> error::Result<()> {
    let v1 = VehicleFactory::create("car")?;
    v1.drive(ctx.out)?;

    let v2 = VehicleFactory::create("bike")?;
    v2.drive(ctx.out)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::capture;

    fn spoken(animal: &dyn Animal) -> String {
        let mut buf = Vec::new();
        animal.speak(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_factory_is_case_insensitive() {
        let dog = AnimalFactory::create("DoG").unwrap();
        assert_eq!(spoken(dog.as_ref()), "Woof\n");
    }

    #[test]
    fn test_unknown_animal() {
        let err = AnimalFactory::create("Parrot").err().unwrap();
        assert_eq!(err.to_string(), "Unknown animal: Parrot");
    }

    #[test]
    fn test_unknown_vehicle() {
        let err = VehicleFactory::create("boat").err().unwrap();
        assert_eq!(err.to_string(), "Unknown vehicle: boat");
    }

    #[test]
    fn test_animal_transcript() {
        assert_eq!(capture(run, ".").unwrap(), "Woof\nMeow\n");
    }

    #[test]
    fn test_vehicle_transcript() {
        assert_eq!(
            capture(run_vehicles, ".").unwrap(),
            "Car: driving on road\nBike: pedaling\n"
        );
    }
}
