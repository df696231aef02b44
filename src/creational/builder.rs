//! Builder Pattern
//! Build a `House` step by step instead of through one wide constructor.
//!
//! Run with: cargo run --bin builder

use std::fmt;
use thiserror::Error;

use crate::demo::DemoContext;
use crate::error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("rooms must be >= 1")]
    InvalidRooms(i32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct House {
    rooms: i32,
    garage: bool,
    garden: bool,
    roof_type: String,
}

impl House {
    /// The only way to get a `House`.
    pub fn builder() -> HouseBuilder {
        HouseBuilder::default()
    }

    pub fn rooms(&self) -> i32 {
        self.rooms
    }

    pub fn has_garage(&self) -> bool {
        self.garage
    }

    pub fn has_garden(&self) -> bool {
        self.garden
    }

    pub fn roof_type(&self) -> &str {
        &self.roof_type
    }
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "House{{rooms={}, garage={}, garden={}, roofType='{}'}}",
            self.rooms, self.garage, self.garden, self.roof_type
        )
    }
}

#[derive(Debug, Clone)]
#[must_use = "a builder does nothing until build() is called"]
pub struct HouseBuilder {
    rooms: i32,
    garage: bool,
    garden: bool,
    roof_type: String,
}

impl Default for HouseBuilder {
    fn default() -> Self {
        Self {
            rooms: 1,
            garage: false,
            garden: false,
            roof_type: "flat".to_string(),
        }
    }
}

impl HouseBuilder {
    pub fn rooms(mut self, rooms: i32) -> Self {
        self.rooms = rooms;
        self
    }

    pub fn garage(mut self, value: bool) -> Self {
        self.garage = value;
        self
    }

    pub fn garden(mut self, value: bool) -> Self {
        self.garden = value;
        self
    }

    pub fn roof_type(mut self, roof_type: impl Into<String>) -> Self {
        self.roof_type = roof_type.into();
        self
    }

    pub fn build(self) -> Result<House, BuildError> {
        if self.rooms <= 0 {
            return Err(BuildError::InvalidRooms(self.rooms));
        }
        Ok(House {
            rooms: self.rooms,
            garage: self.garage,
            garden: self.garden,
            roof_type: self.roof_type,
        })
    }
}

pub fn run(ctx: &mut DemoContext<'_>) -> error::Result<()> {
    let h1 = House::builder()
        .rooms(3)
        .garage(true)
        .garden(true)
        .roof_type("sloped")
        .build()?;
    writeln!(ctx.out, "{}", h1)?;

    // Same builder type, different configuration
    let h2 = House::builder().rooms(1).roof_type("flat").build()?;
    writeln!(ctx.out, "{}", h2)?;

    Ok(())
}
