//! Bridge Pattern
//! The remote (abstraction) holds a device (implementation); both sides
//! vary independently.
//!
//! Run with: cargo run --bin bridge

use std::io::{self, Write};

use crate::demo::DemoContext;
use crate::error;

pub trait Device {
    fn power_on(&mut self, out: &mut dyn Write) -> io::Result<()>;
    fn power_off(&mut self, out: &mut dyn Write) -> io::Result<()>;
    fn set_volume(&mut self, volume: i32, out: &mut dyn Write) -> io::Result<()>;
    fn volume(&self) -> i32;
    fn is_on(&self) -> bool;
    fn name(&self) -> &str;
}

#[derive(Debug)]
pub struct Tv {
    on: bool,
    volume: i32,
}

impl Default for Tv {
    fn default() -> Self {
        Self { on: false, volume: 10 }
    }
}

impl Device for Tv {
    fn power_on(&mut self, out: &mut dyn Write) -> io::Result<()> {
        self.on = true;
        writeln!(out, "TV: ON")
    }

    fn power_off(&mut self, out: &mut dyn Write) -> io::Result<()> {
        self.on = false;
        writeln!(out, "TV: OFF")
    }

    fn set_volume(&mut self, volume: i32, out: &mut dyn Write) -> io::Result<()> {
        self.volume = volume;
        writeln!(out, "TV: volume = {}", self.volume)
    }

    fn volume(&self) -> i32 {
        self.volume
    }

    fn is_on(&self) -> bool {
        self.on
    }

    fn name(&self) -> &str {
        "TV"
    }
}

#[derive(Debug)]
pub struct Radio {
    on: bool,
    volume: i32,
}

impl Default for Radio {
    fn default() -> Self {
        Self { on: false, volume: 5 }
    }
}

impl Device for Radio {
    fn power_on(&mut self, out: &mut dyn Write) -> io::Result<()> {
        self.on = true;
        writeln!(out, "Radio: ON")
    }

    fn power_off(&mut self, out: &mut dyn Write) -> io::Result<()> {
        self.on = false;
        writeln!(out, "Radio: OFF")
    }

    fn set_volume(&mut self, volume: i32, out: &mut dyn Write) -> io::Result<()> {
        self.volume = volume;
        writeln!(out, "Radio: volume = {}", self.volume)
    }

    fn volume(&self) -> i32 {
        self.volume
    }

    fn is_on(&self) -> bool {
        self.on
    }

    fn name(&self) -> &str {
        "Radio"
    }
}

// Abstraction
pub struct Remote<D: Device> {
    device: D,
}

impl<D: Device> Remote<D> {
    pub fn new(device: D) -> Self {
        Self { device }
    }

    pub fn toggle_power(&mut self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Remote toggles power for {}", self.device.name())?;
        if self.device.is_on() {
            self.device.power_off(out)
        } else {
            self.device.power_on(out)
        }
    }

    pub fn volume_up(&mut self, out: &mut dyn Write) -> io::Result<()> {
        let volume = self.device.volume().saturating_add(1);
        self.device.set_volume(volume, out)
    }

    pub fn volume_down(&mut self, out: &mut dyn Write) -> io::Result<()> {
        let volume = self.device.volume().saturating_sub(1);
        self.device.set_volume(volume, out)
    }

    pub fn device(&self) -> &D {
        &self.device
    }
}

// Refined abstraction: everything a Remote does, plus mute.
pub struct AdvancedRemote<D: Device> {
    remote: Remote<D>,
}

impl<D: Device> AdvancedRemote<D> {
    pub fn new(device: D) -> Self {
        Self {
            remote: Remote::new(device),
        }
    }

    pub fn toggle_power(&mut self, out: &mut dyn Write) -> io::Result<()> {
        self.remote.toggle_power(out)
    }

    pub fn volume_up(&mut self, out: &mut dyn Write) -> io::Result<()> {
        self.remote.volume_up(out)
    }

    pub fn volume_down(&mut self, out: &mut dyn Write) -> io::Result<()> {
        self.remote.volume_down(out)
    }

    pub fn mute(&mut self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "AdvancedRemote: mute {}", self.remote.device.name())?;
        self.remote.device.set_volume(0, out)
    }

    pub fn device(&self) -> &D {
        self.remote.device()
    }
}

pub fn run(ctx: &mut DemoContext<'_>) -> error::Result<()> {
    let mut basic_tv_remote = Remote::new(Tv::default());
    basic_tv_remote.toggle_power(ctx.out)?;
    basic_tv_remote.volume_up(ctx.out)?;

    writeln!(ctx.out)?;

    let mut advanced_radio_remote = AdvancedRemote::new(Radio::default());
    advanced_radio_remote.toggle_power(ctx.out)?;
    advanced_radio_remote.mute(ctx.out)?;

    Ok(())
}
