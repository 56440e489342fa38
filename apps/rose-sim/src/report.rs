//! Daily snapshot rendering.

use std::io::{self, Write};

use rose_core::{Inventory, Item};
use serde::Serialize;

use crate::config::OutputFormat;

#[derive(Serialize)]
struct DaySnapshot<'a> {
    day: u32,
    items: Vec<&'a Item>,
}

/// Writes day 0, then advances and writes each following day up to `days`.
pub fn run(
    inventory: &mut Inventory,
    days: u32,
    format: OutputFormat,
    out: &mut impl Write,
) -> io::Result<()> {
    for day in 0..=days {
        if day > 0 {
            inventory.advance_day();
        }
        write_day(out, day, inventory, format)?;
    }
    out.flush()
}

/// Writes one snapshot of the inventory.
pub fn write_day(
    out: &mut impl Write,
    day: u32,
    inventory: &Inventory,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "-------- day {day} --------")?;
            writeln!(out, "name, sellIn, quality")?;
            for item in inventory.items() {
                writeln!(out, "{item}")?;
            }
            writeln!(out)
        }
        OutputFormat::Json => {
            let snapshot = DaySnapshot {
                day,
                items: inventory.items().collect(),
            };
            serde_json::to_writer(&mut *out, &snapshot)?;
            writeln!(out)
        }
    }
}
