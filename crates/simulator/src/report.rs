use core::fmt::Write as _;

use serde::Serialize;

use gildedrose_inventory::{Item, advance_one_day};

use crate::config::OutputFormat;

/// State of the whole catalogue at the end of a given day (day 0 is the input).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySnapshot {
    pub day: u32,
    pub items: Vec<Item>,
}

/// Snapshot day 0 through `days`, advancing the items once between snapshots.
pub fn simulate(mut items: Vec<Item>, days: u32) -> Vec<DaySnapshot> {
    let mut snapshots = Vec::with_capacity(days as usize + 1);

    for day in 0..=days {
        if day > 0 {
            advance_one_day(&mut items);
        }
        snapshots.push(DaySnapshot {
            day,
            items: items.clone(),
        });
    }

    tracing::debug!(days, items = items.len(), "simulation finished");
    snapshots
}

pub fn render(snapshots: &[DaySnapshot], format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(snapshots)),
        OutputFormat::Json => serde_json::to_string_pretty(snapshots),
    }
}

fn render_text(snapshots: &[DaySnapshot]) -> String {
    let mut out = String::new();
    for snapshot in snapshots {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "-------- day {} --------", snapshot.day);
        out.push_str("name, sellIn, quality\n");
        for item in &snapshot.items {
            let _ = writeln!(out, "{item}");
        }
        out.push('\n');
    }
    out
}
