//! Show the gear set of a build or gear file

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::path::PathBuf;

use planner_content::{BuildLoader, GearLoader};
use planner_core::{EquippedItem, ItemSlot};

/// Show the gear set of a build or gear file
#[derive(Parser)]
pub struct Gear {
    /// Build file (TOML) or gear file (RON)
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Hide empty slots
    #[arg(long)]
    equipped_only: bool,
}

impl Gear {
    pub fn execute(self) -> Result<()> {
        let is_ron = self
            .file
            .extension()
            .is_some_and(|extension| extension == "ron");
        let gear = if is_ron {
            GearLoader::load(&self.file)
        } else {
            BuildLoader::load(&self.file).map(|build| build.gear)
        }
        .with_context(|| format!("Failed to load gear from {}", self.file.display()))?;

        println!(
            "{} {} ({}/{} slots)",
            style("Gear:").bold().cyan(),
            self.file.display(),
            gear.equipped_count(),
            gear.iter().count()
        );
        println!();

        for (slot, item) in gear.iter() {
            match item {
                Some(item) => println!("  {}", format_item(slot, item)),
                None if !self.equipped_only => {
                    println!("  {:<10} {}", slot.to_string(), style("(empty)").dim());
                }
                None => {}
            }
        }

        Ok(())
    }
}

fn format_item(slot: ItemSlot, item: &EquippedItem) -> String {
    let mut line = format!("{:<10} {}", slot.to_string(), style(item.item().0).bold());
    if let Some(enchant) = item.enchant() {
        line.push_str(&format!("  enchant {}", enchant.0));
    }
    if !item.gems().is_empty() {
        let gems: Vec<String> = item
            .gems()
            .iter()
            .map(|gem| gem.map_or_else(|| "-".to_owned(), |gem| gem.0.to_string()))
            .collect();
        line.push_str(&format!("  gems [{}]", gems.join(", ")));
    }
    line
}
