//! Roster listing command.

use anyhow::Result;
use clap::Parser;

use super::{ContentArgs, print_json};

/// List the available archetypes
#[derive(Parser, Debug)]
pub struct Roster {
    /// Print the roster as JSON
    #[arg(long)]
    pub json: bool,
}

impl Roster {
    pub fn execute(self, content: &ContentArgs) -> Result<()> {
        let roster = content.load_roster()?;

        if self.json {
            let archetypes: Vec<_> = roster.iter().collect();
            return print_json(&archetypes);
        }

        println!(
            "{:<10} {:>4} {:>4} {:>4} {:>4} {:>4}  {:<10} SPECIAL",
            "NAME", "HP", "ATK", "DEF", "SPD", "INT", "STYLE"
        );
        for archetype in roster.iter() {
            println!(
                "{:<10} {:>4} {:>4} {:>4} {:>4} {:>4}  {:<10} {}",
                archetype.name,
                archetype.max_health,
                archetype.attack,
                archetype.defense,
                archetype.speed,
                archetype.intelligence.get(),
                archetype.combat_style.to_string(),
                archetype.special_move
            );
        }
        Ok(())
    }
}
