//! Freeform battle command.

use anyhow::Result;
use arena_core::CombatantId;
use clap::Parser;

use super::{ContentArgs, enlist, print_json, print_report, rng};

/// Run a freeform battle between two archetypes
#[derive(Parser, Debug)]
pub struct Battle {
    /// Archetype on the left (acts first)
    #[arg(long)]
    pub left: String,

    /// Archetype on the right
    #[arg(long)]
    pub right: String,

    /// Level of the left combatant
    #[arg(long, default_value_t = 1)]
    pub left_level: u32,

    /// Level of the right combatant
    #[arg(long, default_value_t = 1)]
    pub right_level: u32,

    /// Seed for a reproducible battle
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the full report as JSON
    #[arg(long)]
    pub json: bool,
}

impl Battle {
    pub fn execute(self, content: &ContentArgs) -> Result<()> {
        let service = content.service()?;

        let left_id = CombatantId::new(self.left.to_ascii_lowercase());
        let mut right_id = CombatantId::new(self.right.to_ascii_lowercase());
        if right_id == left_id {
            right_id = CombatantId::new(format!("{}-2", right_id));
        }

        let left = enlist(&service, left_id, &self.left, self.left_level)?;
        let right = enlist(&service, right_id, &self.right, self.right_level)?;

        let report = service.run_battle(
            &left.id,
            &right.id,
            &mut rng(self.seed),
            chrono::Utc::now(),
        )?;

        if self.json {
            print_json(&report)
        } else {
            print_report(&report);
            Ok(())
        }
    }
}
