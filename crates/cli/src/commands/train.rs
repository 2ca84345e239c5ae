//! Training battle command.

use anyhow::Result;
use arena_core::CombatantId;
use arena_runtime::TrainingDifficulty;
use clap::Parser;

use super::{ContentArgs, enlist, print_json, print_report, rng};

/// Run a training battle that costs energy
#[derive(Parser, Debug)]
pub struct Train {
    /// Archetype to train
    #[arg(long)]
    pub combatant: String,

    /// Archetype of the generated sparring partner
    #[arg(long)]
    pub opponent: String,

    /// easy, medium, hard or expert
    #[arg(long, default_value_t = TrainingDifficulty::Easy)]
    pub difficulty: TrainingDifficulty,

    /// Level of the trainee
    #[arg(long, default_value_t = 1)]
    pub level: u32,

    /// Energy available before training (defaults to a full pool)
    #[arg(long)]
    pub energy: Option<u32>,

    /// Seed for a reproducible battle
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the full report as JSON
    #[arg(long)]
    pub json: bool,
}

impl Train {
    pub fn execute(self, content: &ContentArgs) -> Result<()> {
        let service = content.service()?;
        let now = chrono::Utc::now();

        let id = CombatantId::new(self.combatant.to_ascii_lowercase());
        let trainee = enlist(&service, id, &self.combatant, self.level)?;

        let mut energy = service.energy_pool(now);
        if let Some(current) = self.energy {
            energy = energy.with_current(current);
        }

        let report = service.run_training(
            &trainee.id,
            &self.opponent,
            self.difficulty,
            &mut energy,
            &mut rng(self.seed),
            now,
        )?;

        if self.json {
            return print_json(&report);
        }

        print_report(&report.battle);
        println!();
        println!(
            "{} training: spent {} energy ({} left), XP x{}",
            report.difficulty, report.energy_spent, report.energy_remaining, report.xp_multiplier
        );
        Ok(())
    }
}
