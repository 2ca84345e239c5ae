//! Subcommands and the content options they share.

mod battle;
mod roster;
mod train;

pub use battle::Battle;
pub use roster::Roster;
pub use train::Train;

use std::path::PathBuf;

use anyhow::{Context, Result};
use arena_content::{ConfigLoader, RosterLoader};
use arena_core::{ArchetypeRoster, ArenaConfig, CombatantId, CombatantRecord, ProgressionUpdate};
use arena_runtime::{ArenaService, BattleReport, RuntimeConfig, StdRandOracle};
use clap::Args;

/// Content sources shared by every subcommand.
#[derive(Args, Debug)]
pub struct ContentArgs {
    /// Roster RON file (defaults to the built-in roster)
    #[arg(long, global = true, value_name = "PATH")]
    pub roster: Option<PathBuf>,

    /// Arena tuning TOML file (defaults to the built-in tuning)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl ContentArgs {
    pub fn load_roster(&self) -> Result<ArchetypeRoster> {
        match &self.roster {
            Some(path) => RosterLoader::load(path),
            None => RosterLoader::builtin(),
        }
    }

    pub fn load_config(&self) -> Result<ArenaConfig> {
        match &self.config {
            Some(path) => ConfigLoader::load(path),
            None => ConfigLoader::builtin(),
        }
    }

    pub fn service(&self) -> Result<ArenaService> {
        let roster = self.load_roster()?;
        let arena = self.load_config()?;
        tracing::debug!("Loaded {} archetypes", roster.len());
        Ok(ArenaService::in_memory(
            roster,
            RuntimeConfig::default().with_arena(arena),
        ))
    }
}

/// Registers `archetype` under `id`, then lifts it to `level` if above 1.
pub(crate) fn enlist(
    service: &ArenaService,
    id: CombatantId,
    archetype: &str,
    level: u32,
) -> Result<CombatantRecord> {
    let record = service
        .register(id, archetype)
        .with_context(|| format!("Cannot enlist {archetype}"))?;
    if level <= 1 {
        return Ok(record);
    }
    let record = CombatantRecord::at_level(record.id, record.archetype, level);
    service.repository().save(&record)?;
    Ok(record)
}

pub(crate) fn rng(seed: Option<u64>) -> StdRandOracle {
    match seed {
        Some(seed) => StdRandOracle::seeded(seed),
        None => StdRandOracle::from_entropy(),
    }
}

pub(crate) fn print_report(report: &BattleReport) {
    for entry in &report.log {
        if entry.turn == 0 {
            println!("{}", entry.message);
        } else {
            println!("[{:>3}] {}", entry.turn, entry.message);
        }
    }
    println!();
    for update in &report.progression {
        print_progression(update);
    }
}

fn print_progression(update: &ProgressionUpdate) {
    let level = if update.leveled_up() {
        format!("Lv.{} -> Lv.{}", update.previous_level, update.new_level)
    } else {
        format!("Lv.{}", update.new_level)
    };
    println!(
        "  {}: +{} XP ({} total), {}, intelligence {} -> {}",
        update.combatant_id,
        update.experience_gained,
        update.new_experience,
        level,
        update.previous_intelligence,
        update.new_intelligence
    );
}

pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to encode report")?;
    println!("{json}");
    Ok(())
}
