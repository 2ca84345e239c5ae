//! End-to-end battle service over the pure rules.
//!
//! [`ArenaService`] loads records from a [`CombatantRepository`], plays the
//! battle to its conclusion, folds the results back into both records,
//! persists them, then publishes progression and battle events. The rules
//! themselves stay in `arena-core`; this layer only sequences and logs.

use arena_core::{
    ArchetypeRoster, Battle, BattleLogEntry, BattleOutcome, CombatantId, CombatantRecord,
    RngOracle, StatBoostUpdate, StatKind,
};
use chrono::{DateTime, Utc};

use crate::config::RuntimeConfig;
use crate::energy::{DailyEnergy, EnergyGate};
use crate::error::{Result, RuntimeError};
use crate::events::{ArenaEvent, EventBus};
use crate::report::{BattleReport, TrainingReport};
use crate::repository::{CombatantRepository, InMemoryCombatantRepo};
use crate::training::TrainingDifficulty;

/// Runs battles and training sessions against persisted combatants.
pub struct ArenaService {
    roster: ArchetypeRoster,
    repository: Box<dyn CombatantRepository>,
    events: EventBus,
    config: RuntimeConfig,
}

impl ArenaService {
    pub fn new(
        roster: ArchetypeRoster,
        repository: Box<dyn CombatantRepository>,
        config: RuntimeConfig,
    ) -> Self {
        let events = EventBus::with_capacity(config.event_buffer_size);
        Self {
            roster,
            repository,
            events,
            config,
        }
    }

    /// Service backed by an empty [`InMemoryCombatantRepo`].
    pub fn in_memory(roster: ArchetypeRoster, config: RuntimeConfig) -> Self {
        Self::new(roster, Box::new(InMemoryCombatantRepo::new()), config)
    }

    pub fn roster(&self) -> &ArchetypeRoster {
        &self.roster
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn repository(&self) -> &dyn CombatantRepository {
        self.repository.as_ref()
    }

    /// Full energy pool sized by the runtime config.
    pub fn energy_pool(&self, now: DateTime<Utc>) -> DailyEnergy {
        DailyEnergy::new(self.config.max_energy, self.config.energy_refill_period, now)
    }

    /// Creates a level-1 record for `id` from the roster archetype `archetype`.
    pub fn register(&self, id: impl Into<CombatantId>, archetype: &str) -> Result<CombatantRecord> {
        let id = id.into();
        if self.repository.exists(&id) {
            return Err(RuntimeError::DuplicateCombatant { id });
        }
        let archetype = self.roster.get(archetype)?.clone();
        let record = CombatantRecord::new(id, archetype);
        self.repository.save(&record)?;
        tracing::info!(
            "Registered {} as {} (Lv.{})",
            record.id,
            record.archetype.name,
            record.level
        );
        Ok(record)
    }

    pub fn load(&self, id: &CombatantId) -> Result<CombatantRecord> {
        self.repository
            .load(id)?
            .ok_or_else(|| RuntimeError::unknown_combatant(id))
    }

    /// Spends one of `id`'s stat points on `stat`.
    pub fn allocate_stat_point(&self, id: &CombatantId, stat: StatKind) -> Result<StatBoostUpdate> {
        let mut record = self.load(id)?;
        let update = record.allocate_stat_point(stat).inspect_err(|err| {
            tracing::warn!("Stat allocation rejected for {}: {}", id, err);
        })?;
        self.repository.save(&record)?;
        tracing::debug!(
            "{} boosted {} to {} ({} points left)",
            id,
            stat,
            update.new_value,
            update.remaining_points
        );
        self.events.publish(ArenaEvent::StatBoost(update.clone()));
        Ok(update)
    }

    /// Plays a freeform battle between two registered combatants and saves
    /// both records. Costs no energy.
    pub fn run_battle<O: RngOracle + ?Sized>(
        &self,
        left: &CombatantId,
        right: &CombatantId,
        rng: &mut O,
        now: DateTime<Utc>,
    ) -> Result<BattleReport> {
        if left == right {
            return Err(RuntimeError::SelfMatch { id: left.clone() });
        }
        let mut left_record = self.load(left)?;
        let mut right_record = self.load(right)?;

        let (outcome, log) = self.fight(&left_record, &right_record, rng)?;

        let timestamp = now.timestamp();
        let left_update = left_record.apply_battle_result(&outcome.left, right, timestamp);
        let right_update = right_record.apply_battle_result(&outcome.right, left, timestamp);
        self.repository.save(&left_record)?;
        self.repository.save(&right_record)?;

        let report = BattleReport {
            left: left.clone(),
            right: right.clone(),
            outcome,
            log,
            progression: vec![left_update, right_update],
            concluded_at: now,
        };
        self.publish_report(&report);
        Ok(report)
    }

    /// Plays a training battle against a generated opponent.
    ///
    /// Energy is reserved before the battle; a shortfall leaves the trainee
    /// untouched and a battle that never concludes refunds the cost. Only
    /// the trainee is persisted. A win multiplies its
    /// experience by the difficulty's multiplier; a loss earns none.
    pub fn run_training<O, G>(
        &self,
        trainee: &CombatantId,
        opponent_archetype: &str,
        difficulty: TrainingDifficulty,
        energy: &mut G,
        rng: &mut O,
        now: DateTime<Utc>,
    ) -> Result<TrainingReport>
    where
        O: RngOracle + ?Sized,
        G: EnergyGate + ?Sized,
    {
        let mut record = self.load(trainee)?;
        let archetype = self.roster.get(opponent_archetype)?.clone();

        let cost = difficulty.energy_cost();
        let energy_remaining = energy.try_reserve(cost, now).inspect_err(|err| {
            tracing::warn!("Training rejected for {}: {}", trainee, err);
        })?;
        tracing::info!(
            "{} starts {} training ({} energy, {} left)",
            trainee,
            difficulty,
            cost,
            energy_remaining
        );

        let opponent_id = CombatantId::new(format!(
            "training-{}-{}",
            difficulty,
            archetype.name.to_ascii_lowercase()
        ));
        let opponent =
            CombatantRecord::at_level(opponent_id.clone(), archetype, difficulty.opponent_level());

        let (mut outcome, log) = self.fight(&record, &opponent, rng).inspect_err(|_| {
            energy.refund(cost);
            tracing::warn!("{} training aborted, {} energy refunded", trainee, cost);
        })?;

        let xp_multiplier = if outcome.left.won {
            difficulty.xp_multiplier()
        } else {
            0
        };
        outcome.left = outcome.left.with_xp_multiplier(xp_multiplier);

        let update = record.apply_battle_result(&outcome.left, &opponent_id, now.timestamp());
        self.repository.save(&record)?;

        let battle = BattleReport {
            left: trainee.clone(),
            right: opponent_id,
            outcome,
            log,
            progression: vec![update],
            concluded_at: now,
        };
        self.publish_report(&battle);

        Ok(TrainingReport {
            difficulty,
            energy_spent: cost,
            energy_remaining,
            xp_multiplier,
            battle,
        })
    }

    /// Plays `left` against `right` until one falls or the turn limit hits.
    fn fight<O: RngOracle + ?Sized>(
        &self,
        left: &CombatantRecord,
        right: &CombatantRecord,
        rng: &mut O,
    ) -> Result<(BattleOutcome, Vec<BattleLogEntry>)> {
        let mut battle = Battle::new(left.into(), right.into(), self.config.arena.clone());
        battle.start()?;
        tracing::info!(
            "Battle started: {} (Lv.{}) vs {} (Lv.{})",
            left.id,
            left.level,
            right.id,
            right.level
        );

        let limit = self.config.turn_limit;
        while battle.turn() < limit {
            let Some(summary) = battle.advance_turn(rng) else {
                break;
            };
            tracing::debug!(
                "Turn {}: {} chose {} ({} events)",
                summary.turn,
                summary.actor,
                summary.decision.action,
                summary.events.len()
            );
        }

        let Some(outcome) = battle.outcome().cloned() else {
            tracing::warn!(
                "Battle {} vs {} still running after {} turns",
                left.id,
                right.id,
                limit
            );
            return Err(RuntimeError::TurnLimitExceeded { limit });
        };
        tracing::info!(
            "Battle concluded after {} turns: {} wins",
            outcome.turns,
            outcome.winner_outcome().id
        );
        Ok((outcome, battle.log().to_vec()))
    }

    fn publish_report(&self, report: &BattleReport) {
        for update in &report.progression {
            tracing::debug!(
                "{} earned {} XP",
                update.combatant_id,
                update.experience_gained
            );
            if update.leveled_up() {
                tracing::info!(
                    "{} reached level {} ({} XP)",
                    update.combatant_id,
                    update.new_level,
                    update.new_experience
                );
            }
            self.events.publish(ArenaEvent::Progression(update.clone()));
        }
        self.events
            .publish(ArenaEvent::BattleConcluded(Box::new(report.clone())));
    }
}
