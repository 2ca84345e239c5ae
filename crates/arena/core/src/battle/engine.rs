//! Turn state machine that drives a battle from start to finish.

use super::outcome::{BattleOutcome, side_outcome};
use super::state::{BattleEntrant, Combatant, Side};
use crate::ai::{CombatAction, Decision, decide};
use crate::combat::{
    ExchangeModes, HackKind, HackOutcome, SpecialOutcome, apply_damage, apply_hack,
    perform_special, resolve_counter, resolve_exchange,
};
use crate::config::ArenaConfig;
use crate::env::RngOracle;
use crate::error::{ArenaError, ErrorSeverity};
use crate::meter::{
    GaugeKind, InsufficientGauge, MeterAction, MeterGains, SpecialPower, max_combo_hits,
};
use crate::stats::CombatStyle;

/// Lifecycle of a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum BattlePhase {
    Idle,
    InProgress,
    Concluded,
}

/// Rejected side command. The battle is unchanged whenever one is returned.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommandError {
    #[error("battle is {phase}, not in progress")]
    NotInProgress { phase: BattlePhase },

    #[error("battle is already in progress")]
    AlreadyStarted,

    #[error(transparent)]
    InsufficientGauge(#[from] InsufficientGauge),

    #[error("no gas tokens left")]
    GasTokensExhausted,

    #[error("hype already used {limit} times")]
    HypeExhausted { limit: u8 },
}

impl ArenaError for CommandError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotInProgress { .. } | Self::AlreadyStarted => ErrorSeverity::Validation,
            Self::InsufficientGauge(_) | Self::GasTokensExhausted | Self::HypeExhausted { .. } => {
                ErrorSeverity::Recoverable
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotInProgress { .. } => "not_in_progress",
            Self::AlreadyStarted => "already_started",
            Self::InsufficientGauge(inner) => inner.error_code(),
            Self::GasTokensExhausted => "gas_tokens_exhausted",
            Self::HypeExhausted { .. } => "hype_exhausted",
        }
    }
}

/// Structured record of what happened during a turn.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnEvent {
    StyleChanged { side: Side, style: CombatStyle },
    Hit { attacker: Side, damage: u32, combo: u32 },
    Evaded { defender: Side },
    Countered { side: Side, damage: u32 },
    CounterEvaded { side: Side },
    Special { side: Side, outcome: SpecialOutcome },
    SpecialUnavailable { side: Side },
    Guard { side: Side },
    Defeated { side: Side },
}

/// Summary returned by [`Battle::advance_turn`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnSummary {
    pub turn: u32,
    pub actor: Side,
    pub decision: Decision,
    pub events: Vec<TurnEvent>,
    pub lines: Vec<String>,
    pub concluded: bool,
}

/// One narration line in the battle log.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleLogEntry {
    /// 0 for lines written outside a turn (start, commands, result).
    pub turn: u32,
    pub message: String,
}

#[derive(Default)]
struct TurnContext {
    events: Vec<TurnEvent>,
    lines: Vec<String>,
}

impl TurnContext {
    fn line(&mut self, message: String) {
        self.lines.push(message);
    }
}

/// Two-combatant battle orchestrator.
///
/// Owns both combatants' state for the lifetime of the battle. Turns strictly
/// alternate, left first; the battle concludes as soon as either side's HP
/// reaches zero.
#[derive(Clone, Debug)]
pub struct Battle {
    config: ArenaConfig,
    phase: BattlePhase,
    turn: u32,
    next_actor: Side,
    combatants: [Combatant; 2],
    log: Vec<BattleLogEntry>,
    outcome: Option<BattleOutcome>,
}

impl Battle {
    pub fn new(left: BattleEntrant, right: BattleEntrant, config: ArenaConfig) -> Self {
        let combatants = [Combatant::new(left, &config), Combatant::new(right, &config)];
        Self {
            config,
            phase: BattlePhase::Idle,
            turn: 0,
            next_actor: Side::Left,
            combatants,
            log: Vec::new(),
            outcome: None,
        }
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    /// Turns taken so far.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn next_actor(&self) -> Side {
        self.next_actor
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        &self.combatants[side.index()]
    }

    pub fn log(&self) -> &[BattleLogEntry] {
        &self.log
    }

    pub fn outcome(&self) -> Option<&BattleOutcome> {
        self.outcome.as_ref()
    }

    pub fn is_concluded(&self) -> bool {
        self.phase == BattlePhase::Concluded
    }

    /// Resets both sides to full HP, empty gauges and no combo, then opens
    /// the battle. Also serves as a rematch after a conclusion.
    pub fn start(&mut self) -> Result<(), CommandError> {
        if self.phase == BattlePhase::InProgress {
            return Err(CommandError::AlreadyStarted);
        }
        for combatant in &mut self.combatants {
            combatant.reset(&self.config);
        }
        self.phase = BattlePhase::InProgress;
        self.turn = 0;
        self.next_actor = Side::Left;
        self.outcome = None;
        self.log.clear();

        let message = format!(
            "{} (Lv.{}) faces {} (Lv.{})!",
            self.combatants[0].name(),
            self.combatants[0].level,
            self.combatants[1].name(),
            self.combatants[1].level,
        );
        self.push_log(0, message);
        Ok(())
    }

    /// Plays the next turn. Returns `None` unless the battle is in progress.
    ///
    /// Random draws happen in a fixed order: the AI decision first, then the
    /// evasion roll and, after an evasion, the counter's evasion roll.
    pub fn advance_turn<R: RngOracle + ?Sized>(&mut self, rng: &mut R) -> Option<TurnSummary> {
        if self.phase != BattlePhase::InProgress {
            return None;
        }

        self.turn += 1;
        let turn = self.turn;
        let actor_side = self.next_actor;
        let mut ctx = TurnContext::default();

        let decision = {
            let (actor, defender) = self.pair_mut(actor_side);
            actor.state.guarding = false;

            let decision = decide(&actor.stats, &actor.state, rng);
            if let Some(adjustment) = decision.style_adjustment {
                actor.state.current_style = adjustment.style;
                ctx.events.push(TurnEvent::StyleChanged {
                    side: actor_side,
                    style: adjustment.style,
                });
            }
            ctx.lines.extend(decision.narrate(actor.name()));

            match decision.action {
                CombatAction::Attack => {
                    strike(actor, defender, actor_side, None, rng, &mut ctx);
                }
                CombatAction::Counter => {
                    strike(actor, defender, actor_side, Some(MeterAction::Counter), rng, &mut ctx);
                }
                CombatAction::Special => {
                    if fire_special(actor, defender, actor_side, &mut ctx).is_err() {
                        ctx.events.push(TurnEvent::SpecialUnavailable { side: actor_side });
                        ctx.line(format!(
                            "{}'s special is not charged and falls back to an attack.",
                            actor.name()
                        ));
                        strike(actor, defender, actor_side, None, rng, &mut ctx);
                    }
                }
                CombatAction::Evade => guard(actor, actor_side, &mut ctx),
            }
            decision
        };

        let concluded = self.settle(actor_side, &mut ctx);
        if !concluded {
            self.next_actor = actor_side.opponent();
        }
        for line in &ctx.lines {
            self.push_log(turn, line.clone());
        }
        if concluded {
            self.log_result();
        }

        Some(TurnSummary {
            turn,
            actor: actor_side,
            decision,
            events: ctx.events,
            lines: ctx.lines,
            concluded,
        })
    }

    /// Toggles the player-controlled defensive stance for `side`.
    pub fn set_defense_mode(&mut self, side: Side, enabled: bool) -> Result<(), CommandError> {
        self.ensure_in_progress()?;
        self.combatants[side.index()].state.defense_mode = enabled;
        Ok(())
    }

    /// Adds the configured hype gain to `side`'s special gauge.
    pub fn hype_up(&mut self, side: Side) -> Result<f64, CommandError> {
        self.ensure_in_progress()?;
        let limit = self.config.hype_uses_per_battle;
        let gain = f64::from(self.config.hype_gain);
        let combatant = &mut self.combatants[side.index()];
        if combatant.state.hype_uses >= limit {
            return Err(CommandError::HypeExhausted { limit });
        }
        combatant.state.hype_uses += 1;
        let level = combatant.state.special.fill(gain);
        let message = format!("{} gets hyped up! Special gauge at {level:.0}%.", combatant.name());
        self.push_log(0, message);
        Ok(level)
    }

    /// Spends a gas token and hack gauge on a boost for `side`.
    pub fn use_hack(&mut self, side: Side, kind: HackKind) -> Result<HackOutcome, CommandError> {
        self.ensure_in_progress()?;
        let combatant = &mut self.combatants[side.index()];
        if combatant.state.gas_tokens == 0 {
            return Err(CommandError::GasTokensExhausted);
        }
        combatant.state.hack.spend(GaugeKind::Hack, kind.gauge_cost())?;
        combatant.state.gas_tokens -= 1;
        let outcome = apply_hack(kind, &mut combatant.stats, &mut combatant.state.hp);
        let message = format!("{} runs a {kind} hack!", combatant.name());
        self.push_log(0, message);
        Ok(outcome)
    }

    /// Fires `side`'s special move on demand. May end the battle.
    pub fn use_special(&mut self, side: Side) -> Result<SpecialOutcome, CommandError> {
        self.ensure_in_progress()?;
        let mut ctx = TurnContext::default();
        let outcome = {
            let (actor, defender) = self.pair_mut(side);
            fire_special(actor, defender, side, &mut ctx)?
        };
        let concluded = self.settle(side, &mut ctx);
        for line in ctx.lines {
            self.push_log(0, line);
        }
        if concluded {
            self.log_result();
        }
        Ok(outcome)
    }

    fn ensure_in_progress(&self) -> Result<(), CommandError> {
        if self.phase == BattlePhase::InProgress {
            Ok(())
        } else {
            Err(CommandError::NotInProgress { phase: self.phase })
        }
    }

    fn pair_mut(&mut self, actor: Side) -> (&mut Combatant, &mut Combatant) {
        let [left, right] = &mut self.combatants;
        match actor {
            Side::Left => (left, right),
            Side::Right => (right, left),
        }
    }

    /// Concludes the battle if either side is down. The defender falling
    /// takes precedence, so a knockout always credits the acting side.
    fn settle(&mut self, actor: Side, ctx: &mut TurnContext) -> bool {
        let defender = actor.opponent();
        let winner = if self.combatant(defender).state.is_defeated() {
            actor
        } else if self.combatant(actor).state.is_defeated() {
            defender
        } else {
            return false;
        };

        let loser = winner.opponent();
        ctx.events.push(TurnEvent::Defeated { side: loser });
        self.phase = BattlePhase::Concluded;

        let [left, right] = &self.combatants;
        self.outcome = Some(BattleOutcome {
            winner,
            turns: self.turn,
            left: side_outcome(left, right, winner == Side::Left),
            right: side_outcome(right, left, winner == Side::Right),
        });
        true
    }

    fn log_result(&mut self) {
        let Some(outcome) = &self.outcome else {
            return;
        };
        let winner = self.combatant(outcome.winner).name();
        let loser = self.combatant(outcome.winner.opponent()).name();
        // Experience stays out of the log; callers may still scale it.
        let lines = [
            format!("{loser} is knocked out!"),
            format!("{winner} wins after {} turns!", outcome.turns),
        ];
        for line in lines {
            self.push_log(0, line);
        }
    }

    fn push_log(&mut self, turn: u32, message: String) {
        self.log.push(BattleLogEntry { turn, message });
    }
}

/// Resolves one attack from `actor`, including the evade-and-counter path.
///
/// `bonus` adds that action's meter fill on a landed hit (counters).
fn strike<R: RngOracle + ?Sized>(
    actor: &mut Combatant,
    defender: &mut Combatant,
    actor_side: Side,
    bonus: Option<MeterAction>,
    rng: &mut R,
    ctx: &mut TurnContext,
) {
    let move_name = match bonus {
        Some(MeterAction::Counter) => "counter",
        _ => "attack",
    };
    let modes = ExchangeModes::new(actor.state.is_defending(), defender.state.is_defending());
    let combo_before = actor.state.combo.hits();
    let result = resolve_exchange(&actor.stats, &defender.stats, modes, combo_before, rng);

    if result.evaded {
        let defender_side = actor_side.opponent();
        ctx.events.push(TurnEvent::Evaded {
            defender: defender_side,
        });
        ctx.line(format!("{} evades the {move_name}!", defender.name()));

        let evade_gains = MeterGains::for_action(
            defender.stats.intelligence,
            MeterAction::Evade,
            defender.state.is_defending(),
        );
        fill(defender, evade_gains);

        let counter = resolve_counter(&defender.stats, &actor.stats, modes, rng);
        if counter.landed() {
            actor.state.hp = apply_damage(actor.state.hp, counter.damage);
            fill(defender, evade_gains.scaled(0.5));
            defender.tally.record_hit("counter", counter.damage);
            ctx.events.push(TurnEvent::Countered {
                side: defender_side,
                damage: counter.damage,
            });
            ctx.line(format!(
                "{} counter attacks for {} damage!",
                defender.name(),
                counter.damage
            ));
        } else {
            defender.tally.record_miss("counter");
            ctx.events.push(TurnEvent::CounterEvaded { side: actor_side });
            ctx.line(format!("{} slips the counter!", actor.name()));
        }

        actor.tally.record_miss(move_name);
        actor.state.last_move_effective = false;
        actor.state.combo.break_chain();
        actor.state.enemy_vulnerable = true;
        actor.state.enemy_staggered = false;
        return;
    }

    defender.state.hp = apply_damage(defender.state.hp, result.damage);

    let mut gains = MeterGains::on_hit(combo_before);
    if let Some(action) = bonus {
        let extra = MeterGains::for_action(actor.stats.intelligence, action, actor.state.is_defending());
        gains.special += extra.special;
        gains.hack += extra.hack;
    }
    fill(actor, gains);
    actor.tally.record_hit(move_name, result.damage);

    let cap = max_combo_hits(actor.stats.intelligence);
    let hits = actor.state.combo.register_hit(cap);
    actor.state.last_move_effective = true;
    actor.state.enemy_vulnerable = false;
    actor.state.enemy_staggered = hits >= cap;

    ctx.events.push(TurnEvent::Hit {
        attacker: actor_side,
        damage: result.damage,
        combo: hits,
    });
    ctx.line(format!("{} hits for {} damage!", actor.name(), result.damage));
    if combo_before > 1 {
        ctx.line(format!("{} keeps a {combo_before}x combo going!", actor.name()));
    }
}

/// Fires the actor's special move if the gauge allows it.
fn fire_special(
    actor: &mut Combatant,
    defender: &mut Combatant,
    actor_side: Side,
    ctx: &mut TurnContext,
) -> Result<SpecialOutcome, InsufficientGauge> {
    let power = SpecialPower::from_gauge(actor.state.special).ok_or(InsufficientGauge {
        gauge: GaugeKind::Special,
        required: SpecialPower::READY_THRESHOLD,
        available: actor.state.special.value(),
    })?;

    let outcome = perform_special(&mut actor.stats, power);
    actor.state.special.reset();
    defender.state.hp = apply_damage(defender.state.hp, outcome.damage);
    actor.tally.record_hit(&outcome.special_move.to_string(), outcome.damage);

    ctx.line(format!(
        "{} unleashes {} ({power} power) for {} damage!",
        actor.name(),
        outcome.special_move,
        outcome.damage
    ));
    ctx.events.push(TurnEvent::Special {
        side: actor_side,
        outcome: outcome.clone(),
    });
    Ok(outcome)
}

/// The AI's evade action: raise a guard until the next own turn.
fn guard(actor: &mut Combatant, actor_side: Side, ctx: &mut TurnContext) {
    actor.state.guarding = true;
    let gains = MeterGains::for_action(
        actor.stats.intelligence,
        MeterAction::Guard,
        actor.state.defense_mode,
    );
    fill(actor, gains);
    ctx.events.push(TurnEvent::Guard { side: actor_side });
    ctx.line(format!("{} braces for the next blow.", actor.name()));
}

fn fill(combatant: &mut Combatant, gains: MeterGains) {
    combatant.state.special.fill(gains.special);
    combatant.state.hack.fill(gains.hack);
}
