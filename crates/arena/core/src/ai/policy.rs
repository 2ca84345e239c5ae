//! Intelligence-driven action policy.

use super::tier::BehaviorTier;
use crate::battle::CombatantState;
use crate::config::ArenaConfig;
use crate::env::RngOracle;
use crate::stats::{BattleStats, CombatStyle};

/// Action the AI wants to take this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum CombatAction {
    Attack,
    Special,
    Counter,
    Evade,
}

/// Why the AI switched style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StyleReason {
    /// Own HP fell below the danger line.
    ProtectHealth,
    /// The enemy just whiffed an attack.
    ExploitOpening,
    /// The combo reached the tier's cap.
    SustainCombo,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleAdjustment {
    pub style: CombatStyle,
    pub reason: StyleReason,
}

/// Structured AI output for one turn.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decision {
    pub action: CombatAction,
    pub style_adjustment: Option<StyleAdjustment>,
    /// Execution quality in `[0, 1]`; drives the narration adverb.
    pub effectiveness: f64,
}

/// Proposes at most one style change.
///
/// Checked in order: low health → Defensive, enemy vulnerable → Aggressive,
/// combo at the tier cap → Technical. A rule only matches when the current
/// style differs from its target. Consumes no randomness.
pub fn style_adjustment(
    stats: &BattleStats,
    state: &CombatantState,
    tier: &BehaviorTier,
) -> Option<StyleAdjustment> {
    let current = state.current_style;
    let (style, reason) = if state.is_low_health(stats.max_health)
        && current != CombatStyle::Defensive
    {
        (CombatStyle::Defensive, StyleReason::ProtectHealth)
    } else if state.enemy_vulnerable && current != CombatStyle::Aggressive {
        (CombatStyle::Aggressive, StyleReason::ExploitOpening)
    } else if state.combo.hits() >= tier.combo_max && current != CombatStyle::Technical {
        (CombatStyle::Technical, StyleReason::SustainCombo)
    } else {
        return None;
    };

    Some(StyleAdjustment { style, reason })
}

/// Decides the next move for the combatant described by `stats` and `state`.
///
/// Draw order: one effectiveness draw, then at most one roll per rule that
/// needs it.
///
/// # Rules (first match wins)
///
/// ```text
/// effectiveness = min(intelligence / 100 + U × 0.3, 1)
/// 1. special gauge ≥ special_threshold × 100        → Special
/// 2. enemy vulnerable and U < effectiveness         → Counter
/// 3. own HP < 30% and U < effectiveness             → Evade
/// 4. otherwise                                      → Attack
/// ```
pub fn decide<R: RngOracle + ?Sized>(
    stats: &BattleStats,
    state: &CombatantState,
    rng: &mut R,
) -> Decision {
    let tier = BehaviorTier::for_intelligence(stats.intelligence);
    let style_adjustment = style_adjustment(stats, state, tier);

    let effectiveness = (stats.intelligence.as_f64() / 100.0 + rng.next_unit() * 0.3).min(1.0);

    let action = if state.special.is_at_least(tier.special_threshold * ArenaConfig::GAUGE_MAX) {
        CombatAction::Special
    } else if state.enemy_vulnerable && rng.chance(effectiveness) {
        CombatAction::Counter
    } else if state.is_low_health(stats.max_health) && rng.chance(effectiveness) {
        CombatAction::Evade
    } else {
        CombatAction::Attack
    };

    Decision {
        action,
        style_adjustment,
        effectiveness,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ArenaConfig;
    use crate::env::{PcgRng, SequenceRng};
    use crate::meter::Gauge;
    use crate::stats::CombatantArchetype;

    fn setup(intelligence: i64) -> (BattleStats, CombatantState) {
        let stats = BattleStats::base(
            &CombatantArchetype::new("ai", 100, 5, 5, 5).with_intelligence(intelligence),
        );
        let state = CombatantState::fresh(&stats, &ArenaConfig::default());
        (stats, state)
    }

    #[test]
    fn charged_gauge_triggers_special_per_tier() {
        let (stats, mut state) = setup(90);
        state.special = Gauge::new(50.0);
        let decision = decide(&stats, &state, &mut SequenceRng::constant(0.99));
        assert_eq!(decision.action, CombatAction::Special);

        let (stats, mut state) = setup(20);
        state.special = Gauge::new(79.0);
        let decision = decide(&stats, &state, &mut SequenceRng::constant(0.99));
        assert_eq!(decision.action, CombatAction::Attack);
    }

    #[test]
    fn vulnerable_enemy_invites_counter() {
        let (stats, mut state) = setup(50);
        state.enemy_vulnerable = true;
        // effectiveness = 0.5 + 0.0 × 0.3 = 0.5; counter roll 0.2 < 0.5
        let mut rng = SequenceRng::new(vec![0.0, 0.2]);
        let decision = decide(&stats, &state, &mut rng);
        assert_eq!(decision.action, CombatAction::Counter);
        assert_eq!(decision.effectiveness, 0.5);
        assert_eq!(rng.consumed(), 2);
        assert_eq!(
            decision.style_adjustment,
            Some(StyleAdjustment {
                style: CombatStyle::Aggressive,
                reason: StyleReason::ExploitOpening
            })
        );
    }

    #[test]
    fn low_health_evades_and_turns_defensive() {
        let (stats, mut state) = setup(70);
        state.hp = 29;
        let mut rng = SequenceRng::new(vec![0.5, 0.1]);
        let decision = decide(&stats, &state, &mut rng);
        assert_eq!(decision.action, CombatAction::Evade);
        assert_eq!(
            decision.style_adjustment.map(|a| a.style),
            Some(CombatStyle::Defensive)
        );
    }

    #[test]
    fn failed_rolls_fall_back_to_attack() {
        let (stats, mut state) = setup(10);
        state.hp = 10;
        state.enemy_vulnerable = true;
        let mut rng = SequenceRng::new(vec![0.0, 0.9, 0.9]);
        let decision = decide(&stats, &state, &mut rng);
        assert_eq!(decision.action, CombatAction::Attack);
        assert_eq!(rng.consumed(), 3);
    }

    #[test]
    fn no_style_change_when_already_in_target_style() {
        let (stats, mut state) = setup(50);
        state.hp = 5;
        state.current_style = CombatStyle::Defensive;
        let decision = decide(&stats, &state, &mut SequenceRng::constant(0.9));
        assert_eq!(decision.style_adjustment, None);

        // Already defensive, so the next rule gets its turn.
        state.enemy_vulnerable = true;
        let decision = decide(&stats, &state, &mut SequenceRng::constant(0.9));
        assert_eq!(
            decision.style_adjustment.map(|a| a.style),
            Some(CombatStyle::Aggressive)
        );
    }

    #[test]
    fn long_combo_shifts_to_technical() {
        let (stats, mut state) = setup(50);
        for _ in 0..3 {
            state.combo.register_hit(5);
        }
        let decision = decide(&stats, &state, &mut SequenceRng::constant(0.9));
        assert_eq!(
            decision.style_adjustment.map(|a| a.reason),
            Some(StyleReason::SustainCombo)
        );
    }

    #[test]
    fn effectiveness_is_capped_at_one() {
        let (stats, state) = setup(100);
        let mut rng = PcgRng::new(11);
        for _ in 0..200 {
            let decision = decide(&stats, &state, &mut rng);
            assert!((0.0..=1.0).contains(&decision.effectiveness));
            assert!(decision.effectiveness >= 1.0 - f64::EPSILON);
        }
    }

    #[test]
    fn smarter_agents_counter_more_often() {
        let count = |intelligence| {
            let (stats, mut state) = setup(intelligence);
            state.enemy_vulnerable = true;
            let mut rng = PcgRng::new(2024);
            (0..2_000)
                .filter(|_| decide(&stats, &state, &mut rng).action == CombatAction::Counter)
                .count()
        };
        assert!(count(90) > count(10));
    }
}
