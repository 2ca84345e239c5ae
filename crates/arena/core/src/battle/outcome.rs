//! Terminal battle results and experience awards.

use super::state::{Combatant, Side};
use crate::progression::{CombatantId, battle_xp_reward};

/// Result for one side of a finished battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SideOutcome {
    pub id: CombatantId,
    pub won: bool,
    /// Level reward plus damage experience (a quarter of it for the loser).
    pub xp_awarded: u64,
    pub damage_dealt: u32,
    pub effective_moves: Vec<String>,
    pub ineffective_moves: Vec<String>,
}

impl SideOutcome {
    /// Scales the awarded experience, e.g. for training multipliers.
    pub fn with_xp_multiplier(mut self, multiplier: u64) -> Self {
        self.xp_awarded = self.xp_awarded.saturating_mul(multiplier);
        self
    }
}

/// Terminal result of a battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleOutcome {
    pub winner: Side,
    pub turns: u32,
    pub left: SideOutcome,
    pub right: SideOutcome,
}

impl BattleOutcome {
    pub fn side(&self, side: Side) -> &SideOutcome {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn winner_outcome(&self) -> &SideOutcome {
        self.side(self.winner)
    }

    pub fn loser_outcome(&self) -> &SideOutcome {
        self.side(self.winner.opponent())
    }
}

/// Experience for `me` after fighting `opponent`.
///
/// # Formula
///
/// ```text
/// reward = battle_xp_reward(my_level, opponent_level, won)
/// xp     = won ? reward + damage_xp : reward + floor(damage_xp / 4)
/// ```
pub(crate) fn side_outcome(me: &Combatant, opponent: &Combatant, won: bool) -> SideOutcome {
    let reward = battle_xp_reward(me.level, opponent.level, won);
    let damage_xp = if won {
        me.tally.damage_xp
    } else {
        me.tally.damage_xp / 4
    };

    SideOutcome {
        id: me.id.clone(),
        won,
        xp_awarded: reward + damage_xp,
        damage_dealt: me.tally.damage_dealt,
        effective_moves: me.tally.effective_moves.clone(),
        ineffective_moves: me.tally.ineffective_moves.clone(),
    }
}
