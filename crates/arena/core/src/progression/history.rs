//! Bounded battle log attached to each combatant.

use arrayvec::ArrayVec;

use super::CombatantId;
use crate::config::ArenaConfig;

/// Win or loss from one combatant's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum BattleResult {
    Win,
    Loss,
}

impl BattleResult {
    pub fn from_won(won: bool) -> Self {
        if won { Self::Win } else { Self::Loss }
    }

    pub fn is_win(self) -> bool {
        matches!(self, Self::Win)
    }
}

/// One finished battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleRecord {
    pub opponent_id: CombatantId,
    pub result: BattleResult,
    pub effective_moves: Vec<String>,
    pub ineffective_moves: Vec<String>,
    /// Seconds since the Unix epoch, supplied by the caller.
    pub timestamp: i64,
}

/// Most recent battles, oldest first, evicting the oldest past capacity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleHistory {
    entries: ArrayVec<BattleRecord, { ArenaConfig::MAX_BATTLE_HISTORY }>,
}

impl BattleHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: BattleRecord) {
        if self.entries.is_full() {
            self.entries.remove(0);
        }
        self.entries.push(record);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<&BattleRecord> {
        self.entries.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BattleRecord> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(n: i64) -> BattleRecord {
        BattleRecord {
            opponent_id: CombatantId::new(format!("opponent-{n}")),
            result: BattleResult::from_won(n % 2 == 0),
            effective_moves: vec![],
            ineffective_moves: vec![],
            timestamp: n,
        }
    }

    #[test]
    fn keeps_only_the_last_ten() {
        let mut history = BattleHistory::new();
        for n in 0..13 {
            history.push(record(n));
        }
        assert_eq!(history.len(), 10);
        let stamps: Vec<i64> = history.iter().map(|r| r.timestamp).collect();
        assert_eq!(stamps, (3..13).collect::<Vec<_>>());
        assert_eq!(history.latest().map(|r| r.timestamp), Some(12));
    }
}
