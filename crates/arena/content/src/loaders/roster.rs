//! Combatant roster loader.

use std::path::Path;

use arena_core::{ArchetypeRoster, CombatantArchetype};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Roster structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterFile {
    pub archetypes: Vec<CombatantArchetype>,
}

/// Loader for archetype rosters from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Roster shipped with the crate.
    pub const BUILTIN: &'static str = include_str!("../../data/roster.ron");

    /// Load a roster from a RON file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read, is not a valid [`RosterFile`], or
    /// names the same archetype twice (case-insensitively).
    pub fn load(path: &Path) -> LoadResult<ArchetypeRoster> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<ArchetypeRoster> {
        let file: RosterFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;
        let roster = ArchetypeRoster::from_archetypes(file.archetypes)
            .map_err(|e| anyhow::anyhow!("Invalid roster: {}", e))?;
        Ok(roster)
    }

    pub fn builtin() -> LoadResult<ArchetypeRoster> {
        Self::parse(Self::BUILTIN)
    }
}

#[cfg(test)]
mod tests {
    use arena_core::CombatStyle;

    use super::*;

    #[test]
    fn builtin_roster_has_twelve_archetypes() {
        let roster = RosterLoader::builtin().unwrap();
        assert_eq!(roster.len(), 12);

        let ace = roster.get("ace").unwrap();
        assert_eq!(ace.max_health, 150);
        assert_eq!(ace.attack, 8);
        assert_eq!(ace.special_move, "1st Strike");
        assert_eq!(ace.intelligence.get(), 50);

        let kuma = roster.get("KUMA").unwrap();
        assert_eq!(kuma.combat_style, CombatStyle::Aggressive);
        assert_eq!(kuma.learning_rate, 3);
    }

    #[test]
    fn intelligence_is_clamped_on_load() {
        let roster = RosterLoader::parse(
            r#"RosterFile(archetypes: [(
                name: "Glitch", max_health: 10, attack: 1, defense: 1, speed: 1,
                intelligence: 400, combat_style: Evasive, special_move: "", learning_rate: 1,
            )])"#,
        )
        .unwrap();
        assert_eq!(roster.get("glitch").unwrap().intelligence.get(), 100);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let entry = r#"(name: "Twin", max_health: 10, attack: 1, defense: 1, speed: 1,
            intelligence: 10, combat_style: Balanced, special_move: "", learning_rate: 1)"#;
        let source = format!("RosterFile(archetypes: [{entry}, {entry}])");
        let err = RosterLoader::parse(&source).unwrap_err();
        assert!(err.to_string().starts_with("Invalid roster"));
    }

    #[test]
    fn malformed_roster_is_reported() {
        let err = RosterLoader::parse("RosterFile(archetypes: 3)").unwrap_err();
        assert!(err.to_string().contains("Failed to parse roster RON"));
    }
}
