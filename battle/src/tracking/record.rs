//! RecordLog - running totals from the player's point of view

use crate::engine::BattleResult;
use crate::types::SideId;

/// Statistics accumulated over any number of battles.
///
/// A battle without a winner counts as a loss.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RecordLog {
    pub battles: u32,
    pub wins: u32,
    pub losses: u32,

    // === Damage ===
    pub damage_dealt: u64,
    pub damage_taken: u64,

    // === Creatures ===
    /// Enemy members knocked out
    pub creatures_defeated: u32,
    /// Own members that fainted
    pub creatures_lost: u32,

    pub items_used: u32,
    pub critical_hits: u32,
    pub status_effects_caused: u32,

    // === Progression ===
    pub experience_gained: u64,
    pub level_ups: u32,
    pub evolutions: u32,
}

impl RecordLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one battle outcome into the totals
    pub fn record(&mut self, result: &BattleResult) {
        self.battles += 1;
        if result.player_won() {
            self.wins += 1;
        } else {
            self.losses += 1;
        }

        let mine = result.tally(SideId::Player);
        self.damage_dealt += mine.damage_dealt;
        self.damage_taken += mine.damage_taken;
        self.creatures_defeated += mine.knocked_out;
        self.creatures_lost += mine.fainted;
        self.items_used += mine.items_used;
        self.critical_hits += mine.critical_hits;
        self.status_effects_caused += mine.status_inflicted;

        // Awards only belong to the player when the player won
        if result.player_won() {
            self.experience_gained += u64::from(result.experience_awarded);
            self.level_ups += result.level_ups();
            self.evolutions += result.evolutions() as u32;
        }

        tracing::debug!(battles = self.battles, wins = self.wins, losses = self.losses, "record updated");
    }

    /// Fraction of battles won (0.0 with no battles)
    pub fn win_rate(&self) -> f32 {
        if self.battles == 0 {
            return 0.0;
        }
        self.wins as f32 / self.battles as f32
    }
}

impl std::fmt::Display for RecordLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Battles: {} ({} won, {} lost, {:.1}% win rate)",
            self.battles,
            self.wins,
            self.losses,
            self.win_rate() * 100.0
        )?;
        writeln!(f, "Damage dealt: {}  taken: {}", self.damage_dealt, self.damage_taken)?;
        writeln!(f, "Defeated: {}  lost: {}", self.creatures_defeated, self.creatures_lost)?;
        writeln!(
            f,
            "Items used: {}  critical hits: {}  status effects caused: {}",
            self.items_used, self.critical_hits, self.status_effects_caused
        )?;
        write!(
            f,
            "Experience gained: {}  level ups: {}  evolutions: {}",
            self.experience_gained, self.level_ups, self.evolutions
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{ExperienceAward, SideTally};

    fn win() -> BattleResult {
        BattleResult {
            winner: Some(SideId::Player),
            turns: 3,
            player: SideTally {
                damage_dealt: 120,
                damage_taken: 30,
                knocked_out: 2,
                critical_hits: 1,
                ..SideTally::default()
            },
            enemy: SideTally {
                damage_dealt: 30,
                damage_taken: 120,
                fainted: 2,
                ..SideTally::default()
            },
            experience_awarded: 200,
            awards: vec![ExperienceAward {
                member: 0,
                name: "Ivysaur".to_string(),
                amount: 200,
                levels_gained: 1,
                evolved_from: Some("Bulbasaur".to_string()),
            }],
        }
    }

    #[test]
    fn test_record_win() {
        let mut log = RecordLog::new();
        log.record(&win());
        assert_eq!(log.battles, 1);
        assert_eq!(log.wins, 1);
        assert_eq!(log.damage_dealt, 120);
        assert_eq!(log.creatures_defeated, 2);
        assert_eq!(log.experience_gained, 200);
        assert_eq!(log.level_ups, 1);
        assert_eq!(log.evolutions, 1);
    }

    #[test]
    fn test_draw_counts_as_loss() {
        let mut log = RecordLog::new();
        log.record(&BattleResult::default());
        assert_eq!(log.losses, 1);
        assert_eq!(log.wins, 0);
        assert_eq!(log.win_rate(), 0.0);
    }

    #[test]
    fn test_enemy_experience_is_not_ours() {
        let mut log = RecordLog::new();
        let mut loss = win();
        loss.winner = Some(SideId::Enemy);
        log.record(&loss);
        assert_eq!(log.losses, 1);
        assert_eq!(log.experience_gained, 0);
        assert_eq!(log.evolutions, 0);
    }

    #[test]
    fn test_win_rate() {
        let mut log = RecordLog::new();
        log.record(&win());
        log.record(&win());
        log.record(&BattleResult::default());
        log.record(&win());
        assert!((log.win_rate() - 0.75).abs() < f32::EPSILON);
        assert!(log.to_string().starts_with("Battles: 4 (3 won, 1 lost, 75.0% win rate)"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let mut log = RecordLog::new();
        log.record(&win());
        let json = serde_json::to_string(&log).unwrap();
        let back: RecordLog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, log);
    }
}
