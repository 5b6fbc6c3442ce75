//! Roster (one side's creatures and inventory)

use super::combatant::Combatant;
use super::item::Item;
use crate::error::{BattleError, SelectionKind};
use crate::rules::items::{apply_item, ItemOutcome};

/// Up to six combatants (in send-out order) plus consumable items
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawRoster"))]
pub struct Roster {
    members: Vec<Combatant>,
    items: Vec<Item>,
}

/// Unchecked wire form; converted through [`Roster::from_members`]
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawRoster {
    members: Vec<Combatant>,
    #[serde(default)]
    items: Vec<Item>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawRoster> for Roster {
    type Error = BattleError;

    fn try_from(raw: RawRoster) -> Result<Self, Self::Error> {
        let mut roster = Roster::from_members(raw.members)?;
        roster.items = raw.items;
        Ok(roster)
    }
}

impl Roster {
    pub const CAPACITY: usize = 6;

    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from members, failing if there are more than six
    pub fn from_members(members: impl IntoIterator<Item = Combatant>) -> Result<Self, BattleError> {
        let mut roster = Self::new();
        for member in members {
            roster.add_member(member)?;
        }
        Ok(roster)
    }

    pub fn add_member(&mut self, member: Combatant) -> Result<(), BattleError> {
        if self.members.len() >= Self::CAPACITY {
            return Err(BattleError::RosterFull {
                capacity: Self::CAPACITY,
            });
        }
        self.members.push(member);
        Ok(())
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn members(&self) -> &[Combatant] {
        &self.members
    }

    pub fn member(&self, index: usize) -> Option<&Combatant> {
        self.members.get(index)
    }

    pub fn member_mut(&mut self, index: usize) -> Option<&mut Combatant> {
        self.members.get_mut(index)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Index of the first non-defeated member (send-out priority)
    pub fn first_alive(&self) -> Option<usize> {
        self.members.iter().position(Combatant::is_alive)
    }

    /// Every member is at 0 HP (vacuously true for an empty roster)
    pub fn is_defeated(&self) -> bool {
        self.members.iter().all(Combatant::is_defeated)
    }

    pub fn alive_count(&self) -> usize {
        self.members.iter().filter(|m| m.is_alive()).count()
    }

    pub fn defeated_count(&self) -> usize {
        self.members.len() - self.alive_count()
    }

    /// Indices of non-defeated members other than `except`
    pub fn bench(&self, except: usize) -> impl Iterator<Item = (usize, &Combatant)> {
        self.members
            .iter()
            .enumerate()
            .filter(move |(idx, m)| *idx != except && m.is_alive())
    }

    /// Validate a member index without touching state
    pub fn check_member(&self, index: usize) -> Result<&Combatant, BattleError> {
        self.members
            .get(index)
            .ok_or_else(|| BattleError::invalid(SelectionKind::Member, index, self.members.len()))
    }

    /// Validate an item index without touching state
    pub fn check_item(&self, index: usize) -> Result<&Item, BattleError> {
        self.items
            .get(index)
            .ok_or_else(|| BattleError::invalid(SelectionKind::Item, index, self.items.len()))
    }

    /// Apply an inventory item to a member, consuming it.
    ///
    /// Out-of-range indices are rejected before anything is mutated.
    pub fn use_item(&mut self, item_index: usize, member_index: usize) -> Result<ItemOutcome, BattleError> {
        self.check_item(item_index)?;
        self.check_member(member_index)?;

        let item = self.items.remove(item_index);
        let outcome = apply_item(&mut self.members[member_index], &item);
        Ok(outcome)
    }

    /// Heal everyone to full and clear statuses and stages
    pub fn reset(&mut self) {
        for member in &mut self.members {
            member.restore();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BaseStats, Element};

    fn member(name: &str, hp: u32) -> Combatant {
        let mut c = Combatant::new(name, BaseStats::new(100, 50, 50, 50, 50, 50), Element::Normal, None);
        c.hp = hp;
        c
    }

    fn create_test_roster() -> Roster {
        let mut roster = Roster::from_members([
            member("Alpha", 0),
            member("Bravo", 80),
            member("Charlie", 100),
        ])
        .unwrap();
        roster.add_item(Item::healing("Potion", 20));
        roster.add_item(Item::revive("Revive"));
        roster
    }

    #[test]
    fn test_capacity() {
        let mut roster = Roster::new();
        for i in 0..6 {
            roster.add_member(member(&format!("M{i}"), 100)).unwrap();
        }
        let err = roster.add_member(member("Seventh", 100)).unwrap_err();
        assert!(matches!(err, BattleError::RosterFull { capacity: 6 }));
        assert_eq!(roster.len(), 6);
    }

    #[test]
    fn test_first_alive_skips_defeated() {
        let roster = create_test_roster();
        assert_eq!(roster.first_alive(), Some(1));
        assert_eq!(roster.alive_count(), 2);
        assert_eq!(roster.defeated_count(), 1);
    }

    #[test]
    fn test_all_six_defeated() {
        let roster = Roster::from_members((0..6).map(|i| member(&format!("M{i}"), 0))).unwrap();
        assert!(roster.is_defeated());
        assert_eq!(roster.first_alive(), None);
    }

    #[test]
    fn test_one_survivor_is_not_defeated() {
        let roster = Roster::from_members(
            (0..6).map(|i| member(&format!("M{i}"), if i == 5 { 1 } else { 0 })),
        )
        .unwrap();
        assert!(!roster.is_defeated());
        assert_eq!(roster.first_alive(), Some(5));
    }

    #[test]
    fn test_bench() {
        let roster = create_test_roster();
        let bench: Vec<_> = roster.bench(1).map(|(i, _)| i).collect();
        assert_eq!(bench, vec![2]);
    }

    #[test]
    fn test_use_item_consumes() {
        let mut roster = create_test_roster();
        let outcome = roster.use_item(0, 1).unwrap();
        assert!(outcome.had_effect);
        assert_eq!(roster.member(1).unwrap().hp, 100);
        assert_eq!(roster.items().len(), 1);
        assert_eq!(roster.items()[0].name, "Revive");

        roster.use_item(0, 0).unwrap();
        assert_eq!(roster.member(0).unwrap().hp, 50);
        assert!(roster.items().is_empty());
    }

    #[test]
    fn test_use_item_invalid_index_mutates_nothing() {
        let mut roster = create_test_roster();
        let before = roster.clone();

        let err = roster.use_item(5, 1).unwrap_err();
        assert!(err.is_recoverable());
        assert_eq!(roster, before);

        let err = roster.use_item(0, 9).unwrap_err();
        assert!(matches!(
            err,
            BattleError::InvalidSelection {
                kind: SelectionKind::Member,
                index: 9,
                available: 3
            }
        ));
        assert_eq!(roster, before);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_enforces_capacity() {
        let roster = create_test_roster();
        let json = serde_json::to_string(&roster).unwrap();
        let back: Roster = serde_json::from_str(&json).unwrap();
        assert_eq!(back, roster);

        let seven: Vec<Combatant> = (0..7).map(|i| member(&format!("M{i}"), 100)).collect();
        let json = serde_json::json!({ "members": seven, "items": [] }).to_string();
        let err = serde_json::from_str::<Roster>(&json).unwrap_err();
        assert!(err.to_string().contains("Roster is full (6 members)"));
    }

    #[test]
    fn test_reset() {
        let mut roster = create_test_roster();
        roster.reset();
        assert!(roster.members().iter().all(|m| m.hp == m.max_hp()));
        assert!(!roster.is_defeated());
    }
}
