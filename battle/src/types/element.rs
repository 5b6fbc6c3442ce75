//! Elemental types and the effectiveness chart

/// Elemental tag carried by creatures and moves (18 elements)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Element {
    Normal = 0,
    Fire = 1,
    Water = 2,
    Electric = 3,
    Grass = 4,
    Ice = 5,
    Fighting = 6,
    Poison = 7,
    Ground = 8,
    Flying = 9,
    Psychic = 10,
    Bug = 11,
    Rock = 12,
    Ghost = 13,
    Dragon = 14,
    Dark = 15,
    Steel = 16,
    Fairy = 17,
}

impl Element {
    /// Number of elements in the closed set
    pub const COUNT: usize = 18;

    /// Every element, in chart order
    pub const ALL: [Element; Element::COUNT] = [
        Element::Normal,
        Element::Fire,
        Element::Water,
        Element::Electric,
        Element::Grass,
        Element::Ice,
        Element::Fighting,
        Element::Poison,
        Element::Ground,
        Element::Flying,
        Element::Psychic,
        Element::Bug,
        Element::Rock,
        Element::Ghost,
        Element::Dragon,
        Element::Dark,
        Element::Steel,
        Element::Fairy,
    ];

    pub fn all() -> &'static [Element] {
        &Self::ALL
    }

    /// Damage multiplier of this (attacking) element against one defending element.
    ///
    /// Pairs without a curated entry are neutral (1.0).
    pub fn effectiveness(self, defender: Element) -> f32 {
        EFFECTIVENESS[self as usize][defender as usize]
    }

    /// Multiplier against every element of a (possibly dual-typed) defender
    pub fn effectiveness_against(self, defenders: &[Element]) -> f32 {
        defenders.iter().map(|d| self.effectiveness(*d)).product()
    }

    /// Parse an element name (case-insensitive)
    pub fn from_name(s: &str) -> Option<Self> {
        let name = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|e| e.as_str().eq_ignore_ascii_case(name))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Element::Normal => "Normal",
            Element::Fire => "Fire",
            Element::Water => "Water",
            Element::Electric => "Electric",
            Element::Grass => "Grass",
            Element::Ice => "Ice",
            Element::Fighting => "Fighting",
            Element::Poison => "Poison",
            Element::Ground => "Ground",
            Element::Flying => "Flying",
            Element::Psychic => "Psychic",
            Element::Bug => "Bug",
            Element::Rock => "Rock",
            Element::Ghost => "Ghost",
            Element::Dragon => "Dragon",
            Element::Dark => "Dark",
            Element::Steel => "Steel",
            Element::Fairy => "Fairy",
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

const IMMUNE: f32 = 0.0;
const RESISTED: f32 = 0.5;
const SUPER: f32 = 2.0;

mod matchups {
    use super::Element::{self, *};
    use super::{IMMUNE, RESISTED, SUPER};

    /// Curated (attacker, defender, multiplier) entries. Anything absent is neutral.
    #[rustfmt::skip]
    pub(super) const MATCHUPS: &[(Element, Element, f32)] = &[
        (Normal, Rock, RESISTED), (Normal, Ghost, IMMUNE), (Normal, Steel, RESISTED),

        (Fire, Fire, RESISTED), (Fire, Water, RESISTED), (Fire, Grass, SUPER), (Fire, Ice, SUPER),
        (Fire, Bug, SUPER), (Fire, Rock, RESISTED), (Fire, Dragon, RESISTED), (Fire, Steel, SUPER),

        (Water, Fire, SUPER), (Water, Water, RESISTED), (Water, Grass, RESISTED),
        (Water, Ground, SUPER), (Water, Rock, SUPER), (Water, Dragon, RESISTED),

        (Electric, Water, SUPER), (Electric, Electric, RESISTED), (Electric, Grass, RESISTED),
        (Electric, Ground, IMMUNE), (Electric, Flying, SUPER), (Electric, Dragon, RESISTED),

        (Grass, Fire, RESISTED), (Grass, Water, SUPER), (Grass, Grass, RESISTED),
        (Grass, Poison, RESISTED), (Grass, Ground, SUPER), (Grass, Flying, RESISTED),
        (Grass, Bug, RESISTED), (Grass, Rock, SUPER), (Grass, Dragon, RESISTED),
        (Grass, Steel, RESISTED),

        (Ice, Fire, RESISTED), (Ice, Water, RESISTED), (Ice, Grass, SUPER), (Ice, Ice, RESISTED),
        (Ice, Ground, SUPER), (Ice, Flying, SUPER), (Ice, Dragon, SUPER), (Ice, Steel, RESISTED),

        (Fighting, Normal, SUPER), (Fighting, Ice, SUPER), (Fighting, Poison, RESISTED),
        (Fighting, Flying, RESISTED), (Fighting, Psychic, RESISTED), (Fighting, Bug, RESISTED),
        (Fighting, Rock, SUPER), (Fighting, Ghost, IMMUNE), (Fighting, Dark, SUPER),
        (Fighting, Steel, SUPER), (Fighting, Fairy, RESISTED),

        (Poison, Grass, SUPER), (Poison, Poison, RESISTED), (Poison, Ground, RESISTED),
        (Poison, Rock, RESISTED), (Poison, Ghost, RESISTED), (Poison, Steel, IMMUNE),
        (Poison, Fairy, SUPER),

        (Ground, Fire, SUPER), (Ground, Electric, SUPER), (Ground, Grass, RESISTED),
        (Ground, Poison, SUPER), (Ground, Flying, IMMUNE), (Ground, Bug, RESISTED),
        (Ground, Rock, SUPER), (Ground, Steel, SUPER),

        (Flying, Electric, RESISTED), (Flying, Grass, SUPER), (Flying, Fighting, SUPER),
        (Flying, Bug, SUPER), (Flying, Rock, RESISTED), (Flying, Steel, RESISTED),

        (Psychic, Fighting, SUPER), (Psychic, Poison, SUPER), (Psychic, Psychic, RESISTED),
        (Psychic, Dark, IMMUNE), (Psychic, Steel, RESISTED),

        (Bug, Fire, RESISTED), (Bug, Grass, SUPER), (Bug, Fighting, RESISTED),
        (Bug, Poison, RESISTED), (Bug, Flying, RESISTED), (Bug, Psychic, SUPER),
        (Bug, Ghost, RESISTED), (Bug, Dark, SUPER), (Bug, Steel, RESISTED), (Bug, Fairy, RESISTED),

        (Rock, Fire, SUPER), (Rock, Ice, SUPER), (Rock, Fighting, RESISTED),
        (Rock, Ground, RESISTED), (Rock, Flying, SUPER), (Rock, Bug, SUPER), (Rock, Steel, RESISTED),

        (Ghost, Normal, IMMUNE), (Ghost, Psychic, SUPER), (Ghost, Ghost, SUPER), (Ghost, Dark, RESISTED),

        (Dragon, Dragon, SUPER), (Dragon, Steel, RESISTED), (Dragon, Fairy, IMMUNE),

        (Dark, Fighting, RESISTED), (Dark, Psychic, SUPER), (Dark, Ghost, SUPER),
        (Dark, Dark, RESISTED), (Dark, Fairy, RESISTED),

        (Steel, Fire, RESISTED), (Steel, Water, RESISTED), (Steel, Electric, RESISTED),
        (Steel, Ice, SUPER), (Steel, Rock, SUPER), (Steel, Steel, RESISTED), (Steel, Fairy, SUPER),

        (Fairy, Fire, RESISTED), (Fairy, Fighting, SUPER), (Fairy, Poison, RESISTED),
        (Fairy, Dragon, SUPER), (Fairy, Dark, SUPER), (Fairy, Steel, RESISTED),
    ];
}

use matchups::MATCHUPS;

/// Dense lookup grid folded from [`MATCHUPS`] at compile time.
/// Row = attacking element, column = defending element.
static EFFECTIVENESS: [[f32; Element::COUNT]; Element::COUNT] = build_chart(MATCHUPS);

const fn build_chart(entries: &[(Element, Element, f32)]) -> [[f32; Element::COUNT]; Element::COUNT] {
    let mut chart = [[1.0; Element::COUNT]; Element::COUNT];
    let mut i = 0;
    while i < entries.len() {
        let (attack, defend, multiplier) = entries[i];
        chart[attack as usize][defend as usize] = multiplier;
        i += 1;
    }
    chart
}
