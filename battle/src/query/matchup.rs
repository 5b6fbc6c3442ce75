//! Element matchup helpers

use crate::types::Element;

/// Check if the defender takes more than 1x from any of the attacking elements
pub fn is_weak_to_any(defender: &[Element], attacking: &[Element]) -> bool {
    attacking
        .iter()
        .any(|e| e.effectiveness_against(defender) > 1.0)
}

/// Check if the defender takes less than 1x from every attacking element
pub fn resists_all(defender: &[Element], attacking: &[Element]) -> bool {
    if attacking.is_empty() {
        return false;
    }
    attacking
        .iter()
        .all(|e| e.effectiveness_against(defender) < 1.0)
}

pub fn is_immune_to(defender: &[Element], attacking: Element) -> bool {
    attacking.effectiveness_against(defender) == 0.0
}

/// Elements that hit the defender super effectively
pub fn weaknesses(defender: &[Element]) -> Vec<Element> {
    matching(defender, |eff| eff > 1.0)
}

/// Elements the defender resists (0 < effectiveness < 1)
pub fn resistances(defender: &[Element]) -> Vec<Element> {
    matching(defender, |eff| eff > 0.0 && eff < 1.0)
}

pub fn immunities(defender: &[Element]) -> Vec<Element> {
    matching(defender, |eff| eff == 0.0)
}

fn matching(defender: &[Element], keep: impl Fn(f32) -> bool) -> Vec<Element> {
    Element::all()
        .iter()
        .copied()
        .filter(|e| keep(e.effectiveness_against(defender)))
        .collect()
}
