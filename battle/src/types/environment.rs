//! Battle environment (element boost applied to matching moves)

use super::element::Element;

/// Read-only damage modifier for moves of one element
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Environment {
    /// Element whose moves are boosted, `None` for a neutral field
    pub boosted: Option<Element>,

    pub multiplier: f32,
}

impl Environment {
    pub const PRESET_MULTIPLIER: f32 = 1.5;

    /// No boosted element, multiplier 1.0
    pub const fn neutral() -> Self {
        Self {
            boosted: None,
            multiplier: 1.0,
        }
    }

    pub const fn boosting(element: Element, multiplier: f32) -> Self {
        Self {
            boosted: Some(element),
            multiplier,
        }
    }

    /// Multiplier applied to a move of `element`
    pub fn boost_for(&self, element: Element) -> f32 {
        match self.boosted {
            Some(boosted) if boosted == element => self.multiplier,
            _ => 1.0,
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::neutral()
    }
}

impl From<Terrain> for Environment {
    fn from(terrain: Terrain) -> Self {
        terrain.environment()
    }
}

/// Named environment presets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    #[default]
    Normal,
    GrassField,
    WaterSurface,
    Cave,
    Volcano,
    ElectricTerrain,
    PsychicTerrain,
}

impl Terrain {
    pub const ALL: [Terrain; 7] = [
        Terrain::Normal,
        Terrain::GrassField,
        Terrain::WaterSurface,
        Terrain::Cave,
        Terrain::Volcano,
        Terrain::ElectricTerrain,
        Terrain::PsychicTerrain,
    ];

    pub fn boosted_element(&self) -> Option<Element> {
        match self {
            Terrain::Normal => None,
            Terrain::GrassField => Some(Element::Grass),
            Terrain::WaterSurface => Some(Element::Water),
            Terrain::Cave => Some(Element::Rock),
            Terrain::Volcano => Some(Element::Fire),
            Terrain::ElectricTerrain => Some(Element::Electric),
            Terrain::PsychicTerrain => Some(Element::Psychic),
        }
    }

    pub fn environment(&self) -> Environment {
        match self.boosted_element() {
            Some(element) => Environment::boosting(element, Environment::PRESET_MULTIPLIER),
            None => Environment::neutral(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Terrain::Normal => "Normal Field",
            Terrain::GrassField => "Grassy Field",
            Terrain::WaterSurface => "Water Surface",
            Terrain::Cave => "Cave",
            Terrain::Volcano => "Volcano",
            Terrain::ElectricTerrain => "Electric Terrain",
            Terrain::PsychicTerrain => "Psychic Terrain",
        }
    }

    pub fn description(&self) -> String {
        let env = self.environment();
        match env.boosted {
            Some(element) => format!(
                "{} - {} moves are {:.0}% stronger",
                self.as_str(),
                element,
                (env.multiplier - 1.0) * 100.0
            ),
            None => format!("{} - no element is favoured", self.as_str()),
        }
    }
}

impl std::fmt::Display for Terrain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
