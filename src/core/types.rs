//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// One of the four point-buy attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    Might,
    Agility,
    Charisma,
    Intelligence,
}

impl Attribute {
    /// All attributes in display order
    pub const ALL: [Attribute; 4] = [
        Attribute::Might,
        Attribute::Agility,
        Attribute::Charisma,
        Attribute::Intelligence,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Attribute::Might => "Might",
            Attribute::Agility => "Agility",
            Attribute::Charisma => "Charisma",
            Attribute::Intelligence => "Intelligence",
        }
    }

    /// Three-letter abbreviation for sheet rendering
    pub fn abbrev(&self) -> &'static str {
        match self {
            Attribute::Might => "MIG",
            Attribute::Agility => "AGI",
            Attribute::Charisma => "CHA",
            Attribute::Intelligence => "INT",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "Might" => Some(Attribute::Might),
            "Agility" => Some(Attribute::Agility),
            "Charisma" => Some(Attribute::Charisma),
            "Intelligence" => Some(Attribute::Intelligence),
            _ => None,
        }
    }
}

/// Character class enumeration
///
/// Class names arrive as free text from records and the UI; `parse` returns
/// `None` for unrecognized names and every lookup keyed on class degrades to
/// a documented default in that case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassName {
    Fighter,
    Rogue,
    Wizard,
    Cleric,
    Hunter,
    Bard,
}

impl ClassName {
    pub const ALL: [ClassName; 6] = [
        ClassName::Fighter,
        ClassName::Rogue,
        ClassName::Wizard,
        ClassName::Cleric,
        ClassName::Hunter,
        ClassName::Bard,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ClassName::Fighter => "Fighter",
            ClassName::Rogue => "Rogue",
            ClassName::Wizard => "Wizard",
            ClassName::Cleric => "Cleric",
            ClassName::Hunter => "Hunter",
            ClassName::Bard => "Bard",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "Fighter" => Some(ClassName::Fighter),
            "Rogue" => Some(ClassName::Rogue),
            "Wizard" => Some(ClassName::Wizard),
            "Cleric" => Some(ClassName::Cleric),
            "Hunter" => Some(ClassName::Hunter),
            "Bard" => Some(ClassName::Bard),
            _ => None,
        }
    }

    /// Whether this class selects and casts spells
    pub fn is_spellcaster(&self) -> bool {
        matches!(self, ClassName::Wizard | ClassName::Cleric | ClassName::Bard)
    }
}

/// Per-skill proficiency level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TrainingTier {
    #[default]
    None,
    Trained,
    Expert,
}

impl TrainingTier {
    pub const ALL: [TrainingTier; 3] = [TrainingTier::None, TrainingTier::Trained, TrainingTier::Expert];

    /// Flat bonus added to the governing attribute
    pub fn bonus(&self) -> i32 {
        match self {
            TrainingTier::None => 0,
            TrainingTier::Trained => 1,
            TrainingTier::Expert => 2,
        }
    }

    /// Slots consumed against the advisory skill budget
    pub fn slot_cost(&self) -> i32 {
        match self {
            TrainingTier::None => 0,
            TrainingTier::Trained => 1,
            TrainingTier::Expert => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TrainingTier::None => "None",
            TrainingTier::Trained => "Trained",
            TrainingTier::Expert => "Expert",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "None" => Some(TrainingTier::None),
            "Trained" => Some(TrainingTier::Trained),
            "Expert" => Some(TrainingTier::Expert),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_roundtrip() {
        for attr in Attribute::ALL {
            assert_eq!(Attribute::parse(attr.name()), Some(attr));
        }
        assert_eq!(Attribute::parse("Luck"), None);
    }

    #[test]
    fn test_spellcaster_classes() {
        assert!(ClassName::Wizard.is_spellcaster());
        assert!(ClassName::Cleric.is_spellcaster());
        assert!(ClassName::Bard.is_spellcaster());
        assert!(!ClassName::Fighter.is_spellcaster());
        assert!(!ClassName::Rogue.is_spellcaster());
        assert!(!ClassName::Hunter.is_spellcaster());
    }

    #[test]
    fn test_tier_bonuses() {
        assert_eq!(TrainingTier::None.bonus(), 0);
        assert_eq!(TrainingTier::Trained.bonus(), 1);
        assert_eq!(TrainingTier::Expert.bonus(), 2);
    }

    #[test]
    fn test_tier_parse() {
        assert_eq!(TrainingTier::parse("Expert"), Some(TrainingTier::Expert));
        assert_eq!(TrainingTier::parse("Master"), None);
    }
}
