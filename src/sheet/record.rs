//! The flat character record - persisted and exported verbatim
//!
//! Field names in the serialized form are an external contract shared with
//! older save files; do not rename them. Every field has a default so a
//! partial record loads without failure. Derived fields are written for
//! consumers but recomputed on load.

use crate::attributes::ATTRIBUTE_BASE;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

fn default_level() -> i32 {
    1
}

fn attribute_base() -> i32 {
    ATTRIBUTE_BASE
}

/// Complete derived snapshot of one character
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CharacterRecord {
    #[serde(rename = "Name", default)]
    pub name: String,

    #[serde(rename = "Player Name", default)]
    pub player_name: String,

    #[serde(rename = "Ancestry", default)]
    pub ancestry: String,

    #[serde(rename = "Background", default)]
    pub background: String,

    #[serde(rename = "Class", default)]
    pub class_name: String,

    #[serde(rename = "Subclass", default)]
    pub subclass: String,

    #[serde(rename = "Level", default = "default_level")]
    pub level: i32,

    #[serde(rename = "Might", default = "attribute_base")]
    pub might: i32,

    #[serde(rename = "Agility", default = "attribute_base")]
    pub agility: i32,

    #[serde(rename = "Charisma", default = "attribute_base")]
    pub charisma: i32,

    #[serde(rename = "Intelligence", default = "attribute_base")]
    pub intelligence: i32,

    #[serde(rename = "Prime", default)]
    pub prime: i32,

    #[serde(rename = "Combat Mastery", default)]
    pub combat_mastery: i32,

    #[serde(rename = "Save DC", default)]
    pub save_dc: i32,

    #[serde(rename = "Grit Points", default)]
    pub grit: i32,

    #[serde(rename = "Initiative", default)]
    pub initiative: i32,

    #[serde(rename = "To Hit (Melee)", default)]
    pub melee_hit: i32,

    #[serde(rename = "To Hit (Ranged)", default)]
    pub ranged_hit: i32,

    #[serde(rename = "Spell Check", default)]
    pub spell_check: i32,

    #[serde(rename = "Armor Rating", default)]
    pub armor_rating: i32,

    #[serde(rename = "Skill Slots (INT + 2)", default)]
    pub skill_slots: i32,

    #[serde(rename = "Inventory", default)]
    pub inventory: String,

    /// Serialized as `"Name: value (Tier)"` entries joined by `", "`
    #[serde(rename = "Skills", default)]
    pub skills: String,

    #[serde(rename = "Selected Spells", default)]
    pub selected_spells: Vec<String>,

    /// Spell level -> slot count; empty for non-casters
    #[serde(rename = "Spell Slots", default)]
    pub spell_slots: BTreeMap<u8, u8>,
}

impl CharacterRecord {
    /// File-name key for this character: spaces and `/` become `_`
    pub fn file_stem(&self) -> String {
        sanitize_name(&self.name)
    }
}

/// Sanitize a character name for use as a file stem
pub fn sanitize_name(name: &str) -> String {
    name.replace(' ', "_").replace('/', "_")
}
