//! Starting inventory text per class

use crate::core::types::ClassName;

/// Preset inventory line for a class, used whenever a character's inventory
/// is empty at derive time (and offered by the UI on class change).
pub fn inventory_preset(class_name: &str) -> Option<&'static str> {
    let preset = match ClassName::parse(class_name)? {
        ClassName::Fighter => "Longsword, Shield, Chain Mail, Backpack",
        ClassName::Rogue => "Dagger, Thieves' Tools, Leather Armor, Cloak",
        ClassName::Wizard => "Spellbook, Wand, Robes, Arcane Focus",
        ClassName::Cleric => "Mace, Holy Symbol, Chain Shirt, Healing Kit",
        ClassName::Hunter => "Bow, Hunting Knife, Hide Armor, Traps",
        ClassName::Bard => "Lute, Leather Armor, Charm Kit, Entertainer's Pack",
    };
    Some(preset)
}
