//! Spell selection, availability filtering, and slot tables

use crate::core::types::ClassName;
use crate::spells::catalog::{spell_by_name, SpellDefinition, SpellSchool, SPELL_CATALOG};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Highest spell level a caster of the given character level can learn:
/// `min(3, ceil((level + 1) / 2))`.
pub fn max_spell_level(level: i32) -> u8 {
    let gate = (level.max(1) + 2) / 2;
    gate.min(3) as u8
}

/// Schools a caster class draws from
pub fn allowed_schools(class: ClassName) -> &'static [SpellSchool] {
    match class {
        ClassName::Wizard => &[
            SpellSchool::Evocation,
            SpellSchool::Transmutation,
            SpellSchool::Abjuration,
            SpellSchool::Conjuration,
            SpellSchool::Illusion,
        ],
        ClassName::Cleric => &[
            SpellSchool::Evocation,
            SpellSchool::Abjuration,
            SpellSchool::Divination,
            SpellSchool::Enchantment,
        ],
        ClassName::Bard => &[
            SpellSchool::Enchantment,
            SpellSchool::Illusion,
            SpellSchool::Divination,
            SpellSchool::Transmutation,
        ],
        _ => &[],
    }
}

/// Spells a character of this class and level may learn, sorted by name.
/// Empty for non-casters and unrecognized classes.
pub fn available_spells(class_name: &str, level: i32) -> Vec<&'static SpellDefinition> {
    let Some(class) = ClassName::parse(class_name) else {
        return Vec::new();
    };
    if !class.is_spellcaster() {
        return Vec::new();
    }
    let schools = allowed_schools(class);
    let gate = max_spell_level(level);
    let mut spells: Vec<_> = SPELL_CATALOG
        .iter()
        .filter(|spell| spell.level <= gate && schools.contains(&spell.school))
        .collect();
    spells.sort_by_key(|spell| spell.name);
    spells
}

/// Spell slots per spell level for a caster of the given character level.
/// Step table for levels 1-5, ceiling for 6 and above; empty for
/// non-casters.
pub fn spell_slots(class_name: &str, level: i32) -> BTreeMap<u8, u8> {
    let is_caster = ClassName::parse(class_name).is_some_and(|c| c.is_spellcaster());
    if !is_caster {
        return BTreeMap::new();
    }
    let slots: &[(u8, u8)] = match level {
        ..=1 => &[(0, 2), (1, 1)],
        2 => &[(0, 2), (1, 2)],
        3 => &[(0, 3), (1, 2), (2, 1)],
        4 => &[(0, 3), (1, 3), (2, 2)],
        5 => &[(0, 4), (1, 3), (2, 2), (3, 1)],
        _ => &[(0, 4), (1, 4), (2, 3), (3, 2)],
    };
    slots.iter().copied().collect()
}

/// A character's chosen spells, in selection order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellBook {
    selected: Vec<String>,
}

impl SpellBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// Add a spell by name. Idempotent; insertion order is preserved.
    pub fn add_spell(&mut self, name: &str) {
        if !self.selected.iter().any(|s| s == name) {
            self.selected.push(name.to_string());
        }
    }

    /// Remove a spell by name. No-op if absent.
    pub fn remove_spell(&mut self, name: &str) {
        self.selected.retain(|s| s != name);
    }

    /// Replace the selection verbatim (used when restoring a saved character)
    pub fn restore(&mut self, names: Vec<String>) {
        self.selected = names;
    }

    /// Selected spells grouped by catalog level, keys ascending. Names not
    /// present in the catalog are skipped.
    pub fn selected_by_level(&self) -> BTreeMap<u8, Vec<&'static SpellDefinition>> {
        let mut grouped: BTreeMap<u8, Vec<&'static SpellDefinition>> = BTreeMap::new();
        for name in &self.selected {
            if let Some(spell) = spell_by_name(name) {
                grouped.entry(spell.level).or_default().push(spell);
            }
        }
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_spell_level_gate() {
        assert_eq!(max_spell_level(1), 1);
        assert_eq!(max_spell_level(2), 2);
        assert_eq!(max_spell_level(3), 2);
        assert_eq!(max_spell_level(4), 3);
        assert_eq!(max_spell_level(5), 3);
        // Capped at 3 from level 5 on.
        assert_eq!(max_spell_level(9), 3);
    }

    #[test]
    fn test_wizard_level_3_availability() {
        let spells = available_spells("Wizard", 3);
        // Gate is level 2: no level-3 spells appear.
        assert!(spells.iter().all(|s| s.level <= 2));
        // Wizard schools exclude Divination and Enchantment.
        assert!(spells.iter().all(|s| {
            s.school != SpellSchool::Divination && s.school != SpellSchool::Enchantment
        }));
        // Sorted alphabetically.
        let names: Vec<_> = spells.iter().map(|s| s.name).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert!(names.contains(&"Scorching Ray"));
        assert!(!names.contains(&"Fireball"));
        assert!(!names.contains(&"Guidance"));
    }

    #[test]
    fn test_cleric_schools() {
        let spells = available_spells("Cleric", 10);
        assert!(spells.iter().any(|s| s.name == "Guidance"));
        assert!(spells.iter().any(|s| s.name == "Hold Person"));
        assert!(!spells.iter().any(|s| s.name == "Invisibility"));
    }

    #[test]
    fn test_non_caster_has_no_spells() {
        assert!(available_spells("Fighter", 10).is_empty());
        assert!(available_spells("Warlock", 10).is_empty());
    }

    #[test]
    fn test_slot_step_table() {
        assert_eq!(spell_slots("Wizard", 1), [(0, 2), (1, 1)].into());
        assert_eq!(spell_slots("Wizard", 3), [(0, 3), (1, 2), (2, 1)].into());
        assert_eq!(spell_slots("Wizard", 5), [(0, 4), (1, 3), (2, 2), (3, 1)].into());
        // Ceiling table from level 6 on.
        assert_eq!(spell_slots("Wizard", 6), [(0, 4), (1, 4), (2, 3), (3, 2)].into());
        assert_eq!(spell_slots("Wizard", 10), spell_slots("Wizard", 6));
    }

    #[test]
    fn test_non_caster_has_no_slots() {
        assert!(spell_slots("Rogue", 5).is_empty());
        assert!(spell_slots("", 5).is_empty());
    }

    #[test]
    fn test_add_remove_idempotent() {
        let mut book = SpellBook::new();
        book.add_spell("Fireball");
        book.add_spell("Light");
        book.add_spell("Fireball");
        assert_eq!(book.selected(), ["Fireball", "Light"]);

        book.remove_spell("Fireball");
        book.remove_spell("Fireball");
        assert_eq!(book.selected(), ["Light"]);
    }

    #[test]
    fn test_selected_by_level_groups_ascending() {
        let mut book = SpellBook::new();
        book.add_spell("Fireball");
        book.add_spell("Light");
        book.add_spell("Shield");
        book.add_spell("Forgotten Lore"); // not in catalog, skipped

        let grouped = book.selected_by_level();
        let levels: Vec<_> = grouped.keys().copied().collect();
        assert_eq!(levels, vec![0, 1, 3]);
        assert_eq!(grouped[&0][0].name, "Light");
        assert_eq!(grouped[&3][0].name, "Fireball");
    }
}
