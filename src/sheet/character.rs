//! The character aggregate - owns all mutable build state

use crate::attributes::AttributePool;
use crate::core::types::{Attribute, ClassName, TrainingTier};
use crate::equipment::{armor, presets};
use crate::sheet::record::CharacterRecord;
use crate::skills::engine::{serialize_skills, SkillBonus, SkillBudget, SkillEngine};
use crate::spells::book::{spell_slots, SpellBook};
use crate::spells::catalog::SpellDefinition;
use serde::{Deserialize, Serialize};

/// One character under construction.
///
/// The presentation layer mutates this aggregate through its methods and
/// re-polls the query methods after every change; nothing here pushes
/// notifications. `derive_sheet` computes the full snapshot in one pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CharacterSheet {
    pub name: String,
    pub player_name: String,
    pub ancestry: String,
    pub background: String,
    pub class_name: String,
    pub subclass: String,
    pub level: i32,
    pub inventory: String,
    attributes: AttributePool,
    skills: SkillEngine,
    spellbook: SpellBook,
}

impl CharacterSheet {
    pub fn new() -> Self {
        Self {
            level: 1,
            ..Default::default()
        }
    }

    // --- attribute point-buy ---

    pub fn attribute(&self, attr: Attribute) -> i32 {
        self.attributes.value(attr)
    }

    /// Adjust one attribute by `delta`, subject to the pool budget.
    /// Returns whether the adjustment was applied.
    pub fn adjust_attribute(&mut self, attr: Attribute, delta: i32) -> bool {
        self.attributes.adjust(attr, delta)
    }

    pub fn points_remaining(&self) -> i32 {
        self.attributes.points_remaining()
    }

    // --- skills ---

    pub fn training_of(&self, skill: &str) -> TrainingTier {
        self.skills.training_of(skill)
    }

    pub fn set_training(&mut self, skill: &str, tier: TrainingTier) -> bool {
        self.skills.set_training(skill, tier)
    }

    pub fn reset_all_trainings(&mut self) {
        self.skills.reset_all();
    }

    pub fn budget_status(&self) -> SkillBudget {
        self.skills.budget_status(&self.attributes)
    }

    pub fn skill_bonuses(&self) -> Vec<SkillBonus> {
        self.skills.compute_bonuses(&self.attributes)
    }

    // --- spells ---

    pub fn is_spellcaster(&self) -> bool {
        ClassName::parse(&self.class_name).is_some_and(|c| c.is_spellcaster())
    }

    pub fn add_spell(&mut self, name: &str) {
        self.spellbook.add_spell(name);
    }

    pub fn remove_spell(&mut self, name: &str) {
        self.spellbook.remove_spell(name);
    }

    pub fn selected_spells(&self) -> &[String] {
        self.spellbook.selected()
    }

    pub fn selected_spells_by_level(
        &self,
    ) -> std::collections::BTreeMap<u8, Vec<&'static SpellDefinition>> {
        self.spellbook.selected_by_level()
    }

    // --- derivation ---

    /// Inventory used for derivation: the entered text, or the class preset
    /// when the entered text is empty.
    fn effective_inventory(&self) -> String {
        if self.inventory.is_empty() {
            presets::inventory_preset(&self.class_name)
                .unwrap_or_default()
                .to_string()
        } else {
            self.inventory.clone()
        }
    }

    /// Compute the full derived record from current component state.
    ///
    /// Everything is recomputed from scratch; two calls without an
    /// intervening mutation yield identical records.
    pub fn derive_sheet(&self) -> CharacterRecord {
        let might = self.attributes.value(Attribute::Might);
        let agility = self.attributes.value(Attribute::Agility);
        let charisma = self.attributes.value(Attribute::Charisma);
        let intelligence = self.attributes.value(Attribute::Intelligence);

        let prime = self.attributes.prime();
        let combat_mastery = combat_mastery(self.level);
        let inventory = self.effective_inventory();

        CharacterRecord {
            name: self.name.clone(),
            player_name: self.player_name.clone(),
            ancestry: self.ancestry.clone(),
            background: self.background.clone(),
            class_name: self.class_name.clone(),
            subclass: self.subclass.clone(),
            level: self.level,
            might,
            agility,
            charisma,
            intelligence,
            prime,
            combat_mastery,
            save_dc: 10 + combat_mastery + prime,
            grit: charisma + 2,
            initiative: combat_mastery + agility,
            melee_hit: combat_mastery + might,
            ranged_hit: combat_mastery + agility,
            spell_check: combat_mastery + prime,
            armor_rating: armor::armor_rating(&self.class_name, &inventory),
            skill_slots: intelligence + 2,
            skills: serialize_skills(&self.skills, &self.attributes),
            selected_spells: self.spellbook.selected().to_vec(),
            spell_slots: spell_slots(&self.class_name, self.level),
            inventory,
        }
    }

    /// Restore build state from a record.
    ///
    /// Only identity fields, attribute values, training tiers, and the
    /// selected-spell list are trusted; every derived field is recomputed
    /// by the next `derive_sheet` call. Attribute restore bypasses the
    /// pool-budget check.
    pub fn load_from_record(&mut self, record: &CharacterRecord) {
        self.name = record.name.clone();
        self.player_name = record.player_name.clone();
        self.ancestry = record.ancestry.clone();
        self.background = record.background.clone();
        self.class_name = record.class_name.clone();
        self.subclass = record.subclass.clone();
        self.level = record.level;
        self.inventory = record.inventory.clone();

        self.attributes.restore(
            record.might,
            record.agility,
            record.charisma,
            record.intelligence,
        );
        self.skills.restore_serialized(&record.skills);
        self.spellbook.restore(record.selected_spells.clone());
    }
}

/// Level-derived proficiency bonus: `ceil(level / 2)`
pub fn combat_mastery(level: i32) -> i32 {
    (level.max(1) + 1) / 2
}
