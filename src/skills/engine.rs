//! Training state and skill bonus computation

use crate::attributes::AttributePool;
use crate::core::types::{Attribute, TrainingTier};
use crate::skills::definitions::{self, SKILL_TABLE};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Computed value of one skill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillBonus {
    pub name: &'static str,
    pub attribute: Attribute,
    pub tier: TrainingTier,
    pub value: i32,
}

/// Advisory training-slot budget derived from Intelligence
///
/// `remaining` may go negative; the display layer flags over-allocation,
/// the engine never corrects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillBudget {
    pub max_slots: i32,
    pub used_slots: i32,
    pub remaining: i32,
}

impl SkillBudget {
    pub fn is_overspent(&self) -> bool {
        self.remaining < 0
    }
}

/// Per-character training state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillEngine {
    /// Tiers for skills trained above None
    #[serde(default)]
    trainings: HashMap<String, TrainingTier>,
}

impl SkillEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn training_of(&self, skill: &str) -> TrainingTier {
        self.trainings.get(skill).copied().unwrap_or_default()
    }

    /// Set a skill's training tier. Unconditional for known skills; the
    /// slot budget is advisory and checked separately. Returns false for
    /// unrecognized skill names.
    pub fn set_training(&mut self, skill: &str, tier: TrainingTier) -> bool {
        match definitions::canonical_name(skill) {
            Some(name) => {
                if tier == TrainingTier::None {
                    self.trainings.remove(name);
                } else {
                    self.trainings.insert(name.to_string(), tier);
                }
                true
            }
            None => false,
        }
    }

    /// Set every skill back to untrained
    pub fn reset_all(&mut self) {
        self.trainings.clear();
    }

    /// Recompute every skill bonus from current attributes and training.
    ///
    /// Always a full recomputation so the result reflects the latest state;
    /// returned in the fixed table order used for serialization.
    pub fn compute_bonuses(&self, pool: &AttributePool) -> Vec<SkillBonus> {
        SKILL_TABLE
            .iter()
            .map(|def| {
                let tier = self.training_of(def.name);
                SkillBonus {
                    name: def.name,
                    attribute: def.attribute,
                    tier,
                    value: pool.value(def.attribute) + tier.bonus(),
                }
            })
            .collect()
    }

    /// Current slot budget: `max = Intelligence + 2`, Trained costs 1,
    /// Expert costs 2.
    pub fn budget_status(&self, pool: &AttributePool) -> SkillBudget {
        let max_slots = pool.value(Attribute::Intelligence) + 2;
        let used_slots = SKILL_TABLE
            .iter()
            .map(|def| self.training_of(def.name).slot_cost())
            .sum();
        SkillBudget {
            max_slots,
            used_slots,
            remaining: max_slots - used_slots,
        }
    }

    /// Restore training tiers from the serialized skills string.
    ///
    /// Entries are `"Name: value (Tier)"` joined by `", "`. The stored value
    /// is ignored (it is recomputed); unrecognized skill or tier names are
    /// skipped with a warning.
    pub fn restore_serialized(&mut self, skills: &str) {
        self.reset_all();
        if skills.is_empty() {
            return;
        }
        for entry in skills.split(", ") {
            if !entry.contains(':') || !entry.contains('(') {
                continue;
            }
            let name = entry.split(':').next().unwrap_or("");
            let tier_text = entry
                .split('(')
                .nth(1)
                .unwrap_or("")
                .trim_end_matches(')');
            let Some(tier) = TrainingTier::parse(tier_text) else {
                tracing::warn!(entry, "Skipping skill entry with unknown tier");
                continue;
            };
            if !self.set_training(name, tier) {
                tracing::warn!(skill = name, "Skipping unrecognized skill in saved data");
            }
        }
    }
}

/// Serialize current skill values as `"Name: value (Tier)"` entries joined
/// by `", "` - the round-trip format stored in the character record.
pub fn serialize_skills(engine: &SkillEngine, pool: &AttributePool) -> String {
    engine
        .compute_bonuses(pool)
        .iter()
        .map(|b| format!("{}: {} ({})", b.name, b.value, b.tier.name()))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool_with(might: i32, agility: i32, charisma: i32, intelligence: i32) -> AttributePool {
        let mut pool = AttributePool::new();
        pool.restore(might, agility, charisma, intelligence);
        pool
    }

    #[test]
    fn test_bonus_is_attribute_plus_tier() {
        let pool = pool_with(3, 1, 0, -2);
        let mut engine = SkillEngine::new();
        engine.set_training("Athletics", TrainingTier::Expert);
        engine.set_training("Stealth", TrainingTier::Trained);

        let bonuses = engine.compute_bonuses(&pool);
        let get = |name: &str| bonuses.iter().find(|b| b.name == name).unwrap().value;
        assert_eq!(get("Athletics"), 5);
        assert_eq!(get("Intimidation"), 3);
        assert_eq!(get("Stealth"), 2);
        assert_eq!(get("Medicine"), -2);
    }

    #[test]
    fn test_bonuses_in_table_order() {
        let pool = AttributePool::new();
        let engine = SkillEngine::new();
        let names: Vec<_> = engine.compute_bonuses(&pool).iter().map(|b| b.name).collect();
        let expected: Vec<_> = SKILL_TABLE.iter().map(|d| d.name).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_budget_from_intelligence() {
        let pool = pool_with(-2, -2, -2, 2);
        let mut engine = SkillEngine::new();
        engine.set_training("Investigation", TrainingTier::Trained);
        engine.set_training("Medicine", TrainingTier::Trained);
        engine.set_training("Survival", TrainingTier::Expert);

        let budget = engine.budget_status(&pool);
        assert_eq!(budget.max_slots, 4);
        assert_eq!(budget.used_slots, 4);
        assert_eq!(budget.remaining, 0);
        assert!(!budget.is_overspent());
    }

    #[test]
    fn test_budget_can_go_negative() {
        let pool = pool_with(-2, -2, -2, -2);
        let mut engine = SkillEngine::new();
        engine.set_training("Athletics", TrainingTier::Expert);
        let budget = engine.budget_status(&pool);
        assert_eq!(budget.max_slots, 0);
        assert_eq!(budget.remaining, -2);
        assert!(budget.is_overspent());
    }

    #[test]
    fn test_set_training_unknown_skill() {
        let mut engine = SkillEngine::new();
        assert!(!engine.set_training("Basketweaving", TrainingTier::Trained));
    }

    #[test]
    fn test_reset_all() {
        let pool = AttributePool::new();
        let mut engine = SkillEngine::new();
        engine.set_training("Insight", TrainingTier::Expert);
        engine.reset_all();
        assert!(engine
            .compute_bonuses(&pool)
            .iter()
            .all(|b| b.tier == TrainingTier::None));
    }

    #[test]
    fn test_serialize_roundtrip() {
        let pool = pool_with(2, 0, -1, 1);
        let mut engine = SkillEngine::new();
        engine.set_training("Athletics", TrainingTier::Trained);
        engine.set_training("Insight", TrainingTier::Expert);

        let serialized = serialize_skills(&engine, &pool);
        assert!(serialized.contains("Athletics: 3 (Trained)"));
        assert!(serialized.contains("Insight: 1 (Expert)"));

        let mut restored = SkillEngine::new();
        restored.restore_serialized(&serialized);
        assert_eq!(restored.training_of("Athletics"), TrainingTier::Trained);
        assert_eq!(restored.training_of("Insight"), TrainingTier::Expert);
        assert_eq!(restored.training_of("Stealth"), TrainingTier::None);
    }

    #[test]
    fn test_restore_skips_unknown_entries() {
        let mut engine = SkillEngine::new();
        engine.restore_serialized("Athletics: 3 (Trained), Juggling: 9 (Expert), Stealth: 0 (Trained)");
        assert_eq!(engine.training_of("Athletics"), TrainingTier::Trained);
        assert_eq!(engine.training_of("Stealth"), TrainingTier::Trained);
        assert_eq!(engine.training_of("Juggling"), TrainingTier::None);
    }

    #[test]
    fn test_restore_tolerates_malformed_entries() {
        let mut engine = SkillEngine::new();
        engine.restore_serialized("garbage, Athletics: 1 (Trained), : (, Medicine 2 Expert");
        assert_eq!(engine.training_of("Athletics"), TrainingTier::Trained);
        assert_eq!(engine.training_of("Medicine"), TrainingTier::None);
    }
}
