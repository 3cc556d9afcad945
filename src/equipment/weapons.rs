//! Attack line resolution from inventory text
//!
//! The weapon catalog is an ordered list of substring keys. Matching walks
//! the catalog in declaration order and consumes each matched span, so a
//! specific key ("longsword") suppresses a later key it contains ("sword").
//! One attack line per catalog entry; the class signature ability joins when
//! fewer than three weapons matched, an unarmed strike always closes the
//! list, and the result is truncated to four lines.

use crate::core::types::{Attribute, ClassName};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Maximum attack lines on the sheet
pub const MAX_ATTACK_LINES: usize = 4;

/// How an attack's damage is computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageFormula {
    /// `base + stat`, optionally adding combat mastery
    Stat {
        base: i32,
        stat: Attribute,
        add_mastery: bool,
    },
    /// No numeric damage; the sheet shows the literal "Special"
    Special,
}

impl DamageFormula {
    /// Evaluate against concrete stat values, as text for the sheet
    pub fn render(&self, might: i32, agility: i32, combat_mastery: i32) -> String {
        match self {
            DamageFormula::Stat { base, stat, add_mastery } => {
                let stat_value = match stat {
                    Attribute::Might => might,
                    Attribute::Agility => agility,
                    // The catalog only keys damage off Might or Agility today,
                    // but loaded tables may use any attribute.
                    Attribute::Charisma | Attribute::Intelligence => 0,
                };
                let mastery = if *add_mastery { combat_mastery } else { 0 };
                (base + stat_value + mastery).to_string()
            }
            DamageFormula::Special => "Special".to_string(),
        }
    }
}

/// Damage type shown on the attack table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageType {
    Slashing,
    Piercing,
    Bludgeoning,
    Force,
    Physical,
    Radiant,
    Magical,
}

impl DamageType {
    pub fn name(&self) -> &'static str {
        match self {
            DamageType::Slashing => "Slashing",
            DamageType::Piercing => "Piercing",
            DamageType::Bludgeoning => "Bludgeoning",
            DamageType::Force => "Force",
            DamageType::Physical => "Physical",
            DamageType::Radiant => "Radiant",
            DamageType::Magical => "Magical",
        }
    }
}

/// One weapon catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponEntry {
    /// Lower-case substring matched against the inventory
    pub key: Cow<'static, str>,
    /// Display name on the attack table
    pub name: Cow<'static, str>,
    pub damage: DamageFormula,
    pub damage_type: DamageType,
}

const fn melee(base: i32) -> DamageFormula {
    DamageFormula::Stat { base, stat: Attribute::Might, add_mastery: false }
}

const fn ranged(base: i32) -> DamageFormula {
    DamageFormula::Stat { base, stat: Attribute::Agility, add_mastery: false }
}

/// Default weapon catalog, in match order. Keys that contain other keys
/// ("longsword", "crossbow", "hunting knife") come first so the consumed
/// span blocks the shorter key.
pub static WEAPON_CATALOG: &[WeaponEntry] = &[
    WeaponEntry { key: Cow::Borrowed("longsword"), name: Cow::Borrowed("Longsword"), damage: melee(2), damage_type: DamageType::Slashing },
    WeaponEntry { key: Cow::Borrowed("hunting knife"), name: Cow::Borrowed("Hunting Knife"), damage: melee(1), damage_type: DamageType::Slashing },
    WeaponEntry { key: Cow::Borrowed("crossbow"), name: Cow::Borrowed("Crossbow"), damage: ranged(2), damage_type: DamageType::Piercing },
    WeaponEntry { key: Cow::Borrowed("dagger"), name: Cow::Borrowed("Dagger"), damage: melee(1), damage_type: DamageType::Piercing },
    WeaponEntry { key: Cow::Borrowed("bow"), name: Cow::Borrowed("Bow"), damage: ranged(2), damage_type: DamageType::Piercing },
    WeaponEntry { key: Cow::Borrowed("mace"), name: Cow::Borrowed("Mace"), damage: melee(2), damage_type: DamageType::Bludgeoning },
    WeaponEntry { key: Cow::Borrowed("wand"), name: Cow::Borrowed("Wand"), damage: DamageFormula::Special, damage_type: DamageType::Force },
    WeaponEntry { key: Cow::Borrowed("staff"), name: Cow::Borrowed("Staff"), damage: melee(1), damage_type: DamageType::Bludgeoning },
    WeaponEntry { key: Cow::Borrowed("lute"), name: Cow::Borrowed("Lute"), damage: melee(1), damage_type: DamageType::Bludgeoning },
    WeaponEntry { key: Cow::Borrowed("sword"), name: Cow::Borrowed("Sword"), damage: melee(2), damage_type: DamageType::Slashing },
    WeaponEntry { key: Cow::Borrowed("axe"), name: Cow::Borrowed("Axe"), damage: melee(2), damage_type: DamageType::Slashing },
    WeaponEntry { key: Cow::Borrowed("spear"), name: Cow::Borrowed("Spear"), damage: melee(2), damage_type: DamageType::Piercing },
    WeaponEntry { key: Cow::Borrowed("club"), name: Cow::Borrowed("Club"), damage: melee(1), damage_type: DamageType::Bludgeoning },
    WeaponEntry { key: Cow::Borrowed("hammer"), name: Cow::Borrowed("Hammer"), damage: melee(2), damage_type: DamageType::Bludgeoning },
];

/// Per-class signature attack, appended when fewer than three weapons matched
struct SignatureAbility {
    class: ClassName,
    name: &'static str,
    damage: DamageFormula,
    damage_type: DamageType,
}

const fn mastery(stat: Attribute) -> DamageFormula {
    DamageFormula::Stat { base: 0, stat, add_mastery: true }
}

static SIGNATURE_ABILITIES: &[SignatureAbility] = &[
    SignatureAbility { class: ClassName::Fighter, name: "Combat Strike", damage: mastery(Attribute::Might), damage_type: DamageType::Physical },
    SignatureAbility { class: ClassName::Rogue, name: "Precision Strike", damage: mastery(Attribute::Agility), damage_type: DamageType::Piercing },
    SignatureAbility { class: ClassName::Wizard, name: "Cantrip", damage: DamageFormula::Special, damage_type: DamageType::Magical },
    SignatureAbility { class: ClassName::Cleric, name: "Divine Strike", damage: mastery(Attribute::Might), damage_type: DamageType::Radiant },
    SignatureAbility { class: ClassName::Hunter, name: "Aimed Shot", damage: mastery(Attribute::Agility), damage_type: DamageType::Piercing },
    // The Bard's strike inspires rather than hits hard; no mastery bonus.
    SignatureAbility { class: ClassName::Bard, name: "Inspiring Strike", damage: DamageFormula::Stat { base: 0, stat: Attribute::Might, add_mastery: false }, damage_type: DamageType::Physical },
];

/// One resolved row of the attack table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackLine {
    pub name: String,
    pub damage: String,
    pub damage_type: &'static str,
}

/// Resolve attack lines from the default catalog
pub fn resolve_attacks(
    inventory: &str,
    class_name: &str,
    might: i32,
    agility: i32,
    combat_mastery: i32,
) -> Vec<AttackLine> {
    resolve_attacks_with(WEAPON_CATALOG, inventory, class_name, might, agility, combat_mastery)
}

/// Resolve attack lines from an explicit catalog
pub fn resolve_attacks_with(
    catalog: &[WeaponEntry],
    inventory: &str,
    class_name: &str,
    might: i32,
    agility: i32,
    combat_mastery: i32,
) -> Vec<AttackLine> {
    let mut text = inventory.to_lowercase();
    let mut attacks = Vec::new();

    for entry in catalog {
        if let Some(pos) = text.find(entry.key.as_ref()) {
            attacks.push(AttackLine {
                name: entry.name.to_string(),
                damage: entry.damage.render(might, agility, combat_mastery),
                damage_type: entry.damage_type.name(),
            });
            // Consume the matched span so overlapping keys later in the
            // catalog cannot match the same text.
            let blank = "#".repeat(entry.key.len());
            text.replace_range(pos..pos + entry.key.len(), &blank);
        }
    }

    let matched = attacks.len();
    if matched < 3 {
        if let Some(class) = ClassName::parse(class_name) {
            if let Some(sig) = SIGNATURE_ABILITIES.iter().find(|s| s.class == class) {
                attacks.push(AttackLine {
                    name: sig.name.to_string(),
                    damage: sig.damage.render(might, agility, combat_mastery),
                    damage_type: sig.damage_type.name(),
                });
            }
        }
    }

    attacks.push(AttackLine {
        name: "Unarmed Strike".to_string(),
        damage: might.to_string(),
        damage_type: DamageType::Bludgeoning.name(),
    });

    attacks.truncate(MAX_ATTACK_LINES);
    attacks
}
