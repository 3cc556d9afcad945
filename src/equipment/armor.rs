//! Armor rating inference from inventory text

use crate::core::types::ClassName;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// One armor catalog entry: substring key and the base rating it grants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmorEntry {
    pub key: Cow<'static, str>,
    pub rating: i32,
}

/// Bonus granted by a shield, on top of any base armor
pub const SHIELD_BONUS: i32 = 2;

/// Default armor catalog. Order does not matter; the highest matched
/// rating wins. Shields are handled separately.
pub static ARMOR_CATALOG: &[ArmorEntry] = &[
    ArmorEntry { key: Cow::Borrowed("robes"), rating: 10 },
    ArmorEntry { key: Cow::Borrowed("leather armor"), rating: 13 },
    ArmorEntry { key: Cow::Borrowed("hide armor"), rating: 14 },
    ArmorEntry { key: Cow::Borrowed("chain shirt"), rating: 15 },
    ArmorEntry { key: Cow::Borrowed("chain mail"), rating: 16 },
    ArmorEntry { key: Cow::Borrowed("plate armor"), rating: 18 },
];

/// Base rating worn by an unarmored member of each class
pub fn class_default_rating(class_name: &str) -> i32 {
    match ClassName::parse(class_name) {
        Some(ClassName::Fighter) => 16,
        Some(ClassName::Cleric) => 15,
        Some(ClassName::Hunter) => 14,
        Some(ClassName::Rogue) => 14,
        Some(ClassName::Bard) => 13,
        Some(ClassName::Wizard) => 10,
        None => 12,
    }
}

/// Armor rating from the default catalog
pub fn armor_rating(class_name: &str, inventory: &str) -> i32 {
    armor_rating_with(ARMOR_CATALOG, class_name, inventory)
}

/// Armor rating from an explicit catalog.
///
/// The inventory is lower-cased and scanned for every catalog key; the
/// highest matched rating is the base, falling back to the class default
/// when nothing matches. A "shield" substring adds its bonus regardless of
/// where the base came from.
pub fn armor_rating_with(catalog: &[ArmorEntry], class_name: &str, inventory: &str) -> i32 {
    let text = inventory.to_lowercase();
    let base = catalog
        .iter()
        .filter(|entry| text.contains(entry.key.as_ref()))
        .map(|entry| entry.rating)
        .max()
        .unwrap_or_else(|| class_default_rating(class_name));
    if text.contains("shield") {
        base + SHIELD_BONUS
    } else {
        base
    }
}
