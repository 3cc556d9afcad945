//! Load replacement equipment catalogs from TOML files
//!
//! The matching algorithms are generic over the catalog slices, so a table
//! loaded here drops in wherever the built-in statics are used.

use crate::core::error::{ForgeError, Result};
use crate::core::types::Attribute;
use crate::equipment::armor::ArmorEntry;
use crate::equipment::weapons::{DamageFormula, DamageType, WeaponEntry};
use std::borrow::Cow;
use std::fs;
use std::path::Path;

/// Catalogs parsed from a TOML override file. Either table may be absent;
/// an absent table means "keep the built-in one".
#[derive(Debug, Clone, Default)]
pub struct CatalogOverride {
    pub armor: Option<Vec<ArmorEntry>>,
    pub weapons: Option<Vec<WeaponEntry>>,
}

/// Load a catalog override from a TOML file
pub fn load_catalog_file(path: &Path) -> Result<CatalogOverride> {
    let content = fs::read_to_string(path)?;
    parse_catalog_toml(&content)
}

fn parse_catalog_toml(content: &str) -> Result<CatalogOverride> {
    let toml: toml::Value = content
        .parse()
        .map_err(|e| ForgeError::CatalogError(format!("Invalid TOML: {}", e)))?;

    let mut override_ = CatalogOverride::default();

    if let Some(entries) = toml.get("armor").and_then(|v| v.as_array()) {
        let mut armor = Vec::new();
        for entry in entries {
            armor.push(parse_armor_entry(entry)?);
        }
        override_.armor = Some(armor);
    }

    if let Some(entries) = toml.get("weapons").and_then(|v| v.as_array()) {
        let mut weapons = Vec::new();
        for entry in entries {
            weapons.push(parse_weapon_entry(entry)?);
        }
        override_.weapons = Some(weapons);
    }

    Ok(override_)
}

fn parse_armor_entry(value: &toml::Value) -> Result<ArmorEntry> {
    let key = value
        .get("key")
        .and_then(|v| v.as_str())
        .ok_or_else(|| ForgeError::CatalogError("armor entry missing key".to_string()))?
        .to_lowercase();

    let rating = value
        .get("rating")
        .and_then(|v| v.as_integer())
        .ok_or_else(|| ForgeError::CatalogError(format!("armor '{}' missing rating", key)))?;

    Ok(ArmorEntry { key: Cow::Owned(key), rating: rating as i32 })
}

fn parse_weapon_entry(value: &toml::Value) -> Result<WeaponEntry> {
    let key = value
        .get("key")
        .and_then(|v| v.as_str())
        .ok_or_else(|| ForgeError::CatalogError("weapon entry missing key".to_string()))?
        .to_lowercase();

    let name = value
        .get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| ForgeError::CatalogError(format!("weapon '{}' missing name", key)))?
        .to_string();

    let type_str = value.get("type").and_then(|v| v.as_str()).unwrap_or("Bludgeoning");
    let damage_type = parse_damage_type(type_str)
        .ok_or_else(|| ForgeError::CatalogError(format!("weapon '{}': unknown damage type '{}'", key, type_str)))?;

    let damage = if value.get("special").and_then(|v| v.as_bool()).unwrap_or(false) {
        DamageFormula::Special
    } else {
        let base = value.get("base").and_then(|v| v.as_integer()).unwrap_or(0) as i32;
        let stat_str = value.get("stat").and_then(|v| v.as_str()).unwrap_or("Might");
        let stat = Attribute::parse(stat_str)
            .ok_or_else(|| ForgeError::CatalogError(format!("weapon '{}': unknown stat '{}'", key, stat_str)))?;
        let add_mastery = value.get("mastery").and_then(|v| v.as_bool()).unwrap_or(false);
        DamageFormula::Stat { base, stat, add_mastery }
    };

    Ok(WeaponEntry {
        key: Cow::Owned(key),
        name: Cow::Owned(name),
        damage,
        damage_type,
    })
}

fn parse_damage_type(s: &str) -> Option<DamageType> {
    match s {
        "Slashing" => Some(DamageType::Slashing),
        "Piercing" => Some(DamageType::Piercing),
        "Bludgeoning" => Some(DamageType::Bludgeoning),
        "Force" => Some(DamageType::Force),
        "Physical" => Some(DamageType::Physical),
        "Radiant" => Some(DamageType::Radiant),
        "Magical" => Some(DamageType::Magical),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equipment::armor::armor_rating_with;
    use crate::equipment::weapons::resolve_attacks_with;

    #[test]
    fn test_parse_armor_table() {
        let toml_str = r#"
[[armor]]
key = "Breastplate"
rating = 15

[[armor]]
key = "scale mail"
rating = 14
"#;
        let catalog = parse_catalog_toml(toml_str).unwrap();
        let armor = catalog.armor.unwrap();
        assert_eq!(armor.len(), 2);
        assert_eq!(armor[0].key, "breastplate");
        assert_eq!(armor[0].rating, 15);
        assert_eq!(armor_rating_with(&armor, "Rogue", "Scale Mail"), 14);
    }

    #[test]
    fn test_parse_weapon_table() {
        let toml_str = r#"
[[weapons]]
key = "warhammer"
name = "Warhammer"
base = 2
stat = "Might"
type = "Bludgeoning"

[[weapons]]
key = "orb"
name = "Orb"
special = true
type = "Force"
"#;
        let catalog = parse_catalog_toml(toml_str).unwrap();
        let weapons = catalog.weapons.unwrap();
        assert_eq!(weapons.len(), 2);

        let attacks = resolve_attacks_with(&weapons, "Warhammer, Orb", "Fighter", 2, 0, 1);
        assert_eq!(attacks[0].name, "Warhammer");
        assert_eq!(attacks[0].damage, "4");
        assert_eq!(attacks[1].name, "Orb");
        assert_eq!(attacks[1].damage, "Special");
    }

    #[test]
    fn test_missing_table_keeps_builtin() {
        let catalog = parse_catalog_toml("").unwrap();
        assert!(catalog.armor.is_none());
        assert!(catalog.weapons.is_none());
    }

    #[test]
    fn test_missing_rating_is_an_error() {
        let toml_str = r#"
[[armor]]
key = "breastplate"
"#;
        assert!(parse_catalog_toml(toml_str).is_err());
    }

    #[test]
    fn test_unknown_stat_is_an_error() {
        let toml_str = r#"
[[weapons]]
key = "focus"
name = "Focus"
stat = "Luck"
"#;
        assert!(parse_catalog_toml(toml_str).is_err());
    }
}
