//! Equipment resolution integration tests

use dc20_forge::equipment::*;

#[test]
fn test_armor_rating_examples() {
    // Chain mail base plus shield bonus.
    assert_eq!(armor_rating("Fighter", "Chain Mail, Shield, Backpack"), 18);
    // No armor keyword: class default.
    assert_eq!(armor_rating("Wizard", "Backpack"), 10);
    // Unknown class default.
    assert_eq!(armor_rating("Paladin", "Backpack"), 12);
}

#[test]
fn test_armor_class_defaults() {
    for (class, expected) in [
        ("Fighter", 16),
        ("Cleric", 15),
        ("Hunter", 14),
        ("Rogue", 14),
        ("Bard", 13),
        ("Wizard", 10),
    ] {
        assert_eq!(armor_rating(class, "Rations"), expected, "class {}", class);
    }
}

#[test]
fn test_armor_catalog_values() {
    for (inventory, expected) in [
        ("Robes", 10),
        ("Leather Armor", 13),
        ("Hide Armor", 14),
        ("Chain Shirt", 15),
        ("Chain Mail", 16),
        ("Plate Armor", 18),
    ] {
        // Unlisted class so the catalog value is unambiguous.
        assert_eq!(armor_rating("Paladin", inventory), expected, "inventory {}", inventory);
    }
}

#[test]
fn test_attack_resolution_example() {
    // One weapon match, signature ability joins (fewer than three matches),
    // unarmed strike closes the list; bounded by four, not padded.
    let attacks = resolve_attacks("Longsword, Shield", "Fighter", 3, 1, 2);
    assert_eq!(attacks.len(), 3);

    assert_eq!(attacks[0].name, "Longsword");
    assert_eq!(attacks[0].damage, "5");
    assert_eq!(attacks[0].damage_type, "Slashing");

    assert_eq!(attacks[1].name, "Combat Strike");
    assert_eq!(attacks[1].damage, "5");
    assert_eq!(attacks[1].damage_type, "Physical");

    assert_eq!(attacks[2].name, "Unarmed Strike");
    assert_eq!(attacks[2].damage, "3");
    assert_eq!(attacks[2].damage_type, "Bludgeoning");
}

#[test]
fn test_class_presets_resolve_cleanly() {
    // Every class preset yields at least one weapon plus the closing
    // unarmed strike, within the four-line bound.
    for class in ["Fighter", "Rogue", "Wizard", "Cleric", "Hunter", "Bard"] {
        let preset = inventory_preset(class).unwrap();
        let attacks = resolve_attacks(preset, class, 1, 1, 1);
        assert!(attacks.len() >= 2, "class {}", class);
        assert!(attacks.len() <= MAX_ATTACK_LINES, "class {}", class);
        assert_eq!(attacks.last().unwrap().name, "Unarmed Strike");
    }
}

#[test]
fn test_hunter_preset_attack_lines() {
    // "Bow, Hunting Knife, Hide Armor, Traps": two weapon matches, then
    // Aimed Shot and Unarmed Strike.
    let attacks = resolve_attacks(inventory_preset("Hunter").unwrap(), "Hunter", 0, 2, 1);
    let names: Vec<_> = attacks.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Hunting Knife", "Bow", "Aimed Shot", "Unarmed Strike"]);
    assert_eq!(attacks[1].damage, "4"); // 2 + agility
    assert_eq!(attacks[2].damage, "3"); // agility + mastery
}

#[test]
fn test_loaded_catalog_drives_resolution() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.toml");
    std::fs::write(
        &path,
        r#"
[[armor]]
key = "breastplate"
rating = 15

[[weapons]]
key = "glaive"
name = "Glaive"
base = 2
stat = "Might"
type = "Slashing"
"#,
    )
    .unwrap();

    let catalog = load_catalog_file(&path).unwrap();
    let armor = catalog.armor.unwrap();
    let weapons = catalog.weapons.unwrap();

    assert_eq!(armor_rating_with(&armor, "Fighter", "Breastplate, Shield"), 17);
    let attacks = resolve_attacks_with(&weapons, "Glaive", "Fighter", 2, 0, 1);
    assert_eq!(attacks[0].name, "Glaive");
    assert_eq!(attacks[0].damage, "4");
}
