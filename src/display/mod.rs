//! Plain-text sheet rendering for export
//!
//! A read-only consumer of the derived record: every number printed here was
//! computed by `derive_sheet`, and the formula strings in the combat block
//! are decoration, not recomputation. Layout follows the printed character
//! sheet: header, resources, attributes, skills by attribute, combat block,
//! attack table, inventory, defense zones, spells.

use crate::equipment::weapons::resolve_attacks;
use crate::sheet::record::CharacterRecord;
use crate::skills::definitions::skill_attribute;
use crate::spells::book::SpellBook;
use std::fmt::Write;

/// Render a complete character sheet as text
pub fn render_sheet(record: &CharacterRecord) -> String {
    let mut out = String::new();

    render_header(&mut out, record);
    render_resources(&mut out, record);
    render_attributes(&mut out, record);
    render_skills(&mut out, record);
    render_combat(&mut out, record);
    render_attacks(&mut out, record);
    render_inventory(&mut out, record);
    render_defense_zones(&mut out, record);
    render_spells(&mut out, record);

    out
}

fn render_header(out: &mut String, record: &CharacterRecord) {
    let class_line = if record.subclass.is_empty() {
        record.class_name.clone()
    } else {
        format!("{} / {}", record.class_name, record.subclass)
    };
    let _ = writeln!(out, "==============================================");
    let _ = writeln!(out, " {}", record.name);
    let _ = writeln!(out, " {}  |  Level {}", class_line, record.level);
    let _ = writeln!(out, " {} / {}", record.ancestry, record.background);
    if !record.player_name.is_empty() {
        let _ = writeln!(out, " Player: {}", record.player_name);
    }
    let _ = writeln!(out, "==============================================");
}

fn render_resources(out: &mut String, record: &CharacterRecord) {
    // HP and the zone spread are sheet decoration derived from record
    // fields, mirroring the printed sheet's resource boxes.
    let hp = 10 + record.level * record.might;
    let _ = writeln!(out, "\nRESOURCES");
    let _ = writeln!(
        out,
        "  HP: {}   Stamina: {}   Mana: 0   Grit: {}",
        hp, record.grit, record.grit
    );
}

fn render_attributes(out: &mut String, record: &CharacterRecord) {
    let _ = writeln!(out, "\nATTRIBUTES   (Prime = {})", record.prime);
    let _ = writeln!(
        out,
        "  MIG: {:>2}   AGI: {:>2}   CHA: {:>2}   INT: {:>2}",
        record.might, record.agility, record.charisma, record.intelligence
    );
}

fn render_skills(out: &mut String, record: &CharacterRecord) {
    let _ = writeln!(out, "\nSKILLS   (slots: {})", record.skill_slots);

    let mut grouped: Vec<(&str, Vec<&str>)> = vec![
        ("Might", Vec::new()),
        ("Agility", Vec::new()),
        ("Charisma", Vec::new()),
        ("Intelligence", Vec::new()),
    ];

    for entry in record.skills.split(", ") {
        if entry.is_empty() {
            continue;
        }
        let name = entry.split(':').next().unwrap_or("");
        match skill_attribute(name) {
            Some(attr) => {
                if let Some((_, list)) = grouped.iter_mut().find(|(a, _)| *a == attr.name()) {
                    list.push(entry);
                }
            }
            None => {
                tracing::warn!(skill = name, "Skill not found in skill mapping");
            }
        }
    }

    for (attr, entries) in grouped {
        let _ = writeln!(out, "  {}", attr.to_uppercase());
        for entry in entries {
            let _ = writeln!(out, "    {}", entry);
        }
    }
}

fn render_combat(out: &mut String, record: &CharacterRecord) {
    let _ = writeln!(out, "\nCOMBAT   (Combat Mastery = {})", record.combat_mastery);
    let _ = writeln!(out, "  Attack / Spell Check = CM + Prime  ->  {}", record.spell_check);
    let _ = writeln!(out, "  Save DC = 10 + CM + Prime          ->  {}", record.save_dc);
    let _ = writeln!(out, "  Initiative = CM + AGI              ->  {}", record.initiative);
    let _ = writeln!(out, "  To Hit (Melee): {}   To Hit (Ranged): {}", record.melee_hit, record.ranged_hit);
    let _ = writeln!(out, "  Armor Rating: {}", record.armor_rating);
}

fn render_attacks(out: &mut String, record: &CharacterRecord) {
    let attacks = resolve_attacks(
        &record.inventory,
        &record.class_name,
        record.might,
        record.agility,
        record.combat_mastery,
    );
    let _ = writeln!(out, "\nATTACKS");
    let _ = writeln!(out, "  {:<20} {:<10} {}", "Name", "Dmg.", "Type");
    for attack in attacks {
        let _ = writeln!(out, "  {:<20} {:<10} {}", attack.name, attack.damage, attack.damage_type);
    }
}

fn render_inventory(out: &mut String, record: &CharacterRecord) {
    let _ = writeln!(out, "\nINVENTORY");
    for item in record.inventory.split(", ") {
        if !item.trim().is_empty() {
            let _ = writeln!(out, "  - {}", item.trim());
        }
    }
}

fn render_defense_zones(out: &mut String, record: &CharacterRecord) {
    let pdr = record.armor_rating;
    let _ = writeln!(out, "\nDEFENSE ZONES");
    let _ = writeln!(out, "  PDR: {}   EDR: {}   MDR: {}", pdr, pdr - 2, pdr - 4);
}

fn render_spells(out: &mut String, record: &CharacterRecord) {
    if record.selected_spells.is_empty() && record.spell_slots.is_empty() {
        return;
    }
    let _ = writeln!(out, "\nSPELLS");
    if !record.spell_slots.is_empty() {
        let slots: Vec<String> = record
            .spell_slots
            .iter()
            .map(|(level, count)| format!("L{}: {}", level, count))
            .collect();
        let _ = writeln!(out, "  Slots: {}", slots.join("  "));
    }

    let mut book = SpellBook::new();
    book.restore(record.selected_spells.clone());
    for (level, spells) in book.selected_by_level() {
        let header = if level == 0 {
            "Cantrips".to_string()
        } else {
            format!("Level {}", level)
        };
        let _ = writeln!(out, "  {}", header);
        for spell in spells {
            let _ = writeln!(
                out,
                "    {} ({}, {}, {})",
                spell.name, spell.school.name(), spell.casting_time, spell.range
            );
        }
    }
}
