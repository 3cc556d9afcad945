//! Static skill definitions - the fixed skill list all characters share

use crate::core::types::Attribute;

/// Definition of one skill
#[derive(Debug, Clone, Copy)]
pub struct SkillDefinition {
    pub name: &'static str,
    pub attribute: Attribute,
}

/// The fixed skill table, in serialization order
pub static SKILL_TABLE: &[SkillDefinition] = &[
    SkillDefinition { name: "Athletics", attribute: Attribute::Might },
    SkillDefinition { name: "Intimidation", attribute: Attribute::Might },
    SkillDefinition { name: "Acrobatics", attribute: Attribute::Agility },
    SkillDefinition { name: "Trickery", attribute: Attribute::Agility },
    SkillDefinition { name: "Stealth", attribute: Attribute::Agility },
    SkillDefinition { name: "Animal", attribute: Attribute::Charisma },
    SkillDefinition { name: "Influence", attribute: Attribute::Charisma },
    SkillDefinition { name: "Insight", attribute: Attribute::Charisma },
    SkillDefinition { name: "Investigation", attribute: Attribute::Intelligence },
    SkillDefinition { name: "Medicine", attribute: Attribute::Intelligence },
    SkillDefinition { name: "Survival", attribute: Attribute::Intelligence },
];

/// Governing attribute for a skill name, or `None` if unrecognized
pub fn skill_attribute(name: &str) -> Option<Attribute> {
    SKILL_TABLE
        .iter()
        .find(|def| def.name == name)
        .map(|def| def.attribute)
}

/// Canonical `&'static str` key for a skill name, or `None` if unrecognized
pub fn canonical_name(name: &str) -> Option<&'static str> {
    SKILL_TABLE
        .iter()
        .find(|def| def.name == name)
        .map(|def| def.name)
}
