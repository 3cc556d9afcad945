//! Static spell catalog - the read-only library all characters draw from

use serde::{Deserialize, Serialize};

/// School of magic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpellSchool {
    Evocation,
    Transmutation,
    Abjuration,
    Conjuration,
    Illusion,
    Divination,
    Enchantment,
}

impl SpellSchool {
    pub fn name(&self) -> &'static str {
        match self {
            SpellSchool::Evocation => "Evocation",
            SpellSchool::Transmutation => "Transmutation",
            SpellSchool::Abjuration => "Abjuration",
            SpellSchool::Conjuration => "Conjuration",
            SpellSchool::Illusion => "Illusion",
            SpellSchool::Divination => "Divination",
            SpellSchool::Enchantment => "Enchantment",
        }
    }
}

/// Definition of one spell. Level 0 is a cantrip; 3 is the highest level.
#[derive(Debug, Clone, Copy)]
pub struct SpellDefinition {
    pub name: &'static str,
    pub level: u8,
    pub school: SpellSchool,
    pub casting_time: &'static str,
    pub range: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
}

/// The full spell catalog
pub static SPELL_CATALOG: &[SpellDefinition] = &[
    // Cantrips
    SpellDefinition {
        name: "Fire Bolt",
        level: 0,
        school: SpellSchool::Evocation,
        casting_time: "1 Action",
        range: "120 ft",
        duration: "Instantaneous",
        description: "Hurl a mote of fire at a creature or object within range.",
    },
    SpellDefinition {
        name: "Light",
        level: 0,
        school: SpellSchool::Evocation,
        casting_time: "1 Action",
        range: "Touch",
        duration: "1 hour",
        description: "An object you touch sheds bright light in a 20-foot radius.",
    },
    SpellDefinition {
        name: "Mage Hand",
        level: 0,
        school: SpellSchool::Conjuration,
        casting_time: "1 Action",
        range: "30 ft",
        duration: "1 minute",
        description: "A spectral hand appears and manipulates objects at a distance.",
    },
    SpellDefinition {
        name: "Minor Illusion",
        level: 0,
        school: SpellSchool::Illusion,
        casting_time: "1 Action",
        range: "30 ft",
        duration: "1 minute",
        description: "Create a sound or an image of an object within range.",
    },
    SpellDefinition {
        name: "Guidance",
        level: 0,
        school: SpellSchool::Divination,
        casting_time: "1 Action",
        range: "Touch",
        duration: "1 minute",
        description: "A willing creature adds a bonus die to one check of its choice.",
    },
    SpellDefinition {
        name: "Vicious Mockery",
        level: 0,
        school: SpellSchool::Enchantment,
        casting_time: "1 Action",
        range: "60 ft",
        duration: "Instantaneous",
        description: "Insults laced with enchantment sap a creature's resolve.",
    },
    SpellDefinition {
        name: "Mending",
        level: 0,
        school: SpellSchool::Transmutation,
        casting_time: "1 Minute",
        range: "Touch",
        duration: "Instantaneous",
        description: "Repair a single break or tear in an object you touch.",
    },
    // Level 1
    SpellDefinition {
        name: "Burning Hands",
        level: 1,
        school: SpellSchool::Evocation,
        casting_time: "1 Action",
        range: "Self (15-ft cone)",
        duration: "Instantaneous",
        description: "A thin sheet of flames shoots from your outstretched fingertips.",
    },
    SpellDefinition {
        name: "Shield",
        level: 1,
        school: SpellSchool::Abjuration,
        casting_time: "1 Reaction",
        range: "Self",
        duration: "1 round",
        description: "An invisible barrier of force raises your defense until your next turn.",
    },
    SpellDefinition {
        name: "Charm Person",
        level: 1,
        school: SpellSchool::Enchantment,
        casting_time: "1 Action",
        range: "30 ft",
        duration: "1 hour",
        description: "A humanoid you can see regards you as a friendly acquaintance.",
    },
    SpellDefinition {
        name: "Disguise Self",
        level: 1,
        school: SpellSchool::Illusion,
        casting_time: "1 Action",
        range: "Self",
        duration: "1 hour",
        description: "Make yourself, your clothing, and your gear look different.",
    },
    SpellDefinition {
        name: "Feather Fall",
        level: 1,
        school: SpellSchool::Transmutation,
        casting_time: "1 Reaction",
        range: "60 ft",
        duration: "1 minute",
        description: "Up to five falling creatures drift down like leaves.",
    },
    SpellDefinition {
        name: "Detect Magic",
        level: 1,
        school: SpellSchool::Divination,
        casting_time: "1 Action",
        range: "Self",
        duration: "10 minutes",
        description: "Sense the presence of magic within 30 feet of you.",
    },
    SpellDefinition {
        name: "Fog Cloud",
        level: 1,
        school: SpellSchool::Conjuration,
        casting_time: "1 Action",
        range: "120 ft",
        duration: "1 hour",
        description: "A 20-foot-radius sphere of fog heavily obscures its area.",
    },
    // Level 2
    SpellDefinition {
        name: "Scorching Ray",
        level: 2,
        school: SpellSchool::Evocation,
        casting_time: "1 Action",
        range: "120 ft",
        duration: "Instantaneous",
        description: "Three rays of fire streak toward targets of your choice.",
    },
    SpellDefinition {
        name: "Invisibility",
        level: 2,
        school: SpellSchool::Illusion,
        casting_time: "1 Action",
        range: "Touch",
        duration: "1 hour",
        description: "A creature you touch becomes invisible until it attacks or casts.",
    },
    SpellDefinition {
        name: "Hold Person",
        level: 2,
        school: SpellSchool::Enchantment,
        casting_time: "1 Action",
        range: "60 ft",
        duration: "1 minute",
        description: "A humanoid you can see is paralyzed while it fails to resist.",
    },
    SpellDefinition {
        name: "Levitate",
        level: 2,
        school: SpellSchool::Transmutation,
        casting_time: "1 Action",
        range: "60 ft",
        duration: "10 minutes",
        description: "One creature or loose object rises vertically up to 20 feet.",
    },
    SpellDefinition {
        name: "Locate Object",
        level: 2,
        school: SpellSchool::Divination,
        casting_time: "1 Action",
        range: "Self",
        duration: "10 minutes",
        description: "Sense the direction to a familiar object within 1,000 feet.",
    },
    SpellDefinition {
        name: "Arcane Lock",
        level: 2,
        school: SpellSchool::Abjuration,
        casting_time: "1 Action",
        range: "Touch",
        duration: "Until dispelled",
        description: "A door, window, or container you touch is magically sealed.",
    },
    // Level 3
    SpellDefinition {
        name: "Fireball",
        level: 3,
        school: SpellSchool::Evocation,
        casting_time: "1 Action",
        range: "150 ft",
        duration: "Instantaneous",
        description: "A bright streak blossoms into a 20-foot-radius burst of flame.",
    },
    SpellDefinition {
        name: "Counterspell",
        level: 3,
        school: SpellSchool::Abjuration,
        casting_time: "1 Reaction",
        range: "60 ft",
        duration: "Instantaneous",
        description: "Interrupt a creature in the process of casting a spell.",
    },
    SpellDefinition {
        name: "Major Image",
        level: 3,
        school: SpellSchool::Illusion,
        casting_time: "1 Action",
        range: "120 ft",
        duration: "10 minutes",
        description: "Create the image of an object or creature, with sound and smell.",
    },
    SpellDefinition {
        name: "Clairvoyance",
        level: 3,
        school: SpellSchool::Divination,
        casting_time: "10 Minutes",
        range: "1 mile",
        duration: "10 minutes",
        description: "Create an invisible sensor at a familiar or obvious location.",
    },
    SpellDefinition {
        name: "Haste",
        level: 3,
        school: SpellSchool::Transmutation,
        casting_time: "1 Action",
        range: "30 ft",
        duration: "1 minute",
        description: "A willing creature doubles its speed and gains an extra action.",
    },
];

/// Look up a spell by its unique name
pub fn spell_by_name(name: &str) -> Option<&'static SpellDefinition> {
    SPELL_CATALOG.iter().find(|spell| spell.name == name)
}
