//! Spell catalog, class gating, and slot tables
//!
//! Only Wizards, Clerics, and Bards cast. Each caster class draws from a
//! fixed set of schools, gated by a level-derived maximum spell level.

pub mod book;
pub mod catalog;

pub use book::{available_spells, max_spell_level, spell_slots, SpellBook};
pub use catalog::{spell_by_name, SpellDefinition, SpellSchool, SPELL_CATALOG};
