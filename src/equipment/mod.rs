//! Inventory-driven equipment resolution
//!
//! The inventory is a freeform string, never tokenized into items. Armor
//! rating and attack lines are inferred by substring containment against
//! fixed catalogs; unknown classes degrade to documented defaults. All
//! resolution is stateless.

pub mod armor;
pub mod loader;
pub mod presets;
pub mod weapons;

pub use armor::{armor_rating, armor_rating_with, ArmorEntry, ARMOR_CATALOG, SHIELD_BONUS};
pub use loader::{load_catalog_file, CatalogOverride};
pub use presets::inventory_preset;
pub use weapons::{
    resolve_attacks, resolve_attacks_with, AttackLine, DamageFormula, DamageType, WeaponEntry,
    MAX_ATTACK_LINES, WEAPON_CATALOG,
};
