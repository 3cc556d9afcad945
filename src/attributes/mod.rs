//! Point-buy attribute pool
//!
//! All four attributes start at -2 and share a pool of 12 points. An
//! adjustment that would push the spent total outside [0, 12] is rejected
//! without changing state; the UI is expected to disable the offending
//! control rather than handle an error.

use crate::core::types::Attribute;
use serde::{Deserialize, Serialize};

/// Starting value of every attribute
pub const ATTRIBUTE_BASE: i32 = -2;

/// Total point-buy budget
pub const ATTRIBUTE_POOL: i32 = 12;

/// The four attribute values under the point-buy budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributePool {
    might: i32,
    agility: i32,
    charisma: i32,
    intelligence: i32,
}

impl AttributePool {
    pub fn new() -> Self {
        Self {
            might: ATTRIBUTE_BASE,
            agility: ATTRIBUTE_BASE,
            charisma: ATTRIBUTE_BASE,
            intelligence: ATTRIBUTE_BASE,
        }
    }

    pub fn value(&self, attr: Attribute) -> i32 {
        match attr {
            Attribute::Might => self.might,
            Attribute::Agility => self.agility,
            Attribute::Charisma => self.charisma,
            Attribute::Intelligence => self.intelligence,
        }
    }

    /// Points spent above base across all four attributes
    pub fn spent(&self) -> i32 {
        Attribute::ALL
            .iter()
            .map(|a| self.value(*a) - ATTRIBUTE_BASE)
            .sum()
    }

    pub fn points_remaining(&self) -> i32 {
        ATTRIBUTE_POOL - self.spent()
    }

    /// Highest of the four attribute values
    pub fn prime(&self) -> i32 {
        self.might
            .max(self.agility)
            .max(self.charisma)
            .max(self.intelligence)
    }

    /// Apply `delta` to one attribute if the pool bound allows it.
    ///
    /// Returns whether the adjustment was applied. A rejected adjustment
    /// leaves the pool untouched.
    pub fn adjust(&mut self, attr: Attribute, delta: i32) -> bool {
        let new_spent = self.spent() + delta;
        if !(0..=ATTRIBUTE_POOL).contains(&new_spent) {
            return false;
        }
        let slot = match attr {
            Attribute::Might => &mut self.might,
            Attribute::Agility => &mut self.agility,
            Attribute::Charisma => &mut self.charisma,
            Attribute::Intelligence => &mut self.intelligence,
        };
        *slot += delta;
        true
    }

    /// Replace all four values in one step, bypassing the budget check.
    ///
    /// Used when restoring a saved character; the loaded values are trusted.
    pub fn restore(&mut self, might: i32, agility: i32, charisma: i32, intelligence: i32) {
        self.might = might;
        self.agility = agility;
        self.charisma = charisma;
        self.intelligence = intelligence;
    }
}

impl Default for AttributePool {
    fn default() -> Self {
        Self::new()
    }
}
