use serde::{Deserialize, Serialize};

use crate::hero::stats::StatKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquipmentSlot {
    Weapon,
    Armor,
    Accessory,
}

impl EquipmentSlot {
    pub fn all() -> [EquipmentSlot; 3] {
        [
            EquipmentSlot::Weapon,
            EquipmentSlot::Armor,
            EquipmentSlot::Accessory,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            EquipmentSlot::Weapon => "Weapon",
            EquipmentSlot::Armor => "Armor",
            EquipmentSlot::Accessory => "Accessory",
        }
    }
}

/// Which number an item feeds into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemStat {
    Damage,
    MaxHp,
    /// Accessory bonus applied to all four base stats.
    All,
    /// Accessory bonus applied to one named base stat.
    Single(StatKind),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquippedItem {
    pub name: String,
    pub stat: ItemStat,
    pub value: u32,
}

/// Hero equipment: three nullable slots, a shop tier index per slot, and
/// a forge improvement level for weapon and armor.
///
/// The tier index counts purchases up the slot's shop ladder (0 = still
/// on starter gear). Improvement levels reset whenever the tier advances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub weapon: Option<EquippedItem>,
    pub armor: Option<EquippedItem>,
    pub accessory: Option<EquippedItem>,
    pub weapon_tier: usize,
    pub armor_tier: usize,
    pub accessory_tier: usize,
    pub weapon_level: u32,
    pub armor_level: u32,
}

impl Equipment {
    pub fn new() -> Self {
        Self {
            weapon: None,
            armor: None,
            accessory: None,
            weapon_tier: 0,
            armor_tier: 0,
            accessory_tier: 0,
            weapon_level: 0,
            armor_level: 0,
        }
    }

    /// The gear a fresh hero crawls out of retirement with.
    pub fn starting_gear() -> Self {
        Self {
            weapon: Some(EquippedItem {
                name: "Rusty Sword".to_string(),
                stat: ItemStat::Damage,
                value: 2,
            }),
            armor: Some(EquippedItem {
                name: "Cloth Shirt".to_string(),
                stat: ItemStat::MaxHp,
                value: 10,
            }),
            accessory: None,
            weapon_tier: 0,
            armor_tier: 0,
            accessory_tier: 0,
            weapon_level: 0,
            armor_level: 0,
        }
    }

    pub fn get(&self, slot: EquipmentSlot) -> &Option<EquippedItem> {
        match slot {
            EquipmentSlot::Weapon => &self.weapon,
            EquipmentSlot::Armor => &self.armor,
            EquipmentSlot::Accessory => &self.accessory,
        }
    }

    pub fn set(&mut self, slot: EquipmentSlot, item: Option<EquippedItem>) {
        match slot {
            EquipmentSlot::Weapon => self.weapon = item,
            EquipmentSlot::Armor => self.armor = item,
            EquipmentSlot::Accessory => self.accessory = item,
        }
    }

    pub fn tier(&self, slot: EquipmentSlot) -> usize {
        match slot {
            EquipmentSlot::Weapon => self.weapon_tier,
            EquipmentSlot::Armor => self.armor_tier,
            EquipmentSlot::Accessory => self.accessory_tier,
        }
    }

    pub fn set_tier(&mut self, slot: EquipmentSlot, tier: usize) {
        match slot {
            EquipmentSlot::Weapon => self.weapon_tier = tier,
            EquipmentSlot::Armor => self.armor_tier = tier,
            EquipmentSlot::Accessory => self.accessory_tier = tier,
        }
    }

    /// Improvement level for a slot. Accessories have no forge track.
    pub fn improvement(&self, slot: EquipmentSlot) -> u32 {
        match slot {
            EquipmentSlot::Weapon => self.weapon_level,
            EquipmentSlot::Armor => self.armor_level,
            EquipmentSlot::Accessory => 0,
        }
    }

    pub fn set_improvement(&mut self, slot: EquipmentSlot, level: u32) {
        match slot {
            EquipmentSlot::Weapon => self.weapon_level = level,
            EquipmentSlot::Armor => self.armor_level = level,
            EquipmentSlot::Accessory => {}
        }
    }
}

impl Default for Equipment {
    fn default() -> Self {
        Self::new()
    }
}
