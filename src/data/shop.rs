//! Fixed price/power ladders for the three equipment slots.

use crate::hero::equipment::{EquipmentSlot, ItemStat};

#[derive(Debug, Clone, Copy)]
pub struct ShopItem {
    pub name: &'static str,
    pub stat: ItemStat,
    pub value: u32,
    pub cost: u64,
}

static WEAPON_TIERS: [ShopItem; 4] = [
    ShopItem {
        name: "Iron Sword",
        stat: ItemStat::Damage,
        value: 5,
        cost: 50,
    },
    ShopItem {
        name: "Steel Blade",
        stat: ItemStat::Damage,
        value: 12,
        cost: 200,
    },
    ShopItem {
        name: "Knight's Sword",
        stat: ItemStat::Damage,
        value: 25,
        cost: 600,
    },
    ShopItem {
        name: "Dragon Slayer",
        stat: ItemStat::Damage,
        value: 50,
        cost: 1800,
    },
];

static ARMOR_TIERS: [ShopItem; 4] = [
    ShopItem {
        name: "Leather Armor",
        stat: ItemStat::MaxHp,
        value: 30,
        cost: 40,
    },
    ShopItem {
        name: "Chain Mail",
        stat: ItemStat::MaxHp,
        value: 70,
        cost: 180,
    },
    ShopItem {
        name: "Plate Armor",
        stat: ItemStat::MaxHp,
        value: 150,
        cost: 550,
    },
    ShopItem {
        name: "Dragon Scale",
        stat: ItemStat::MaxHp,
        value: 300,
        cost: 1600,
    },
];

static ACCESSORY_TIERS: [ShopItem; 4] = [
    ShopItem {
        name: "Bronze Trinket",
        stat: ItemStat::All,
        value: 1,
        cost: 75,
    },
    ShopItem {
        name: "Silver Charm",
        stat: ItemStat::All,
        value: 2,
        cost: 200,
    },
    ShopItem {
        name: "Gold Amulet",
        stat: ItemStat::All,
        value: 3,
        cost: 450,
    },
    ShopItem {
        name: "Enchanted Relic",
        stat: ItemStat::All,
        value: 4,
        cost: 900,
    },
];

pub fn shop_ladder(slot: EquipmentSlot) -> &'static [ShopItem; 4] {
    match slot {
        EquipmentSlot::Weapon => &WEAPON_TIERS,
        EquipmentSlot::Armor => &ARMOR_TIERS,
        EquipmentSlot::Accessory => &ACCESSORY_TIERS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ladders_increase_in_cost_and_power() {
        for slot in EquipmentSlot::all() {
            let ladder = shop_ladder(slot);
            for pair in ladder.windows(2) {
                assert!(pair[1].cost > pair[0].cost);
                assert!(pair[1].value > pair[0].value);
            }
        }
    }
}
