//! Guild buildings: unlocked by hero level, paid for in gold.

use crate::data::DataError;

#[derive(Debug, Clone, Copy)]
pub struct BuildingDef {
    pub id: &'static str,
    pub name: &'static str,
    pub unlock_level: u32,
    pub cost: u64,
    pub description: &'static str,
}

static BUILDINGS: [BuildingDef; 8] = [
    BuildingDef {
        id: "forge",
        name: "Forge",
        unlock_level: 2,
        cost: 50,
        description: "Craft weapons and armor.",
    },
    BuildingDef {
        id: "alchemy_lab",
        name: "Alchemy Lab",
        unlock_level: 5,
        cost: 100,
        description: "Brew potions for combat.",
    },
    BuildingDef {
        id: "librarium",
        name: "Librarium",
        unlock_level: 8,
        cost: 250,
        description: "Store lore about locations and monsters.",
    },
    BuildingDef {
        id: "skill_shrine",
        name: "Shrine of Skills",
        unlock_level: 10,
        cost: 500,
        description: "Learn combat skills and magic.",
    },
    BuildingDef {
        id: "enchanting_table",
        name: "Enchanting Table",
        unlock_level: 20,
        cost: 2000,
        description: "Imbue items with magic.",
    },
    BuildingDef {
        id: "recruitment_center",
        name: "Recruitment Center",
        unlock_level: 30,
        cost: 5000,
        description: "Hire heroes for your guild.",
    },
    BuildingDef {
        id: "training_grounds",
        name: "Training Grounds",
        unlock_level: 40,
        cost: 10000,
        description: "Train and level up guild heroes.",
    },
    BuildingDef {
        id: "temple",
        name: "Temple",
        unlock_level: 50,
        cost: 50000,
        description: "Perform rituals for temporary buffs.",
    },
];

pub fn get_buildings() -> &'static [BuildingDef] {
    &BUILDINGS
}

pub fn get_building(id: &str) -> Result<&'static BuildingDef, DataError> {
    BUILDINGS
        .iter()
        .find(|building| building.id == id)
        .ok_or_else(|| DataError::UnknownBuilding(id.to_string()))
}
