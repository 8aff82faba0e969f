//! Cities and their quest boards.
//!
//! Quests unlock sequentially: each names the quests that must be fully
//! collected before it appears on the board.

use crate::data::DataError;

#[derive(Debug, Clone, Copy)]
pub struct CityDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Reputation at which the city will sponsor a hero commission.
    pub max_reputation: u64,
}

static CITIES: [CityDef; 1] = [CityDef {
    id: "millbrook",
    name: "Millbrook",
    description: "A peaceful farming village besieged by goblin raiders from the nearby woods.",
    max_reputation: 1500,
}];

pub fn get_all_cities() -> &'static [CityDef] {
    &CITIES
}

pub fn get_city(id: &str) -> Result<&'static CityDef, DataError> {
    CITIES
        .iter()
        .find(|city| city.id == id)
        .ok_or_else(|| DataError::UnknownCity(id.to_string()))
}

#[derive(Debug, Clone, Copy)]
pub struct QuestDef {
    pub id: &'static str,
    pub city_id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub zone_id: &'static str,
    pub reputation_reward: u64,
    pub gold_reward: u64,
    pub unlock_conditions: &'static [&'static str],
    pub is_final: bool,
}

static QUESTS: [QuestDef; 10] = [
    QuestDef {
        id: "millbrook_1",
        city_id: "millbrook",
        name: "Goblin Scouts",
        description: "Goblin scouts have been spotted near the farms. Drive them off.",
        zone_id: "millbrook_zone_1",
        reputation_reward: 70,
        gold_reward: 100,
        unlock_conditions: &[],
        is_final: false,
    },
    QuestDef {
        id: "millbrook_2",
        city_id: "millbrook",
        name: "Raiding Party",
        description: "A small raiding party is targeting the outer farms.",
        zone_id: "millbrook_zone_2",
        reputation_reward: 84,
        gold_reward: 150,
        unlock_conditions: &["millbrook_1"],
        is_final: false,
    },
    QuestDef {
        id: "millbrook_3",
        city_id: "millbrook",
        name: "The Archer Threat",
        description: "Goblin archers are harassing travelers on the road.",
        zone_id: "millbrook_zone_3",
        reputation_reward: 101,
        gold_reward: 200,
        unlock_conditions: &["millbrook_2"],
        is_final: false,
    },
    QuestDef {
        id: "millbrook_4",
        city_id: "millbrook",
        name: "Warg Riders",
        description: "Goblins riding wargs have been attacking caravans.",
        zone_id: "millbrook_zone_4",
        reputation_reward: 121,
        gold_reward: 250,
        unlock_conditions: &["millbrook_3"],
        is_final: false,
    },
    QuestDef {
        id: "millbrook_5",
        city_id: "millbrook",
        name: "The Shaman Circle",
        description: "Goblin shamans are performing dark rituals in the woods.",
        zone_id: "millbrook_zone_5",
        reputation_reward: 145,
        gold_reward: 300,
        unlock_conditions: &["millbrook_4"],
        is_final: false,
    },
    QuestDef {
        id: "millbrook_6",
        city_id: "millbrook",
        name: "Berserker Assault",
        description: "Crazed goblin berserkers are launching attacks on the village.",
        zone_id: "millbrook_zone_6",
        reputation_reward: 174,
        gold_reward: 350,
        unlock_conditions: &["millbrook_5"],
        is_final: false,
    },
    QuestDef {
        id: "millbrook_7",
        city_id: "millbrook",
        name: "The War Camp",
        description: "A goblin war camp has been established nearby. It must be destroyed.",
        zone_id: "millbrook_zone_7",
        reputation_reward: 209,
        gold_reward: 400,
        unlock_conditions: &["millbrook_6"],
        is_final: false,
    },
    QuestDef {
        id: "millbrook_8",
        city_id: "millbrook",
        name: "Captain's Guard",
        description: "A goblin captain commands a formidable guard. Take them out.",
        zone_id: "millbrook_zone_8",
        reputation_reward: 251,
        gold_reward: 450,
        unlock_conditions: &["millbrook_7"],
        is_final: false,
    },
    QuestDef {
        id: "millbrook_9",
        city_id: "millbrook",
        name: "The Warlord's Elite",
        description: "The goblin warlord's elite troops are preparing a major assault.",
        zone_id: "millbrook_zone_9",
        reputation_reward: 301,
        gold_reward: 500,
        unlock_conditions: &["millbrook_8"],
        is_final: false,
    },
    QuestDef {
        id: "millbrook_10",
        city_id: "millbrook",
        name: "Slay the Goblin Chieftain",
        description: "End the goblin threat once and for all. Storm the chieftain's stronghold.",
        zone_id: "millbrook_zone_10",
        reputation_reward: 361,
        gold_reward: 750,
        unlock_conditions: &["millbrook_9"],
        is_final: true,
    },
];

pub fn get_all_quests() -> &'static [QuestDef] {
    &QUESTS
}

pub fn get_quest(id: &str) -> Result<&'static QuestDef, DataError> {
    QUESTS
        .iter()
        .find(|quest| quest.id == id)
        .ok_or_else(|| DataError::UnknownQuest(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::zones::get_zone;

    #[test]
    fn test_quest_lookup() {
        let quest = get_quest("millbrook_10").unwrap();
        assert!(quest.is_final);
        assert!(get_quest("millbrook_11").is_err());
    }

    #[test]
    fn test_quests_form_a_chain() {
        for (index, quest) in QUESTS.iter().enumerate() {
            if index == 0 {
                assert!(quest.unlock_conditions.is_empty());
            } else {
                assert_eq!(quest.unlock_conditions.len(), 1);
                assert_eq!(quest.unlock_conditions[0], QUESTS[index - 1].id);
            }
            assert!(get_zone(quest.zone_id).is_ok());
            assert!(get_city(quest.city_id).is_ok());
        }
    }

    #[test]
    fn test_max_reputation_is_reachable() {
        let total: u64 = QUESTS.iter().map(|quest| quest.reputation_reward).sum();
        let city = get_city("millbrook").unwrap();
        assert!(total >= city.max_reputation);
    }
}
