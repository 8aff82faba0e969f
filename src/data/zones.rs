//! Combat zones and the enemy bestiary.

use crate::data::DataError;

/// Base stats for a creature type. HP and XP scale with the spawned
/// enemy's level.
#[derive(Debug, Clone, Copy)]
pub struct EnemyTypeDef {
    pub id: &'static str,
    pub name: &'static str,
    pub base_hp: u32,
    pub base_xp: u64,
}

static ENEMY_TYPES: [EnemyTypeDef; 14] = [
    EnemyTypeDef {
        id: "goblin_runt",
        name: "Goblin Runt",
        base_hp: 20,
        base_xp: 6,
    },
    EnemyTypeDef {
        id: "goblin_scout",
        name: "Goblin Scout",
        base_hp: 28,
        base_xp: 8,
    },
    EnemyTypeDef {
        id: "goblin_warrior",
        name: "Goblin Warrior",
        base_hp: 38,
        base_xp: 12,
    },
    EnemyTypeDef {
        id: "goblin_archer",
        name: "Goblin Archer",
        base_hp: 30,
        base_xp: 10,
    },
    EnemyTypeDef {
        id: "goblin_shaman",
        name: "Goblin Shaman",
        base_hp: 32,
        base_xp: 14,
    },
    EnemyTypeDef {
        id: "goblin_berserker",
        name: "Goblin Berserker",
        base_hp: 45,
        base_xp: 16,
    },
    EnemyTypeDef {
        id: "goblin_enforcer",
        name: "Goblin Enforcer",
        base_hp: 55,
        base_xp: 18,
    },
    EnemyTypeDef {
        id: "goblin_marauder",
        name: "Goblin Marauder",
        base_hp: 50,
        base_xp: 17,
    },
    EnemyTypeDef {
        id: "warg",
        name: "Warg",
        base_hp: 42,
        base_xp: 14,
    },
    EnemyTypeDef {
        id: "warg_alpha",
        name: "Alpha Warg",
        base_hp: 60,
        base_xp: 20,
    },
    EnemyTypeDef {
        id: "goblin_captain",
        name: "Goblin Captain",
        base_hp: 70,
        base_xp: 25,
    },
    EnemyTypeDef {
        id: "goblin_warlord",
        name: "Goblin Warlord",
        base_hp: 90,
        base_xp: 35,
    },
    EnemyTypeDef {
        id: "goblin_chieftain",
        name: "Goblin Chieftain",
        base_hp: 120,
        base_xp: 50,
    },
    EnemyTypeDef {
        id: "goblin_king",
        name: "Goblin King",
        base_hp: 200,
        base_xp: 100,
    },
];

pub fn get_enemy_type(id: &str) -> Result<&'static EnemyTypeDef, DataError> {
    ENEMY_TYPES
        .iter()
        .find(|enemy_type| enemy_type.id == id)
        .ok_or_else(|| DataError::UnknownEnemyType(id.to_string()))
}

/// Inclusive roll ranges for one stage row of a fixed-table zone.
#[derive(Debug, Clone, Copy)]
pub struct StageStats {
    pub hp: (u32, u32),
    pub damage: (u32, u32),
    pub gold: (u64, u64),
    pub xp: (u64, u64),
}

#[derive(Debug, Clone, Copy)]
pub struct BossDef {
    pub enemy_type: &'static str,
    pub level: u32,
}

/// A combat area tied to a quest. Zones with `stage_stats` roll enemy
/// numbers straight from the tables (row 5 is the boss row); zones
/// without them derive everything from tier, enemy level, and the
/// bestiary's base stats.
#[derive(Debug, Clone, Copy)]
pub struct ZoneDef {
    pub id: &'static str,
    pub name: &'static str,
    pub tier: u32,
    pub enemy_level: u32,
    pub enemies: &'static [&'static str],
    pub boss: BossDef,
    pub stage_stats: Option<[StageStats; 5]>,
}

static ZONES: [ZoneDef; 10] = [
    ZoneDef {
        id: "millbrook_zone_1",
        name: "Farm Outskirts",
        tier: 1,
        enemy_level: 1,
        enemies: &["goblin_runt", "goblin_scout"],
        boss: BossDef {
            enemy_type: "goblin_scout",
            level: 2,
        },
        stage_stats: Some([
            StageStats {
                hp: (20, 25),
                damage: (5, 6),
                gold: (2, 3),
                xp: (2, 3),
            },
            StageStats {
                hp: (22, 27),
                damage: (6, 7),
                gold: (3, 4),
                xp: (3, 4),
            },
            StageStats {
                hp: (24, 29),
                damage: (7, 8),
                gold: (4, 5),
                xp: (4, 5),
            },
            StageStats {
                hp: (26, 31),
                damage: (8, 9),
                gold: (5, 6),
                xp: (5, 6),
            },
            StageStats {
                hp: (200, 210),
                damage: (12, 14),
                gold: (20, 36),
                xp: (20, 24),
            },
        ]),
    },
    ZoneDef {
        id: "millbrook_zone_2",
        name: "Wheat Fields",
        tier: 1,
        enemy_level: 2,
        enemies: &["goblin_scout", "goblin_warrior"],
        boss: BossDef {
            enemy_type: "goblin_warrior",
            level: 2,
        },
        stage_stats: Some([
            StageStats {
                hp: (30, 35),
                damage: (10, 11),
                gold: (7, 8),
                xp: (7, 8),
            },
            StageStats {
                hp: (32, 37),
                damage: (11, 12),
                gold: (8, 9),
                xp: (8, 9),
            },
            StageStats {
                hp: (34, 39),
                damage: (12, 13),
                gold: (9, 10),
                xp: (9, 10),
            },
            StageStats {
                hp: (36, 41),
                damage: (13, 14),
                gold: (10, 11),
                xp: (10, 11),
            },
            StageStats {
                hp: (270, 285),
                damage: (19, 21),
                gold: (40, 66),
                xp: (40, 44),
            },
        ]),
    },
    ZoneDef {
        id: "millbrook_zone_3",
        name: "Forest Road",
        tier: 1,
        enemy_level: 2,
        enemies: &["goblin_scout", "goblin_archer", "goblin_warrior"],
        boss: BossDef {
            enemy_type: "goblin_archer",
            level: 3,
        },
        stage_stats: Some([
            StageStats {
                hp: (40, 45),
                damage: (15, 16),
                gold: (12, 13),
                xp: (12, 13),
            },
            StageStats {
                hp: (42, 47),
                damage: (16, 17),
                gold: (13, 14),
                xp: (13, 14),
            },
            StageStats {
                hp: (44, 49),
                damage: (17, 18),
                gold: (14, 15),
                xp: (14, 15),
            },
            StageStats {
                hp: (46, 51),
                damage: (18, 19),
                gold: (15, 16),
                xp: (15, 16),
            },
            StageStats {
                hp: (340, 360),
                damage: (27, 29),
                gold: (60, 96),
                xp: (60, 64),
            },
        ]),
    },
    ZoneDef {
        id: "millbrook_zone_4",
        name: "Warg Den",
        tier: 2,
        enemy_level: 3,
        enemies: &["warg", "goblin_marauder"],
        boss: BossDef {
            enemy_type: "warg_alpha",
            level: 3,
        },
        stage_stats: Some([
            StageStats {
                hp: (50, 55),
                damage: (20, 21),
                gold: (17, 18),
                xp: (17, 18),
            },
            StageStats {
                hp: (52, 57),
                damage: (21, 22),
                gold: (18, 19),
                xp: (18, 19),
            },
            StageStats {
                hp: (54, 59),
                damage: (22, 23),
                gold: (19, 20),
                xp: (19, 20),
            },
            StageStats {
                hp: (56, 61),
                damage: (23, 24),
                gold: (20, 21),
                xp: (20, 21),
            },
            StageStats {
                hp: (410, 430),
                damage: (34, 36),
                gold: (80, 126),
                xp: (80, 84),
            },
        ]),
    },
    ZoneDef {
        id: "millbrook_zone_5",
        name: "Dark Grove",
        tier: 2,
        enemy_level: 3,
        enemies: &["goblin_shaman", "goblin_warrior", "goblin_archer"],
        boss: BossDef {
            enemy_type: "goblin_shaman",
            level: 4,
        },
        stage_stats: Some([
            StageStats {
                hp: (60, 65),
                damage: (25, 26),
                gold: (22, 23),
                xp: (22, 23),
            },
            StageStats {
                hp: (62, 67),
                damage: (26, 27),
                gold: (23, 24),
                xp: (23, 24),
            },
            StageStats {
                hp: (64, 69),
                damage: (27, 28),
                gold: (24, 25),
                xp: (24, 25),
            },
            StageStats {
                hp: (66, 71),
                damage: (28, 29),
                gold: (25, 26),
                xp: (25, 26),
            },
            StageStats {
                hp: (480, 505),
                damage: (42, 44),
                gold: (100, 156),
                xp: (100, 104),
            },
        ]),
    },
    ZoneDef {
        id: "millbrook_zone_6",
        name: "Ravaged Farms",
        tier: 2,
        enemy_level: 4,
        enemies: &["goblin_berserker", "goblin_enforcer", "goblin_marauder"],
        boss: BossDef {
            enemy_type: "goblin_berserker",
            level: 4,
        },
        stage_stats: Some([
            StageStats {
                hp: (70, 75),
                damage: (30, 31),
                gold: (27, 28),
                xp: (27, 28),
            },
            StageStats {
                hp: (72, 77),
                damage: (31, 32),
                gold: (28, 29),
                xp: (28, 29),
            },
            StageStats {
                hp: (74, 79),
                damage: (32, 33),
                gold: (29, 30),
                xp: (29, 30),
            },
            StageStats {
                hp: (76, 81),
                damage: (33, 34),
                gold: (30, 31),
                xp: (30, 31),
            },
            StageStats {
                hp: (550, 580),
                damage: (49, 51),
                gold: (120, 186),
                xp: (120, 124),
            },
        ]),
    },
    ZoneDef {
        id: "millbrook_zone_7",
        name: "Goblin War Camp",
        tier: 3,
        enemy_level: 4,
        enemies: &["goblin_enforcer", "goblin_berserker", "warg"],
        boss: BossDef {
            enemy_type: "goblin_captain",
            level: 4,
        },
        stage_stats: Some([
            StageStats {
                hp: (80, 85),
                damage: (35, 36),
                gold: (32, 33),
                xp: (32, 33),
            },
            StageStats {
                hp: (82, 87),
                damage: (36, 37),
                gold: (33, 34),
                xp: (33, 34),
            },
            StageStats {
                hp: (84, 89),
                damage: (37, 38),
                gold: (34, 35),
                xp: (34, 35),
            },
            StageStats {
                hp: (86, 91),
                damage: (38, 39),
                gold: (35, 36),
                xp: (35, 36),
            },
            StageStats {
                hp: (620, 650),
                damage: (57, 59),
                gold: (140, 216),
                xp: (140, 144),
            },
        ]),
    },
    ZoneDef {
        id: "millbrook_zone_8",
        name: "Captain's Stronghold",
        tier: 3,
        enemy_level: 5,
        enemies: &["goblin_captain", "goblin_enforcer", "warg_alpha"],
        boss: BossDef {
            enemy_type: "goblin_captain",
            level: 5,
        },
        stage_stats: Some([
            StageStats {
                hp: (90, 95),
                damage: (40, 41),
                gold: (37, 38),
                xp: (37, 38),
            },
            StageStats {
                hp: (92, 97),
                damage: (41, 42),
                gold: (38, 39),
                xp: (38, 39),
            },
            StageStats {
                hp: (94, 99),
                damage: (42, 43),
                gold: (39, 40),
                xp: (39, 40),
            },
            StageStats {
                hp: (96, 101),
                damage: (43, 44),
                gold: (40, 41),
                xp: (40, 41),
            },
            StageStats {
                hp: (695, 725),
                damage: (64, 66),
                gold: (160, 246),
                xp: (160, 164),
            },
        ]),
    },
    ZoneDef {
        id: "millbrook_zone_9",
        name: "Warlord's Domain",
        tier: 3,
        enemy_level: 5,
        enemies: &["goblin_enforcer", "goblin_berserker", "goblin_captain"],
        boss: BossDef {
            enemy_type: "goblin_warlord",
            level: 5,
        },
        stage_stats: Some([
            StageStats {
                hp: (100, 105),
                damage: (45, 46),
                gold: (42, 43),
                xp: (42, 43),
            },
            StageStats {
                hp: (102, 107),
                damage: (46, 47),
                gold: (43, 44),
                xp: (43, 44),
            },
            StageStats {
                hp: (104, 109),
                damage: (47, 48),
                gold: (44, 45),
                xp: (44, 45),
            },
            StageStats {
                hp: (106, 111),
                damage: (48, 49),
                gold: (45, 46),
                xp: (45, 46),
            },
            StageStats {
                hp: (765, 795),
                damage: (72, 74),
                gold: (180, 276),
                xp: (180, 184),
            },
        ]),
    },
    ZoneDef {
        id: "millbrook_zone_10",
        name: "Goblin Throne",
        tier: 4,
        enemy_level: 6,
        enemies: &["goblin_warlord", "goblin_chieftain", "warg_alpha"],
        boss: BossDef {
            enemy_type: "goblin_chieftain",
            level: 6,
        },
        stage_stats: Some([
            StageStats {
                hp: (110, 115),
                damage: (50, 51),
                gold: (47, 48),
                xp: (47, 48),
            },
            StageStats {
                hp: (112, 117),
                damage: (51, 52),
                gold: (48, 49),
                xp: (48, 49),
            },
            StageStats {
                hp: (114, 119),
                damage: (52, 53),
                gold: (49, 50),
                xp: (49, 50),
            },
            StageStats {
                hp: (116, 121),
                damage: (53, 54),
                gold: (50, 51),
                xp: (50, 51),
            },
            StageStats {
                hp: (750, 750),
                damage: (100, 105),
                gold: (320, 325),
                xp: (320, 325),
            },
        ]),
    },
];

pub fn get_all_zones() -> &'static [ZoneDef] {
    &ZONES
}

pub fn get_zone(id: &str) -> Result<&'static ZoneDef, DataError> {
    ZONES
        .iter()
        .find(|zone| zone.id == id)
        .ok_or_else(|| DataError::UnknownZone(id.to_string()))
}
