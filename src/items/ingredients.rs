//! Crafting ingredient drops.
//!
//! Each rarity tier carries an independent drop probability. A roll runs
//! one Bernoulli trial per allowed tier, so a single kill can drop
//! nothing, one ingredient, or several at once.

use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IngredientType {
    Essence,
    Fang,
    Hide,
}

impl IngredientType {
    pub fn all() -> [IngredientType; 3] {
        [
            IngredientType::Essence,
            IngredientType::Fang,
            IngredientType::Hide,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            IngredientType::Essence => "Essence",
            IngredientType::Fang => "Fang",
            IngredientType::Hide => "Hide",
        }
    }

    fn key(&self) -> &'static str {
        match self {
            IngredientType::Essence => "essence",
            IngredientType::Fang => "fang",
            IngredientType::Hide => "hide",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IngredientTierDef {
    pub id: &'static str,
    pub name: &'static str,
    pub drop_rate: f64,
}

static INGREDIENT_TIERS: [IngredientTierDef; 5] = [
    IngredientTierDef {
        id: "common",
        name: "Common",
        drop_rate: 0.50,
    },
    IngredientTierDef {
        id: "uncommon",
        name: "Uncommon",
        drop_rate: 0.15,
    },
    IngredientTierDef {
        id: "rare",
        name: "Rare",
        drop_rate: 0.05,
    },
    IngredientTierDef {
        id: "epic",
        name: "Epic",
        drop_rate: 0.015,
    },
    IngredientTierDef {
        id: "legendary",
        name: "Legendary",
        drop_rate: 0.005,
    },
];

pub fn all_ingredient_tiers() -> &'static [IngredientTierDef] {
    &INGREDIENT_TIERS
}

/// Tiers rollable in a zone of the given tier: zone tier 1 reaches
/// Common and Uncommon, each tier above opens one more rarity band.
pub fn allowed_tiers_for_zone_tier(zone_tier: u32) -> &'static [IngredientTierDef] {
    let count = (zone_tier as usize + 1).min(INGREDIENT_TIERS.len());
    &INGREDIENT_TIERS[..count]
}

#[derive(Debug, Clone, PartialEq)]
pub struct IngredientDrop {
    pub tier: IngredientTierDef,
    pub kind: IngredientType,
}

impl IngredientDrop {
    /// Inventory key, e.g. `common_essence`.
    pub fn key(&self) -> String {
        format!("{}_{}", self.tier.id, self.kind.key())
    }
}

/// One trial per allowed tier; every success contributes one drop of a
/// uniformly random ingredient type (rolled once per kill, so stacked
/// drops share a type). Trials are independent, not mutually exclusive.
pub fn roll_drops(allowed: &[IngredientTierDef], rng: &mut impl Rng) -> Vec<IngredientDrop> {
    let types = IngredientType::all();
    let kind = types[rng.gen_range(0..types.len())];

    let mut drops = Vec::new();
    for tier in allowed {
        if rng.gen::<f64>() < tier.drop_rate {
            drops.push(IngredientDrop { tier: *tier, kind });
        }
    }
    drops
}
