//! Shop item types.

use serde::{Deserialize, Serialize};

/// Item category. Food is the only consumable category; everything
/// else is durable and owned at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    Powerup,
    Cosmetic,
    Content,
    Food,
}

/// Item rarity. Serialized with the original catalog's Portuguese
/// tags so existing catalog data round-trips unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rarity {
    #[serde(rename = "comum")]
    Common,
    #[serde(rename = "raro")]
    Rare,
    #[serde(rename = "epico")]
    Epic,
    #[serde(rename = "lendario")]
    Legendary,
}

/// Static definition of a shop item.
#[derive(Debug, Clone, Copy)]
pub struct ShopItem {
    pub id: &'static str,
    pub name: &'static str,
    pub price: u64,
    pub category: ItemCategory,
    pub rarity: Rarity,
    /// Food only: hunger removed on consumption.
    pub hunger_restore: u32,
    /// Food only: energy granted on consumption.
    pub energy_bonus: u32,
}

impl ShopItem {
    pub fn is_consumable(&self) -> bool {
        self.category == ItemCategory::Food
    }
}
