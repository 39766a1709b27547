//! Static shop catalog.

use super::types::{ItemCategory, Rarity, ShopItem};

/// All shop items, id-keyed via [`get_shop_item`].
pub const ALL_SHOP_ITEMS: &[ShopItem] = &[
    // Food (consumable)
    ShopItem {
        id: "cafezinho",
        name: "Espresso Shot",
        price: 20,
        category: ItemCategory::Food,
        rarity: Rarity::Common,
        hunger_restore: 10,
        energy_bonus: 5,
    },
    ShopItem {
        id: "hospital_lunch",
        name: "Hospital Lunch",
        price: 50,
        category: ItemCategory::Food,
        rarity: Rarity::Common,
        hunger_restore: 40,
        energy_bonus: 10,
    },
    ShopItem {
        id: "energy_smoothie",
        name: "Energy Smoothie",
        price: 90,
        category: ItemCategory::Food,
        rarity: Rarity::Rare,
        hunger_restore: 30,
        energy_bonus: 25,
    },
    ShopItem {
        id: "feast_tray",
        name: "Cafeteria Feast",
        price: 150,
        category: ItemCategory::Food,
        rarity: Rarity::Epic,
        hunger_restore: 100,
        energy_bonus: 20,
    },
    // Powerups
    ShopItem {
        id: "double_xp_shift",
        name: "Double XP Shift",
        price: 200,
        category: ItemCategory::Powerup,
        rarity: Rarity::Rare,
        hunger_restore: 0,
        energy_bonus: 0,
    },
    ShopItem {
        id: "second_opinion",
        name: "Second Opinion",
        price: 120,
        category: ItemCategory::Powerup,
        rarity: Rarity::Common,
        hunger_restore: 0,
        energy_bonus: 0,
    },
    // Cosmetics
    ShopItem {
        id: "white_coat_skin",
        name: "Classic White Coat",
        price: 100,
        category: ItemCategory::Cosmetic,
        rarity: Rarity::Common,
        hunger_restore: 0,
        energy_bonus: 0,
    },
    ShopItem {
        id: "golden_stethoscope",
        name: "Golden Stethoscope",
        price: 500,
        category: ItemCategory::Cosmetic,
        rarity: Rarity::Legendary,
        hunger_restore: 0,
        energy_bonus: 0,
    },
    // Content
    ShopItem {
        id: "pocket_atlas",
        name: "Pocket Anatomy Atlas",
        price: 120,
        category: ItemCategory::Content,
        rarity: Rarity::Common,
        hunger_restore: 0,
        energy_bonus: 0,
    },
    ShopItem {
        id: "rare_case_pack",
        name: "Rare Case Pack",
        price: 300,
        category: ItemCategory::Content,
        rarity: Rarity::Epic,
        hunger_restore: 0,
        energy_bonus: 0,
    },
];

/// Looks up a shop item by id.
pub fn get_shop_item(id: &str) -> Option<&'static ShopItem> {
    ALL_SHOP_ITEMS.iter().find(|i| i.id == id)
}
