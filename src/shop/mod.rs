//! Shop catalog and purchase flow.
//!
//! Durable items go through `PlayerState::buy_item` (idempotent,
//! inventory-backed); food is consumable and routes through
//! `spend_coins` + `feed_character` without ever entering the
//! inventory.

pub mod data;
pub mod logic;
pub mod types;

pub use data::{get_shop_item, ALL_SHOP_ITEMS};
pub use logic::purchase;
pub use types::{ItemCategory, Rarity, ShopItem};
