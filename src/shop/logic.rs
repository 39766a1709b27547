//! Purchase flow.

use super::types::ShopItem;
use crate::core::player_state::PlayerState;

/// Attempts to buy an item, routing by category.
///
/// Food spends coins then applies its effect immediately; it never
/// enters the inventory. Every other category is a durable purchase
/// that fails if the item is already owned. Either way, a `false`
/// return means no state changed.
pub fn purchase(state: &mut PlayerState, item: &ShopItem) -> bool {
    if item.is_consumable() {
        if !state.spend_coins(item.price) {
            return false;
        }
        state.feed_character(item.hunger_restore, item.energy_bonus);
        true
    } else {
        state.buy_item(item.id, item.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shop::data::get_shop_item;

    #[test]
    fn test_food_purchase_is_consumable() {
        let mut state = PlayerState::new(0);
        state.earn_coins(100);
        state.hunger = 50;
        state.energy = 60;

        let lunch = get_shop_item("hospital_lunch").unwrap();
        assert!(purchase(&mut state, lunch));

        assert_eq!(state.coins, 50);
        assert_eq!(state.hunger, 10);
        assert_eq!(state.energy, 70);
        // Never enters the inventory, so it can be bought again
        assert!(!state.owned_items.contains("hospital_lunch"));
        assert!(purchase(&mut state, lunch));
        assert_eq!(state.coins, 0);
    }

    #[test]
    fn test_food_purchase_unaffordable_no_effect() {
        let mut state = PlayerState::new(0);
        state.earn_coins(10);
        state.hunger = 50;

        let lunch = get_shop_item("hospital_lunch").unwrap();
        assert!(!purchase(&mut state, lunch));
        assert_eq!(state.coins, 10);
        assert_eq!(state.hunger, 50);
    }

    #[test]
    fn test_durable_purchase_once_only() {
        let mut state = PlayerState::new(0);
        state.earn_coins(1_000);

        let coat = get_shop_item("white_coat_skin").unwrap();
        assert!(purchase(&mut state, coat));
        assert_eq!(state.coins, 900);
        assert!(state.owned_items.contains("white_coat_skin"));

        assert!(!purchase(&mut state, coat));
        assert_eq!(state.coins, 900);
    }
}
