//! Typed per-visitor session state: the cart and the favourites list.
//!
//! Both are plain ordered lists of item ids stored under fixed session keys
//! (`cart` and `favourite_items`, kept identical to the documented session
//! shape for compatibility with existing cookies). The containers expose
//! explicit `load`/`save` against the session plus pure mutation methods,
//! so the list semantics are testable without any IO.
//!
//! Neither list is checked against the catalog when written: an id for a
//! since-deleted item may linger in a session and is dropped at display
//! time by the resolution query, not from the stored list.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::error::AppError;

/// Session key holding the cart list.
pub const CART_KEY: &str = "cart";

/// Session key holding the favourites list.
pub const FAVOURITES_KEY: &str = "favourite_items";

/// The visitor's cart: an ordered list of item ids with duplicates allowed.
///
/// Adding the same item twice means quantity two; [`Cart::quantities`]
/// folds the raw list into per-item counts for display.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart(Vec<i32>);

impl Cart {
    /// Loads the cart from the session; an absent key is an empty cart.
    pub async fn load(session: &Session) -> Result<Self, AppError> {
        Ok(session.get(CART_KEY).await?.unwrap_or_default())
    }

    /// Writes the cart back to the session.
    pub async fn save(&self, session: &Session) -> Result<(), AppError> {
        session.insert(CART_KEY, self).await?;
        Ok(())
    }

    /// Appends an item id. No catalog existence check.
    pub fn add(&mut self, item_id: i32) {
        self.0.push(item_id);
    }

    /// Removes the first occurrence of `item_id`, preserving the order of
    /// everything else. Returns whether anything was removed.
    pub fn remove_first(&mut self, item_id: i32) -> bool {
        match self.0.iter().position(|&id| id == item_id) {
            Some(pos) => {
                self.0.remove(pos);
                true
            }
            None => false,
        }
    }

    /// The raw id list, duplicates included.
    pub fn ids(&self) -> &[i32] {
        &self.0
    }

    /// Per-item occurrence counts, ordered by first occurrence.
    pub fn quantities(&self) -> Vec<(i32, usize)> {
        let mut out: Vec<(i32, usize)> = Vec::new();
        for &id in &self.0 {
            match out.iter_mut().find(|(seen, _)| *seen == id) {
                Some((_, count)) => *count += 1,
                None => out.push((id, 1)),
            }
        }
        out
    }
}

/// The visitor's favourites: a set-like ordered list of item ids.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favourites(Vec<i32>);

impl Favourites {
    /// Loads the favourites from the session; an absent key is empty.
    pub async fn load(session: &Session) -> Result<Self, AppError> {
        Ok(session.get(FAVOURITES_KEY).await?.unwrap_or_default())
    }

    /// Writes the favourites back to the session.
    pub async fn save(&self, session: &Session) -> Result<(), AppError> {
        session.insert(FAVOURITES_KEY, self).await?;
        Ok(())
    }

    /// Adds `item_id` if absent, removes it if present. Returns `true`
    /// when the id was added.
    pub fn toggle(&mut self, item_id: i32) -> bool {
        match self.0.iter().position(|&id| id == item_id) {
            Some(pos) => {
                self.0.remove(pos);
                false
            }
            None => {
                self.0.push(item_id);
                true
            }
        }
    }

    pub fn contains(&self, item_id: i32) -> bool {
        self.0.contains(&item_id)
    }

    /// The id list in insertion order.
    pub fn ids(&self) -> &[i32] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cart_add_twice_then_remove_once() {
        let mut cart = Cart::default();
        assert_eq!(cart.ids(), &[] as &[i32]);

        cart.add(5);
        assert_eq!(cart.ids(), &[5]);

        cart.add(5);
        assert_eq!(cart.ids(), &[5, 5]);

        assert!(cart.remove_first(5));
        assert_eq!(cart.ids(), &[5]);
    }

    #[test]
    fn cart_remove_drops_only_first_match() {
        let mut cart = Cart::default();
        for id in [1, 2, 1, 3] {
            cart.add(id);
        }

        assert!(cart.remove_first(1));
        assert_eq!(cart.ids(), &[2, 1, 3]);
    }

    #[test]
    fn cart_remove_of_absent_id_is_a_no_op() {
        let mut cart = Cart::default();
        cart.add(7);

        assert!(!cart.remove_first(9));
        assert_eq!(cart.ids(), &[7]);
    }

    #[test]
    fn cart_quantities_fold_in_first_occurrence_order() {
        let mut cart = Cart::default();
        for id in [4, 9, 4, 2, 9, 4] {
            cart.add(id);
        }

        assert_eq!(cart.quantities(), vec![(4, 3), (9, 2), (2, 1)]);
    }

    #[test]
    fn favourite_toggle_twice_restores_the_list() {
        let mut favourites = Favourites::default();
        favourites.toggle(1);
        favourites.toggle(2);
        let before = favourites.clone();

        assert!(favourites.toggle(8));
        assert!(favourites.contains(8));
        assert!(!favourites.toggle(8));
        assert_eq!(favourites, before);
    }

    #[test]
    fn favourite_toggle_keeps_insertion_order() {
        let mut favourites = Favourites::default();
        favourites.toggle(3);
        favourites.toggle(1);
        favourites.toggle(2);
        favourites.toggle(1);

        assert_eq!(favourites.ids(), &[3, 2]);
    }
}
