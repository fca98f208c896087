//! Read-only projections over [`CartState`].

use super::CartState;
use crate::models::CartItem;

/// The cart's line items in insertion order.
pub fn select_cart(state: &CartState) -> &[CartItem] {
    state.items()
}

pub fn select_item<'a>(state: &'a CartState, name: &str) -> Option<&'a CartItem> {
    state.items().iter().find(|item| item.name == name)
}

/// Total number of units across all lines.
pub fn select_item_count(state: &CartState) -> u32 {
    state
        .items()
        .iter()
        .fold(0u32, |total, item| total.saturating_add(item.quantity))
}

/// Number of distinct lines.
pub fn select_line_count(state: &CartState) -> usize {
    state.items().len()
}
