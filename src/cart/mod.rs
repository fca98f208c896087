//! The cart store: the single owned list of cart line items and the three
//! transitions allowed to change it.
//!
//! Every transition is a total function. Removing or deleting a name that is
//! not in the cart leaves the state untouched, and nothing here returns an
//! error. Callers validate items before dispatching them (see
//! [`CartItem::validate`]).
//!
//! The pure form is [`reduce`] / [`CartState::apply`]; [`CartStore`] owns one
//! state and funnels every mutation through `apply`.

pub mod selectors;

use crate::models::CartItem;

pub use selectors::*;

/// The ordered set of line items. Names are unique across `items`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartState {
    items: Vec<CartItem>,
}

/// A request to change the cart.
#[derive(Debug, Clone, PartialEq)]
pub enum CartIntent {
    /// Add one of an item, merging into an existing line with the same name.
    AddItem(CartItem),
    /// Take one off the named line, dropping the line when it reaches zero.
    RemoveItem(String),
    /// Drop the named line whatever its quantity.
    DeleteItem(String),
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one intent, producing the next state.
    pub fn apply(mut self, intent: CartIntent) -> Self {
        match intent {
            CartIntent::AddItem(candidate) => self.add(candidate),
            CartIntent::RemoveItem(name) => self.remove(&name),
            CartIntent::DeleteItem(name) => self.delete(&name),
        }
        self
    }

    pub(crate) fn items(&self) -> &[CartItem] {
        &self.items
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name == name)
    }

    fn add(&mut self, mut candidate: CartItem) {
        match self.position(&candidate.name) {
            // The existing line keeps its own price and image.
            Some(idx) => {
                let existing = &mut self.items[idx];
                existing.quantity = existing.quantity.saturating_add(1);
            }
            None => {
                candidate.quantity = candidate.quantity.max(1);
                self.items.push(candidate);
            }
        }
    }

    fn remove(&mut self, name: &str) {
        match self.position(name) {
            Some(idx) if self.items[idx].quantity > 1 => self.items[idx].quantity -= 1,
            _ => self.delete(name),
        }
    }

    fn delete(&mut self, name: &str) {
        self.items.retain(|item| item.name != name);
    }
}

impl From<Vec<CartItem>> for CartState {
    /// Build a state from a list of items, folding duplicates through
    /// `addItem` so the unique-name invariant holds.
    fn from(items: Vec<CartItem>) -> Self {
        items
            .into_iter()
            .fold(Self::new(), |state, item| state.apply(CartIntent::AddItem(item)))
    }
}

/// Copy-on-write transition: `state` is left as it was.
pub fn reduce(state: &CartState, intent: CartIntent) -> CartState {
    state.clone().apply(intent)
}

/// The owned cart instance handed to the views.
///
/// State can only be read through [`CartStore::state`] and the selectors;
/// the three intent methods are the only way to change it.
#[derive(Debug, Default)]
pub struct CartStore {
    state: CartState,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: CartState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &CartState {
        &self.state
    }

    pub fn dispatch(&mut self, intent: CartIntent) -> &CartState {
        tracing::debug!(?intent, "applying cart intent");
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(intent);
        tracing::debug!(
            lines = select_line_count(&self.state),
            items = select_item_count(&self.state),
            "cart updated"
        );
        &self.state
    }

    pub fn add_item(&mut self, item: CartItem) -> &CartState {
        self.dispatch(CartIntent::AddItem(item))
    }

    pub fn remove_item(&mut self, name: impl Into<String>) -> &CartState {
        self.dispatch(CartIntent::RemoveItem(name.into()))
    }

    pub fn delete_item(&mut self, name: impl Into<String>) -> &CartState {
        self.dispatch(CartIntent::DeleteItem(name.into()))
    }

    pub fn select_cart(&self) -> &[CartItem] {
        select_cart(&self.state)
    }
}
