//! Domain models for the storefront.
//!
//! - [`CartItem`]: a line in the shopping cart, keyed by product name.
//! - [`Product`]: a catalog entry shown on the listing page.
//! - [`CartView`], [`LandingView`], [`ListingEntry`]: the shapes the three
//!   views render.

mod cart_item;
mod product;
mod views;

pub use cart_item::*;
pub use product::*;
pub use views::*;
