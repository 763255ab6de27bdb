//! Shopping cart module.
//!
//! The cart is a reducer over a closed set of transitions: the store in
//! `store` applies one [`Transition`] at a time and always yields a state
//! whose derived totals match its line items. The facade in `facade` is the
//! only sanctioned surface consumers use to read or mutate the cart.

mod facade;
mod state;
mod store;

pub use facade::{CartHandle, CartScope};
pub use state::{CartLine, CartState};
pub use store::{apply, CartStore, Transition, MAX_QUANTITY_PER_LINE};
