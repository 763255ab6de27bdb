//! The cart access facade.
//!
//! Consumers never reach into the store directly. A [`CartScope`] owns the
//! store for one browsing session and hands out [`CartHandle`]s; every read
//! and write goes through a handle, and every mutation publishes the new
//! state to subscribed watchers.
//!
//! The model is single-threaded and synchronous: transitions are applied one
//! at a time in call order, so there are no locks and no interleaving.

use crate::cart::state::CartState;
use crate::cart::store::{CartStore, Transition};
use crate::error::CommerceError;
use crate::money::Money;
use shopfront_catalog::{Product, ProductId};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Watcher = Rc<dyn Fn(&CartState)>;

struct ScopeInner {
    store: CartStore,
    watchers: Vec<Watcher>,
}

/// Owner of the cart store for one browsing session.
///
/// The scope is explicitly constructed rather than living in ambient global
/// state; consumers receive handles from it. Dropping the scope ends the
/// session, after which any surviving handle fails fast with
/// [`CommerceError::CartScopeEnded`].
pub struct CartScope {
    inner: Rc<RefCell<ScopeInner>>,
}

impl CartScope {
    /// Start a session with an empty cart.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(ScopeInner {
                store: CartStore::new(),
                watchers: Vec::new(),
            })),
        }
    }

    /// Hand out a handle for a consumer.
    pub fn handle(&self) -> CartHandle {
        CartHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }
}

impl Default for CartScope {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CartScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartScope")
            .field("state", self.inner.borrow().store.state())
            .finish()
    }
}

/// The read/write surface consumers use to interact with the cart.
///
/// Handles are cheap to clone and deliberately `!Send`; all operations run
/// synchronously on the session thread.
#[derive(Clone)]
pub struct CartHandle {
    inner: Weak<RefCell<ScopeInner>>,
}

impl CartHandle {
    fn scope(&self) -> Result<Rc<RefCell<ScopeInner>>, CommerceError> {
        self.inner.upgrade().ok_or(CommerceError::CartScopeEnded)
    }

    /// Apply a transition, then publish the new state to watchers.
    fn dispatch(&self, transition: Transition) -> Result<CartState, CommerceError> {
        let scope = self.scope()?;
        // Watcher callbacks run after the borrow is released so a watcher may
        // itself call back into the cart.
        let (state, watchers) = {
            let mut inner = scope.borrow_mut();
            let state = inner.store.dispatch(transition).clone();
            (state, inner.watchers.clone())
        };
        for watcher in &watchers {
            watcher(&state);
        }
        Ok(state)
    }

    /// Add a product to the cart.
    ///
    /// Duplicate products merge into one line with summed quantity, clamped
    /// to [`MAX_QUANTITY_PER_LINE`]. Adding an unavailable product or a
    /// non-positive quantity leaves the cart unchanged.
    ///
    /// [`MAX_QUANTITY_PER_LINE`]: crate::cart::MAX_QUANTITY_PER_LINE
    pub fn add_item(&self, product: &Product, quantity: i64) -> Result<CartState, CommerceError> {
        if !product.is_available() {
            tracing::warn!(product_id = %product.id, "rejected add of unavailable product");
        } else {
            tracing::debug!(product_id = %product.id, quantity, "add item");
        }
        self.dispatch(Transition::AddItem {
            product: product.clone(),
            quantity,
        })
    }

    /// Remove a product's line. Unknown ids are a no-op.
    pub fn remove_item(&self, product_id: ProductId) -> Result<CartState, CommerceError> {
        tracing::debug!(%product_id, "remove item");
        self.dispatch(Transition::RemoveItem { product_id })
    }

    /// Set a line's quantity; zero or negative removes the line.
    pub fn update_quantity(
        &self,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<CartState, CommerceError> {
        tracing::debug!(%product_id, quantity, "update quantity");
        self.dispatch(Transition::UpdateQuantity {
            product_id,
            quantity,
        })
    }

    /// Discard all lines.
    pub fn clear_cart(&self) -> Result<CartState, CommerceError> {
        tracing::debug!("clear cart");
        self.dispatch(Transition::Clear)
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> Result<CartState, CommerceError> {
        Ok(self.scope()?.borrow().store.state().clone())
    }

    /// Total quantity across all lines.
    pub fn item_count(&self) -> Result<i64, CommerceError> {
        Ok(self.scope()?.borrow().store.state().item_count)
    }

    /// Sum of all line subtotals.
    pub fn total(&self) -> Result<Money, CommerceError> {
        Ok(self.scope()?.borrow().store.state().total)
    }

    /// Register a watcher invoked with each state produced by a mutation.
    pub fn subscribe(
        &self,
        watcher: impl Fn(&CartState) + 'static,
    ) -> Result<(), CommerceError> {
        self.scope()?.borrow_mut().watchers.push(Rc::new(watcher));
        Ok(())
    }
}

impl std::fmt::Debug for CartHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartHandle")
            .field("active", &self.inner.upgrade().is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn product(id: i64, cents: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {}", id),
            price_in_cents: cents,
            image_url: format!("https://example.com/{}.jpg", id),
            description: None,
            category: None,
            in_stock: None,
            stock: None,
        }
    }

    #[test]
    fn test_handle_mutations_flow_through_store() {
        let scope = CartScope::new();
        let cart = scope.handle();

        cart.add_item(&product(1, 1000), 2).unwrap();
        cart.add_item(&product(2, 2500), 1).unwrap();
        assert_eq!(cart.item_count().unwrap(), 3);
        assert_eq!(cart.total().unwrap().amount_cents, 4500);

        cart.update_quantity(ProductId::new(1), 1).unwrap();
        assert_eq!(cart.total().unwrap().amount_cents, 3500);

        cart.remove_item(ProductId::new(2)).unwrap();
        cart.clear_cart().unwrap();
        assert!(cart.state().unwrap().is_empty());
    }

    #[test]
    fn test_clones_observe_the_same_cart() {
        let scope = CartScope::new();
        let a = scope.handle();
        let b = a.clone();

        a.add_item(&product(1, 1000), 1).unwrap();
        assert_eq!(b.item_count().unwrap(), 1);
    }

    #[test]
    fn test_subscribers_see_each_new_state() {
        let scope = CartScope::new();
        let cart = scope.handle();

        let seen = Rc::new(Cell::new(0u32));
        let last_count = Rc::new(Cell::new(0i64));
        {
            let seen = seen.clone();
            let last_count = last_count.clone();
            cart.subscribe(move |state| {
                seen.set(seen.get() + 1);
                last_count.set(state.item_count);
            })
            .unwrap();
        }

        cart.add_item(&product(1, 1000), 2).unwrap();
        cart.update_quantity(ProductId::new(1), 5).unwrap();
        cart.clear_cart().unwrap();

        assert_eq!(seen.get(), 3);
        assert_eq!(last_count.get(), 0);
    }

    #[test]
    fn test_state_returns_a_snapshot() {
        let scope = CartScope::new();
        let cart = scope.handle();
        cart.add_item(&product(1, 1000), 1).unwrap();

        let snapshot = cart.state().unwrap();
        cart.clear_cart().unwrap();

        // The earlier snapshot is unaffected by later transitions.
        assert_eq!(snapshot.item_count, 1);
        assert!(cart.state().unwrap().is_empty());
    }

    #[test]
    fn test_handle_outliving_scope_fails_fast() {
        let cart = {
            let scope = CartScope::new();
            scope.handle()
        };
        assert!(matches!(
            cart.state(),
            Err(CommerceError::CartScopeEnded)
        ));
        assert!(matches!(
            cart.add_item(&product(1, 1000), 1),
            Err(CommerceError::CartScopeEnded)
        ));
    }
}
