//! # Cart Store
//!
//! The mutation protocol around the live cart.
//!
//! ## Guarantees
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      CartStore Guarantees                               │
//! │                                                                         │
//! │  G1  Operations are serialized: the cart lock is held from first read  │
//! │      to commit, across the inventory await                             │
//! │  G2  The snapshot is written before the in-memory commit; a rejected   │
//! │      or failed operation changes neither                               │
//! │  G3  Every rejected operation broadcasts exactly one notice; accepted  │
//! │      operations broadcast nothing                                      │
//! │  G4  Failures never escape a mutating operation; callers observe      │
//! │      state and notices only                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tokio::sync::{broadcast, Mutex};
use tracing::{debug, info, warn};

use crate::error::StoreError;
use trolley_core::{Cart, CartError, CartLine, CartNotice, CartSnapshot, ProductId};
use trolley_db::{DbResult, SnapshotStore};
use trolley_inventory::InventoryClient;

/// Buffered notices per subscriber; a UI that falls this far behind only
/// loses the oldest signals.
const NOTICE_BUFFER: usize = 32;

/// Which public operation an internal failure belongs to.
///
/// Lookup and storage failures collapse into one generic signal per
/// operation kind; this picks the right one.
#[derive(Debug, Clone, Copy)]
enum OpKind {
    Add,
    Update,
    Remove,
}

/// The cart store.
///
/// Owns the authoritative in-process cart, generic over its two
/// collaborators so hosts can wire the HTTP inventory client and the SQLite
/// snapshot store while tests substitute in-memory fakes.
#[derive(Debug)]
pub struct CartStore<I, S> {
    inventory: I,
    snapshots: S,
    cart: Mutex<Cart>,
    notices: broadcast::Sender<CartNotice>,
}

impl<I, S> CartStore<I, S>
where
    I: InventoryClient,
    S: SnapshotStore,
{
    /// Opens the store, seeding state from the last persisted snapshot.
    ///
    /// A missing or undecodable snapshot yields an empty cart (the store
    /// reports those as `None`). A storage failure during the load is a
    /// startup error and propagates; construction is the one moment where
    /// failures are not absorbed.
    pub async fn open(inventory: I, snapshots: S) -> DbResult<Self> {
        let cart = match snapshots.load().await? {
            Some(snapshot) => snapshot.into_cart(),
            None => Cart::new(),
        };

        info!(lines = cart.line_count(), "Cart store opened");

        let (notices, _) = broadcast::channel(NOTICE_BUFFER);
        Ok(CartStore {
            inventory,
            snapshots,
            cart: Mutex::new(cart),
            notices,
        })
    }

    /// Subscribes to rejection notices.
    ///
    /// Each subscriber sees every notice broadcast after it subscribed.
    pub fn subscribe(&self) -> broadcast::Receiver<CartNotice> {
        self.notices.subscribe()
    }

    /// Returns the current cart lines, in insertion order.
    pub async fn state(&self) -> Vec<CartLine> {
        self.cart.lock().await.lines().to_vec()
    }

    /// Adds one unit of a product to the cart.
    ///
    /// ## Behavior
    /// - Product not in cart: resolve its metadata and append a line with
    ///   amount 1 (no stock precheck on first add)
    /// - Product in cart: re-check stock; at the stock limit the add is
    ///   rejected with an out-of-stock notice, otherwise the line is
    ///   incremented by 1
    ///
    /// Returns the post-operation lines; on rejection these equal the
    /// prior state.
    pub async fn add_product(&self, product_id: ProductId) -> Vec<CartLine> {
        debug!(product_id = %product_id, "add_product");

        let mut cart = self.cart.lock().await;
        match self.try_add(&cart, product_id).await {
            Ok(next) => *cart = next,
            Err(err) => self.reject(OpKind::Add, product_id, &err),
        }
        cart.lines().to_vec()
    }

    /// Removes a product's line from the cart.
    ///
    /// A product with no line yields a not-in-cart notice and changes
    /// nothing.
    pub async fn remove_product(&self, product_id: ProductId) -> Vec<CartLine> {
        debug!(product_id = %product_id, "remove_product");

        let mut cart = self.cart.lock().await;
        match self.try_remove(&cart, product_id).await {
            Ok(next) => *cart = next,
            Err(err) => self.reject(OpKind::Remove, product_id, &err),
        }
        cart.lines().to_vec()
    }

    /// Sets a product's line to an explicit amount.
    ///
    /// ## Behavior
    /// 1. Stock is fetched first, unconditionally
    /// 2. `amount > stock` is rejected with an out-of-stock notice
    /// 3. `amount <= 0` is ignored without a notice (a deliberate guard
    ///    against accidental zero/negative quantities, not an error)
    /// 4. Otherwise the line is set to exactly `amount`; a product with no
    ///    line yields a not-in-cart notice
    pub async fn update_amount(&self, product_id: ProductId, amount: i64) -> Vec<CartLine> {
        debug!(product_id = %product_id, amount, "update_amount");

        let mut cart = self.cart.lock().await;
        match self.try_update(&cart, product_id, amount).await {
            Ok(Some(next)) => *cart = next,
            Ok(None) => {
                debug!(product_id = %product_id, amount, "Ignoring non-positive amount");
            }
            Err(err) => self.reject(OpKind::Update, product_id, &err),
        }
        cart.lines().to_vec()
    }

    // =========================================================================
    // Internal: candidate construction
    // =========================================================================
    // Each try_* builds a candidate cart from the locked state, persists it,
    // and hands it back for commit. Nothing is mutated in place, so any
    // error leaves both the cart and the snapshot exactly as they were.

    async fn try_add(&self, cart: &Cart, product_id: ProductId) -> Result<Cart, StoreError> {
        let mut next = cart.clone();

        match cart.line(product_id) {
            None => {
                let product = self.inventory.product(product_id).await?;
                next.add(product);
            }
            Some(line) => {
                let stock = self.inventory.stock(product_id).await?;
                if line.amount >= stock.amount {
                    return Err(CartError::OutOfStock {
                        product_id,
                        available: stock.amount,
                        requested: line.amount + 1,
                    }
                    .into());
                }
                next.increment(product_id)?;
            }
        }

        self.persist(&next).await?;
        Ok(next)
    }

    async fn try_update(
        &self,
        cart: &Cart,
        product_id: ProductId,
        amount: i64,
    ) -> Result<Option<Cart>, StoreError> {
        let stock = self.inventory.stock(product_id).await?;
        if amount > stock.amount {
            return Err(CartError::OutOfStock {
                product_id,
                available: stock.amount,
                requested: amount,
            }
            .into());
        }

        if amount <= 0 {
            return Ok(None);
        }

        let mut next = cart.clone();
        next.set_amount(product_id, amount)?;

        self.persist(&next).await?;
        Ok(Some(next))
    }

    async fn try_remove(&self, cart: &Cart, product_id: ProductId) -> Result<Cart, StoreError> {
        let mut next = cart.clone();
        next.remove(product_id)?;

        self.persist(&next).await?;
        Ok(next)
    }

    async fn persist(&self, next: &Cart) -> Result<(), StoreError> {
        self.snapshots.save(&CartSnapshot::capture(next)).await?;
        Ok(())
    }

    /// Logs the real cause, then broadcasts the collapsed notice.
    fn reject(&self, op: OpKind, product_id: ProductId, err: &StoreError) {
        warn!(product_id = %product_id, error = %err, "Cart operation rejected");

        let notice = match *err {
            StoreError::Cart(CartError::OutOfStock {
                product_id,
                available,
                requested,
            }) => CartNotice::OutOfStock {
                product_id,
                available,
                requested,
            },
            StoreError::Cart(CartError::NotInCart(product_id)) => {
                CartNotice::NotInCart { product_id }
            }
            StoreError::Inventory(_) | StoreError::Db(_) => match op {
                OpKind::Add => CartNotice::AddFailed { product_id },
                OpKind::Update => CartNotice::UpdateFailed { product_id },
                OpKind::Remove => CartNotice::RemoveFailed { product_id },
            },
        };

        // Nobody listening is fine; notices are fire-and-forget.
        let _ = self.notices.send(notice);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
