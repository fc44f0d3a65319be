//! Cart storage capability.
//!
//! A [`CartStore`] owns every session's cart. Mutations go through the
//! store so that concurrent requests against the same session serialize on
//! the backend, not in the caller.

use async_trait::async_trait;

use crate::cart::Cart;
use crate::error::StoreError;
use crate::menu::MenuItem;
use crate::session::SessionId;

/// Session-keyed cart storage.
///
/// All methods take `&self`; implementations handle their own locking.
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Short identifier for logs.
    fn name(&self) -> &str;

    /// Snapshot of a session's cart. Unknown sessions read as empty.
    async fn read(&self, session: &SessionId) -> std::result::Result<Cart, StoreError>;

    /// Adds one unit of each item to the session's cart, atomically:
    /// either every item lands or none do. Returns the updated cart.
    async fn add_items(
        &self,
        session: &SessionId,
        items: &[MenuItem],
    ) -> std::result::Result<Cart, StoreError>;

    /// Confirms the session's order: returns the cart snapshot and resets
    /// the stored cart. Returns `None` (and stays untouched) when the cart
    /// is empty.
    async fn take_order(&self, session: &SessionId)
    -> std::result::Result<Option<Cart>, StoreError>;

    /// Drops the session's cart entirely.
    async fn clear(&self, session: &SessionId) -> std::result::Result<(), StoreError>;

    /// Number of live sessions currently held.
    async fn session_count(&self) -> std::result::Result<usize, StoreError>;
}
