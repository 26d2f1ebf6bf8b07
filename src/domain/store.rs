use {
    super::error::ServiceError,
    super::order::{Order, OrderId},
    async_trait::async_trait,
};

/// Port to the order store. The core only needs a point lookup and one
/// conditional write; everything else about the schema stays behind this
/// seam.
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn find_order(&self, id: &OrderId) -> Result<Option<Order>, ServiceError>;

    /// Single conditional update: set `payment_state = 'paid'` and bump
    /// `updated_at`, but only where the state is not already paid. Returns
    /// whether a row was affected. Keeping the predicate in the write makes
    /// concurrent redelivery of the same webhook idempotent at the store
    /// level, without a separate read-then-write window.
    async fn mark_paid(&self, id: &OrderId) -> Result<bool, ServiceError>;
}
