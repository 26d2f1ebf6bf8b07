use {
    crate::domain::error::ServiceError,
    crate::domain::order::{Order, OrderId, PaymentState},
    crate::domain::store::OrderStore,
    async_trait::async_trait,
    chrono::Utc,
    std::collections::HashMap,
    std::sync::Arc,
    std::sync::atomic::{AtomicU64, Ordering},
    tokio::sync::RwLock,
};

/// Thread-safe in-memory order store. Used by the test suite and local
/// experiments; the call counters let tests assert that the store was
/// never touched on short-circuited paths.
#[derive(Default, Clone)]
pub struct InMemoryOrderStore {
    orders: Arc<RwLock<HashMap<String, Order>>>,
    lookups: Arc<AtomicU64>,
    writes: Arc<AtomicU64>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an unpaid order.
    pub async fn seed(&self, id: OrderId) {
        let now = Utc::now();
        let order = Order {
            order_id: id.clone(),
            status: "confirmed".to_string(),
            payment_state: PaymentState::Unpaid,
            shipping_address: None,
            created_at: now,
            updated_at: now,
        };
        self.orders.write().await.insert(id.into_inner(), order);
    }

    pub async fn get(&self, id: &OrderId) -> Option<Order> {
        self.orders.read().await.get(id.as_str()).cloned()
    }

    pub fn lookup_count(&self) -> u64 {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn write_count(&self) -> u64 {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn find_order(&self, id: &OrderId) -> Result<Option<Order>, ServiceError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.orders.read().await.get(id.as_str()).cloned())
    }

    async fn mark_paid(&self, id: &OrderId) -> Result<bool, ServiceError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut orders = self.orders.write().await;
        match orders.get_mut(id.as_str()) {
            Some(order) if order.payment_state != PaymentState::Paid => {
                order.payment_state = PaymentState::Paid;
                order.updated_at = Utc::now();
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
