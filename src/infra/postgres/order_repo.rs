use {
    crate::domain::error::ServiceError,
    crate::domain::order::{Order, OrderId, PaymentState},
    crate::domain::store::OrderStore,
    async_trait::async_trait,
    chrono::{DateTime, Utc},
    sqlx::{PgPool, Row, postgres::PgRow},
};

/// Postgres-backed order store. Queries go through the runtime API so the
/// crate builds without a live database.
#[derive(Clone)]
pub struct PgOrderStore {
    pool: PgPool,
}

impl PgOrderStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn order_from_row(row: PgRow) -> Result<Order, ServiceError> {
    let order_id: String = row.try_get("order_id")?;
    let payment_state: String = row.try_get("payment_state")?;
    Ok(Order {
        order_id: OrderId::new(order_id)?,
        status: row.try_get("status")?,
        payment_state: PaymentState::try_from(payment_state.as_str())?,
        shipping_address: row.try_get("shipping_address")?,
        created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
        updated_at: row.try_get::<DateTime<Utc>, _>("updated_at")?,
    })
}

#[async_trait]
impl OrderStore for PgOrderStore {
    async fn find_order(&self, id: &OrderId) -> Result<Option<Order>, ServiceError> {
        let row = sqlx::query(
            r#"
            SELECT order_id, status, payment_state, shipping_address, created_at, updated_at
            FROM orders
            WHERE order_id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(order_from_row).transpose()
    }

    async fn mark_paid(&self, id: &OrderId) -> Result<bool, ServiceError> {
        let result = sqlx::query(
            r#"
            UPDATE orders
            SET payment_state = 'paid', updated_at = now()
            WHERE order_id = $1 AND payment_state <> 'paid'
            "#,
        )
        .bind(id.as_str())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
