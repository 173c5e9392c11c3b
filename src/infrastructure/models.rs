use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::order::{LineItem, Order, OrderStatus};
use crate::schema::{order_items, orders};

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderRow {
    pub id: Uuid,
    pub pickup_time: Option<String>,
    pub note: Option<String>,
    pub time: DateTime<Utc>,
    pub status: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = orders)]
pub struct NewOrderRow {
    pub id: Uuid,
    pub pickup_time: Option<String>,
    pub note: Option<String>,
    pub status: String,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = order_items)]
#[diesel(belongs_to(OrderRow, foreign_key = order_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderItemRow {
    pub id: Uuid,
    pub order_id: Uuid,
    pub name_th: String,
    pub name_en: String,
    pub price: BigDecimal,
    pub qty: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = order_items)]
pub struct NewOrderItemRow {
    pub id: Uuid,
    pub order_id: Uuid,
    pub name_th: String,
    pub name_en: String,
    pub price: BigDecimal,
    pub qty: i32,
}

impl OrderRow {
    /// Rehydrate the domain order from its row and item rows. A status value
    /// outside the two-value set means a corrupted store, not bad input.
    pub fn into_order(self, items: Vec<OrderItemRow>) -> Result<Order, DomainError> {
        let status: OrderStatus = self.status.parse().map_err(|_| {
            DomainError::Internal(format!("unexpected status '{}' in store", self.status))
        })?;

        Ok(Order {
            id: self.id,
            items: items.into_iter().map(OrderItemRow::into_line_item).collect(),
            pickup_time: self.pickup_time,
            note: self.note,
            time: self.time,
            status,
        })
    }
}

impl OrderItemRow {
    fn into_line_item(self) -> LineItem {
        LineItem {
            name_th: self.name_th,
            name_en: self.name_en,
            price: self.price,
            qty: self.qty,
        }
    }
}
