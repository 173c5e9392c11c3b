use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::errors::DomainError;

/// Order lifecycle status. Exactly two values; anything else is rejected
/// at the service boundary before the store is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Completed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    /// Case-sensitive on purpose: "Pending" and "COMPLETED" are invalid.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "completed" => Ok(OrderStatus::Completed),
            other => Err(DomainError::InvalidStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub name_th: String,
    pub name_en: String,
    pub price: BigDecimal,
    pub qty: i32,
}

#[derive(Debug, Clone)]
pub struct LineItemInput {
    pub name_th: String,
    pub name_en: String,
    pub price: BigDecimal,
    pub qty: i32,
}

#[derive(Debug, Clone)]
pub struct NewOrderInput {
    pub items: Vec<LineItemInput>,
    pub pickup_time: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Order {
    pub id: Uuid,
    pub items: Vec<LineItem>,
    pub pickup_time: Option<String>,
    pub note: Option<String>,
    pub time: DateTime<Utc>,
    pub status: OrderStatus,
}

impl Order {
    /// Sum of qty x unit price over all line items.
    pub fn total_price(&self) -> BigDecimal {
        self.items.iter().fold(BigDecimal::from(0), |sum, item| {
            sum + BigDecimal::from(item.qty) * item.price.clone()
        })
    }
}
