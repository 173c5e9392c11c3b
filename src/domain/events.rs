use bigdecimal::ToPrimitive;
use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::Serialize;

use super::order::{Order, OrderStatus};

/// Sentinel the bookkeeping sheet expects when no pickup time was given.
pub const PICKUP_TIME_UNSPECIFIED: &str = "ไม่ได้ระบุ";

/// Lifecycle events mirrored to the spreadsheet webhook. The serialized form
/// is the wire contract: a JSON object tagged with `action`.
///
/// Deletions are intentionally absent; the sheet never learns about them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum OrderEvent {
    #[serde(rename_all = "camelCase")]
    NewOrder {
        order_id: String,
        order_time: String,
        pickup_time: String,
        customer_note: String,
        items_list: String,
        total_price: f64,
        status: OrderStatus,
    },
    #[serde(rename_all = "camelCase")]
    UpdateStatus {
        order_id: String,
        new_status: OrderStatus,
    },
}

impl OrderEvent {
    /// Derive the bookkeeping summary for a freshly created order.
    pub fn new_order(order: &Order) -> Self {
        let items_list = order
            .items
            .iter()
            .map(|item| format!("{} ({}) x {} ชิ้น", item.name_th, item.name_en, item.qty))
            .collect::<Vec<_>>()
            .join(", ");

        OrderEvent::NewOrder {
            order_id: order.id.to_string(),
            order_time: format_thai_datetime(&order.time),
            pickup_time: order
                .pickup_time
                .clone()
                .unwrap_or_else(|| PICKUP_TIME_UNSPECIFIED.to_string()),
            customer_note: order.note.clone().unwrap_or_default(),
            items_list,
            total_price: order.total_price().to_f64().unwrap_or(0.0),
            status: order.status,
        }
    }

    pub fn status_changed(order: &Order) -> Self {
        OrderEvent::UpdateStatus {
            order_id: order.id.to_string(),
            new_status: order.status,
        }
    }

    pub fn action(&self) -> &'static str {
        match self {
            OrderEvent::NewOrder { .. } => "newOrder",
            OrderEvent::UpdateStatus { .. } => "updateStatus",
        }
    }
}

/// Thai-locale rendering: day/month/year in the Buddhist era, 24h clock.
fn format_thai_datetime(time: &DateTime<Utc>) -> String {
    format!(
        "{}/{}/{} {:02}:{:02}:{:02}",
        time.day(),
        time.month(),
        time.year() + 543,
        time.hour(),
        time.minute(),
        time.second()
    )
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    use super::{OrderEvent, PICKUP_TIME_UNSPECIFIED};
    use crate::domain::order::{LineItem, Order, OrderStatus};

    fn sample_order() -> Order {
        Order {
            id: Uuid::new_v4(),
            items: vec![
                LineItem {
                    name_th: "ไข่ไก่".to_string(),
                    name_en: "Egg".to_string(),
                    price: BigDecimal::from_str("5").unwrap(),
                    qty: 2,
                },
                LineItem {
                    name_th: "ผักกาด".to_string(),
                    name_en: "Lettuce".to_string(),
                    price: BigDecimal::from_str("20").unwrap(),
                    qty: 1,
                },
            ],
            pickup_time: Some("10:00".to_string()),
            note: Some("โทรก่อนมารับ".to_string()),
            time: Utc.with_ymd_and_hms(2025, 7, 14, 9, 30, 5).unwrap(),
            status: OrderStatus::Pending,
        }
    }

    #[test]
    fn new_order_event_carries_the_derived_summary() {
        let order = sample_order();
        let payload = serde_json::to_value(OrderEvent::new_order(&order)).unwrap();

        assert_eq!(payload["action"], "newOrder");
        assert_eq!(payload["orderId"], order.id.to_string());
        assert_eq!(payload["orderTime"], "14/7/2568 09:30:05");
        assert_eq!(payload["pickupTime"], "10:00");
        assert_eq!(payload["customerNote"], "โทรก่อนมารับ");
        assert_eq!(
            payload["itemsList"],
            "ไข่ไก่ (Egg) x 2 ชิ้น, ผักกาด (Lettuce) x 1 ชิ้น"
        );
        assert_eq!(payload["totalPrice"], 30.0);
        assert_eq!(payload["status"], "pending");
    }

    #[test]
    fn missing_pickup_time_and_note_get_defaults() {
        let mut order = sample_order();
        order.pickup_time = None;
        order.note = None;

        let payload = serde_json::to_value(OrderEvent::new_order(&order)).unwrap();

        assert_eq!(payload["pickupTime"], PICKUP_TIME_UNSPECIFIED);
        assert_eq!(payload["customerNote"], "");
    }

    #[test]
    fn status_change_event_has_the_update_shape() {
        let mut order = sample_order();
        order.status = OrderStatus::Completed;

        let payload = serde_json::to_value(OrderEvent::status_changed(&order)).unwrap();

        assert_eq!(payload["action"], "updateStatus");
        assert_eq!(payload["orderId"], order.id.to_string());
        assert_eq!(payload["newStatus"], "completed");
        assert!(payload.get("itemsList").is_none());
    }
}
