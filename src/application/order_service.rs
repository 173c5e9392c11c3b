use std::sync::Arc;

use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::events::OrderEvent;
use crate::domain::order::{NewOrderInput, Order, OrderStatus};
use crate::domain::ports::{OrderStore, ReplicationSink};

/// Orchestrates the order lifecycle: validates input, talks to the store,
/// and mirrors create/update events to the replication sink. The sink is
/// fire-and-forget; nothing it does can fail an operation.
#[derive(Clone)]
pub struct OrderService {
    store: Arc<dyn OrderStore>,
    sink: Arc<dyn ReplicationSink>,
}

impl OrderService {
    pub fn new(store: Arc<dyn OrderStore>, sink: Arc<dyn ReplicationSink>) -> Self {
        Self { store, sink }
    }

    pub fn create_order(&self, input: NewOrderInput) -> Result<Order, DomainError> {
        let order = self.store.insert(input)?;
        self.sink.publish(OrderEvent::new_order(&order));
        Ok(order)
    }

    pub fn list_orders(&self) -> Result<Vec<Order>, DomainError> {
        self.store.list_all()
    }

    /// `raw_status` must be exactly "pending" or "completed"; the store is
    /// not consulted otherwise. Reverting completed back to pending is
    /// allowed.
    pub fn update_status(&self, id: Uuid, raw_status: &str) -> Result<Order, DomainError> {
        let status: OrderStatus = raw_status.parse()?;
        let order = self
            .store
            .update_status(id, status)?
            .ok_or(DomainError::NotFound)?;
        self.sink.publish(OrderEvent::status_changed(&order));
        Ok(order)
    }

    /// Deletions are not mirrored to the sink.
    pub fn delete_order(&self, id: Uuid) -> Result<Order, DomainError> {
        self.store.delete_by_id(id)?.ok_or(DomainError::NotFound)
    }
}
