use uuid::Uuid;

use super::errors::DomainError;
use super::events::OrderEvent;
use super::order::{NewOrderInput, Order, OrderStatus};

pub trait OrderStore: Send + Sync + 'static {
    /// Assigns an id and creation timestamp, persists, returns the stored
    /// record.
    fn insert(&self, input: NewOrderInput) -> Result<Order, DomainError>;

    /// Every order, most recent first.
    fn list_all(&self) -> Result<Vec<Order>, DomainError>;

    /// Sets `status` on the matching record and returns the post-update
    /// record, or `None` if the id is unknown.
    fn update_status(&self, id: Uuid, status: OrderStatus)
        -> Result<Option<Order>, DomainError>;

    /// Removes the record and returns its last state, or `None` if the id
    /// is unknown.
    fn delete_by_id(&self, id: Uuid) -> Result<Option<Order>, DomainError>;
}

/// Best-effort, at-most-once event forwarding. `publish` hands the event off
/// and returns immediately; delivery failures are the sink's problem to log,
/// never the caller's.
pub trait ReplicationSink: Send + Sync + 'static {
    fn publish(&self, event: OrderEvent);
}
