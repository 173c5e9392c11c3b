use std::str::FromStr;

use actix_web::{web, HttpResponse, Responder};
use bigdecimal::{BigDecimal, ToPrimitive};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::order_service::OrderService;
use crate::domain::order::{LineItem, LineItemInput, NewOrderInput, Order};
use crate::errors::AppError;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLineItemRequest {
    pub name_th: String,
    pub name_en: String,
    /// Unit price in baht.
    pub price: f64,
    pub qty: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub items: Vec<CreateLineItemRequest>,
    pub pickup_time: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStatusRequest {
    pub status: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LineItemResponse {
    pub name_th: String,
    pub name_en: String,
    pub price: f64,
    pub qty: i32,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: Uuid,
    pub items: Vec<LineItemResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// RFC 3339 creation timestamp.
    pub time: String,
    pub status: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateOrderResponse {
    pub message: String,
    pub order: OrderResponse,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UpdateStatusResponse {
    pub message: String,
    pub order: OrderResponse,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOrderResponse {
    pub message: String,
    pub deleted_order: OrderResponse,
}

impl From<LineItem> for LineItemResponse {
    fn from(item: LineItem) -> Self {
        Self {
            name_th: item.name_th,
            name_en: item.name_en,
            price: item.price.to_f64().unwrap_or(0.0),
            qty: item.qty,
        }
    }
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            items: order.items.into_iter().map(LineItemResponse::from).collect(),
            pickup_time: order.pickup_time,
            note: order.note,
            time: order.time.to_rfc3339(),
            status: order.status.as_str().to_string(),
        }
    }
}

impl CreateOrderRequest {
    fn into_domain(self) -> Result<NewOrderInput, AppError> {
        let items = self
            .items
            .into_iter()
            .map(|item| {
                // Go through the decimal rendering so 0.1 stays 0.1 instead
                // of its binary expansion.
                let price = BigDecimal::from_str(&item.price.to_string()).map_err(|e| {
                    AppError::internal(
                        "Failed to save order",
                        format!("invalid price '{}': {e}", item.price),
                    )
                })?;
                Ok(LineItemInput {
                    name_th: item.name_th,
                    name_en: item.name_en,
                    price,
                    qty: item.qty,
                })
            })
            .collect::<Result<Vec<_>, AppError>>()?;

        Ok(NewOrderInput {
            items,
            pickup_time: self.pickup_time,
            note: self.note,
        })
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /api/orders
///
/// Accepts a new customer order. The stored order is mirrored to the
/// bookkeeping sheet off the request path; whatever happens to that delivery
/// does not change this response.
#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order received", body = CreateOrderResponse),
        (status = 500, description = "Store failure"),
    ),
    tag = "orders"
)]
pub async fn create_order(
    service: web::Data<OrderService>,
    body: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let input = body.into_inner().into_domain()?;
    let service = service.into_inner();

    let order = web::block(move || service.create_order(input))
        .await
        .map_err(|e| AppError::internal("Failed to save order", e.to_string()))?
        .map_err(|e| AppError::from_domain(e, "Failed to save order"))?;

    Ok(HttpResponse::Created().json(CreateOrderResponse {
        message: "Order received successfully!".to_string(),
        order: order.into(),
    }))
}

/// GET /api/admin/orders
///
/// All orders, most recent first.
#[utoipa::path(
    get,
    path = "/api/admin/orders",
    responses(
        (status = 200, description = "Orders, recency-descending", body = Vec<OrderResponse>),
        (status = 500, description = "Store failure"),
    ),
    tag = "orders"
)]
pub async fn list_orders(service: web::Data<OrderService>) -> Result<HttpResponse, AppError> {
    let service = service.into_inner();

    let orders = web::block(move || service.list_orders())
        .await
        .map_err(|e| AppError::internal("Failed to fetch orders", e.to_string()))?
        .map_err(|e| AppError::from_domain(e, "Failed to fetch orders"))?;

    let orders: Vec<OrderResponse> = orders.into_iter().map(OrderResponse::from).collect();
    Ok(HttpResponse::Ok().json(orders))
}

/// PUT /api/admin/orders/{id}/status
///
/// Sets the order status. Only the literal values "pending" and "completed"
/// are accepted; nothing reaches the store otherwise.
#[utoipa::path(
    put,
    path = "/api/admin/orders/{id}/status",
    params(
        ("id" = Uuid, Path, description = "Order UUID"),
    ),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = UpdateStatusResponse),
        (status = 400, description = "Status outside {pending, completed}"),
        (status = 404, description = "Unknown order id"),
        (status = 500, description = "Store failure"),
    ),
    tag = "orders"
)]
pub async fn update_order_status(
    service: web::Data<OrderService>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateStatusRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let status = body.into_inner().status;
    let service = service.into_inner();

    let order = web::block(move || service.update_status(id, &status))
        .await
        .map_err(|e| AppError::internal("Failed to update order status", e.to_string()))?
        .map_err(|e| AppError::from_domain(e, "Failed to update order status"))?;

    Ok(HttpResponse::Ok().json(UpdateStatusResponse {
        message: "Order status updated successfully!".to_string(),
        order: order.into(),
    }))
}

/// DELETE /api/admin/orders/{id}
///
/// Removes the order and returns its last state. Deletions are not mirrored
/// to the bookkeeping sheet.
#[utoipa::path(
    delete,
    path = "/api/admin/orders/{id}",
    params(
        ("id" = Uuid, Path, description = "Order UUID"),
    ),
    responses(
        (status = 200, description = "Order deleted", body = DeleteOrderResponse),
        (status = 404, description = "Unknown order id"),
        (status = 500, description = "Store failure"),
    ),
    tag = "orders"
)]
pub async fn delete_order(
    service: web::Data<OrderService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let service = service.into_inner();

    let order = web::block(move || service.delete_order(id))
        .await
        .map_err(|e| AppError::internal("Failed to delete order", e.to_string()))?
        .map_err(|e| AppError::from_domain(e, "Failed to delete order"))?;

    Ok(HttpResponse::Ok().json(DeleteOrderResponse {
        message: "Order deleted successfully".to_string(),
        deleted_order: order.into(),
    }))
}

/// GET /
pub async fn health() -> impl Responder {
    HttpResponse::Ok().body("Farm stand order backend is running!")
}
