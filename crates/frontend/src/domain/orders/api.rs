//! HTTP client for the order endpoints. The SPA is served by the same
//! origin as the API, so all paths are relative.

use contracts::domain::orders::{Order, OrderData};
use gloo_net::http::Request;
use uuid::Uuid;

/// Fetch all orders for one calendar day.
pub async fn fetch_orders(day: &str) -> Result<Vec<Order>, String> {
    let response = Request::get(&format!("/api/orders?date={}", day))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Fetching orders failed: {}", response.status()));
    }

    response
        .json::<Vec<Order>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create an order. The resulting list change arrives over the live
/// channel; the response body is not used beyond success/failure.
pub async fn create_order(data: &OrderData) -> Result<(), String> {
    let response = Request::post("/api/orders")
        .json(data)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Creating order failed: {}", response.status()));
    }

    Ok(())
}

/// Update an existing order.
pub async fn update_order(id: Uuid, data: &OrderData) -> Result<(), String> {
    let response = Request::put(&format!("/api/orders/{}", id))
        .json(data)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Updating order failed: {}", response.status()));
    }

    Ok(())
}

/// Delete an order.
pub async fn delete_order(id: Uuid) -> Result<(), String> {
    let response = Request::delete(&format!("/api/orders/{}", id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Deleting order failed: {}", response.status()));
    }

    Ok(())
}
