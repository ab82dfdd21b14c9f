use crate::types::{menu_item::MenuItem, order::OrderDTO, order_status::OrderStatus};
use actix::Message;
use serde::{Deserialize, Serialize};

/// The full menu, grouped by category in catalog order.
#[derive(Message, Debug, Clone, Serialize, Deserialize)]
#[rtype(result = "()")]
pub struct CatalogContents {
    pub items: Vec<MenuItem>,
}

/// Confirmation that an item landed in the cart.
#[derive(Message, Debug, Clone, Serialize, Deserialize)]
#[rtype(result = "()")]
pub struct ItemAdded {
    pub item: MenuItem,
    pub cart_len: usize,
}

/// The requested item id does not exist in the catalog. The cart is left
/// untouched.
#[derive(Message, Debug, Clone, Serialize, Deserialize)]
#[rtype(result = "()")]
pub struct UnknownItem {
    pub item_id: u32,
}

/// Snapshot of the session's cart, in insertion order.
#[derive(Message, Debug, Clone, Serialize, Deserialize)]
#[rtype(result = "()")]
pub struct CartContents {
    pub items: Vec<MenuItem>,
}

/// The order was placed; the cart is now empty.
#[derive(Message, Debug, Clone, Serialize, Deserialize)]
#[rtype(result = "()")]
pub struct OrderConfirmed {
    pub order_id: u64,
}

/// The confirmation was refused. Nothing was mutated, the customer can fix
/// the problem and retry with the same cart.
#[derive(Message, Debug, Clone, Serialize, Deserialize)]
#[rtype(result = "()")]
pub struct OrderRejected {
    pub reason: String,
}

/// Current status of a placed order.
#[derive(Message, Debug, Clone, Serialize, Deserialize)]
#[rtype(result = "()")]
pub struct OrderStatusIs {
    pub order_id: u64,
    pub status: OrderStatus,
}

/// No order exists with the given id.
#[derive(Message, Debug, Clone, Serialize, Deserialize)]
#[rtype(result = "()")]
pub struct OrderNotFound {
    pub order_id: u64,
}

/// Outcome of an admin login attempt.
#[derive(Message, Debug, Clone, Serialize, Deserialize)]
#[rtype(result = "()")]
pub struct LoginResult {
    pub accepted: bool,
}

/// Every placed order, in placement order.
#[derive(Message, Debug, Clone, Serialize, Deserialize)]
#[rtype(result = "()")]
pub struct AllOrders {
    pub orders: Vec<OrderDTO>,
}

/// The status overwrite was applied.
#[derive(Message, Debug, Clone, Serialize, Deserialize)]
#[rtype(result = "()")]
pub struct StatusUpdated {
    pub order_id: u64,
    pub status: OrderStatus,
}

/// The request needs an authenticated admin session.
#[derive(Message, Debug, Clone, Serialize, Deserialize)]
#[rtype(result = "()")]
pub struct AccessDenied {}
