use crate::error::OrderError;
use actix::prelude::*;
use common::types::{menu_item::MenuItem, order::OrderDTO, order_status::OrderStatus};

/// Asks the board to append a new order. Fails with a validation error if
/// the location is blank or the item list is empty; on success returns the
/// new order's 1-based id.
#[derive(Message, Debug, Clone)]
#[rtype(result = "Result<u64, OrderError>")]
pub struct PlaceOrder {
    pub location: String,
    pub items: Vec<MenuItem>,
}

/// Overwrites the status of an order, whatever it was before. Returns the
/// written status, or `NotFound` for an unknown id.
#[derive(Message, Debug, Clone)]
#[rtype(result = "Result<OrderStatus, OrderError>")]
pub struct SetOrderStatus {
    pub order_id: u64,
    pub new_status: OrderStatus,
}

/// Looks up a single order by id.
#[derive(Message, Debug, Clone)]
#[rtype(result = "Option<OrderDTO>")]
pub struct GetOrder {
    pub order_id: u64,
}

/// Snapshot of every order, in placement order.
#[derive(Message, Debug, Clone)]
#[rtype(result = "Vec<OrderDTO>")]
pub struct GetOrders;

/// Snapshot of a session's cart, in insertion order. Test-only seam: the
/// reply round trip also proves every earlier message was fully handled.
#[cfg(test)]
#[derive(Message, Debug, Clone)]
#[rtype(result = "Vec<MenuItem>")]
pub struct GetCartSnapshot;
