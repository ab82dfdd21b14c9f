use crate::types::order_status::OrderStatus;
use actix::Message;
use serde::{Deserialize, Serialize};

/// Admin presents the panel credentials. Compared for plain equality against
/// the hard-coded constants; a failed attempt just withholds access.
#[derive(Message, Debug, Clone, Serialize, Deserialize)]
#[rtype(result = "()")]
pub struct AdminLogin {
    pub admin_id: String,
    pub password: String,
}

/// Admin asks for every placed order, in placement order.
#[derive(Message, Debug, Clone, Serialize, Deserialize)]
#[rtype(result = "()")]
pub struct RequestAllOrders {}

/// Admin sets the status of an order. Any status may follow any other, the
/// board performs no transition checks.
#[derive(Message, Debug, Clone, Serialize, Deserialize)]
#[rtype(result = "()")]
pub struct UpdateOrderStatus {
    pub order_id: u64,
    pub new_status: OrderStatus,
}
