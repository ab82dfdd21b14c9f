use actix::Message;
use serde::{Deserialize, Serialize};

/// Customer asks for the full menu.
#[derive(Message, Debug, Clone, Serialize, Deserialize)]
#[rtype(result = "()")]
pub struct RequestCatalog {}

/// Customer adds one menu item to their cart. Adding the same item twice
/// yields two cart entries, there is no quantity field.
#[derive(Message, Debug, Clone, Serialize, Deserialize)]
#[rtype(result = "()")]
pub struct AddToCart {
    pub item_id: u32,
}

/// Customer asks for a snapshot of their cart.
#[derive(Message, Debug, Clone, Serialize, Deserialize)]
#[rtype(result = "()")]
pub struct RequestCart {}

/// Customer confirms their cart as an order to be delivered at `location`.
#[derive(Message, Debug, Clone, Serialize, Deserialize)]
#[rtype(result = "()")]
pub struct ConfirmOrder {
    pub location: String,
}

/// Customer asks for the current status of a placed order.
#[derive(Message, Debug, Clone, Serialize, Deserialize)]
#[rtype(result = "()")]
pub struct RequestOrderStatus {
    pub order_id: u64,
}
