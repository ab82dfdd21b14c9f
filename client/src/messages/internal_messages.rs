use actix::Message;

/// Picks the next random item for the cart, or moves on to checkout.
#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct PickNextItem;

/// Asks the server for the current status of the placed order.
#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct PollStatus;
