use crate::messages::admin_messages::*;
use crate::messages::client_messages::*;
use crate::messages::server_messages::*;
use actix::prelude::*;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Every message that travels over a TCP connection, one JSON object per
/// line. Requests flow from customers/admins to the server, replies flow
/// back; `ConnectionClosed` is produced locally when a peer hangs up.
#[derive(Serialize, Deserialize, Debug, Message, Clone)]
#[serde(tag = "type")]
#[rtype(result = "()")]
pub enum NetworkMessage {
    // Customer requests
    /// Ask for the full menu.
    RequestCatalog(RequestCatalog),
    /// Add one catalog item to the session cart.
    AddToCart(AddToCart),
    /// Ask for a snapshot of the session cart.
    RequestCart(RequestCart),
    /// Confirm the cart as an order with a delivery location.
    ConfirmOrder(ConfirmOrder),
    /// Ask for the status of a placed order.
    RequestOrderStatus(RequestOrderStatus),

    // Admin requests
    /// Present the panel credentials.
    AdminLogin(AdminLogin),
    /// Ask for every placed order.
    RequestAllOrders(RequestAllOrders),
    /// Overwrite the status of an order.
    UpdateOrderStatus(UpdateOrderStatus),

    // Server replies
    /// The full menu.
    CatalogContents(CatalogContents),
    /// An item landed in the cart.
    ItemAdded(ItemAdded),
    /// The item id is not on the menu.
    UnknownItem(UnknownItem),
    /// Snapshot of the cart.
    CartContents(CartContents),
    /// The order was placed and the cart cleared.
    OrderConfirmed(OrderConfirmed),
    /// The confirmation was refused; nothing changed.
    OrderRejected(OrderRejected),
    /// Current status of an order.
    OrderStatusIs(OrderStatusIs),
    /// No order with that id exists.
    OrderNotFound(OrderNotFound),
    /// Outcome of a login attempt.
    LoginResult(LoginResult),
    /// Every placed order.
    AllOrders(AllOrders),
    /// A status overwrite was applied.
    StatusUpdated(StatusUpdated),
    /// The request needs an authenticated admin session.
    AccessDenied(AccessDenied),

    /// A TCP connection was closed by the remote end.
    ConnectionClosed(ConnectionClosed),
}

/// Emitted by a `TCPReceiver` when its stream reaches EOF.
#[derive(Message, Debug, Clone, Serialize, Deserialize)]
#[rtype(result = "()")]
pub struct ConnectionClosed {
    pub remote_addr: SocketAddr,
}

/// Kick for an actor that was just started by a binary.
#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct StartRunning;

/// Tells a network actor to drop its half of the stream and stop.
#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct Shutdown;
