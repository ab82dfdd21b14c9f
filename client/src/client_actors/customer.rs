use crate::messages::internal_messages::{PickNextItem, PollStatus};
use actix::prelude::*;
use colored::Color;
use common::constants::{ADDED_NOTICE_MILLIS, STATUS_POLL_MILLIS};
use common::logger::Logger;
use common::messages::client_messages::{
    AddToCart, ConfirmOrder, RequestCart, RequestCatalog, RequestOrderStatus,
};
use common::messages::shared_messages::{NetworkMessage, StartRunning};
use common::network::communicator::Communicator;
use common::network::peer_types::PeerType;
use common::types::menu_item::MenuItem;
use common::types::order_status::OrderStatus;
use rand::seq::SliceRandom;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpStream;

/// Scripted customer demo: fetch the menu, add a few random items, show the
/// cart, confirm with a delivery location and poll until the food arrives.
pub struct Customer {
    pub server_addr: SocketAddr,
    /// Where the order should be delivered.
    pub location: String,
    /// How many random picks are still owed to the cart.
    pub picks_left: usize,
    /// Menu received from the server.
    pub catalog: Vec<MenuItem>,
    /// Id of the confirmed order, once there is one.
    pub order_id: Option<u64>,
    pub communicator: Option<Communicator<Customer>>,
    pub pending_stream: Option<TcpStream>,
    pub logger: Logger,
}

impl Customer {
    pub async fn new(
        server_addr: SocketAddr,
        location: String,
        picks: usize,
    ) -> std::io::Result<Self> {
        let stream = TcpStream::connect(server_addr).await?;
        Ok(Self {
            server_addr,
            location,
            picks_left: picks,
            catalog: Vec::new(),
            order_id: None,
            communicator: None,
            pending_stream: Some(stream),
            logger: Logger::new("Customer", Color::Blue),
        })
    }

    fn send(&self, msg: NetworkMessage) {
        if let Some(communicator) = &self.communicator {
            if let Err(e) = communicator.send(msg) {
                self.logger.error(e);
            }
        } else {
            self.logger.error("Communicator not initialized");
        }
    }
}

impl Actor for Customer {
    type Context = Context<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        if let Some(stream) = self.pending_stream.take() {
            self.communicator = Some(Communicator::new(
                stream,
                self.server_addr,
                ctx.address(),
                PeerType::CustomerType,
            ));
            self.logger
                .info(format!("Connected to the canteen at {}", self.server_addr));
        } else {
            self.logger.error("No stream available");
        }
    }
}

impl Handler<StartRunning> for Customer {
    type Result = ();

    fn handle(&mut self, _msg: StartRunning, _ctx: &mut Self::Context) {
        self.logger.info("Welcome to Campus Canteen!");
        self.send(NetworkMessage::RequestCatalog(RequestCatalog {}));
    }
}

impl Handler<PickNextItem> for Customer {
    type Result = ();

    fn handle(&mut self, _msg: PickNextItem, ctx: &mut Self::Context) {
        if self.picks_left == 0 {
            self.send(NetworkMessage::RequestCart(RequestCart {}));
            return;
        }
        self.picks_left -= 1;
        match self.catalog.choose(&mut rand::thread_rng()) {
            Some(item) => {
                self.logger.info(format!("That {} looks good...", item.name));
                self.send(NetworkMessage::AddToCart(AddToCart { item_id: item.id }));
            }
            None => {
                self.logger.error("The menu is empty, nothing to order");
                System::current().stop();
                return;
            }
        }
        // Pausa cosmética entre selecciones, como el botón "Added!" del menú.
        ctx.notify_later(PickNextItem, Duration::from_millis(ADDED_NOTICE_MILLIS));
    }
}

impl Handler<PollStatus> for Customer {
    type Result = ();

    fn handle(&mut self, _msg: PollStatus, _ctx: &mut Self::Context) {
        if let Some(order_id) = self.order_id {
            self.send(NetworkMessage::RequestOrderStatus(RequestOrderStatus {
                order_id,
            }));
        }
    }
}

impl Handler<NetworkMessage> for Customer {
    type Result = ();

    fn handle(&mut self, msg: NetworkMessage, ctx: &mut Self::Context) -> Self::Result {
        match msg {
            NetworkMessage::CatalogContents(msg_data) => {
                self.logger.info("Today's menu:");
                for item in &msg_data.items {
                    self.logger.info(format!(
                        "  [{}] {} - ${:.2} ({}) {}",
                        item.id, item.name, item.price, item.category, item.description
                    ));
                }
                self.catalog = msg_data.items;
                ctx.notify(PickNextItem);
            }
            NetworkMessage::ItemAdded(msg_data) => {
                self.logger.info(format!(
                    "Added {} to the cart ({} entries)",
                    msg_data.item.name, msg_data.cart_len
                ));
            }
            NetworkMessage::UnknownItem(msg_data) => {
                self.logger
                    .warn(format!("Item {} is not on the menu", msg_data.item_id));
            }
            NetworkMessage::CartContents(msg_data) => {
                let total: f64 = msg_data.items.iter().map(|item| item.price).sum();
                self.logger.info(format!(
                    "Cart: {} for a total of ${:.2}",
                    msg_data
                        .items
                        .iter()
                        .map(|item| item.name.as_str())
                        .collect::<Vec<_>>()
                        .join(", "),
                    total
                ));
                self.logger
                    .info(format!("Confirming order to \"{}\"", self.location));
                self.send(NetworkMessage::ConfirmOrder(ConfirmOrder {
                    location: self.location.clone(),
                }));
            }
            NetworkMessage::OrderConfirmed(msg_data) => {
                self.logger
                    .info(format!("Order {} confirmed, tracking it now", msg_data.order_id));
                self.order_id = Some(msg_data.order_id);
                ctx.notify_later(PollStatus, Duration::from_millis(STATUS_POLL_MILLIS));
            }
            NetworkMessage::OrderRejected(msg_data) => {
                self.logger
                    .error(format!("Order rejected: {}", msg_data.reason));
                System::current().stop();
            }
            NetworkMessage::OrderStatusIs(msg_data) => {
                self.logger.info(format!(
                    "Order {} is: {}",
                    msg_data.order_id, msg_data.status
                ));
                if msg_data.status == OrderStatus::Delivered {
                    self.logger.info("Enjoy your meal!");
                    System::current().stop();
                } else {
                    ctx.notify_later(PollStatus, Duration::from_millis(STATUS_POLL_MILLIS));
                }
            }
            NetworkMessage::OrderNotFound(msg_data) => {
                self.logger
                    .error(format!("The canteen lost order {}", msg_data.order_id));
                System::current().stop();
            }
            NetworkMessage::ConnectionClosed(_) => {
                self.logger.warn("The canteen closed the connection");
                System::current().stop();
            }
            other => {
                self.logger
                    .warn(format!("Unexpected message for a customer: {:?}", other));
            }
        }
    }
}
