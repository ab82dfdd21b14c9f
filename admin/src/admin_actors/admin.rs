use actix::prelude::*;
use colored::Color;
use common::constants::ADMIN_SWEEP_MILLIS;
use common::logger::Logger;
use common::messages::admin_messages::{AdminLogin, RequestAllOrders, UpdateOrderStatus};
use common::messages::shared_messages::{NetworkMessage, StartRunning};
use common::network::communicator::Communicator;
use common::network::peer_types::PeerType;
use common::types::order_status::OrderStatus;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpStream;

/// The admin panel demo: logs in with the fixed credentials, then sweeps
/// the order board on an interval, pushing every open order one step along
/// the usual kitchen pipeline.
///
/// The step order below is only this script's habit. The server accepts any
/// status at any time, so a real operator could jump straight to Delivered.
pub struct Admin {
    pub server_addr: SocketAddr,
    pub admin_id: String,
    pub password: String,
    pub communicator: Option<Communicator<Admin>>,
    pub pending_stream: Option<TcpStream>,
    pub logger: Logger,
}

/// Requests a fresh snapshot of the order board.
#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
struct SweepOrders;

fn next_step(status: &OrderStatus) -> OrderStatus {
    match status {
        OrderStatus::OrderPlaced => OrderStatus::Cooking,
        OrderStatus::Cooking => OrderStatus::Packing,
        OrderStatus::Packing => OrderStatus::OnTheWay,
        OrderStatus::OnTheWay => OrderStatus::Delivered,
        OrderStatus::Delivered => OrderStatus::Delivered,
    }
}

impl Admin {
    pub async fn new(
        server_addr: SocketAddr,
        admin_id: String,
        password: String,
    ) -> std::io::Result<Self> {
        let stream = TcpStream::connect(server_addr).await?;
        Ok(Self {
            server_addr,
            admin_id,
            password,
            communicator: None,
            pending_stream: Some(stream),
            logger: Logger::new("Admin", Color::Magenta),
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

impl Actor for Admin {
    type Context = Context<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        if let Some(stream) = self.pending_stream.take() {
            self.communicator = Some(Communicator::new(
                stream,
                self.server_addr,
                ctx.address(),
                PeerType::AdminType,
            ));
            self.logger
                .info(format!("Connected to the canteen at {}", self.server_addr));
        } else {
            self.logger.error("No stream available");
        }
    }
}

impl Handler<StartRunning> for Admin {
    type Result = ();

    fn handle(&mut self, _msg: StartRunning, _ctx: &mut Self::Context) {
        self.logger
            .info(format!("Logging in as \"{}\"", self.admin_id));
        self.send(NetworkMessage::AdminLogin(AdminLogin {
            admin_id: self.admin_id.clone(),
            password: self.password.clone(),
        }));
    }
}

impl Handler<SweepOrders> for Admin {
    type Result = ();

    fn handle(&mut self, _msg: SweepOrders, _ctx: &mut Self::Context) {
        self.send(NetworkMessage::RequestAllOrders(RequestAllOrders {}));
    }
}

impl Handler<NetworkMessage> for Admin {
    type Result = ();

    fn handle(&mut self, msg: NetworkMessage, ctx: &mut Self::Context) -> Self::Result {
        match msg {
            NetworkMessage::LoginResult(msg_data) => {
                if msg_data.accepted {
                    self.logger.info("Welcome to the admin panel");
                    ctx.notify(SweepOrders);
                } else {
                    self.logger.error("Credentials rejected");
                    System::current().stop();
                }
            }
            NetworkMessage::AllOrders(msg_data) => {
                if msg_data.orders.is_empty() {
                    self.logger.info("No orders on the board yet");
                }
                for order in &msg_data.orders {
                    self.logger.info(format!(
                        "Order #{} - {} - {} item(s) - Total: ${:.2} - {}",
                        order.order_id,
                        order.location,
                        order.items.len(),
                        order.total_price(),
                        order.status
                    ));
                    if order.status != OrderStatus::Delivered {
                        self.send(NetworkMessage::UpdateOrderStatus(UpdateOrderStatus {
                            order_id: order.order_id,
                            new_status: next_step(&order.status),
                        }));
                    }
                }
                ctx.notify_later(SweepOrders, Duration::from_millis(ADMIN_SWEEP_MILLIS));
            }
            NetworkMessage::StatusUpdated(msg_data) => {
                self.logger.info(format!(
                    "Order {} moved to {}",
                    msg_data.order_id, msg_data.status
                ));
            }
            NetworkMessage::OrderNotFound(msg_data) => {
                self.logger
                    .warn(format!("No order with id {}", msg_data.order_id));
            }
            NetworkMessage::AccessDenied(_) => {
                self.logger.error("The canteen denied access to the panel");
                System::current().stop();
            }
            NetworkMessage::ConnectionClosed(_) => {
                self.logger.warn("The canteen closed the connection");
                System::current().stop();
            }
            other => {
                self.logger
                    .warn(format!("Unexpected message for the admin panel: {:?}", other));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_sweep_walks_the_usual_pipeline() {
        assert_eq!(next_step(&OrderStatus::OrderPlaced), OrderStatus::Cooking);
        assert_eq!(next_step(&OrderStatus::Cooking), OrderStatus::Packing);
        assert_eq!(next_step(&OrderStatus::Packing), OrderStatus::OnTheWay);
        assert_eq!(next_step(&OrderStatus::OnTheWay), OrderStatus::Delivered);
        assert_eq!(next_step(&OrderStatus::Delivered), OrderStatus::Delivered);
    }
}
