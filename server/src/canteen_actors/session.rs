use crate::canteen_actors::cart::Cart;
use crate::canteen_actors::catalog::Catalog;
use crate::canteen_actors::order_board::OrderBoard;
use crate::error::OrderError;
use crate::messages::internal_messages::{GetOrder, GetOrders, PlaceOrder, SetOrderStatus};
use actix::prelude::*;
use colored::Color;
use common::constants::{ADMIN_ID, ADMIN_PASSWORD};
use common::logger::Logger;
use common::messages::admin_messages::{AdminLogin, RequestAllOrders, UpdateOrderStatus};
use common::messages::client_messages::{ConfirmOrder, RequestOrderStatus};
use common::messages::server_messages::{
    AccessDenied, AllOrders, CartContents, CatalogContents, ItemAdded, LoginResult,
    OrderConfirmed, OrderNotFound, OrderRejected, OrderStatusIs, StatusUpdated, UnknownItem,
};
use common::messages::shared_messages::NetworkMessage;
use common::network::communicator::Communicator;
use common::network::peer_types::PeerType;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpStream;
use uuid::Uuid;

/// One connected peer, customer or admin. Owns the connection's cart and
/// sequences every cart/board mutation for that peer, so a session never
/// observes a half-applied confirmation.
///
/// The admin operations are gated behind `admin_authenticated`, which only
/// flips after a successful [`AdminLogin`].
pub struct Session {
    pub session_id: Uuid,
    pub peer_addr: SocketAddr,
    pub catalog: Arc<Catalog>,
    pub cart: Cart,
    pub order_board: Addr<OrderBoard>,
    pub admin_authenticated: bool,
    pub communicator: Option<Communicator<Session>>,
    pub pending_stream: Option<TcpStream>,
    pub logger: Logger,
}

impl Session {
    pub fn new(
        stream: TcpStream,
        peer_addr: SocketAddr,
        catalog: Arc<Catalog>,
        order_board: Addr<OrderBoard>,
    ) -> Addr<Session> {
        let session_id = Uuid::new_v4();
        let tag = format!("Session {}", &session_id.to_string()[..8]);
        Session::create(move |_ctx| Session {
            session_id,
            peer_addr,
            catalog,
            cart: Cart::new(),
            order_board,
            admin_authenticated: false,
            communicator: None,
            pending_stream: Some(stream),
            logger: Logger::new(tag, Color::Cyan),
        })
    }

    fn reply(&self, msg: NetworkMessage) {
        if let Some(communicator) = &self.communicator {
            if let Err(e) = communicator.send(msg) {
                self.logger.error(e);
            }
        } else {
            self.logger.warn("No active connection to reply through");
        }
    }

    /// The confirm sequence: validate, take the cart, place the order,
    /// notify. `ctx.wait` keeps the mailbox blocked until the board answers,
    /// so no other message can slip in between the cart draining and the
    /// order existing.
    fn confirm_order(&mut self, msg: ConfirmOrder, ctx: &mut Context<Self>) {
        if msg.location.trim().is_empty() {
            self.logger
                .warn("Confirmation without a delivery location, keeping the cart");
            self.reply(NetworkMessage::OrderRejected(OrderRejected {
                reason: OrderError::MissingLocation.to_string(),
            }));
            return;
        }
        if self.cart.is_empty() {
            self.logger.warn("Confirmation with an empty cart");
            self.reply(NetworkMessage::OrderRejected(OrderRejected {
                reason: OrderError::EmptyCart.to_string(),
            }));
            return;
        }

        let items = self.cart.take();
        let location = msg.location.clone();
        ctx.wait(
            self.order_board
                .send(PlaceOrder {
                    location: location.clone(),
                    items: items.clone(),
                })
                .into_actor(self)
                .map(move |res, act, _ctx| match res {
                    Ok(Ok(order_id)) => {
                        act.logger
                            .info(format!("Order {} confirmed for \"{}\"", order_id, location));
                        act.reply(NetworkMessage::OrderConfirmed(OrderConfirmed { order_id }));
                    }
                    Ok(Err(err)) => {
                        // El tablero rechazó el pedido: devolvemos el carrito tal cual.
                        act.cart.restore(items);
                        act.reply(NetworkMessage::OrderRejected(OrderRejected {
                            reason: err.to_string(),
                        }));
                    }
                    Err(_) => {
                        act.cart.restore(items);
                        act.logger.error("Order board unreachable");
                        act.reply(NetworkMessage::OrderRejected(OrderRejected {
                            reason: "the canteen is not taking orders right now".to_string(),
                        }));
                    }
                }),
        );
    }

    fn request_order_status(&mut self, msg: RequestOrderStatus, ctx: &mut Context<Self>) {
        let order_id = msg.order_id;
        ctx.wait(
            self.order_board
                .send(GetOrder { order_id })
                .into_actor(self)
                .map(move |res, act, _ctx| match res {
                    Ok(Some(order)) => {
                        act.reply(NetworkMessage::OrderStatusIs(OrderStatusIs {
                            order_id,
                            status: order.status,
                        }));
                    }
                    Ok(None) => {
                        act.reply(NetworkMessage::OrderNotFound(OrderNotFound { order_id }));
                    }
                    Err(_) => act.logger.error("Order board unreachable"),
                }),
        );
    }

    fn admin_login(&mut self, msg: AdminLogin) {
        let accepted = msg.admin_id == ADMIN_ID && msg.password == ADMIN_PASSWORD;
        self.admin_authenticated = accepted;
        if accepted {
            self.logger.info("Admin credentials accepted");
        } else {
            // Acceso denegado y nada más: el panel vuelve a preguntar.
            self.logger
                .warn(format!("Rejected admin login for \"{}\"", msg.admin_id));
        }
        self.reply(NetworkMessage::LoginResult(LoginResult { accepted }));
    }

    fn request_all_orders(&mut self, ctx: &mut Context<Self>) {
        if !self.admin_authenticated {
            self.logger.warn("Order listing requested without login");
            self.reply(NetworkMessage::AccessDenied(AccessDenied {}));
            return;
        }
        ctx.wait(
            self.order_board
                .send(GetOrders)
                .into_actor(self)
                .map(|res, act, _ctx| match res {
                    Ok(orders) => {
                        act.reply(NetworkMessage::AllOrders(AllOrders { orders }));
                    }
                    Err(_) => act.logger.error("Order board unreachable"),
                }),
        );
    }

    fn update_order_status(&mut self, msg: UpdateOrderStatus, ctx: &mut Context<Self>) {
        if !self.admin_authenticated {
            self.logger.warn("Status update requested without login");
            self.reply(NetworkMessage::AccessDenied(AccessDenied {}));
            return;
        }
        let order_id = msg.order_id;
        ctx.wait(
            self.order_board
                .send(SetOrderStatus {
                    order_id,
                    new_status: msg.new_status,
                })
                .into_actor(self)
                .map(move |res, act, _ctx| match res {
                    Ok(Ok(status)) => {
                        act.reply(NetworkMessage::StatusUpdated(StatusUpdated {
                            order_id,
                            status,
                        }));
                    }
                    Ok(Err(err)) => {
                        act.logger.warn(err.to_string());
                        act.reply(NetworkMessage::OrderNotFound(OrderNotFound { order_id }));
                    }
                    Err(_) => act.logger.error("Order board unreachable"),
                }),
        );
    }
}

impl Actor for Session {
    type Context = Context<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        if let Some(stream) = self.pending_stream.take() {
            self.communicator = Some(Communicator::new(
                stream,
                self.peer_addr,
                ctx.address(),
                PeerType::ServerType,
            ));
            self.logger.info(format!(
                "Session {} opened for {}",
                self.session_id, self.peer_addr
            ));
        } else {
            self.logger.warn("Session started without a connection");
        }
    }
}

impl Handler<NetworkMessage> for Session {
    type Result = ();

    fn handle(&mut self, msg: NetworkMessage, ctx: &mut Self::Context) -> Self::Result {
        match msg {
            NetworkMessage::RequestCatalog(_) => {
                self.reply(NetworkMessage::CatalogContents(CatalogContents {
                    items: self.catalog.items().to_vec(),
                }));
            }
            NetworkMessage::AddToCart(msg_data) => {
                match self.catalog.find(msg_data.item_id) {
                    Some(item) => {
                        self.cart.add(item.clone());
                        self.logger.info(format!(
                            "{} added to cart ({} entries)",
                            item.name,
                            self.cart.len()
                        ));
                        self.reply(NetworkMessage::ItemAdded(ItemAdded {
                            item: item.clone(),
                            cart_len: self.cart.len(),
                        }));
                    }
                    None => {
                        self.logger
                            .warn(format!("Item {} is not on the menu", msg_data.item_id));
                        self.reply(NetworkMessage::UnknownItem(UnknownItem {
                            item_id: msg_data.item_id,
                        }));
                    }
                }
            }
            NetworkMessage::RequestCart(_) => {
                self.reply(NetworkMessage::CartContents(CartContents {
                    items: self.cart.items(),
                }));
            }
            // Cada variante se atiende acá mismo: re-encolar rompería el
            // orden relativo con los pedidos que llegaron después.
            NetworkMessage::ConfirmOrder(msg_data) => {
                self.confirm_order(msg_data, ctx);
            }
            NetworkMessage::RequestOrderStatus(msg_data) => {
                self.request_order_status(msg_data, ctx);
            }
            NetworkMessage::AdminLogin(msg_data) => {
                self.admin_login(msg_data);
            }
            NetworkMessage::RequestAllOrders(_) => {
                self.request_all_orders(ctx);
            }
            NetworkMessage::UpdateOrderStatus(msg_data) => {
                self.update_order_status(msg_data, ctx);
            }
            NetworkMessage::ConnectionClosed(msg_data) => {
                self.logger
                    .info(format!("{} disconnected, closing session", msg_data.remote_addr));
                ctx.stop();
            }
            other => {
                self.logger
                    .warn(format!("Unexpected message for a session: {:?}", other));
            }
        }
    }
}

impl Handler<ConfirmOrder> for Session {
    type Result = ();

    fn handle(&mut self, msg: ConfirmOrder, ctx: &mut Self::Context) -> Self::Result {
        self.confirm_order(msg, ctx);
    }
}

impl Handler<RequestOrderStatus> for Session {
    type Result = ();

    fn handle(&mut self, msg: RequestOrderStatus, ctx: &mut Self::Context) -> Self::Result {
        self.request_order_status(msg, ctx);
    }
}

impl Handler<AdminLogin> for Session {
    type Result = ();

    fn handle(&mut self, msg: AdminLogin, _ctx: &mut Self::Context) -> Self::Result {
        self.admin_login(msg);
    }
}

impl Handler<RequestAllOrders> for Session {
    type Result = ();

    fn handle(&mut self, _msg: RequestAllOrders, ctx: &mut Self::Context) -> Self::Result {
        self.request_all_orders(ctx);
    }
}

impl Handler<UpdateOrderStatus> for Session {
    type Result = ();

    fn handle(&mut self, msg: UpdateOrderStatus, ctx: &mut Self::Context) -> Self::Result {
        self.update_order_status(msg, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::internal_messages::GetCartSnapshot;
    use common::messages::client_messages::AddToCart;
    use common::types::order_status::OrderStatus;

    impl Handler<GetCartSnapshot> for Session {
        type Result = MessageResult<GetCartSnapshot>;

        fn handle(&mut self, _msg: GetCartSnapshot, _ctx: &mut Self::Context) -> Self::Result {
            MessageResult(self.cart.items())
        }
    }

    fn detached_session(order_board: Addr<OrderBoard>) -> Addr<Session> {
        let session_id = Uuid::new_v4();
        let tag = format!("Session {}", &session_id.to_string()[..8]);
        Session::create(move |_ctx| Session {
            session_id,
            peer_addr: "127.0.0.1:0".parse().unwrap(),
            catalog: Arc::new(Catalog::standard()),
            cart: Cart::new(),
            order_board,
            admin_authenticated: false,
            communicator: None,
            pending_stream: None,
            logger: Logger::new(tag, Color::Cyan),
        })
    }

    async fn fill_cart(session: &Addr<Session>, item_ids: &[u32]) {
        for item_id in item_ids {
            session
                .send(NetworkMessage::AddToCart(AddToCart { item_id: *item_id }))
                .await
                .unwrap();
        }
    }

    #[actix_rt::test]
    async fn unknown_item_leaves_the_cart_alone() {
        let board = OrderBoard::new().start();
        let session = detached_session(board);

        fill_cart(&session, &[1, 999]).await;

        let cart = session.send(GetCartSnapshot).await.unwrap();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].name, "Burger");
    }

    #[actix_rt::test]
    async fn blank_location_keeps_cart_and_creates_no_order() {
        let board = OrderBoard::new().start();
        let session = detached_session(board.clone());

        fill_cart(&session, &[1, 2]).await;
        session
            .send(ConfirmOrder {
                location: "  ".to_string(),
            })
            .await
            .unwrap();

        let cart = session.send(GetCartSnapshot).await.unwrap();
        assert_eq!(cart.len(), 2);
        assert!(board.send(GetOrders).await.unwrap().is_empty());
    }

    #[actix_rt::test]
    async fn empty_cart_creates_no_order() {
        let board = OrderBoard::new().start();
        let session = detached_session(board.clone());

        session
            .send(ConfirmOrder {
                location: "Dorm 12".to_string(),
            })
            .await
            .unwrap();

        // The snapshot round trip also guarantees the confirm finished.
        assert!(session.send(GetCartSnapshot).await.unwrap().is_empty());
        assert!(board.send(GetOrders).await.unwrap().is_empty());
    }

    #[actix_rt::test]
    async fn confirming_captures_the_cart_and_empties_it() {
        let board = OrderBoard::new().start();
        let session = detached_session(board.clone());

        // Burger and Pizza, confirmed to Dorm 12.
        fill_cart(&session, &[1, 2]).await;
        session
            .send(ConfirmOrder {
                location: "Dorm 12".to_string(),
            })
            .await
            .unwrap();

        let cart = session.send(GetCartSnapshot).await.unwrap();
        assert!(cart.is_empty());

        let orders = board.send(GetOrders).await.unwrap();
        assert_eq!(orders.len(), 1);
        let order = &orders[0];
        assert_eq!(order.order_id, 1);
        assert_eq!(order.location, "Dorm 12");
        assert_eq!(order.status, OrderStatus::OrderPlaced);
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.items[0].name, "Burger");
        assert_eq!(order.items[1].name, "Pizza");
    }

    #[actix_rt::test]
    async fn an_add_arriving_after_confirm_stays_out_of_the_order() {
        let board = OrderBoard::new().start();
        let session = detached_session(board.clone());

        fill_cart(&session, &[1]).await;

        // Pipelined wire traffic: the confirm and a fresh add land back to
        // back, exactly as they came off the socket.
        session.do_send(NetworkMessage::ConfirmOrder(ConfirmOrder {
            location: "Dorm 12".to_string(),
        }));
        session.do_send(NetworkMessage::AddToCart(AddToCart { item_id: 2 }));

        // The snapshot round trip guarantees both messages were handled.
        let cart = session.send(GetCartSnapshot).await.unwrap();

        let orders = board.send(GetOrders).await.unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].items.len(), 1);
        assert_eq!(orders[0].items[0].name, "Burger");

        // The late add starts the next cart instead of joining the order.
        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].name, "Pizza");
    }

    #[actix_rt::test]
    async fn each_confirmation_is_its_own_order() {
        let board = OrderBoard::new().start();
        let session = detached_session(board.clone());

        fill_cart(&session, &[1]).await;
        session
            .send(ConfirmOrder {
                location: "Table 5".to_string(),
            })
            .await
            .unwrap();
        fill_cart(&session, &[4, 4]).await;
        session
            .send(ConfirmOrder {
                location: "Dorm 3".to_string(),
            })
            .await
            .unwrap();

        assert!(session.send(GetCartSnapshot).await.unwrap().is_empty());
        let orders = board.send(GetOrders).await.unwrap();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[1].order_id, 2);
        assert_eq!(orders[1].items.len(), 2);
    }

    #[actix_rt::test]
    async fn status_updates_require_a_login() {
        let board = OrderBoard::new().start();
        let customer = detached_session(board.clone());

        fill_cart(&customer, &[1]).await;
        customer
            .send(ConfirmOrder {
                location: "Dorm 12".to_string(),
            })
            .await
            .unwrap();
        customer.send(GetCartSnapshot).await.unwrap();

        let intruder = detached_session(board.clone());
        intruder
            .send(UpdateOrderStatus {
                order_id: 1,
                new_status: OrderStatus::Delivered,
            })
            .await
            .unwrap();

        let orders = board.send(GetOrders).await.unwrap();
        assert_eq!(orders[0].status, OrderStatus::OrderPlaced);
    }

    #[actix_rt::test]
    async fn wrong_credentials_leave_the_session_unauthenticated() {
        let board = OrderBoard::new().start();
        let customer = detached_session(board.clone());

        fill_cart(&customer, &[2]).await;
        customer
            .send(ConfirmOrder {
                location: "Dorm 12".to_string(),
            })
            .await
            .unwrap();
        customer.send(GetCartSnapshot).await.unwrap();

        let admin = detached_session(board.clone());
        admin
            .send(AdminLogin {
                admin_id: ADMIN_ID.to_string(),
                password: "guess".to_string(),
            })
            .await
            .unwrap();
        admin
            .send(UpdateOrderStatus {
                order_id: 1,
                new_status: OrderStatus::Cooking,
            })
            .await
            .unwrap();

        let orders = board.send(GetOrders).await.unwrap();
        assert_eq!(orders[0].status, OrderStatus::OrderPlaced);
    }

    #[actix_rt::test]
    async fn logged_in_admin_can_set_any_status_in_any_order() {
        let board = OrderBoard::new().start();
        let customer = detached_session(board.clone());

        fill_cart(&customer, &[1, 2]).await;
        customer
            .send(ConfirmOrder {
                location: "Dorm 12".to_string(),
            })
            .await
            .unwrap();
        customer.send(GetCartSnapshot).await.unwrap();

        let admin = detached_session(board.clone());
        admin
            .send(AdminLogin {
                admin_id: ADMIN_ID.to_string(),
                password: ADMIN_PASSWORD.to_string(),
            })
            .await
            .unwrap();

        // Cooking, then straight to OnTheWay without passing through Packing.
        for status in [OrderStatus::Cooking, OrderStatus::OnTheWay] {
            admin
                .send(UpdateOrderStatus {
                    order_id: 1,
                    new_status: status,
                })
                .await
                .unwrap();
        }
        // Force the updates to be fully processed before asserting.
        admin.send(GetCartSnapshot).await.unwrap();

        let orders = board.send(GetOrders).await.unwrap();
        assert_eq!(orders[0].status, OrderStatus::OnTheWay);
    }
}
