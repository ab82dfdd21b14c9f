use crate::error::OrderError;
use crate::messages::internal_messages::{GetOrder, GetOrders, PlaceOrder, SetOrderStatus};
use actix::prelude::*;
use colored::Color;
use common::logger::Logger;
use common::types::order::OrderDTO;
use common::types::order_status::OrderStatus;

/// Process-wide record of every placed order, started once in `main` and
/// shared by address with every session. Orders are append-only and keep
/// their 1-based placement position as id; statuses are overwritten
/// unconditionally, last write wins.
///
/// All mutations go through this actor's mailbox, which is what serializes
/// concurrent sessions into single-writer semantics.
pub struct OrderBoard {
    orders: Vec<OrderDTO>,
    logger: Logger,
}

impl OrderBoard {
    pub fn new() -> Self {
        Self {
            orders: Vec::new(),
            logger: Logger::new("OrderBoard", Color::White),
        }
    }
}

impl Actor for OrderBoard {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        self.logger.info("Order board ready, no orders yet");
    }
}

impl Handler<PlaceOrder> for OrderBoard {
    type Result = Result<u64, OrderError>;

    fn handle(&mut self, msg: PlaceOrder, _ctx: &mut Self::Context) -> Self::Result {
        if msg.location.trim().is_empty() {
            return Err(OrderError::MissingLocation);
        }
        if msg.items.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        let order_id = self.orders.len() as u64 + 1;
        let order = OrderDTO {
            order_id,
            location: msg.location,
            status: OrderStatus::OrderPlaced,
            items: msg.items,
            placed_at: std::time::SystemTime::now(),
        };
        self.logger.info(format!(
            "Order {} placed for \"{}\" ({} items, ${:.2})",
            order_id,
            order.location,
            order.items.len(),
            order.total_price()
        ));
        self.orders.push(order);
        Ok(order_id)
    }
}

impl Handler<SetOrderStatus> for OrderBoard {
    type Result = Result<OrderStatus, OrderError>;

    fn handle(&mut self, msg: SetOrderStatus, _ctx: &mut Self::Context) -> Self::Result {
        let order = self
            .orders
            .get_mut(
                msg.order_id
                    .checked_sub(1)
                    .ok_or(OrderError::NotFound(msg.order_id))? as usize,
            )
            .ok_or(OrderError::NotFound(msg.order_id))?;

        // Sin chequeo de transiciones: el admin puede pisar cualquier estado.
        order.status = msg.new_status.clone();
        self.logger.info(format!(
            "Order {} is now \"{}\"",
            msg.order_id, order.status
        ));
        Ok(msg.new_status)
    }
}

impl Handler<GetOrder> for OrderBoard {
    type Result = MessageResult<GetOrder>;

    fn handle(&mut self, msg: GetOrder, _ctx: &mut Self::Context) -> Self::Result {
        MessageResult(
            msg.order_id
                .checked_sub(1)
                .and_then(|idx| self.orders.get(idx as usize))
                .cloned(),
        )
    }
}

impl Handler<GetOrders> for OrderBoard {
    type Result = MessageResult<GetOrders>;

    fn handle(&mut self, _msg: GetOrders, _ctx: &mut Self::Context) -> Self::Result {
        MessageResult(self.orders.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::types::menu_item::{Category, MenuItem};

    fn item(id: u32, name: &str, price: f64) -> MenuItem {
        MenuItem {
            id,
            name: name.to_string(),
            description: String::new(),
            price,
            category: Category::Meals,
            image_ref: String::new(),
        }
    }

    #[actix_rt::test]
    async fn placing_rejects_blank_location_and_empty_cart() {
        let board = OrderBoard::new().start();

        let err = board
            .send(PlaceOrder {
                location: "   ".to_string(),
                items: vec![item(1, "Burger", 5.99)],
            })
            .await
            .unwrap()
            .unwrap_err();
        assert_eq!(err, OrderError::MissingLocation);

        let err = board
            .send(PlaceOrder {
                location: "Dorm 12".to_string(),
                items: vec![],
            })
            .await
            .unwrap()
            .unwrap_err();
        assert_eq!(err, OrderError::EmptyCart);

        // Neither failure left anything on the board.
        assert!(board.send(GetOrders).await.unwrap().is_empty());
    }

    #[actix_rt::test]
    async fn ids_are_one_based_and_sequential() {
        let board = OrderBoard::new().start();

        for n in 1..=3u64 {
            let id = board
                .send(PlaceOrder {
                    location: format!("Table {}", n),
                    items: vec![item(1, "Burger", 5.99)],
                })
                .await
                .unwrap()
                .unwrap();
            assert_eq!(id, n);
        }

        let orders = board.send(GetOrders).await.unwrap();
        assert_eq!(orders.len(), 3);
        assert_eq!(orders[0].location, "Table 1");
        assert_eq!(orders[2].location, "Table 3");
    }

    #[actix_rt::test]
    async fn new_orders_start_as_order_placed() {
        let board = OrderBoard::new().start();
        let id = board
            .send(PlaceOrder {
                location: "Dorm 12".to_string(),
                items: vec![item(1, "Burger", 5.99), item(2, "Pizza", 8.99)],
            })
            .await
            .unwrap()
            .unwrap();

        let order = board.send(GetOrder { order_id: id }).await.unwrap().unwrap();
        assert_eq!(order.status, OrderStatus::OrderPlaced);
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.location, "Dorm 12");
    }

    #[actix_rt::test]
    async fn status_overwrite_is_unconditional_and_last_write_wins() {
        let board = OrderBoard::new().start();
        let id = board
            .send(PlaceOrder {
                location: "Dorm 12".to_string(),
                items: vec![item(1, "Burger", 5.99)],
            })
            .await
            .unwrap()
            .unwrap();

        // Cooking then straight to OnTheWay, skipping Packing entirely.
        board
            .send(SetOrderStatus {
                order_id: id,
                new_status: OrderStatus::Cooking,
            })
            .await
            .unwrap()
            .unwrap();
        board
            .send(SetOrderStatus {
                order_id: id,
                new_status: OrderStatus::OnTheWay,
            })
            .await
            .unwrap()
            .unwrap();

        let order = board.send(GetOrder { order_id: id }).await.unwrap().unwrap();
        assert_eq!(order.status, OrderStatus::OnTheWay);

        // Backwards is just as legal.
        board
            .send(SetOrderStatus {
                order_id: id,
                new_status: OrderStatus::Cooking,
            })
            .await
            .unwrap()
            .unwrap();
        let order = board.send(GetOrder { order_id: id }).await.unwrap().unwrap();
        assert_eq!(order.status, OrderStatus::Cooking);
    }

    #[actix_rt::test]
    async fn updating_an_unknown_order_fails_and_changes_nothing() {
        let board = OrderBoard::new().start();
        let id = board
            .send(PlaceOrder {
                location: "Dorm 12".to_string(),
                items: vec![item(1, "Burger", 5.99)],
            })
            .await
            .unwrap()
            .unwrap();

        for bad_id in [0u64, 7] {
            let err = board
                .send(SetOrderStatus {
                    order_id: bad_id,
                    new_status: OrderStatus::Delivered,
                })
                .await
                .unwrap()
                .unwrap_err();
            assert_eq!(err, OrderError::NotFound(bad_id));
        }

        let order = board.send(GetOrder { order_id: id }).await.unwrap().unwrap();
        assert_eq!(order.status, OrderStatus::OrderPlaced);
    }

    #[actix_rt::test]
    async fn get_order_returns_none_for_unknown_ids() {
        let board = OrderBoard::new().start();
        assert!(board.send(GetOrder { order_id: 0 }).await.unwrap().is_none());
        assert!(board.send(GetOrder { order_id: 1 }).await.unwrap().is_none());
    }
}
