use std::net::SocketAddr;
use std::sync::Arc;
mod canteen_acceptor;
mod canteen_actors;
mod error;
mod messages;
use crate::canteen_acceptor::acceptor::Acceptor;
use crate::canteen_actors::catalog::Catalog;
use crate::canteen_actors::order_board::OrderBoard;
use actix::Actor;
use common::constants::{SERVER_IP_ADDRESS, SERVER_PORT};

#[actix::main]
async fn main() -> std::io::Result<()> {
    let addr: SocketAddr = format!("{}:{}", SERVER_IP_ADDRESS, SERVER_PORT)
        .parse()
        .expect("invalid listen address");

    let catalog = Arc::new(Catalog::standard());
    let order_board = OrderBoard::new().start();

    let acceptor = Acceptor::new(addr, catalog, order_board);
    acceptor.start().await?;

    Ok(())
}
