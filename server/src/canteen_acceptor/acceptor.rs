use crate::canteen_actors::catalog::Catalog;
use crate::canteen_actors::order_board::OrderBoard;
use crate::canteen_actors::session::Session;
use actix::prelude::*;
use colored::Color;
use common::logger::Logger;
use std::net::SocketAddr;
use std::sync::Arc;

/// Listens for customers and admins and starts one [`Session`] per
/// connection, all wired to the same catalog and order board.
pub struct Acceptor {
    pub addr: SocketAddr,
    pub catalog: Arc<Catalog>,
    pub order_board: Addr<OrderBoard>,
    pub logger: Logger,
}

impl Acceptor {
    pub fn new(addr: SocketAddr, catalog: Arc<Catalog>, order_board: Addr<OrderBoard>) -> Self {
        Self {
            addr,
            catalog,
            order_board,
            logger: Logger::new("Acceptor", Color::Green),
        }
    }

    pub async fn start(&self) -> std::io::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        self.logger
            .info(format!("Canteen open, listening on {}", self.addr));
        self.accept_connections(listener).await
    }

    async fn accept_connections(&self, listener: tokio::net::TcpListener) -> std::io::Result<()> {
        loop {
            match listener.accept().await {
                Ok((stream, peer_addr)) => {
                    self.logger
                        .info(format!("Accepted connection from {}", peer_addr));
                    Session::new(
                        stream,
                        peer_addr,
                        self.catalog.clone(),
                        self.order_board.clone(),
                    );
                }
                Err(e) => {
                    self.logger
                        .warn(format!("Failed to accept connection: {}", e));
                }
            }
        }
    }
}
