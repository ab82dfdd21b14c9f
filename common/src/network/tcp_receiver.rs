use crate::logger::Logger;
use crate::messages::shared_messages::{ConnectionClosed, NetworkMessage};
use actix::dev::ToEnvelope;
use actix::prelude::*;
use colored::Color;
use std::net::SocketAddr;
use tokio::io::{AsyncBufReadExt, BufReader, ReadHalf};
use tokio::net::TcpStream;

/// Reads JSON lines from the read half of a TCP stream and forwards each
/// decoded [`NetworkMessage`] to the destination actor. Lines that do not
/// decode are logged and skipped; EOF turns into a `ConnectionClosed`.
pub struct TCPReceiver<A: Actor + Handler<NetworkMessage>> {
    remote_addr: SocketAddr,
    reader: Option<BufReader<ReadHalf<TcpStream>>>,
    destination: Addr<A>,
    logger: Logger,
}

impl<A> TCPReceiver<A>
where
    A: Actor + Handler<NetworkMessage>,
{
    pub fn new(reader: ReadHalf<TcpStream>, remote_addr: SocketAddr, destination: Addr<A>) -> Self {
        Self {
            remote_addr,
            reader: Some(BufReader::new(reader)),
            destination,
            logger: Logger::new("TCPReceiver", Color::BrightBlack),
        }
    }
}

impl<A> Actor for TCPReceiver<A>
where
    A: Actor + Handler<NetworkMessage> + 'static,
    A::Context: ToEnvelope<A, NetworkMessage>,
{
    type Context = Context<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        let destination = self.destination.clone();
        let remote_addr = self.remote_addr;
        let logger = self.logger.clone();
        let Some(reader) = self.reader.take() else {
            logger.error("Started without a stream to read from");
            ctx.stop();
            return;
        };

        ctx.spawn(
            async move {
                let mut lines = reader.lines();
                while let Ok(Some(line)) = lines.next_line().await {
                    match serde_json::from_str::<NetworkMessage>(&line) {
                        Ok(msg) => destination.do_send(msg),
                        Err(e) => {
                            logger.warn(format!("Dropping undecodable line from {}: {}", remote_addr, e));
                        }
                    }
                }
                destination.do_send(NetworkMessage::ConnectionClosed(ConnectionClosed {
                    remote_addr,
                }));
            }
            .into_actor(self),
        );
    }
}
