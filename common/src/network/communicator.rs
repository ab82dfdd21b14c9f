use crate::messages::shared_messages::NetworkMessage;
use crate::network::peer_types::PeerType;
use crate::network::tcp_receiver::TCPReceiver;
use crate::network::tcp_sender::TCPSender;
use actix::prelude::*;
use std::net::SocketAddr;
use tokio::io::split;
use tokio::net::TcpStream;

/// Owns both halves of one TCP connection: a [`TCPSender`] for outgoing
/// messages and a [`TCPReceiver`] that feeds incoming ones to the owner
/// actor. Dropping the communicator drops the connection.
#[derive(Debug)]
pub struct Communicator<A>
where
    A: Actor<Context = Context<A>> + Handler<NetworkMessage>,
{
    pub sender: Option<Addr<TCPSender>>,
    pub receiver: Option<Addr<TCPReceiver<A>>>,
    pub peer_type: PeerType,
}

impl<A> Communicator<A>
where
    A: Actor<Context = Context<A>> + Handler<NetworkMessage>,
{
    pub fn new(
        tcp_stream: TcpStream,
        remote_addr: SocketAddr,
        destination_address: Addr<A>,
        peer_type: PeerType,
    ) -> Self {
        let (read_half, write_half) = split(tcp_stream);
        Self {
            sender: Some(TCPSender::new(write_half).start()),
            receiver: Some(TCPReceiver::new(read_half, remote_addr, destination_address).start()),
            peer_type,
        }
    }

    /// Queues a message on the sender, or reports why it could not.
    pub fn send(&self, msg: NetworkMessage) -> Result<(), String> {
        match &self.sender {
            Some(sender) => {
                sender.do_send(msg);
                Ok(())
            }
            None => Err("sender not initialized in communicator".to_string()),
        }
    }
}
