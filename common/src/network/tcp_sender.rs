use crate::messages::shared_messages::{NetworkMessage, Shutdown};
use actix::prelude::*;
use std::collections::VecDeque;
use tokio::io::{AsyncWriteExt, BufWriter, WriteHalf};
use tokio::net::TcpStream;

/// Serializes [`NetworkMessage`]s as JSON lines and writes them to the
/// write half of a TCP stream. Messages are queued so they leave the socket
/// in the order they were sent to this actor.
pub struct TCPSender {
    /// Buffered writer, taken while a write is in flight.
    writer: Option<BufWriter<WriteHalf<TcpStream>>>,
    /// Messages waiting to be written.
    queue: VecDeque<NetworkMessage>,
}

impl TCPSender {
    pub fn new(write_half: WriteHalf<TcpStream>) -> Self {
        Self {
            writer: Some(BufWriter::new(write_half)),
            queue: VecDeque::new(),
        }
    }
}

impl Actor for TCPSender {
    type Context = Context<Self>;
}

#[derive(Message)]
#[rtype(result = "()")]
struct FlushNext;

impl Handler<NetworkMessage> for TCPSender {
    type Result = ();

    fn handle(&mut self, msg: NetworkMessage, ctx: &mut Self::Context) {
        self.queue.push_back(msg);
        // Solo el primer mensaje arranca el drenado, el resto se encadena.
        if self.queue.len() == 1 {
            ctx.notify(FlushNext);
        }
    }
}

impl Handler<FlushNext> for TCPSender {
    type Result = ResponseActFuture<Self, ()>;

    fn handle(&mut self, _msg: FlushNext, _ctx: &mut Self::Context) -> Self::Result {
        if let (Some(mut writer), Some(msg)) = (self.writer.take(), self.queue.front().cloned()) {
            let fut = async move {
                let line = match serde_json::to_string(&msg) {
                    Ok(serialized) => format!("{}\n", serialized),
                    Err(e) => return Err(format!("could not serialize message: {:?}", e)),
                };
                if let Err(e) = writer.write_all(line.as_bytes()).await {
                    return Err(format!("could not write to socket: {:?}", e));
                }
                if let Err(e) = writer.flush().await {
                    return Err(format!("could not flush socket: {:?}", e));
                }
                Ok(writer)
            };

            Box::pin(fut.into_actor(self).map(|res, act, ctx| match res {
                Ok(writer) => {
                    act.writer = Some(writer);
                    act.queue.pop_front();
                    if !act.queue.is_empty() {
                        ctx.notify(FlushNext);
                    }
                }
                Err(err_msg) => {
                    // The socket is gone, pending messages cannot be delivered.
                    act.queue.clear();
                    eprintln!("[TCPSender] {}", err_msg);
                    ctx.stop();
                }
            }))
        } else {
            Box::pin(actix::fut::ready(()))
        }
    }
}

impl Handler<Shutdown> for TCPSender {
    type Result = ();

    fn handle(&mut self, _msg: Shutdown, ctx: &mut Self::Context) {
        self.writer = None;
        self.queue.clear();
        ctx.stop();
    }
}
