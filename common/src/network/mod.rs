pub mod communicator;
pub mod peer_types;
pub mod tcp_receiver;
pub mod tcp_sender;
