pub mod admin_messages;
pub mod client_messages;
pub mod server_messages;
pub mod shared_messages;

pub use admin_messages::*;
pub use client_messages::*;
pub use server_messages::*;
pub use shared_messages::*;
