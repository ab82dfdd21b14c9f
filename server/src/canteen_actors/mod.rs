pub mod cart;
pub mod catalog;
pub mod order_board;
pub mod session;
