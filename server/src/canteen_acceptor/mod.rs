pub mod acceptor;
