use actix::prelude::*;
use common::constants::{SERVER_IP_ADDRESS, SERVER_PORT};
use common::messages::shared_messages::StartRunning;
use rand::Rng;
use std::env;
use std::net::SocketAddr;
use tokio::signal::ctrl_c;
mod client_actors;
mod messages;
use client_actors::customer::Customer;

const DEMO_PICKS: usize = 3;

#[actix::main]
async fn main() -> std::io::Result<()> {
    let args: Vec<String> = env::args().collect();
    let location = if args.len() > 1 {
        args[1].clone()
    } else {
        format!("Dorm {}", rand::thread_rng().gen_range(1..=20))
    };

    let server_addr: SocketAddr = format!("{}:{}", SERVER_IP_ADDRESS, SERVER_PORT)
        .parse()
        .expect("invalid server address");

    let customer = Customer::new(server_addr, location, DEMO_PICKS).await?;
    let addr = customer.start();
    addr.do_send(StartRunning);

    tokio::select! {
        _ = ctrl_c() => {
            println!("Ctrl-C received, leaving the canteen...");
            System::current().stop();
        }
    }
    Ok(())
}
