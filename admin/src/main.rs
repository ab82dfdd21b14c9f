use actix::prelude::*;
use common::constants::{ADMIN_ID, ADMIN_PASSWORD, SERVER_IP_ADDRESS, SERVER_PORT};
use common::messages::shared_messages::StartRunning;
use std::env;
use std::net::SocketAddr;
use tokio::signal::ctrl_c;
mod admin_actors;
use admin_actors::admin::Admin;

#[actix::main]
async fn main() -> std::io::Result<()> {
    // Overridable credentials so a rejected login can be demonstrated.
    let args: Vec<String> = env::args().collect();
    let (admin_id, password) = if args.len() > 2 {
        (args[1].clone(), args[2].clone())
    } else {
        (ADMIN_ID.to_string(), ADMIN_PASSWORD.to_string())
    };

    let server_addr: SocketAddr = format!("{}:{}", SERVER_IP_ADDRESS, SERVER_PORT)
        .parse()
        .expect("invalid server address");

    let admin = Admin::new(server_addr, admin_id, password).await?;
    let addr = admin.start();
    addr.do_send(StartRunning);

    tokio::select! {
        _ = ctrl_c() => {
            println!("Ctrl-C received, closing the admin panel...");
            System::current().stop();
        }
    }
    Ok(())
}
