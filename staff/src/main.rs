use actix::prelude::*;
use common::api::{KitchenApiClient, OrdersApi};
use common::config::AppConfig;
use common::logger::Logger;
use common::session::Session;
use common::types::role::Role;
use common::utils::print_welcome_message;
use staff::staff_actors::status_dialog::StatusDialog;
use staff::staff_actors::ui_handler::UIHandler;
use std::env;
use std::io;
use std::sync::Arc;
use tokio::signal::ctrl_c;
use tokio::sync::oneshot;

#[actix::main]
async fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Uso: {} <order_id> <role> [user_id]", args[0]);
        std::process::exit(1);
    }
    let order_id = args[1].clone();
    let logger = Logger::new("Staff");

    let role: Role = match args[2].parse() {
        Ok(role) => role,
        Err(e) => {
            logger.error(e.to_string());
            std::process::exit(1);
        }
    };
    let user_id = args.get(3).cloned().unwrap_or_else(|| role.to_string());

    let config = AppConfig::from_env().map_err(io::Error::other)?;
    let session = Session::new(user_id, role).with_token(config.api_token.clone());
    if !session.can_change_status() {
        logger.error(format!("Role '{}' cannot change order status.", role));
        std::process::exit(1);
    }

    print_welcome_message("Update order status");

    let api: Arc<dyn OrdersApi> = Arc::new(
        KitchenApiClient::new(
            config.api_base_url.clone(),
            session.auth_token.clone(),
            config.http_timeout,
        )
        .map_err(io::Error::other)?,
    );

    // El UIHandler bloquea leyendo stdin, así que corre en su propio arbiter.
    let ui_arbiter = Arbiter::new();
    let ui_handle = ui_arbiter.handle();
    let (done_tx, done_rx) = oneshot::channel();
    let _dialog = StatusDialog::create(move |ctx| {
        let dialog_addr = ctx.address();
        let ui = UIHandler::start_in_arbiter(&ui_handle, move |_| {
            UIHandler::new(dialog_addr, done_tx)
        });
        StatusDialog::new(order_id, session, api, ui.recipient())
    });

    tokio::select! {
        _ = ctrl_c() => {
            logger.info("Ctrl-C recibido, apagando...");
        }
        _ = done_rx => {
            logger.info("Dialog closed.");
        }
    }

    ui_arbiter.stop();
    System::current().stop();
    Ok(())
}
