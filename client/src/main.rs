use actix::Actor;
use client::client_actors::delivery_tracker::{DeliveryTracker, TrackerServices};
use client::client_actors::tracking_view::TrackingView;
use client::messages::StopTracking;
use common::api::{KitchenApiClient, NominatimGeocoder, OrdersApi, OsrmRouter};
use common::config::AppConfig;
use common::logger::Logger;
use common::utils::print_welcome_message;
use std::env;
use std::io;
use std::sync::Arc;
use tokio::signal::ctrl_c;

#[actix::main]
async fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Uso: {} <order_id>", args[0]);
        std::process::exit(1);
    }
    let order_id = args[1].clone();
    let logger = Logger::new("Client");

    let config = AppConfig::from_env().map_err(io::Error::other)?;
    print_welcome_message("Order tracking");

    let orders: Arc<dyn OrdersApi> = Arc::new(
        KitchenApiClient::new(
            config.api_base_url.clone(),
            config.api_token.clone(),
            config.http_timeout,
        )
        .map_err(io::Error::other)?,
    );

    let order = match orders.fetch_order(&order_id).await {
        Ok(order) => order,
        Err(e) => {
            logger.error(format!("Could not load order {}: {}", order_id, e));
            std::process::exit(1);
        }
    };
    if order.status.is_terminal() {
        logger.info(format!(
            "Order {} is already {}, nothing to track.",
            order.order_id,
            order.status.label()
        ));
        return Ok(());
    }

    let services = TrackerServices {
        orders,
        geocoder: Arc::new(
            NominatimGeocoder::new(config.geocoder_url.clone(), config.http_timeout)
                .map_err(io::Error::other)?,
        ),
        router: Arc::new(
            OsrmRouter::new(config.router_url.clone(), config.http_timeout)
                .map_err(io::Error::other)?,
        ),
    };

    let view = TrackingView::new(order.clone()).start();
    let tracker = DeliveryTracker::new(
        order.order_id,
        order.delivery_address,
        &config,
        services,
        view.recipient(),
    )
    .start();

    tokio::select! {
        _ = ctrl_c() => {
            logger.info("Ctrl-C recibido, apagando...");
        }
    }

    if let Err(e) = tracker.send(StopTracking).await {
        logger.warn(format!("Tracker already stopped: {}", e));
    }
    actix::System::current().stop();
    Ok(())
}
