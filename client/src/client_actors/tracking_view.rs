use crate::messages::TrackerEvent;
use actix::prelude::*;
use colored::*;
use common::errors::KitchenError;
use common::logger::Logger;
use common::types::dtos::OrderDTO;
use common::types::geo::{Coordinates, DriverIcon};
use common::utils::straight_line_distance;

/// Actor TrackingView: muestra en la terminal lo que informa el tracker.
pub struct TrackingView {
    pub order: OrderDTO,
    pub home: Option<Coordinates>,
    pub logger: Logger,
}

impl TrackingView {
    pub fn new(order: OrderDTO) -> Self {
        let logger = Logger::with_color(format!("Order {}", order.order_id), Color::Cyan);
        Self {
            order,
            home: None,
            logger,
        }
    }

    fn icon(icon: DriverIcon) -> &'static str {
        match icon {
            DriverIcon::Normal => "🛵",
            DriverIcon::Mirrored => "🛵↔",
        }
    }

    fn show_notification(&self, err: &KitchenError) {
        match err {
            KitchenError::LocationFetchFailed(_) | KitchenError::RouteUnavailable => {
                self.logger.warn(err.to_string())
            }
            _ => self.logger.error(err.to_string()),
        }
    }
}

impl Actor for TrackingView {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        self.logger.info(format!(
            "Tracking delivery to '{}' (status: {})",
            self.order.delivery_address,
            self.order.status.label()
        ));
    }
}

impl Handler<TrackerEvent> for TrackingView {
    type Result = ();

    fn handle(&mut self, msg: TrackerEvent, _ctx: &mut Self::Context) -> Self::Result {
        match msg {
            TrackerEvent::MarkersPlaced { home, driver, icon } => {
                self.home = Some(home);
                self.logger.info(format!("🏠 Destination {}", home));
                self.logger
                    .info(format!("{} Driver {}", Self::icon(icon), driver));
            }
            TrackerEvent::DriverMoved { position, icon } => {
                let distance = self
                    .home
                    .map(|home| format!(" ~{:.0} m away", straight_line_distance(position, home)))
                    .unwrap_or_default();
                self.logger.info(format!(
                    "{} Driver moved to {}{}",
                    Self::icon(icon),
                    position,
                    distance
                ));
            }
            TrackerEvent::RouteUpdated { summary, path } => match summary {
                Some(summary) => self.logger.info(format!(
                    "Route: {} ({} points)",
                    summary.to_string().bold(),
                    path.len()
                )),
                None => self.logger.info("Route: -"),
            },
            TrackerEvent::Notification(err) => self.show_notification(&err),
            TrackerEvent::Stopped => self.logger.info("Tracking finished."),
        }
    }
}
