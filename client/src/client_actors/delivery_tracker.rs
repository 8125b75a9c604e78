use crate::messages::{GetTrackState, StopTracking, TrackerEvent};
use actix::prelude::*;
use common::api::{Geocoder, OrdersApi, RouteEngine};
use common::config::AppConfig;
use common::constants::KITCHEN_POSITION;
use common::errors::{ApiError, KitchenError};
use common::logger::Logger;
use common::types::geo::{Coordinates, DriverIcon, Route, RouteSummary};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerPhase {
    /// Esperando la geocodificación de la dirección de entrega.
    Locating,
    Tracking,
    /// Geocoding failed or the retry cap was reached; no more polling.
    Failed,
    Stopped,
}

/// In-memory state of one tracking session. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryTrackState {
    pub phase: TrackerPhase,
    pub home: Option<Coordinates>,
    pub driver: Coordinates,
    pub summary: Option<RouteSummary>,
    pub consecutive_failures: u32,
}

/// Remote collaborators used by the tracker.
#[derive(Clone)]
pub struct TrackerServices {
    pub orders: Arc<dyn OrdersApi>,
    pub geocoder: Arc<dyn Geocoder>,
    pub router: Arc<dyn RouteEngine>,
}

/// Actor DeliveryTracker: sigue la posición del repartidor respecto de la
/// dirección de entrega y se lo informa a la vista.
///
/// At most one location request is in flight: ticks that find one pending are
/// skipped. A new route request supersedes the previous one. Every timer and
/// request is cancelled on teardown, whether it comes from [`StopTracking`],
/// from the view going away, or from the actor stopping for any other reason.
pub struct DeliveryTracker {
    /// Pedido seguido.
    pub order_id: String,
    /// Dirección de entrega a geocodificar.
    pub delivery_address: String,
    pub state: DeliveryTrackState,
    pub poll_interval: Duration,
    pub max_consecutive_failures: Option<u32>,
    services: TrackerServices,
    view: Recipient<TrackerEvent>,
    geocode_request: Option<SpawnHandle>,
    poll_timer: Option<SpawnHandle>,
    location_request: Option<SpawnHandle>,
    route_request: Option<SpawnHandle>,
    logger: Logger,
}

impl DeliveryTracker {
    pub fn new(
        order_id: impl Into<String>,
        delivery_address: impl Into<String>,
        config: &AppConfig,
        services: TrackerServices,
        view: Recipient<TrackerEvent>,
    ) -> Self {
        let order_id = order_id.into();
        let logger = Logger::new(format!("Tracker {}", order_id));
        Self {
            order_id,
            delivery_address: delivery_address.into(),
            state: DeliveryTrackState {
                phase: TrackerPhase::Locating,
                home: None,
                driver: Coordinates::from(KITCHEN_POSITION),
                summary: None,
                consecutive_failures: 0,
            },
            poll_interval: config.poll_interval,
            max_consecutive_failures: config.max_consecutive_failures,
            services,
            view,
            geocode_request: None,
            poll_timer: None,
            location_request: None,
            route_request: None,
            logger,
        }
    }

    fn notify_view(&self, event: TrackerEvent) {
        self.view.do_send(event);
    }

    fn on_geocoded(&mut self, result: Result<Coordinates, ApiError>, ctx: &mut Context<Self>) {
        self.geocode_request = None;
        match result {
            Ok(home) => {
                self.logger
                    .info(format!("Delivery address resolved to {}", home));
                self.state.home = Some(home);
                self.state.phase = TrackerPhase::Tracking;
                self.notify_view(TrackerEvent::MarkersPlaced {
                    home,
                    driver: self.state.driver,
                    icon: DriverIcon::facing(self.state.driver, home),
                });
                self.request_route(ctx);
                self.start_polling(ctx);
            }
            Err(e) => {
                self.logger.error(format!(
                    "Could not geocode '{}': {}",
                    self.delivery_address, e
                ));
                self.state.phase = TrackerPhase::Failed;
                self.notify_view(TrackerEvent::Notification(KitchenError::GeocodingFailed(
                    e.to_string(),
                )));
            }
        }
    }

    fn start_polling(&mut self, ctx: &mut Context<Self>) {
        if self.poll_timer.is_some() {
            return;
        }
        self.logger.info(format!(
            "Polling driver location every {} ms",
            self.poll_interval.as_millis()
        ));
        let handle = ctx.run_interval(self.poll_interval, |act, ctx| {
            act.poll_driver_location(ctx);
        });
        self.poll_timer = Some(handle);
    }

    fn stop_polling(&mut self, ctx: &mut Context<Self>) {
        if let Some(handle) = self.poll_timer.take() {
            ctx.cancel_future(handle);
        }
    }

    fn poll_driver_location(&mut self, ctx: &mut Context<Self>) {
        if self.state.phase != TrackerPhase::Tracking {
            return;
        }
        // La vista ya no existe: nadie va a cerrar el tracker por nosotros.
        if !self.view.connected() {
            self.logger.warn("Tracking view is gone, stopping tracker");
            ctx.stop();
            return;
        }
        if self.location_request.is_some() {
            self.logger
                .debug("Previous location request still in flight, skipping tick");
            return;
        }

        let orders = self.services.orders.clone();
        let order_id = self.order_id.clone();
        let handle = ctx.spawn(
            async move { orders.fetch_driver_location(&order_id).await }
                .into_actor(self)
                .map(|result, act, ctx| {
                    act.location_request = None;
                    act.on_location(result, ctx);
                }),
        );
        self.location_request = Some(handle);
    }

    fn on_location(&mut self, result: Result<Coordinates, ApiError>, ctx: &mut Context<Self>) {
        if self.state.phase != TrackerPhase::Tracking {
            return;
        }
        match result {
            Ok(position) => {
                self.state.consecutive_failures = 0;
                self.state.driver = position;
                let icon = match self.state.home {
                    Some(home) => DriverIcon::facing(position, home),
                    None => DriverIcon::Normal,
                };
                self.logger
                    .debug(format!("Driver at {} ({:?})", position, icon));
                self.notify_view(TrackerEvent::DriverMoved { position, icon });
                self.request_route(ctx);
            }
            Err(e) => {
                self.state.consecutive_failures += 1;
                let failures = self.state.consecutive_failures;
                self.logger.warn(format!(
                    "Driver location fetch failed ({} in a row): {}",
                    failures, e
                ));
                self.notify_view(TrackerEvent::Notification(
                    KitchenError::LocationFetchFailed(e.to_string()),
                ));
                if let Some(max) = self.max_consecutive_failures {
                    if failures >= max {
                        self.logger.error(format!(
                            "Giving up on order {} after {} failures",
                            self.order_id, failures
                        ));
                        self.stop_polling(ctx);
                        self.state.phase = TrackerPhase::Failed;
                        self.notify_view(TrackerEvent::Notification(
                            KitchenError::TrackingAbandoned { failures },
                        ));
                    }
                }
            }
        }
    }

    fn request_route(&mut self, ctx: &mut Context<Self>) {
        let Some(home) = self.state.home else {
            return;
        };
        if let Some(previous) = self.route_request.take() {
            self.logger.debug("Superseding pending route request");
            ctx.cancel_future(previous);
        }
        let router = self.services.router.clone();
        let from = self.state.driver;
        let handle = ctx.spawn(
            async move { router.route(from, home).await }
                .into_actor(self)
                .map(|result, act, _ctx| {
                    act.route_request = None;
                    act.on_route(result);
                }),
        );
        self.route_request = Some(handle);
    }

    fn on_route(&mut self, result: Result<Route, ApiError>) {
        if self.state.phase == TrackerPhase::Stopped {
            return;
        }
        match result {
            Ok(route) => {
                self.state.summary = Some(route.summary);
                self.notify_view(TrackerEvent::RouteUpdated {
                    summary: Some(route.summary),
                    path: route.path,
                });
            }
            Err(e) => {
                self.logger.warn(format!("Route unavailable: {}", e));
                self.state.summary = None;
                self.notify_view(TrackerEvent::RouteUpdated {
                    summary: None,
                    path: Vec::new(),
                });
                self.notify_view(TrackerEvent::Notification(KitchenError::RouteUnavailable));
            }
        }
    }

    /// Cancels the timer and every pending request. Runs once; later calls are no-ops.
    fn teardown(&mut self, ctx: &mut Context<Self>) {
        if self.state.phase == TrackerPhase::Stopped {
            return;
        }
        let handles = [
            self.poll_timer.take(),
            self.geocode_request.take(),
            self.location_request.take(),
            self.route_request.take(),
        ];
        for handle in handles.into_iter().flatten() {
            ctx.cancel_future(handle);
        }
        self.state.phase = TrackerPhase::Stopped;
        self.logger
            .info(format!("Stopped tracking order {}", self.order_id));
        self.notify_view(TrackerEvent::Stopped);
    }
}

impl Actor for DeliveryTracker {
    type Context = Context<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        self.logger.info(format!(
            "Locating delivery address '{}'",
            self.delivery_address
        ));
        let geocoder = self.services.geocoder.clone();
        let address = self.delivery_address.clone();
        let handle = ctx.spawn(
            async move { geocoder.geocode(&address).await }
                .into_actor(self)
                .map(|result, act, ctx| act.on_geocoded(result, ctx)),
        );
        self.geocode_request = Some(handle);
    }

    fn stopping(&mut self, ctx: &mut Self::Context) -> Running {
        self.teardown(ctx);
        Running::Stop
    }
}

impl Handler<StopTracking> for DeliveryTracker {
    type Result = ();

    fn handle(&mut self, _msg: StopTracking, ctx: &mut Self::Context) -> Self::Result {
        self.teardown(ctx);
        ctx.stop();
    }
}

impl Handler<GetTrackState> for DeliveryTracker {
    type Result = MessageResult<GetTrackState>;

    fn handle(&mut self, _msg: GetTrackState, _ctx: &mut Self::Context) -> Self::Result {
        MessageResult(self.state.clone())
    }
}
