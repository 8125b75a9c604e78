use crate::client_actors::delivery_tracker::DeliveryTrackState;
use actix::Message;
use common::errors::KitchenError;
use common::types::geo::{Coordinates, DriverIcon, RouteSummary};

/// Lo que el tracker le informa a la vista que lo hospeda.
#[derive(Message, Debug, Clone, PartialEq)]
#[rtype(result = "()")]
pub enum TrackerEvent {
    /// Both markers are on the map; the driver sits at its placeholder position.
    MarkersPlaced {
        home: Coordinates,
        driver: Coordinates,
        icon: DriverIcon,
    },
    DriverMoved {
        position: Coordinates,
        icon: DriverIcon,
    },
    /// `summary` is `None` when no route could be computed.
    RouteUpdated {
        summary: Option<RouteSummary>,
        path: Vec<Coordinates>,
    },
    Notification(KitchenError),
    Stopped,
}

/// Tears the tracker down: cancels the polling timer and in-flight requests.
#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct StopTracking;

#[derive(Message, Debug, Clone)]
#[rtype(result = "DeliveryTrackState")]
pub struct GetTrackState;
