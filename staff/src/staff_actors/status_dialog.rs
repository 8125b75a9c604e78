use crate::messages::{DialogEvent, LoadOrder, SubmitStatus};
use actix::prelude::*;
use common::api::OrdersApi;
use common::errors::{ApiError, KitchenError};
use common::logger::Logger;
use common::session::Session;
use common::transition_guard::{allowed_next_statuses, validate_transition_for};
use common::types::dtos::OrderDTO;
use std::sync::Arc;

/// Actor StatusDialog: cambia el estado de un pedido en nombre de la sesión.
///
/// Selections are checked against the transition table and the session role
/// before anything is sent; on success the order is fetched again so the
/// dialog always shows what the backend stored.
pub struct StatusDialog {
    pub order_id: String,
    pub session: Session,
    /// Último estado conocido del pedido.
    pub order: Option<OrderDTO>,
    api: Arc<dyn OrdersApi>,
    ui: Recipient<DialogEvent>,
    logger: Logger,
}

impl StatusDialog {
    pub fn new(
        order_id: impl Into<String>,
        session: Session,
        api: Arc<dyn OrdersApi>,
        ui: Recipient<DialogEvent>,
    ) -> Self {
        let order_id = order_id.into();
        let logger = Logger::new(format!("Dialog {}", order_id));
        Self {
            order_id,
            session,
            order: None,
            api,
            ui,
            logger,
        }
    }

    fn on_order_loaded(&mut self, result: Result<OrderDTO, ApiError>) {
        match result {
            Ok(order) => {
                let options = allowed_next_statuses(order.status, self.session.role);
                self.logger.info(format!(
                    "Order {} is {}; {} may move it to {:?}",
                    order.order_id, order.status, self.session.role, options
                ));
                self.order = Some(order.clone());
                self.ui.do_send(DialogEvent::OptionsReady { order, options });
            }
            Err(e) => {
                self.logger
                    .error(format!("Could not load order {}: {}", self.order_id, e));
                self.ui
                    .do_send(DialogEvent::Failed(KitchenError::OrderUnavailable(e)));
            }
        }
    }
}

impl Actor for StatusDialog {
    type Context = Context<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        self.logger.info(format!(
            "Dialog opened by {} ({})",
            self.session.display_name, self.session.role
        ));
        ctx.notify(LoadOrder);
    }
}

impl Handler<LoadOrder> for StatusDialog {
    type Result = ();

    fn handle(&mut self, _msg: LoadOrder, ctx: &mut Self::Context) -> Self::Result {
        let api = self.api.clone();
        let order_id = self.order_id.clone();
        ctx.spawn(
            async move { api.fetch_order(&order_id).await }
                .into_actor(self)
                .map(|result, act, _ctx| act.on_order_loaded(result)),
        );
    }
}

impl Handler<SubmitStatus> for StatusDialog {
    type Result = ResponseActFuture<Self, Result<OrderDTO, KitchenError>>;

    fn handle(&mut self, msg: SubmitStatus, _ctx: &mut Self::Context) -> Self::Result {
        let Some(current) = self.order.as_ref().map(|order| order.status) else {
            self.logger.warn("Status submitted before the order was loaded");
            return Box::pin(actix::fut::ready(Err(KitchenError::OrderNotLoaded)));
        };

        if let Err(err) = validate_transition_for(self.session.role, current, msg.proposed) {
            self.logger.warn(format!("{} rejected: {}", self.session.role, err));
            self.ui.do_send(DialogEvent::Rejected(err.clone()));
            return Box::pin(actix::fut::ready(Err(err)));
        }

        self.logger.info(format!(
            "Moving order {} from {} to {}",
            self.order_id, current, msg.proposed
        ));
        let api = self.api.clone();
        let order_id = self.order_id.clone();
        let proposed = msg.proposed;
        Box::pin(
            async move {
                api.update_order_status(&order_id, proposed)
                    .await
                    .map_err(KitchenError::UpdateFailed)?;
                api.fetch_order(&order_id)
                    .await
                    .map_err(KitchenError::UpdateFailed)
            }
            .into_actor(self)
            .map(|result, act, _ctx| {
                match &result {
                    Ok(order) => {
                        act.logger
                            .info(format!("Order {} is now {}", order.order_id, order.status));
                        act.order = Some(order.clone());
                        act.ui.do_send(DialogEvent::StatusChanged(order.clone()));
                    }
                    Err(err) => {
                        act.logger.error(err.to_string());
                        act.ui.do_send(DialogEvent::Failed(err.clone()));
                    }
                }
                result
            }),
        )
    }
}
