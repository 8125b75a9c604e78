use actix::Message;
use common::errors::KitchenError;
use common::types::dtos::OrderDTO;
use common::types::order_status::OrderStatus;
use std::collections::BTreeSet;

/// Mensajes que el StatusDialog le envía al UIHandler.
#[derive(Message, Debug, Clone, PartialEq)]
#[rtype(result = "()")]
pub enum DialogEvent {
    /// Order loaded; `options` is empty when the session cannot move it anywhere.
    OptionsReady {
        order: OrderDTO,
        options: BTreeSet<OrderStatus>,
    },
    StatusChanged(OrderDTO),
    /// The selection was refused locally; nothing was sent.
    Rejected(KitchenError),
    Failed(KitchenError),
}

#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct LoadOrder;

#[derive(Message, Debug, Clone)]
#[rtype(result = "Result<OrderDTO, KitchenError>")]
pub struct SubmitStatus {
    pub proposed: OrderStatus,
}
