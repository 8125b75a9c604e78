use crate::messages::{DialogEvent, SubmitStatus};
use crate::staff_actors::status_dialog::StatusDialog;
use actix::prelude::*;
use colored::*;
use common::errors::KitchenError;
use common::logger::Logger;
use common::types::order_status::OrderStatus;
use std::io::{self, Write};
use tokio::sync::oneshot;

/// What the operator typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Close,
    Status(OrderStatus),
    Invalid,
}

/// Accepts the option number, `0`/`q` to close, or a status name. Names not
/// among the options are passed through so the dialog can reject them.
pub fn parse_choice(input: &str, options: &[OrderStatus]) -> Choice {
    let input = input.trim();
    if input.eq_ignore_ascii_case("q") || input == "0" {
        return Choice::Close;
    }
    if let Ok(num) = input.parse::<usize>() {
        return match options.get(num.wrapping_sub(1)) {
            Some(status) => Choice::Status(*status),
            None => Choice::Invalid,
        };
    }
    input
        .to_lowercase()
        .parse::<OrderStatus>()
        .map(Choice::Status)
        .unwrap_or(Choice::Invalid)
}

/// Actor UIHandler: interfaz humano-sistema del diálogo de estados.
pub struct UIHandler {
    /// Canal de envío hacia el actor `StatusDialog`
    pub dialog: Addr<StatusDialog>,
    /// Opciones ofrecidas la última vez, para volver a preguntar tras un rechazo.
    pub options: Vec<OrderStatus>,
    pub done: Option<oneshot::Sender<()>>,
    pub logger: Logger,
}

impl UIHandler {
    pub fn new(dialog: Addr<StatusDialog>, done: oneshot::Sender<()>) -> Self {
        UIHandler {
            dialog,
            options: Vec::new(),
            done: Some(done),
            logger: Logger::with_color("UI", Color::Magenta),
        }
    }

    fn close(&mut self, ctx: &mut Context<Self>) {
        if let Some(done) = self.done.take() {
            let _ = done.send(());
        }
        ctx.stop();
    }

    fn ask_user_status(&self) -> Choice {
        loop {
            self.logger.info("Select the new status by number (0 to close):");
            for (i, status) in self.options.iter().enumerate() {
                self.logger.info(format!("{}: {}", i + 1, status.label()));
            }
            let _ = io::stdout().flush();

            let mut input = String::new();
            if let Err(e) = io::stdin().read_line(&mut input) {
                self.logger.error(format!(
                    "Error while reading input: {}. Please try again.",
                    e
                ));
                continue;
            }
            // EOF
            if input.is_empty() {
                return Choice::Close;
            }

            match parse_choice(&input, &self.options) {
                Choice::Invalid => {
                    self.logger.warn(
                        "Invalid selection. Enter a number from the list or a status name.",
                    );
                    continue;
                }
                choice => return choice,
            }
        }
    }

    fn prompt(&mut self, ctx: &mut Context<Self>) {
        match self.ask_user_status() {
            Choice::Status(proposed) => self.dialog.do_send(SubmitStatus { proposed }),
            _ => {
                self.logger.info("Dialog closed without changes.");
                self.close(ctx);
            }
        }
    }
}

impl Actor for UIHandler {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        self.logger.info("UIHandler iniciado!");
    }
}

impl Handler<DialogEvent> for UIHandler {
    type Result = ();

    fn handle(&mut self, msg: DialogEvent, ctx: &mut Self::Context) {
        match msg {
            DialogEvent::OptionsReady { order, options } => {
                self.logger.info(format!(
                    "Order {} to '{}' is {}",
                    order.order_id,
                    order.delivery_address,
                    order.status.label().bold()
                ));
                if options.is_empty() {
                    self.logger
                        .warn("You cannot change the status of this order.");
                    self.close(ctx);
                    return;
                }
                self.options = options.into_iter().collect();
                self.prompt(ctx);
            }
            DialogEvent::StatusChanged(order) => {
                self.logger.info(format!(
                    "Order {} is now {}",
                    order.order_id,
                    order.status.label().bold().green()
                ));
                self.close(ctx);
            }
            DialogEvent::Rejected(err) => {
                self.logger.warn(err.to_string());
                self.prompt(ctx);
            }
            DialogEvent::Failed(err @ KitchenError::OrderUnavailable(_)) => {
                self.logger.error(err.to_string());
                self.close(ctx);
            }
            DialogEvent::Failed(err) => {
                self.logger.error(err.to_string());
                self.prompt(ctx);
            }
        }
    }
}
