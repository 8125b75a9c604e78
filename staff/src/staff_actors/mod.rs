pub mod status_dialog;
pub mod ui_handler;
