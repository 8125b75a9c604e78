pub mod internal_messages;

pub use internal_messages::*;
