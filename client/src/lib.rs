pub mod client_actors;
pub mod messages;
