pub mod messages;
pub mod staff_actors;
