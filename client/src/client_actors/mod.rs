pub mod delivery_tracker;
pub mod tracking_view;
