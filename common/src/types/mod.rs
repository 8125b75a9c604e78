pub mod dtos;
pub mod geo;
pub mod order_status;
pub mod role;
